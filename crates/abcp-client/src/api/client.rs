//! Client-tier endpoint groups (search, basket, orders, user, garage,
//! car tree, forms, articles)

use abcp_core::payload::{Composite, Pairs, Payload};
use abcp_core::{fields, methods, ParamError};
use serde_json::Value;

use crate::client::Abcp;
use crate::error::AbcpError;
use crate::transport::HttpTransport;

/// Entry point for the client-tier API groups
pub struct Client<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<'a, T: HttpTransport> Client<'a, T> {
    pub(crate) fn new(base: &'a Abcp<T>) -> Self {
        Self { base }
    }

    pub fn search(&self) -> Search<'a, T> {
        Search { base: self.base }
    }

    pub fn basket(&self) -> Basket<'a, T> {
        Basket { base: self.base }
    }

    pub fn orders(&self) -> Orders<'a, T> {
        Orders { base: self.base }
    }

    pub fn user(&self) -> User<'a, T> {
        User { base: self.base }
    }

    pub fn garage(&self) -> Garage<'a, T> {
        Garage { base: self.base }
    }

    pub fn cartree(&self) -> CarTree<'a, T> {
        CarTree { base: self.base }
    }

    pub fn form(&self) -> Form<'a, T> {
        Form { base: self.base }
    }

    pub fn articles(&self) -> Articles<'a, T> {
        Articles { base: self.base }
    }
}

pub struct Search<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Search<'_, T> {
    /// Brands stocking the given article number
    pub async fn brands(
        &self,
        number: &str,
        use_online_stocks: Option<bool>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("number", number)
            .field_opt("use_online_stocks", use_online_stocks.map(fields::bool_flag))
            .encode();
        self.base
            .request(methods::client::search::BRANDS, payload, false)
            .await
    }

    /// Offers for one brand + number
    pub async fn articles(
        &self,
        number: &str,
        brand: &str,
        use_online_stocks: Option<bool>,
        disable_online_filtering: Option<bool>,
        with_out_analogs: Option<bool>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("number", number)
            .field("brand", brand)
            .field_opt("use_online_stocks", use_online_stocks.map(fields::bool_flag))
            .field_opt(
                "disable_online_filtering",
                disable_online_filtering.map(fields::bool_flag),
            )
            .field_opt("with_out_analogs", with_out_analogs.map(fields::bool_flag))
            .encode();
        self.base
            .request(methods::client::search::ARTICLES, payload, false)
            .await
    }

    /// Batch search: a list of {brand, number} rows
    pub async fn batch(&self, search: Vec<Pairs>) -> Result<Value, AbcpError> {
        if search.is_empty() {
            return Err(ParamError::Required("search".into()).into());
        }
        let payload = Payload::new()
            .composite(Composite::Search(search))
            .encode();
        self.base
            .request(methods::client::search::BATCH, payload, true)
            .await
    }

    /// The account's recent search history
    pub async fn history(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::search::HISTORY, Vec::new(), false)
            .await
    }

    /// Autocomplete tips for a partial number
    pub async fn tips(&self, number: &str) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("number", number).encode();
        self.base
            .request(methods::client::search::TIPS, payload, false)
            .await
    }

    /// Frequently-bought-together advices for one position
    pub async fn advices(
        &self,
        brand: &str,
        number: &str,
        limit: Option<u32>,
    ) -> Result<Value, AbcpError> {
        fields::check_limit(limit)?;
        let payload = Payload::new()
            .field("brand", brand)
            .field("number", number)
            .field_opt("limit", limit)
            .encode();
        self.base
            .request(methods::client::search::ADVICES, payload, false)
            .await
    }

    /// Advices for several positions at once. Unlike `search/batch`, this
    /// endpoint takes its rows as one JSON array under the `articles` key.
    pub async fn advices_batch(
        &self,
        articles: Vec<Pairs>,
        limit: Option<u32>,
    ) -> Result<Value, AbcpError> {
        if articles.is_empty() {
            return Err(ParamError::Required("articles".into()).into());
        }
        fields::check_limit(limit)?;
        let rows: Vec<Value> = articles
            .into_iter()
            .map(|row| {
                Value::Object(
                    row.into_iter()
                        .map(|(k, v)| (k, Value::String(v)))
                        .collect(),
                )
            })
            .collect();
        let payload = Payload::new()
            .field("articles", Value::Array(rows))
            .field_opt("limit", limit)
            .encode();
        self.base
            .request(methods::client::search::ADVICES_BATCH, payload, true)
            .await
    }
}

pub struct Basket<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Basket<'_, T> {
    /// List the account's baskets (multibasket mode)
    pub async fn baskets(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::basket::MULTIBASKET, Vec::new(), false)
            .await
    }

    /// Add positions to the basket
    pub async fn add(
        &self,
        positions: Vec<Pairs>,
        basket_id: Option<u64>,
    ) -> Result<Value, AbcpError> {
        if positions.is_empty() {
            return Err(ParamError::Required("positions".into()).into());
        }
        let payload = Payload::new()
            .field_opt("basket_id", basket_id)
            .composite(Composite::BasketPositions(positions))
            .encode();
        self.base
            .request(methods::client::basket::ADD, payload, true)
            .await
    }

    pub async fn content(&self, basket_id: Option<u64>) -> Result<Value, AbcpError> {
        let payload = Payload::new().field_opt("basket_id", basket_id).encode();
        self.base
            .request(methods::client::basket::CONTENT, payload, false)
            .await
    }

    pub async fn clear(&self, basket_id: Option<u64>) -> Result<Value, AbcpError> {
        let payload = Payload::new().field_opt("basket_id", basket_id).encode();
        self.base
            .request(methods::client::basket::CLEAR, payload, true)
            .await
    }

    pub async fn options(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::basket::OPTIONS, Vec::new(), false)
            .await
    }

    pub async fn payment_methods(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::basket::PAYMENT_METHODS, Vec::new(), false)
            .await
    }

    pub async fn shipment_methods(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::basket::SHIPMENT_METHODS, Vec::new(), false)
            .await
    }

    pub async fn shipment_offices(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::basket::SHIPMENT_OFFICES, Vec::new(), false)
            .await
    }

    pub async fn shipment_addresses(&self) -> Result<Value, AbcpError> {
        self.base
            .request(
                methods::client::basket::SHIPMENT_ADDRESSES,
                Vec::new(),
                false,
            )
            .await
    }

    /// Possible shipment dates for the chosen method
    pub async fn shipment_dates(
        &self,
        shipment_method_id: Option<u64>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field_opt("shipment_method_id", shipment_method_id)
            .encode();
        self.base
            .request(methods::client::basket::SHIPMENT_DATES, payload, false)
            .await
    }

    /// Turn the basket into an order
    pub async fn order(&self, order: BasketOrder) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field_opt("payment_method", order.payment_method)
            .field_opt("shipment_method", order.shipment_method)
            .field_opt("shipment_address", order.shipment_address)
            .field_opt("shipment_office", order.shipment_office)
            .field_opt("shipment_date", order.shipment_date)
            .field_opt("comment", order.comment)
            .field_opt("basket_id", order.basket_id)
            .encode();
        self.base
            .request(methods::client::basket::ORDER, payload, true)
            .await
    }
}

/// Basket checkout parameters (`basket/order`)
#[derive(Debug, Default, Clone)]
pub struct BasketOrder {
    pub payment_method: Option<String>,
    pub shipment_method: Option<u64>,
    pub shipment_address: Option<u64>,
    pub shipment_office: Option<u64>,
    pub shipment_date: Option<String>,
    pub comment: Option<String>,
    pub basket_id: Option<u64>,
}

pub struct Orders<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Orders<'_, T> {
    /// Instant order, bypassing the basket
    pub async fn instant(
        &self,
        positions: Vec<Pairs>,
        order_params: Option<Pairs>,
    ) -> Result<Value, AbcpError> {
        if positions.is_empty() {
            return Err(ParamError::Required("positions".into()).into());
        }
        let payload = Payload::new()
            .composite_opt(order_params.map(Composite::OrderParams))
            .composite(Composite::OnlinePositions(positions))
            .encode();
        self.base
            .request(methods::client::orders::INSTANT, payload, true)
            .await
    }

    pub async fn list(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AbcpError> {
        fields::check_limit(limit)?;
        let payload = Payload::new()
            .field_opt("skip", skip)
            .field_opt("limit", limit)
            .encode();
        self.base
            .request(methods::client::orders::LIST, payload, false)
            .await
    }

    /// Fetch specific orders by number
    pub async fn get(&self, orders: Vec<u64>) -> Result<Value, AbcpError> {
        if orders.is_empty() {
            return Err(ParamError::Required("orders".into()).into());
        }
        let payload = Payload::new().list("orders", &orders).encode();
        self.base
            .request(methods::client::orders::GET, payload, false)
            .await
    }

    /// Request cancellation of one order position
    pub async fn cancel_position(&self, position_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("position_id", position_id).encode();
        self.base
            .request(methods::client::orders::CANCEL_POSITION, payload, true)
            .await
    }
}

pub struct User<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> User<'_, T> {
    /// Register a retail user
    pub async fn register(
        &self,
        name: &str,
        mobile: Option<&str>,
        email: Option<&str>,
    ) -> Result<Value, AbcpError> {
        if mobile.is_none() && email.is_none() {
            return Err(ParamError::OneOfRequired("'mobile', 'email'".into()).into());
        }
        let payload = Payload::new()
            .field("name", name)
            .field_opt("mobile", mobile)
            .field_opt("email", email)
            .encode();
        self.base
            .request(methods::client::user::REGISTER, payload, true)
            .await
    }

    pub async fn activation(&self, user_code: &str) -> Result<Value, AbcpError> {
        fields::check_numeric("user_code", user_code)?;
        let payload = Payload::new().field("user_code", user_code).encode();
        self.base
            .request(methods::client::user::ACTIVATION, payload, true)
            .await
    }

    pub async fn info(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::user::INFO, Vec::new(), false)
            .await
    }

    /// Password restore by email or mobile
    pub async fn restore(&self, email_or_mobile: &str) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("email_or_mobile", email_or_mobile)
            .encode();
        self.base
            .request(methods::client::user::RESTORE, payload, true)
            .await
    }
}

pub struct Garage<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Garage<'_, T> {
    pub async fn list(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::garage::LIST, Vec::new(), false)
            .await
    }

    pub async fn car(&self, car_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("car_id", car_id).encode();
        self.base
            .request(methods::client::garage::CAR, payload, false)
            .await
    }

    pub async fn add(&self, car: GarageCar) -> Result<Value, AbcpError> {
        if car.name.is_none() && car.vin.is_none() {
            return Err(ParamError::OneOfRequired("'name', 'vin'".into()).into());
        }
        let payload = garage_car_payload(Payload::new(), &car).encode();
        self.base
            .request(methods::client::garage::ADD, payload, true)
            .await
    }

    pub async fn update(&self, car_id: u64, car: GarageCar) -> Result<Value, AbcpError> {
        let payload = garage_car_payload(Payload::new().field("car_id", car_id), &car).encode();
        self.base
            .request(methods::client::garage::UPDATE, payload, true)
            .await
    }

    pub async fn delete(&self, car_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("car_id", car_id).encode();
        self.base
            .request(methods::client::garage::DELETE, payload, true)
            .await
    }
}

/// Garage car description
#[derive(Debug, Default, Clone)]
pub struct GarageCar {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub year: Option<u16>,
    pub vin: Option<String>,
    pub frame: Option<String>,
    pub mileage: Option<u32>,
    pub manufacturer_id: Option<u64>,
    pub model_id: Option<u64>,
    pub modification_id: Option<u64>,
}

fn garage_car_payload(payload: Payload, car: &GarageCar) -> Payload {
    payload
        .field_opt("name", car.name.as_deref())
        .field_opt("comment", car.comment.as_deref())
        .field_opt("year", car.year)
        .field_opt("vin", car.vin.as_deref())
        .field_opt("frame", car.frame.as_deref())
        .field_opt("mileage", car.mileage)
        .field_opt("manufacturer_id", car.manufacturer_id)
        .field_opt("model_id", car.model_id)
        .field_opt("modification_id", car.modification_id)
}

pub struct CarTree<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> CarTree<'_, T> {
    pub async fn years(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::cartree::YEARS, Vec::new(), false)
            .await
    }

    pub async fn manufacturers(&self, year: Option<u16>) -> Result<Value, AbcpError> {
        let payload = Payload::new().field_opt("year", year).encode();
        self.base
            .request(methods::client::cartree::MANUFACTURERS, payload, false)
            .await
    }

    pub async fn models(
        &self,
        manufacturer_id: u64,
        year: Option<u16>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("manufacturer_id", manufacturer_id)
            .field_opt("year", year)
            .encode();
        self.base
            .request(methods::client::cartree::MODELS, payload, false)
            .await
    }

    pub async fn modifications(
        &self,
        manufacturer_id: u64,
        model_id: u64,
        year: Option<u16>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("manufacturer_id", manufacturer_id)
            .field("model_id", model_id)
            .field_opt("year", year)
            .encode();
        self.base
            .request(methods::client::cartree::MODIFICATIONS, payload, false)
            .await
    }
}

pub struct Form<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Form<'_, T> {
    pub async fn fields(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::form::FIELDS, Vec::new(), false)
            .await
    }
}

pub struct Articles<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Articles<'_, T> {
    pub async fn brands(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::client::articles::BRANDS, Vec::new(), false)
            .await
    }

    /// Article card info. `cross_image` and `with_original` go out on the
    /// wire as 0/1 flags.
    pub async fn info(
        &self,
        brand: &str,
        number: &str,
        format: Option<&str>,
        cross_image: Option<bool>,
        with_original: Option<bool>,
    ) -> Result<Value, AbcpError> {
        if let Some(format) = format {
            // Documented as a combination of the b/n/p/c/i letters.
            if format.is_empty() || !format.chars().all(|c| "bnpci".contains(c)) {
                return Err(ParamError::invalid(
                    "format",
                    "must be a combination of the letters 'b', 'n', 'p', 'c', 'i'",
                )
                .into());
            }
        }
        let payload = Payload::new()
            .field("brand", brand)
            .field("number", number)
            .field_opt("format", format)
            .field_opt("cross_image", cross_image.map(fields::bool_flag))
            .field_opt("with_original", with_original.map(fields::bool_flag))
            .encode();
        self.base
            .request(methods::client::articles::INFO, payload, false)
            .await
    }
}
