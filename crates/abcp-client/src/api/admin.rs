//! Administrative (`cp/`) endpoint groups
//!
//! All of these paths require admin credentials; the dispatcher rejects
//! them client-side otherwise.

use abcp_core::payload::{Composite, Pairs, Payload, PriceUpRow};
use abcp_core::{datetime, fields, methods, ParamError};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::client::Abcp;
use crate::error::AbcpError;
use crate::transport::HttpTransport;

/// Entry point for the administrative API groups
pub struct Admin<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<'a, T: HttpTransport> Admin<'a, T> {
    pub(crate) fn new(base: &'a Abcp<T>) -> Self {
        Self { base }
    }

    pub fn orders(&self) -> Orders<'a, T> {
        Orders { base: self.base }
    }

    pub fn finance(&self) -> Finance<'a, T> {
        Finance { base: self.base }
    }

    pub fn users(&self) -> Users<'a, T> {
        Users { base: self.base }
    }

    pub fn staff(&self) -> Staff<'a, T> {
        Staff { base: self.base }
    }

    pub fn statuses(&self) -> Statuses<'a, T> {
        Statuses { base: self.base }
    }

    pub fn articles(&self) -> Articles<'a, T> {
        Articles { base: self.base }
    }

    pub fn distributors(&self) -> Distributors<'a, T> {
        Distributors { base: self.base }
    }
}

/// Order list filter (`cp/orders`)
#[derive(Debug, Default, Clone)]
pub struct OrdersListQuery {
    pub date_created_start: Option<NaiveDateTime>,
    pub date_created_end: Option<NaiveDateTime>,
    pub date_updated_start: Option<NaiveDateTime>,
    pub date_updated_end: Option<NaiveDateTime>,
    pub numbers: Option<Vec<String>>,
    pub internal_numbers: Option<Vec<String>>,
    pub status_code: Option<Vec<String>>,
    pub office_id: Option<u64>,
    pub distributor_order_id: Option<u64>,
    /// 0: no cancel request, 1: requested, 2: rejected by a manager
    pub is_canceled: Option<u8>,
    pub distributor_id: Option<Vec<u64>>,
    pub user_id: Option<u64>,
    pub with_deleted: Option<bool>,
    pub format: Option<String>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub desc: Option<bool>,
}

/// Order create/edit parameters (`cp/order`, POST)
///
/// When editing, only the positions and fields that change need to be
/// supplied. `note` and `del_note` are mutually exclusive.
#[derive(Debug, Default, Clone)]
pub struct SaveOrder {
    pub number: Option<u64>,
    pub internal_number: Option<String>,
    pub user_id: Option<u64>,
    pub date: Option<NaiveDateTime>,
    pub comment: Option<String>,
    pub order_positions: Option<Vec<Pairs>>,
    pub delivery_type_id: Option<u64>,
    pub delivery_office_id: Option<u64>,
    pub basket_id: Option<u64>,
    pub guest_order_name: Option<String>,
    pub guest_order_mobile: Option<String>,
    pub guest_order_email: Option<String>,
    pub shipment_date: Option<NaiveDateTime>,
    pub delivery_cost: Option<String>,
    pub delivery_address_id: Option<u64>,
    pub delivery_address: Option<String>,
    pub manager_id: Option<u64>,
    pub client_order_number: Option<String>,
    pub note: Option<String>,
    pub del_note: Option<String>,
}

pub struct Orders<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Orders<'_, T> {
    /// List orders matching the filter, positions included
    pub async fn list(&self, query: OrdersListQuery) -> Result<Value, AbcpError> {
        if let Some(format) = query.format.as_deref() {
            fields::check_in_set(
                "format",
                format,
                &["additional", "short", "count", "status_only", "p"],
            )?;
        }
        if let Some(is_canceled) = query.is_canceled {
            fields::check_range("is_canceled", i64::from(is_canceled), 0, 2)?;
        }
        fields::check_limit(query.limit)?;

        let payload = Payload::new()
            .field_opt(
                "date_created_start",
                query.date_created_start.map(datetime::format_cp),
            )
            .field_opt(
                "date_created_end",
                query.date_created_end.map(datetime::format_cp),
            )
            .field_opt(
                "date_updated_start",
                query.date_updated_start.map(datetime::format_cp),
            )
            .field_opt(
                "date_updated_end",
                query.date_updated_end.map(datetime::format_cp),
            )
            .list_opt("numbers", query.numbers)
            .list_opt("internal_numbers", query.internal_numbers)
            .list_opt("status_code", query.status_code)
            .field_opt("office_id", query.office_id)
            .field_opt("distributor_order_id", query.distributor_order_id)
            .field_opt("is_canceled", query.is_canceled)
            .list_opt("distributor_id", query.distributor_id)
            .field_opt("user_id", query.user_id)
            .field_opt("with_deleted", query.with_deleted.map(fields::bool_str))
            .field_opt("format", query.format)
            .field_opt("limit", query.limit)
            .field_opt("skip", query.skip)
            .field_opt("desc", query.desc.map(fields::bool_str))
            .encode();
        self.base
            .request(methods::admin::orders::LIST, payload, false)
            .await
    }

    /// Fetch one order by online or internal number
    pub async fn get(
        &self,
        number: Option<u64>,
        internal_number: Option<&str>,
        with_deleted: Option<bool>,
        format: Option<&str>,
    ) -> Result<Value, AbcpError> {
        if number.is_none() && internal_number.is_none() {
            return Err(ParamError::OneOfRequired("'number', 'internal_number'".into()).into());
        }
        let payload = Payload::new()
            .field_opt("number", number)
            .field_opt("internal_number", internal_number)
            .field_opt("with_deleted", with_deleted.map(fields::bool_str))
            .field_opt("format", format)
            .encode();
        self.base
            .request(methods::admin::orders::GET, payload, false)
            .await
    }

    /// Status change history of one order position
    pub async fn status_history(&self, position_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("position_id", position_id).encode();
        self.base
            .request(methods::admin::orders::STATUS_HISTORY, payload, false)
            .await
    }

    /// Create a new order or edit an existing one
    pub async fn save(&self, order: SaveOrder) -> Result<Value, AbcpError> {
        if order.note.is_some() && order.del_note.is_some() {
            return Err(
                ParamError::MutuallyExclusive("note".into(), "del_note".into()).into(),
            );
        }
        let payload = Payload::new()
            .field_opt("number", order.number)
            .field_opt("internal_number", order.internal_number)
            .field_opt("user_id", order.user_id)
            .field_opt("date", order.date.map(datetime::format_cp))
            .field_opt("comment", order.comment)
            .field_opt("delivery_type_id", order.delivery_type_id)
            .field_opt("delivery_office_id", order.delivery_office_id)
            .field_opt("basket_id", order.basket_id)
            .field_opt("guest_order_name", order.guest_order_name)
            .field_opt("guest_order_mobile", order.guest_order_mobile)
            .field_opt("guest_order_email", order.guest_order_email)
            .field_opt("shipment_date", order.shipment_date.map(datetime::format_cp))
            .field_opt("delivery_cost", order.delivery_cost)
            .field_opt("delivery_address_id", order.delivery_address_id)
            .field_opt("delivery_address", order.delivery_address)
            .field_opt("manager_id", order.manager_id)
            .field_opt("client_order_number", order.client_order_number)
            .composite_opt(order.order_positions.map(Composite::OrderPositions))
            .composite_opt(order.note.map(Composite::Note))
            .composite_opt(order.del_note.map(Composite::DelNote))
            .encode_order();
        self.base
            .request(methods::admin::orders::SAVE, payload, true)
            .await
    }

    /// Place an online order from existing basket positions
    pub async fn online(
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
            .request(methods::admin::orders::ONLINE, payload, true)
            .await
    }
}

/// Payment list filter (`cp/finance/payments`)
#[derive(Debug, Default, Clone)]
pub struct PaymentsQuery {
    pub payment_number: Option<String>,
    pub date_start: Option<NaiveDateTime>,
    pub date_end: Option<NaiveDateTime>,
    pub user_id: Option<u64>,
    pub payment_type: Option<String>,
}

/// One payment to register (`cp/finance/payments`, POST)
#[derive(Debug, Default, Clone)]
pub struct NewPayment {
    pub user_id: Option<u64>,
    pub amount: Option<String>,
    pub payment_type_id: Option<u64>,
    pub number: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub comment: Option<String>,
    /// Link the payment to open orders right away
    pub link_payments: Option<bool>,
}

pub struct Finance<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Finance<'_, T> {
    /// Overwrite a user's balance
    pub async fn update_balance(
        &self,
        user_id: u64,
        balance: &str,
        in_stock_balance: Option<&str>,
    ) -> Result<Value, AbcpError> {
        fields::check_numeric("user_id", &user_id.to_string())?;
        let payload = Payload::new()
            .field("user_id", user_id)
            .field("balance", balance)
            .field_opt("in_stock_balance", in_stock_balance)
            .encode();
        self.base
            .request(methods::admin::finance::UPDATE_BALANCE, payload, true)
            .await
    }

    /// Overwrite a user's credit limit
    pub async fn update_credit_limit(
        &self,
        user_id: u64,
        credit_limit: &str,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("user_id", user_id)
            .field("credit_limit", credit_limit)
            .encode();
        self.base
            .request(methods::admin::finance::UPDATE_CREDIT_LIMIT, payload, true)
            .await
    }

    /// Update finance info fields on a user
    pub async fn update_info(
        &self,
        user_id: u64,
        overdraft: Option<&str>,
        payment_delay: Option<u32>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("user_id", user_id)
            .field_opt("overdraft", overdraft)
            .field_opt("payment_delay", payment_delay)
            .encode();
        self.base
            .request(methods::admin::finance::UPDATE_INFO, payload, true)
            .await
    }

    /// List payments matching the filter
    pub async fn payments(&self, query: PaymentsQuery) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field_opt("payment_number", query.payment_number)
            .field_opt("date_start", query.date_start.map(datetime::format_cp))
            .field_opt("date_end", query.date_end.map(datetime::format_cp))
            .field_opt("user_id", query.user_id)
            .field_opt("payment_type", query.payment_type)
            .encode_filter();
        self.base
            .request(methods::admin::finance::PAYMENTS, payload, false)
            .await
    }

    /// List payment-to-order links
    pub async fn payment_links(
        &self,
        payment_id: Option<u64>,
        order_id: Option<u64>,
    ) -> Result<Value, AbcpError> {
        if payment_id.is_none() && order_id.is_none() {
            return Err(ParamError::OneOfRequired("'payment_id', 'order_id'".into()).into());
        }
        let payload = Payload::new()
            .field_opt("payment_id", payment_id)
            .field_opt("order_id", order_id)
            .encode();
        self.base
            .request(methods::admin::finance::PAYMENT_LINKS, payload, false)
            .await
    }

    /// List online payments
    pub async fn online_payments(
        &self,
        date_start: Option<NaiveDateTime>,
        date_end: Option<NaiveDateTime>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field_opt("date_start", date_start.map(datetime::format_cp))
            .field_opt("date_end", date_end.map(datetime::format_cp))
            .encode();
        self.base
            .request(methods::admin::finance::ONLINE_PAYMENTS, payload, false)
            .await
    }

    /// Register a single payment
    pub async fn add_payment(&self, payment: NewPayment) -> Result<Value, AbcpError> {
        if payment.user_id.is_none() || payment.amount.is_none() {
            return Err(ParamError::Required("'user_id' and 'amount'".into()).into());
        }
        let payload = Payload::new()
            .field_opt("user_id", payment.user_id)
            .field_opt("amount", payment.amount)
            .field_opt("payment_type_id", payment.payment_type_id)
            .field_opt("number", payment.number)
            .field_opt("date", payment.date.map(datetime::format_cp))
            .field_opt("comment", payment.comment)
            .field_opt("link_payments", payment.link_payments.map(fields::bool_flag))
            .encode_payment();
        self.base
            .request(methods::admin::finance::ADD_PAYMENTS, payload, true)
            .await
    }

    /// Register several payments in one call
    pub async fn add_payments(&self, payments: Vec<Pairs>) -> Result<Value, AbcpError> {
        if payments.is_empty() {
            return Err(ParamError::Required("payments".into()).into());
        }
        let payload = Payload::new()
            .composite(Composite::Payments(payments))
            .encode();
        self.base
            .request(methods::admin::finance::ADD_PAYMENTS, payload, true)
            .await
    }

    /// Unlink a payment from an order
    pub async fn delete_payment_link(&self, link_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("link_id", link_id).encode();
        self.base
            .request(methods::admin::finance::DELETE_PAYMENT_LINK, payload, true)
            .await
    }

    /// Link an existing payment to an order
    pub async fn link_existing_payment(
        &self,
        payment_id: u64,
        order_id: u64,
        amount: Option<&str>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("payment_id", payment_id)
            .field("order_id", order_id)
            .field_opt("amount", amount)
            .encode();
        self.base
            .request(
                methods::admin::finance::LINK_EXISTING_PAYMENT,
                payload,
                true,
            )
            .await
    }

    /// Refund a payment, fully or partially
    pub async fn refund_payment(
        &self,
        payment_id: u64,
        amount: Option<&str>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("payment_id", payment_id)
            .field_opt("amount", amount)
            .encode();
        self.base
            .request(methods::admin::finance::REFUND_PAYMENT, payload, true)
            .await
    }

    /// Delete a payment
    pub async fn delete_payment(&self, payment_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("payment_id", payment_id).encode();
        self.base
            .request(methods::admin::finance::DELETE_PAYMENT, payload, true)
            .await
    }
}

/// User list filter (`cp/users`)
#[derive(Debug, Default, Clone)]
pub struct UsersQuery {
    pub date_registred_start: Option<NaiveDateTime>,
    pub date_registred_end: Option<NaiveDateTime>,
    pub date_updated_start: Option<NaiveDateTime>,
    pub date_updated_end: Option<NaiveDateTime>,
    pub customers_ids: Option<Vec<u64>>,
    pub market_type: Option<u8>,
    pub office_id: Option<u64>,
    pub manager_id: Option<u64>,
    pub email: Option<String>,
    pub safe_mode: Option<bool>,
}

/// New user registration (`cp/user/new`)
#[derive(Debug, Default, Clone)]
pub struct NewUser {
    /// 1: retail, 2: wholesale
    pub market_type: u8,
    pub name: String,
    pub password: Option<String>,
    pub surname: Option<String>,
    pub second_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub office_id: Option<u64>,
    pub profile_id: Option<u64>,
}

/// Profile create/edit (`cp/users/profile`)
///
/// At least one optional field must be set.
#[derive(Debug, Default, Clone)]
pub struct EditProfile {
    pub profile_id: Option<u64>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub comment: Option<String>,
    pub price_up: Option<String>,
    pub payment_methods: Option<String>,
    pub matrix_price_ups: Option<Vec<PriceUpRow>>,
    pub distributors_price_ups: Option<Vec<PriceUpRow>>,
}

/// User edit (`cp/user`); only set the fields that change
#[derive(Debug, Default, Clone)]
pub struct EditUser {
    pub user_id: u64,
    pub business: Option<u8>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub second_name: Option<String>,
    pub surname: Option<String>,
    pub password: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub city: Option<String>,
    pub mobile: Option<String>,
    pub enable_sms: Option<bool>,
    pub enable_whatsapp: Option<bool>,
    pub state: Option<i32>,
    pub profile_id: Option<u64>,
    pub organization_name: Option<String>,
    pub inn: Option<String>,
    pub kpp: Option<String>,
    pub comment: Option<String>,
    pub manager_comment: Option<String>,
    pub manager_id: Option<u64>,
    pub user_code: Option<String>,
    pub safe_mode: Option<bool>,
    pub pickup_state: Option<bool>,
}

pub struct Users<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Users<'_, T> {
    /// List users matching the filter
    pub async fn list(&self, query: UsersQuery) -> Result<Value, AbcpError> {
        if let Some(market_type) = query.market_type {
            fields::check_range("market_type", i64::from(market_type), 1, 2)?;
        }
        let payload = Payload::new()
            .field_opt(
                "date_registred_start",
                query.date_registred_start.map(datetime::format_cp),
            )
            .field_opt(
                "date_registred_end",
                query.date_registred_end.map(datetime::format_cp),
            )
            .field_opt(
                "date_updated_start",
                query.date_updated_start.map(datetime::format_cp),
            )
            .field_opt(
                "date_updated_end",
                query.date_updated_end.map(datetime::format_cp),
            )
            .list_opt("customers_ids", query.customers_ids)
            .field_opt("market_type", query.market_type)
            .field_opt("office_id", query.office_id)
            .field_opt("manager_id", query.manager_id)
            .field_opt("email", query.email)
            .field_opt("safe_mode", query.safe_mode.map(fields::bool_flag))
            .encode_filter();
        self.base
            .request(methods::admin::users::LIST, payload, false)
            .await
    }

    /// Register a user
    pub async fn create(&self, user: NewUser) -> Result<Value, AbcpError> {
        fields::check_range("market_type", i64::from(user.market_type), 1, 2)?;
        if user.name.is_empty() {
            return Err(ParamError::Required("name".into()).into());
        }
        let payload = Payload::new()
            .field("market_type", user.market_type)
            .field("name", user.name)
            .field_opt("password", user.password)
            .field_opt("surname", user.surname)
            .field_opt("second_name", user.second_name)
            .field_opt("mobile", user.mobile)
            .field_opt("email", user.email)
            .field_opt("city", user.city)
            .field_opt("office_id", user.office_id)
            .field_opt("profile_id", user.profile_id)
            .encode();
        self.base
            .request(methods::admin::users::CREATE, payload, true)
            .await
    }

    /// List price profiles
    pub async fn profiles(&self, format: Option<&str>) -> Result<Value, AbcpError> {
        if let Some(format) = format {
            fields::check_in_set("format", format, &["brands", "distributors"])?;
        }
        let payload = Payload::new().field_opt("format", format).encode();
        self.base
            .request(methods::admin::users::PROFILES, payload, false)
            .await
    }

    /// Edit a price profile (or create one when `profile_id` is absent)
    pub async fn edit_profile(&self, profile: EditProfile) -> Result<Value, AbcpError> {
        let any_set = profile.code.is_some()
            || profile.name.is_some()
            || profile.comment.is_some()
            || profile.price_up.is_some()
            || profile.payment_methods.is_some()
            || profile.matrix_price_ups.is_some()
            || profile.distributors_price_ups.is_some();
        if !any_set {
            return Err(ParamError::OneOfRequired(
                "'code', 'name', 'comment', 'price_up', 'payment_methods', \
                 'matrix_price_ups', 'distributors_price_ups'"
                    .into(),
            )
            .into());
        }
        let payload = Payload::new()
            .field_opt("profile_id", profile.profile_id)
            .field_opt("code", profile.code)
            .field_opt("name", profile.name)
            .field_opt("comment", profile.comment)
            .field_opt("price_up", profile.price_up)
            .field_opt("payment_methods", profile.payment_methods)
            .composite_opt(profile.matrix_price_ups.map(Composite::MatrixPriceUps))
            .composite_opt(
                profile
                    .distributors_price_ups
                    .map(Composite::DistributorsPriceUps),
            )
            .encode();
        self.base
            .request(methods::admin::users::EDIT_PROFILE, payload, true)
            .await
    }

    /// Edit user data
    pub async fn edit(&self, user: EditUser) -> Result<Value, AbcpError> {
        if let Some(business) = user.business {
            fields::check_range("business", i64::from(business), 1, 6)?;
        }
        let payload = Payload::new()
            .field("user_id", user.user_id)
            .field_opt("business", user.business)
            .field_opt("email", user.email)
            .field_opt("name", user.name)
            .field_opt("second_name", user.second_name)
            .field_opt("surname", user.surname)
            .field_opt("password", user.password)
            .field_opt("birth_date", user.birth_date.map(datetime::format_cp_date))
            .field_opt("city", user.city)
            .field_opt("mobile", user.mobile)
            .field_opt("enable_sms", user.enable_sms.map(fields::bool_str))
            .field_opt("enable_whatsapp", user.enable_whatsapp.map(fields::bool_str))
            .field_opt("state", user.state)
            .field_opt("profile_id", user.profile_id)
            .field_opt("organization_name", user.organization_name)
            .field_opt("inn", user.inn)
            .field_opt("kpp", user.kpp)
            .field_opt("comment", user.comment)
            .field_opt("manager_comment", user.manager_comment)
            .field_opt("manager_id", user.manager_id)
            .field_opt("user_code", user.user_code)
            .field_opt("safe_mode", user.safe_mode.map(fields::bool_flag))
            .field_opt("pickup_state", user.pickup_state.map(fields::bool_flag))
            .encode();
        self.base
            .request(methods::admin::users::EDIT, payload, true)
            .await
    }

    /// Shipment addresses of one user
    pub async fn shipment_addresses(&self, user_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("user_id", user_id).encode();
        self.base
            .request(methods::admin::users::SHIPMENT_ADDRESSES, payload, false)
            .await
    }

    /// Toggle SMS notification settings for a user
    pub async fn sms_settings(&self, user_id: u64, enable: bool) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("user_id", user_id)
            .field("enable", fields::bool_flag(enable))
            .encode();
        self.base
            .request(methods::admin::users::SMS_SETTINGS, payload, true)
            .await
    }
}

pub struct Staff<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Staff<'_, T> {
    pub async fn list(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::admin::staff::LIST, Vec::new(), false)
            .await
    }

    /// Update one manager's record
    pub async fn update(
        &self,
        manager_id: u64,
        name: Option<&str>,
        comment: Option<&str>,
        office_id: Option<u64>,
        enabled: Option<bool>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("manager_id", manager_id)
            .field_opt("name", name)
            .field_opt("comment", comment)
            .field_opt("office_id", office_id)
            .field_opt("enabled", enabled.map(fields::bool_flag))
            .encode();
        self.base
            .request(methods::admin::staff::UPDATE, payload, true)
            .await
    }
}

pub struct Statuses<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Statuses<'_, T> {
    pub async fn list(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::admin::statuses::LIST, Vec::new(), false)
            .await
    }
}

pub struct Articles<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Articles<'_, T> {
    pub async fn brands(&self, group_id: Option<u64>) -> Result<Value, AbcpError> {
        let payload = Payload::new().field_opt("group_id", group_id).encode();
        self.base
            .request(methods::admin::articles::BRANDS, payload, false)
            .await
    }

    pub async fn brands_group(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::admin::articles::BRANDS_GROUP, Vec::new(), false)
            .await
    }
}

pub struct Distributors<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Distributors<'_, T> {
    pub async fn list(&self, distributor_id: Option<u64>) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field_opt("distributor_id", distributor_id)
            .encode();
        self.base
            .request(methods::admin::distributors::LIST, payload, false)
            .await
    }

    /// Enable or disable a distributor
    pub async fn edit_status(&self, distributor_id: u64, status: u8) -> Result<Value, AbcpError> {
        fields::check_range("status", i64::from(status), 0, 1)?;
        let payload = Payload::new()
            .field("distributor_id", distributor_id)
            .field("status", status)
            .encode();
        self.base
            .request(methods::admin::distributors::EDIT_STATUS, payload, true)
            .await
    }

    /// Supplier routes of one distributor
    pub async fn routes(&self, distributor_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("distributor_id", distributor_id)
            .encode();
        self.base
            .request(methods::admin::distributors::ROUTES, payload, false)
            .await
    }

    /// Update route parameters
    pub async fn update_route(
        &self,
        route_id: u64,
        deadline: Option<u32>,
        is_enabled: Option<bool>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("route_id", route_id)
            .field_opt("deadline", deadline)
            .field_opt("is_enabled", is_enabled.map(fields::bool_flag))
            .encode();
        self.base
            .request(methods::admin::distributors::UPDATE_ROUTE, payload, true)
            .await
    }

    /// Flip a route's enabled flag
    pub async fn update_route_status(
        &self,
        route_id: u64,
        status: u8,
    ) -> Result<Value, AbcpError> {
        fields::check_range("status", i64::from(status), 0, 1)?;
        let payload = Payload::new()
            .field("route_id", route_id)
            .field("status", status)
            .encode();
        self.base
            .request(
                methods::admin::distributors::UPDATE_ROUTE_STATUS,
                payload,
                true,
            )
            .await
    }

    pub async fn delete_route(&self, route_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("route_id", route_id).encode();
        self.base
            .request(methods::admin::distributors::DELETE_ROUTE, payload, true)
            .await
    }
}
