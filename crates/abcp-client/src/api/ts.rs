//! Newer (`ts/`) API, client tier
//!
//! The ts family takes RFC 3339 timestamps, unlike the legacy `cp/`
//! endpoints.

use abcp_core::payload::{Pairs, Payload};
use abcp_core::{datetime, fields, methods, ParamError};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::client::Abcp;
use crate::error::AbcpError;
use crate::transport::HttpTransport;

/// Entry point for the ts client-tier groups
pub struct TsClient<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<'a, T: HttpTransport> TsClient<'a, T> {
    pub(crate) fn new(base: &'a Abcp<T>) -> Self {
        Self { base }
    }

    pub fn good_receipts(&self) -> GoodReceipts<'a, T> {
        GoodReceipts { base: self.base }
    }

    pub fn order_pickings(&self) -> OrderPickings<'a, T> {
        OrderPickings { base: self.base }
    }

    pub fn orders(&self) -> Orders<'a, T> {
        Orders { base: self.base }
    }

    pub fn cart(&self) -> Cart<'a, T> {
        Cart { base: self.base }
    }

    pub fn positions(&self) -> Positions<'a, T> {
        Positions { base: self.base }
    }
}

pub struct GoodReceipts<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> GoodReceipts<'_, T> {
    pub async fn create(
        &self,
        positions: Vec<Pairs>,
        creator_id: Option<u64>,
    ) -> Result<Value, AbcpError> {
        if positions.is_empty() {
            return Err(ParamError::Required("positions".into()).into());
        }
        let payload = Payload::new()
            .field_opt("creator_id", creator_id)
            .composite(abcp_core::Composite::BasketPositions(positions))
            .encode();
        self.base
            .request(methods::ts::good_receipts::CREATE, payload, true)
            .await
    }

    pub async fn get(
        &self,
        date_start: Option<DateTime<Utc>>,
        date_end: Option<DateTime<Utc>>,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AbcpError> {
        fields::check_limit(limit)?;
        let payload = Payload::new()
            .field_opt("date_start", date_start.map(datetime::format_ts))
            .field_opt("date_end", date_end.map(datetime::format_ts))
            .field_opt("skip", skip)
            .field_opt("limit", limit)
            .encode();
        self.base
            .request(methods::ts::good_receipts::GET, payload, false)
            .await
    }

    pub async fn get_positions(&self, op_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("op_id", op_id).encode();
        self.base
            .request(methods::ts::good_receipts::GET_POSITIONS, payload, false)
            .await
    }
}

pub struct OrderPickings<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> OrderPickings<'_, T> {
    pub async fn get(
        &self,
        date_start: Option<DateTime<Utc>>,
        date_end: Option<DateTime<Utc>>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field_opt("date_start", date_start.map(datetime::format_ts))
            .field_opt("date_end", date_end.map(datetime::format_ts))
            .encode();
        self.base
            .request(methods::ts::order_pickings::GET, payload, false)
            .await
    }

    pub async fn get_goods(&self, op_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("op_id", op_id).encode();
        self.base
            .request(methods::ts::order_pickings::GET_GOODS, payload, false)
            .await
    }
}

pub struct Orders<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Orders<'_, T> {
    /// Create an order from the current cart content
    pub async fn create_by_cart(
        &self,
        position_ids: Vec<u64>,
        delivery_address: Option<&str>,
        comment: Option<&str>,
    ) -> Result<Value, AbcpError> {
        if position_ids.is_empty() {
            return Err(ParamError::Required("position_ids".into()).into());
        }
        let payload = Payload::new()
            .list("position_ids", &position_ids)
            .field_opt("delivery_address", delivery_address)
            .field_opt("comment", comment)
            .encode();
        self.base
            .request(methods::ts::orders::CREATE_BY_CART, payload, true)
            .await
    }

    pub async fn list(
        &self,
        date_start: Option<DateTime<Utc>>,
        date_end: Option<DateTime<Utc>>,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AbcpError> {
        fields::check_limit(limit)?;
        let payload = Payload::new()
            .field_opt("date_start", date_start.map(datetime::format_ts))
            .field_opt("date_end", date_end.map(datetime::format_ts))
            .field_opt("skip", skip)
            .field_opt("limit", limit)
            .encode();
        self.base
            .request(methods::ts::orders::LIST, payload, false)
            .await
    }

    pub async fn get(&self, order_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("order_id", order_id).encode();
        self.base
            .request(methods::ts::orders::GET, payload, false)
            .await
    }

    pub async fn refuse(&self, order_id: u64, reason: Option<&str>) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("order_id", order_id)
            .field_opt("reason", reason)
            .encode();
        self.base
            .request(methods::ts::orders::REFUSE, payload, true)
            .await
    }
}

pub struct Cart<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Cart<'_, T> {
    pub async fn create(&self, positions: Vec<Pairs>) -> Result<Value, AbcpError> {
        if positions.is_empty() {
            return Err(ParamError::Required("positions".into()).into());
        }
        let payload = Payload::new()
            .composite(abcp_core::Composite::BasketPositions(positions))
            .encode();
        self.base
            .request(methods::ts::cart::CREATE, payload, true)
            .await
    }

    pub async fn update(&self, position_id: u64, quantity: u32) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("position_id", position_id)
            .field("quantity", quantity)
            .encode();
        self.base
            .request(methods::ts::cart::UPDATE, payload, true)
            .await
    }

    pub async fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Value, AbcpError> {
        fields::check_limit(limit)?;
        let payload = Payload::new()
            .field_opt("skip", skip)
            .field_opt("limit", limit)
            .encode();
        self.base
            .request(methods::ts::cart::LIST, payload, false)
            .await
    }

    /// Whether a brand + number is already in the cart
    pub async fn exists(&self, brand: &str, number: &str) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("brand", brand)
            .field("number", number)
            .encode();
        self.base
            .request(methods::ts::cart::EXISTS, payload, false)
            .await
    }

    pub async fn summary(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::ts::cart::SUMMARY, Vec::new(), false)
            .await
    }

    pub async fn clear(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::ts::cart::CLEAR, Vec::new(), true)
            .await
    }

    pub async fn delete_positions(&self, position_ids: Vec<u64>) -> Result<Value, AbcpError> {
        if position_ids.is_empty() {
            return Err(ParamError::Required("position_ids".into()).into());
        }
        let payload = Payload::new().list("position_ids", &position_ids).encode();
        self.base
            .request(methods::ts::cart::DELETE_POSITIONS, payload, true)
            .await
    }
}

pub struct Positions<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Positions<'_, T> {
    pub async fn get(&self, position_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("position_id", position_id).encode();
        self.base
            .request(methods::ts::positions::GET, payload, false)
            .await
    }

    pub async fn list(
        &self,
        date_start: Option<DateTime<Utc>>,
        date_end: Option<DateTime<Utc>>,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AbcpError> {
        fields::check_limit(limit)?;
        let payload = Payload::new()
            .field_opt("date_start", date_start.map(datetime::format_ts))
            .field_opt("date_end", date_end.map(datetime::format_ts))
            .field_opt("skip", skip)
            .field_opt("limit", limit)
            .encode();
        self.base
            .request(methods::ts::positions::LIST, payload, false)
            .await
    }

    pub async fn cancel(&self, position_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("position_id", position_id).encode();
        self.base
            .request(methods::ts::positions::CANCEL, payload, true)
            .await
    }

    pub async fn mass_cancel(&self, position_ids: Vec<u64>) -> Result<Value, AbcpError> {
        if position_ids.is_empty() {
            return Err(ParamError::Required("position_ids".into()).into());
        }
        let payload = Payload::new().list("position_ids", &position_ids).encode();
        self.base
            .request(methods::ts::positions::MASS_CANCEL, payload, true)
            .await
    }
}
