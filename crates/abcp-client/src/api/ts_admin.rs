//! Newer (`cp/ts/`) API, administrative tier
//!
//! Every path here carries the `cp/` prefix and is guarded by the
//! dispatcher for non-admin credentials.

use abcp_core::payload::{Composite, Pairs, Payload};
use abcp_core::{datetime, fields, methods, ParamError};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::client::Abcp;
use crate::error::AbcpError;
use crate::transport::HttpTransport;

/// Entry point for the ts administrative groups
pub struct TsAdmin<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<'a, T: HttpTransport> TsAdmin<'a, T> {
    pub(crate) fn new(base: &'a Abcp<T>) -> Self {
        Self { base }
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

    pub fn good_receipts(&self) -> GoodReceipts<'a, T> {
        GoodReceipts { base: self.base }
    }

    pub fn tags(&self) -> Tags<'a, T> {
        Tags { base: self.base }
    }

    pub fn payments(&self) -> Payments<'a, T> {
        Payments { base: self.base }
    }

    pub fn agreements(&self) -> Agreements<'a, T> {
        Agreements { base: self.base }
    }

    pub fn legal_persons(&self) -> LegalPersons<'a, T> {
        LegalPersons { base: self.base }
    }

    pub fn supplier_orders(&self) -> SupplierOrders<'a, T> {
        SupplierOrders { base: self.base }
    }
}

/// Common ts list window: date range + paging
#[derive(Debug, Default, Clone)]
pub struct ListWindow {
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

fn window_payload(window: &ListWindow) -> Result<Payload, AbcpError> {
    fields::check_limit(window.limit)?;
    Ok(Payload::new()
        .field_opt("date_start", window.date_start.map(datetime::format_ts))
        .field_opt("date_end", window.date_end.map(datetime::format_ts))
        .field_opt("skip", window.skip)
        .field_opt("limit", window.limit))
}

pub struct Orders<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

/// Extended-output fields the order endpoints accept
const ORDER_FIELDS: &[&str] = &["deliveries", "agreement", "tags", "posInfo", "amounts"];

impl<T: HttpTransport> Orders<'_, T> {
    pub async fn create(
        &self,
        client_id: u64,
        positions: Vec<Pairs>,
        comment: Option<&str>,
    ) -> Result<Value, AbcpError> {
        if positions.is_empty() {
            return Err(ParamError::Required("positions".into()).into());
        }
        let payload = Payload::new()
            .field("client_id", client_id)
            .field_opt("comment", comment)
            .composite(Composite::BasketPositions(positions))
            .encode();
        self.base
            .request(methods::ts_admin::orders::CREATE, payload, true)
            .await
    }

    pub async fn create_by_cart(
        &self,
        client_id: u64,
        position_ids: Vec<u64>,
    ) -> Result<Value, AbcpError> {
        if position_ids.is_empty() {
            return Err(ParamError::Required("position_ids".into()).into());
        }
        let payload = Payload::new()
            .field("client_id", client_id)
            .list("position_ids", &position_ids)
            .encode();
        self.base
            .request(methods::ts_admin::orders::CREATE_BY_CART, payload, true)
            .await
    }

    pub async fn list(
        &self,
        window: ListWindow,
        fields: Option<&[&str]>,
    ) -> Result<Value, AbcpError> {
        let fields = fields
            .map(|f| fields::check_fields(f, ORDER_FIELDS))
            .transpose()?;
        let payload = window_payload(&window)?
            .field_opt("fields", fields)
            .encode();
        self.base
            .request(methods::ts_admin::orders::LIST, payload, false)
            .await
    }

    pub async fn get(
        &self,
        order_id: u64,
        fields: Option<&[&str]>,
    ) -> Result<Value, AbcpError> {
        let fields = fields
            .map(|f| fields::check_fields(f, ORDER_FIELDS))
            .transpose()?;
        let payload = Payload::new()
            .field("order_id", order_id)
            .field_opt("fields", fields)
            .encode();
        self.base
            .request(methods::ts_admin::orders::GET, payload, false)
            .await
    }

    pub async fn refuse(&self, order_id: u64, reason: Option<&str>) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("order_id", order_id)
            .field_opt("reason", reason)
            .encode();
        self.base
            .request(methods::ts_admin::orders::REFUSE, payload, true)
            .await
    }

    pub async fn update(
        &self,
        order_id: u64,
        manager_id: Option<u64>,
        comment: Option<&str>,
    ) -> Result<Value, AbcpError> {
        if manager_id.is_none() && comment.is_none() {
            return Err(ParamError::OneOfRequired("'manager_id', 'comment'".into()).into());
        }
        let payload = Payload::new()
            .field("order_id", order_id)
            .field_opt("manager_id", manager_id)
            .field_opt("comment", comment)
            .encode();
        self.base
            .request(methods::ts_admin::orders::UPDATE, payload, true)
            .await
    }

    pub async fn message_create(
        &self,
        order_id: u64,
        message: &str,
    ) -> Result<Value, AbcpError> {
        if message.is_empty() {
            return Err(ParamError::Required("message".into()).into());
        }
        let payload = Payload::new()
            .field("order_id", order_id)
            .field("message", message)
            .encode();
        self.base
            .request(methods::ts_admin::orders::MESSAGES_CREATE, payload, true)
            .await
    }

    pub async fn message_get(&self, message_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("message_id", message_id).encode();
        self.base
            .request(methods::ts_admin::orders::MESSAGES_GET, payload, false)
            .await
    }

    pub async fn messages_list(&self, order_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("order_id", order_id).encode();
        self.base
            .request(methods::ts_admin::orders::MESSAGES_LIST, payload, false)
            .await
    }
}

pub struct Cart<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Cart<'_, T> {
    pub async fn create(
        &self,
        client_id: u64,
        positions: Vec<Pairs>,
    ) -> Result<Value, AbcpError> {
        if positions.is_empty() {
            return Err(ParamError::Required("positions".into()).into());
        }
        let payload = Payload::new()
            .field("client_id", client_id)
            .composite(Composite::BasketPositions(positions))
            .encode();
        self.base
            .request(methods::ts_admin::cart::CREATE, payload, true)
            .await
    }

    pub async fn update(
        &self,
        client_id: u64,
        position_id: u64,
        quantity: u32,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("client_id", client_id)
            .field("position_id", position_id)
            .field("quantity", quantity)
            .encode();
        self.base
            .request(methods::ts_admin::cart::UPDATE, payload, true)
            .await
    }

    pub async fn list(
        &self,
        client_id: u64,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AbcpError> {
        fields::check_limit(limit)?;
        let payload = Payload::new()
            .field("client_id", client_id)
            .field_opt("skip", skip)
            .field_opt("limit", limit)
            .encode();
        self.base
            .request(methods::ts_admin::cart::LIST, payload, false)
            .await
    }

    pub async fn summary(&self, client_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("client_id", client_id).encode();
        self.base
            .request(methods::ts_admin::cart::SUMMARY, payload, false)
            .await
    }

    pub async fn clear(&self, client_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("client_id", client_id).encode();
        self.base
            .request(methods::ts_admin::cart::CLEAR, payload, true)
            .await
    }

    pub async fn delete(
        &self,
        client_id: u64,
        position_ids: Vec<u64>,
    ) -> Result<Value, AbcpError> {
        if position_ids.is_empty() {
            return Err(ParamError::Required("position_ids".into()).into());
        }
        let payload = Payload::new()
            .field("client_id", client_id)
            .list("position_ids", &position_ids)
            .encode();
        self.base
            .request(methods::ts_admin::cart::DELETE, payload, true)
            .await
    }

    /// Move cart positions from one client to another
    pub async fn transfer(
        &self,
        from_client_id: u64,
        to_client_id: u64,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("from_client_id", from_client_id)
            .field("to_client_id", to_client_id)
            .encode();
        self.base
            .request(methods::ts_admin::cart::TRANSFER, payload, true)
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
            .request(methods::ts_admin::positions::GET, payload, false)
            .await
    }

    pub async fn list(&self, window: ListWindow) -> Result<Value, AbcpError> {
        let payload = window_payload(&window)?.encode();
        self.base
            .request(methods::ts_admin::positions::LIST, payload, false)
            .await
    }

    pub async fn create(
        &self,
        order_id: u64,
        position: Pairs,
    ) -> Result<Value, AbcpError> {
        if position.is_empty() {
            return Err(ParamError::Required("position".into()).into());
        }
        let payload = Payload::new()
            .field("order_id", order_id)
            .composite(Composite::BasketPositions(vec![position]))
            .encode();
        self.base
            .request(methods::ts_admin::positions::CREATE, payload, true)
            .await
    }

    pub async fn update(
        &self,
        position_id: u64,
        quantity: Option<u32>,
        price: Option<&str>,
    ) -> Result<Value, AbcpError> {
        if quantity.is_none() && price.is_none() {
            return Err(ParamError::OneOfRequired("'quantity', 'price'".into()).into());
        }
        let payload = Payload::new()
            .field("position_id", position_id)
            .field_opt("quantity", quantity)
            .field_opt("price", price)
            .encode();
        self.base
            .request(methods::ts_admin::positions::UPDATE, payload, true)
            .await
    }

    pub async fn cancel(&self, position_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("position_id", position_id).encode();
        self.base
            .request(methods::ts_admin::positions::CANCEL, payload, true)
            .await
    }

    pub async fn mass_cancel(&self, position_ids: Vec<u64>) -> Result<Value, AbcpError> {
        if position_ids.is_empty() {
            return Err(ParamError::Required("position_ids".into()).into());
        }
        let payload = Payload::new().list("position_ids", &position_ids).encode();
        self.base
            .request(methods::ts_admin::positions::MASS_CANCEL, payload, true)
            .await
    }

    pub async fn change_status(
        &self,
        position_id: u64,
        status: &str,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("position_id", position_id)
            .field("status", status)
            .encode();
        self.base
            .request(methods::ts_admin::positions::CHANGE_STATUS, payload, true)
            .await
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
            .composite(Composite::BasketPositions(positions))
            .encode();
        self.base
            .request(methods::ts_admin::good_receipts::CREATE, payload, true)
            .await
    }

    pub async fn get(&self, window: ListWindow) -> Result<Value, AbcpError> {
        let payload = window_payload(&window)?.encode();
        self.base
            .request(methods::ts_admin::good_receipts::GET, payload, false)
            .await
    }

    pub async fn get_positions(&self, op_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("op_id", op_id).encode();
        self.base
            .request(
                methods::ts_admin::good_receipts::GET_POSITIONS,
                payload,
                false,
            )
            .await
    }

    pub async fn update(&self, op_id: u64, comment: Option<&str>) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("op_id", op_id)
            .field_opt("comment", comment)
            .encode();
        self.base
            .request(methods::ts_admin::good_receipts::UPDATE, payload, true)
            .await
    }

    pub async fn change_status(&self, op_id: u64, status: &str) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("op_id", op_id)
            .field("status", status)
            .encode();
        self.base
            .request(
                methods::ts_admin::good_receipts::CHANGE_STATUS,
                payload,
                true,
            )
            .await
    }

    pub async fn delete(&self, op_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("op_id", op_id).encode();
        self.base
            .request(methods::ts_admin::good_receipts::DELETE, payload, true)
            .await
    }
}

pub struct Tags<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Tags<'_, T> {
    pub async fn list(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::ts_admin::tags::LIST, Vec::new(), false)
            .await
    }

    pub async fn create(&self, name: &str, color: Option<&str>) -> Result<Value, AbcpError> {
        if name.is_empty() {
            return Err(ParamError::Required("name".into()).into());
        }
        let payload = Payload::new()
            .field("name", name)
            .field_opt("color", color)
            .encode();
        self.base
            .request(methods::ts_admin::tags::CREATE, payload, true)
            .await
    }

    pub async fn delete(&self, tag_id: u64) -> Result<Value, AbcpError> {
        let payload = Payload::new().field("tag_id", tag_id).encode();
        self.base
            .request(methods::ts_admin::tags::DELETE, payload, true)
            .await
    }
}

pub struct Payments<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Payments<'_, T> {
    pub async fn list(&self, window: ListWindow) -> Result<Value, AbcpError> {
        let payload = window_payload(&window)?.encode();
        self.base
            .request(methods::ts_admin::payments::LIST, payload, false)
            .await
    }

    pub async fn create(
        &self,
        agreement_id: u64,
        amount: &str,
        date: Option<DateTime<Utc>>,
    ) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field("agreement_id", agreement_id)
            .field("amount", amount)
            .field_opt("date", date.map(datetime::format_ts))
            .encode();
        self.base
            .request(methods::ts_admin::payments::CREATE, payload, true)
            .await
    }

    pub async fn methods_list(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::ts_admin::payments::METHODS_LIST, Vec::new(), false)
            .await
    }
}

pub struct Agreements<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> Agreements<'_, T> {
    pub async fn list(&self, contractor_id: Option<u64>) -> Result<Value, AbcpError> {
        let payload = Payload::new()
            .field_opt("contractor_id", contractor_id)
            .encode();
        self.base
            .request(methods::ts_admin::agreements::LIST, payload, false)
            .await
    }
}

pub struct LegalPersons<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> LegalPersons<'_, T> {
    pub async fn list(&self) -> Result<Value, AbcpError> {
        self.base
            .request(methods::ts_admin::legal_persons::LIST, Vec::new(), false)
            .await
    }
}

pub struct SupplierOrders<'a, T: HttpTransport> {
    base: &'a Abcp<T>,
}

impl<T: HttpTransport> SupplierOrders<'_, T> {
    pub async fn orders_list(&self, window: ListWindow) -> Result<Value, AbcpError> {
        let payload = window_payload(&window)?.encode();
        self.base
            .request(methods::ts_admin::supplier_orders::ORDERS_LIST, payload, false)
            .await
    }

    pub async fn positions_list(&self, window: ListWindow) -> Result<Value, AbcpError> {
        let payload = window_payload(&window)?.encode();
        self.base
            .request(
                methods::ts_admin::supplier_orders::POSITIONS_LIST,
                payload,
                false,
            )
            .await
    }
}
