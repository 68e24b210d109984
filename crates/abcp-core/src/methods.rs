//! Method path registry
//!
//! The remote API addresses operations by literal path. The registry is
//! data, not behavior: constants grouped the way the platform's own
//! documentation groups them. Administrative paths live under `cp/` and
//! are rejected client-side for non-admin credentials.

/// Prefix shared by every administrative method path
pub const ADMIN_PATH_PREFIX: &str = "cp/";

/// Whether a method path requires administrative credentials
pub fn is_admin_path(path: &str) -> bool {
    path.starts_with(ADMIN_PATH_PREFIX)
}

/// Search-family paths whose 404 responses mean "nothing found" rather
/// than a generic API failure
pub const SEARCH_METHODS: &[&str] = &[
    client::search::BRANDS,
    client::search::ARTICLES,
    client::search::BATCH,
    client::search::HISTORY,
    client::search::TIPS,
    client::search::ADVICES,
    client::search::ADVICES_BATCH,
];

/// Administrative API (`cp/`)
pub mod admin {
    pub mod orders {
        pub const LIST: &str = "cp/orders";
        pub const GET: &str = "cp/order";
        pub const STATUS_HISTORY: &str = "cp/order/statusHistory";
        pub const SAVE: &str = "cp/order";
        pub const ONLINE: &str = "cp/orders/online";
    }

    pub mod finance {
        pub const UPDATE_BALANCE: &str = "cp/finance/userBalance";
        pub const UPDATE_CREDIT_LIMIT: &str = "cp/finance/creditLimit";
        pub const UPDATE_INFO: &str = "cp/finance/userInfo";
        pub const PAYMENTS: &str = "cp/finance/payments";
        pub const PAYMENT_LINKS: &str = "cp/finance/paymentOrderLinks";
        pub const ONLINE_PAYMENTS: &str = "cp/onlinePayments";
        pub const ADD_PAYMENTS: &str = "cp/finance/payments";
        pub const DELETE_PAYMENT_LINK: &str = "cp/finance/deleteLinkPayments";
        pub const LINK_EXISTING_PAYMENT: &str = "cp/finance/paymentOrderLink";
        pub const REFUND_PAYMENT: &str = "cp/finance/paymentRefund";
        pub const DELETE_PAYMENT: &str = "cp/finance/deletePayments";
    }

    pub mod users {
        pub const LIST: &str = "cp/users";
        pub const CREATE: &str = "cp/user/new";
        pub const PROFILES: &str = "cp/users/profiles";
        pub const EDIT_PROFILE: &str = "cp/users/profile";
        pub const EDIT: &str = "cp/user";
        pub const SHIPMENT_ADDRESSES: &str = "cp/user/shipmentAddresses";
        pub const SMS_SETTINGS: &str = "cp/user/smsSettings";
    }

    pub mod staff {
        pub const LIST: &str = "cp/managers";
        pub const UPDATE: &str = "cp/manager";
    }

    pub mod statuses {
        pub const LIST: &str = "cp/statuses";
    }

    pub mod articles {
        pub const BRANDS: &str = "cp/articles/brands";
        pub const BRANDS_GROUP: &str = "cp/articles/brandsGroup";
    }

    pub mod distributors {
        pub const LIST: &str = "cp/distributors";
        pub const EDIT_STATUS: &str = "cp/distributor/status";
        pub const ROUTES: &str = "cp/routes";
        pub const UPDATE_ROUTE: &str = "cp/route";
        pub const UPDATE_ROUTE_STATUS: &str = "cp/routes/status";
        pub const DELETE_ROUTE: &str = "cp/route/delete";
    }
}

/// Client API
pub mod client {
    pub mod search {
        pub const BRANDS: &str = "search/brands";
        pub const ARTICLES: &str = "search/articles";
        pub const BATCH: &str = "search/batch";
        pub const HISTORY: &str = "search/history";
        pub const TIPS: &str = "search/tips";
        pub const ADVICES: &str = "advices";
        pub const ADVICES_BATCH: &str = "advices/batch";
    }

    pub mod basket {
        pub const MULTIBASKET: &str = "basket/multibasket";
        pub const ADD: &str = "basket/add";
        pub const CLEAR: &str = "basket/clear";
        pub const CONTENT: &str = "basket/content";
        pub const OPTIONS: &str = "basket/options";
        pub const PAYMENT_METHODS: &str = "basket/paymentMethods";
        pub const SHIPMENT_METHODS: &str = "basket/shipmentMethods";
        pub const SHIPMENT_OFFICES: &str = "basket/shipmentOffices";
        pub const SHIPMENT_ADDRESSES: &str = "basket/shipmentAddresses";
        pub const SHIPMENT_DATES: &str = "basket/shipmentDates";
        pub const ORDER: &str = "basket/order";
    }

    pub mod orders {
        pub const INSTANT: &str = "orders/instant";
        pub const LIST: &str = "orders/list";
        pub const GET: &str = "orders";
        pub const CANCEL_POSITION: &str = "orders/cancelPosition";
    }

    pub mod user {
        pub const REGISTER: &str = "user/new";
        pub const ACTIVATION: &str = "user/activation";
        pub const INFO: &str = "user/info";
        pub const RESTORE: &str = "user/restore";
    }

    pub mod garage {
        pub const LIST: &str = "user/garage";
        pub const CAR: &str = "user/garage/car";
        pub const ADD: &str = "user/garage/add";
        pub const UPDATE: &str = "user/garage/update";
        pub const DELETE: &str = "user/garage/delete";
    }

    pub mod cartree {
        pub const YEARS: &str = "cartree/years";
        pub const MANUFACTURERS: &str = "cartree/manufacturers";
        pub const MODELS: &str = "cartree/models";
        pub const MODIFICATIONS: &str = "cartree/modifications";
    }

    pub mod form {
        pub const FIELDS: &str = "form/fields";
    }

    pub mod articles {
        pub const BRANDS: &str = "articles/brands";
        pub const INFO: &str = "articles/info";
    }
}

/// Newer (`ts/`) API, client tier
pub mod ts {
    pub mod good_receipts {
        pub const CREATE: &str = "ts/goodReceipts/create";
        pub const GET: &str = "ts/goodReceipts/get";
        pub const GET_POSITIONS: &str = "ts/goodReceipts/getPositions";
    }

    pub mod order_pickings {
        pub const GET: &str = "ts/orderPickings/get";
        pub const GET_GOODS: &str = "ts/orderPickings/getGoods";
    }

    pub mod orders {
        pub const CREATE_BY_CART: &str = "ts/orders/createByCart";
        pub const LIST: &str = "ts/orders/list";
        pub const GET: &str = "ts/orders/get";
        pub const REFUSE: &str = "ts/orders/refuse";
    }

    pub mod cart {
        pub const CREATE: &str = "ts/cart/create";
        pub const UPDATE: &str = "ts/cart/update";
        pub const LIST: &str = "ts/cart/list";
        pub const EXISTS: &str = "ts/cart/exists";
        pub const SUMMARY: &str = "ts/cart/summary";
        pub const CLEAR: &str = "ts/cart/clear";
        pub const DELETE_POSITIONS: &str = "ts/cart/deletePositions";
    }

    pub mod positions {
        pub const GET: &str = "ts/positions/get";
        pub const LIST: &str = "ts/positions/list";
        pub const CANCEL: &str = "ts/positions/cancel";
        pub const MASS_CANCEL: &str = "ts/positions/massCancel";
    }
}

/// Newer (`cp/ts/`) API, administrative tier
pub mod ts_admin {
    pub mod orders {
        pub const CREATE: &str = "cp/ts/orders/create";
        pub const CREATE_BY_CART: &str = "cp/ts/orders/createByCart";
        pub const LIST: &str = "cp/ts/orders/list";
        pub const GET: &str = "cp/ts/orders/get";
        pub const REFUSE: &str = "cp/ts/orders/refuse";
        pub const UPDATE: &str = "cp/ts/orders/update";
        pub const MESSAGES_CREATE: &str = "cp/ts/orders/messages/create";
        pub const MESSAGES_GET: &str = "cp/ts/orders/messages/get";
        pub const MESSAGES_LIST: &str = "cp/ts/orders/messages/list";
    }

    pub mod cart {
        pub const CREATE: &str = "cp/ts/cart/create";
        pub const UPDATE: &str = "cp/ts/cart/update";
        pub const LIST: &str = "cp/ts/cart/list";
        pub const SUMMARY: &str = "cp/ts/cart/summary";
        pub const CLEAR: &str = "cp/ts/cart/clear";
        pub const DELETE: &str = "cp/ts/cart/delete";
        pub const TRANSFER: &str = "cp/ts/cart/transfer";
    }

    pub mod positions {
        pub const GET: &str = "cp/ts/positions/get";
        pub const LIST: &str = "cp/ts/positions/list";
        pub const CREATE: &str = "cp/ts/positions/create";
        pub const UPDATE: &str = "cp/ts/positions/update";
        pub const CANCEL: &str = "cp/ts/positions/cancel";
        pub const MASS_CANCEL: &str = "cp/ts/positions/massCancel";
        pub const CHANGE_STATUS: &str = "cp/ts/positions/changeStatus";
    }

    pub mod good_receipts {
        pub const CREATE: &str = "cp/ts/goodReceipts/create";
        pub const GET: &str = "cp/ts/goodReceipts/get";
        pub const GET_POSITIONS: &str = "cp/ts/goodReceipts/getPositions";
        pub const UPDATE: &str = "cp/ts/goodReceipts/update";
        pub const CHANGE_STATUS: &str = "cp/ts/goodReceipts/changeStatus";
        pub const DELETE: &str = "cp/ts/goodReceipts/delete";
    }

    pub mod tags {
        pub const LIST: &str = "cp/ts/tags/list";
        pub const CREATE: &str = "cp/ts/tags/create";
        pub const DELETE: &str = "cp/ts/tags/delete";
    }

    pub mod payments {
        pub const LIST: &str = "cp/ts/payments/list";
        pub const CREATE: &str = "cp/ts/payments/create";
        pub const METHODS_LIST: &str = "cp/ts/paymentMethods/list";
    }

    pub mod agreements {
        pub const LIST: &str = "cp/ts/agreements/list";
    }

    pub mod legal_persons {
        pub const LIST: &str = "cp/ts/legalPersons/list";
    }

    pub mod supplier_orders {
        pub const ORDERS_LIST: &str = "cp/ts/supplierOrders/orders/list";
        pub const POSITIONS_LIST: &str = "cp/ts/supplierOrders/positions/list";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_paths_flagged() {
        assert!(is_admin_path(admin::orders::LIST));
        assert!(is_admin_path(ts_admin::orders::CREATE));
        assert!(!is_admin_path(client::search::BRANDS));
        assert!(!is_admin_path(ts::orders::LIST));
    }

    #[test]
    fn search_set_contains_advices() {
        assert!(SEARCH_METHODS.contains(&"advices"));
        assert!(SEARCH_METHODS.contains(&"search/brands"));
    }
}
