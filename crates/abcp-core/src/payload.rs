//! Wire-format payload encoding
//!
//! ABCP takes its parameters as flat form fields / query parameters with
//! PHP-style bracket notation for anything nested. This module converts an
//! ordered set of snake_case parameters into that exact wire shape:
//!
//! - snake_case names camelize (`status_code` -> `statusCode`)
//! - `None` values are omitted, never sent as empty strings
//! - lists index out as `key[0]`, `key[1]`, ...
//! - order create/edit wraps every plain key in an `order[...]` envelope
//! - a closed set of composite parameters (order positions, notes,
//!   payments, price-up matrices, ...) each has a fixed bracket template
//!
//! The bracket shapes are dictated by the remote API and are not
//! negotiable; tests pin every template. Encoding is pure and preserves
//! insertion order (some endpoints, notes in particular, are
//! order-sensitive).

/// Flat wire payload: the literal query-string / form-body pairs.
///
/// A `Vec` rather than a map so insertion order survives. The same pairs
/// feed either a form-urlencoded body or a query string; a multipart
/// producer for the upload endpoints would consume the same pairs plus a
/// file part.
pub type WirePayload = Vec<(String, String)>;

/// Ordered key/value rows inside a composite parameter
pub type Pairs = Vec<(String, String)>;

/// A value inside a price-up matrix row: either a plain markup or a
/// brand -> markup map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceUpValue {
    Scalar(String),
    /// Brand name -> markup. The wire represents maps as parallel
    /// `[name]`/`[priceUp]` arrays, not as objects.
    Brands(Vec<(String, String)>),
}

/// One row of a price-up matrix
pub type PriceUpRow = Vec<(String, PriceUpValue)>;

/// The closed registry of composite parameters with bespoke bracket
/// templates
///
/// Each variant maps to one fixed wire shape; an unhandled composite is a
/// compile error here, not a silent fall-through to generic camelization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composite {
    /// `order[positions][{i}][{key}]`
    OrderPositions(Vec<Pairs>),
    /// `orderParams[{key}]`
    OrderParams(Pairs),
    /// `positions[{i}][positionParams][{key}]`, except the `id` key which
    /// stays `positions[{i}][id]`
    OnlinePositions(Vec<Pairs>),
    /// `distributors[{i}][{key}]`
    Distributors(Vec<Pairs>),
    /// `order[notes][0][value]`
    Note(String),
    /// Deleting a note emits two keys: `order[notes][0][value]` set empty
    /// and `order[notes][0][id]` set to the note id
    DelNote(String),
    /// `positions[{i}][{key}]`
    BasketPositions(Vec<Pairs>),
    /// `search[{i}][{key}]`
    Search(Vec<Pairs>),
    /// `payments[{i}][{key}]`
    Payments(Vec<Pairs>),
    /// `matrixPriceUps[{i}][{key}]`, brand maps expanding to parallel
    /// `[{j}][name]` / `[{j}][priceUp]` entries
    MatrixPriceUps(Vec<PriceUpRow>),
    /// Same expansion under `distributorsPriceUps`
    DistributorsPriceUps(Vec<PriceUpRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Scalar(String, String),
    List(String, Vec<String>),
    Composite(Composite),
}

/// Ordered parameter set, built explicitly by each endpoint method
///
/// # Example
///
/// ```
/// use abcp_core::Payload;
///
/// let wire = Payload::new()
///     .field("user_id", 42)
///     .field_opt::<&str>("format", None)
///     .list("status_code", &["new", "paid"])
///     .encode();
/// assert_eq!(wire, vec![
///     ("userId".to_string(), "42".to_string()),
///     ("statusCode[0]".to_string(), "new".to_string()),
///     ("statusCode[1]".to_string(), "paid".to_string()),
/// ]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    entries: Vec<Entry>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar parameter
    pub fn field<V: ToString>(mut self, name: &str, value: V) -> Self {
        self.entries
            .push(Entry::Scalar(name.to_string(), value.to_string()));
        self
    }

    /// Add a scalar parameter, omitting it entirely when `None`
    pub fn field_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.field(name, v),
            None => self,
        }
    }

    /// Add a list parameter, indexed out element by element
    pub fn list<V: ToString>(mut self, name: &str, values: &[V]) -> Self {
        self.entries.push(Entry::List(
            name.to_string(),
            values.iter().map(ToString::to_string).collect(),
        ));
        self
    }

    /// Add a list parameter, omitting it entirely when `None`
    pub fn list_opt<V: ToString>(self, name: &str, values: Option<Vec<V>>) -> Self {
        match values {
            Some(vs) => self.list(name, &vs),
            None => self,
        }
    }

    /// Add a composite parameter
    pub fn composite(mut self, composite: Composite) -> Self {
        self.entries.push(Entry::Composite(composite));
        self
    }

    /// Add a composite parameter, omitting it entirely when `None`
    pub fn composite_opt(self, composite: Option<Composite>) -> Self {
        match composite {
            Some(c) => self.composite(c),
            None => self,
        }
    }

    /// Encode with plain camelized keys
    pub fn encode(&self) -> WirePayload {
        self.encode_mode(false)
    }

    /// Encode for the order create/edit family: every plain key wrapped in
    /// an `order[...]` envelope
    pub fn encode_order(&self) -> WirePayload {
        self.encode_mode(true)
    }

    /// Encode with every plain key wrapped in a `filter[...]` envelope
    /// (list endpoints of the user/payment families)
    pub fn encode_filter(&self) -> WirePayload {
        let mut out = WirePayload::new();
        for entry in &self.entries {
            match entry {
                Entry::Scalar(name, value) if !name.starts_with('_') => {
                    out.push((format!("filter[{}]", camelize(name)), value.clone()));
                }
                Entry::List(name, values) if !name.starts_with('_') => {
                    let key = camelize(name);
                    for (i, v) in values.iter().enumerate() {
                        out.push((format!("filter[{key}][{i}]"), v.clone()));
                    }
                }
                Entry::Composite(c) => encode_composite(&mut out, c),
                _ => {}
            }
        }
        out
    }

    /// Encode a single payment: plain keys land under `payments[0][...]`,
    /// `link_payments` stays a top-level flag
    pub fn encode_payment(&self) -> WirePayload {
        let mut out = WirePayload::new();
        for entry in &self.entries {
            match entry {
                Entry::Scalar(name, value) if !name.starts_with('_') => {
                    if name == "link_payments" {
                        out.push(("linkPayments".to_string(), value.clone()));
                    } else {
                        out.push((format!("payments[0][{}]", camelize(name)), value.clone()));
                    }
                }
                Entry::List(name, values) if !name.starts_with('_') => {
                    let key = camelize(name);
                    for (i, v) in values.iter().enumerate() {
                        out.push((format!("payments[0][{key}][{i}]"), v.clone()));
                    }
                }
                Entry::Composite(c) => encode_composite(&mut out, c),
                _ => {}
            }
        }
        out
    }

    fn encode_mode(&self, order_mode: bool) -> WirePayload {
        let mut out = WirePayload::new();
        for entry in &self.entries {
            match entry {
                Entry::Scalar(name, value) if !name.starts_with('_') => {
                    let key = camelize(name);
                    if order_mode {
                        out.push((format!("order[{key}]"), value.clone()));
                    } else {
                        out.push((key, value.clone()));
                    }
                }
                Entry::List(name, values) if !name.starts_with('_') => {
                    let key = camelize(name);
                    for (i, v) in values.iter().enumerate() {
                        if order_mode {
                            out.push((format!("order[{key}][{i}]"), v.clone()));
                        } else {
                            out.push((format!("{key}[{i}]"), v.clone()));
                        }
                    }
                }
                Entry::Composite(c) => encode_composite(&mut out, c),
                _ => {}
            }
        }
        out
    }
}

fn encode_composite(out: &mut WirePayload, composite: &Composite) {
    match composite {
        Composite::OrderPositions(rows) => {
            encode_rows(out, "order[positions]", rows);
        }
        Composite::OrderParams(pairs) => {
            for (k, v) in pairs {
                out.push((format!("orderParams[{k}]"), v.clone()));
            }
        }
        Composite::OnlinePositions(rows) => {
            for (i, row) in rows.iter().enumerate() {
                for (k, v) in row {
                    if k == "id" {
                        out.push((format!("positions[{i}][id]"), v.clone()));
                    } else {
                        out.push((format!("positions[{i}][positionParams][{k}]"), v.clone()));
                    }
                }
            }
        }
        Composite::Distributors(rows) => {
            encode_rows(out, "distributors", rows);
        }
        Composite::Note(value) => {
            out.push(("order[notes][0][value]".to_string(), value.clone()));
        }
        Composite::DelNote(id) => {
            out.push(("order[notes][0][value]".to_string(), String::new()));
            out.push(("order[notes][0][id]".to_string(), id.clone()));
        }
        Composite::BasketPositions(rows) => {
            encode_rows(out, "positions", rows);
        }
        Composite::Search(rows) => {
            encode_rows(out, "search", rows);
        }
        Composite::Payments(rows) => {
            encode_rows(out, "payments", rows);
        }
        Composite::MatrixPriceUps(rows) => {
            encode_price_ups(out, "matrixPriceUps", rows);
        }
        Composite::DistributorsPriceUps(rows) => {
            encode_price_ups(out, "distributorsPriceUps", rows);
        }
    }
}

fn encode_rows(out: &mut WirePayload, base: &str, rows: &[Pairs]) {
    for (i, row) in rows.iter().enumerate() {
        for (k, v) in row {
            out.push((format!("{base}[{i}][{k}]"), v.clone()));
        }
    }
}

fn encode_price_ups(out: &mut WirePayload, base: &str, rows: &[PriceUpRow]) {
    for (i, row) in rows.iter().enumerate() {
        for (k, v) in row {
            match v {
                PriceUpValue::Scalar(s) => {
                    out.push((format!("{base}[{i}][{k}]"), s.clone()));
                }
                PriceUpValue::Brands(brands) => {
                    for (j, (name, price_up)) in brands.iter().enumerate() {
                        out.push((format!("{base}[{i}][{k}][{j}][name]"), name.clone()));
                        out.push((format!("{base}[{i}][{k}][{j}][priceUp]"), price_up.clone()));
                    }
                }
            }
        }
    }
}

/// Convert a snake_case parameter name to its camelCase wire key
///
/// Every segment after the first gets its first character uppercased. The
/// first segment deliberately passes through unchanged rather than being
/// lowercased: parameter names are lowercase by convention, and the
/// pass-through keeps the function idempotent on its own output. Never
/// emits underscores.
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, segment) in name.split('_').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camelize_basic() {
        assert_eq!(camelize("foo_bar_baz"), "fooBarBaz");
        assert_eq!(camelize("number"), "number");
        assert_eq!(camelize("date_updated_start"), "dateUpdatedStart");
    }

    #[test]
    fn camelize_idempotent() {
        let once = camelize("foo_bar_baz");
        assert_eq!(camelize(&once), once);
    }

    #[test]
    fn camelize_never_emits_underscores() {
        for name in ["a_b", "a__b", "long_param_name_here"] {
            assert!(!camelize(name).contains('_'));
        }
    }

    #[test]
    fn underscore_prefixed_names_skipped() {
        let wire = Payload::new().field("_internal", 1).field("ok", 2).encode();
        assert_eq!(wire, vec![("ok".to_string(), "2".to_string())]);
    }
}
