//! Wire-format encoding tests
//!
//! Every bracket template here is pinned against the shapes the remote
//! API actually accepts; a change in any expected string is a wire
//! protocol break, not a refactor.

use abcp_core::{Composite, Payload, PriceUpValue};
use pretty_assertions::assert_eq;

fn wire(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn none_values_omitted() {
    let out = Payload::new()
        .field_opt::<&str>("format", None)
        .field_opt("number", Some("500"))
        .encode();
    assert_eq!(out, wire(&[("number", "500")]));
}

#[test]
fn scalar_list_indexing() {
    let out = Payload::new().list("numbers", &[1, 2, 3]).encode();
    assert_eq!(
        out,
        wire(&[("numbers[0]", "1"), ("numbers[1]", "2"), ("numbers[2]", "3")])
    );
}

#[test]
fn order_mode_wraps_every_plain_key() {
    let out = Payload::new()
        .field("number", "500")
        .field("user_id", 7)
        .encode_order();
    assert_eq!(
        out,
        wire(&[("order[number]", "500"), ("order[userId]", "7")])
    );
}

#[test]
fn order_positions_template() {
    let out = Payload::new()
        .field("number", "500")
        .composite(Composite::OrderPositions(vec![vec![
            ("id".to_string(), "1".to_string()),
            ("quantity".to_string(), "2".to_string()),
        ]]))
        .encode_order();
    assert_eq!(
        out,
        wire(&[
            ("order[number]", "500"),
            ("order[positions][0][id]", "1"),
            ("order[positions][0][quantity]", "2"),
        ])
    );
}

#[test]
fn note_template() {
    let out = Payload::new()
        .composite(Composite::Note("call before shipping".to_string()))
        .encode_order();
    assert_eq!(out, wire(&[("order[notes][0][value]", "call before shipping")]));
}

#[test]
fn del_note_emits_two_keys() {
    let out = Payload::new()
        .composite(Composite::DelNote("99".to_string()))
        .encode_order();
    assert_eq!(
        out,
        wire(&[("order[notes][0][value]", ""), ("order[notes][0][id]", "99")])
    );
}

#[test]
fn order_params_template() {
    let out = Payload::new()
        .composite(Composite::OrderParams(vec![(
            "locale".to_string(),
            "ru_RU".to_string(),
        )]))
        .encode();
    assert_eq!(out, wire(&[("orderParams[locale]", "ru_RU")]));
}

#[test]
fn online_positions_keep_id_outside_position_params() {
    let out = Payload::new()
        .composite(Composite::OnlinePositions(vec![vec![
            ("id".to_string(), "11".to_string()),
            ("quantity".to_string(), "3".to_string()),
        ]]))
        .encode();
    assert_eq!(
        out,
        wire(&[
            ("positions[0][id]", "11"),
            ("positions[0][positionParams][quantity]", "3"),
        ])
    );
}

#[test]
fn basket_positions_template() {
    let out = Payload::new()
        .composite(Composite::BasketPositions(vec![
            vec![("brand".to_string(), "Febi".to_string())],
            vec![("brand".to_string(), "Sachs".to_string())],
        ]))
        .encode();
    assert_eq!(
        out,
        wire(&[("positions[0][brand]", "Febi"), ("positions[1][brand]", "Sachs")])
    );
}

#[test]
fn distributors_template() {
    let out = Payload::new()
        .composite(Composite::Distributors(vec![vec![(
            "id".to_string(),
            "5".to_string(),
        )]]))
        .encode();
    assert_eq!(out, wire(&[("distributors[0][id]", "5")]));
}

#[test]
fn search_template() {
    let out = Payload::new()
        .composite(Composite::Search(vec![vec![
            ("brand".to_string(), "Kyb".to_string()),
            ("number".to_string(), "333305".to_string()),
        ]]))
        .encode();
    assert_eq!(
        out,
        wire(&[("search[0][brand]", "Kyb"), ("search[0][number]", "333305")])
    );
}

#[test]
fn payments_rows_template() {
    let out = Payload::new()
        .composite(Composite::Payments(vec![
            vec![("amount".to_string(), "100".to_string())],
            vec![("amount".to_string(), "250".to_string())],
        ]))
        .encode();
    assert_eq!(
        out,
        wire(&[("payments[0][amount]", "100"), ("payments[1][amount]", "250")])
    );
}

#[test]
fn single_payment_envelope() {
    let out = Payload::new()
        .field("user_id", 7)
        .field("link_payments", 1)
        .encode_payment();
    assert_eq!(
        out,
        wire(&[("payments[0][userId]", "7"), ("linkPayments", "1")])
    );
}

#[test]
fn filter_envelope_wraps_scalars_and_lists() {
    let out = Payload::new()
        .field("date_registred_start", "2024-01-01 00:00:00")
        .list("customers_ids", &[4, 8])
        .encode_filter();
    assert_eq!(
        out,
        wire(&[
            ("filter[dateRegistredStart]", "2024-01-01 00:00:00"),
            ("filter[customersIds][0]", "4"),
            ("filter[customersIds][1]", "8"),
        ])
    );
}

#[test]
fn price_up_matrix_expands_brand_maps_as_parallel_arrays() {
    let out = Payload::new()
        .composite(Composite::MatrixPriceUps(vec![vec![
            ("priceFrom".to_string(), PriceUpValue::Scalar("0".to_string())),
            (
                "brandsPriceUps".to_string(),
                PriceUpValue::Brands(vec![
                    ("Febi".to_string(), "15".to_string()),
                    ("Sachs".to_string(), "12".to_string()),
                ]),
            ),
        ]]))
        .encode();
    assert_eq!(
        out,
        wire(&[
            ("matrixPriceUps[0][priceFrom]", "0"),
            ("matrixPriceUps[0][brandsPriceUps][0][name]", "Febi"),
            ("matrixPriceUps[0][brandsPriceUps][0][priceUp]", "15"),
            ("matrixPriceUps[0][brandsPriceUps][1][name]", "Sachs"),
            ("matrixPriceUps[0][brandsPriceUps][1][priceUp]", "12"),
        ])
    );
}

#[test]
fn distributors_price_ups_base_key() {
    let out = Payload::new()
        .composite(Composite::DistributorsPriceUps(vec![vec![(
            "distributorId".to_string(),
            PriceUpValue::Scalar("3".to_string()),
        )]]))
        .encode();
    assert_eq!(out, wire(&[("distributorsPriceUps[0][distributorId]", "3")]));
}

#[test]
fn insertion_order_preserved() {
    let out = Payload::new()
        .field("b_key", 2)
        .field("a_key", 1)
        .field("c_key", 3)
        .encode();
    let keys: Vec<&str> = out.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["bKey", "aKey", "cKey"]);
}

#[test]
fn composites_unaffected_by_plain_encode_mode() {
    // Composite templates are fixed; only plain keys react to order mode.
    let plain = Payload::new()
        .composite(Composite::BasketPositions(vec![vec![(
            "code".to_string(),
            "x1".to_string(),
        )]]))
        .encode();
    let ordered = Payload::new()
        .composite(Composite::BasketPositions(vec![vec![(
            "code".to_string(),
            "x1".to_string(),
        )]]))
        .encode_order();
    assert_eq!(plain, ordered);
}
