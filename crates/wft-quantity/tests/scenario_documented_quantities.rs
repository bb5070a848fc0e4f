use wft_quantity::*;

#[test]
fn scenario_plain_values() {
    assert_eq!(normalize(&QuantityInput::from(5.0)), 5.0);
    assert_eq!(normalize(&QuantityInput::from("5")), 5.0);
    assert_eq!(normalize(&QuantityInput::Absent), 0.0);
    assert_eq!(normalize(&QuantityInput::from("")), 0.0);
    assert_eq!(normalize(&QuantityInput::from("abc")), 0.0);
}

#[test]
fn scenario_thousands_and_decimal_separators() {
    assert_eq!(normalize_str("1.234,56"), 1234.56);
    assert_eq!(normalize_str("1,234.56"), 1234.56);
    assert_eq!(normalize_str("1.234.567"), 1234567.0);
    assert_eq!(normalize_str("1,234,56"), 1234.56);
}

#[test]
fn scenario_unit_suffixes_are_ignored() {
    assert_eq!(normalize_str("12 un"), 12.0);
    assert_eq!(normalize_str("3,5 kg"), 3.5);
    assert_eq!(normalize_str("  7 pçs  "), 7.0);
    assert_eq!(normalize_str("2 cx/10"), 210.0);
}

#[test]
fn scenario_signed_and_degenerate_forms() {
    assert_eq!(normalize_str("-4"), -4.0);
    assert_eq!(normalize_str("-0,5"), -0.5);
    assert_eq!(normalize_str("."), 0.0);
    assert_eq!(normalize_str("-"), 0.0);
    assert_eq!(normalize_str("-."), 0.0);
    assert_eq!(normalize_str("--3"), 0.0);
}

#[test]
fn scenario_trailing_garbage_keeps_leading_literal() {
    // After cleaning "5-3" only the leading literal is read.
    assert_eq!(normalize_str("5-3"), 5.0);
    assert_eq!(normalize_str("+8"), 8.0);
}

#[test]
fn scenario_non_finite_numbers_read_as_zero() {
    assert_eq!(normalize(&QuantityInput::Number(f64::NAN)), 0.0);
    assert_eq!(normalize(&QuantityInput::Number(f64::INFINITY)), 0.0);
    assert_eq!(normalize(&QuantityInput::Number(f64::NEG_INFINITY)), 0.0);
}

#[test]
fn scenario_try_normalize_agrees_with_normalize() {
    let inputs = [
        QuantityInput::Absent,
        QuantityInput::from(3.25),
        QuantityInput::from("1.234,56"),
        QuantityInput::from("n/a"),
        QuantityInput::from("   "),
        QuantityInput::Number(f64::NAN),
    ];
    for input in &inputs {
        assert_eq!(normalize(input), try_normalize(input).unwrap_or(0.0), "{input:?}");
    }
}

#[test]
fn scenario_quantities_decode_from_json_records() {
    let values: Vec<QuantityInput> =
        serde_json::from_str(r#"[10, "3,5 kg", null, "1.234,56", false]"#).unwrap();
    let total: f64 = values.iter().map(normalize).sum();
    assert_eq!(total, 10.0 + 3.5 + 0.0 + 1234.56 + 0.0);
}
