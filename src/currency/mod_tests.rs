use super::*;

#[test]
fn parses_codes_case_insensitively() {
    assert_eq!("myr".parse::<Currency>().unwrap(), Currency::Myr);
    assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
    assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
}

#[test]
fn rejects_unknown_codes() {
    let err = "JPY".parse::<Currency>().unwrap_err();
    assert!(matches!(err, SalaryChartError::UnknownCurrency(code) if code == "JPY"));
}

#[test]
fn symbols_match_display_convention() {
    assert_eq!(Currency::Idr.symbol(), "Rp ");
    assert_eq!(Currency::Myr.symbol(), "RM ");
    assert_eq!(Currency::Usd.symbol(), "$");
    assert_eq!(Currency::Eur.symbol(), "€");
}

#[test]
fn default_is_rupiah() {
    assert_eq!(Currency::default(), Currency::Idr);
}

#[test]
fn serializes_as_code() {
    let json = serde_json::to_string(&Currency::Myr).unwrap();
    assert_eq!(json, "\"MYR\"");
    let parsed: Currency = serde_json::from_str("\"usd\"").unwrap();
    assert_eq!(parsed, Currency::Usd);
}

#[test]
fn display_is_code() {
    assert_eq!(Currency::Eur.to_string(), "EUR");
}
