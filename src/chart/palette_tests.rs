use super::*;
use crate::dataset::{Company, Region};

fn registry() -> CompanyRegistry {
    ["tiket", "bukalapak", "gojek"]
        .into_iter()
        .map(|key| Company::new(key, Region::Indonesia))
        .collect()
}

#[test]
fn colors_follow_registry_order() {
    let registry = registry();
    assert_eq!(company_color(&registry, "tiket"), Some("#3b82f6"));
    assert_eq!(company_color(&registry, "bukalapak"), Some("#ef4444"));
    assert_eq!(company_color(&registry, "gojek"), Some("#10b981"));
}

#[test]
fn unknown_company_has_no_color() {
    assert_eq!(company_color(&registry(), "acme"), None);
}

#[test]
fn palette_wraps_around() {
    assert_eq!(color_for_index(PALETTE.len()), PALETTE[0]);
    assert_eq!(color_for_index(PALETTE.len() + 3), PALETTE[3]);
}
