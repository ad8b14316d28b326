//! Tests for visibility toggles and country filtering.

use super::*;

fn registry() -> CompanyRegistry {
    [
        Company::new("tiket", Region::Indonesia),
        Company::new("grab", Region::SingaporeMalaysia),
        Company::new("shopee", Region::Singapore),
        Company::new("touchngo", Region::Malaysia),
    ]
    .into_iter()
    .collect()
}

fn keys(companies: &[&Company]) -> Vec<String> {
    companies.iter().map(|c| c.key.clone()).collect()
}

mod country_filter_tests {
    use super::*;

    #[test]
    fn parses_all_and_countries() {
        assert_eq!("all".parse::<CountryFilter>().unwrap(), CountryFilter::All);
        assert_eq!(
            "Malaysia".parse::<CountryFilter>().unwrap(),
            CountryFilter::Only(Country::Malaysia)
        );
        assert!("mars".parse::<CountryFilter>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let filter = CountryFilter::Only(Country::Singapore);
        assert_eq!(filter.to_string(), "singapore");
        assert_eq!(filter.to_string().parse::<CountryFilter>().unwrap(), filter);
    }

    #[test]
    fn all_admits_every_region() {
        for region in Region::ALL {
            assert!(CountryFilter::All.admits(region));
        }
    }

    #[test]
    fn combined_region_passes_either_country() {
        assert!(CountryFilter::Only(Country::Malaysia).admits(Region::SingaporeMalaysia));
        assert!(CountryFilter::Only(Country::Singapore).admits(Region::SingaporeMalaysia));
        assert!(!CountryFilter::Only(Country::Indonesia).admits(Region::SingaporeMalaysia));
    }
}

mod visibility_map_tests {
    use super::*;

    #[test]
    fn unknown_keys_default_to_shown() {
        let map = VisibilityMap::default();
        assert!(map.is_shown("anything"));
    }

    #[test]
    fn toggle_flips_state() {
        let map = VisibilityMap::all_shown(&registry());
        let hidden = map.apply(&VisibilityAction::Toggle("grab".to_string()));
        assert!(!hidden.is_shown("grab"));
        let shown = hidden.apply(&VisibilityAction::Toggle("grab".to_string()));
        assert!(shown.is_shown("grab"));
    }

    #[test]
    fn apply_does_not_mutate_previous_snapshot() {
        let map = VisibilityMap::all_shown(&registry());
        let _next = map.apply(&VisibilityAction::Hide("tiket".to_string()));
        assert!(map.is_shown("tiket"));
    }

    #[test]
    fn only_hides_everything_else() {
        let map = VisibilityMap::all_shown(&registry())
            .apply(&VisibilityAction::Only(vec!["shopee".to_string()]));
        assert!(map.is_shown("shopee"));
        assert!(!map.is_shown("tiket"));
        assert_eq!(map.hidden().collect::<Vec<_>>(), ["tiket", "grab", "touchngo"]);
    }

    #[test]
    fn show_all_and_hide_all() {
        let map = VisibilityMap::all_shown(&registry()).apply(&VisibilityAction::HideAll);
        assert_eq!(map.hidden().count(), 4);
        let map = map.apply(&VisibilityAction::ShowAll);
        assert_eq!(map.hidden().count(), 0);
    }
}

mod visible_companies_tests {
    use super::*;

    #[test]
    fn hide_all_on_default_map_hides_unlisted_companies() {
        let registry = registry();
        let map = VisibilityMap::default().apply(&VisibilityAction::HideAll);
        assert!(visible_companies(&registry, CountryFilter::All, &map).is_empty());

        let map = map.apply(&VisibilityAction::ShowAll);
        assert_eq!(visible_companies(&registry, CountryFilter::All, &map).len(), 4);
    }

    #[test]
    fn only_on_default_map_keeps_just_the_listed_companies() {
        let registry = registry();
        let map =
            VisibilityMap::default().apply(&VisibilityAction::Only(vec!["tiket".to_string()]));
        assert_eq!(keys(&visible_companies(&registry, CountryFilter::All, &map)), ["tiket"]);

        let map = map.apply(&VisibilityAction::Show("grab".to_string()));
        assert_eq!(
            keys(&visible_companies(&registry, CountryFilter::All, &map)),
            ["tiket", "grab"]
        );
    }

    #[test]
    fn all_filter_with_default_map_shows_everything() {
        let registry = registry();
        let visible = visible_companies(&registry, CountryFilter::All, &VisibilityMap::default());
        assert_eq!(keys(&visible), ["tiket", "grab", "shopee", "touchngo"]);
    }

    #[test]
    fn country_filter_and_toggle_compose_with_and() {
        let registry = registry();
        let malaysia = CountryFilter::Only(Country::Malaysia);

        let off = VisibilityMap::all_shown(&registry)
            .apply(&VisibilityAction::Hide("touchngo".to_string()));
        assert!(
            !keys(&visible_companies(&registry, malaysia, &off)).contains(&"touchngo".to_string())
        );

        let on = off.apply(&VisibilityAction::Show("touchngo".to_string()));
        assert_eq!(keys(&visible_companies(&registry, malaysia, &on)), ["grab", "touchngo"]);
    }

    #[test]
    fn mismatched_country_dominates_toggle() {
        let registry = registry();
        let malaysia = CountryFilter::Only(Country::Malaysia);
        let map = VisibilityMap::all_shown(&registry)
            .apply(&VisibilityAction::Show("tiket".to_string()));

        let visible = keys(&visible_companies(&registry, malaysia, &map));
        assert!(!visible.contains(&"tiket".to_string()));
        assert!(!visible.contains(&"shopee".to_string()));
    }

    #[test]
    fn keeps_canonical_order_when_some_hidden() {
        let registry = registry();
        let map = VisibilityMap::all_shown(&registry)
            .apply(&VisibilityAction::Hide("grab".to_string()));
        assert_eq!(
            keys(&visible_companies(&registry, CountryFilter::All, &map)),
            ["tiket", "shopee", "touchngo"]
        );
    }
}
