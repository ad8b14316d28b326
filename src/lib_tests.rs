use super::*;

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn builtin_dataset_renders_every_track() {
    let dataset = dataset::builtin().unwrap();
    let state = chart::DashboardState::new(&dataset);
    for track in &dataset.tracks {
        let options = chart::RenderOptions {
            currency: state.currency,
            conversion_rate: 1.0,
            country_filter: state.country_filter,
            visibility: state.visibility_for(&track.id),
            narrow: false,
        };
        let model = chart::build_chart(track, &dataset.companies, &options);
        assert!(!model.is_empty());
        assert_eq!(model.categories.len(), track.rows.len());
    }
}
