use cmp_plot::api::{PLOT_THEME_JSON_SCHEMA_V1, PlotTheme};
use cmp_plot::render::Color;

#[test]
fn theme_contract_round_trips() {
    let theme = PlotTheme {
        label_background_colour: Some(Color::rgba(0.0, 0.0, 0.0, 0.5)),
        title_font_size_px: 22.0,
        ..PlotTheme::default()
    };

    let json = theme.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {PLOT_THEME_JSON_SCHEMA_V1}")));

    let parsed = PlotTheme::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, theme);
}

#[test]
fn bare_partial_theme_falls_back_to_defaults() {
    let parsed = PlotTheme::from_json_compat_str(r#"{ "label_font_size_px": 11.0 }"#)
        .expect("parse bare theme");
    assert_eq!(parsed.label_font_size_px, 11.0);
    assert_eq!(parsed.title_colour, PlotTheme::default().title_colour);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = r#"{ "schema_version": 2, "theme": {} }"#;
    assert!(PlotTheme::from_json_compat_str(json).is_err());
}

#[test]
fn invalid_theme_values_are_rejected() {
    assert!(PlotTheme::from_json_compat_str(r#"{ "title_font_size_px": 0.0 }"#).is_err());
    assert!(PlotTheme::from_json_compat_str(r#"{ "graph_margin_px": -1.0 }"#).is_err());
    assert!(
        PlotTheme::from_json_compat_str(
            r#"{ "x_label_colour": { "red": 2.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 } }"#
        )
        .is_err()
    );
    assert!(PlotTheme::from_json_compat_str("not json").is_err());
}
