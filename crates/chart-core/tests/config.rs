// File: crates/chart-core/tests/config.rs
// Purpose: TOML configuration: partial overrides, enum forms and validation.

use cpi_chart_core::{load_str, Chart, ChartConfig, ConfigError, FinalTick, HitMode, LoadOptions, ViewState};

#[test]
fn defaults_match_the_page() {
    let cfg = ChartConfig::default();
    assert_eq!((cfg.render.width, cfg.render.height), (800, 400));
    let i = cfg.render.insets;
    assert_eq!((i.left, i.right, i.top, i.bottom), (50, 20, 20, 30));
    assert_eq!((cfg.axis.value_min, cfg.axis.value_max), (0.0, 150.0));
    assert_eq!(cfg.axis.final_tick, FinalTick::LastDataYear);
    assert_eq!(cfg.hit.initial_mode, HitMode::Wide);
    assert_eq!((cfg.hit.wide_width, cfg.hit.narrow_width, cfg.hit.hover_width), (150.0, 0.0, 5.0));
    assert_eq!(cfg.tooltip.point_offset, (-40.0, 30.0));
    assert_eq!(cfg.load.date_column, "year");
    assert!(!cfg.load.strip_percent);
    assert_eq!(ChartConfig::from_toml_str("").expect("empty toml"), cfg);
}

#[test]
fn partial_override() {
    let cfg = ChartConfig::from_toml_str(
        r#"
        [render]
        theme = "dark"
        insets = { left = 60 }

        [axis]
        final_tick = { year = 2024 }
        hide_last_tick_line = true

        [hit]
        initial_mode = "narrow"
        narrow_width = 2.0

        [tooltip]
        point_offset = [-10.0, 5.0]

        [load]
        strip_percent = true
        "#,
    )
    .expect("parse");
    assert_eq!(cfg.render.theme, "dark");
    assert_eq!(cfg.render.insets.left, 60);
    assert_eq!(cfg.render.insets.top, 20);
    assert_eq!(cfg.render.width, 800);
    assert_eq!(cfg.axis.final_tick, FinalTick::Year(2024));
    assert!(cfg.axis.hide_last_tick_line);
    assert_eq!(cfg.axis.value_max, 150.0);
    assert_eq!(cfg.hit.initial_mode, HitMode::Narrow);
    assert_eq!(cfg.hit.narrow_width, 2.0);
    assert_eq!(cfg.hit.wide_width, 150.0);
    assert_eq!(cfg.tooltip.point_offset, (-10.0, 5.0));
    assert_eq!(cfg.tooltip.name_offset, (20.0, 20.0));
    assert!(cfg.load.strip_percent);

    let last = ChartConfig::from_toml_str("[axis]\nfinal_tick = \"last_data_year\"\n").expect("parse");
    assert_eq!(last.axis.final_tick, FinalTick::LastDataYear);
}

#[test]
fn config_flows_into_the_chart() {
    let cfg = ChartConfig::from_toml_str("[render]\ntheme = \"dark\"\n[hit]\ninitial_mode = \"narrow\"\n").expect("parse");
    let ds = load_str("year,A\n2000年1月,1%\n2001年1月,2%\n", &LoadOptions { strip_percent: true, ..Default::default() })
        .expect("load");
    let chart = Chart::new(ds, cfg).expect("chart");
    assert_eq!(chart.theme().name, "dark");
    let state = chart.initial_state();
    assert_eq!(state.mode(), HitMode::Narrow);
    let svg = chart.render_to_svg_string(&state, &ViewState::default());
    assert!(svg.contains(&format!("fill=\"{}\"", chart.theme().background)));
}

#[test]
fn unknown_theme_falls_back_to_light() {
    let cfg = ChartConfig::from_toml_str("[render]\ntheme = \"sepia\"\n").expect("parse");
    let ds = load_str("year,A\n2000年1月,1\n", &LoadOptions::default()).expect("load");
    assert_eq!(Chart::new(ds, cfg).expect("chart").theme().name, "light");
}

#[test]
fn invalid_values_are_rejected() {
    let err = ChartConfig::from_toml_str("[axis]\nvalue_min = 10.0\nvalue_max = 10.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValueDomain { .. }));

    let err = ChartConfig::from_toml_str("[axis]\nyear_format = \"%Q\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::YearFormat(ref f) if f == "%Q"));

    let err = ChartConfig::from_toml_str("[hit]\ninitial_mode = \"medium\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let mut cfg = ChartConfig::default();
    cfg.axis.value_max = f64::NAN;
    let ds = load_str("year,A\n2000年1月,1\n", &LoadOptions::default()).expect("load");
    assert!(Chart::new(ds, cfg).is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = ChartConfig::load("does/not/exist.toml").unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("exist.toml")),
        other => panic!("unexpected error: {other}"),
    }
}
