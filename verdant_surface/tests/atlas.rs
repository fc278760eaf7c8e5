// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `verdant_surface` crate.
//!
//! These drive the [`Atlas`] the way the rendering collaborators do: load a
//! small dataset pair, then query fills, tooltips, series, and trend lines.

use verdant_records::Metric;
use verdant_scale::{Rgb, UNAVAILABLE, compare_color};
use verdant_selection::ToggleOutcome;
use verdant_surface::{Atlas, LoadOutcome, SeriesPoint};

const BOUNDARY: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"NAME": "Alameda County"}},
        {"type": "Feature", "properties": {"NAME": "Fresno County"}},
        {"type": "Feature", "properties": {"name": "Kern County"}}
    ]
}"#;

const TABLE: &str = "\
county,calendar_year,total_ghg_emissions,emissions_per_person,population
Alameda,2000,100.0,5.0,1000000
Fresno,2000,200.0,4.0,800000
Alameda,2010,120.0,4.6,1040000
Fresno,2010,180.0,3.5,820000
Alameda,2024,150.0,4.0,1100000
Fresno,2024,100.0,2.0,900000
Kern,2024,50.0,3.0,700000
";

fn loaded_atlas() -> Atlas {
    let mut atlas = Atlas::new(BOUNDARY).unwrap();
    let ticket = atlas.begin_load(Metric::Total, "2024");
    let outcome = atlas.complete_load(ticket, TABLE, TABLE).unwrap();
    assert_eq!(outcome, LoadOutcome::Applied);
    atlas
}

#[test]
fn boundary_names_are_normalized_in_order() {
    let atlas = Atlas::new(BOUNDARY).unwrap();
    assert_eq!(atlas.counties(), ["Alameda", "Fresno", "Kern"]);
}

#[test]
fn queries_before_the_first_load_answer_neutrally() {
    let atlas = Atlas::new(BOUNDARY).unwrap();
    assert_eq!(atlas.fill_color("Alameda"), UNAVAILABLE);
    assert_eq!(atlas.tooltip("Alameda"), None);
    assert!(atlas.series_for("Alameda").is_empty());
    assert_eq!(atlas.active(), None);
    assert_eq!(atlas.legend_domain(), (0.0, 100.0));
}

#[test]
fn applied_load_swaps_in_the_requested_pair() {
    let atlas = loaded_atlas();
    assert_eq!(atlas.active(), Some((Metric::Total, "2024")));
    assert_eq!(atlas.legend_domain(), (50.0, 150.0));
}

#[test]
fn stale_load_completion_is_discarded() {
    let mut atlas = Atlas::new(BOUNDARY).unwrap();
    let stale = atlas.begin_load(Metric::Total, "2010");
    let fresh = atlas.begin_load(Metric::PerPerson, "2024");

    assert_eq!(
        atlas.complete_load(stale, TABLE, TABLE).unwrap(),
        LoadOutcome::Stale
    );
    assert_eq!(atlas.active(), None, "stale data must not be shown");

    assert_eq!(
        atlas.complete_load(fresh, TABLE, TABLE).unwrap(),
        LoadOutcome::Applied
    );
    assert_eq!(atlas.active(), Some((Metric::PerPerson, "2024")));
}

#[test]
fn stale_completion_after_an_applied_load_keeps_the_newer_snapshot() {
    let mut atlas = Atlas::new(BOUNDARY).unwrap();
    let old = atlas.begin_load(Metric::Total, "2010");
    let new = atlas.begin_load(Metric::Total, "2024");

    assert_eq!(
        atlas.complete_load(new, TABLE, TABLE).unwrap(),
        LoadOutcome::Applied
    );
    assert_eq!(
        atlas.complete_load(old, TABLE, TABLE).unwrap(),
        LoadOutcome::Stale
    );
    assert_eq!(atlas.active(), Some((Metric::Total, "2024")));
}

#[test]
fn fill_color_maps_percent_change_onto_the_diverging_ramp() {
    let atlas = loaded_atlas();
    // Fresno halved since 2000: -50% over [-75, 75] lands in the green half.
    let improving = atlas.fill_color("Fresno County");
    // Alameda rose 50%: the red half.
    let worsening = atlas.fill_color("Alameda County");
    assert!(improving.g >= 195 && improving.r < 255);
    assert_eq!(worsening.r, 255);
    assert!(worsening.g < 255);
}

#[test]
fn fill_color_for_a_county_without_data_is_the_zero_change_yellow() {
    let atlas = loaded_atlas();
    // No record for this name: it reads as zero change, not as an error.
    assert_eq!(atlas.fill_color("Atlantis"), Rgb::new(255, 255, 0));
}

#[test]
fn tooltip_reconstructs_the_displayed_current_value() {
    let atlas = loaded_atlas();
    let tip = atlas.tooltip("Alameda County").unwrap();
    assert_eq!(tip.percent_change, 50.0);
    assert_eq!(tip.baseline_value, Some(100.0));
    assert_eq!(tip.current_value, Some(150.0));
    assert_eq!(tip.population, Some(1_100_000.0));
}

#[test]
fn tooltip_population_falls_back_to_the_baseline_year() {
    let mut atlas = Atlas::new(BOUNDARY).unwrap();
    let table = "\
county,calendar_year,total_ghg_emissions,emissions_per_person,population
Alameda,2000,100.0,5.0,1000000
";
    let ticket = atlas.begin_load(Metric::Total, "2024");
    let _ = atlas.complete_load(ticket, table, table).unwrap();

    let tip = atlas.tooltip("Alameda").unwrap();
    assert_eq!(tip.population, Some(1_000_000.0));
    // No 2024 record: baseline shows, but there is no current value.
    assert_eq!(tip.baseline_value, Some(100.0));
    assert_eq!(tip.current_value, Some(100.0));
    assert_eq!(tip.percent_change, 0.0);
}

#[test]
fn tooltip_without_a_baseline_has_no_values() {
    let atlas = loaded_atlas();
    let tip = atlas.tooltip("Kern").unwrap();
    assert_eq!(tip.baseline_value, None);
    assert_eq!(tip.current_value, None);
    assert_eq!(tip.percent_change, 0.0);
    assert_eq!(tip.population, Some(700_000.0));
}

#[test]
fn change_color_darkens_the_bright_midband() {
    let atlas = loaded_atlas();
    // Kern has no baseline: it reads as zero change, a bright yellow fill
    // that must darken to stay legible as tooltip text.
    assert_eq!(atlas.fill_color("Kern"), Rgb::new(255, 255, 0));
    assert_eq!(atlas.change_color("Kern"), Rgb::new(178, 178, 0));
}

#[test]
fn series_are_year_ascending_for_the_active_metric() {
    let atlas = loaded_atlas();
    let series = atlas.series_for("Alameda County");
    assert_eq!(
        series,
        [
            SeriesPoint {
                year: "2000".to_owned(),
                value: 100.0
            },
            SeriesPoint {
                year: "2010".to_owned(),
                value: 120.0
            },
            SeriesPoint {
                year: "2024".to_owned(),
                value: 150.0
            },
        ]
    );
}

#[test]
fn trend_line_uses_ordinal_positions() {
    let atlas = loaded_atlas();
    let line = atlas.trend_line_for("Alameda").unwrap();
    // (0,100),(1,120),(2,150): least squares slope 25, intercept 98.33.
    assert!((line.slope - 25.0).abs() < 1e-9);

    let segment = atlas.trend_segment_for("Alameda").unwrap();
    assert_eq!(segment.p0.x, 0.0);
    assert_eq!(segment.p1.x, 2.0);
}

#[test]
fn short_series_draw_no_trend_line() {
    let atlas = loaded_atlas();
    // Kern only has a 2024 record.
    assert_eq!(atlas.trend_line_for("Kern"), None);
    assert_eq!(atlas.trend_segment_for("Kern"), None);
}

#[test]
fn activation_forwards_to_the_selection_controller() {
    let mut atlas = loaded_atlas();
    assert_eq!(atlas.county_activated("Alameda County"), ToggleOutcome::Added);
    assert_eq!(atlas.county_activated("Fresno"), ToggleOutcome::Added);
    assert_eq!(atlas.selection().selected(), ["Alameda", "Fresno"]);

    assert_eq!(
        atlas.county_activated("Alameda"),
        ToggleOutcome::Removed,
        "activations use the normalized name"
    );
}

#[test]
fn handoff_orders_chart_years_and_colors() {
    let mut atlas = loaded_atlas();
    let _ = atlas.county_activated("Fresno");
    let _ = atlas.county_activated("Kern");

    assert_eq!(atlas.handoff_counties(), ["Fresno", "Kern"]);
    assert_eq!(atlas.chart_years(), ["2000", "2010", "2024"]);

    // Multi-county mode assigns categorical colors by handoff position.
    assert_eq!(atlas.series_color(0, 180.0), compare_color(0));
    assert_eq!(atlas.series_color(1, 50.0), compare_color(1));
}

#[test]
fn single_county_series_shade_along_the_ramp() {
    let mut atlas = loaded_atlas();
    let _ = atlas.county_activated("Alameda");

    assert_eq!(atlas.chart_value_domain(), (100.0, 150.0));
    // The domain minimum is pure green, the maximum pure red.
    assert_eq!(atlas.series_color(0, 100.0), Rgb::new(34, 195, 74));
    assert_eq!(atlas.series_color(0, 150.0), Rgb::new(255, 0, 0));
}

#[test]
fn axis_ticks_come_back_descending() {
    let atlas = loaded_atlas();
    assert_eq!(atlas.axis_ticks(0.0, 47.0, 5), [47.0, 37.0, 27.0, 17.0, 7.0]);
}

#[test]
fn baseline_year_load_pins_the_legend_domain() {
    let mut atlas = Atlas::new(BOUNDARY).unwrap();
    let ticket = atlas.begin_load(Metric::Total, "2000");
    let _ = atlas.complete_load(ticket, TABLE, TABLE).unwrap();
    assert_eq!(atlas.legend_domain(), (0.0, 100.0));
}
