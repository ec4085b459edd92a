use std::fs;

use abjad_cli::settings::{load_settings_from, resolve_settings};
use abjad_cli::summary::{
    NormalizeReport, ReportFormat, TotalReport, explain, render_compatibility, render_normalize,
    render_profile, render_total, render_transliteration,
};
use abjad_core::{analyze_compatibility, analyze_name, letter_breakdown, total};
use abjad_model::{
    CompatibilityOptions, CompatibilityWeights, Convention, NameInput, NormalizationOptions,
};
use abjad_normalization::transliterate;
use insta::assert_snapshot;
use serde_json::Value;

fn quarter_half_weights() -> CompatibilityWeights {
    CompatibilityWeights {
        spiritual: 1.0,
        elemental: 1.0,
        planetary: 2.0,
        daily: 0.0,
    }
}

#[test]
fn explain_lists_each_method_contribution() {
    let options =
        CompatibilityOptions::new(Convention::Maghribi).with_weights(quarter_half_weights());
    let result = analyze_compatibility(
        &NameInput::new("محمد"),
        &NameInput::new("فاطمة"),
        &options,
    )
    .unwrap();

    assert_snapshot!(
        explain(&result),
        @"Spiritual (destiny): 90 x 0.25 = 22.5; Elemental (temperament): 60 x 0.25 = 15.0; Planetary (cosmic): 55 x 0.50 = 27.5"
    );
    assert_eq!(result.overall, 65);
}

#[test]
fn compatibility_table_shows_totals_and_overall() {
    let result = analyze_compatibility(
        &NameInput::new("محمد"),
        &NameInput::new("فاطمة"),
        &CompatibilityOptions::new(Convention::Maghribi),
    )
    .unwrap();

    let output = render_compatibility(&result, ReportFormat::Table).unwrap();
    assert!(output.starts_with("Totals: 92 + 135 (maghribi)"));
    assert!(output.contains("Spiritual (destiny)"));
    assert!(output.contains("Daily interaction"));
    assert!(output.ends_with("Overall: 70/100 (workable with effort)"));
}

#[test]
fn compatibility_json_carries_daily_layer_with_mothers() {
    let result = analyze_compatibility(
        &NameInput::new("محمد").with_mother("آمنة"),
        &NameInput::new("فاطمة").with_mother("خديجة"),
        &CompatibilityOptions::new(Convention::Maghribi),
    )
    .unwrap();

    let json: Value =
        serde_json::from_str(&render_compatibility(&result, ReportFormat::Json).unwrap()).unwrap();
    assert_eq!(json["total_a"], 92);
    assert_eq!(json["mother_totals"], serde_json::json!([96, 622]));
    assert_eq!(json["overall"], 72);
    assert_eq!(json["components"].as_array().map(Vec::len), Some(4));
}

#[test]
fn total_report_as_json() {
    let report = TotalReport {
        input: "محمد".to_string(),
        normalized: "محمد".to_string(),
        convention: Convention::Maghribi,
        total: total("محمد", Convention::Maghribi),
        digital_root: 2,
        letters: letter_breakdown("محمد", Convention::Maghribi),
    };
    let json: Value =
        serde_json::from_str(&render_total(&report, ReportFormat::Json).unwrap()).unwrap();
    assert_eq!(json["total"], 92);
    assert_eq!(json["convention"], "maghribi");
    let values: Vec<u64> = json["letters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|letter| letter["value"].as_u64().unwrap())
        .collect();
    assert_eq!(values, vec![40, 8, 40, 4]);
}

#[test]
fn total_table_lists_letters() {
    let report = TotalReport {
        input: "علي".to_string(),
        normalized: "علي".to_string(),
        convention: Convention::Maghribi,
        total: 110,
        digital_root: 2,
        letters: letter_breakdown("علي", Convention::Maghribi),
    };
    let output = render_total(&report, ReportFormat::Table).unwrap();
    assert!(output.contains("110"));
    assert!(output.contains("Digital root"));
    assert!(output.contains("70"));
}

#[test]
fn normalize_table_is_the_bare_text() {
    let report = NormalizeReport {
        input: "فَاطِمَة".to_string(),
        normalized: "فاطمه".to_string(),
        options: NormalizationOptions::default(),
    };
    assert_eq!(render_normalize(&report, ReportFormat::Table).unwrap(), "فاطمه");
    let json: Value =
        serde_json::from_str(&render_normalize(&report, ReportFormat::Json).unwrap()).unwrap();
    assert_eq!(json["options"]["ta_marbuta_as"], "ha");
}

#[test]
fn profile_table_names_element_and_burj() {
    let profile = analyze_name(&NameInput::new("محمد"), Convention::Maghribi).unwrap();
    let output = render_profile(&profile, ReportFormat::Table).unwrap();
    assert!(output.contains("Water"));
    assert!(output.contains("ʿAqrab"));
    assert!(output.contains("Fire 2 / Earth 2 / Air 0 / Water 0"));
}

#[test]
fn profile_of_latin_name_shows_transliteration() {
    let profile = analyze_name(&NameInput::new("Muhammad"), Convention::Maghribi).unwrap();
    let output = render_profile(&profile, ReportFormat::Table).unwrap();
    assert!(output.contains("Transliteration"));
    assert!(output.contains("95% confidence"));
}

#[test]
fn transliteration_table_reports_source() {
    let output = render_transliteration(&transliterate("Xq9"), ReportFormat::Table).unwrap();
    assert!(output.contains("كسق"));
    assert!(output.contains("heuristic"));
    assert!(output.contains("55%"));
}

#[test]
fn settings_file_is_loaded_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "convention = \"mashriqi\"\n\n[weights]\ndaily = 0.5\n").unwrap();

    let settings = resolve_settings(Some(&path)).unwrap();
    assert_eq!(settings.convention, Convention::Mashriqi);
    assert_eq!(settings.weights.daily, 0.5);
}

#[test]
fn missing_explicit_settings_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}
