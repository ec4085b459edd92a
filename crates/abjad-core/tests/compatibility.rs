//! End-to-end compatibility analysis.

use abjad_core::analyze_compatibility;
use abjad_model::{
    AbjadError, CompatibilityMethod, CompatibilityOptions, CompatibilityWeights, Convention,
    NameInput, Recommendation,
};

fn maghribi() -> CompatibilityOptions {
    CompatibilityOptions::new(Convention::Maghribi)
}

#[test]
fn omitted_mothers_leave_daily_layer_unavailable() {
    let result = analyze_compatibility(
        &NameInput::new("محمد"),
        &NameInput::new("فاطمة"),
        &maghribi(),
    )
    .expect("compatibility");

    assert_eq!(result.components.len(), 3);
    assert!(result.component(CompatibilityMethod::Daily).is_none());
    insta::assert_json_snapshot!(result.daily, @r#"
    {
      "status": "unavailable",
      "reason": "mothers' names were not given"
    }
    "#);
    insta::assert_json_snapshot!(result.elemental, @r#"
    {
      "element_a": "water",
      "element_b": "air",
      "relation": "neutral",
      "score": 60
    }
    "#);
}

#[test]
fn latin_and_arabic_spellings_agree() {
    let arabic = analyze_compatibility(
        &NameInput::new("محمد"),
        &NameInput::new("فاطمة"),
        &maghribi(),
    )
    .expect("arabic");
    let latin = analyze_compatibility(
        &NameInput::new("Mohamed"),
        &NameInput::new("Fatima"),
        &maghribi(),
    )
    .expect("latin");
    assert_eq!(arabic.overall, latin.overall);
    assert_eq!((latin.total_a, latin.total_b), (92, 135));
}

#[test]
fn overall_stays_in_range_and_matches_recommendation() {
    let names = ["محمد", "علي", "فاطمة", "خديجة", "غالب", "ضياء", "عبد الله"];
    for convention in Convention::ALL {
        for a in names {
            for b in names {
                let result = analyze_compatibility(
                    &NameInput::new(a),
                    &NameInput::new(b),
                    &CompatibilityOptions::new(convention),
                )
                .expect("compatibility");
                assert!(result.overall <= 100);
                assert_eq!(result.recommendation, Recommendation::from_score(result.overall));
            }
        }
    }
}

#[test]
fn custom_weights_change_the_overall() {
    let only_elemental = CompatibilityWeights {
        spiritual: 0.0,
        elemental: 1.0,
        planetary: 0.0,
        daily: 0.0,
    };
    let result = analyze_compatibility(
        &NameInput::new("محمد"),
        &NameInput::new("فاطمة"),
        &maghribi().with_weights(only_elemental),
    )
    .expect("compatibility");
    assert_eq!(result.overall, result.elemental.score);
}

#[test]
fn invalid_weights_are_rejected() {
    let negative = CompatibilityWeights {
        planetary: -0.5,
        ..CompatibilityWeights::default()
    };
    let err = analyze_compatibility(
        &NameInput::new("محمد"),
        &NameInput::new("فاطمة"),
        &maghribi().with_weights(negative),
    )
    .unwrap_err();
    assert!(matches!(err, AbjadError::InvalidInput { ref field, .. } if field == "weights.planetary"));
}

#[test]
fn only_weight_ratios_matter() {
    let scaled = |scale: f64| CompatibilityWeights {
        spiritual: scale,
        elemental: scale,
        planetary: scale,
        daily: 0.0,
    };
    let overall = |weights| {
        analyze_compatibility(
            &NameInput::new("محمد"),
            &NameInput::new("فاطمة"),
            &maghribi().with_weights(weights),
        )
        .expect("compatibility")
        .overall
    };
    // (90 + 60 + 55) / 3
    assert_eq!(overall(scaled(1.0)), 68);
    assert_eq!(overall(scaled(1e300)), 68);
}

#[test]
fn weights_whose_sum_overflows_are_rejected() {
    let huge = CompatibilityWeights {
        spiritual: 1e308,
        elemental: 1e308,
        planetary: 1e308,
        daily: 0.0,
    };
    let err = analyze_compatibility(
        &NameInput::new("محمد"),
        &NameInput::new("فاطمة"),
        &maghribi().with_weights(huge),
    )
    .unwrap_err();
    assert!(matches!(err, AbjadError::InvalidInput { ref field, .. } if field == "weights"));
}

#[test]
fn letterless_mother_name_is_an_error() {
    let err = analyze_compatibility(
        &NameInput::new("محمد").with_mother("123"),
        &NameInput::new("فاطمة").with_mother("خديجة"),
        &maghribi(),
    )
    .unwrap_err();
    assert!(matches!(err, AbjadError::InvalidInput { ref field, .. } if field == "mother_name_a"));
}
