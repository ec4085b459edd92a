use anyhow::{Context, Result};
use tracing::{info, info_span};

use abjad_cli::logging::redact_value;
use abjad_cli::settings::Settings;
use abjad_cli::summary::{
    NormalizeReport, ReportFormat, TotalReport, explain, render_compatibility, render_normalize,
    render_profile, render_total, render_transliteration,
};
use abjad_core::tables::LetterValueTable;
use abjad_core::total::{breakdown_normalized, sum_normalized};
use abjad_core::{analyze_compatibility, analyze_name_with, digital_root, resolve_name};
use abjad_model::{Convention, NameInput, NormalizationOptions, TaMarbutaAs};
use abjad_normalization::{normalize, transliterate};

use crate::cli::{CompatArgs, NormalizeArgs, ProfileArgs, TotalArgs, TranslitArgs};

pub fn run_normalize(
    args: &NormalizeArgs,
    settings: &Settings,
    format: ReportFormat,
) -> Result<String> {
    let options = normalize_options(args, settings.normalization);
    let normalized = normalize(&args.text, &options);
    info!(
        input = %redact_value(&args.text),
        chars = normalized.chars().count(),
        "normalized text"
    );
    render_normalize(
        &NormalizeReport {
            input: args.text.clone(),
            normalized,
            options,
        },
        format,
    )
}

pub fn run_total(args: &TotalArgs, settings: &Settings, format: ReportFormat) -> Result<String> {
    let convention = convention_or_default(args.convention.map(Into::into), settings);
    let resolved = resolve_name(&args.name, &settings.normalization);
    let table = LetterValueTable::for_convention(convention);
    let total = sum_normalized(&resolved.normalized, table);
    info!(name = %redact_value(&args.name), total, "computed total");
    render_total(
        &TotalReport {
            input: args.name.clone(),
            normalized: resolved.normalized.clone(),
            convention,
            total,
            digital_root: digital_root(total),
            letters: breakdown_normalized(&resolved.normalized, table),
        },
        format,
    )
}

pub fn run_profile(args: &ProfileArgs, settings: &Settings, format: ReportFormat) -> Result<String> {
    let convention = convention_or_default(args.convention.map(Into::into), settings);
    let mut input = NameInput::new(&args.name);
    if let Some(mother) = &args.mother {
        input = input.with_mother(mother);
    }
    let span = info_span!("profile", name = %redact_value(&args.name));
    let _guard = span.enter();
    let profile = analyze_name_with(&input, convention, &settings.normalization)
        .context("analyze name")?;
    render_profile(&profile, format)
}

pub fn run_compat(args: &CompatArgs, settings: &Settings, format: ReportFormat) -> Result<String> {
    let options = settings.compatibility_options(args.convention.map(Into::into));
    let a = with_optional_mother(&args.name_a, args.mother_a.as_deref());
    let b = with_optional_mother(&args.name_b, args.mother_b.as_deref());
    let span = info_span!(
        "compat",
        name_a = %redact_value(&args.name_a),
        name_b = %redact_value(&args.name_b)
    );
    let _guard = span.enter();
    let result = analyze_compatibility(&a, &b, &options).context("analyze compatibility")?;
    info!(
        overall = result.overall,
        recommendation = %result.recommendation,
        "compatibility computed"
    );
    let mut output = render_compatibility(&result, format)?;
    if args.explain && format == ReportFormat::Table {
        output.push('\n');
        output.push_str(&explain(&result));
    }
    Ok(output)
}

pub fn run_translit(args: &TranslitArgs, format: ReportFormat) -> Result<String> {
    let result = transliterate(&args.text);
    info!(
        input = %redact_value(&args.text),
        confidence = result.confidence,
        "transliterated"
    );
    render_transliteration(&result, format)
}

fn convention_or_default(flag: Option<Convention>, settings: &Settings) -> Convention {
    flag.unwrap_or(settings.convention)
}

fn with_optional_mother(name: &str, mother: Option<&str>) -> NameInput {
    let input = NameInput::new(name);
    match mother {
        Some(mother) => input.with_mother(mother),
        None => input,
    }
}

/// Settings give the baseline; each flag can only switch a step off or keep
/// more of the text.
fn normalize_options(args: &NormalizeArgs, base: NormalizationOptions) -> NormalizationOptions {
    let mut options = base;
    if args.keep_diacritics {
        options.strip_diacritics = false;
    }
    if args.keep_hamza {
        options.unify_alif = false;
    }
    if args.no_allah {
        options.normalize_allah = false;
    }
    if args.distinct_ta_marbuta {
        options.ta_marbuta_as = TaMarbutaAs::Distinct;
    }
    if args.keep_tatweel {
        options.strip_tatweel = false;
    }
    if args.no_spaces {
        options.keep_spaces = false;
    }
    options
}
