//! Rendering of command results as terminal tables or JSON.

use abjad_model::{
    CompatibilityMethod, CompatibilityResult, Convention, ElementBalance, LayerStatus,
    LetterValue, NameProfile, NormalizationOptions, Transliteration, TransliterationSource,
};
use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

/// How a report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizeReport {
    pub input: String,
    pub normalized: String,
    pub options: NormalizationOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalReport {
    pub input: String,
    pub normalized: String,
    pub convention: Convention,
    pub total: u64,
    pub digital_root: u32,
    pub letters: Vec<LetterValue>,
}

pub fn render_normalize(report: &NormalizeReport, format: ReportFormat) -> Result<String> {
    if format == ReportFormat::Json {
        return to_json(report);
    }
    Ok(report.normalized.clone())
}

pub fn render_total(report: &TotalReport, format: ReportFormat) -> Result<String> {
    if format == ReportFormat::Json {
        return to_json(report);
    }
    let table = field_table(
        vec![
            ("Normalized", report.normalized.clone()),
            ("Convention", report.convention.to_string()),
            ("Total", report.total.to_string()),
            ("Digital root", report.digital_root.to_string()),
        ],
        Some("Total"),
    );
    Ok(format!("{table}\n{}", letters_table(&report.letters)))
}

pub fn render_profile(profile: &NameProfile, format: ReportFormat) -> Result<String> {
    if format == ReportFormat::Json {
        return to_json(profile);
    }
    let mut rows = Vec::new();
    if let Some(transliteration) = &profile.transliteration {
        rows.push((
            "Transliteration",
            format!(
                "{} ({}% confidence)",
                transliteration.primary, transliteration.confidence
            ),
        ));
    }
    rows.push(("Normalized", profile.normalized.clone()));
    rows.push(("Convention", profile.convention.to_string()));
    rows.push(("Total", profile.total.to_string()));
    if let Some(mother_total) = profile.mother_total {
        rows.push(("Mother's total", mother_total.to_string()));
    }
    rows.push(("Digital root", profile.digital_root.to_string()));
    rows.push((
        "Element",
        format!(
            "{} {} ({}) - {}",
            profile.element.symbol,
            profile.element.name,
            profile.element.arabic_name,
            profile.element.qualities
        ),
    ));
    rows.push((
        "Burj",
        format!(
            "{} ({}, {})",
            profile.burj.name, profile.burj.arabic_name, profile.burj.zodiac
        ),
    ));
    rows.push(("Ruling planet", profile.burj.ruling_planet.to_string()));
    rows.push(("Blessed day", profile.burj.blessed_day.to_string()));
    rows.push(("Verse", profile.burj.verse.to_string()));
    rows.push(("Letter balance", balance_line(&profile.balance)));
    rows.push((
        "Dominant element",
        profile
            .dominant_element
            .map_or_else(|| "-".to_string(), |e| e.to_string()),
    ));
    let table = field_table(rows, Some("Total"));
    Ok(format!("{table}\n{}", letters_table(&profile.letters)))
}

pub fn render_compatibility(result: &CompatibilityResult, format: ReportFormat) -> Result<String> {
    if format == ReportFormat::Json {
        return to_json(result);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Method"),
        header_cell("Result"),
        header_cell("Score"),
        header_cell("Weight"),
        header_cell("Contribution"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let spiritual = &result.spiritual;
    let elemental = &result.elemental;
    let planetary = &result.planetary;
    let rows = [
        (
            result.component(CompatibilityMethod::Spiritual),
            format!(
                "{} ({}): {}",
                spiritual.tier.index, spiritual.tier.label, spiritual.tier.description
            ),
        ),
        (
            result.component(CompatibilityMethod::Elemental),
            format!(
                "{} / {} ({})",
                elemental.element_a, elemental.element_b, elemental.relation
            ),
        ),
        (
            result.component(CompatibilityMethod::Planetary),
            format!(
                "{} ({}): {}",
                planetary.planet.planet, planetary.planet.arabic_name, planetary.planet.flavor
            ),
        ),
    ];
    for (component, description) in rows {
        let Some(component) = component else {
            continue;
        };
        table.add_row(vec![
            Cell::new(component.method.as_str()),
            Cell::new(description),
            Cell::new(component.score),
            Cell::new(format!("{:.2}", component.weight)),
            Cell::new(format!("{:.1}", component.contribution)),
        ]);
    }
    match &result.daily {
        LayerStatus::Available(daily) => {
            if let Some(component) = result.component(CompatibilityMethod::Daily) {
                table.add_row(vec![
                    Cell::new(component.method.as_str()),
                    Cell::new(format!(
                        "{} ({}) / {} ({}), {} day(s) apart",
                        daily.burj_a.name, daily.day_a, daily.burj_b.name, daily.day_b,
                        daily.distance
                    )),
                    Cell::new(component.score),
                    Cell::new(format!("{:.2}", component.weight)),
                    Cell::new(format!("{:.1}", component.contribution)),
                ]);
            }
        }
        LayerStatus::Unavailable { reason } => {
            table.add_row(vec![
                dim_cell("Daily interaction"),
                dim_cell(format!("unavailable: {reason}")),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
        }
    }

    let mut totals = format!(
        "Totals: {} + {} ({})",
        result.total_a, result.total_b, result.convention
    );
    if let Some((mother_a, mother_b)) = result.mother_totals {
        totals.push_str(&format!(", mothers {mother_a} + {mother_b}"));
    }
    Ok(format!(
        "{totals}\n{table}\nOverall: {}/100 ({})",
        result.overall, result.recommendation
    ))
}

pub fn render_transliteration(result: &Transliteration, format: ReportFormat) -> Result<String> {
    if format == ReportFormat::Json {
        return to_json(result);
    }
    let alternates = if result.alternates.is_empty() {
        "-".to_string()
    } else {
        result.alternates.join(", ")
    };
    let unmapped = if result.unmapped.is_empty() {
        "-".to_string()
    } else {
        result.unmapped.iter().collect()
    };
    let table = field_table(
        vec![
            ("Primary", result.primary.clone()),
            ("Alternates", alternates),
            ("Confidence", format!("{}%", result.confidence)),
            ("Source", source_label(result.source).to_string()),
            ("Unmapped", unmapped),
        ],
        Some("Primary"),
    );
    Ok(table.to_string())
}

/// One-line breakdown of how each method fed the overall score.
pub fn explain(result: &CompatibilityResult) -> String {
    result
        .components
        .iter()
        .map(|c| {
            format!(
                "{}: {} x {:.2} = {:.1}",
                c.method.as_str(),
                c.score,
                c.weight,
                c.contribution
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn source_label(source: TransliterationSource) -> &'static str {
    match source {
        TransliterationSource::Lexicon => "lexicon",
        TransliterationSource::Heuristic => "heuristic",
        TransliterationSource::Mixed => "lexicon + heuristic",
        TransliterationSource::Empty => "empty",
    }
}

fn balance_line(balance: &ElementBalance) -> String {
    format!(
        "Fire {} / Earth {} / Air {} / Water {}",
        balance.fire, balance.earth, balance.air, balance.water
    )
}

fn letters_table(letters: &[LetterValue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Letter"),
        header_cell("Value"),
        header_cell("Element"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for letter in letters {
        table.add_row(vec![
            Cell::new(letter.letter),
            Cell::new(letter.value),
            letter
                .element
                .map_or_else(|| dim_cell("-"), |e| Cell::new(e.as_str())),
        ]);
    }
    table
}

/// Two-column table; the value of the `highlight` field is emphasized.
fn field_table(rows: Vec<(&str, String)>, highlight: Option<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (field, value) in rows {
        let value_cell = if highlight == Some(field) {
            Cell::new(value)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(value)
        };
        table.add_row(vec![
            Cell::new(field).add_attribute(Attribute::Bold),
            value_cell,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize report")
}
