//! Advisory checks on chart data
//!
//! The mapper accepts any input; these checks only tell the editor what is
//! likely to render oddly.

use std::collections::HashSet;

use studio_types::{ChartType, DataSet, Diagnostic};

/// Inspect `data` as it would be drawn by `chart_type`
pub fn validate(chart_type: ChartType, data: &DataSet) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if data.series.is_empty() {
        diagnostics.push(Diagnostic::NoSeries);
    }

    match &data.categories {
        None if chart_type.needs_categories() => diagnostics.push(Diagnostic::MissingCategories),
        Some(categories) if chart_type == ChartType::Sankey && categories.len() < 2 => {
            diagnostics.push(Diagnostic::TooFewCategories {
                required: 2,
                actual: categories.len(),
            });
        }
        _ => {}
    }

    for series in &data.series {
        if series.data.is_empty() {
            diagnostics.push(Diagnostic::EmptySeries {
                series: series.name.clone(),
            });
            continue;
        }
        if let Some(categories) = &data.categories {
            if chart_type.needs_categories() && series.data.len() != categories.len() {
                diagnostics.push(Diagnostic::RaggedSeries {
                    series: series.name.clone(),
                    expected: categories.len(),
                    actual: series.data.len(),
                });
            }
        }
        if let Some(index) = series.data.iter().position(|v| !v.is_finite()) {
            diagnostics.push(Diagnostic::NonFiniteValue {
                series: series.name.clone(),
                index,
            });
        }
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for series in &data.series {
        let name = series.name.as_str();
        if !seen.insert(name) && reported.insert(name) {
            diagnostics.push(Diagnostic::DuplicateSeriesName {
                name: name.to_string(),
            });
        }
    }

    log::debug!("{chart_type} data produced {} diagnostics", diagnostics.len());
    diagnostics
}

/// Like [`validate`], but flags tags that fall back to a line chart
pub fn validate_tag(tag: &str, data: &DataSet) -> Vec<Diagnostic> {
    match ChartType::from_tag(tag) {
        Some(chart_type) => validate(chart_type, data),
        None => {
            let mut diagnostics = vec![Diagnostic::UnknownChartType {
                tag: tag.to_string(),
            }];
            diagnostics.extend(validate(ChartType::Line, data));
            diagnostics
        }
    }
}
