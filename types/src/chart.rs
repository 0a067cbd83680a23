//! Chart type catalog and saved chart configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tsify::Tsify;

use crate::data::DataSet;
use crate::overlay::ChartOptionOverlay;

/// Chart type enumeration
#[derive(Tsify, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    // Basic
    #[default]
    Line,
    Area,
    Bar,
    Pie,
    Scatter,
    // Comparison
    Radar,
    Heatmap,
    Gauge,
    Funnel,
    // Hierarchical
    Treemap,
    Sunburst,
    // Flow
    Sankey,
    // Statistical
    Boxplot,
    // Financial
    Candlestick,
    // Multivariate
    Parallel,
}

/// Grouping used by the chart picker
#[derive(Tsify, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
pub enum ChartCategory {
    Basic,
    Comparison,
    Hierarchical,
    Relational,
    Statistical,
    Financial,
    Multivariate,
}

/// Whether a chart is drawn on an x/y grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisLayout {
    /// Both `xAxis` and `yAxis` are emitted
    Cartesian,
    /// No cartesian axes; the chart is radial, hierarchical or uses its own axes
    None,
}

/// How many output series a chart produces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesLayout {
    /// One output series per input series
    PerSeries,
    /// A single output series regardless of input
    Single,
}

/// Tag that does not name any chart type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown chart type `{0}`")]
pub struct UnknownChartType(pub String);

impl ChartType {
    /// Every chart type, in catalog order
    pub const ALL: [ChartType; 15] = [
        ChartType::Line,
        ChartType::Area,
        ChartType::Bar,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Radar,
        ChartType::Heatmap,
        ChartType::Gauge,
        ChartType::Funnel,
        ChartType::Treemap,
        ChartType::Sunburst,
        ChartType::Sankey,
        ChartType::Boxplot,
        ChartType::Candlestick,
        ChartType::Parallel,
    ];

    /// Wire tag, as understood by the rendering library
    pub fn as_tag(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Radar => "radar",
            ChartType::Heatmap => "heatmap",
            ChartType::Gauge => "gauge",
            ChartType::Funnel => "funnel",
            ChartType::Treemap => "treemap",
            ChartType::Sunburst => "sunburst",
            ChartType::Sankey => "sankey",
            ChartType::Boxplot => "boxplot",
            ChartType::Candlestick => "candlestick",
            ChartType::Parallel => "parallel",
        }
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            ChartType::Line => "Line",
            ChartType::Area => "Area",
            ChartType::Bar => "Bar",
            ChartType::Pie => "Pie",
            ChartType::Scatter => "Scatter",
            ChartType::Radar => "Radar",
            ChartType::Heatmap => "Heatmap",
            ChartType::Gauge => "Gauge",
            ChartType::Funnel => "Funnel",
            ChartType::Treemap => "Treemap",
            ChartType::Sunburst => "Sunburst",
            ChartType::Sankey => "Sankey",
            ChartType::Boxplot => "Box Plot",
            ChartType::Candlestick => "Candlestick",
            ChartType::Parallel => "Parallel Coordinates",
        }
    }

    pub fn category(self) -> ChartCategory {
        match self {
            ChartType::Line
            | ChartType::Area
            | ChartType::Bar
            | ChartType::Pie
            | ChartType::Scatter => ChartCategory::Basic,
            ChartType::Radar | ChartType::Heatmap | ChartType::Gauge | ChartType::Funnel => {
                ChartCategory::Comparison
            }
            ChartType::Treemap | ChartType::Sunburst => ChartCategory::Hierarchical,
            ChartType::Sankey => ChartCategory::Relational,
            ChartType::Boxplot => ChartCategory::Statistical,
            ChartType::Candlestick => ChartCategory::Financial,
            ChartType::Parallel => ChartCategory::Multivariate,
        }
    }

    pub fn axis_layout(self) -> AxisLayout {
        match self {
            ChartType::Line
            | ChartType::Area
            | ChartType::Bar
            | ChartType::Scatter
            | ChartType::Heatmap
            | ChartType::Boxplot
            | ChartType::Candlestick => AxisLayout::Cartesian,
            ChartType::Pie
            | ChartType::Radar
            | ChartType::Gauge
            | ChartType::Funnel
            | ChartType::Treemap
            | ChartType::Sunburst
            | ChartType::Sankey
            | ChartType::Parallel => AxisLayout::None,
        }
    }

    pub fn series_layout(self) -> SeriesLayout {
        match self {
            ChartType::Line
            | ChartType::Area
            | ChartType::Bar
            | ChartType::Scatter
            | ChartType::Radar
            | ChartType::Parallel => SeriesLayout::PerSeries,
            ChartType::Pie
            | ChartType::Gauge
            | ChartType::Funnel
            | ChartType::Treemap
            | ChartType::Sunburst
            | ChartType::Sankey
            | ChartType::Heatmap
            | ChartType::Boxplot
            | ChartType::Candlestick => SeriesLayout::Single,
        }
    }

    /// Charts whose data is keyed by the category labels
    pub fn needs_categories(self) -> bool {
        !matches!(self, ChartType::Scatter | ChartType::Gauge | ChartType::Boxplot)
    }

    /// Look up a tag, ignoring case and surrounding whitespace
    pub fn from_tag(tag: &str) -> Option<ChartType> {
        let tag = tag.trim();
        ChartType::ALL
            .into_iter()
            .find(|ty| ty.as_tag().eq_ignore_ascii_case(tag))
    }

    /// Look up a tag, treating anything unrecognized as a line chart
    pub fn resolve_tag(tag: &str) -> ChartType {
        ChartType::from_tag(tag).unwrap_or(ChartType::Line)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for ChartType {
    type Err = UnknownChartType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::from_tag(s).ok_or_else(|| UnknownChartType(s.to_string()))
    }
}

/// Theme setting
#[derive(Tsify, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Chart configuration
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ChartConfig {
    /// Unique chart ID
    pub id: String,
    /// Chart type
    pub chart_type: ChartType,
    /// Chart title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Data configuration
    pub data: DataSet,
    /// Caller-supplied option fragments
    #[serde(default)]
    pub overlay: ChartOptionOverlay,
    /// Theme (light/dark)
    #[serde(default)]
    pub theme: Theme,
}

/// One row of the chart picker
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ChartCatalogEntry {
    pub chart_type: ChartType,
    pub label: String,
    pub category: ChartCategory,
}

impl From<ChartType> for ChartCatalogEntry {
    fn from(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            label: chart_type.label().to_string(),
            category: chart_type.category(),
        }
    }
}

/// Full chart picker catalog
pub fn catalog() -> Vec<ChartCatalogEntry> {
    ChartType::ALL.into_iter().map(ChartCatalogEntry::from).collect()
}
