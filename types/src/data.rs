//! Chart data model: categories plus named series

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tsify::Tsify;

use crate::chart::ChartType;

/// A single data series
///
/// Styling hints other than `smooth`, `stack` and `area_style` are opaque to
/// the mapper and are forwarded into the generated series object as-is.
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Series name (legend label)
    #[serde(default)]
    pub name: String,
    /// Data values; `null` cells are read as `NaN` gaps
    #[serde(default, deserialize_with = "nullable_values")]
    pub data: Vec<f64>,
    /// Series color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    /// Smooth line interpolation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    /// Stack group key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Fill under the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<Value>,
    /// Data label options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
    /// Hover styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Value>,
    /// Item styling (symbol, border, opacity...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<Value>,
    /// Any other series key, forwarded verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn nullable_values<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
            ..Default::default()
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(Value::String(color.into()));
        self
    }
}

/// Categories plus the series plotted against them
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct DataSet {
    /// Labels for X axis or categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Data series, in legend/stack order
    #[serde(default)]
    pub series: Vec<Series>,
}

impl DataSet {
    pub fn new(categories: Vec<String>, series: Vec<Series>) -> Self {
        Self {
            categories: Some(categories),
            series,
        }
    }

    /// Data set without category labels
    pub fn uncategorized(series: Vec<Series>) -> Self {
        Self {
            categories: None,
            series,
        }
    }

    pub fn first_series(&self) -> Option<&Series> {
        self.series.first()
    }

    pub fn series_names(&self) -> Vec<String> {
        self.series.iter().map(|s| s.name.clone()).collect()
    }

    /// Number of data slots to read from `series`
    ///
    /// Categories drive the length when present; otherwise the series' own
    /// length does.
    pub fn slot_count(&self, series: &Series) -> usize {
        match &self.categories {
            Some(categories) => categories.len(),
            None => series.data.len(),
        }
    }

    /// Category label at `index`, if categories are present and long enough
    pub fn category(&self, index: usize) -> Option<&str> {
        self.categories
            .as_ref()
            .and_then(|c| c.get(index))
            .map(String::as_str)
    }

    /// Datum at `index`, or `NaN` past the end of the series
    pub fn value_at(series: &Series, index: usize) -> f64 {
        series.data.get(index).copied().unwrap_or(f64::NAN)
    }

    /// Build a data set from an editing grid
    ///
    /// The header row holds a corner label followed by series names; every
    /// other row holds a category followed by one cell per series. Cells that
    /// do not parse as numbers become gaps.
    pub fn from_table(table: &DataTable) -> Self {
        let names = table.header.iter().skip(1);
        let series = names
            .enumerate()
            .map(|(col, name)| {
                let data = table
                    .rows
                    .iter()
                    .map(|row| parse_cell(row.get(col + 1).map(String::as_str)))
                    .collect();
                Series::new(name.clone(), data)
            })
            .collect();
        let categories = table
            .rows
            .iter()
            .map(|row| row.first().cloned().unwrap_or_default())
            .collect();

        Self::new(categories, series)
    }

    /// Lay the data set out as an editing grid
    pub fn to_table(&self) -> DataTable {
        let mut header = vec![String::new()];
        header.extend(self.series_names());

        let row_count = match &self.categories {
            Some(categories) => categories.len(),
            None => self.series.iter().map(|s| s.data.len()).max().unwrap_or(0),
        };

        let rows = (0..row_count)
            .map(|i| {
                let mut row = vec![self.category(i).unwrap_or_default().to_string()];
                row.extend(
                    self.series
                        .iter()
                        .map(|s| format_cell(DataSet::value_at(s, i))),
                );
                row
            })
            .collect();

        DataTable { header, rows }
    }

    /// Starter data loaded when a chart type is first picked
    pub fn sample_for(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Pie | ChartType::Funnel | ChartType::Treemap | ChartType::Sunburst => {
                DataSet::new(
                    labels(&["Search Engine", "Direct", "Email", "Union Ads", "Video Ads"]),
                    vec![Series::new(
                        "Access Source",
                        vec![1048.0, 735.0, 580.0, 484.0, 300.0],
                    )],
                )
            }
            ChartType::Gauge => DataSet::uncategorized(vec![Series::new("Completion", vec![72.0])]),
            ChartType::Radar => DataSet::new(
                labels(&["Sales", "Administration", "IT", "Support", "Development", "Marketing"]),
                vec![
                    Series::new(
                        "Allocated Budget",
                        vec![4200.0, 3000.0, 20000.0, 35000.0, 50000.0, 18000.0],
                    ),
                    Series::new(
                        "Actual Spending",
                        vec![5000.0, 14000.0, 28000.0, 26000.0, 42000.0, 21000.0],
                    ),
                ],
            ),
            ChartType::Heatmap => DataSet::new(
                weekdays(),
                vec![
                    Series::new("Morning", vec![5.0, 7.0, 3.0, 4.0, 8.0, 1.0, 0.0]),
                    Series::new("Afternoon", vec![9.0, 6.0, 8.0, 10.0, 7.0, 4.0, 2.0]),
                    Series::new("Evening", vec![3.0, 4.0, 6.0, 5.0, 9.0, 11.0, 12.0]),
                ],
            ),
            ChartType::Sankey => DataSet::new(
                labels(&["Visit", "Sign Up", "Trial", "Purchase"]),
                vec![Series::new("Users", vec![1000.0, 620.0, 240.0, 0.0])],
            ),
            ChartType::Boxplot => DataSet::uncategorized(vec![
                Series::new(
                    "Group A",
                    vec![850.0, 740.0, 900.0, 1070.0, 930.0, 850.0, 950.0, 980.0, 980.0, 880.0],
                ),
                Series::new(
                    "Group B",
                    vec![960.0, 940.0, 960.0, 940.0, 880.0, 800.0, 850.0, 880.0, 900.0, 840.0],
                ),
                Series::new(
                    "Group C",
                    vec![880.0, 880.0, 880.0, 860.0, 720.0, 720.0, 620.0, 860.0, 970.0, 950.0],
                ),
            ]),
            ChartType::Candlestick => DataSet::new(
                labels(&[
                    "2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05", "2024-01-08",
                    "2024-01-09", "2024-01-10", "2024-01-11",
                ]),
                vec![Series::new(
                    "Close",
                    vec![2320.3, 2300.0, 2295.4, 2347.2, 2360.8, 2383.4, 2377.4, 2394.6],
                )],
            ),
            ChartType::Line
            | ChartType::Area
            | ChartType::Bar
            | ChartType::Scatter
            | ChartType::Parallel => DataSet::new(
                weekdays(),
                vec![
                    Series::new("Email", vec![120.0, 132.0, 101.0, 134.0, 90.0, 230.0, 210.0]),
                    Series::new("Search", vec![220.0, 182.0, 191.0, 234.0, 290.0, 330.0, 310.0]),
                ],
            ),
        }
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn weekdays() -> Vec<String> {
    labels(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"])
}

fn parse_cell(cell: Option<&str>) -> f64 {
    cell.and_then(|c| c.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn format_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Spreadsheet-like view of a data set
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct DataTable {
    /// Corner label followed by series names
    pub header: Vec<String>,
    /// Category followed by one cell per series
    pub rows: Vec<Vec<String>>,
}
