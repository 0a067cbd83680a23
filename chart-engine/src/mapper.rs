//! Chart option generation
//!
//! Maps a chart type plus a `{categories, series}` data set onto the
//! rendering library's declarative option object. Generation is pure and
//! infallible: ragged or empty input produces `null` holes in the output
//! instead of errors.
//!
//! # Merge order
//!
//! - The overlay is the base of the option.
//! - Axes are structural defaults with the overlay's axis object spread over
//!   them; non-cartesian charts drop both axes.
//! - Derived components (`radar`, `visualMap`, `parallelAxis`) keep unrelated
//!   overlay keys but always carry the computed values.
//! - `series` belongs to the mapper.

use serde_json::{json, Map, Value};
use studio_types::{ChartOptionOverlay, ChartType, DataSet, Series};

use crate::config::MapperConfig;
use crate::error::Result;
use crate::ohlc::OhlcSynth;
use crate::option::ChartOption;
use crate::stats::{five_number_summary, js_max, js_min, present};

/// Everything a chart type contributes on top of the overlay
struct Layout {
    /// Default `(xAxis, yAxis)`, or `None` for charts without a grid
    axes: Option<(Value, Value)>,
    series: Vec<Value>,
    components: Vec<Component>,
}

/// A top-level option key the chart type derives from the data
enum Component {
    /// `defaults`, then the overlay's object, then `controlled`
    Merged {
        key: &'static str,
        defaults: Value,
        controlled: Value,
    },
    /// Replaces whatever the overlay had
    Replaced { key: &'static str, value: Value },
}

impl Layout {
    fn cartesian(x_axis: Value, y_axis: Value, series: Vec<Value>) -> Self {
        Self {
            axes: Some((x_axis, y_axis)),
            series,
            components: Vec::new(),
        }
    }

    fn axisless(series: Vec<Value>) -> Self {
        Self {
            axes: None,
            series,
            components: Vec::new(),
        }
    }

    fn with(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }
}

/// Option generator with fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ChartMapper {
    config: MapperConfig,
}

impl ChartMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Build the option for `chart_type`
    pub fn generate(
        &self,
        chart_type: ChartType,
        data: &DataSet,
        overlay: &ChartOptionOverlay,
    ) -> ChartOption {
        log::debug!(
            "mapping {} series as {} chart",
            data.series.len(),
            chart_type
        );

        let layout = match chart_type {
            ChartType::Line => self.line(data, false),
            ChartType::Area => self.line(data, true),
            ChartType::Bar => self.bar(data),
            ChartType::Pie => self.pie(data),
            ChartType::Scatter => self.scatter(data),
            ChartType::Radar => self.radar(data),
            ChartType::Heatmap => self.heatmap(data),
            ChartType::Gauge => self.gauge(data),
            ChartType::Funnel => self.funnel(data),
            ChartType::Treemap => self.treemap(data),
            ChartType::Sunburst => self.sunburst(data),
            ChartType::Sankey => self.sankey(data),
            ChartType::Boxplot => self.boxplot(data),
            ChartType::Candlestick => self.candlestick(data),
            ChartType::Parallel => self.parallel(data),
        };

        let mut option = overlay.clone().into_map();
        match layout.axes {
            Some((x_axis, y_axis)) => {
                merge_component(&mut option, "xAxis", x_axis, Value::Null);
                merge_component(&mut option, "yAxis", y_axis, Value::Null);
            }
            None => {
                option.remove("xAxis");
                option.remove("yAxis");
            }
        }
        for component in layout.components {
            match component {
                Component::Merged {
                    key,
                    defaults,
                    controlled,
                } => merge_component(&mut option, key, defaults, controlled),
                Component::Replaced { key, value } => {
                    option.insert(key.to_string(), value);
                }
            }
        }
        option.insert("series".to_string(), Value::Array(layout.series));

        ChartOption::from_map(option)
    }

    /// Build the option for a raw type tag
    ///
    /// Unrecognized tags are mapped as line charts.
    pub fn generate_for_tag(
        &self,
        tag: &str,
        data: &DataSet,
        overlay: &ChartOptionOverlay,
    ) -> ChartOption {
        let chart_type = ChartType::from_tag(tag).unwrap_or_else(|| {
            log::warn!("unknown chart type `{tag}`, falling back to line");
            ChartType::Line
        });
        self.generate(chart_type, data, overlay)
    }

    /// Build the option for a raw type tag, rejecting unrecognized tags
    pub fn generate_strict(
        &self,
        tag: &str,
        data: &DataSet,
        overlay: &ChartOptionOverlay,
    ) -> Result<ChartOption> {
        let chart_type: ChartType = tag.parse()?;
        Ok(self.generate(chart_type, data, overlay))
    }

    fn line(&self, data: &DataSet, area: bool) -> Layout {
        let series = data
            .series
            .iter()
            .map(|s| {
                let mut controlled = object(json!({
                    "name": s.name,
                    "type": "line",
                    "data": s.data,
                }));
                if let Some(smooth) = s.smooth {
                    controlled.insert("smooth".into(), Value::Bool(smooth));
                }
                insert_stack(&mut controlled, s);
                let area_style = match &s.area_style {
                    Some(style) => Some(style.clone()),
                    None if area => Some(json!({})),
                    None => None,
                };
                if let Some(style) = area_style {
                    controlled.insert("areaStyle".into(), style);
                }
                styled(Some(s), Map::new(), controlled)
            })
            .collect();

        let mut x_axis = category_axis(data.categories.as_ref());
        x_axis.insert("boundaryGap".into(), Value::Bool(false));
        Layout::cartesian(Value::Object(x_axis), value_axis(), series)
    }

    fn bar(&self, data: &DataSet) -> Layout {
        let series = data
            .series
            .iter()
            .map(|s| {
                let mut controlled = object(json!({
                    "name": s.name,
                    "type": "bar",
                    "data": s.data,
                }));
                insert_stack(&mut controlled, s);
                styled(Some(s), Map::new(), controlled)
            })
            .collect();

        let x_axis = category_axis(data.categories.as_ref());
        Layout::cartesian(Value::Object(x_axis), value_axis(), series)
    }

    fn pie(&self, data: &DataSet) -> Layout {
        let first = data.first_series();
        let series = item_styled(
            first,
            object(json!({ "radius": self.config.pie_radius })),
            object(json!({
                "name": series_name(first),
                "type": "pie",
                "data": named_values(data),
            })),
        );
        Layout::axisless(vec![series])
    }

    fn scatter(&self, data: &DataSet) -> Layout {
        let series = data
            .series
            .iter()
            .map(|s| {
                let points: Vec<Value> = s
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, v)| json!([i, v]))
                    .collect();
                styled(
                    Some(s),
                    object(json!({ "symbolSize": self.config.scatter_symbol_size })),
                    object(json!({
                        "name": s.name,
                        "type": "scatter",
                        "data": points,
                    })),
                )
            })
            .collect();

        Layout::cartesian(json!({ "type": "value" }), value_axis(), series)
    }

    fn radar(&self, data: &DataSet) -> Layout {
        let values = data.series.iter().flat_map(|s| s.data.iter().copied());
        let global_max = js_max(present(values));
        let indicator_max = global_max * self.config.radar_headroom;
        let indicator: Vec<Value> = data
            .categories
            .iter()
            .flatten()
            .map(|name| json!({ "name": name, "max": indicator_max }))
            .collect();

        let series = data
            .series
            .iter()
            .map(|s| {
                styled(
                    Some(s),
                    Map::new(),
                    object(json!({
                        "name": s.name,
                        "type": "radar",
                        "data": [{ "name": s.name, "value": s.data }],
                    })),
                )
            })
            .collect();

        Layout::axisless(series).with(Component::Merged {
            key: "radar",
            defaults: Value::Null,
            controlled: json!({ "indicator": indicator }),
        })
    }

    fn heatmap(&self, data: &DataSet) -> Layout {
        let width = match &data.categories {
            Some(categories) => categories.len(),
            None => data.series.iter().map(|s| s.data.len()).max().unwrap_or(0),
        };

        // `None` marks a cell past the end of its series
        let mut cells = Vec::with_capacity(width * data.series.len());
        for x in 0..width {
            for (y, s) in data.series.iter().enumerate() {
                cells.push((x, y, s.data.get(x).copied()));
            }
        }
        let max = js_max(cells.iter().filter_map(|&(_, _, v)| match v {
            Some(v) if v.is_nan() => None,
            Some(v) => Some(v),
            None => Some(f64::NAN),
        }));
        let triples: Vec<Value> = cells
            .iter()
            .map(|&(x, y, v)| json!([x, y, v.unwrap_or(f64::NAN)]))
            .collect();

        let mut x_axis = category_axis(data.categories.as_ref());
        x_axis.insert("splitArea".into(), json!({ "show": true }));
        let y_axis = json!({
            "type": "category",
            "data": data.series_names(),
            "splitArea": { "show": true },
        });

        let series = styled(
            None,
            object(json!({
                "label": { "show": true },
                "emphasis": {
                    "itemStyle": { "shadowBlur": 10, "shadowColor": "rgba(0, 0, 0, 0.5)" },
                },
            })),
            object(json!({ "type": "heatmap", "data": triples })),
        );

        Layout::cartesian(Value::Object(x_axis), y_axis, vec![series]).with(Component::Merged {
            key: "visualMap",
            defaults: json!({
                "calculable": true,
                "orient": "horizontal",
                "left": "center",
                "bottom": "0%",
            }),
            controlled: json!({ "min": 0, "max": max }),
        })
    }

    fn gauge(&self, data: &DataSet) -> Layout {
        let first = data.first_series();
        let value = first.map_or(f64::NAN, |s| DataSet::value_at(s, 0));
        let series = styled(
            first,
            object(json!({
                "progress": { "show": true },
                "detail": { "valueAnimation": true, "formatter": "{value}" },
            })),
            object(json!({
                "name": series_name(first),
                "type": "gauge",
                "data": [{ "name": series_name(first), "value": value }],
            })),
        );
        Layout::axisless(vec![series])
    }

    fn funnel(&self, data: &DataSet) -> Layout {
        let first = data.first_series();
        let values = first.map(|s| s.data.as_slice()).unwrap_or_default();
        let series = item_styled(
            first,
            object(json!({
                "left": "10%",
                "width": "80%",
                "gap": 2,
                "label": { "show": true, "position": "inside" },
            })),
            object(json!({
                "name": series_name(first),
                "type": "funnel",
                "sort": "descending",
                "min": js_min(present(values.iter().copied())),
                "max": js_max(present(values.iter().copied())),
                "data": named_values(data),
            })),
        );
        Layout::axisless(vec![series])
    }

    fn treemap(&self, data: &DataSet) -> Layout {
        let first = data.first_series();
        let series = item_styled(
            first,
            object(json!({
                "levels": [
                    {
                        "itemStyle": { "borderColor": "#777", "borderWidth": 0, "gapWidth": 1 },
                    },
                    {
                        "itemStyle": { "borderColor": "#555", "borderWidth": 5, "gapWidth": 1 },
                        "upperLabel": { "show": false },
                        "emphasis": { "itemStyle": { "borderColor": "#ddd" } },
                    },
                ],
            })),
            object(json!({
                "name": series_name(first),
                "type": "treemap",
                "data": named_values(data),
            })),
        );
        Layout::axisless(vec![series])
    }

    fn sunburst(&self, data: &DataSet) -> Layout {
        let first = data.first_series();
        let series = item_styled(
            first,
            object(json!({
                "radius": [0, "90%"],
                "label": { "rotate": "radial" },
            })),
            object(json!({
                "name": series_name(first),
                "type": "sunburst",
                "data": named_values(data),
            })),
        );
        Layout::axisless(vec![series])
    }

    fn sankey(&self, data: &DataSet) -> Layout {
        let first = data.first_series();
        let categories = data.categories.as_deref().unwrap_or_default();

        let nodes: Vec<Value> = categories
            .iter()
            .map(|name| json!({ "name": name }))
            .collect();
        let links: Vec<Value> = categories
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let value = first.map_or(f64::NAN, |s| DataSet::value_at(s, i));
                json!({ "source": pair[0], "target": pair[1], "value": value })
            })
            .collect();

        let series = item_styled(
            first,
            object(json!({
                "layout": "none",
                "emphasis": { "focus": "adjacency" },
                "lineStyle": { "color": "gradient", "curveness": 0.5 },
            })),
            object(json!({
                "name": series_name(first),
                "type": "sankey",
                "data": nodes,
                "links": links,
            })),
        );
        Layout::axisless(vec![series])
    }

    fn boxplot(&self, data: &DataSet) -> Layout {
        let summaries: Vec<[f64; 5]> = data
            .series
            .iter()
            .map(|s| five_number_summary(&s.data))
            .collect();

        let x_axis = json!({
            "type": "category",
            "data": data.series_names(),
            "boundaryGap": true,
            "splitArea": { "show": false },
        });
        let y_axis = json!({ "type": "value", "splitArea": { "show": true } });
        let series = styled(
            None,
            Map::new(),
            object(json!({ "name": "boxplot", "type": "boxplot", "data": summaries })),
        );
        Layout::cartesian(x_axis, y_axis, vec![series])
    }

    /// Candles are synthetic demo data derived from the first series
    fn candlestick(&self, data: &DataSet) -> Layout {
        let first = data.first_series();
        let count = first.map_or(0, |s| data.slot_count(s));
        log::debug!("synthesizing {count} demo candles");

        let mut synth = OhlcSynth::new(self.config.ohlc_seed, self.config.ohlc_jitter);
        let candles: Vec<[f64; 4]> = (0..count)
            .map(|i| synth.candle(first.map_or(f64::NAN, |s| DataSet::value_at(s, i))))
            .collect();

        let mut x_axis = category_axis(data.categories.as_ref());
        x_axis.insert("boundaryGap".into(), Value::Bool(true));
        let y_axis = json!({ "type": "value", "scale": true });
        let series = styled(
            first,
            Map::new(),
            object(json!({
                "name": series_name(first),
                "type": "candlestick",
                "data": candles,
            })),
        );
        Layout::cartesian(Value::Object(x_axis), y_axis, vec![series])
    }

    fn parallel(&self, data: &DataSet) -> Layout {
        let axes: Vec<Value> = data
            .categories
            .iter()
            .flatten()
            .enumerate()
            .map(|(dim, name)| json!({ "dim": dim, "name": name }))
            .collect();

        let series = data
            .series
            .iter()
            .map(|s| {
                styled(
                    Some(s),
                    Map::new(),
                    object(json!({
                        "name": s.name,
                        "type": "parallel",
                        "data": [s.data],
                    })),
                )
            })
            .collect();

        Layout::axisless(series).with(Component::Replaced {
            key: "parallelAxis",
            value: Value::Array(axes),
        })
    }
}

/// Map with the default configuration
pub fn generate_option(
    chart_type: ChartType,
    data: &DataSet,
    overlay: &ChartOptionOverlay,
) -> ChartOption {
    ChartMapper::default().generate(chart_type, data, overlay)
}

/// Map a raw type tag with the default configuration
pub fn generate_option_for_tag(
    tag: &str,
    data: &DataSet,
    overlay: &ChartOptionOverlay,
) -> ChartOption {
    ChartMapper::default().generate_for_tag(tag, data, overlay)
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Spread `defaults`, then the series' pass-through hints, then `controlled`
fn styled(
    source: Option<&Series>,
    defaults: Map<String, Value>,
    controlled: Map<String, Value>,
) -> Value {
    assemble(source, true, defaults, controlled)
}

/// Like [`styled`], minus the series `color`
///
/// For charts whose items are the categories; the palette colors each item.
fn item_styled(
    source: Option<&Series>,
    defaults: Map<String, Value>,
    controlled: Map<String, Value>,
) -> Value {
    assemble(source, false, defaults, controlled)
}

fn assemble(
    source: Option<&Series>,
    with_color: bool,
    defaults: Map<String, Value>,
    controlled: Map<String, Value>,
) -> Value {
    let mut out = defaults;
    if let Some(s) = source {
        out.extend(s.extra.clone());
        let hints = [
            ("color", s.color.as_ref().filter(|_| with_color)),
            ("label", s.label.as_ref()),
            ("emphasis", s.emphasis.as_ref()),
            ("itemStyle", s.item_style.as_ref()),
        ];
        for (key, hint) in hints {
            if let Some(hint) = hint {
                out.insert(key.to_string(), hint.clone());
            }
        }
    }
    out.extend(controlled);
    Value::Object(out)
}

/// Overlay-aware merge of one top-level component
fn merge_component(
    option: &mut Map<String, Value>,
    key: &str,
    defaults: Value,
    controlled: Value,
) {
    let mut merged = object(defaults);
    match option.remove(key) {
        Some(Value::Object(overlay)) => merged.extend(overlay),
        Some(_) => log::debug!("ignoring non-object `{key}` overlay"),
        None => {}
    }
    merged.extend(object(controlled));
    option.insert(key.to_string(), Value::Object(merged));
}

fn category_axis(categories: Option<&Vec<String>>) -> Map<String, Value> {
    let mut axis = Map::new();
    axis.insert("type".into(), Value::from("category"));
    if let Some(categories) = categories {
        axis.insert("data".into(), json!(categories));
    }
    axis
}

fn value_axis() -> Value {
    json!({ "type": "value" })
}

fn insert_stack(series: &mut Map<String, Value>, source: &Series) {
    if let Some(stack) = &source.stack {
        series.insert("stack".into(), Value::String(stack.clone()));
    }
}

fn series_name(series: Option<&Series>) -> &str {
    series.map_or("", |s| s.name.as_str())
}

/// Categories zipped with the first series' values as `{name, value}` items
///
/// Without categories the items carry only a value.
fn named_values(data: &DataSet) -> Vec<Value> {
    let first = data.first_series();
    let count = match (first, &data.categories) {
        (_, Some(categories)) => categories.len(),
        (Some(s), None) => s.data.len(),
        (None, None) => 0,
    };

    (0..count)
        .map(|i| {
            let value = first.map_or(f64::NAN, |s| DataSet::value_at(s, i));
            match data.category(i) {
                Some(name) => json!({ "name": name, "value": value }),
                None => json!({ "value": value }),
            }
        })
        .collect()
}
