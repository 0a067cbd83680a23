//! Behaviour every generated option must satisfy

use chart_engine::{
    generate_option, generate_option_for_tag, AxisLayout, ChartOptionOverlay, ChartType, DataSet,
    DataTable, Series, SeriesLayout,
};
use serde_json::json;

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn two_series() -> DataSet {
    DataSet::new(
        labels(&["A", "B", "C"]),
        vec![
            Series::new("S1", vec![10.0, 20.0, 30.0]),
            Series::new("S2", vec![3.0, 2.0, 1.0]),
        ],
    )
}

fn no_overlay() -> ChartOptionOverlay {
    ChartOptionOverlay::default()
}

#[test]
fn generation_is_deterministic() {
    let overlay = ChartOptionOverlay {
        legend: Some(json!({ "top": 0 })),
        ..Default::default()
    };
    for ty in ChartType::ALL {
        let data = DataSet::sample_for(ty);
        let first = generate_option(ty, &data, &overlay);
        let second = generate_option(ty, &data, &overlay);
        assert_eq!(first, second, "{ty} is not deterministic");
    }
}

#[test]
fn axis_presence_follows_chart_type() {
    let overlay = ChartOptionOverlay {
        x_axis: Some(json!({ "name": "x" })),
        y_axis: Some(json!({ "name": "y" })),
        ..Default::default()
    };
    for ty in ChartType::ALL {
        let option = generate_option(ty, &two_series(), &overlay);
        match ty.axis_layout() {
            AxisLayout::Cartesian => {
                assert!(option.contains_key("xAxis"), "{ty} lost xAxis");
                assert!(option.contains_key("yAxis"), "{ty} lost yAxis");
            }
            AxisLayout::None => {
                assert!(!option.contains_key("xAxis"), "{ty} kept xAxis");
                assert!(!option.contains_key("yAxis"), "{ty} kept yAxis");
            }
        }
    }
}

#[test]
fn axisless_types_are_exactly_the_listed_ones() {
    let axisless: Vec<_> = ChartType::ALL
        .into_iter()
        .filter(|ty| ty.axis_layout() == AxisLayout::None)
        .map(ChartType::as_tag)
        .collect();
    assert_eq!(
        axisless,
        ["pie", "radar", "gauge", "funnel", "treemap", "sunburst", "sankey", "parallel"]
    );
}

#[test]
fn series_count_follows_chart_type() {
    let data = two_series();
    for ty in ChartType::ALL {
        let option = generate_option(ty, &data, &no_overlay());
        let expected = match ty.series_layout() {
            SeriesLayout::PerSeries => data.series.len(),
            SeriesLayout::Single => 1,
        };
        assert_eq!(option.series().len(), expected, "{ty}");
    }
}

#[test]
fn per_series_types_are_exactly_the_listed_ones() {
    let per_series: Vec<_> = ChartType::ALL
        .into_iter()
        .filter(|ty| ty.series_layout() == SeriesLayout::PerSeries)
        .map(ChartType::as_tag)
        .collect();
    assert_eq!(per_series, ["line", "area", "bar", "scatter", "radar", "parallel"]);
}

#[test]
fn boxplot_uses_nearest_rank_quartiles() {
    let data = DataSet::uncategorized(vec![Series::new(
        "S1",
        (1..=10).map(f64::from).collect(),
    )]);
    let option = generate_option(ChartType::Boxplot, &data, &no_overlay());
    assert_eq!(option.series()[0]["data"], json!([[1.0, 3.0, 6.0, 8.0, 10.0]]));
}

#[test]
fn sankey_chains_consecutive_categories() {
    let data = DataSet::new(
        labels(&["A", "B", "C"]),
        vec![Series::new("S1", vec![10.0, 20.0, 30.0])],
    );
    let option = generate_option(ChartType::Sankey, &data, &no_overlay());
    assert_eq!(
        option.series()[0]["links"],
        json!([
            { "source": "A", "target": "B", "value": 10.0 },
            { "source": "B", "target": "C", "value": 20.0 },
        ])
    );
    assert_eq!(option.series()[0]["data"].as_array().unwrap().len(), 3);
}

#[test]
fn heatmap_has_a_triple_per_category_and_series() {
    let option = generate_option(ChartType::Heatmap, &two_series(), &no_overlay());
    let triples = option.series()[0]["data"].as_array().unwrap();
    assert_eq!(triples.len(), 6);
    assert!(triples.iter().all(|t| t.as_array().map(Vec::len) == Some(3)));
    assert_eq!(option["visualMap"]["max"], 30.0);
}

#[test]
fn bar_round_trip() {
    let data = DataSet::new(labels(&["Mon", "Tue"]), vec![Series::new("S1", vec![5.0, 10.0])]);
    let option = generate_option(ChartType::Bar, &data, &no_overlay());
    assert_eq!(
        option.series()[0],
        json!({ "name": "S1", "type": "bar", "data": [5.0, 10.0] })
    );
    assert_eq!(option["xAxis"]["data"], json!(["Mon", "Tue"]));
    assert_eq!(option["yAxis"]["type"], "value");
}

#[test]
fn unknown_tag_maps_as_line() {
    let data = two_series();
    let unknown = generate_option_for_tag("not-a-type", &data, &no_overlay());
    let line = generate_option(ChartType::Line, &data, &no_overlay());
    assert_eq!(unknown, line);

    let area = generate_option(ChartType::Area, &data, &no_overlay());
    assert_ne!(unknown, area);
    assert!(unknown.series()[0].get("areaStyle").is_none());
}

#[test]
fn overlay_fields_survive() {
    let overlay = ChartOptionOverlay {
        title: Some(json!({ "text": "Traffic" })),
        tooltip: Some(json!({ "trigger": "axis" })),
        color: Some(labels(&["#5470c6"])),
        dark_mode: Some(true),
        animation: Some(false),
        ..Default::default()
    };
    for ty in ChartType::ALL {
        let option = generate_option(ty, &two_series(), &overlay);
        assert_eq!(option["title"]["text"], "Traffic", "{ty}");
        assert_eq!(option["tooltip"]["trigger"], "axis", "{ty}");
        assert_eq!(option["color"], json!(["#5470c6"]), "{ty}");
        assert_eq!(option["darkMode"], true, "{ty}");
        assert_eq!(option["animation"], false, "{ty}");
    }
}

#[test]
fn empty_data_never_panics() {
    let empty = DataSet::default();
    let no_values = DataSet::new(labels(&["A", "B"]), vec![Series::new("S1", vec![])]);
    for ty in ChartType::ALL {
        let option = generate_option(ty, &empty, &no_overlay());
        if ty.series_layout() == SeriesLayout::PerSeries {
            assert!(option.series().is_empty(), "{ty}");
        }
        generate_option(ty, &no_values, &no_overlay());
    }
}

#[test]
fn empty_data_keeps_permissive_numbers() {
    // Math.max() over nothing is -Infinity, which has no JSON form
    let option = generate_option(ChartType::Radar, &two_series_without_values(), &no_overlay());
    assert_eq!(option["radar"]["indicator"][0]["max"], serde_json::Value::Null);

    let option = generate_option(ChartType::Boxplot, &two_series_without_values(), &no_overlay());
    assert_eq!(option.series()[0]["data"][0], json!([null, null, null, null, null]));
}

fn two_series_without_values() -> DataSet {
    DataSet::new(
        labels(&["A"]),
        vec![Series::new("S1", vec![]), Series::new("S2", vec![])],
    )
}

#[test]
fn ragged_series_yield_nulls() {
    let data = DataSet::new(
        labels(&["A", "B", "C"]),
        vec![Series::new("S1", vec![1.0]), Series::new("S2", vec![1.0, 2.0, 3.0, 4.0])],
    );
    let heatmap = generate_option(ChartType::Heatmap, &data, &no_overlay());
    let triples = heatmap.series()[0]["data"].as_array().unwrap();
    assert_eq!(triples.len(), 6);
    assert_eq!(triples[2], json!([1, 0, null]));

    let funnel = generate_option(ChartType::Funnel, &data, &no_overlay());
    assert_eq!(funnel.series()[0]["data"][2], json!({ "name": "C", "value": null }));
}

#[test]
fn candlestick_is_synthesized_from_first_series() {
    let data = DataSet::new(
        labels(&["d1", "d2"]),
        vec![Series::new("Close", vec![100.0, 200.0])],
    );
    let option = generate_option(ChartType::Candlestick, &data, &no_overlay());
    let candles = option.series()[0]["data"].as_array().unwrap();
    assert_eq!(candles.len(), 2);
    for (candle, value) in candles.iter().zip([100.0, 200.0]) {
        let ohlc: Vec<f64> = candle
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        let [open, close, low, high] = [ohlc[0], ohlc[1], ohlc[2], ohlc[3]];
        assert_eq!(open, value);
        assert!(low <= open.min(close));
        assert!(high >= open.max(close));
        assert!(high - low <= value * 0.05 * 3.0 + 1e-9);
    }
}

#[test]
fn blank_grid_cell_keeps_derived_scales() {
    let table = DataTable {
        header: labels(&["", "S1"]),
        rows: vec![labels(&["a", "10"]), labels(&["b", ""]), labels(&["c", "30"])],
    };
    let data = DataSet::from_table(&table);

    let radar = generate_option(ChartType::Radar, &data, &no_overlay());
    for indicator in radar["radar"]["indicator"].as_array().unwrap() {
        assert!((indicator["max"].as_f64().unwrap() - 36.0).abs() < 1e-9);
    }
    assert_eq!(radar.series()[0]["data"][0]["value"], json!([10.0, null, 30.0]));

    let heatmap = generate_option(ChartType::Heatmap, &data, &no_overlay());
    assert_eq!(heatmap["visualMap"]["max"], 30.0);

    let boxplot = generate_option(ChartType::Boxplot, &data, &no_overlay());
    assert_eq!(boxplot.series()[0]["data"], json!([[10.0, 10.0, 30.0, 30.0, 30.0]]));
}
