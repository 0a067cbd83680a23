//! JSON export and saved chart rendering

use studio_types::{ChartConfig, DataSet, Theme};

use crate::error::Result;
use crate::mapper::ChartMapper;
use crate::option::ChartOption;

/// Serialize an option the way the editor's "export JSON" action does
pub fn export_json(option: &ChartOption, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(option)?
    } else {
        serde_json::to_string(option)?
    };
    Ok(text)
}

/// Read a data set from imported JSON text
pub fn parse_data_set(json: &str) -> Result<DataSet> {
    Ok(serde_json::from_str(json)?)
}

impl ChartMapper {
    /// Build the option for a saved chart
    ///
    /// The chart's title and theme are applied to its overlay first. A
    /// `System` theme leaves the overlay's `darkMode` untouched.
    pub fn render_config(&self, config: &ChartConfig) -> ChartOption {
        let mut overlay = config.overlay.clone();
        if let Some(title) = &config.title {
            overlay = overlay.with_title(title.clone());
        }
        overlay = match config.theme {
            Theme::Dark => overlay.with_dark_mode(true),
            Theme::Light => overlay.with_dark_mode(false),
            Theme::System => overlay,
        };
        self.generate(config.chart_type, &config.data, &overlay)
    }
}
