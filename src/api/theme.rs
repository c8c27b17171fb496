use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

pub const PLOT_THEME_JSON_SCHEMA_V1: u32 = 1;

/// Colours, fonts, and spacing used by the default look-and-feel.
///
/// This type is serializable so host applications can persist/load themes
/// without inventing their own ad-hoc format. Missing fields keep their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotTheme {
    pub background_colour: Color,
    /// Box drawn behind each non-empty label; `None` leaves labels unboxed.
    pub label_background_colour: Option<Color>,
    pub x_label_colour: Color,
    pub y_label_colour: Color,
    pub title_colour: Color,
    pub label_font_size_px: f64,
    pub title_font_size_px: f64,
    /// Gap between the component edge and the labels.
    pub label_margin_px: f64,
    /// Gap between the labels and the graph area.
    pub graph_margin_px: f64,
}

impl Default for PlotTheme {
    fn default() -> Self {
        let text = Color::rgb(0.85, 0.85, 0.85);
        Self {
            background_colour: Color::rgb(0.09, 0.09, 0.10),
            label_background_colour: None,
            x_label_colour: text,
            y_label_colour: text,
            title_colour: text,
            label_font_size_px: 14.0,
            title_font_size_px: 16.0,
            label_margin_px: 4.0,
            graph_margin_px: 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotThemeJsonContractV1 {
    pub schema_version: u32,
    pub theme: PlotTheme,
}

impl PlotTheme {
    pub fn validate(self) -> PlotResult<Self> {
        self.background_colour.validate()?;
        if let Some(colour) = self.label_background_colour {
            colour.validate()?;
        }
        self.x_label_colour.validate()?;
        self.y_label_colour.validate()?;
        self.title_colour.validate()?;

        for (value, name) in [
            (self.label_font_size_px, "label_font_size_px"),
            (self.title_font_size_px, "title_font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "theme `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.label_margin_px, "label_margin_px"),
            (self.graph_margin_px, "graph_margin_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "theme `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    pub fn to_json_contract_v1_pretty(self) -> PlotResult<String> {
        let payload = PlotThemeJsonContractV1 {
            schema_version: PLOT_THEME_JSON_SCHEMA_V1,
            theme: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize theme contract v1: {e}"))
        })
    }

    /// Parses either a bare theme object or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse theme json: {e}")))?;

        let theme = if value.get("schema_version").is_some() {
            let payload: PlotThemeJsonContractV1 = serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidData(format!("failed to parse theme json payload: {e}"))
            })?;
            if payload.schema_version != PLOT_THEME_JSON_SCHEMA_V1 {
                return Err(PlotError::InvalidData(format!(
                    "unsupported theme schema version: {}",
                    payload.schema_version
                )));
            }
            payload.theme
        } else {
            serde_json::from_value(value)
                .map_err(|e| PlotError::InvalidData(format!("failed to parse theme json: {e}")))?
        };

        theme.validate()
    }
}
