mod look_and_feel;
mod plot_label;
mod theme;

pub use look_and_feel::{
    DefaultPlotLookAndFeel, LabelKind, LabelLayout, LabelStyle, PlotLookAndFeel,
};
pub use plot_label::{LabelText, PlotLabel};
pub use theme::{PLOT_THEME_JSON_SCHEMA_V1, PlotTheme, PlotThemeJsonContractV1};
