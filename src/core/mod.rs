pub mod downsampling;
pub mod graph_attribute;
pub mod lim;
pub mod marker;
pub mod plot_params;
pub mod scale;
pub mod sequence;
pub mod types;

pub use downsampling::downsample_indices;
pub use graph_attribute::{
    GraphAttribute, GraphAttributeList, GraphPointPaintFn, ResolvedGraphStyle,
};
pub use lim::{Lim, LimF, LimValue};
pub use marker::{Marker, MarkerType, marker_path};
pub use plot_params::CommonPlotParameterView;
pub use scale::ScaleTransform;
pub use sequence::{iota_delta, iota_delta_map};
pub use types::{Bounds, DownsamplingType, GraphSpreadIndex, Point, Rect, Scaling};
