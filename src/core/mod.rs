pub mod color_sequence;
pub mod dataset;
pub mod scale;
pub mod types;

pub use color_sequence::{ColorSequencer, Rgb8};
pub use dataset::{Dataset, DatasetRegistry};
pub use scale::{ChartScale, PieSlices, SemStats, ValueRange};
pub use types::{ColorScheme, ViewMode, Viewport};
