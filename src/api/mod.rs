mod bar_render_frame_builder;
mod chart_dispatch;
mod engine;
mod engine_config;
mod hbar_render_frame_builder;
mod line_render_frame_builder;
mod pie_render_frame_builder;
mod render_frame_builder;
mod render_style;
mod sem_render_frame_builder;
mod state_store;
mod subscription;

pub use chart_dispatch::ChartDispatch;
pub use engine::PlotEngine;
pub use engine_config::{
    DEFAULT_DATASET_NAME, DEFAULT_SAMPLE_VALUES, PlotEngineConfig, SeedDataset,
};
pub use render_frame_builder::{ChartFrameInput, build_chart_frame, resolve_view_mode};
pub use render_style::{LabelBox, RenderStyle};
pub use sem_render_frame_builder::sem_label_text;
pub use state_store::{StateStore, StoreState};
pub use subscription::{ChangeClass, StoreEvent, StoreObserver, SubscriptionId};
