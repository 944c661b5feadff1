use rand::RngCore;
use tracing::trace;

use crate::core::{ChartScale, ColorScheme, ColorSequencer, ViewMode, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

use super::RenderStyle;
use super::bar_render_frame_builder::build_bar_frame;
use super::hbar_render_frame_builder::build_hbar_frame;
use super::line_render_frame_builder::build_line_frame;
use super::pie_render_frame_builder::build_pie_frame;
use super::sem_render_frame_builder::build_sem_frame;

/// Inputs shared by every chart renderer for one pass.
#[derive(Debug, Clone, Copy)]
pub struct ChartFrameInput<'a> {
    pub viewport: Viewport,
    pub values: &'a [f64],
    pub style: &'a RenderStyle,
}

impl ChartFrameInput<'_> {
    pub(super) fn width(&self) -> f64 {
        self.viewport.width_px()
    }

    pub(super) fn height(&self) -> f64 {
        self.viewport.height_px()
    }

    pub(super) fn count(&self) -> f64 {
        self.values.len() as f64
    }
}

/// Mode that is actually drawn for `values`.
///
/// SEM and pie charts fall back to `Line` for negative data; pie charts also
/// fall back when the total is zero. Either falls back when its statistics
/// overflow.
#[must_use]
pub fn resolve_view_mode(requested: ViewMode, values: &[f64]) -> ViewMode {
    resolve_scale(requested, values).map_or(requested, |(mode, _)| mode)
}

fn resolve_scale(requested: ViewMode, values: &[f64]) -> ChartResult<(ViewMode, ChartScale)> {
    let scale = ChartScale::compute(values, requested)?;
    if scale.is_drawable() {
        return Ok((requested, scale));
    }
    Ok((ViewMode::Line, ChartScale::compute(values, ViewMode::Line)?))
}

/// Builds the full frame for one redraw of `values` in `requested` mode.
pub fn build_chart_frame(
    input: ChartFrameInput<'_>,
    requested: ViewMode,
    scheme: ColorScheme,
    rng: &mut dyn RngCore,
) -> ChartResult<RenderFrame> {
    if !input.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: input.viewport.width,
            height: input.viewport.height,
        });
    }

    let (mode, scale) = resolve_scale(requested, input.values)?;
    trace!(
        requested = requested.label(),
        drawn = mode.label(),
        values = input.values.len(),
        "building chart frame"
    );

    let frame = match scale {
        ChartScale::Linear(range) => match mode {
            ViewMode::Bar => build_bar_frame(&input, range, &mut ColorSequencer::new(scheme, rng)),
            ViewMode::HBar => {
                build_hbar_frame(&input, range, &mut ColorSequencer::new(scheme, rng))
            }
            _ => build_line_frame(&input, range),
        },
        ChartScale::Sem { range, stats } => {
            build_sem_frame(&input, range, stats, &mut ColorSequencer::new(scheme, rng))
        }
        ChartScale::Pie(slices) => {
            build_pie_frame(&input, &slices, &mut ColorSequencer::new(scheme, rng))
        }
    };
    Ok(frame)
}
