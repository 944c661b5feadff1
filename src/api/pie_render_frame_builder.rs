use crate::core::{ColorSequencer, PieSlices};
use crate::render::{ArcPrimitive, Color, RenderFrame};

use super::render_frame_builder::ChartFrameInput;

/// One sector per value, laid out consecutively from 0 degrees.
pub(super) fn build_pie_frame(
    input: &ChartFrameInput<'_>,
    slices: &PieSlices,
    colors: &mut ColorSequencer<'_>,
) -> RenderFrame {
    let style = input.style;
    let margin = style.plot_margin_px;
    let diameter = input.width().min(input.height()) - 2.0 * margin;

    let mut frame = RenderFrame::cleared(input.viewport);
    let mut start = 0.0;
    for extent in slices.angles.iter().copied() {
        frame = frame.with_arc(ArcPrimitive {
            x: margin,
            y: margin,
            width: diameter,
            height: diameter,
            start_angle_deg: start,
            extent_deg: extent,
            fill_color: Color::from_rgb8(colors.next_color()),
            border_color: style.pie_border_color,
            border_width: style.pie_border_width,
        });
        start += extent;
    }
    frame
}
