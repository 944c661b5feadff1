use crate::core::ValueRange;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame};

use super::render_frame_builder::ChartFrameInput;

/// Polyline through every value plus a fixed-color marker per point.
///
/// Marker color comes from the style, never from the color scheme.
pub(super) fn build_line_frame(input: &ChartFrameInput<'_>, range: ValueRange) -> RenderFrame {
    let style = input.style;
    let margin = style.plot_margin_px;
    let offset = style.series_point_offset_px;
    let width = input.width();
    let height = input.height();
    let step = if input.values.len() > 1 {
        (width - margin) / (input.count() - 1.0)
    } else {
        0.0
    };
    let x_at = |index: usize| index as f64 * step;
    let y_at = |value: f64| height - ((height - margin) * range.position(value) + margin);

    let mut frame = RenderFrame::cleared(input.viewport);

    for (index, pair) in input.values.windows(2).enumerate() {
        frame = frame.with_line(LinePrimitive::new(
            x_at(index) + offset,
            y_at(pair[0]) + offset,
            x_at(index + 1) + offset,
            y_at(pair[1]) + offset,
            style.series_line_width,
            style.series_line_color,
        ));
    }

    let marker = style.point_marker_size_px;
    if let [value] = input.values {
        return frame.with_rect(RectPrimitive::new(
            width / 2.0,
            y_at(*value),
            marker,
            marker,
            style.point_marker_color,
        ));
    }
    for (index, value) in input.values.iter().enumerate() {
        frame = frame.with_rect(RectPrimitive::new(
            x_at(index),
            y_at(*value),
            marker,
            marker,
            style.point_marker_color,
        ));
    }
    frame
}
