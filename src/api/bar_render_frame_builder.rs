use crate::core::{ColorSequencer, ValueRange};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame};

use super::render_frame_builder::ChartFrameInput;

/// Vertical bars anchored at the zero line, one color step per bar.
pub(super) fn build_bar_frame(
    input: &ChartFrameInput<'_>,
    range: ValueRange,
    colors: &mut ColorSequencer<'_>,
) -> RenderFrame {
    let style = input.style;
    let margin = style.plot_margin_px;
    let width = input.width();
    let height = input.height();
    let slot = width / input.count();
    let bar_width = slot * style.bar_fill_ratio;
    let zero_y = height - (margin - height) * range.share(range.min);

    let mut frame = RenderFrame::cleared(input.viewport);
    for (index, value) in input.values.iter().copied().enumerate() {
        let fill = Color::from_rgb8(colors.next_color());
        let x = index as f64 * slot;
        let rect = if value < 0.0 {
            RectPrimitive::new(
                x,
                zero_y,
                bar_width,
                (margin - height) * range.share(value),
                fill,
            )
        } else {
            RectPrimitive::new(
                x,
                height - (height - margin) * range.position(value),
                bar_width,
                (height - margin) * range.share(value),
                fill,
            )
        };
        frame = frame.with_rect(rect);
    }

    frame.with_line(LinePrimitive::new(
        0.0,
        zero_y,
        width,
        zero_y,
        style.zero_line_width,
        style.reference_line_color,
    ))
}
