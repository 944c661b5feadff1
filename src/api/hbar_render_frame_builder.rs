use crate::core::{ColorSequencer, ValueRange};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame};

use super::render_frame_builder::ChartFrameInput;

/// Horizontal bars extending left/right from a vertical zero line.
///
/// Entry order maps to rows top-down; `range` carries the ±10 minimum span.
pub(super) fn build_hbar_frame(
    input: &ChartFrameInput<'_>,
    range: ValueRange,
    colors: &mut ColorSequencer<'_>,
) -> RenderFrame {
    let style = input.style;
    let margin = style.plot_margin_px;
    let width = input.width();
    let height = input.height();
    let slot = height / input.count();
    let bar_height = slot * style.bar_fill_ratio;
    let zero_x = (margin - width) * range.share(range.min);

    let mut frame = RenderFrame::cleared(input.viewport);
    for (index, value) in input.values.iter().copied().enumerate() {
        let fill = Color::from_rgb8(colors.next_color());
        let y = index as f64 * slot;
        let rect = if value > 0.0 {
            RectPrimitive::new(
                zero_x,
                y,
                (width - margin) * range.share(value),
                bar_height,
                fill,
            )
        } else {
            RectPrimitive::new(
                (width - margin) * range.position(value),
                y,
                (margin - width) * range.share(value),
                bar_height,
                fill,
            )
        };
        frame = frame.with_rect(rect);
    }

    frame.with_line(LinePrimitive::new(
        zero_x,
        0.0,
        zero_x,
        height,
        style.zero_line_width,
        style.reference_line_color,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RenderStyle;
    use crate::core::{ColorScheme, Viewport};
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn thin_data_uses_minimum_span_around_zero() {
        let style = RenderStyle::default();
        let values = [1.0, -1.0];
        let input = ChartFrameInput {
            viewport: Viewport::new(230, 100),
            values: &values,
            style: &style,
        };
        let range = ValueRange::symmetric_min_span(&values).expect("range");
        let mut rng = StdRng::seed_from_u64(0);
        let frame = build_hbar_frame(
            &input,
            range,
            &mut ColorSequencer::new(ColorScheme::Green, &mut rng),
        );

        // divisor = 10 - (-10) + 1 = 21, zero line at (20 - 230) * -10 / 21 = 100
        let rects: Vec<_> = frame.rects().collect();
        assert_relative_eq!(rects[0].x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(rects[0].width, 10.0, epsilon = 1e-9);
        assert_relative_eq!(rects[0].height, 35.0, epsilon = 1e-9);
        assert_relative_eq!(rects[1].y, 50.0, epsilon = 1e-9);
        assert_relative_eq!(rects[1].x + rects[1].width, 100.0, epsilon = 1e-9);

        let zero_line = frame.lines().next().expect("zero line");
        assert_relative_eq!(zero_line.x1, 100.0, epsilon = 1e-9);
        assert_relative_eq!(zero_line.y2, 100.0, epsilon = 1e-9);
    }
}
