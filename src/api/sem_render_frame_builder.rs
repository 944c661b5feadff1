use crate::core::{ColorSequencer, SemStats, ValueRange};
use crate::render::{Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextPrimitive};

use super::render_frame_builder::ChartFrameInput;

/// Bars on a zero baseline with mean and mean±SEM reference lines.
///
/// Only reached for non-negative data, so every bar grows upward from the
/// bottom edge.
pub(super) fn build_sem_frame(
    input: &ChartFrameInput<'_>,
    range: ValueRange,
    stats: SemStats,
    colors: &mut ColorSequencer<'_>,
) -> RenderFrame {
    let style = input.style;
    let margin = style.plot_margin_px;
    let width = input.width();
    let height = input.height();
    let slot = width / input.count();
    let bar_width = slot * style.bar_fill_ratio;
    let y_at = |position: f64| height - (height - margin) * position;

    let mut frame = RenderFrame::cleared(input.viewport);
    for (index, value) in input.values.iter().copied().enumerate() {
        frame = frame.with_rect(RectPrimitive::new(
            index as f64 * slot,
            y_at(range.position(value)),
            bar_width,
            (height - margin) * range.share(value),
            Color::from_rgb8(colors.next_color()),
        ));
    }

    let reference = |y: f64| {
        LinePrimitive::new(
            0.0,
            y,
            width,
            y,
            style.sem_line_width,
            style.reference_line_color,
        )
    };
    let dashed = LineStrokeStyle::Dashed(style.sem_dash_px);
    let baseline = height - style.sem_baseline_inset_px;

    let mean = range.position(stats.mean);
    let sem = range.share(stats.sem);

    let label = style.sem_label_box;
    frame
        .with_line(reference(baseline))
        .with_line(reference(y_at(mean)))
        .with_line(reference(y_at(mean + sem)).with_stroke_style(dashed))
        .with_line(reference(y_at(mean - sem)).with_stroke_style(dashed))
        .with_rect(RectPrimitive::new(
            label.x,
            label.y,
            label.width,
            label.height,
            style.sem_label_box_color,
        ))
        .with_text(
            TextPrimitive::new(
                sem_label_text(stats),
                label.text_x,
                label.text_y,
                style.sem_label_font_size_px,
                style.sem_label_text_color,
            )
            .with_max_width(label.text_max_width),
        )
}

/// Label body, e.g. `"Mean: 2.3 \n SEM: 0.25"`.
#[must_use]
pub fn sem_label_text(stats: SemStats) -> String {
    format!(
        "Mean: {} \n SEM: {}",
        round_to_hundredths(stats.mean),
        round_to_hundredths(stats.sem)
    )
}

fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}
