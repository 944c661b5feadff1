use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract shared by every chart renderer.
///
/// The default reproduces the reference geometry exactly; hosts may tweak
/// colors and sizes without touching the layout formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Inset reserved on the value axis of every chart, in pixels.
    pub plot_margin_px: f64,
    pub series_line_color: Color,
    pub series_line_width: f64,
    /// Shift applied to line segments so they pass through marker centers.
    pub series_point_offset_px: f64,
    pub point_marker_color: Color,
    pub point_marker_size_px: f64,
    /// Fraction of each bar slot covered by the bar.
    pub bar_fill_ratio: f64,
    pub reference_line_color: Color,
    pub zero_line_width: f64,
    pub sem_line_width: f64,
    pub sem_dash_px: f64,
    pub sem_baseline_inset_px: f64,
    pub sem_label_box_color: Color,
    pub sem_label_box: LabelBox,
    pub sem_label_text_color: Color,
    pub sem_label_font_size_px: f64,
    pub pie_border_color: Color,
    pub pie_border_width: f64,
}

/// Placement of the SEM statistics label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text_x: f64,
    pub text_y: f64,
    pub text_max_width: f64,
}

impl Default for LabelBox {
    fn default() -> Self {
        Self {
            x: 25.0,
            y: 12.0,
            width: 65.0,
            height: 42.0,
            text_x: 30.0,
            text_y: 30.0,
            text_max_width: 60.0,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            plot_margin_px: 20.0,
            series_line_color: Color::BLACK,
            series_line_width: 2.0,
            series_point_offset_px: 2.5,
            point_marker_color: Color::RED,
            point_marker_size_px: 5.0,
            bar_fill_ratio: 0.7,
            reference_line_color: Color::BLACK,
            zero_line_width: 3.0,
            sem_line_width: 2.0,
            sem_dash_px: 8.0,
            sem_baseline_inset_px: 1.0,
            sem_label_box_color: Color::WHITE,
            sem_label_box: LabelBox::default(),
            sem_label_text_color: Color::BLACK,
            sem_label_font_size_px: 12.0,
            pie_border_color: Color::WHITE,
            pie_border_width: 1.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.series_line_color,
            self.point_marker_color,
            self.reference_line_color,
            self.sem_label_box_color,
            self.sem_label_text_color,
            self.pie_border_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("series_line_width", self.series_line_width),
            ("point_marker_size_px", self.point_marker_size_px),
            ("zero_line_width", self.zero_line_width),
            ("sem_line_width", self.sem_line_width),
            ("sem_dash_px", self.sem_dash_px),
            ("sem_label_font_size_px", self.sem_label_font_size_px),
            ("sem_label_box.text_max_width", self.sem_label_box.text_max_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("plot_margin_px", self.plot_margin_px),
            ("series_point_offset_px", self.series_point_offset_px),
            ("sem_baseline_inset_px", self.sem_baseline_inset_px),
            ("pie_border_width", self.pie_border_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }

        if !self.bar_fill_ratio.is_finite() || !(0.0..=1.0).contains(&self.bar_fill_ratio) {
            return Err(ChartError::InvalidData(
                "render style `bar_fill_ratio` must be in [0, 1]".to_owned(),
            ));
        }

        let label = self.sem_label_box;
        if [label.x, label.y, label.width, label.height, label.text_x, label.text_y]
            .iter()
            .any(|value| !value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "render style `sem_label_box` must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_valid() {
        RenderStyle::default().validate().expect("default style");
    }

    #[test]
    fn rejects_out_of_range_fill_ratio() {
        let style = RenderStyle {
            bar_fill_ratio: 1.5,
            ..RenderStyle::default()
        };
        assert!(style.validate().is_err());
    }
}
