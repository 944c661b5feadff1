use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, LineCap, LinePrimitive, LineStrokeStyle, Primitive, RectPrimitive,
    RenderFrame, Renderer, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub clears: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub arcs_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders offscreen into an owned image surface through `Renderer::render`,
/// or in place on an external context through `CairoContextRenderer`.
/// The owned surface is recreated whenever the frame viewport changes size.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::WHITE,
            font_family: "Verdana".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface content as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();
        for primitive in &frame.primitives {
            match primitive {
                Primitive::Clear => {
                    apply_color(context, self.clear_color);
                    context
                        .paint()
                        .map_err(|err| map_backend_error("failed to clear surface", err))?;
                    stats.clears += 1;
                }
                Primitive::Line(line) => {
                    draw_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                Primitive::Rect(rect) => {
                    draw_rect(context, *rect)?;
                    stats.rects_drawn += 1;
                }
                Primitive::Arc(arc) => {
                    draw_arc(context, *arc)?;
                    stats.arcs_drawn += 1;
                }
                Primitive::Text(text) => {
                    draw_text(context, text, &self.font_family);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let (width, height) = surface_size(frame)?;
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = create_surface(width, height)?;
        }
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.set_line_cap(match line.cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Square => cairo::LineCap::Square,
    });
    match line.stroke_style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed(dash) => context.set_dash(&[dash], 0.0),
    }
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))?;
    context.set_dash(&[], 0.0);
    Ok(())
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    apply_color(context, rect.fill_color);
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn draw_arc(context: &Context, arc: ArcPrimitive) -> ChartResult<()> {
    if arc.width <= 0.0 || arc.height <= 0.0 {
        return Ok(());
    }
    let start = -arc.start_angle_deg.to_radians();
    let end = -(arc.start_angle_deg + arc.extent_deg).to_radians();

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(arc.x + arc.width / 2.0, arc.y + arc.height / 2.0);
    context.scale(arc.width / 2.0, arc.height / 2.0);
    context.move_to(0.0, 0.0);
    // Screen y points down, so counter-clockwise sweeps use `arc_negative`.
    context.arc_negative(0.0, 0.0, 1.0, start, end);
    context.close_path();
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))?;

    apply_color(context, arc.fill_color);
    if arc.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill arc", err))?;
        apply_color(context, arc.border_color);
        context.set_line_width(arc.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke arc border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill arc", err))
    }
}

fn draw_text(context: &Context, text: &TextPrimitive, font_family: &str) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description =
        FontDescription::from_string(&format!("{font_family} {}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    if let Some(max_width) = text.max_width {
        layout.set_width((max_width * f64::from(pango::SCALE)) as i32);
    }
    layout.set_text(&text.text);

    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    apply_color(context, text.color);
    context.move_to(text.x, text.y - baseline);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn surface_size(frame: &RenderFrame) -> ChartResult<(i32, i32)> {
    let width = i32::try_from(frame.viewport.width);
    let height = i32::try_from(frame.viewport.height);
    match (width, height) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(ChartError::InvalidViewport {
            width: frame.viewport.width,
            height: frame.viewport.height,
        }),
    }
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
