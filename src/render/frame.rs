use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, LinePrimitive, Primitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are kept in paint order; a full redraw starts with
/// `Primitive::Clear`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    /// Frame that starts by clearing the surface.
    #[must_use]
    pub fn cleared(viewport: Viewport) -> Self {
        Self::new(viewport).with_primitive(Primitive::Clear)
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    #[must_use]
    pub fn with_line(self, line: LinePrimitive) -> Self {
        self.with_primitive(Primitive::Line(line))
    }

    #[must_use]
    pub fn with_rect(self, rect: RectPrimitive) -> Self {
        self.with_primitive(Primitive::Rect(rect))
    }

    #[must_use]
    pub fn with_arc(self, arc: ArcPrimitive) -> Self {
        self.with_primitive(Primitive::Arc(arc))
    }

    #[must_use]
    pub fn with_text(self, text: TextPrimitive) -> Self {
        self.with_primitive(Primitive::Text(text))
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    /// `true` when the frame draws nothing beyond an optional clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives
            .iter()
            .all(|primitive| matches!(primitive, Primitive::Clear))
    }
}
