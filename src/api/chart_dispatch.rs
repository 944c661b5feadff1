use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use tracing::{debug, trace, warn};

use crate::core::ViewMode;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::{ChartFrameInput, build_chart_frame, resolve_view_mode};
use super::{RenderStyle, StateStore, StoreEvent, StoreState, SubscriptionId};

/// Routes store notifications to chart redraws on one surface.
///
/// Every routed notification produces exactly one synchronous redraw; the
/// surface is cleared and fully repainted each time.
pub struct ChartDispatch<R: Renderer> {
    renderer: R,
    style: RenderStyle,
    rng: StdRng,
    last_frame: Option<RenderFrame>,
    last_drawn_mode: Option<ViewMode>,
    last_error: Option<ChartError>,
    redraw_count: u64,
}

impl<R: Renderer> ChartDispatch<R> {
    #[must_use]
    pub fn new(renderer: R, style: RenderStyle, rng: StdRng) -> Self {
        Self {
            renderer,
            style,
            rng,
            last_frame: None,
            last_drawn_mode: None,
            last_error: None,
            redraw_count: 0,
        }
    }

    /// Subscribes `dispatch` to all three notification classes of `store`.
    pub fn attach(dispatch: &Rc<RefCell<Self>>, store: &mut StateStore) -> [SubscriptionId; 3]
    where
        R: 'static,
    {
        let data = Rc::clone(dispatch);
        let selection = Rc::clone(dispatch);
        let view = Rc::clone(dispatch);
        [
            store.subscribe_data(move |event: &StoreEvent, state: &StoreState| {
                data.borrow_mut().handle(event, state);
            }),
            store.subscribe_selection(move |event: &StoreEvent, state: &StoreState| {
                selection.borrow_mut().handle(event, state);
            }),
            store.subscribe_view(move |event: &StoreEvent, state: &StoreState| {
                view.borrow_mut().handle(event, state);
            }),
        ]
    }

    /// Whether `event` changes what is on the surface.
    ///
    /// A freshly added dataset is always followed by its selection, and a
    /// forced view mode by the entry update that caused it; only the second
    /// event of each pair gets drawn.
    #[must_use]
    pub fn routes_to_redraw(event: &StoreEvent) -> bool {
        !matches!(
            event,
            StoreEvent::DatasetAdded { .. } | StoreEvent::ViewModeForced(_)
        )
    }

    pub fn handle(&mut self, event: &StoreEvent, state: &StoreState) {
        if !Self::routes_to_redraw(event) {
            trace!(?event, "notification needs no redraw");
            return;
        }
        debug!(?event, "redraw requested");
        if let Err(err) = self.redraw(state) {
            warn!(error = %err, "chart redraw failed");
            self.last_error = Some(err);
        }
    }

    /// Rebuilds and renders the chart for the current store state.
    ///
    /// Does nothing until a dataset is selected.
    pub fn redraw(&mut self, state: &StoreState) -> ChartResult<()> {
        let Some(dataset) = state.current_dataset() else {
            trace!("no dataset selected; skipping redraw");
            return Ok(());
        };
        let input = ChartFrameInput {
            viewport: state.viewport(),
            values: dataset.values(),
            style: &self.style,
        };
        let frame = build_chart_frame(
            input,
            state.view_mode(),
            state.color_scheme(),
            &mut self.rng,
        )?;
        self.renderer.render(&frame)?;

        self.redraw_count += 1;
        self.last_drawn_mode = Some(resolve_view_mode(state.view_mode(), dataset.values()));
        self.last_frame = Some(frame);
        self.last_error = None;
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_drawn_mode(&self) -> Option<ViewMode> {
        self.last_drawn_mode
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&ChartError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
