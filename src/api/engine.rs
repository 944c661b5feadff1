use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::core::{ColorScheme, ViewMode, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::resolve_view_mode;
use super::{
    ChartDispatch, PlotEngineConfig, RenderStyle, StateStore, StoreObserver, StoreState,
    SubscriptionId,
};

/// Main facade consumed by UI glue.
///
/// `PlotEngine` owns the state store, wires the chart dispatch layer to it
/// and exposes the command surface plus read models for display. Every
/// command completes its redraw before returning.
pub struct PlotEngine<R: Renderer + 'static> {
    store: StateStore,
    dispatch: Rc<RefCell<ChartDispatch<R>>>,
    dispatch_subscriptions: [SubscriptionId; 3],
}

impl<R: Renderer + 'static> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotEngineConfig) -> ChartResult<Self> {
        config.validate()?;

        let mut store = StateStore::new(config.viewport)?;
        store.set_view_mode(config.view_mode);
        store.set_color_scheme(config.color_scheme);

        let rng = match config.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dispatch = Rc::new(RefCell::new(ChartDispatch::new(renderer, config.style, rng)));
        let dispatch_subscriptions = ChartDispatch::attach(&dispatch, &mut store);

        let mut engine = Self {
            store,
            dispatch,
            dispatch_subscriptions,
        };
        if let Some(seed) = config.seed_dataset {
            engine.store.add_dataset_with_values(seed.name, seed.values)?;
        }
        info!(
            width = config.viewport.width,
            height = config.viewport.height,
            datasets = engine.store.state().registry().len(),
            "plot engine initialized"
        );
        Ok(engine)
    }

    /// Creates a dataset holding a single zero and selects it.
    ///
    /// Returns `Ok(false)` when the name is already taken.
    pub fn create_dataset(&mut self, name: impl Into<String>) -> ChartResult<bool> {
        self.store.add_dataset(name)
    }

    /// Selects `name`; unknown names are ignored and return `false`.
    pub fn select_dataset(&mut self, name: &str) -> bool {
        self.store.select_dataset(name)
    }

    pub fn set_entry(&mut self, index: usize, value: f64) -> ChartResult<()> {
        self.store.update_entry(index, value)
    }

    pub fn add_entry(&mut self) {
        self.store.add_entry();
    }

    pub fn remove_entry(&mut self, index: usize) -> ChartResult<()> {
        self.store.remove_entry(index)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.store.set_view_mode(mode);
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.store.set_color_scheme(scheme);
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.store.resize_surface(Viewport::new(width, height))
    }

    /// Forces a redraw of the current state and reports backend errors.
    pub fn redraw(&mut self) -> ChartResult<()> {
        self.dispatch.borrow_mut().redraw(self.store.state())
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.dispatch.borrow_mut().set_style(style)?;
        debug!("render style replaced");
        self.redraw()
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.dispatch.borrow().style()
    }

    #[must_use]
    pub fn state(&self) -> &StoreState {
        self.store.state()
    }

    pub fn dataset_names(&self) -> impl Iterator<Item = &str> {
        self.store.state().dataset_names()
    }

    #[must_use]
    pub fn current_dataset_name(&self) -> Option<&str> {
        self.store.state().current_dataset_name()
    }

    #[must_use]
    pub fn current_values(&self) -> &[f64] {
        self.store.state().current_values()
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.store.state().view_mode()
    }

    /// Mode that the next redraw draws after the negative/zero-sum fallback.
    #[must_use]
    pub fn effective_view_mode(&self) -> ViewMode {
        resolve_view_mode(self.view_mode(), self.current_values())
    }

    /// Modes selectable for the current dataset, in display order.
    #[must_use]
    pub fn available_view_modes(&self) -> Vec<ViewMode> {
        let values = self.current_values();
        ViewMode::ALL
            .into_iter()
            .filter(|mode| mode.is_available_for(values))
            .collect()
    }

    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.store.state().color_scheme()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.store.state().viewport()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<RenderFrame> {
        self.dispatch.borrow().last_frame().cloned()
    }

    #[must_use]
    pub fn last_drawn_mode(&self) -> Option<ViewMode> {
        self.dispatch.borrow().last_drawn_mode()
    }

    /// Error of the most recent failed notification-driven redraw.
    #[must_use]
    pub fn last_render_error(&self) -> Option<ChartError> {
        self.dispatch.borrow().last_error().cloned()
    }

    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.dispatch.borrow().redraw_count()
    }

    pub fn subscribe_data(&mut self, observer: impl StoreObserver + 'static) -> SubscriptionId {
        self.store.subscribe_data(observer)
    }

    pub fn subscribe_selection(
        &mut self,
        observer: impl StoreObserver + 'static,
    ) -> SubscriptionId {
        self.store.subscribe_selection(observer)
    }

    pub fn subscribe_view(&mut self, observer: impl StoreObserver + 'static) -> SubscriptionId {
        self.store.subscribe_view(observer)
    }

    /// Removes a host subscription. The engine's own redraw wiring cannot be
    /// removed through this method.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.dispatch_subscriptions.contains(&id) {
            return false;
        }
        self.store.unsubscribe(id)
    }

    #[must_use]
    pub fn data_observer_count(&self, dataset: &str) -> usize {
        self.store.data_observer_count(dataset)
    }

    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(self.dispatch.borrow().renderer())
    }

    /// Tears the engine down and hands back the renderer.
    #[must_use]
    pub fn into_renderer(self) -> Option<R> {
        let Self {
            store, dispatch, ..
        } = self;
        drop(store);
        Rc::try_unwrap(dispatch)
            .ok()
            .map(|cell| cell.into_inner().into_renderer())
    }
}
