use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ColorScheme, Dataset, DatasetRegistry, ViewMode, Viewport};
use crate::error::{ChartError, ChartResult};

use super::subscription::ObserverList;
use super::{ChangeClass, StoreEvent, StoreObserver, SubscriptionId};

/// Read-only view of everything the store owns.
///
/// Observers receive this after a mutation has been fully applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    registry: DatasetRegistry,
    current: Option<String>,
    view_mode: ViewMode,
    color_scheme: ColorScheme,
    viewport: Viewport,
}

impl StoreState {
    pub fn dataset_names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    #[must_use]
    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    #[must_use]
    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.registry.get(name)
    }

    #[must_use]
    pub fn current_dataset_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn current_dataset(&self) -> Option<&Dataset> {
        self.current.as_deref().and_then(|name| self.registry.get(name))
    }

    /// Values of the selected dataset; empty before the first dataset exists.
    #[must_use]
    pub fn current_values(&self) -> &[f64] {
        self.current_dataset().map(Dataset::values).unwrap_or_default()
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Single writer for datasets and selection state, with typed notifications.
///
/// Data observers are bound to the selected dataset and move with the
/// selection, so each one fires once per mutation no matter how many datasets
/// were visited before.
pub struct StateStore {
    state: StoreState,
    data_bindings: IndexMap<String, ObserverList>,
    unbound_data_observers: ObserverList,
    selection_observers: ObserverList,
    view_observers: ObserverList,
    next_serial: u64,
}

impl StateStore {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        ensure_viewport(viewport)?;
        Ok(Self {
            state: StoreState {
                registry: DatasetRegistry::new(),
                current: None,
                view_mode: ViewMode::default(),
                color_scheme: ColorScheme::default(),
                viewport,
            },
            data_bindings: IndexMap::new(),
            unbound_data_observers: ObserverList::default(),
            selection_observers: ObserverList::default(),
            view_observers: ObserverList::default(),
            next_serial: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Creates a dataset seeded with one zero entry and selects it.
    ///
    /// Returns `Ok(false)` without side effects when the name already exists.
    pub fn add_dataset(&mut self, name: impl Into<String>) -> ChartResult<bool> {
        self.add_dataset_with_values(name, vec![0.0])
    }

    /// Creates a dataset with `values` and selects it.
    pub fn add_dataset_with_values(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> ChartResult<bool> {
        let dataset = Dataset::with_values(name, values)?;
        let name = dataset.name().to_owned();
        if !self.state.registry.insert(dataset) {
            debug!(dataset = %name, "dataset already exists; ignoring add");
            return Ok(false);
        }
        debug!(dataset = %name, "dataset added");
        self.notify(StoreEvent::DatasetAdded { name: name.clone() });
        self.select_dataset(&name);
        Ok(true)
    }

    /// Switches the selection to `name`. Returns `false` for unknown names.
    pub fn select_dataset(&mut self, name: &str) -> bool {
        if !self.state.registry.contains(name) {
            debug!(dataset = %name, "unknown dataset; ignoring selection");
            return false;
        }

        let mut observers = match self.state.current.as_deref() {
            Some(previous) => self.data_bindings.shift_remove(previous).unwrap_or_default(),
            None => std::mem::take(&mut self.unbound_data_observers),
        };
        self.state.current = Some(name.to_owned());
        self.data_bindings
            .entry(name.to_owned())
            .or_default()
            .append(&mut observers);

        debug!(dataset = %name, "dataset selected");
        self.notify(StoreEvent::DatasetSelected {
            name: name.to_owned(),
        });
        true
    }

    /// Appends a zero entry to the selected dataset.
    pub fn add_entry(&mut self) {
        let Some(dataset) = self.current_dataset_mut() else {
            debug!("no dataset selected; ignoring add entry");
            return;
        };
        let index = dataset.push_zero();
        debug!(index, "entry added");
        self.notify(StoreEvent::EntryAdded { index });
    }

    /// Replaces the value at `index`.
    ///
    /// The first negative value written while SEM or pie would otherwise be
    /// drawable forces the view mode to `Line`; that view change is announced
    /// before the data change.
    pub fn update_entry(&mut self, index: usize, value: f64) -> ChartResult<()> {
        let Some(dataset) = self.current_dataset_mut() else {
            debug!(index, "no dataset selected; ignoring update");
            return Ok(());
        };
        let had_negative = dataset.has_negative();
        dataset.set(index, value)?;

        let force_line = !had_negative && value < 0.0 && self.state.view_mode != ViewMode::Line;
        if force_line {
            debug!(from = self.state.view_mode.label(), "negative value forces line view");
            self.state.view_mode = ViewMode::Line;
        }
        debug!(index, value, "entry updated");

        if force_line {
            self.notify(StoreEvent::ViewModeForced(ViewMode::Line));
        }
        self.notify(StoreEvent::EntryUpdated { index, value });
        Ok(())
    }

    /// Removes the entry at `index`; the last remaining entry is kept.
    pub fn remove_entry(&mut self, index: usize) -> ChartResult<()> {
        let Some(dataset) = self.current_dataset_mut() else {
            debug!(index, "no dataset selected; ignoring remove");
            return Ok(());
        };
        if dataset.remove(index)?.is_none() {
            debug!(index, "refusing to remove the last entry");
            return Ok(());
        }
        debug!(index, "entry removed");
        self.notify(StoreEvent::EntryRemoved { index });
        Ok(())
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
        debug!(mode = mode.label(), "view mode set");
        self.notify(StoreEvent::ViewModeChanged(mode));
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.state.color_scheme = scheme;
        debug!(scheme = scheme.label(), "color scheme set");
        self.notify(StoreEvent::ColorSchemeChanged(scheme));
    }

    /// Records a new surface size. Unchanged sizes notify nobody.
    pub fn resize_surface(&mut self, viewport: Viewport) -> ChartResult<()> {
        ensure_viewport(viewport)?;
        if viewport == self.state.viewport {
            return Ok(());
        }
        self.state.viewport = viewport;
        debug!(width = viewport.width, height = viewport.height, "surface resized");
        self.notify(StoreEvent::SurfaceResized(viewport));
        Ok(())
    }

    /// Observes entry changes of whichever dataset is selected.
    pub fn subscribe_data(&mut self, observer: impl StoreObserver + 'static) -> SubscriptionId {
        let id = self.next_id(ChangeClass::Data);
        let observers = match self.state.current.as_deref() {
            Some(name) => self.data_bindings.entry(name.to_owned()).or_default(),
            None => &mut self.unbound_data_observers,
        };
        observers.push(id, Box::new(observer));
        id
    }

    pub fn subscribe_selection(
        &mut self,
        observer: impl StoreObserver + 'static,
    ) -> SubscriptionId {
        let id = self.next_id(ChangeClass::Selection);
        self.selection_observers.push(id, Box::new(observer));
        id
    }

    pub fn subscribe_view(&mut self, observer: impl StoreObserver + 'static) -> SubscriptionId {
        let id = self.next_id(ChangeClass::View);
        self.view_observers.push(id, Box::new(observer));
        id
    }

    /// Removes a subscription. Returns `true` when it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match id.class {
            ChangeClass::Data => {
                self.unbound_data_observers.remove(id)
                    || self
                        .data_bindings
                        .values_mut()
                        .any(|observers| observers.remove(id))
            }
            ChangeClass::Selection => self.selection_observers.remove(id),
            ChangeClass::View => self.view_observers.remove(id),
        }
    }

    /// Number of data observers currently bound to dataset `name`.
    #[must_use]
    pub fn data_observer_count(&self, name: &str) -> usize {
        self.data_bindings.get(name).map_or(0, ObserverList::len)
    }

    fn current_dataset_mut(&mut self) -> Option<&mut Dataset> {
        let name = self.state.current.as_deref()?;
        self.state.registry.get_mut(name)
    }

    fn next_id(&mut self, class: ChangeClass) -> SubscriptionId {
        self.next_serial += 1;
        SubscriptionId {
            class,
            serial: self.next_serial,
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        let state = &self.state;
        let observers = match event.class() {
            ChangeClass::Data => {
                let Some(name) = state.current.as_deref() else {
                    return;
                };
                match self.data_bindings.get_mut(name) {
                    Some(observers) => observers,
                    None => return,
                }
            }
            ChangeClass::Selection => &mut self.selection_observers,
            ChangeClass::View => &mut self.view_observers,
        };
        if observers.is_empty() {
            return;
        }
        observers.notify(&event, state);
    }
}

fn ensure_viewport(viewport: Viewport) -> ChartResult<()> {
    if viewport.is_valid() {
        return Ok(());
    }
    Err(ChartError::InvalidViewport {
        width: viewport.width,
        height: viewport.height,
    })
}
