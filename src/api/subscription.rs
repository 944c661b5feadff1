use serde::{Deserialize, Serialize};

use crate::core::{ColorScheme, ViewMode, Viewport};

use super::StoreState;

/// Notification class an observer subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeClass {
    /// Entries of the selected dataset were added, edited or removed.
    Data,
    /// The dataset registry or the selected dataset changed.
    Selection,
    /// View mode, color scheme or surface size changed.
    View,
}

/// Change delivered to observers after the store state was updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
    EntryAdded { index: usize },
    EntryUpdated { index: usize, value: f64 },
    EntryRemoved { index: usize },
    DatasetAdded { name: String },
    DatasetSelected { name: String },
    ViewModeChanged(ViewMode),
    /// A data edit switched the view mode; its `EntryUpdated` follows.
    ViewModeForced(ViewMode),
    ColorSchemeChanged(ColorScheme),
    SurfaceResized(Viewport),
}

impl StoreEvent {
    #[must_use]
    pub fn class(&self) -> ChangeClass {
        match self {
            Self::EntryAdded { .. } | Self::EntryUpdated { .. } | Self::EntryRemoved { .. } => {
                ChangeClass::Data
            }
            Self::DatasetAdded { .. } | Self::DatasetSelected { .. } => ChangeClass::Selection,
            Self::ViewModeChanged(_)
            | Self::ViewModeForced(_)
            | Self::ColorSchemeChanged(_)
            | Self::SurfaceResized(_) => ChangeClass::View,
        }
    }
}

/// Handle returned by the store's `subscribe_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    pub(super) class: ChangeClass,
    pub(super) serial: u64,
}

impl SubscriptionId {
    #[must_use]
    pub fn class(self) -> ChangeClass {
        self.class
    }
}

/// Observer hook for store notifications.
///
/// Observers read the already-updated state; they cannot mutate the store.
pub trait StoreObserver {
    fn on_change(&mut self, event: &StoreEvent, state: &StoreState);
}

impl<F> StoreObserver for F
where
    F: FnMut(&StoreEvent, &StoreState),
{
    fn on_change(&mut self, event: &StoreEvent, state: &StoreState) {
        self(event, state);
    }
}

/// Observers of one class, in registration order.
#[derive(Default)]
pub(super) struct ObserverList {
    entries: Vec<(SubscriptionId, Box<dyn StoreObserver>)>,
}

impl ObserverList {
    pub(super) fn push(&mut self, id: SubscriptionId, observer: Box<dyn StoreObserver>) {
        self.entries.push((id, observer));
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        if let Some(position) = self.entries.iter().position(|(entry, _)| *entry == id) {
            self.entries.remove(position);
            return true;
        }
        false
    }

    /// Moves every observer of `other` to the end of this list.
    pub(super) fn append(&mut self, other: &mut ObserverList) {
        self.entries.append(&mut other.entries);
    }

    pub(super) fn notify(&mut self, event: &StoreEvent, state: &StoreState) {
        for (_, observer) in &mut self.entries {
            observer.on_change(event, state);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
