use std::cell::RefCell;
use std::rc::Rc;

use plot_graph::ChartError;
use plot_graph::api::{ChangeClass, StateStore, StoreEvent, StoreState};
use plot_graph::core::{ColorScheme, ViewMode, Viewport};

fn store() -> StateStore {
    StateStore::new(Viewport::new(360, 550)).expect("store init")
}

fn recorder() -> (
    Rc<RefCell<Vec<StoreEvent>>>,
    impl FnMut(&StoreEvent, &StoreState) + 'static,
) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    (events, move |event: &StoreEvent, _state: &StoreState| {
        sink.borrow_mut().push(event.clone());
    })
}

#[test]
fn add_dataset_seeds_zero_and_selects_it() {
    let mut store = store();
    assert!(store.state().current_dataset_name().is_none());
    assert!(store.state().current_values().is_empty());

    assert_eq!(store.add_dataset("first"), Ok(true));
    assert_eq!(store.state().current_dataset_name(), Some("first"));
    assert_eq!(store.state().current_values(), &[0.0]);

    assert_eq!(store.add_dataset("second"), Ok(true));
    assert_eq!(store.add_dataset("first"), Ok(false));
    assert_eq!(store.state().current_dataset_name(), Some("second"));
    assert_eq!(
        store.state().dataset_names().collect::<Vec<_>>(),
        vec!["first", "second"]
    );
}

#[test]
fn empty_dataset_name_is_rejected() {
    let mut store = store();
    assert!(matches!(
        store.add_dataset(""),
        Err(ChartError::InvalidData(_))
    ));
    assert_eq!(store.state().registry().len(), 0);
}

#[test]
fn selecting_unknown_dataset_is_silent_noop() {
    let mut store = store();
    store.add_dataset("a").expect("add");
    let (events, observer) = recorder();
    store.subscribe_selection(observer);

    assert!(!store.select_dataset("missing"));
    assert_eq!(store.state().current_dataset_name(), Some("a"));
    assert!(events.borrow().is_empty());
}

#[test]
fn add_dataset_announces_creation_then_selection() {
    let mut store = store();
    let (events, observer) = recorder();
    store.subscribe_selection(observer);

    store.add_dataset("a").expect("add");
    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::DatasetAdded {
                name: "a".to_owned()
            },
            StoreEvent::DatasetSelected {
                name: "a".to_owned()
            },
        ]
    );
}

#[test]
fn removing_last_entry_leaves_dataset_unchanged() {
    let mut store = store();
    store.add_dataset("a").expect("add");
    let (events, observer) = recorder();
    store.subscribe_data(observer);

    store.remove_entry(0).expect("remove");
    assert_eq!(store.state().current_values(), &[0.0]);
    assert!(events.borrow().is_empty());
}

#[test]
fn out_of_range_index_is_reported_and_state_kept() {
    let mut store = store();
    store.add_dataset("a").expect("add");
    store.add_entry();

    assert_eq!(
        store.update_entry(2, 1.0),
        Err(ChartError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        store.remove_entry(5),
        Err(ChartError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert_eq!(store.state().current_values(), &[0.0, 0.0]);
}

#[test]
fn entry_mutations_notify_data_observers() {
    let mut store = store();
    store.add_dataset("a").expect("add");
    let (events, observer) = recorder();
    store.subscribe_data(observer);

    store.add_entry();
    store.update_entry(1, 2.5).expect("update");
    store.remove_entry(0).expect("remove");

    assert_eq!(store.state().current_values(), &[2.5]);
    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::EntryAdded { index: 1 },
            StoreEvent::EntryUpdated {
                index: 1,
                value: 2.5
            },
            StoreEvent::EntryRemoved { index: 0 },
        ]
    );
}

#[test]
fn data_observers_follow_selection_without_accumulating() {
    let mut store = store();
    store.add_dataset("a").expect("add");
    store.add_dataset("b").expect("add");
    store.select_dataset("a");

    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);
    store.subscribe_data(move |_event: &StoreEvent, _state: &StoreState| {
        *counter.borrow_mut() += 1;
    });

    for name in ["b", "a", "b", "a"] {
        assert!(store.select_dataset(name));
    }
    assert_eq!(store.data_observer_count("a"), 1);
    assert_eq!(store.data_observer_count("b"), 0);

    store.add_entry();
    store.update_entry(0, 3.0).expect("update");
    assert_eq!(*calls.borrow(), 2);

    store.select_dataset("b");
    store.add_entry();
    assert_eq!(*calls.borrow(), 3);
    assert_eq!(store.data_observer_count("a"), 0);
    assert_eq!(store.data_observer_count("b"), 1);
}

#[test]
fn data_observer_registered_before_first_dataset_binds_on_creation() {
    let mut store = store();
    let (events, observer) = recorder();
    store.subscribe_data(observer);

    store.add_entry();
    assert!(events.borrow().is_empty());

    store.add_dataset("a").expect("add");
    assert_eq!(store.data_observer_count("a"), 1);
    store.add_entry();
    assert_eq!(*events.borrow(), vec![StoreEvent::EntryAdded { index: 1 }]);
}

#[test]
fn first_negative_value_forces_line_view_before_data_notification() {
    for mode in [ViewMode::Sem, ViewMode::Pie] {
        let mut store = store();
        store.add_dataset("a").expect("add");
        store.add_entry();
        store.set_view_mode(mode);

        let log = Rc::new(RefCell::new(Vec::<(ChangeClass, ViewMode)>::new()));
        let data_log = Rc::clone(&log);
        let view_log = Rc::clone(&log);
        store.subscribe_data(move |event: &StoreEvent, state: &StoreState| {
            data_log.borrow_mut().push((event.class(), state.view_mode()));
        });
        store.subscribe_view(move |event: &StoreEvent, state: &StoreState| {
            view_log.borrow_mut().push((event.class(), state.view_mode()));
        });

        store.update_entry(1, -4.0).expect("update");

        assert_eq!(store.state().view_mode(), ViewMode::Line);
        assert_eq!(
            *log.borrow(),
            vec![
                (ChangeClass::View, ViewMode::Line),
                (ChangeClass::Data, ViewMode::Line)
            ]
        );
    }
}

#[test]
fn further_negative_values_do_not_touch_view_mode() {
    let mut store = store();
    store.add_dataset("a").expect("add");
    store.add_entry();
    store.update_entry(0, -1.0).expect("update");

    store.set_view_mode(ViewMode::Bar);
    store.update_entry(1, -2.0).expect("update");
    assert_eq!(store.state().view_mode(), ViewMode::Bar);

    store.set_view_mode(ViewMode::Sem);
    store.update_entry(1, -3.0).expect("update");
    assert_eq!(store.state().view_mode(), ViewMode::Sem);
}

#[test]
fn first_negative_value_forces_line_even_from_bar_mode() {
    let mut store = store();
    store.add_dataset("a").expect("add");
    store.set_view_mode(ViewMode::Bar);
    let (events, observer) = recorder();
    store.subscribe_view(observer);

    store.update_entry(0, -1.0).expect("update");
    assert_eq!(store.state().view_mode(), ViewMode::Line);
    assert_eq!(*events.borrow(), vec![StoreEvent::ViewModeForced(ViewMode::Line)]);
}

#[test]
fn view_class_covers_mode_scheme_and_resize() {
    let mut store = store();
    let (events, observer) = recorder();
    store.subscribe_view(observer);

    store.set_view_mode(ViewMode::HBar);
    store.set_color_scheme(ColorScheme::Blue);
    store
        .resize_surface(Viewport::new(360, 550))
        .expect("same size");
    store
        .resize_surface(Viewport::new(800, 600))
        .expect("resize");

    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::ViewModeChanged(ViewMode::HBar),
            StoreEvent::ColorSchemeChanged(ColorScheme::Blue),
            StoreEvent::SurfaceResized(Viewport::new(800, 600)),
        ]
    );
    assert_eq!(
        store.resize_surface(Viewport::new(0, 10)),
        Err(ChartError::InvalidViewport {
            width: 0,
            height: 10
        })
    );
    assert_eq!(store.state().viewport(), Viewport::new(800, 600));
}

#[test]
fn observers_fire_in_registration_order_and_stop_after_unsubscribe() {
    let mut store = store();
    let order = Rc::new(RefCell::new(Vec::new()));

    let first_log = Rc::clone(&order);
    let first = store.subscribe_view(move |_event: &StoreEvent, _state: &StoreState| {
        first_log.borrow_mut().push("first");
    });
    let second_log = Rc::clone(&order);
    store.subscribe_view(move |_event: &StoreEvent, _state: &StoreState| {
        second_log.borrow_mut().push("second");
    });

    store.set_color_scheme(ColorScheme::Red);
    assert!(store.unsubscribe(first));
    assert!(!store.unsubscribe(first));
    store.set_color_scheme(ColorScheme::Green);

    assert_eq!(*order.borrow(), vec!["first", "second", "second"]);
    assert_eq!(first.class(), ChangeClass::View);
}

#[test]
fn data_subscription_can_be_removed_after_selection_moves() {
    let mut store = store();
    store.add_dataset("a").expect("add");
    let (events, observer) = recorder();
    let id = store.subscribe_data(observer);
    store.add_dataset("b").expect("add");

    assert!(store.unsubscribe(id));
    assert_eq!(store.data_observer_count("b"), 0);
    store.add_entry();
    assert!(events.borrow().is_empty());
}
