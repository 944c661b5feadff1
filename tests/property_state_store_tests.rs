use plot_graph::api::StateStore;
use plot_graph::core::{ViewMode, Viewport};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add,
    Update(usize, f64),
    Remove(usize),
    Create(u8),
    Select(u8),
    Mode(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..12, -50.0f64..50.0).prop_map(|(index, value)| Op::Update(index, value)),
        (0usize..12).prop_map(Op::Remove),
        (0u8..4).prop_map(Op::Create),
        (0u8..5).prop_map(Op::Select),
        (0usize..ViewMode::ALL.len()).prop_map(Op::Mode),
    ]
}

proptest! {
    #[test]
    fn datasets_never_become_empty(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let mut store = StateStore::new(Viewport::new(360, 550)).expect("store init");
        store.add_dataset("seed").expect("seed dataset");

        for op in ops {
            let before = store.state().current_values().to_vec();
            match op {
                Op::Add => store.add_entry(),
                Op::Update(index, value) => {
                    let result = store.update_entry(index, value);
                    prop_assert_eq!(result.is_ok(), index < before.len());
                }
                Op::Remove(index) => {
                    let result = store.remove_entry(index);
                    prop_assert_eq!(result.is_ok(), index < before.len());
                    if before.len() == 1 {
                        prop_assert_eq!(store.state().current_values(), &before[..]);
                    }
                }
                Op::Create(id) => {
                    store.add_dataset(format!("set-{id}")).expect("valid name");
                }
                Op::Select(id) => {
                    store.select_dataset(&format!("set-{id}"));
                }
                Op::Mode(index) => store.set_view_mode(ViewMode::ALL[index]),
            }

            for name in store.state().dataset_names() {
                let dataset = store.state().registry().get(name).expect("listed dataset");
                prop_assert!(!dataset.is_empty());
            }
        }
    }

    #[test]
    fn first_negative_write_always_lands_in_line_mode(
        mode_index in 0usize..ViewMode::ALL.len(),
        value in -1_000.0f64..-0.001
    ) {
        let mut store = StateStore::new(Viewport::new(360, 550)).expect("store init");
        store.add_dataset("a").expect("dataset");
        store.set_view_mode(ViewMode::ALL[mode_index]);

        store.update_entry(0, value).expect("update");
        prop_assert_eq!(store.state().view_mode(), ViewMode::Line);
    }
}
