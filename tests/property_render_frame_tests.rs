use plot_graph::api::{ChartFrameInput, RenderStyle, build_chart_frame};
use plot_graph::core::{ColorScheme, ViewMode, Viewport};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn frames_are_finite_for_any_values_and_surface(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..40),
        width in 1u32..2_000,
        height in 1u32..2_000,
        mode_index in 0usize..ViewMode::ALL.len(),
        scheme_index in 0usize..ColorScheme::ALL.len(),
        seed in any::<u64>()
    ) {
        let style = RenderStyle::default();
        let input = ChartFrameInput {
            viewport: Viewport::new(width, height),
            values: &values,
            style: &style,
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let frame = build_chart_frame(
            input,
            ViewMode::ALL[mode_index],
            ColorScheme::ALL[scheme_index],
            &mut rng,
        )
        .expect("frame");

        prop_assert!(frame.validate().is_ok());
        prop_assert!(!frame.is_empty());
    }

    #[test]
    fn extreme_magnitudes_still_produce_finite_frames(
        values in prop::collection::vec(prop::num::f64::NORMAL, 1..20),
        mode_index in 0usize..ViewMode::ALL.len()
    ) {
        let style = RenderStyle::default();
        let input = ChartFrameInput {
            viewport: Viewport::new(360, 550),
            values: &values,
            style: &style,
        };
        let mut rng = StdRng::seed_from_u64(5);
        let frame = build_chart_frame(input, ViewMode::ALL[mode_index], ColorScheme::Red, &mut rng)
            .expect("frame");

        prop_assert!(frame.validate().is_ok());
    }

    #[test]
    fn channel_schemes_draw_identical_frames_for_identical_input(
        values in prop::collection::vec(0.0f64..500.0, 1..30),
        mode_index in 0usize..ViewMode::ALL.len(),
        scheme_index in 1usize..ColorScheme::ALL.len(),
        seed_a in any::<u64>(),
        seed_b in any::<u64>()
    ) {
        let style = RenderStyle::default();
        let build = |seed: u64| {
            let input = ChartFrameInput {
                viewport: Viewport::new(360, 550),
                values: &values,
                style: &style,
            };
            let mut rng = StdRng::seed_from_u64(seed);
            build_chart_frame(
                input,
                ViewMode::ALL[mode_index],
                ColorScheme::ALL[scheme_index],
                &mut rng,
            )
            .expect("frame")
        };

        prop_assert_eq!(build(seed_a), build(seed_b));
    }

    #[test]
    fn pie_sectors_sum_to_full_circle(values in prop::collection::vec(0.01f64..100.0, 1..25)) {
        let style = RenderStyle::default();
        let input = ChartFrameInput {
            viewport: Viewport::new(360, 550),
            values: &values,
            style: &style,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let frame = build_chart_frame(input, ViewMode::Pie, ColorScheme::Blue, &mut rng)
            .expect("frame");

        let total: f64 = frame.arcs().map(|arc| arc.extent_deg).sum();
        prop_assert_eq!(frame.arcs().count(), values.len());
        prop_assert!((total - 360.0).abs() <= 1e-6);
    }
}
