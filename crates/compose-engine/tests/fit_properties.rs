use image::{Rgb, RgbImage};
use multiwall_compose_engine::fit::{center_offset, fit_within_size};
use multiwall_compose_engine::{FitStrategyKind, Size};
use proptest::prelude::*;

fn strategy() -> impl Strategy<Value = FitStrategyKind> {
    prop::sample::select(FitStrategyKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn fit_output_matches_target(
        kind in strategy(),
        src_w in 1u32..96,
        src_h in 1u32..96,
        tw in 1u32..96,
        th in 1u32..96,
    ) {
        let src = RgbImage::from_pixel(src_w, src_h, Rgb([90, 160, 30]));
        let out = kind.fit(&src, Size::new(tw, th).unwrap());
        prop_assert_eq!(out.dimensions(), (tw, th));
    }

    #[test]
    fn fit_within_never_exceeds_target(
        src_w in 1u32..10_000,
        src_h in 1u32..10_000,
        tw in 1u32..4_000,
        th in 1u32..4_000,
    ) {
        let (w, h) = fit_within_size(src_w, src_h, Size::new(tw, th).unwrap());
        prop_assert!(w >= 1 && h >= 1);
        prop_assert!(w <= tw);
        prop_assert!(h <= th);
        // Never enlarges.
        prop_assert!(w <= src_w && h <= src_h);
    }

    #[test]
    fn center_offset_is_symmetric_for_smaller_sources(
        src_w in 1u32..500,
        src_h in 1u32..500,
        extra_w in 0u32..500,
        extra_h in 0u32..500,
    ) {
        let target = Size::new(src_w + extra_w, src_h + extra_h).unwrap();
        let (x, y) = center_offset(src_w, src_h, target);
        prop_assert_eq!(x, (extra_w / 2) as i64);
        prop_assert_eq!(y, (extra_h / 2) as i64);
    }
}
