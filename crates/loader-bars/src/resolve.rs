//! Per-bar width and gradient selection.

use crate::config::{Gradient, GradientSpec, RandomRange, WidthsSpec};
use crate::random::RandomSource;

/// Widths cycled through when the caller gives none.
pub const DEFAULT_WIDTHS: [&str; 3] = ["60%", "80%", "45%"];

/// Built-in light palette as `(from, to)` stops.
pub const LIGHT_PALETTE: [(&str, &str); 3] = [
    ("#D0E4FD", "#F3F8FF"),
    ("#FDE3F0", "#DCEEFF"),
    ("#FFEAF4", "#D9EAFE"),
];

/// Built-in dark palette as `(from, to)` stops.
pub const DARK_PALETTE: [(&str, &str); 3] = [
    ("#4B5563", "#1f2937"),
    ("#374151", "#111827"),
    ("#6B7280", "#374151"),
];

fn default_width(index: usize) -> String {
    DEFAULT_WIDTHS[index % DEFAULT_WIDTHS.len()].to_string()
}

/// The built-in gradient for `index` in the given mode.
pub fn default_gradient(index: usize, is_dark: bool) -> Gradient {
    let palette = if is_dark { &DARK_PALETTE } else { &LIGHT_PALETTE };
    let (from, to) = palette[index % palette.len()];
    Gradient::new(from, to)
}

/// Width for bar `index`.
///
/// An empty cycle behaves as if no widths were given. A random range draws
/// once per call, so each bar gets its own width.
pub fn resolve_width<R: RandomSource + ?Sized>(
    index: usize,
    spec: Option<&WidthsSpec>,
    random: &mut R,
) -> String {
    match spec {
        None => default_width(index),
        Some(WidthsSpec::Cycle(values)) if values.is_empty() => {
            tracing::warn!("empty width cycle, using default widths");
            default_width(index)
        }
        Some(WidthsSpec::Cycle(values)) => values[index % values.len()].to_css(),
        Some(WidthsSpec::Random(range)) => random_width(range, random),
    }
}

fn random_width<R: RandomSource + ?Sized>(range: &RandomRange, random: &mut R) -> String {
    let min = range.min.max(0.0);
    let max = range.max.max(min);
    let width = random.next_unit() * (max - min) + min;
    format!("{}{}", width.round() as i64, range.unit.as_str())
}

/// Gradient for bar `index`.
///
/// In dark mode `dark_gradients` wins when supplied; otherwise `gradients`
/// is used in both modes. With no source at all (or an empty list) the
/// built-in palette for the current mode applies.
pub fn resolve_gradient(
    index: usize,
    gradients: Option<&GradientSpec>,
    dark_gradients: Option<&GradientSpec>,
    is_dark: bool,
) -> Gradient {
    let source = match dark_gradients {
        Some(dark) if is_dark => Some(dark),
        _ => gradients,
    };

    match source {
        None => default_gradient(index, is_dark),
        Some(GradientSpec::PerBar(list)) if list.is_empty() => {
            tracing::warn!("empty gradient list, using built-in palette");
            default_gradient(index, is_dark)
        }
        Some(GradientSpec::PerBar(list)) => list[index % list.len()].clone(),
        Some(GradientSpec::Single(gradient)) => gradient.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{WidthUnit, WidthValue};
    use crate::random::SeededRandom;
    use pretty_assertions::assert_eq;

    /// Always returns the same draw.
    struct ConstRandom(f64);

    impl RandomSource for ConstRandom {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    fn light() -> GradientSpec {
        GradientSpec::PerBar(vec![
            Gradient::new("#a00", "#a11"),
            Gradient::new("#b00", "#b11"),
        ])
    }

    fn dark() -> GradientSpec {
        GradientSpec::Single(Gradient::new("#000", "#111"))
    }

    #[test]
    fn default_widths_cycle_by_three() {
        let mut random = ConstRandom(0.0);
        for i in 0..9 {
            assert_eq!(resolve_width(i, None, &mut random), DEFAULT_WIDTHS[i % 3]);
        }
    }

    #[test]
    fn numeric_cycle_formats_px_and_wraps() {
        let spec = WidthsSpec::cycle([10u32, 20u32]);
        let mut random = ConstRandom(0.0);
        assert_eq!(resolve_width(0, Some(&spec), &mut random), "10px");
        assert_eq!(resolve_width(1, Some(&spec), &mut random), "20px");
        assert_eq!(resolve_width(2, Some(&spec), &mut random), "10px");
    }

    #[test]
    fn string_cycle_passes_through() {
        let spec = WidthsSpec::Cycle(vec![
            WidthValue::from("30%"),
            WidthValue::from("12rem"),
        ]);
        let mut random = ConstRandom(0.0);
        assert_eq!(resolve_width(0, Some(&spec), &mut random), "30%");
        assert_eq!(resolve_width(3, Some(&spec), &mut random), "12rem");
    }

    #[test]
    fn empty_cycle_falls_back_to_defaults() {
        let spec = WidthsSpec::Cycle(Vec::new());
        let mut random = ConstRandom(0.0);
        assert_eq!(resolve_width(1, Some(&spec), &mut random), "80%");
    }

    #[test]
    fn degenerate_range_is_constant() {
        let spec = WidthsSpec::Random(RandomRange::new(10.0, 10.0));
        let mut random = SeededRandom::new(3);
        for i in 0..20 {
            assert_eq!(resolve_width(i, Some(&spec), &mut random), "10%");
        }
    }

    #[test]
    fn range_rounds_to_nearest() {
        let spec = WidthsSpec::Random(RandomRange::new(40.0, 60.0));
        assert_eq!(resolve_width(0, Some(&spec), &mut ConstRandom(0.0)), "40%");
        assert_eq!(resolve_width(0, Some(&spec), &mut ConstRandom(0.5)), "50%");
        assert_eq!(resolve_width(0, Some(&spec), &mut ConstRandom(0.99)), "60%");
        assert_eq!(resolve_width(0, Some(&spec), &mut ConstRandom(0.12)), "42%");
    }

    #[test]
    fn range_clamps_min_and_max() {
        let spec = WidthsSpec::Random(RandomRange::new(-20.0, -50.0).with_unit(WidthUnit::Px));
        assert_eq!(resolve_width(0, Some(&spec), &mut ConstRandom(0.7)), "0px");

        let spec = WidthsSpec::Random(RandomRange::new(30.0, 5.0));
        assert_eq!(resolve_width(0, Some(&spec), &mut ConstRandom(0.7)), "30%");
    }

    #[test]
    fn range_unitless_has_no_suffix() {
        let spec = WidthsSpec::Random(RandomRange::new(7.0, 7.0).with_unit(WidthUnit::Unitless));
        assert_eq!(resolve_width(0, Some(&spec), &mut ConstRandom(0.3)), "7");
    }

    #[test]
    fn seeded_range_stays_in_bounds() {
        let spec = WidthsSpec::Random(RandomRange::new(25.0, 75.0));
        let mut random = SeededRandom::new(99);
        for i in 0..100 {
            let width = resolve_width(i, Some(&spec), &mut random);
            let value: i64 = width.trim_end_matches('%').parse().unwrap();
            assert!((25..=75).contains(&value), "{width} out of range");
        }
    }

    #[test]
    fn no_source_uses_palette_for_mode() {
        assert_eq!(resolve_gradient(0, None, None, false), Gradient::new("#D0E4FD", "#F3F8FF"));
        assert_eq!(resolve_gradient(4, None, None, true), Gradient::new("#374151", "#111827"));
    }

    #[test]
    fn dark_prefers_dark_source() {
        let (light, dark) = (light(), dark());
        assert_eq!(
            resolve_gradient(1, Some(&light), Some(&dark), true),
            Gradient::new("#000", "#111")
        );
        assert_eq!(
            resolve_gradient(1, Some(&light), Some(&dark), false),
            Gradient::new("#b00", "#b11")
        );
    }

    #[test]
    fn dark_without_dark_source_never_uses_light_palette() {
        let light = light();
        assert_eq!(
            resolve_gradient(2, Some(&light), None, true),
            Gradient::new("#a00", "#a11")
        );
        for i in 0..6 {
            let g = resolve_gradient(i, None, None, true);
            assert_eq!(g, default_gradient(i, true));
            assert!(!LIGHT_PALETTE.iter().any(|(f, t)| g.from == *f && g.to == *t));
        }
    }

    #[test]
    fn light_mode_ignores_dark_source() {
        let dark = dark();
        assert_eq!(
            resolve_gradient(0, None, Some(&dark), false),
            default_gradient(0, false)
        );
    }

    #[test]
    fn single_gradient_ignores_index() {
        let single = dark();
        for i in 0..5 {
            assert_eq!(
                resolve_gradient(i, Some(&single), None, false),
                Gradient::new("#000", "#111")
            );
        }
    }

    #[test]
    fn empty_gradient_list_falls_back_to_palette() {
        let empty = GradientSpec::PerBar(Vec::new());
        assert_eq!(
            resolve_gradient(2, None, Some(&empty), true),
            default_gradient(2, true)
        );
    }
}
