//! Turns a [`LoaderBarsConfig`] into the concrete styles the component draws.

use crate::config::{Gradient, LoaderBarsConfig};
use crate::random::RandomSource;
use crate::resolve::{resolve_gradient, resolve_width};
use crate::style::StyleMap;
use crate::theme::{resolve_is_dark, ColorSchemeQuery};

pub const PULSE_ANIMATION: &str = "loaderbars-pulse";
pub const SHIMMER_ANIMATION: &str = "loaderbars-shimmer";

/// Keyframes shared by every loader instance.
pub const KEYFRAMES_CSS: &str = "
@keyframes loaderbars-pulse {
  0% { opacity: 0.85; }
  50% { opacity: 0.55; }
  100% { opacity: 0.85; }
}
@keyframes loaderbars-shimmer {
  0% { background-position: 200% 0; }
  100% { background-position: -200% 0; }
}
";

/// Vertical gap and outer margin of the bar stack, in px.
const STACK_SPACING_PX: u32 = 8;

/// Accessibility role carried by the container.
pub const CONTAINER_ROLE: &str = "status";

/// Pulse runs slightly faster than the shimmer sweep.
pub fn pulse_duration_ms(speed_ms: u32) -> u64 {
    (f64::from(speed_ms) * 0.9).round() as u64
}

/// The CSS `animation` value for the given flags, if any.
pub fn animation_directive(shimmer: bool, pulse: bool, speed_ms: u32) -> Option<String> {
    let shimmer_anim = format!("{SHIMMER_ANIMATION} {speed_ms}ms linear infinite");
    let pulse_anim = format!(
        "{PULSE_ANIMATION} {}ms ease-in-out infinite",
        pulse_duration_ms(speed_ms)
    );
    match (shimmer, pulse) {
        (true, true) => Some(format!("{shimmer_anim}, {pulse_anim}")),
        (true, false) => Some(shimmer_anim),
        (false, true) => Some(pulse_anim),
        (false, false) => None,
    }
}

/// Container style with caller overrides applied on top.
pub fn container_style(overrides: &StyleMap) -> StyleMap {
    let spacing = format!("{STACK_SPACING_PX}px");
    StyleMap::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("gap", spacing.clone())
        .with("margin-top", spacing.clone())
        .with("margin-bottom", spacing)
        .merged(overrides)
}

/// Style shared by every bar before width and gradient are added.
pub fn base_bar_style(config: &LoaderBarsConfig) -> StyleMap {
    let mut style = StyleMap::new()
        .with("height", format!("{}px", config.height))
        .with("border-radius", format!("{}px", config.radius));
    if config.shimmer {
        style.set("background-size", "200% 100%");
    }
    if let Some(animation) = animation_directive(config.shimmer, config.pulse, config.speed_ms) {
        style.set("animation", animation);
    }
    style
}

/// One placeholder bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPlan {
    pub index: usize,
    pub width: String,
    pub gradient: Gradient,
    pub style: StyleMap,
}

/// Everything needed to draw one loader.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderPlan {
    pub is_dark: bool,
    pub class_name: String,
    pub aria_label: String,
    pub role: &'static str,
    pub container_style: StyleMap,
    pub bars: Vec<BarPlan>,
    pub keyframes: &'static str,
}

/// Build the plan for one render.
///
/// The color scheme is queried at most once regardless of bar count.
pub fn render_plan<Q, R>(config: &LoaderBarsConfig, color_scheme: &Q, random: &mut R) -> LoaderPlan
where
    Q: ColorSchemeQuery + ?Sized,
    R: RandomSource + ?Sized,
{
    let is_dark = resolve_is_dark(config.theme, color_scheme);
    let count = config.bar_count();
    tracing::debug!(
        bars = count,
        is_dark,
        theme = config.theme.as_str(),
        "building loader plan"
    );

    let base = base_bar_style(config);
    let bars = (0..count)
        .map(|index| {
            let width = resolve_width(index, config.widths.as_ref(), random);
            let gradient = resolve_gradient(
                index,
                config.gradients.as_ref(),
                config.dark_gradients.as_ref(),
                is_dark,
            );
            tracing::trace!(index, %width, from = %gradient.from, to = %gradient.to, "bar");
            let style = base
                .clone()
                .with("width", width.clone())
                .with("background-image", gradient.linear_css());
            BarPlan {
                index,
                width,
                gradient,
                style,
            }
        })
        .collect();

    LoaderPlan {
        is_dark,
        class_name: config.class_name.clone(),
        aria_label: config.aria_label.clone(),
        role: CONTAINER_ROLE,
        container_style: container_style(&config.style),
        bars,
        keyframes: KEYFRAMES_CSS,
    }
}
