use dioxus::prelude::*;

use crate::config::{
    GradientSpec, LoaderBarsConfig, Theme, WidthsSpec, DEFAULT_ARIA_LABEL, DEFAULT_BARS,
    DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SPEED_MS,
};
use crate::plan::{render_plan, BarPlan, LoaderPlan};
use crate::random::ThreadRandom;
use crate::style::StyleMap;
use crate::theme::SystemColorScheme;

/// Animated skeleton placeholder bars.
///
/// With `theme: Theme::Auto` the loader follows the [`SystemColorScheme`]
/// context when a `ColorSchemeSeed` is mounted above it, and renders light
/// otherwise.
#[component]
pub fn LoaderBars(
    #[props(default = DEFAULT_BARS)] bars: i64,
    widths: Option<WidthsSpec>,
    gradients: Option<GradientSpec>,
    dark_gradients: Option<GradientSpec>,
    #[props(default = DEFAULT_HEIGHT)] height: f64,
    #[props(default = DEFAULT_RADIUS)] radius: f64,
    #[props(default = true)] pulse: bool,
    #[props(default)] shimmer: bool,
    #[props(default = DEFAULT_SPEED_MS)] speed_ms: u32,
    #[props(default = true)] respect_system_dark: bool,
    #[props(default = DEFAULT_ARIA_LABEL.to_string(), into)] aria_label: String,
    #[props(default, into)] class: String,
    #[props(default, into)] style: String,
    #[props(default)] theme: Theme,
) -> Element {
    let config = LoaderBarsConfig {
        bars,
        widths,
        gradients,
        dark_gradients,
        height,
        radius,
        pulse,
        shimmer,
        speed_ms,
        respect_system_dark,
        aria_label,
        class_name: class,
        style: StyleMap::parse_inline(&style),
        theme,
    };

    rsx! {
        ConfiguredLoaderBars { config }
    }
}

/// Render a whole [`LoaderBarsConfig`], e.g. one loaded from a file.
#[component]
pub fn ConfiguredLoaderBars(config: LoaderBarsConfig) -> Element {
    let color_scheme = try_use_context::<SystemColorScheme>();
    let plan = render_plan(&config, &color_scheme, &mut ThreadRandom);
    draw(plan)
}

fn draw(plan: LoaderPlan) -> Element {
    let LoaderPlan {
        class_name,
        aria_label,
        role,
        container_style,
        bars,
        keyframes,
        ..
    } = plan;

    rsx! {
        style { "{keyframes}" }
        div {
            class: class_name,
            style: container_style.to_string(),
            role,
            aria_label,
            for BarPlan { index, style, .. } in bars {
                div { key: "{index}", style: style.to_string() }
            }
        }
    }
}
