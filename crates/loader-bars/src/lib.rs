//! Animated skeleton placeholder bars for Dioxus front-ends.
//!
//! Mount [`LoaderBars`] wherever content is still loading. Wrap the app in
//! [`ColorSchemeSeed`] to let `Theme::Auto` loaders follow the system
//! color scheme.

pub mod components;
pub mod config;
pub mod error;
pub mod plan;
pub mod random;
pub mod resolve;
pub mod style;
pub mod theme;

pub use components::*;
pub use config::*;
pub use error::*;
pub use plan::{render_plan, BarPlan, LoaderPlan, KEYFRAMES_CSS, PULSE_ANIMATION, SHIMMER_ANIMATION};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use resolve::{resolve_gradient, resolve_width};
pub use style::StyleMap;
pub use theme::{
    resolve_is_dark, ColorSchemeQuery, ColorSchemeSeed, FixedColorScheme, NoColorScheme,
    SystemColorScheme,
};
