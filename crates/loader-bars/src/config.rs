use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::style::StyleMap;

pub const DEFAULT_BARS: i64 = 3;
pub const DEFAULT_HEIGHT: f64 = 12.0;
pub const DEFAULT_RADIUS: f64 = 9999.0;
pub const DEFAULT_SPEED_MS: u32 = 1400;
pub const DEFAULT_ARIA_LABEL: &str = "Loading…";

// ---------------------------------------------------------------------------
// Gradients
// ---------------------------------------------------------------------------

/// A two-stop color gradient. Colors are passed through to CSS untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

impl Gradient {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The left-to-right CSS background for this gradient.
    pub fn linear_css(&self) -> String {
        format!("linear-gradient(90deg, {}, {})", self.from, self.to)
    }
}

/// Either one gradient shared by every bar, or one per bar cycled by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradientSpec {
    Single(Gradient),
    PerBar(Vec<Gradient>),
}

impl From<Gradient> for GradientSpec {
    fn from(gradient: Gradient) -> Self {
        GradientSpec::Single(gradient)
    }
}

impl From<Vec<Gradient>> for GradientSpec {
    fn from(gradients: Vec<Gradient>) -> Self {
        GradientSpec::PerBar(gradients)
    }
}

// ---------------------------------------------------------------------------
// Widths
// ---------------------------------------------------------------------------

/// One entry of a width cycle: a pixel count or a literal CSS length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthValue {
    Px(f64),
    Literal(String),
}

impl WidthValue {
    pub fn to_css(&self) -> String {
        match self {
            WidthValue::Px(px) => format!("{px}px"),
            WidthValue::Literal(s) => s.clone(),
        }
    }
}

impl From<f64> for WidthValue {
    fn from(px: f64) -> Self {
        WidthValue::Px(px)
    }
}

impl From<u32> for WidthValue {
    fn from(px: u32) -> Self {
        WidthValue::Px(f64::from(px))
    }
}

impl From<&str> for WidthValue {
    fn from(s: &str) -> Self {
        WidthValue::Literal(s.to_string())
    }
}

impl From<String> for WidthValue {
    fn from(s: String) -> Self {
        WidthValue::Literal(s)
    }
}

/// Unit suffix appended to randomly drawn widths.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum WidthUnit {
    #[default]
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "")]
    Unitless,
}

impl WidthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidthUnit::Percent => "%",
            WidthUnit::Px => "px",
            WidthUnit::Unitless => "",
        }
    }
}

/// Draw each bar's width uniformly from `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub unit: WidthUnit,
}

impl RandomRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            unit: WidthUnit::default(),
        }
    }

    pub fn with_unit(mut self, unit: WidthUnit) -> Self {
        self.unit = unit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthsSpec {
    Cycle(Vec<WidthValue>),
    Random(RandomRange),
}

impl WidthsSpec {
    pub fn cycle<I, W>(values: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WidthValue>,
    {
        WidthsSpec::Cycle(values.into_iter().map(Into::into).collect())
    }
}

impl From<RandomRange> for WidthsSpec {
    fn from(range: RandomRange) -> Self {
        WidthsSpec::Random(range)
    }
}

impl From<Vec<WidthValue>> for WidthsSpec {
    fn from(values: Vec<WidthValue>) -> Self {
        WidthsSpec::Cycle(values)
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Requested color mode. `Auto` defers to the host's color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// Parse a theme key, falling back to `Auto`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::Auto,
        }
    }
}

// ---------------------------------------------------------------------------
// Full configuration
// ---------------------------------------------------------------------------

/// Every option the loader understands.
///
/// Each field is defaulted so partial TOML/JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderBarsConfig {
    /// Number of bars. Negative values render nothing.
    pub bars: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widths: Option<WidthsSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradients: Option<GradientSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_gradients: Option<GradientSpec>,
    /// Bar height in px.
    pub height: f64,
    /// Bar corner radius in px.
    pub radius: f64,
    pub pulse: bool,
    pub shimmer: bool,
    pub speed_ms: u32,
    /// Accepted for compatibility. `Auto` always follows the host preference.
    pub respect_system_dark: bool,
    pub aria_label: String,
    pub class_name: String,
    /// Declarations merged over the container's computed style.
    pub style: StyleMap,
    pub theme: Theme,
}

impl Default for LoaderBarsConfig {
    fn default() -> Self {
        Self {
            bars: DEFAULT_BARS,
            widths: None,
            gradients: None,
            dark_gradients: None,
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
            pulse: true,
            shimmer: false,
            speed_ms: DEFAULT_SPEED_MS,
            respect_system_dark: true,
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
            class_name: String::new(),
            style: StyleMap::default(),
            theme: Theme::default(),
        }
    }
}

impl LoaderBarsConfig {
    /// Bar count with negatives clamped to zero.
    pub fn bar_count(&self) -> usize {
        usize::try_from(self.bars.max(0)).unwrap_or(usize::MAX)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}
