use dioxus::prelude::*;
use loader_bars::{
    ColorSchemeSeed, ConfiguredLoaderBars, Gradient, GradientSpec, LoaderBars, LoaderBarsConfig,
    RandomRange, Theme, WidthUnit, WidthsSpec,
};

/// Loader configuration rendered in the "From config" section.
const LOADER_TOML: &str = include_str!("../loader.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded loader config, falling back to defaults on error.
fn load_config(source: &str) -> LoaderBarsConfig {
    match LoaderBarsConfig::from_toml_str(source) {
        Ok(config) => {
            tracing::info!(bars = config.bars, "loaded demo loader config");
            config
        }
        Err(e) => {
            tracing::warn!("{e}; using default loader config");
            LoaderBarsConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(LOADER_TOML));

    rsx! {
        ColorSchemeSeed {
            main {
                style: "max-width: 640px; margin: 2rem auto; font-family: sans-serif;",
                h1 { "Loader bars" }

                Section { title: "Default",
                    LoaderBars {}
                }
                Section { title: "Shimmer and pulse",
                    LoaderBars { bars: 5, shimmer: true, speed_ms: 1200 }
                }
                Section { title: "Random widths",
                    LoaderBars {
                        bars: 6,
                        widths: WidthsSpec::from(RandomRange::new(120.0, 360.0).with_unit(WidthUnit::Px)),
                        pulse: false,
                        shimmer: true,
                    }
                }
                Section { title: "Fixed widths, single gradient",
                    LoaderBars {
                        bars: 2,
                        widths: WidthsSpec::cycle(["30%", "70%"]),
                        gradients: GradientSpec::from(Gradient::new("#FDE68A", "#FEF3C7")),
                        height: 18.0,
                        radius: 4.0,
                    }
                }
                Section { title: "Forced dark",
                    LoaderBars { theme: Theme::Dark, style: "padding: 12px; background: #0b1020; border-radius: 8px" }
                }
                Section { title: "From config",
                    ConfiguredLoaderBars { config }
                }
            }
        }
    }
}

#[component]
fn Section(title: String, children: Element) -> Element {
    rsx! {
        section { style: "margin-bottom: 1.5rem;",
            h2 { style: "font-size: 1rem;", "{title}" }
            {children}
        }
    }
}
