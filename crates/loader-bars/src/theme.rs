use dioxus::prelude::*;

use crate::config::Theme;

/// Script evaluated in the host page to read the system color scheme.
const PREFERS_DARK_JS: &str = r#"
    return !!(window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches);
"#;

/// Host capability for reading the system color-scheme preference.
///
/// `None` means the host cannot answer (server-side rendering, tests,
/// platforms without a media-query API).
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> Option<bool>;
}

/// A host with no color-scheme query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColorScheme;

impl ColorSchemeQuery for NoColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

/// A host whose preference is known up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.0)
    }
}

impl<Q: ColorSchemeQuery> ColorSchemeQuery for Option<Q> {
    fn prefers_dark(&self) -> Option<bool> {
        self.as_ref().and_then(|q| q.prefers_dark())
    }
}

/// System color-scheme state provided as context by [`ColorSchemeSeed`].
///
/// Loaders read it when their theme is `Auto`; reading subscribes the
/// component, so a late answer from the host re-renders it.
#[derive(Clone, Copy)]
pub struct SystemColorScheme {
    pub prefers_dark: Signal<bool>,
}

impl ColorSchemeQuery for SystemColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Some(*self.prefers_dark.read())
    }
}

/// Resolve the effective dark flag for one render.
///
/// The host is consulted only for `Auto`, and an unanswered query reads
/// as light.
pub fn resolve_is_dark<Q: ColorSchemeQuery + ?Sized>(theme: Theme, query: &Q) -> bool {
    match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::Auto => query.prefers_dark().unwrap_or(false),
    }
}

/// Provide [`SystemColorScheme`] to descendants and seed it from the host.
///
/// Mount this once near the root of the app. Until the host answers,
/// the preference reads as light.
#[component]
pub fn ColorSchemeSeed(children: Element) -> Element {
    let mut prefers_dark = use_signal(|| false);
    use_context_provider(|| SystemColorScheme { prefers_dark });

    use_effect(move || {
        spawn(async move {
            match document::eval(PREFERS_DARK_JS).join::<bool>().await {
                Ok(dark) => {
                    tracing::debug!(dark, "system color scheme resolved");
                    prefers_dark.set(dark);
                }
                Err(e) => tracing::debug!("color scheme query unavailable: {e}"),
            }
        });
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingQuery {
        answer: Option<bool>,
        calls: Cell<usize>,
    }

    impl ColorSchemeQuery for CountingQuery {
        fn prefers_dark(&self) -> Option<bool> {
            self.calls.set(self.calls.get() + 1);
            self.answer
        }
    }

    #[test]
    fn explicit_themes_ignore_host() {
        let query = CountingQuery {
            answer: Some(true),
            calls: Cell::new(0),
        };
        assert!(resolve_is_dark(Theme::Dark, &query));
        assert!(!resolve_is_dark(Theme::Light, &query));
        assert_eq!(query.calls.get(), 0);
    }

    #[test]
    fn auto_follows_host_preference() {
        assert!(resolve_is_dark(Theme::Auto, &FixedColorScheme(true)));
        assert!(!resolve_is_dark(Theme::Auto, &FixedColorScheme(false)));
    }

    #[test]
    fn auto_without_host_query_is_light() {
        assert!(!resolve_is_dark(Theme::Auto, &NoColorScheme));
        assert!(!resolve_is_dark(Theme::Auto, &None::<FixedColorScheme>));
    }

    #[test]
    fn auto_queries_host_exactly_once() {
        let query = CountingQuery {
            answer: Some(true),
            calls: Cell::new(0),
        };
        assert!(resolve_is_dark(Theme::Auto, &query));
        assert_eq!(query.calls.get(), 1);
    }

    #[test]
    fn optional_query_delegates() {
        assert_eq!(Some(FixedColorScheme(true)).prefers_dark(), Some(true));
    }
}
