//! Viewport Visibility
//!
//! Thin wrapper over `IntersectionObserver` that disconnects on drop.

use nema_core::{Result, SiteError};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Reports intersection ratios for one element until dropped
pub struct ViewportWatch {
    observer: IntersectionObserver,
    // must outlive the observer
    _callback: ObserverCallback,
}

impl ViewportWatch {
    /// Start watching `target`; `on_ratio` receives the visible fraction
    /// each time an intersecting entry crosses `threshold`.
    pub fn observe(
        target: &Element,
        threshold: f64,
        mut on_ratio: impl FnMut(f64) + 'static,
    ) -> Result<Self> {
        let callback: ObserverCallback =
            Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_ratio(entry.intersection_ratio());
                    }
                }
            });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(browser_error)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Convert a thrown JS value into a site error
pub fn browser_error(value: JsValue) -> SiteError {
    SiteError::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Level a widget failure is logged at. Cosmetic failures leave the widget
/// in its static state.
pub fn severity(err: &SiteError) -> tracing::Level {
    if err.is_cosmetic() {
        tracing::Level::WARN
    } else {
        tracing::Level::ERROR
    }
}

/// Log a widget failure without interrupting rendering
pub fn report(widget: &str, err: &SiteError) {
    if severity(err) == tracing::Level::WARN {
        tracing::warn!(widget, "{err}");
    } else {
        tracing::error!(widget, "{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_failures_are_warnings() {
        let err = SiteError::Browser("IntersectionObserver is not defined".into());
        assert_eq!(severity(&err), tracing::Level::WARN);
    }

    #[test]
    fn test_content_failures_are_errors() {
        let err = SiteError::DanglingEdge { edge: 1, node: 5 };
        assert_eq!(severity(&err), tracing::Level::ERROR);
        assert_eq!(severity(&SiteError::Config("x".into())), tracing::Level::ERROR);
    }
}
