//! Viewport width tracking and layout classes.

use leptos::ev;
use leptos::prelude::*;

/// Minimum width of the "large" layout; anything narrower goes full screen
pub const LARGE_MIN_WIDTH: f64 = 992.0;
/// Minimum width of the "medium" layout; anything wider opens the sidebar by default
pub const MEDIUM_MIN_WIDTH: f64 = 768.0;

/// Layout flags derived from the current viewport width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ViewportClass {
    /// Sidebar takes over the whole view instead of sharing it with content
    pub should_display_full_screen: bool,
    /// Wide enough for the sidebar to start open
    pub should_display_sidebar_open: bool,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        Self {
            should_display_full_screen: width < LARGE_MIN_WIDTH,
            should_display_sidebar_open: width > MEDIUM_MIN_WIDTH,
        }
    }
}

fn current_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Current `window.innerWidth`, updated on resize.
pub fn use_window_width() -> Signal<f64> {
    let width = RwSignal::new(current_width());

    let handle = window_event_listener(ev::resize, move |_| {
        let next = current_width();
        if width.get_untracked() != next {
            width.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    width.into()
}

/// Layout class memoised over [`use_window_width`].
pub fn use_viewport_class() -> Memo<ViewportClass> {
    let width = use_window_width();
    Memo::new(move |_| ViewportClass::from_width(width.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_desktop() {
        let class = ViewportClass::from_width(1300.0);
        assert!(!class.should_display_full_screen);
        assert!(class.should_display_sidebar_open);
    }

    #[test]
    fn test_phone_is_full_screen_and_closed() {
        let class = ViewportClass::from_width(500.0);
        assert!(class.should_display_full_screen);
        assert!(!class.should_display_sidebar_open);
    }

    #[test]
    fn test_breakpoint_edges() {
        assert!(!ViewportClass::from_width(768.0).should_display_sidebar_open);
        assert!(ViewportClass::from_width(769.0).should_display_sidebar_open);
        assert!(ViewportClass::from_width(991.0).should_display_full_screen);
        assert!(!ViewportClass::from_width(992.0).should_display_full_screen);
    }
}
