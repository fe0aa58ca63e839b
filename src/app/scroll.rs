//! Passive window scroll listener.
//!
//! Client-side only: registers a `scroll` listener on mount and removes it
//! when the owning component is dropped. During SSR nothing is registered,
//! so the header renders in its unscrolled style.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{prelude::Closure, JsCast};

/// Call `on_scroll` with the window's vertical offset on every scroll event.
pub fn use_window_scroll(on_scroll: impl FnMut(f64) + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use_hook(move || std::rc::Rc::new(ScrollListener::attach(on_scroll)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = on_scroll;
        use_hook(|| ());
    }
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    closure: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollListener {
    fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            on_scroll(offset);
        });

        if let Err(e) =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to register scroll listener: {:?}", e);
            return None;
        }

        Some(Self { closure })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
    }
}
