use dioxus::prelude::*;

use crate::layout::{viewport_size, LayoutState};

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Layout for the current viewport, recomputed on every window resize.
pub fn use_viewport_layout() -> Signal<LayoutState> {
    let layout = use_signal(|| {
        let (width, height) = viewport_size();
        LayoutState::recompute(width, height)
    });

    #[cfg(target_arch = "wasm32")]
    {
        type ResizeListener = Closure<dyn FnMut()>;
        let listener = use_hook(|| Rc::new(RefCell::new(None::<ResizeListener>)));

        {
            let listener = listener.clone();
            use_hook(move || {
                let Some(win) = window() else {
                    return;
                };
                let runtime = Runtime::current();
                let mut layout = layout;
                let on_resize = Closure::wrap(Box::new(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    let (width, height) = viewport_size();
                    layout.set(LayoutState::recompute(width, height));
                }) as Box<dyn FnMut()>);
                let _ = win
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                *listener.borrow_mut() = Some(on_resize);
            });
        }

        use_drop(move || {
            if let (Some(win), Some(on_resize)) = (window(), listener.borrow_mut().take()) {
                let _ = win.remove_event_listener_with_callback(
                    "resize",
                    on_resize.as_ref().unchecked_ref(),
                );
            }
        });
    }

    layout
}
