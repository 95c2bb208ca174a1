use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Viewports narrower than this use the compact layout
pub const COMPACT_WIDTH_PX: f64 = 600.0;

/// Resize events closer together than this are coalesced
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub fn is_compact_width(width: f64) -> bool {
    width < COMPACT_WIDTH_PX
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Layout for a measured width. No measurement means the wide layout.
pub fn compact_for(width: Option<f64>) -> bool {
    width.map(is_compact_width).unwrap_or(false)
}

fn viewport_is_compact() -> bool {
    compact_for(viewport_width())
}

/// Whether the viewport is narrow, re-evaluated after resizing settles.
/// Each resize event cancels the pending check and schedules a new one.
#[hook]
pub fn use_compact_layout() -> bool {
    let compact = use_state_eq(viewport_is_compact);

    {
        let compact = compact.clone();
        use_effect_with((), move |_| {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let listener = web_sys::window().map(|window| {
                let pending = pending.clone();
                EventListener::new(&window, "resize", move |_| {
                    let compact = compact.clone();
                    let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                        let now_compact = viewport_is_compact();
                        Logger::debug_with_component(
                            "use_compact_layout",
                            &format!("Compact layout: {}", now_compact),
                        );
                        // The handle's value is frozen at the first render, so
                        // always set and let `use_state_eq` skip unchanged values
                        compact.set(now_compact);
                    });
                    // Replacing the previous timeout drops and cancels it
                    pending.borrow_mut().replace(timeout);
                })
            });

            move || {
                drop(listener);
                pending.borrow_mut().take();
            }
        });
    }

    *compact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_compact_width() {
        assert!(is_compact_width(375.0));
        assert!(is_compact_width(599.0));
        assert!(!is_compact_width(600.0));
        assert!(!is_compact_width(1280.0));
    }

    #[test]
    fn test_layout_follows_each_settled_width() {
        let settled: Vec<bool> = [Some(1280.0), Some(400.0), Some(1280.0), None]
            .into_iter()
            .map(compact_for)
            .collect();

        assert_eq!(settled, vec![false, true, false, false]);
    }
}
