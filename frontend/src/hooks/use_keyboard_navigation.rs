use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Previous,
    Next,
}

/// Arrow keys move between months
pub fn navigation_key(key: &str) -> Option<NavigationKey> {
    match key {
        "ArrowLeft" => Some(NavigationKey::Previous),
        "ArrowRight" => Some(NavigationKey::Next),
        _ => None,
    }
}

/// Keys that activate a focused day cell
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Listen for arrow keys on the document for as long as the component lives
#[hook]
pub fn use_keyboard_navigation(on_previous: Callback<()>, on_next: Callback<()>) {
    use_effect_with((on_previous, on_next), |(on_previous, on_next)| {
        let on_previous = on_previous.clone();
        let on_next = on_next.clone();
        let listener = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match navigation_key(&event.key()) {
                        Some(NavigationKey::Previous) => {
                            event.prevent_default();
                            on_previous.emit(());
                        }
                        Some(NavigationKey::Next) => {
                            event.prevent_default();
                            on_next.emit(());
                        }
                        None => {}
                    }
                })
            });
        move || drop(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(navigation_key("ArrowLeft"), Some(NavigationKey::Previous));
        assert_eq!(navigation_key("ArrowRight"), Some(NavigationKey::Next));
        assert_eq!(navigation_key("ArrowUp"), None);
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
