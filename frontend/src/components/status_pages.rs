use shared::Language;
use yew::prelude::*;

use crate::services::calendar_labels::{heading, Heading};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub language: Language,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    html! {
        <div class="loading-overlay" style="position: fixed; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; background: rgba(255,255,255,0.95); z-index: 2000;">
            <div class="loading-flower" style="font-size: 3rem;">{"🌸"}</div>
            <div class="loading-text">{heading(Heading::Loading, props.language)}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPageProps {
    pub error: String,
    pub language: Language,
}

/// Full-page error shown when the calendar could not be started
#[function_component(ErrorPage)]
pub fn error_page(props: &ErrorPageProps) -> Html {
    let on_retry = Callback::from(|_: MouseEvent| {
        Logger::info_with_component("error_page", "Reloading page after startup failure");
        let reloaded = web_sys::window().map(|window| window.location().reload());
        if !matches!(reloaded, Some(Ok(()))) {
            Logger::error_with_component("error_page", "Page reload failed");
        }
    });

    html! {
        <div class="error-page" style="display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; text-align: center;">
            <div style="font-size: 3rem;">{"🥀"}</div>
            <h2>{heading(Heading::Unavailable, props.language)}</h2>
            <p class="error-detail" style="color: #7f8c8d; max-width: 480px;">{&props.error}</p>
            <button
                class="retry-button"
                onclick={on_retry}
                style="margin-top: 1rem; padding: 10px 24px; border: none; border-radius: 6px; background: #4a90e2; color: white; cursor: pointer;"
            >
                {heading(Heading::TryAgain, props.language)}
            </button>
        </div>
    }
}
