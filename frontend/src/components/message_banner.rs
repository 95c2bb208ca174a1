use shared::{AppMessage, Language};
use yew::prelude::*;

use crate::services::calendar_labels::{heading, Heading};

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub message: AppMessage,
    pub language: Language,
    pub on_dismiss: Callback<()>,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div
            class="message-banner"
            role="status"
            style={format!(
                "position: fixed; top: 20px; right: 20px; z-index: 1000; padding: 12px 20px; \
                 border-radius: 8px; color: white; background: {}; box-shadow: 0 4px 12px rgba(0,0,0,0.15);",
                props.message.kind.color()
            )}
        >
            <span>{&props.message.text}</span>
            <button
                class="banner-dismiss"
                onclick={on_dismiss}
                aria-label={heading(Heading::Dismiss, props.language)}
                style="margin-left: 12px; background: none; border: none; color: white; cursor: pointer;"
            >
                {"×"}
            </button>
        </div>
    }
}
