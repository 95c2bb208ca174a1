use shared::{Language, LocalizedText};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthHeaderProps {
    pub title: LocalizedText,
    pub language: Language,
    /// Language the toggle switches to
    pub next_language: Language,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_toggle_language: Callback<()>,
}

#[function_component(MonthHeader)]
pub fn month_header(props: &MonthHeaderProps) -> Html {
    let (previous_label, next_label) = match props.language {
        Language::English => ("Previous Month", "Next Month"),
        Language::Chinese => ("上个月", "下个月"),
    };

    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    let on_toggle_language = {
        let on_toggle = props.on_toggle_language.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <header class="month-header">
            <button
                class="nav-button"
                onclick={on_previous}
                disabled={!props.can_go_previous}
                title={previous_label}
                aria-label={previous_label}
            >
                {"◀"}
            </button>

            <h2 class="month-title">{props.title.get(props.language)}</h2>

            <button
                class="nav-button"
                onclick={on_next}
                disabled={!props.can_go_next}
                title={next_label}
                aria-label={next_label}
            >
                {"▶"}
            </button>

            if props.next_language != props.language {
                <button class="language-toggle" onclick={on_toggle_language}>
                    {props.next_language.label()}
                </button>
            }
        </header>
    }
}
