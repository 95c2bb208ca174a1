use flora_calendar_backend::{Backend, EngineConfig};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::calendar::Calendar;
use components::daily_sidebar::DailySidebar;
use components::flower_card::FlowerCard;
use components::message_banner::MessageBanner;
use components::month_header::MonthHeader;
use components::status_pages::{ErrorPage, LoadingOverlay};
use hooks::use_calendar::{next_language, use_calendar, UseCalendarResult};
use hooks::use_compact_layout::use_compact_layout;
use hooks::use_keyboard_navigation::use_keyboard_navigation;
use services::calendar_labels::{heading, Heading};
use services::config::load_engine_config;
use services::logging::Logger;

/// The loading overlay stays up at least this long before the calendar starts
const INIT_DELAY_MS: u32 = 500;

#[derive(Clone, PartialEq)]
enum AppPhase {
    Loading,
    Ready(Backend),
    Failed(String),
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(load_engine_config);
    let phase = use_state(|| AppPhase::Loading);

    // Deferred initialisation
    {
        let config = (*config).clone();
        let phase = phase.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                TimeoutFuture::new(INIT_DELAY_MS).await;
                match Backend::new(config) {
                    Ok(backend) => {
                        Logger::info_with_component("app", "Calendar initialised");
                        phase.set(AppPhase::Ready(backend));
                    }
                    Err(e) => {
                        let detail = format!("{:#}", e);
                        Logger::error_with_component(
                            "app",
                            &format!("Calendar initialisation failed: {}", detail),
                        );
                        phase.set(AppPhase::Failed(detail));
                    }
                }
            });
            || ()
        });
    }

    let language = config.primary_language();
    match &*phase {
        AppPhase::Loading => html! { <LoadingOverlay {language} /> },
        AppPhase::Failed(error) => html! { <ErrorPage error={error.clone()} {language} /> },
        AppPhase::Ready(backend) => html! { <CalendarApp backend={backend.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct CalendarAppProps {
    backend: Backend,
}

#[function_component(CalendarApp)]
fn calendar_app(props: &CalendarAppProps) -> Html {
    let today = {
        let calendar_service = props.backend.calendar_service.clone();
        use_state(move || calendar_service.current_date())
    };

    let UseCalendarResult { state, actions } = use_calendar(&props.backend, *today);
    let compact = use_compact_layout();
    use_keyboard_navigation(actions.previous.clone(), actions.next.clone());

    let config: &EngineConfig = props.backend.config();
    let language = state.language;
    let view = &state.view;
    let date_label = props
        .backend
        .calendar_service
        .format_date_for_display(state.content.date, language);

    let on_reset = {
        let recover = actions.recover.clone();
        Callback::from(move |_: MouseEvent| recover.emit(()))
    };

    html! {
        <div
            class={classes!("calendar-app", compact.then_some("compact"))}
            lang={language.code()}
            style={format!(
                "--season-primary: {}; --season-secondary: {}; --season-accent: {};",
                view.theme.palette.primary, view.theme.palette.secondary, view.theme.palette.accent
            )}
        >
            if let Some(message) = state.message.clone() {
                <MessageBanner {message} {language} on_dismiss={actions.dismiss_message.clone()} />
            }

            <main class="calendar-layout">
                <div class="calendar-column">
                    <MonthHeader
                        title={view.title.clone()}
                        {language}
                        next_language={next_language(&config.languages, language)}
                        can_go_previous={view.can_go_previous}
                        can_go_next={view.can_go_next}
                        on_previous={actions.previous.clone()}
                        on_next={actions.next.clone()}
                        on_toggle_language={actions.toggle_language.clone()}
                    />
                    <Calendar
                        grid={view.grid.clone()}
                        {language}
                        {compact}
                        selected={state.selected}
                        on_select={actions.select_date.clone()}
                    />
                    <button class="reset-button" onclick={on_reset}>
                        {heading(Heading::Reset, language)}
                    </button>
                </div>

                <div class="side-column">
                    <FlowerCard
                        flower={view.flower.clone()}
                        theme={view.theme.clone()}
                        {language}
                    />
                    <DailySidebar content={state.content.clone()} {language} {date_label} />
                </div>
            </main>
        </div>
    }
}

fn main() {
    services::logging::init_tracing();
    yew::Renderer::<App>::new().render();
}
