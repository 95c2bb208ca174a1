use std::rc::Rc;

use chrono::NaiveDate;
use flora_calendar_backend::{Backend, NavigationError};
use gloo::timers::callback::Timeout;
use shared::{AppMessage, DailyContent, Language, MonthView};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Banners disappear on their own after this long
pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;

pub enum CalendarAction {
    Previous,
    Next,
    SelectDate(NaiveDate),
    ToggleLanguage,
    /// Reset to the month of the given date, normally a fresh read of today
    Recover(NaiveDate),
    DismissMessage,
}

/// Calendar screen state. Owns the backend, so every transition runs
/// through `reduce` and the view is rebuilt from the backend afterwards.
#[derive(Clone, PartialEq)]
pub struct CalendarState {
    backend: Backend,
    pub today: NaiveDate,
    pub view: MonthView,
    pub content: DailyContent,
    pub selected: Option<NaiveDate>,
    pub language: Language,
    pub message: Option<AppMessage>,
    /// Bumped on every new banner so its auto-hide timer can restart
    pub message_serial: u32,
}

impl CalendarState {
    pub fn new(backend: Backend, today: NaiveDate) -> Self {
        let view = backend.month_view(today);
        let content = backend.daily_content(backend.focus_date_for_content());
        let language = backend.config().primary_language();
        Self {
            backend,
            today,
            view,
            content,
            selected: None,
            language,
            message: None,
            message_serial: 0,
        }
    }

    pub fn apply(&mut self, action: CalendarAction) {
        match action {
            CalendarAction::Previous => {
                let result = self.backend.previous_month();
                self.after_navigation(result.map(|_| ()));
            }
            CalendarAction::Next => {
                let result = self.backend.next_month();
                self.after_navigation(result.map(|_| ()));
            }
            CalendarAction::SelectDate(date) => {
                Logger::debug_with_component("use_calendar", &format!("Selected {}", date));
                self.selected = Some(date);
                self.content = self.backend.daily_content(date);
            }
            CalendarAction::ToggleLanguage => {
                self.language = next_language(&self.backend.config().languages, self.language);
                Logger::info_with_component(
                    "use_calendar",
                    &format!("Language switched to {}", self.language),
                );
            }
            CalendarAction::Recover(today) => {
                self.today = today;
                self.backend.recover(self.today);
                self.refresh();
                self.show(AppMessage::success(match self.language {
                    Language::English => "Calendar reset to the current month",
                    Language::Chinese => "日历已重置到当前月份",
                }));
            }
            CalendarAction::DismissMessage => {
                self.message = None;
            }
        }
    }

    fn after_navigation(&mut self, result: Result<(), NavigationError>) {
        match result {
            Ok(()) => self.refresh(),
            Err(e) => {
                Logger::warn_with_component("use_calendar", &e.to_string());
                self.show(AppMessage::warning(navigation_warning(&e, self.language)));
            }
        }
    }

    /// Rebuild the month view and reset the sidebar to the focused month
    fn refresh(&mut self) {
        self.view = self.backend.month_view(self.today);
        self.selected = None;
        self.content = self
            .backend
            .daily_content(self.backend.focus_date_for_content());
    }

    fn show(&mut self, message: AppMessage) {
        self.message = Some(message);
        self.message_serial = self.message_serial.wrapping_add(1);
    }
}

impl Reducible for CalendarState {
    type Action = CalendarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Banner text for a rejected navigation step
pub fn navigation_warning(error: &NavigationError, language: Language) -> String {
    match (language, error) {
        (Language::English, _) => error.to_string(),
        (Language::Chinese, NavigationError::BeforeStart { limit }) => {
            format!("无法浏览{}年{}月之前的月份", limit.year, limit.month + 1)
        }
        (Language::Chinese, NavigationError::AfterEnd { limit }) => {
            format!("无法浏览{}年{}月之后的月份", limit.year, limit.month + 1)
        }
        (Language::Chinese, _) => "无法切换到该月份".to_string(),
    }
}

/// Language after `current` in the configured cycle
pub fn next_language(languages: &[Language], current: Language) -> Language {
    match languages.iter().position(|l| *l == current) {
        Some(index) => languages[(index + 1) % languages.len()],
        None => languages.first().copied().unwrap_or(current),
    }
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub previous: Callback<()>,
    pub next: Callback<()>,
    pub select_date: Callback<NaiveDate>,
    pub toggle_language: Callback<()>,
    pub recover: Callback<()>,
    pub dismiss_message: Callback<()>,
}

pub struct UseCalendarResult {
    pub state: UseReducerHandle<CalendarState>,
    pub actions: UseCalendarActions,
}

#[hook]
pub fn use_calendar(backend: &Backend, today: NaiveDate) -> UseCalendarResult {
    let state = {
        let backend = backend.clone();
        use_reducer(move || CalendarState::new(backend, today))
    };

    // Dispatchers are stable across renders, so the callbacks are too
    let previous = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(CalendarAction::Previous))
    };

    let next = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(CalendarAction::Next))
    };

    let select_date = {
        let dispatcher = state.dispatcher();
        use_callback((), move |date: NaiveDate, _| {
            dispatcher.dispatch(CalendarAction::SelectDate(date))
        })
    };

    let toggle_language = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(CalendarAction::ToggleLanguage))
    };

    let recover = {
        let dispatcher = state.dispatcher();
        let calendar_service = backend.calendar_service.clone();
        use_callback((), move |_: (), _| {
            dispatcher.dispatch(CalendarAction::Recover(calendar_service.current_date()))
        })
    };

    let dismiss_message = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(CalendarAction::DismissMessage))
    };

    let actions = UseCalendarActions {
        previous,
        next,
        select_date,
        toggle_language,
        recover,
        dismiss_message,
    };

    // Auto-hide the current banner; a newer banner replaces the timer
    {
        let dismiss = actions.dismiss_message.clone();
        let has_message = state.message.is_some();
        use_effect_with((state.message_serial, has_message), move |(_, has_message)| {
            let timeout = has_message.then(|| {
                Timeout::new(MESSAGE_TIMEOUT_MS, move || dismiss.emit(()))
            });
            move || drop(timeout)
        });
    }

    UseCalendarResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flora_calendar_backend::EngineConfig;
    use shared::{CalendarFocusDate, MessageKind};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn state() -> CalendarState {
        let backend = Backend::new(EngineConfig::default()).unwrap();
        CalendarState::new(backend, date(2026, 3, 14))
    }

    #[test]
    fn test_initial_state() {
        let state = state();

        assert_eq!(state.view.focus, CalendarFocusDate::new(0, 2026));
        assert_eq!(state.content.date, date(2026, 1, 1));
        assert_eq!(state.language, Language::English);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_previous_at_start_shows_warning() {
        let mut state = state();
        state.apply(CalendarAction::Previous);

        let message = state.message.clone().unwrap();
        assert_eq!(message.kind, MessageKind::Warning);
        assert_eq!(message.text, "Cannot navigate before January 2026");
        assert_eq!(state.message_serial, 1);
        assert_eq!(state.view.focus, CalendarFocusDate::new(0, 2026));
    }

    #[test]
    fn test_next_rebuilds_view_and_content() {
        let mut state = state();
        state.apply(CalendarAction::SelectDate(date(2026, 1, 20)));
        state.apply(CalendarAction::Next);

        assert_eq!(state.view.focus, CalendarFocusDate::new(1, 2026));
        assert_eq!(state.view.flower.english, "Almond Blossom");
        assert_eq!(state.selected, None);
        assert_eq!(state.content.date, date(2026, 2, 1));
    }

    #[test]
    fn test_select_date_updates_sidebar() {
        let mut state = state();
        state.apply(CalendarAction::SelectDate(date(2026, 3, 14)));

        assert_eq!(state.selected, Some(date(2026, 3, 14)));
        assert_eq!(state.content.science_event.as_ref().map(|e| e.year), Some(1879));
    }

    #[test]
    fn test_toggle_language_cycles() {
        let mut state = state();

        state.apply(CalendarAction::ToggleLanguage);
        assert_eq!(state.language, Language::Chinese);
        state.apply(CalendarAction::ToggleLanguage);
        assert_eq!(state.language, Language::English);
    }

    #[test]
    fn test_recover_and_dismiss() {
        let mut state = state();
        state.apply(CalendarAction::Recover(date(2026, 3, 14)));

        assert_eq!(state.view.focus, CalendarFocusDate::new(2, 2026));
        assert_eq!(state.view.grid.today().map(|d| d.day), Some(14));
        assert_eq!(state.message.as_ref().map(|m| m.kind), Some(MessageKind::Success));

        state.apply(CalendarAction::DismissMessage);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_recover_moves_today_forward() {
        let mut state = state();
        state.apply(CalendarAction::Recover(date(2026, 3, 15)));

        assert_eq!(state.today, date(2026, 3, 15));
        assert_eq!(state.view.grid.today().map(|d| d.day), Some(15));
        assert_eq!(state.view.focus, CalendarFocusDate::new(2, 2026));
    }

    #[test]
    fn test_navigation_warning_follows_language() {
        let mut state = state();
        state.apply(CalendarAction::ToggleLanguage);
        state.apply(CalendarAction::Previous);

        assert_eq!(
            state.message.map(|m| m.text),
            Some("无法浏览2026年1月之前的月份".to_string())
        );
    }

    #[test]
    fn test_next_language() {
        let both = [Language::English, Language::Chinese];
        assert_eq!(next_language(&both, Language::English), Language::Chinese);
        assert_eq!(next_language(&both, Language::Chinese), Language::English);
        assert_eq!(next_language(&[Language::Chinese], Language::Chinese), Language::Chinese);
        assert_eq!(next_language(&[Language::Chinese], Language::English), Language::Chinese);
    }
}
