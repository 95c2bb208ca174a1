use chrono::NaiveDate;
use flora_calendar_backend::domain::CalendarService;
use shared::{CalendarDay, CalendarMonth, Language};
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::hooks::use_keyboard_navigation::is_activation_key;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub grid: CalendarMonth,
    pub language: Language,
    pub compact: bool,
    pub selected: Option<NaiveDate>,
    pub on_select: Callback<NaiveDate>,
}

/// CSS classes for one grid cell
pub fn day_classes(day: &CalendarDay, selected: Option<NaiveDate>) -> Classes {
    let mut classes = classes!("calendar-day");
    if !day.is_current_month() {
        classes.push("other-month");
    }
    if day.is_today {
        classes.push("today");
    }
    if day.is_weekend {
        classes.push("weekend");
    }
    if day.date.is_some() && day.date == selected {
        classes.push("selected");
    }
    classes
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_service = CalendarService::new();
    let weekdays = if props.compact {
        calendar_service.compact_weekday_names(props.language)
    } else {
        calendar_service.weekday_names(props.language)
    };

    let cells = props.grid.days.iter().map(|day| {
        let class = day_classes(day, props.selected);

        // Only days of the focused month can be selected
        match day.date {
            Some(date) => {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(date))
                };
                let onkeydown = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |event: KeyboardEvent| {
                        if is_activation_key(&event.key()) {
                            event.prevent_default();
                            on_select.emit(date);
                        }
                    })
                };
                let label = calendar_service.format_date_for_display(date, props.language);

                html! {
                    <div {class} tabindex="0" role="button" aria-label={label} {onclick} {onkeydown}>
                        <span class="day-number">{day.day}</span>
                    </div>
                }
            }
            None => html! {
                <div {class} aria-hidden="true">
                    <span class="day-number">{day.day}</span>
                </div>
            },
        }
    });

    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                {for weekdays.iter().map(|name| html! { <div class="weekday">{*name}</div> })}
            </div>
            <div class="calendar-grid">
                {for cells}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CalendarDayType;

    fn month_day(day: u32) -> CalendarDay {
        CalendarDay {
            day,
            month: 2,
            year: 2026,
            day_type: CalendarDayType::MonthDay,
            is_today: false,
            is_weekend: false,
            date: NaiveDate::from_ymd_opt(2026, 3, day),
        }
    }

    #[test]
    fn test_day_classes() {
        let mut day = month_day(14);
        day.is_today = true;
        day.is_weekend = true;

        let classes = day_classes(&day, day.date);
        assert!(classes.contains("today"));
        assert!(classes.contains("weekend"));
        assert!(classes.contains("selected"));
        assert!(!classes.contains("other-month"));
    }

    #[test]
    fn test_padding_cells_are_never_selected() {
        let padding = CalendarDay::padding(28, 1, 2026, CalendarDayType::PreviousMonth);

        let classes = day_classes(&padding, None);
        assert!(classes.contains("other-month"));
        assert!(!classes.contains("selected"));
    }
}
