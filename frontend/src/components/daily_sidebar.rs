use shared::{DailyContent, Language, LocalizedText, ScienceEvent, VocabularyWord};
use yew::prelude::*;

use crate::services::calendar_labels::{heading, Heading};
use crate::services::logging::Logger;
use crate::services::speech;

#[derive(Properties, PartialEq)]
pub struct DailySidebarProps {
    pub content: DailyContent,
    pub language: Language,
    pub date_label: String,
}

fn localized(text: &LocalizedText, language: Language) -> Html {
    html! { {text.get(language)} }
}

pub fn science_event_classes(event: Option<&ScienceEvent>) -> Classes {
    classes!("science-event", event.is_none().then_some("no-event"))
}

/// Text read aloud for the vocabulary card and the voice to read it with.
/// The Chinese view reads the translated meaning instead of the English word.
pub fn speech_text(word: &VocabularyWord, language: Language) -> (String, Language) {
    match language {
        Language::English => (word.word.clone(), Language::English),
        Language::Chinese => (word.meaning.zh.clone(), Language::Chinese),
    }
}

#[function_component(DailySidebar)]
pub fn daily_sidebar(props: &DailySidebarProps) -> Html {
    let content = &props.content;
    let language = props.language;
    let word = &content.vocabulary;

    let on_speak = {
        let (text, voice) = speech_text(word, language);
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = speech::speak(&text, voice) {
                Logger::warn_with_component("daily_sidebar", &e.to_string());
            }
        })
    };

    html! {
        <aside class="daily-sidebar">
            <div class="sidebar-date">{&props.date_label}</div>

            <section class="sidebar-section quote">
                <h4>{heading(Heading::Quote, language)}</h4>
                <blockquote>{localized(&content.quote.text, language)}</blockquote>
                <cite>{format!("— {}", content.quote.author)}</cite>
            </section>

            <section class="sidebar-section science">
                <h4>{heading(Heading::Science, language)}</h4>
                <p class={science_event_classes(content.science_event.as_ref())}>
                    {localized(&content.science_event_text, language)}
                </p>
            </section>

            <section class="sidebar-section vocabulary">
                <h4>{heading(Heading::Vocabulary, language)}</h4>
                <div class="word-line">
                    <strong class="word">{&word.word}</strong>
                    <span class="phonetic">{&word.phonetic}</span>
                    <em class="part-of-speech">{&word.part_of_speech}</em>
                    <button class="speak-button" onclick={on_speak} title={heading(Heading::Listen, language)}>
                        {"🔊"}
                    </button>
                </div>
                <p class="meaning">{localized(&word.meaning, language)}</p>
                <p class="example">{&word.example}</p>
            </section>

            <section class="sidebar-section fact">
                <h4>{heading(Heading::Fact, language)}</h4>
                <p>{localized(&content.fact.text, language)}</p>
            </section>

            <section class="sidebar-section books">
                <h4>{heading(Heading::Books, language)}</h4>
                <ul>
                    {for content.featured_books.iter().map(|book| html! {
                        <li class="book">
                            <div class="book-title">{book.title.get(language)}</div>
                            <div class="book-meta">{format!("{} ({})", book.author, book.year)}</div>
                            <div class="book-summary">{book.summary.get(language)}</div>
                        </li>
                    })}
                </ul>
            </section>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use flora_calendar_backend::{Backend, EngineConfig};

    fn content_for(month: u32, day: u32) -> DailyContent {
        let backend = Backend::new(EngineConfig::default()).unwrap();
        backend.daily_content(NaiveDate::from_ymd_opt(2026, month, day).unwrap())
    }

    #[test]
    fn test_day_without_event_uses_no_event_style() {
        let content = content_for(3, 15);
        assert!(content.science_event.is_none());

        let classes = science_event_classes(content.science_event.as_ref());
        assert!(classes.contains("no-event"));
        assert!(content.science_event_text.get(Language::English).contains("No notable science event"));
    }

    #[test]
    fn test_day_with_event_shows_description() {
        let content = content_for(3, 14);
        let event = content.science_event.as_ref().unwrap();

        let classes = science_event_classes(Some(event));
        assert!(classes.contains("science-event"));
        assert!(!classes.contains("no-event"));
        assert!(content
            .science_event_text
            .get(Language::English)
            .starts_with("1879: "));
        assert!(content
            .science_event_text
            .get(Language::Chinese)
            .starts_with("1879年："));
    }

    #[test]
    fn test_speech_text_follows_language() {
        let content = content_for(3, 14);
        let word = &content.vocabulary;

        assert_eq!(
            speech_text(word, Language::English),
            (word.word.clone(), Language::English)
        );
        assert_eq!(
            speech_text(word, Language::Chinese),
            (word.meaning.zh.clone(), Language::Chinese)
        );
    }
}
