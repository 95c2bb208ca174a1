//! Fixed UI strings in both display languages.

use shared::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Quote,
    Science,
    Vocabulary,
    Listen,
    Fact,
    Books,
    Loading,
    Unavailable,
    TryAgain,
    Dismiss,
    Reset,
}

pub fn heading(heading: Heading, language: Language) -> &'static str {
    match (heading, language) {
        (Heading::Quote, Language::English) => "Quote of the Day",
        (Heading::Quote, Language::Chinese) => "每日名言",
        (Heading::Science, Language::English) => "On This Day in Science",
        (Heading::Science, Language::Chinese) => "科学史上的今天",
        (Heading::Vocabulary, Language::English) => "Word of the Day",
        (Heading::Vocabulary, Language::Chinese) => "每日单词",
        (Heading::Listen, Language::English) => "Listen",
        (Heading::Listen, Language::Chinese) => "朗读",
        (Heading::Fact, Language::English) => "Did You Know?",
        (Heading::Fact, Language::Chinese) => "你知道吗？",
        (Heading::Books, Language::English) => "Featured Books",
        (Heading::Books, Language::Chinese) => "推荐书籍",
        (Heading::Loading, Language::English) => "Loading calendar...",
        (Heading::Loading, Language::Chinese) => "正在加载日历……",
        (Heading::Unavailable, Language::English) => "Calendar Unavailable",
        (Heading::Unavailable, Language::Chinese) => "日历暂不可用",
        (Heading::TryAgain, Language::English) => "Try Again",
        (Heading::TryAgain, Language::Chinese) => "重试",
        (Heading::Dismiss, Language::English) => "Dismiss",
        (Heading::Dismiss, Language::Chinese) => "关闭",
        (Heading::Reset, Language::English) => "Today",
        (Heading::Reset, Language::Chinese) => "今天",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_exist_in_both_languages() {
        let all = [
            Heading::Quote,
            Heading::Science,
            Heading::Vocabulary,
            Heading::Listen,
            Heading::Fact,
            Heading::Books,
            Heading::Loading,
            Heading::Unavailable,
            Heading::TryAgain,
            Heading::Dismiss,
            Heading::Reset,
        ];
        for item in all {
            assert!(!heading(item, Language::English).is_empty());
            assert_ne!(heading(item, Language::English), heading(item, Language::Chinese));
        }
    }
}
