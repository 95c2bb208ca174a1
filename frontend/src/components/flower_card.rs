use shared::{FlowerEntry, Language, SeasonalTheme};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FlowerCardProps {
    pub flower: FlowerEntry,
    pub theme: SeasonalTheme,
    pub language: Language,
}

#[function_component(FlowerCard)]
pub fn flower_card(props: &FlowerCardProps) -> Html {
    let flower = &props.flower;
    let theme = &props.theme;

    // The other language's name is shown as a subtitle
    let secondary_name = match props.language {
        Language::English => &flower.chinese,
        Language::Chinese => &flower.english,
    };

    html! {
        <section
            class="flower-card"
            style={format!("background: {}; border-color: {};", theme.gradient(), theme.palette.accent)}
        >
            <div class="flower-illustration" aria-hidden="true">{&flower.emoji}</div>
            <div class="flower-details" style={format!("background: {};", theme.palette.secondary)}>
                <h3 class="flower-name" style={format!("color: {};", theme.palette.primary)}>
                    {flower.name(props.language)}
                </h3>
                <div class="flower-subtitle">
                    {format!("{} · {}", secondary_name, flower.portuguese)}
                </div>
                <p class="flower-description">{flower.description.get(props.language)}</p>
                <span class="season-badge" style={format!("background: {};", theme.palette.accent)}>
                    {theme.season.name(props.language)}
                </span>
            </div>
        </section>
    }
}
