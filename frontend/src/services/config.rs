use flora_calendar_backend::EngineConfig;

use crate::services::logging::Logger;

/// Id of the inline `<script type="application/json">` block that may
/// override the default engine configuration
pub const CONFIG_ELEMENT_ID: &str = "calendar-config";

/// Engine configuration for this page: the inline override when present
/// and well formed, the 2026 calendar otherwise
pub fn load_engine_config() -> EngineConfig {
    match inline_config_text() {
        Some(text) => parse_engine_config(&text),
        None => EngineConfig::default(),
    }
}

fn inline_config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

/// Parse a configuration override. Malformed JSON is logged and ignored.
pub fn parse_engine_config(text: &str) -> EngineConfig {
    match serde_json::from_str::<EngineConfig>(text) {
        Ok(config) => {
            Logger::info_with_component("config", "Using inline calendar configuration");
            config
        }
        Err(e) => {
            Logger::warn_with_component(
                "config",
                &format!("Ignoring malformed calendar configuration: {}", e),
            );
            EngineConfig::default()
        }
    }
}
