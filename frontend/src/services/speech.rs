//! Text-to-speech through the browser speech synthesis API.

use shared::Language;
use wasm_bindgen::JsValue;
use web_sys::SpeechSynthesisUtterance;

use crate::services::logging::Logger;

const SPEECH_RATE: f32 = 0.9;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech synthesis is not available in this browser")]
    Unavailable,
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),
}

impl From<JsValue> for SpeechError {
    fn from(value: JsValue) -> Self {
        SpeechError::Synthesis(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Speak `text` with the voice for `language`, cancelling any utterance
/// still in progress
pub fn speak(text: &str, language: Language) -> Result<(), SpeechError> {
    let window = web_sys::window().ok_or(SpeechError::Unavailable)?;
    let synth = window
        .speech_synthesis()
        .map_err(|_| SpeechError::Unavailable)?;

    let utterance = SpeechSynthesisUtterance::new_with_text(text)?;
    utterance.set_lang(language.speech_tag());
    utterance.set_rate(SPEECH_RATE);

    synth.cancel();
    synth.speak(&utterance);

    Logger::debug_with_component(
        "speech",
        &format!("Speaking '{}' as {}", text, language.speech_tag()),
    );
    Ok(())
}
