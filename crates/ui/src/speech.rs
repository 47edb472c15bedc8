use dioxus::document::eval;
use engame_core::model::{SpeechSettings, Word};
use services::Pronouncer;

/// Speaks words through the webview's Web Speech API.
///
/// Webviews without `speechSynthesis` silently skip the request.
#[derive(Clone, Debug)]
pub struct WebSpeechPronouncer {
    settings: SpeechSettings,
}

impl WebSpeechPronouncer {
    #[must_use]
    pub fn new(settings: SpeechSettings) -> Self {
        Self { settings }
    }
}

impl Pronouncer for WebSpeechPronouncer {
    fn pronounce(&self, word: &Word) {
        let js = speech_script(word.as_str(), self.settings.lang(), self.settings.rate());
        let _ = eval(&js);
    }
}

pub(crate) fn speech_script(word: &str, lang: &str, rate: f32) -> String {
    format!(
        r"(function() {{
            if (typeof window.speechSynthesis === 'undefined'
                || typeof window.SpeechSynthesisUtterance === 'undefined') {{
                return;
            }}
            const utterance = new SpeechSynthesisUtterance({word:?});
            utterance.lang = {lang:?};
            utterance.rate = {rate};
            window.speechSynthesis.speak(utterance);
        }})();"
    )
}
