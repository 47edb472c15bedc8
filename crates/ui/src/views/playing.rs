use dioxus::prelude::*;
use tracing::warn;

use crate::vm::{OptionVm, PlayingVm, QuizIntent};

#[component]
pub fn PlayingView(vm: PlayingVm, on_intent: Callback<QuizIntent>) -> Element {
    let answered = vm.answered;

    rsx! {
        div { class: "game-container",
            div { class: "category-bar",
                div { class: "category-bar-top",
                    h3 { "{vm.category}" }
                    p { class: "score", "{vm.score_label}" }
                }
                button {
                    class: "menu-btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "← Menú"
                }
            }

            div { class: "content-area",
                div { class: "image-box",
                    // Keyed by word: the placeholder fallback resets with each question.
                    QuestionImage {
                        key: "{vm.word}",
                        src: vm.image_src.clone(),
                        placeholder: vm.placeholder_src.clone(),
                        alt: vm.word.clone(),
                    }
                    p { class: "instruction", "¿Cuál es la palabra correcta?" }
                }

                div { class: "options-box",
                    for option in vm.options.iter().cloned() {
                        OptionButton { key: "{option.label}", option, answered, on_intent }
                    }

                    if let Some(feedback) = vm.feedback.as_ref() {
                        div { class: feedback.class,
                            p { class: "feedback-text", "{feedback.text}" }
                        }
                        div { class: "feedback-buttons",
                            button {
                                class: "audio-btn",
                                r#type: "button",
                                onclick: move |_| on_intent.call(QuizIntent::Listen),
                                "🔊 Escuchar palabra"
                            }
                            button {
                                id: "next-question",
                                class: "next-btn",
                                r#type: "button",
                                onclick: move |_| on_intent.call(QuizIntent::Next),
                                "➡️ Siguiente"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, answered: bool, on_intent: Callback<QuizIntent>) -> Element {
    let label = option.label.clone();
    rsx! {
        button {
            class: option.class,
            r#type: "button",
            disabled: answered,
            onclick: move |_| on_intent.call(QuizIntent::Answer(label.clone())),
            "{option.label}"
        }
    }
}

/// Which picture a question shows. The catalog image gets one try; after a
/// load error the placeholder stays until the next question remounts this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ImageSource {
    #[default]
    Catalog,
    Placeholder,
}

impl ImageSource {
    fn pick<'a>(self, src: &'a str, placeholder: &'a str) -> &'a str {
        match self {
            ImageSource::Catalog => src,
            ImageSource::Placeholder => placeholder,
        }
    }

    /// Source to switch to after a load error. `None` once the placeholder failed too.
    fn after_error(self) -> Option<Self> {
        match self {
            ImageSource::Catalog => Some(ImageSource::Placeholder),
            ImageSource::Placeholder => None,
        }
    }
}

#[component]
fn QuestionImage(src: String, placeholder: String, alt: String) -> Element {
    let mut source = use_signal(ImageSource::default);
    let current = source().pick(&src, &placeholder).to_string();

    rsx! {
        img {
            class: "word-image",
            src: "{current}",
            alt: "{alt}",
            onerror: move |_| {
                if let Some(next) = source().after_error() {
                    warn!(src = %src, "image failed to load; using placeholder");
                    source.set(next);
                }
            },
        }
    }
}
