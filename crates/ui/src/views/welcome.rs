use dioxus::prelude::*;

use crate::vm::QuizIntent;

#[component]
pub fn WelcomeView(on_intent: Callback<QuizIntent>) -> Element {
    let mut name = use_signal(String::new);
    let blank = name().trim().is_empty();

    rsx! {
        div { class: "welcome-screen",
            h1 { class: "welcome-title", "🎮 Bienvenidos a ENGAME" }
            p { class: "welcome-text", "Por favor, escribe tu nombre para comenzar:" }
            input {
                class: "welcome-input",
                r#type: "text",
                placeholder: "Escribe tu nombre...",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            button {
                id: "welcome-start",
                class: "welcome-btn",
                r#type: "button",
                disabled: blank,
                onclick: move |_| on_intent.call(QuizIntent::SubmitName(name())),
                "¡Comenzar!"
            }
        }
    }
}
