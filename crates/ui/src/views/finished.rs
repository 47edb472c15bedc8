use dioxus::prelude::*;

use crate::vm::{FinishedVm, QuizIntent};

#[component]
pub fn FinishedView(vm: FinishedVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "end-screen",
            h2 { "{vm.title}" }
            p { "{vm.score_label}" }
            button {
                class: "restart-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Volver al menú"
            }
        }
    }
}
