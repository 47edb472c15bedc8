use dioxus::prelude::*;

use crate::views::QuizView;

/// Application shell. Fatal quiz errors are rendered by `QuizView` itself.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "ENGAME" }

        div { class: "app-root", QuizView {} }
    }
}
