use dioxus::prelude::*;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "loading-content",
                div { class: "spinner" }
                p { "Cargando..." }
            }
        }
    }
}
