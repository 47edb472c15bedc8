use dioxus::prelude::*;

use crate::vm::{CategoryButtonVm, CategoryPickerVm, QuizIntent};

#[component]
pub fn CategoryPickerView(vm: CategoryPickerVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "category-select",
            h2 { "{vm.greeting}" }
            h3 { "Elige una categoría para comenzar:" }
            div { class: "cat-grid",
                for category in vm.categories.iter().cloned() {
                    CategoryButton { key: "{category.label}", category, on_intent }
                }
            }
            button {
                class: "back-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Reset),
                "⬅️ Regresar a la Bienvenida"
            }
        }
    }
}

#[component]
fn CategoryButton(category: CategoryButtonVm, on_intent: Callback<QuizIntent>) -> Element {
    let name = category.name.clone();
    rsx! {
        button {
            class: category.class,
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::PickCategory(name.clone())),
            span { class: "cat-emoji", "{category.emoji}" }
            span { class: "cat-text", "{category.label}" }
        }
    }
}
