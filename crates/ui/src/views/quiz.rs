use dioxus::prelude::*;
use tracing::error;

use engame_core::model::ImageRef;

use crate::context::AppContext;
use crate::views::{
    CategoryPickerView, FinishedView, LoadingView, PlayingView, ViewError, WelcomeView,
};
use crate::vm::{QuizIntent, QuizScreenVm, apply_intent, map_quiz_screen};

/// Root of the quiz. Owns the session and renders whichever screen it is on.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(|| ctx.new_session());
    let mut fatal = use_signal(|| None::<ViewError>);
    let loading_delay = ctx.settings().loading_delay();
    let logo_src = ImageRef::parse("logo.png")
        .map(|logo| logo.resolve(ctx.settings().images_base()))
        .unwrap_or_default();

    let on_intent = use_callback(move |intent: QuizIntent| {
        let result = {
            let mut guard = session.write();
            apply_intent(&mut guard, intent)
        };
        if let Err(err) = result {
            error!(error = ?err, "quiz halted");
            fatal.set(Some(err));
        }
    });

    // Dropped with the component, which cancels a pending splash timer.
    use_future(move || async move {
        tokio::time::sleep(loading_delay).await;
        on_intent.call(QuizIntent::FinishLoading);
    });

    if let Some(err) = fatal() {
        return rsx! {
            div { class: "fatal",
                h1 { "Something went wrong" }
                p { "{err.message()}" }
            }
        };
    }

    let body = match map_quiz_screen(&session.read()) {
        QuizScreenVm::Loading => return rsx! { LoadingView {} },
        QuizScreenVm::Welcome => rsx! { WelcomeView { on_intent } },
        QuizScreenVm::Categories(vm) => rsx! { CategoryPickerView { vm, on_intent } },
        QuizScreenVm::Playing(vm) => rsx! { PlayingView { vm, on_intent } },
        QuizScreenVm::Finished(vm) => rsx! { FinishedView { vm, on_intent } },
    };

    rsx! {
        div { class: "app-container",
            header { class: "header",
                h1 { class: "title",
                    img { src: "{logo_src}", alt: "ENGAME Logo", class: "app-logo-inline" }
                    "ENGAME"
                }
                p { class: "subtitle", "Aprende palabras jugando" }
            }

            main { class: "main", {body} }

            footer { class: "footer" }
        }
    }
}
