use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use engame_core::Catalog;
use engame_core::model::{QuizSettings, QuizSettingsDraft};
use services::{Pronouncer, RecordingPronouncer};

use crate::context::{UiApp, build_app_context};
use crate::views::{CategoryPickerView, FinishedView, LoadingView, PlayingView, QuizView, WelcomeView};
use crate::vm::{QuizIntent, QuizScreenVm};

struct TestApp {
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    pronouncer: Arc<RecordingPronouncer>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn settings(&self) -> QuizSettings {
        self.settings.clone()
    }

    fn pronouncer(&self) -> Arc<dyn Pronouncer> {
        self.pronouncer.clone()
    }

    fn seed(&self) -> Option<u64> {
        Some(7)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

/// Renders one screen from a prepared view model, with a callback that drops every intent.
#[component]
pub fn StaticScreen(screen: QuizScreenVm) -> Element {
    let on_intent = use_callback(|_: QuizIntent| {});
    match screen {
        QuizScreenVm::Loading => rsx! { LoadingView {} },
        QuizScreenVm::Welcome => rsx! { WelcomeView { on_intent } },
        QuizScreenVm::Categories(vm) => rsx! { CategoryPickerView { vm, on_intent } },
        QuizScreenVm::Playing(vm) => rsx! { PlayingView { vm, on_intent } },
        QuizScreenVm::Finished(vm) => rsx! { FinishedView { vm, on_intent } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(loading_delay: Duration) -> ViewHarness {
    let settings = QuizSettingsDraft {
        loading_delay: Some(loading_delay),
        ..QuizSettingsDraft::default()
    }
    .validate()
    .expect("valid settings");

    let app = Arc::new(TestApp {
        catalog: Arc::new(Catalog::builtin().expect("builtin catalog")),
        settings,
        pronouncer: Arc::new(RecordingPronouncer::new()),
    });

    ViewHarness {
        dom: VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { app }),
    }
}

pub fn setup_screen_harness(screen: QuizScreenVm) -> ViewHarness {
    ViewHarness {
        dom: VirtualDom::new_with_props(StaticScreen, StaticScreenProps { screen }),
    }
}
