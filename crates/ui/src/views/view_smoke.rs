use std::time::Duration;

use engame_core::model::CategoryName;

use crate::views::test_harness::{setup_quiz_harness, setup_screen_harness};
use crate::vm::{
    CategoryButtonVm, CategoryPickerVm, FeedbackVm, FinishedVm, OptionVm, PlayingVm,
    QuizScreenVm,
};

#[tokio::test(flavor = "current_thread")]
async fn quiz_starts_on_the_loading_screen() {
    let mut harness = setup_quiz_harness(Duration::from_secs(60));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Cargando..."));
    assert!(!html.contains("Bienvenidos a ENGAME"));
}

#[tokio::test(flavor = "current_thread")]
async fn splash_gives_way_to_welcome() {
    let mut harness = setup_quiz_harness(Duration::ZERO);
    harness.rebuild();

    for _ in 0..10 {
        harness.drive_async().await;
        if harness.render().contains("Bienvenidos a ENGAME") {
            break;
        }
    }

    let html = harness.render();
    assert!(html.contains("Bienvenidos a ENGAME"));
    assert!(html.contains("Aprende palabras jugando"));
    assert!(html.contains("¡Comenzar!"));
}

#[tokio::test(flavor = "current_thread")]
async fn start_is_disabled_until_a_name_is_typed() {
    let mut harness = setup_screen_harness(QuizScreenVm::Welcome);
    harness.rebuild();

    let html = harness.render();
    let start = html
        .find("id=\"welcome-start\"")
        .expect("start button rendered");
    let tag_start = html[..start].rfind("<button").expect("button tag");
    let tag_end = start + html[start..].find('>').expect("tag end");
    let tag = &html[tag_start..tag_end];
    assert!(tag.contains("disabled"), "start button not disabled: {tag}");
    assert!(!tag.contains("disabled=false"), "start button not disabled: {tag}");
}

#[tokio::test(flavor = "current_thread")]
async fn picker_renders_every_category() {
    let vm = CategoryPickerVm {
        greeting: "✨ Bienvenido Ana ✨".to_string(),
        categories: ["Animales", "Colores"]
            .into_iter()
            .map(|label| {
                let name = CategoryName::parse(label).unwrap();
                CategoryButtonVm {
                    emoji: crate::vm::category_emoji(&name),
                    class: "cat-btn",
                    label: label.to_string(),
                    name,
                }
            })
            .collect(),
    };
    let mut harness = setup_screen_harness(QuizScreenVm::Categories(vm));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Bienvenido Ana"));
    assert!(html.contains("Animales"));
    assert!(html.contains("🎨"));
    assert!(html.contains("Regresar a la Bienvenida"));
}

#[tokio::test(flavor = "current_thread")]
async fn answered_question_shows_feedback_and_next() {
    let vm = PlayingVm {
        category: "Animales".to_string(),
        score_label: "Puntuación: 0".to_string(),
        word: "cat".to_string(),
        image_src: "/images/cat.png".to_string(),
        placeholder_src: "https://placehold.co/220x220/5c6bc0/ffffff?text=cat".to_string(),
        options: vec![
            OptionVm {
                label: "dog".to_string(),
                class: "option-btn incorrect-selected",
            },
            OptionVm {
                label: "cat".to_string(),
                class: "option-btn correct-answer",
            },
        ],
        answered: true,
        feedback: Some(FeedbackVm {
            correct: false,
            text: "❌ Incorrecto, la respuesta correcta era: cat".to_string(),
            class: "feedback-box incorrect",
        }),
    };
    let mut harness = setup_screen_harness(QuizScreenVm::Playing(vm));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("/images/cat.png"));
    assert!(!html.contains("placehold.co"));
    assert!(html.contains("incorrect-selected"));
    assert!(html.contains("la respuesta correcta era: cat"));
    assert!(html.contains("Escuchar palabra"));
    assert!(html.contains("Siguiente"));
}

#[tokio::test(flavor = "current_thread")]
async fn unanswered_question_hides_feedback() {
    let vm = PlayingVm {
        category: "Comida".to_string(),
        score_label: "Puntuación: 2".to_string(),
        word: "apple".to_string(),
        image_src: "/images/apple.png".to_string(),
        placeholder_src: String::new(),
        options: vec![OptionVm {
            label: "apple".to_string(),
            class: "option-btn",
        }],
        answered: false,
        feedback: None,
    };
    let mut harness = setup_screen_harness(QuizScreenVm::Playing(vm));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Puntuación: 2"));
    assert!(!html.contains("Siguiente"));
    assert!(!html.contains("Escuchar palabra"));
}

#[tokio::test(flavor = "current_thread")]
async fn finished_screen_offers_the_menu() {
    let vm = FinishedVm {
        title: "🎉 ¡Felicitaciones Ana! 🎉".to_string(),
        score_label: "Tu puntuación es: 3 / 8".to_string(),
    };
    let mut harness = setup_screen_harness(QuizScreenVm::Finished(vm));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Felicitaciones Ana"));
    assert!(html.contains("3 / 8"));
    assert!(html.contains("Volver al menú"));
}
