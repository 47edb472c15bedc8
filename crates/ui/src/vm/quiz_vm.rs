use engame_core::model::{CategoryName, placeholder_image_url};
use services::{QuizSession, Round, RoundResult, Screen};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryButtonVm {
    pub name: CategoryName,
    pub label: String,
    pub emoji: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryPickerVm {
    pub greeting: String,
    pub categories: Vec<CategoryButtonVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub text: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayingVm {
    pub category: String,
    pub score_label: String,
    pub word: String,
    pub image_src: String,
    pub placeholder_src: String,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    pub feedback: Option<FeedbackVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedVm {
    pub title: String,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Loading,
    Welcome,
    Categories(CategoryPickerVm),
    Playing(PlayingVm),
    Finished(FinishedVm),
}

/// Icon shown on a category button, picked from its name.
#[must_use]
pub fn category_emoji(name: &CategoryName) -> &'static str {
    let lower = name.as_str().to_lowercase();
    if lower.contains("colores") {
        "🎨"
    } else if lower.contains("animales") {
        "🐾"
    } else if lower.contains("comida") {
        "🍎"
    } else {
        "🎯"
    }
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> QuizScreenVm {
    match session.screen() {
        Screen::Loading => QuizScreenVm::Loading,
        Screen::Welcome => QuizScreenVm::Welcome,
        Screen::CategoryPicker { player } => {
            let categories = session
                .catalog()
                .names()
                .map(|name| CategoryButtonVm {
                    name: name.clone(),
                    label: name.to_string(),
                    emoji: category_emoji(name),
                    class: if name.as_str().to_lowercase().contains("colores") {
                        "cat-btn centered"
                    } else {
                        "cat-btn"
                    },
                })
                .collect();
            QuizScreenVm::Categories(CategoryPickerVm {
                greeting: format!("✨ Bienvenido {player} ✨"),
                categories,
            })
        }
        Screen::Playing { round, .. } => {
            QuizScreenVm::Playing(map_round(round, session.settings().images_base()))
        }
        Screen::Finished { player, result } => QuizScreenVm::Finished(map_result(
            player.as_str(),
            result,
        )),
    }
}

fn map_round(round: &Round, images_base: &str) -> PlayingVm {
    let question = round.question();
    let word = question.word();
    let answer = round.answer();

    let options = question
        .options()
        .iter()
        .map(|option| {
            let class = match answer {
                Some(_) if option == word => "option-btn correct-answer",
                Some(record) if option == record.selected() => "option-btn incorrect-selected",
                _ => "option-btn",
            };
            OptionVm {
                label: option.to_string(),
                class,
            }
        })
        .collect();

    let feedback = answer.map(|record| {
        if record.is_correct() {
            FeedbackVm {
                correct: true,
                text: "✅ ¡Correcto!".to_string(),
                class: "feedback-box correct",
            }
        } else {
            FeedbackVm {
                correct: false,
                text: format!("❌ Incorrecto, la respuesta correcta era: {word}"),
                class: "feedback-box incorrect",
            }
        }
    });

    PlayingVm {
        category: round.category().to_string(),
        score_label: format!("Puntuación: {}", round.score()),
        word: word.to_string(),
        image_src: question.item().image().resolve(images_base),
        placeholder_src: placeholder_image_url(word),
        options,
        answered: answer.is_some(),
        feedback,
    }
}

fn map_result(player: &str, result: &RoundResult) -> FinishedVm {
    FinishedVm {
        title: format!("🎉 ¡Felicitaciones {player}! 🎉"),
        score_label: format!("Tu puntuación es: {} / {}", result.score(), result.total()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engame_core::Catalog;
    use engame_core::model::QuizSettings;
    use std::sync::Arc;

    fn session() -> QuizSession {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let mut session = QuizSession::seeded(catalog, QuizSettings::default(), 4);
        session.finish_loading();
        session
    }

    fn playing(vm: QuizScreenVm) -> PlayingVm {
        match vm {
            QuizScreenVm::Playing(vm) => vm,
            other => panic!("expected playing screen, got {other:?}"),
        }
    }

    #[test]
    fn emoji_follows_category_name() {
        let name = |s: &str| CategoryName::parse(s).unwrap();
        assert_eq!(category_emoji(&name("Colores")), "🎨");
        assert_eq!(category_emoji(&name("Animales")), "🐾");
        assert_eq!(category_emoji(&name("Comida")), "🍎");
        assert_eq!(category_emoji(&name("Objetos")), "🎯");
    }

    #[test]
    fn picker_lists_catalog_in_order() {
        let mut session = session();
        session.submit_name("Ana").unwrap();
        let QuizScreenVm::Categories(vm) = map_quiz_screen(&session) else {
            panic!("expected category picker");
        };
        assert_eq!(vm.greeting, "✨ Bienvenido Ana ✨");
        let labels: Vec<_> = vm.categories.iter().map(|c| c.label.as_str()).collect();
        let names: Vec<_> = session.catalog().names().map(|n| n.as_str()).collect();
        assert_eq!(labels, names);
        assert!(vm.categories.iter().any(|c| c.class == "cat-btn centered" && c.emoji == "🎨"));
    }

    #[test]
    fn unanswered_question_has_plain_options() {
        let mut session = session();
        session.submit_name("Ana").unwrap();
        session
            .pick_category(&CategoryName::parse("Animales").unwrap())
            .unwrap();
        let vm = playing(map_quiz_screen(&session));

        assert_eq!(vm.category, "Animales");
        assert_eq!(vm.score_label, "Puntuación: 0");
        assert_eq!(vm.options.len(), 4);
        assert!(vm.options.iter().all(|o| o.class == "option-btn"));
        assert!(!vm.answered);
        assert!(vm.feedback.is_none());
        assert_eq!(vm.image_src, format!("/images/{}.png", vm.word));
        assert!(vm.placeholder_src.ends_with(&format!("text={}", vm.word)));
    }

    #[test]
    fn wrong_answer_marks_both_buttons() {
        let mut session = session();
        session.submit_name("Ana").unwrap();
        session
            .pick_category(&CategoryName::parse("Animales").unwrap())
            .unwrap();
        let before = playing(map_quiz_screen(&session));
        let wrong = before
            .options
            .iter()
            .find(|o| o.label != before.word)
            .unwrap()
            .label
            .clone();
        session.answer(&wrong).unwrap();

        let vm = playing(map_quiz_screen(&session));
        assert!(vm.answered);
        for option in &vm.options {
            let expected = if option.label == vm.word {
                "option-btn correct-answer"
            } else if option.label == wrong {
                "option-btn incorrect-selected"
            } else {
                "option-btn"
            };
            assert_eq!(option.class, expected);
        }
        let feedback = vm.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(
            feedback.text,
            format!("❌ Incorrecto, la respuesta correcta era: {}", vm.word)
        );
    }

    #[test]
    fn correct_answer_shows_success() {
        let mut session = session();
        session.submit_name("Ana").unwrap();
        session
            .pick_category(&CategoryName::parse("Comida").unwrap())
            .unwrap();
        let word = playing(map_quiz_screen(&session)).word;
        session.answer(&word).unwrap();

        let vm = playing(map_quiz_screen(&session));
        assert_eq!(vm.score_label, "Puntuación: 1");
        assert_eq!(vm.feedback.unwrap().class, "feedback-box correct");
    }

    #[test]
    fn finished_screen_shows_tally() {
        let mut session = session();
        session.submit_name("Ana").unwrap();
        session
            .pick_category(&CategoryName::parse("Colores").unwrap())
            .unwrap();
        while let Some(round) = session.round() {
            let word = round.question().word().to_string();
            session.answer(&word).unwrap();
            session.advance().unwrap();
        }

        let QuizScreenVm::Finished(vm) = map_quiz_screen(&session) else {
            panic!("expected finished screen");
        };
        let total = session.result().unwrap().total();
        assert_eq!(vm.title, "🎉 ¡Felicitaciones Ana! 🎉");
        assert_eq!(vm.score_label, format!("Tu puntuación es: {total} / {total}"));
    }
}
