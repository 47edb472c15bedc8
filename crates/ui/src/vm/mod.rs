mod intent;
mod quiz_vm;

pub use intent::{QuizIntent, apply_intent};
pub use quiz_vm::{
    CategoryButtonVm, CategoryPickerVm, FeedbackVm, FinishedVm, OptionVm, PlayingVm,
    QuizScreenVm, category_emoji, map_quiz_screen,
};
