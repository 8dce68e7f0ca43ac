//! Per-question interaction: the card state machine and its keyboard bindings.

mod card;
mod keymap;

pub use card::{CardEffect, OptionStatus, QuestionCard, QuizIntent, Verdict};
pub use keymap::{
    HINT_KEY, KeyFocus, KeyInput, OPTION_HOTKEYS, REVEAL_KEY, hotkey_label, intent_for_key,
};
