use crate::quiz::card::QuizIntent;

/// Option hotkeys, in option order.
pub const OPTION_HOTKEYS: [char; 4] = ['a', 's', 'd', 'f'];
pub const HINT_KEY: char = 'h';
pub const REVEAL_KEY: char = 'r';

/// A key press, reduced to what the quiz cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Space,
    Other,
}

/// Where keyboard focus was when the key went down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFocus {
    Page,
    TextInput,
}

/// Map a key press to a quiz intent.
///
/// This is a pure lookup. Whether the intent is allowed right now is up to
/// `QuestionCard::accepts`.
#[must_use]
pub fn intent_for_key(key: KeyInput, focus: KeyFocus, option_count: usize) -> Option<QuizIntent> {
    if focus == KeyFocus::TextInput {
        return None;
    }
    match key {
        KeyInput::Enter | KeyInput::Space | KeyInput::Char(' ') => Some(QuizIntent::Next),
        KeyInput::Char(c) => {
            let c = c.to_ascii_lowercase();
            if let Some(index) = OPTION_HOTKEYS.iter().position(|hotkey| *hotkey == c) {
                return (index < option_count).then_some(QuizIntent::Select(index));
            }
            match c {
                HINT_KEY => Some(QuizIntent::Hint),
                REVEAL_KEY => Some(QuizIntent::Reveal),
                _ => None,
            }
        }
        KeyInput::Other => None,
    }
}

/// Uppercase hotkey label for the option at `index`, if it has one.
#[must_use]
pub fn hotkey_label(index: usize) -> Option<char> {
    OPTION_HOTKEYS
        .get(index)
        .map(char::to_ascii_uppercase)
}
