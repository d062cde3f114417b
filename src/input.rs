//! Desktop input translation.
//!
//! The simulator delivers raw SDL key and mouse events. The pages only deal in
//! [`InputEvent`]s, so the window-specific part is limited to [`translate_key`]
//! (which works on key *names* and the modifier state) and the click mapping in
//! `main.rs`.
//!
//! # Key Map
//!
//! | Key                 | Event                               |
//! |---------------------|-------------------------------------|
//! | printable keys      | `Char` (shift and caps lock applied) |
//! | Space               | `Char(' ')`                         |
//! | Backspace           | `Backspace`                         |
//! | Return / Keypad Enter | `Submit`                          |
//! | Escape              | `Back`                              |
//! | F1                  | `ToggleDebug`                       |

use embedded_graphics::prelude::Point;

/// A page-level input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse button released at a display position.
    Click(Point),
    /// A printable character.
    Char(char),
    Backspace,
    /// Enter: submit the form or press the primary button.
    Submit,
    /// Escape: go back to the landing page.
    Back,
    /// F1: show or hide the debug page.
    ToggleDebug,
}

impl InputEvent {
    /// Whether an auto-repeated key may produce this event.
    ///
    /// Holding a key repeats typing only; buttons fire once per press.
    #[inline]
    pub const fn repeats(&self) -> bool {
        matches!(self, Self::Char(_) | Self::Backspace)
    }
}

/// US layout symbols with and without shift.
const SHIFTED_SYMBOLS: [(char, char); 21] = [
    ('1', '!'),
    ('2', '@'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '^'),
    ('7', '&'),
    ('8', '*'),
    ('9', '('),
    ('0', ')'),
    ('-', '_'),
    ('=', '+'),
    ('[', '{'),
    (']', '}'),
    ('\\', '|'),
    (';', ':'),
    ('\'', '"'),
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
    ('`', '~'),
];

/// Translate an SDL key name into an event.
///
/// Letters are upper case when exactly one of `shift` and `caps_lock` is set.
/// Symbols follow `shift` only.
pub fn translate_key(
    name: &str,
    shift: bool,
    caps_lock: bool,
) -> Option<InputEvent> {
    match name {
        "Backspace" => return Some(InputEvent::Backspace),
        "Return" | "Keypad Enter" => return Some(InputEvent::Submit),
        "Escape" => return Some(InputEvent::Back),
        "F1" => return Some(InputEvent::ToggleDebug),
        "Space" => return Some(InputEvent::Char(' ')),
        _ => {}
    }

    let mut chars = name.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };

    if c.is_ascii_alphabetic() {
        let c = if shift != caps_lock { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() };
        return Some(InputEvent::Char(c));
    }

    let (plain, shifted) = SHIFTED_SYMBOLS.iter().copied().find(|(plain, _)| *plain == c)?;
    Some(InputEvent::Char(if shift { shifted } else { plain }))
}

/// Color pick index (`0..4`) for the digit keys `1`-`4`.
#[inline]
pub const fn color_index(c: char) -> Option<usize> {
    match c {
        '1'..='4' => Some(c as usize - '1' as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_follow_shift() {
        assert_eq!(translate_key("A", false, false), Some(InputEvent::Char('a')));
        assert_eq!(translate_key("A", true, false), Some(InputEvent::Char('A')));
        assert_eq!(translate_key("z", true, false), Some(InputEvent::Char('Z')));
    }

    #[test]
    fn test_caps_lock_inverts_letters_only() {
        assert_eq!(translate_key("Q", false, true), Some(InputEvent::Char('Q')));
        assert_eq!(translate_key("Q", true, true), Some(InputEvent::Char('q')));
        assert_eq!(translate_key("1", false, true), Some(InputEvent::Char('1')));
    }

    #[test]
    fn test_symbols_follow_shift() {
        assert_eq!(translate_key("/", true, false), Some(InputEvent::Char('?')));
        assert_eq!(translate_key("/", false, false), Some(InputEvent::Char('/')));
        assert_eq!(translate_key("1", true, false), Some(InputEvent::Char('!')));
        assert_eq!(translate_key("'", false, false), Some(InputEvent::Char('\'')));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(translate_key("Space", true, false), Some(InputEvent::Char(' ')));
        assert_eq!(translate_key("Backspace", false, false), Some(InputEvent::Backspace));
        assert_eq!(translate_key("Return", false, false), Some(InputEvent::Submit));
        assert_eq!(translate_key("Keypad Enter", false, false), Some(InputEvent::Submit));
        assert_eq!(translate_key("Escape", false, false), Some(InputEvent::Back));
        assert_eq!(translate_key("F1", false, false), Some(InputEvent::ToggleDebug));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(translate_key("Left Shift", true, false), None);
        assert_eq!(translate_key("F2", false, false), None);
        assert_eq!(translate_key("", false, false), None);
    }

    #[test]
    fn test_repeat_only_for_typing() {
        assert!(InputEvent::Char('a').repeats());
        assert!(InputEvent::Backspace.repeats());
        assert!(!InputEvent::Submit.repeats());
        assert!(!InputEvent::Click(Point::zero()).repeats());
    }

    #[test]
    fn test_color_index() {
        assert_eq!(color_index('1'), Some(0));
        assert_eq!(color_index('4'), Some(3));
        assert_eq!(color_index('5'), None);
        assert_eq!(color_index('a'), None);
    }
}
