//! Character variety sections - one per character class.

use super::SectionResult;
use crate::charset::CharacterClass;

fn class_section(password: &str, class: CharacterClass) -> SectionResult {
    if class.present_in(password) {
        return None;
    }
    Some(format!("Missing: {}", class.label()))
}

pub fn uppercase_section(password: &str) -> SectionResult {
    class_section(password, CharacterClass::Uppercase)
}

pub fn lowercase_section(password: &str) -> SectionResult {
    class_section(password, CharacterClass::Lowercase)
}

pub fn digit_section(password: &str) -> SectionResult {
    class_section(password, CharacterClass::Digits)
}

/// Anything outside `[A-Za-z0-9]` counts as a symbol.
pub fn symbol_section(password: &str) -> SectionResult {
    class_section(password, CharacterClass::Special)
}
