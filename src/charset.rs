//! Character classes and their alphabets.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Default symbol alphabet for the special class.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Reduced symbol alphabet, friendlier to sites with restrictive input rules.
pub const SYMBOLS_SHORT: &str = "!@#$%^&*()_+";

/// A named set of characters eligible for inclusion in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    /// Fixed alphabet of this class. The special class returns the default
    /// symbol set; a config may override it.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SYMBOLS,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "numbers",
            CharacterClass::Special => "special characters",
        }
    }

    /// How strongly this class resists absorbing changes made to another
    /// class when counts are rebalanced.
    pub fn resistance(self) -> f64 {
        match self {
            CharacterClass::Uppercase => 2.0,
            CharacterClass::Lowercase => 1.0,
            CharacterClass::Digits => 1.5,
            CharacterClass::Special => 1.2,
        }
    }

    /// Whether `c` belongs to this class when analysing an arbitrary password.
    ///
    /// Special is anything outside `[A-Za-z0-9]`, regardless of the symbol
    /// alphabet used for generation.
    pub fn detect(self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Digits => c.is_ascii_digit(),
            CharacterClass::Special => !c.is_ascii_alphanumeric(),
        }
    }

    /// Whether any character of `password` belongs to this class.
    pub fn present_in(self, password: &str) -> bool {
        password.chars().any(|c| self.detect(c))
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A total map from every [`CharacterClass`] to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassMap<T>([T; 4]);

impl<T> ClassMap<T> {
    /// Builds a map in canonical class order.
    pub const fn new(uppercase: T, lowercase: T, digits: T, special: T) -> Self {
        Self([uppercase, lowercase, digits, special])
    }

    /// Builds a map by evaluating `f` for every class.
    pub fn from_fn(f: impl FnMut(CharacterClass) -> T) -> Self {
        Self(CharacterClass::ALL.map(f))
    }

    /// Iterates `(class, &value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterClass, &T)> {
        CharacterClass::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Copy> ClassMap<T> {
    /// Every class mapped to the same value.
    pub fn splat(value: T) -> Self {
        Self([value; 4])
    }
}

impl ClassMap<usize> {
    /// Sum of the values of `classes`.
    pub fn total_of(&self, classes: &[CharacterClass]) -> usize {
        classes.iter().map(|&class| self[class]).sum()
    }
}

impl<T> Index<CharacterClass> for ClassMap<T> {
    type Output = T;

    fn index(&self, class: CharacterClass) -> &T {
        &self.0[class.slot()]
    }
}

impl<T> IndexMut<CharacterClass> for ClassMap<T> {
    fn index_mut(&mut self, class: CharacterClass) -> &mut T {
        &mut self.0[class.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_are_disjoint() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                assert!(
                    !a.alphabet().chars().any(|c| b.alphabet().contains(c)),
                    "{} and {} share characters",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_detect_matches_alphabet() {
        for class in CharacterClass::ALL {
            assert!(class.alphabet().chars().all(|c| class.detect(c)));
        }
        assert!(SYMBOLS_SHORT.chars().all(|c| CharacterClass::Special.detect(c)));
    }

    #[test]
    fn test_detect_non_ascii_is_special() {
        assert!(CharacterClass::Special.detect('é'));
        assert!(!CharacterClass::Lowercase.detect('é'));
        assert!(CharacterClass::Special.detect(' '));
    }

    #[test]
    fn test_present_in() {
        assert!(CharacterClass::Digits.present_in("abc1"));
        assert!(!CharacterClass::Digits.present_in("abc"));
        assert!(!CharacterClass::Uppercase.present_in(""));
    }

    #[test]
    fn test_class_map_indexing() {
        let mut map = ClassMap::splat(0usize);
        map[CharacterClass::Digits] = 4;
        map[CharacterClass::Special] += 2;
        assert_eq!(map, ClassMap::new(0, 0, 4, 2));
        assert_eq!(map.total_of(&CharacterClass::ALL), 6);
        assert_eq!(map.total_of(&[CharacterClass::Digits]), 4);
    }

    #[test]
    fn test_class_map_from_fn() {
        let map = ClassMap::from_fn(|class| class.alphabet().len());
        assert_eq!(map[CharacterClass::Uppercase], 26);
        assert_eq!(map[CharacterClass::Digits], 10);
        let order: Vec<_> = map.iter().map(|(class, _)| class).collect();
        assert_eq!(order, CharacterClass::ALL);
    }
}
