//! Generation configuration
//!
//! Holds the per-class settings handed to the generator and loads
//! defaults from the environment.

use crate::charset::{CharacterClass, ClassMap, SYMBOLS};
use thiserror::Error;

/// Length used when nothing else is configured.
pub const DEFAULT_LENGTH: usize = 12;

/// Required count per class in the default configuration.
pub const DEFAULT_REQUIRED: usize = 3;

/// Environment variable overriding [`DEFAULT_LENGTH`].
pub const LENGTH_ENV: &str = "PWD_DEFAULT_LENGTH";

/// Environment variable overriding the special-class alphabet.
pub const SYMBOLS_ENV: &str = "PWD_SYMBOLS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Please select at least one character type")]
    NoClassEnabled,
    #[error("Password length must be at least 1")]
    ZeroLength,
    #[error("Total required characters ({required}) exceed password length ({length})")]
    RequiredExceedsLength { required: usize, length: usize },
    #[error("Symbol set must be non-empty and contain no letters or digits")]
    InvalidSymbols,
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnvValue { key: &'static str, value: String },
}

/// Per-class switch and minimum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSetting {
    pub enabled: bool,
    pub required: usize,
}

impl ClassSetting {
    pub fn on(required: usize) -> Self {
        Self { enabled: true, required }
    }

    pub fn off() -> Self {
        Self::default()
    }
}

/// Which per-class guarantee the generator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    /// Every position is drawn from the combined alphabet.
    #[default]
    None,
    /// Exactly one guaranteed character per enabled class.
    OnePerClass,
    /// `required` guaranteed characters per enabled class.
    Counts,
}

/// Everything the generator needs to produce one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassMap<ClassSetting>,
    /// Alphabet of the special class.
    pub symbols: String,
    pub requirement: Requirement,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassMap::splat(ClassSetting::on(DEFAULT_REQUIRED)),
            symbols: SYMBOLS.to_string(),
            requirement: Requirement::None,
        }
    }
}

impl GenerationConfig {
    /// Default configuration with length and symbols taken from the
    /// environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_DEFAULT_LENGTH`: positive integer (default: 12)
    /// - `PWD_SYMBOLS`: special-class alphabet (default: [`SYMBOLS`])
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidEnvValue`] if a variable is set
    /// but unusable.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let length = get_default_length()?;
        let symbols = get_symbols()?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Generation defaults loaded: length {}, {} symbols",
            length,
            symbols.chars().count()
        );

        Ok(Self {
            length,
            symbols,
            ..Self::default()
        })
    }

    /// Sets the total password length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Enables or disables `class`, keeping its required count.
    pub fn with_class(mut self, class: CharacterClass, enabled: bool) -> Self {
        self.classes[class].enabled = enabled;
        self
    }

    /// Sets how many characters of `class` are guaranteed in
    /// [`Requirement::Counts`] mode.
    pub fn with_required(mut self, class: CharacterClass, required: usize) -> Self {
        self.classes[class].required = required;
        self
    }

    /// Replaces the alphabet of the special class.
    pub fn with_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = symbols.into();
        self
    }

    /// Selects the per-class guarantee applied during generation.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Enabled classes in canonical order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        self.classes
            .iter()
            .filter(|(_, setting)| setting.enabled)
            .map(|(class, _)| class)
            .collect()
    }

    /// Alphabet used to draw characters of `class`, without duplicates.
    pub fn alphabet(&self, class: CharacterClass) -> Vec<char> {
        let source = match class {
            CharacterClass::Special => self.symbols.as_str(),
            other => other.alphabet(),
        };
        let mut chars: Vec<char> = Vec::with_capacity(source.len());
        for c in source.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        chars
    }

    /// Concatenated alphabets of all enabled classes.
    pub fn combined_alphabet(&self) -> Vec<char> {
        self.enabled_classes()
            .into_iter()
            .flat_map(|class| self.alphabet(class))
            .collect()
    }

    /// Number of guaranteed characters per class under the configured
    /// [`Requirement`]. Disabled classes always map to zero.
    pub fn guaranteed_counts(&self) -> ClassMap<usize> {
        ClassMap::from_fn(|class| {
            let setting = self.classes[class];
            if !setting.enabled {
                return 0;
            }
            match self.requirement {
                Requirement::None => 0,
                Requirement::OnePerClass => 1,
                Requirement::Counts => setting.required,
            }
        })
    }

    /// Checks that a password can be generated from this configuration.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let enabled = self.enabled_classes();
        if enabled.is_empty() {
            return Err(ConfigurationError::NoClassEnabled);
        }
        if self.length == 0 {
            return Err(ConfigurationError::ZeroLength);
        }
        if self.classes[CharacterClass::Special].enabled && !valid_symbols(&self.symbols) {
            return Err(ConfigurationError::InvalidSymbols);
        }

        let required = self.guaranteed_counts().total_of(&enabled);
        if required > self.length {
            return Err(ConfigurationError::RequiredExceedsLength {
                required,
                length: self.length,
            });
        }
        Ok(())
    }
}

fn valid_symbols(symbols: &str) -> bool {
    !symbols.is_empty() && symbols.chars().all(|c| CharacterClass::Special.detect(c))
}

fn read_env(key: &'static str) -> Result<Option<String>, ConfigurationError> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(raw)) => Err(ConfigurationError::InvalidEnvValue {
            key,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

/// Returns the default password length.
///
/// Priority:
/// 1. Environment variable `PWD_DEFAULT_LENGTH`
/// 2. [`DEFAULT_LENGTH`]
pub fn get_default_length() -> Result<usize, ConfigurationError> {
    match read_env(LENGTH_ENV)? {
        None => Ok(DEFAULT_LENGTH),
        Some(value) => match value.trim().parse::<usize>() {
            Ok(length) if length > 0 => Ok(length),
            _ => Err(ConfigurationError::InvalidEnvValue {
                key: LENGTH_ENV,
                value,
            }),
        },
    }
}

/// Returns the special-class alphabet.
///
/// Priority:
/// 1. Environment variable `PWD_SYMBOLS`
/// 2. [`SYMBOLS`]
pub fn get_symbols() -> Result<String, ConfigurationError> {
    match read_env(SYMBOLS_ENV)? {
        None => Ok(SYMBOLS.to_string()),
        Some(value) if valid_symbols(&value) => Ok(value),
        Some(value) => Err(ConfigurationError::InvalidEnvValue {
            key: SYMBOLS_ENV,
            value,
        }),
    }
}
