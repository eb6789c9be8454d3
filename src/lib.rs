//! Password generation and strength scoring library
//!
//! This library generates randomized passwords from configurable
//! character classes and estimates the strength of any password.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable generation and
//!   evaluation that report through a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DEFAULT_LENGTH`: Default password length used by
//!   [`GenerationConfig::from_env`] (default: `12`)
//! - `PWD_SYMBOLS`: Alphabet of the special character class
//!   (default: `!@#$%^&*()_+-=[]{}|;:,.<>?`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_gen::{generate, score, CharacterClass, GenerationConfig, Requirement};
//! use secrecy::ExposeSecret;
//!
//! let config = GenerationConfig::from_env()
//!     .expect("Invalid environment")
//!     .with_length(16)
//!     .with_requirement(Requirement::Counts)
//!     .with_required(CharacterClass::Digits, 4);
//!
//! let password = generate(&config).expect("Invalid configuration");
//!
//! let score = score(password.expose_secret());
//! println!("Score: {} ({})", score, score.strength());
//! ```

mod balance;
mod charset;
mod config;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use balance::{distribute, rebalance, MAX_REQUIRED};
pub use charset::{CharacterClass, ClassMap, DIGITS, LOWERCASE, SYMBOLS, SYMBOLS_SHORT, UPPERCASE};
pub use config::{
    get_default_length, get_symbols, ClassSetting, ConfigurationError, GenerationConfig,
    Requirement, DEFAULT_LENGTH, DEFAULT_REQUIRED,
};
pub use evaluator::{evaluate_password_strength, rate, score};
pub use generator::{generate, generate_with_rng};
pub use types::{PasswordEvaluation, PasswordRating, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;

#[cfg(feature = "async")]
pub use generator::generate_password_tx;
