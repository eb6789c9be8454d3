//! Password generator - builds passwords from a [`GenerationConfig`].
//!
//! Characters are drawn from a cryptographically secure RNG. Both the
//! per-character draw and the final shuffle go through the same injected
//! rng, so callers (and tests) can substitute their own source.
//!
//! Drawing uniformly from the combined alphabet weights each class by its
//! alphabet size: with all classes on, lowercase and uppercase characters
//! are each picked more often than digits.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{ConfigurationError, GenerationConfig};

/// Generates a password using the operating system's CSPRNG.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if the configuration cannot produce a
/// password (see [`GenerationConfig::validate`]).
pub fn generate(config: &GenerationConfig) -> Result<SecretString, ConfigurationError> {
    generate_with_rng(config, &mut OsRng)
}

/// Generates a password drawing every random choice from `rng`.
pub fn generate_with_rng<R>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<SecretString, ConfigurationError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if let Err(e) = config.validate() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation rejected: {}", e);
        return Err(e);
    }

    let combined = config.combined_alphabet();
    let guaranteed = config.guaranteed_counts();
    let mut buffer: Vec<char> = Vec::with_capacity(config.length);

    for class in config.enabled_classes() {
        let alphabet = config.alphabet(class);
        for _ in 0..guaranteed[class] {
            buffer.push(draw(&alphabet, rng)?);
        }
    }
    let pinned = buffer.len();

    while buffer.len() < config.length {
        buffer.push(draw(&combined, rng)?);
    }

    if pinned > 0 {
        buffer.shuffle(rng);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password: {} chars, {} guaranteed, alphabet of {}",
        buffer.len(),
        pinned,
        combined.len()
    );

    let password: String = buffer.into_iter().collect();
    Ok(SecretString::new(password.into()))
}

/// Picks one character uniformly from `alphabet`.
fn draw<R>(alphabet: &[char], rng: &mut R) -> Result<char, ConfigurationError>
where
    R: Rng + ?Sized,
{
    // Validation rules out empty alphabets for enabled classes; only the
    // symbol set can be emptied by the caller.
    alphabet
        .choose(rng)
        .copied()
        .ok_or(ConfigurationError::InvalidSymbols)
}

/// Async version that sends the generated password via channel.
///
/// Waits a short debounce first so rapid settings changes only produce
/// one password; nothing is sent if `token` is cancelled meanwhile.
#[cfg(feature = "async")]
pub async fn generate_password_tx(
    config: GenerationConfig,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, ConfigurationError>>,
) {
    use std::time::Duration;

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password generation cancelled");
        return;
    }

    let result = generate(&config);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", _e);
    }
}
