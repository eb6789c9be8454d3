//! Password strength evaluator - main evaluation logic.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::CharacterClass;
use crate::sections::SECTIONS;
use crate::types::{PasswordEvaluation, PasswordRating, PasswordScore};

/// Computes the continuous 0-100 score.
///
/// - length: 4 points per character, up to 40
/// - variety: 15 points per character class present, up to 60
/// - uniqueness: 2 points per distinct character, up to 20
///
/// The total is clamped to 100. An empty password scores 0.
pub fn score(password: &str) -> PasswordScore {
    let len = password.chars().count() as i64;
    let mut total = (len * 4).min(40);

    let classes = CharacterClass::ALL
        .into_iter()
        .filter(|class| class.present_in(password))
        .count() as i64;
    total += classes * 15;

    let unique: HashSet<char> = password.chars().collect();
    total += (unique.len() as i64 * 2).min(20);

    PasswordScore::new(total)
}

/// Computes the discrete rating: one point per satisfied section
/// (length of at least 12, uppercase, lowercase, digit, symbol).
pub fn rate(password: &str) -> PasswordRating {
    let passed = SECTIONS
        .iter()
        .filter(|(_, section)| section(password).is_none())
        .count();
    PasswordRating::from_passed(passed)
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` containing score, rating and reasons.
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let pwd = password.expose_secret();
    let mut reasons = Vec::new();
    let mut passed = 0;

    for (_section_name, section_fn) in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(|t| t.is_cancelled()) {
                reasons.push("Evaluation cancelled".to_string());
                return PasswordEvaluation {
                    score: None,
                    rating: None,
                    reasons,
                };
            }
        }

        match section_fn(pwd) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("Section {} failed", _section_name);
                reasons.push(reason);
            }
            None => passed += 1,
        }
    }

    let score = score(pwd);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: score {}, {} of {} sections passed",
        score,
        passed,
        SECTIONS.len()
    );

    PasswordEvaluation {
        score: Some(score),
        rating: Some(PasswordRating::from_passed(passed)),
        reasons,
    }
}

/// Async version that sends evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;

    fn evaluate(pwd: &str) -> PasswordEvaluation {
        let pwd = SecretString::new(pwd.to_string().into());

        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(&pwd, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(&pwd);

        evaluation
    }

    #[test]
    fn test_score_empty_is_minimum() {
        assert_eq!(score(""), PasswordScore::MIN);
        assert_eq!(score("").strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_score_repeated_lowercase() {
        // 40 for length, 15 for lowercase, 2 for one unique char
        assert_eq!(score("aaaaaaaaaaaa").value(), 57);
        assert_eq!(score("aaaaaaaaaaaa").strength(), PasswordStrength::Medium);
    }

    #[test]
    fn test_score_short_password() {
        // 3*4 + 15 + 3*2
        assert_eq!(score("abc").value(), 33);
    }

    #[test]
    fn test_score_all_classes_caps_at_100() {
        // 40 + 60 + 20 = 120 before clamping
        assert_eq!(score("Ab1!Cd2@Ef3#").value(), 100);
        assert_eq!(score("Ab1!Cd2@Ef3#").strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_score_uniqueness_capped() {
        // 10 distinct lowercase letters: 40 + 15 + 20
        assert_eq!(score("abcdefghij").value(), 75);
        // 26 distinct: still capped at 20 for uniqueness
        assert_eq!(score("abcdefghijklmnopqrstuvwxyz").value(), 75);
    }

    #[test]
    fn test_score_is_deterministic() {
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            assert_eq!(score(pwd), score(pwd));
            assert_eq!(rate(pwd), rate(pwd));
        }
    }

    #[test]
    fn test_rate_empty_is_minimum() {
        assert_eq!(rate(""), PasswordRating::VeryWeak);
    }

    #[test]
    fn test_rate_levels() {
        assert_eq!(rate("abc"), PasswordRating::VeryWeak);
        assert_eq!(rate("abc123"), PasswordRating::Weak);
        assert_eq!(rate("Abc123"), PasswordRating::Medium);
        assert_eq!(rate("Abc123!"), PasswordRating::Strong);
        assert_eq!(rate("aaaaaaaaaaaaB1"), PasswordRating::Strong);
        assert_eq!(rate("Abcdefgh123!"), PasswordRating::VeryStrong);
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        let evaluation = evaluate("abc");

        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.rating, Some(PasswordRating::VeryWeak));
        assert_eq!(evaluation.reasons.len(), 4);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate("VeryStrongPassword123!@#");

        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert_eq!(evaluation.score.unwrap().value(), 100);
        assert_eq!(evaluation.rating, Some(PasswordRating::VeryStrong));
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_evaluate_reports_missing_classes() {
        let evaluation = evaluate("lowercaseonly");

        assert_eq!(evaluation.rating, Some(PasswordRating::Weak));
        assert!(evaluation.reasons.iter().any(|r| r.contains("uppercase")));
        assert!(evaluation.reasons.iter().any(|r| r.contains("numbers")));
        assert!(evaluation.reasons.iter().any(|r| r.contains("special")));
        assert!(!evaluation.reasons.iter().any(|r| r.contains("at least")));
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");

        assert_eq!(evaluation.score, Some(PasswordScore::MIN));
        assert_eq!(evaluation.rating, Some(PasswordRating::VeryWeak));
        assert_eq!(evaluation.reasons.len(), 5);
    }

    #[test]
    fn test_evaluate_matches_pure_functions() {
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let evaluation = evaluate(pwd);
            assert_eq!(evaluation.score, Some(score(pwd)));
            assert_eq!(evaluation.rating, Some(rate(pwd)));
        }
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::types::PasswordStrength;

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        let evaluation = evaluate_password_strength(&pwd, Some(token));

        assert_eq!(evaluation.strength(), PasswordStrength::NotEvaluated);
        assert!(evaluation.score.is_none());
        assert!(evaluation.rating.is_none());
        assert!(!evaluation.reasons.is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        let evaluation = evaluate_password_strength(&pwd, Some(token));

        assert_ne!(evaluation.strength(), PasswordStrength::NotEvaluated);
        assert_eq!(evaluation.rating, Some(PasswordRating::VeryStrong));
    }

    #[tokio::test]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.score.is_some());
    }
}
