//! Length section - checks password minimum length.

use super::SectionResult;

/// Length at which a password earns the length criterion.
pub const MIN_LENGTH: usize = 12;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &str) -> SectionResult {
    if password.chars().count() < MIN_LENGTH {
        return Some(format!("Password should be at least {} characters", MIN_LENGTH));
    }
    None
}
