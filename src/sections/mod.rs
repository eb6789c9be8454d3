//! Password evaluation sections
//!
//! Each section checks one criterion of the discrete rating.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

pub type Section = fn(&str) -> SectionResult;

/// All sections in evaluation order.
pub const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
];
