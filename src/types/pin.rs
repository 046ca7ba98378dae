//! PIN format validation

/// Number of digits in an account PIN
pub const PIN_LENGTH: usize = 5;

/// Check whether a candidate PIN is exactly five ASCII decimal digits
///
/// No trimming or normalization happens: `" 1234"` and `"١٢٣٤٥"` are both
/// rejected.
pub fn is_valid_pin(candidate: &str) -> bool {
    candidate.len() == PIN_LENGTH && candidate.bytes().all(|b| b.is_ascii_digit())
}
