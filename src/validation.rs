//! Superficial well-formedness checks for collected profile fields.
//!
//! These are intentionally weak: the intake flow only guards against obvious
//! typos, it does not guarantee semantic correctness (an email that passes is
//! merely syntactically plausible).

/// The kinds of fields that get a format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Phone,
    Experience,
    /// Free-text fields (position, location, tech stack) — always valid here;
    /// the call site applies its own length check where needed.
    FreeText,
}

/// Check whether `value` is superficially well-formed for `kind`.
///
/// Pure and infallible: malformed numeric input yields `false`, never an
/// error.
pub fn validate(kind: FieldKind, value: &str) -> bool {
    match kind {
        FieldKind::Email => value.contains('@') && value.contains('.'),
        FieldKind::Phone => value.chars().any(|c| c.is_ascii_digit()),
        FieldKind::Experience => value
            .trim()
            .parse::<f64>()
            .is_ok_and(|years| (0.0..=50.0).contains(&years)),
        FieldKind::FreeText => true,
    }
}

/// Name check applied at the call site: trimmed length of at least 2.
pub fn is_plausible_name(value: &str) -> bool {
    value.trim().len() >= 2
}
