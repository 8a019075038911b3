//! Password composition policies.
//!
//! A [`PasswordPolicy`] declares minimum counts of uppercase, numeric and
//! special characters plus length bounds for a candidate password. Checking
//! is independent of the hashing pipeline and can run on a raw password
//! before it is ever hashed.

use thiserror::Error;

/// The first composition rule a password violated, with the offending
/// count and the policy threshold.
///
/// Rules are checked in a fixed order - numeric, special, uppercase,
/// minimum length, maximum length - so only the first failure is reported
/// even when several rules are violated at once.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    /// Fewer numeric (`0-9`) characters than the policy requires.
    #[error("the password must contain at least {required} numeric characters (found {found})")]
    Numeric {
        /// Numeric characters present in the password.
        found: usize,
        /// Minimum required by the policy.
        required: usize,
    },

    /// Fewer special (non-alphanumeric) characters than the policy requires.
    #[error("the password must contain at least {required} special characters (found {found})")]
    Special {
        /// Special characters present in the password.
        found: usize,
        /// Minimum required by the policy.
        required: usize,
    },

    /// Fewer uppercase (`A-Z`) characters than the policy requires.
    #[error("the password must contain at least {required} uppercase characters (found {found})")]
    Uppercase {
        /// Uppercase characters present in the password.
        found: usize,
        /// Minimum required by the policy.
        required: usize,
    },

    /// The password is shorter than the policy's minimum length.
    #[error("the password must be at least {minimum} characters long (found {length})")]
    MinLength {
        /// Length of the password in characters.
        length: usize,
        /// Minimum length required by the policy.
        minimum: usize,
    },

    /// The password is longer than the policy's maximum length.
    #[error("the password must be at most {maximum} characters long (found {length})")]
    MaxLength {
        /// Length of the password in characters.
        length: usize,
        /// Maximum length allowed by the policy.
        maximum: usize,
    },
}

/// Declarative composition rules for candidate passwords.
///
/// The character classes are the ASCII classes `[0-9]`, `[^0-9a-zA-Z]` and
/// `[A-Z]`; any character outside ASCII letters and digits counts as
/// special. Lengths are measured in characters, not bytes.
///
/// # Example
///
/// ```rust
/// use pwkit::{PasswordPolicy, PolicyViolation};
///
/// let policy = PasswordPolicy::new(1, 1, 1, 6, usize::MAX);
///
/// assert!(policy.check("Abcdef1!").is_ok());
/// assert_eq!(
///     policy.first_violation("Ab1!"),
///     Some(PolicyViolation::MinLength { length: 4, minimum: 6 }),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum number of uppercase characters.
    pub min_uppercase: usize,
    /// Minimum number of special (non-alphanumeric) characters.
    pub min_special: usize,
    /// Minimum number of numeric characters.
    pub min_numeric: usize,
    /// Minimum password length in characters.
    pub min_length: usize,
    /// Maximum password length in characters.
    pub max_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy from explicit thresholds.
    #[must_use]
    pub const fn new(
        min_uppercase: usize,
        min_special: usize,
        min_numeric: usize,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self {
            min_uppercase,
            min_special,
            min_numeric,
            min_length,
            max_length,
        }
    }

    /// Checks `password` against this policy.
    ///
    /// Scans the password once, then tests the rules in fixed order:
    /// numeric count, special count, uppercase count, minimum length,
    /// maximum length.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`PolicyViolation`].
    pub fn check(&self, password: &str) -> Result<(), PolicyViolation> {
        let mut numeric = 0;
        let mut special = 0;
        let mut uppercase = 0;
        let mut length = 0;

        for ch in password.chars() {
            length += 1;
            if ch.is_ascii_digit() {
                numeric += 1;
            }
            if !ch.is_ascii_alphanumeric() {
                special += 1;
            }
            if ch.is_ascii_uppercase() {
                uppercase += 1;
            }
        }

        if numeric < self.min_numeric {
            return Err(PolicyViolation::Numeric {
                found: numeric,
                required: self.min_numeric,
            });
        }

        if special < self.min_special {
            return Err(PolicyViolation::Special {
                found: special,
                required: self.min_special,
            });
        }

        if uppercase < self.min_uppercase {
            return Err(PolicyViolation::Uppercase {
                found: uppercase,
                required: self.min_uppercase,
            });
        }

        if length < self.min_length {
            return Err(PolicyViolation::MinLength {
                length,
                minimum: self.min_length,
            });
        }

        if length > self.max_length {
            return Err(PolicyViolation::MaxLength {
                length,
                maximum: self.max_length,
            });
        }

        Ok(())
    }

    /// Non-throwing form of [`check`](Self::check): `true` if the password
    /// complies with the policy.
    #[must_use]
    pub fn is_compliant(&self, password: &str) -> bool {
        self.check(password).is_ok()
    }

    /// Returns the first violated rule, or `None` if the password complies.
    #[must_use]
    pub fn first_violation(&self, password: &str) -> Option<PolicyViolation> {
        self.check(password).err()
    }
}

impl Default for PasswordPolicy {
    /// One uppercase, one special, two numeric characters and at least six
    /// characters overall, with no upper length bound.
    fn default() -> Self {
        Self::new(1, 1, 2, 6, usize::MAX)
    }
}
