//! The check contract every rule implements

use crate::foundation::Rejection;

// ============================================================================
// CHECK TRAIT
// ============================================================================

/// A stateless rule applied to a single field value.
///
/// The trait is generic over the input type: string rules take `str`,
/// comparison rules take the operand type. All rules return
/// `Result<(), Rejection>` so the binding layer can forward the error code
/// and message args to the host framework's error collector.
///
/// Rules hold only their configuration (bounds, expected value, pattern),
/// never the value under test — one rule value may be reused across calls
/// and threads.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::foundation::{Check, Rejection};
///
/// struct NotBlank;
///
/// impl Check for NotBlank {
///     type Input = str;
///
///     fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
///         if input.trim().is_empty() {
///             Err(Rejection::new("required", "value must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Check {
    /// The type of value being checked.
    ///
    /// `?Sized` so rules can take `str` directly.
    type Input: ?Sized;

    /// Checks the value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value passes
    /// * `Err(Rejection)` carrying the default error code and message
    fn check(&self, input: &Self::Input) -> Result<(), Rejection>;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysPasses;

    impl Check for AlwaysPasses {
        type Input = str;

        fn check(&self, _input: &Self::Input) -> Result<(), Rejection> {
            Ok(())
        }
    }

    #[test]
    fn check_trait_object_safe() {
        let rule: &dyn Check<Input = str> = &AlwaysPasses;
        assert!(rule.check("anything").is_ok());
    }
}
