//! Presence rules for the display string of a field

use crate::codes;
use crate::foundation::Rejection;

crate::check! {
    /// The string must contain at least one character.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    reject(input) { Rejection::new(codes::REQUIRED, "value must not be empty") }
    fn not_empty();
}

crate::check! {
    /// The string must contain at least one non-whitespace character.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    reject(input) { Rejection::new(codes::REQUIRED, "value must not be blank") }
    fn not_blank();
}

crate::check! {
    /// The trimmed string must differ from a placeholder sentinel.
    ///
    /// Select widgets often submit a sentinel option (see
    /// [`codes::PLEASE_SELECT`]) when the user never made a choice; this
    /// rule treats that sentinel the same as a missing value.
    pub NotPlaceholder { placeholder: String } for str;
    rule(self, input) { input.trim() != self.placeholder }
    reject(self, input) {
        Rejection::new(codes::REQUIRED, "a value must be selected")
            .with_arg(self.placeholder.clone())
    }
    new(placeholder: impl Into<String>) { Self { placeholder: placeholder.into() } }
    fn not_placeholder(placeholder: impl Into<String>);
}

// ============================================================================
// TESTS
// ============================================================================
