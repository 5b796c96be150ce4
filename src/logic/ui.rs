//! UI state transition logic
//!
//! Pure functions for UI timing and cycling.

/// How long a toast stays on screen, in milliseconds
pub const TOAST_DURATION_MS: u128 = 2500;

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use photodeck::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(!should_dismiss_toast(2500));
/// assert!(should_dismiss_toast(2501));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms > TOAST_DURATION_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_boundary() {
        assert!(!should_dismiss_toast(TOAST_DURATION_MS - 1));
        assert!(!should_dismiss_toast(TOAST_DURATION_MS));
        assert!(should_dismiss_toast(TOAST_DURATION_MS + 1));
    }
}
