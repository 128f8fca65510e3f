//! Load failure classification.
//!
//! # Responsibilities
//! - Decide whether a reported load failure is real or spurious
//! - Discard sub-resource failures (the document itself is fine)
//! - Discard superseded navigations (a newer load replaced the pending one)
//!
//! # Design Decisions
//! - Rapid successive loads (e.g. toggling environments quickly) abort the
//!   in-flight navigation; counting those as failures would trigger false
//!   failover, so aborted navigations are ignorable
//! - Only main-frame failures drive the state machine

/// Chromium-style net error emitted when a navigation is aborted because a
/// newer navigation superseded it.
pub const ERR_ABORTED: i32 = -3;

/// Outcome of classifying a reported load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Sub-resource failure or superseded navigation; no state change.
    Ignorable,
    /// Main-document connectivity/DNS/TLS/HTTP failure; drives failover.
    Real,
}

/// Classifies reported load failures.
#[derive(Debug, Clone)]
pub struct FailureClassifier {
    /// Error codes meaning "navigation superseded", not "endpoint down".
    superseded_codes: Vec<i32>,
}

impl Default for FailureClassifier {
    fn default() -> Self {
        Self {
            superseded_codes: vec![ERR_ABORTED],
        }
    }
}

impl FailureClassifier {
    pub fn new(superseded_codes: Vec<i32>) -> Self {
        Self { superseded_codes }
    }

    pub fn classify(&self, error_code: i32, is_main_frame: bool) -> Classification {
        if !is_main_frame || self.superseded_codes.contains(&error_code) {
            Classification::Ignorable
        } else {
            Classification::Real
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -105 ERR_NAME_NOT_RESOLVED, -118 ERR_CONNECTION_TIMED_OUT
    const DNS_FAILURE: i32 = -105;
    const TIMEOUT: i32 = -118;

    #[test]
    fn sub_frame_failures_are_ignorable() {
        let classifier = FailureClassifier::default();
        assert_eq!(
            classifier.classify(DNS_FAILURE, false),
            Classification::Ignorable
        );
        assert_eq!(
            classifier.classify(ERR_ABORTED, false),
            Classification::Ignorable
        );
    }

    #[test]
    fn superseded_navigation_is_ignorable_even_on_main_frame() {
        let classifier = FailureClassifier::default();
        assert_eq!(
            classifier.classify(ERR_ABORTED, true),
            Classification::Ignorable
        );
    }

    #[test]
    fn main_frame_connectivity_failures_are_real() {
        let classifier = FailureClassifier::default();
        assert_eq!(classifier.classify(DNS_FAILURE, true), Classification::Real);
        assert_eq!(classifier.classify(TIMEOUT, true), Classification::Real);
    }
}
