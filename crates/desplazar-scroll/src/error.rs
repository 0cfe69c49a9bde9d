//! Engine error types.

use thiserror::Error;

/// Input-validation errors for the scroll container's setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrollError {
    /// Negative component passed to the auto-scroll margin setter.
    #[error("auto-scroll margin components must be non-negative, got {width}x{height}")]
    NegativeMargin {
        /// Rejected width
        width: i32,
        /// Rejected height
        height: i32,
    },
    /// Negative component passed to the auto-scroll minimum-size setter.
    #[error("auto-scroll minimum size components must be non-negative, got {width}x{height}")]
    NegativeMinSize {
        /// Rejected width
        width: i32,
        /// Rejected height
        height: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScrollError::NegativeMargin {
            width: -3,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "auto-scroll margin components must be non-negative, got -3x4"
        );
    }
}
