//! Error types for grid generation and argument handling.

/// Error type for all fallible operations in the calgrid crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Month number outside 1..=12.
    #[error("invalid month: {month} (must be 1-12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// Previous-month arithmetic was asked to step back from month 0.
    #[error("cannot compute the month before month 0")]
    ZeroMonth,

    /// Year outside the accepted range, or a month step that would leave it.
    #[error("invalid year: {year} (must be {min}-{max})")]
    InvalidYear {
        /// The rejected year.
        year: i32,
        /// Smallest accepted year.
        min: i32,
        /// Largest accepted year.
        max: i32,
    },

    /// Unparseable or inconsistent command-line input.
    #[error("{0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = GridError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1-12)");
    }

    #[test]
    fn error_zero_month() {
        assert_eq!(
            GridError::ZeroMonth.to_string(),
            "cannot compute the month before month 0"
        );
    }

    #[test]
    fn error_invalid_year() {
        let err = GridError::InvalidYear {
            year: 0,
            min: 1,
            max: 9999,
        };
        assert_eq!(err.to_string(), "invalid year: 0 (must be 1-9999)");
    }

    #[test]
    fn error_invalid_argument_is_verbatim() {
        let err = GridError::InvalidArgument("Invalid argument: foo".to_string());
        assert_eq!(err.to_string(), "Invalid argument: foo");
    }

    #[test]
    fn error_is_std_error_and_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<GridError>();
    }
}
