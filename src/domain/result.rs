//! Result type alias for Quire

use super::errors::QuireError;

/// Result type alias for Quire operations
///
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, QuireError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::QuireError;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(QuireError::Export("test error".to_string()));
        assert!(result.is_err());
    }
}
