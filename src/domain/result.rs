//! Result type alias for FluxiMed
//!
//! This module provides a convenient Result type alias that uses DashboardError
//! as the error type.

use super::errors::DashboardError;

/// Result type alias for dashboard operations
///
/// # Examples
///
/// ```
/// use fluximed::domain::result::Result;
/// use fluximed::domain::errors::DashboardError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DashboardError::NotFound("clinica-99".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DashboardError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(DashboardError::Other("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
