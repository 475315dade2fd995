//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Check `value` against an inclusive range
pub(crate) fn check_range<T>(field: &str, value: T, min: T, max: T, hint: &str) -> ConfigResult<()>
where
    T: PartialOrd + ToString,
{
    if value < min || value > max {
        return Err(super::error::ConfigError::out_of_range(
            field, value, min, max, hint,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_check_range_bounds_are_inclusive() {
        assert!(check_range("passes", 1usize, 1, 16, "").is_ok());
        assert!(check_range("passes", 16usize, 1, 16, "").is_ok());
        assert!(matches!(
            check_range("passes", 17usize, 1, 16, "too many"),
            Err(ConfigError::Range { .. })
        ));
    }
}
