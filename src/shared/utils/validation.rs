use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Reject empty or whitespace-only required fields
    pub fn require(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::MissingFields(field.to_string()));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if email.trim().is_empty() {
            return Err(AppError::MissingFields("email".to_string()));
        }

        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
        if !re.is_match(email.trim()) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank_fields() {
        assert!(Validator::require("customer_id", "cust_1").is_ok());
        assert!(matches!(
            Validator::require("customer_id", "   "),
            Err(AppError::MissingFields(_))
        ));
    }

    #[test]
    fn email_validation() {
        assert!(Validator::validate_email("alice@example.com").is_ok());
        assert!(matches!(
            Validator::validate_email(""),
            Err(AppError::MissingFields(_))
        ));
        assert!(matches!(
            Validator::validate_email("not-an-email"),
            Err(AppError::ValidationError(_))
        ));
    }
}
