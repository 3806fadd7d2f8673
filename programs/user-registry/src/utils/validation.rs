use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LEN;
use crate::errors::RegistryError;

/// Validate a user name against the record layout bound
pub fn validate_name(name: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, RegistryError::NameTooLong);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_empty_name() {
        assert!(validate_name("").is_ok());
    }

    #[test]
    fn accepts_name_at_limit() {
        assert!(validate_name("abcdefghij").is_ok());
    }

    #[test]
    fn rejects_name_over_limit() {
        assert!(validate_name("abcdefghijk").is_err());
    }

    #[test]
    fn limit_is_bytes_not_chars() {
        // Six two-byte characters is twelve bytes.
        assert!(validate_name("éééééé").is_err());
        assert!(validate_name("ééééé").is_ok());
    }
}
