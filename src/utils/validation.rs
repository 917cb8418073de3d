use validator::ValidationError;

/// Rejects strings made only of whitespace.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_blank() {
        assert!(non_blank(" \t\n").is_err());
        assert!(non_blank("").is_err());
        assert!(non_blank(" bank ").is_ok());
    }
}
