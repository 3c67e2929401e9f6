use validator::ValidationError;

pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "debug" | "info" | "warning" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

pub fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match format {
        "json" | "console" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_format")),
    }
}
