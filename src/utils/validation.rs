use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid_value(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid_value(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(ConvertError::ConfigError {
            message: format!("{}: at least one entry is required", field_name),
        });
    }
    Ok(())
}

fn invalid_value(field_name: &str, value: &str, reason: &str) -> ConvertError {
    ConvertError::ConfigError {
        message: format!("Invalid value for {} ({:?}): {}", field_name, value, reason),
    }
}
