//! Validation for user-supplied group dialog fields.
//!
//! Names travel to the group service verbatim, so the rules here are about
//! form usability, not service-side constraints: required fields and sane
//! lengths.

/// Maximum length for a group name.
pub const MAX_NAME_LENGTH: usize = 128;

/// Maximum length for a group description.
pub const MAX_DESCRIPTION_LENGTH: usize = 512;

/// Maximum length for a member username.
pub const MAX_USERNAME_LENGTH: usize = 128;

/// Validation errors for dialog fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooLong { field: &'static str, max: usize, actual: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty { field } => {
                write!(f, "{} is required", field)
            }
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} characters, max {})", field, actual, max)
            }
        }
    }
}

fn validate_field(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.len() > max {
        return Err(ValidationError::TooLong {
            field,
            max,
            actual: trimmed.len(),
        });
    }
    Ok(())
}

/// Validate a new group's name.
pub fn validate_group_name(name: &str) -> Result<(), ValidationError> {
    validate_field(name, "Name", MAX_NAME_LENGTH)
}

/// Validate a new group's description.
pub fn validate_group_description(description: &str) -> Result<(), ValidationError> {
    validate_field(description, "Description", MAX_DESCRIPTION_LENGTH)
}

/// Validate a username entered into the add-member dialog.
pub fn validate_member_name(name: &str) -> Result<(), ValidationError> {
    validate_field(name, "Username", MAX_USERNAME_LENGTH)
}
