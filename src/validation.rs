use crate::error::{FieldError, ValidationErrors};
use crate::types::BackupFormValues;

/// Longest backup name the panel accepts, in UTF-16 code units (the length
/// a browser reports for the field).
pub const NAME_MAX_LEN: usize = 255;

pub const FIELD_NAME: &str = "name";
pub const FIELD_IGNORED: &str = "ignored";

/// Validates the create-backup form.
///
/// Only the name length is restricted. The ignore list is free text and is
/// interpreted by the server, so any value passes.
pub fn validate_backup_form(values: &BackupFormValues) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    let name_len = values.name.encode_utf16().count();
    if name_len > NAME_MAX_LEN {
        errors.push(FieldError {
            field: FIELD_NAME,
            message: format!("name must be at most {} characters", NAME_MAX_LEN),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
