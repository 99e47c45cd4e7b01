use crate::utils::error::{Result, SvgstoreError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(SvgstoreError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.to_string_lossy().contains('\0') {
        return Err(SvgstoreError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_name(field_name: &str, path: &Path) -> Result<()> {
    if path.file_name().is_none() {
        return Err(SvgstoreError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "Path does not name a file".to_string(),
        });
    }
    Ok(())
}
