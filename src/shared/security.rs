use crate::shared::error::DepvizError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum fixture file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists, is a regular file and is within the size limit
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            MAX_FILE_SIZE
        );
    }

    Ok(())
}

/// Validates a value that is about to become a single URL path segment
///
/// Rejects path separators, parent references and characters that would
/// change the meaning of the URL (fragment, query, userinfo).
pub fn validate_url_component(value: &str, component: &str) -> Result<()> {
    let reason = if value.contains('/') || value.contains('\\') {
        Some("contains path separators which are not allowed")
    } else if value.contains("..") {
        Some("contains '..' which is not allowed")
    } else if value.contains('#') || value.contains('?') || value.contains('@') {
        Some("contains URL-unsafe characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DepvizError::UnsafeUrlComponent {
            component: component.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}
