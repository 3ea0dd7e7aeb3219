//! Client-side file validation: runs before any network call.
//!
//! Messages are the original user-facing strings surfaced via a blocking
//! alert; they are part of the documented behavior.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Upload size cap: 10 MiB.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NotAnImage,
    TooLarge,
}

impl ValidationError {
    /// User-facing alert text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotAnImage => "Mohon pilih file gambar",
            Self::TooLarge => "Ukuran file harus kurang dari 10MB",
        }
    }
}

/// Accept only `image/*` media types up to [`MAX_IMAGE_BYTES`].
///
/// # Errors
///
/// Returns the rejection reason with its alert message.
pub fn validate_image(mime: &str, size: u64) -> Result<(), ValidationError> {
    if !mime.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}
