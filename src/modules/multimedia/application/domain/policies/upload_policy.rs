//
// ──────────────────────────────────────────────────────────
// Upload policy
// ──────────────────────────────────────────────────────────
// Image-only uploads for project screenshots, certification badges, and
// the avatar. Size is capped before anything touches storage.
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadPolicyViolation {
    #[error("unsupported content type: {0}")]
    UnsupportedType(String),

    #[error("file too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    max_bytes: usize,
}

impl UploadPolicy {
    pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// File extension for an allowed image content type.
    pub fn extension_for(content_type: &str) -> Option<&'static str> {
        match content_type {
            "image/png" => Some("png"),
            "image/jpeg" => Some("jpg"),
            "image/webp" => Some("webp"),
            "image/gif" => Some("gif"),
            _ => None,
        }
    }

    /// Returns the target extension, or the violation that blocks the
    /// upload.
    pub fn check(
        &self,
        content_type: &str,
        size: usize,
    ) -> Result<&'static str, UploadPolicyViolation> {
        let ext = Self::extension_for(content_type)
            .ok_or_else(|| UploadPolicyViolation::UnsupportedType(content_type.to_string()))?;

        if size > self.max_bytes {
            return Err(UploadPolicyViolation::TooLarge {
                size,
                max: self.max_bytes,
            });
        }

        Ok(ext)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_BYTES)
    }
}
