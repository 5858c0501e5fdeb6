// =============================================================================
// COMPLAINT ROUTING
// =============================================================================

/// Address every drafted complaint is sent from
pub const SENDER_ADDRESS: &str = "shivamkillarikar007@gmail.com";

/// Address every drafted complaint is delivered to
pub const RECIPIENT_ADDRESS: &str = "shivamkillarikar22@gmail.com";

/// Subject used when the drafted body carries no `Subject:` line
pub const FALLBACK_SUBJECT: &str = "Citizen Query";

// =============================================================================
// ATTACHMENTS
// =============================================================================

/// MIME type declared for every attachment, whatever was uploaded
pub const ATTACHMENT_MIME_TYPE: &str = "image/jpeg";

pub const ATTACHMENT_DISPOSITION: &str = "attachment";

/// Filename used when the upload did not carry one
pub const DEFAULT_ATTACHMENT_FILENAME: &str = "image.jpg";

/// Maximum image size in bytes (10MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;
