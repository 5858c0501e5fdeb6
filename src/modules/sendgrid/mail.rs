use base64::prelude::*;

use crate::shared::constants::{
    ATTACHMENT_DISPOSITION, ATTACHMENT_MIME_TYPE, DEFAULT_ATTACHMENT_FILENAME, FALLBACK_SUBJECT,
};

/// Provider-independent message handed to a [`super::MailSender`].
///
/// Sender and recipient are fixed; see `shared::constants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub subject: String,
    pub body: String,
    pub attachment: Option<MailAttachment>,
}

impl OutboundMail {
    /// Wrap a drafted body, deriving the subject from its `Subject:` line.
    pub fn compose(body: impl Into<String>, attachment: Option<MailAttachment>) -> Self {
        let body = body.into();
        Self {
            subject: subject_from_body(&body),
            body,
            attachment,
        }
    }
}

/// Base64-encoded file ready to be embedded in a provider request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    pub content: String,
    pub filename: String,
    pub mime_type: &'static str,
    pub disposition: &'static str,
}

impl MailAttachment {
    /// Encode uploaded image bytes. The MIME type is always `image/jpeg`.
    pub fn from_image(filename: Option<&str>, bytes: &[u8]) -> Self {
        let filename = filename
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_ATTACHMENT_FILENAME)
            .to_string();

        Self {
            content: BASE64_STANDARD.encode(bytes),
            filename,
            mime_type: ATTACHMENT_MIME_TYPE,
            disposition: ATTACHMENT_DISPOSITION,
        }
    }
}

/// What the email-delivery provider did with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// Provider answered 202
    Accepted,
    /// Provider answered with any other status code
    Rejected(u16),
    /// No response was received (connect failure, timeout)
    Unreachable(String),
}

/// First non-blank line, if it reads `Subject: ...`, else the fallback subject.
pub fn subject_from_body(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| {
            let (label, rest) = line.split_once(':')?;
            label
                .trim_start_matches(['*', '#', ' '])
                .eq_ignore_ascii_case("subject")
                .then(|| rest.trim_matches(|c: char| c == '*' || c.is_whitespace()))
        })
        .filter(|subject| !subject.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_SUBJECT.to_string())
}
