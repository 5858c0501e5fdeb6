//! SendGrid v3 Mail Send request body.

use serde::Serialize;

use super::mail::{MailAttachment, OutboundMail};

#[derive(Debug, Serialize)]
pub struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub subject: String,
    pub content: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Serialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Debug, Serialize)]
pub struct EmailAddress {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct Attachment {
    pub content: String,
    pub filename: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub disposition: String,
}

impl From<&MailAttachment> for Attachment {
    fn from(a: &MailAttachment) -> Self {
        Self {
            content: a.content.clone(),
            filename: a.filename.clone(),
            mime_type: a.mime_type.to_string(),
            disposition: a.disposition.to_string(),
        }
    }
}

impl MailSendRequest {
    /// Plain-text message from `from` to a single `to` recipient.
    pub fn build(from: &str, to: &str, mail: &OutboundMail) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: to.to_string(),
                }],
            }],
            from: EmailAddress {
                email: from.to_string(),
            },
            subject: mail.subject.clone(),
            content: vec![Content {
                content_type: "text/plain".to_string(),
                value: mail.body.clone(),
            }],
            attachments: mail.attachment.as_ref().map(|a| vec![a.into()]),
        }
    }
}
