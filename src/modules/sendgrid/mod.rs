//! Email-delivery provider integration (SendGrid v3 Mail Send).

pub mod client;
pub mod mail;
pub mod types;

pub use client::{MailSender, SendGridClient};
pub use mail::{DeliveryStatus, MailAttachment, OutboundMail};
