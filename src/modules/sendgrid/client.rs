use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use std::time::Instant;

use super::mail::{DeliveryStatus, OutboundMail};
use super::types::MailSendRequest;
use crate::core::config::SendGridConfig;
use crate::shared::constants::{RECIPIENT_ADDRESS, SENDER_ADDRESS};

/// Hands a composed message to an email-delivery provider.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Sends once. Never retries.
    async fn send(&self, mail: &OutboundMail) -> DeliveryStatus;
}

/// SendGrid v3 Mail Send client.
pub struct SendGridClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl SendGridClient {
    pub fn new(config: &SendGridConfig) -> reqwest::Result<Self> {
        let http_client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl MailSender for SendGridClient {
    async fn send(&self, mail: &OutboundMail) -> DeliveryStatus {
        let start = Instant::now();
        let request = MailSendRequest::build(SENDER_ADDRESS, RECIPIENT_ADDRESS, mail);

        let response = match self
            .http_client
            .post(format!("{}/v3/mail/send", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("SendGrid request failed: {:?}", e);
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    format!("provider unreachable: {}", e)
                };
                return DeliveryStatus::Unreachable(reason);
            }
        };

        let status = response.status();
        tracing::info!(
            status = status.as_u16(),
            has_attachment = mail.attachment.is_some(),
            duration_ms = start.elapsed().as_millis(),
            "SendGrid mail send"
        );

        if status == StatusCode::ACCEPTED {
            DeliveryStatus::Accepted
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("SendGrid rejected message: HTTP {} - {}", status, body);
            DeliveryStatus::Rejected(status.as_u16())
        }
    }
}
