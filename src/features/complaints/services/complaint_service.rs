use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::complaints::dtos::{ComplaintResponseDto, ComplaintSubmission};
use crate::modules::openai::TextGenerator;
use crate::modules::sendgrid::{DeliveryStatus, MailAttachment, MailSender, OutboundMail};
use crate::shared::prompts::{render_complaint_prompt, ComplaintPromptInput};

/// Drafts a complaint email and forwards it to the commissioner
pub struct ComplaintService {
    generator: Arc<dyn TextGenerator>,
    mailer: Arc<dyn MailSender>,
}

impl ComplaintService {
    pub fn new(generator: Arc<dyn TextGenerator>, mailer: Arc<dyn MailSender>) -> Self {
        Self { generator, mailer }
    }

    /// Run one submission end to end: prompt, draft, send, map.
    ///
    /// Rejects incomplete submissions before either provider is called.
    pub async fn submit(&self, submission: ComplaintSubmission) -> Result<ComplaintResponseDto> {
        let missing = submission.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(
                format!("Missing required fields: {}", missing.join(", ")),
                missing,
            ));
        }

        let prompt = render_complaint_prompt(&ComplaintPromptInput {
            name: &submission.name,
            email: &submission.email,
            location: &submission.location,
            complaint: &submission.complaint,
        })?;

        let email_body = self.generator.generate(&prompt).await?;
        tracing::debug!("Drafted complaint email ({} chars)", email_body.len());

        let attachment = submission
            .image
            .as_ref()
            .map(|image| MailAttachment::from_image(image.file_name.as_deref(), &image.bytes));

        let mail = OutboundMail::compose(email_body, attachment);
        let status = self.mailer.send(&mail).await;

        Ok(Self::map_delivery(status, mail.body))
    }

    fn map_delivery(status: DeliveryStatus, email_body: String) -> ComplaintResponseDto {
        match status {
            DeliveryStatus::Accepted => {
                tracing::info!("Complaint email accepted for delivery");
                ComplaintResponseDto::sent(email_body)
            }
            DeliveryStatus::Rejected(code) => {
                tracing::warn!("Complaint email rejected with code {}", code);
                ComplaintResponseDto::failed(email_body, format!("code {}", code))
            }
            DeliveryStatus::Unreachable(reason) => {
                tracing::warn!("Complaint email not delivered: {}", reason);
                ComplaintResponseDto::failed(email_body, reason)
            }
        }
    }
}
