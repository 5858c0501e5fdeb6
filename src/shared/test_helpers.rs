use async_trait::async_trait;
use axum::Router;
use std::sync::{Arc, Mutex};

use crate::modules::openai::{OpenAIError, TextGenerator};
use crate::modules::sendgrid::{DeliveryStatus, MailSender, OutboundMail};

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_stub_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Text generator returning a canned reply and recording every prompt
pub struct StubTextGenerator {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubTextGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for StubTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, OpenAIError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(OpenAIError::Api)
    }
}

/// Mail sender returning a fixed status and recording every message
pub struct StubMailSender {
    status: DeliveryStatus,
    pub sent: Mutex<Vec<OutboundMail>>,
}

impl StubMailSender {
    pub fn returning(status: DeliveryStatus) -> Arc<Self> {
        Arc::new(Self {
            status,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<OutboundMail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl MailSender for StubMailSender {
    async fn send(&self, mail: &OutboundMail) -> DeliveryStatus {
        self.sent.lock().unwrap().push(mail.clone());
        self.status.clone()
    }
}
