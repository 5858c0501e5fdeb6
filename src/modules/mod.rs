//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients for the text-generation and email-delivery providers.

pub mod openai;
pub mod sendgrid;
