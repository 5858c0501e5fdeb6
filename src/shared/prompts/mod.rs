//! Prompt template management module.
//!
//! Templates are stored in `templates/prompts/` and use Jinja2 syntax.
//!
//! # Usage
//!
//! ```ignore
//! use crate::shared::prompts::{render_complaint_prompt, ComplaintPromptInput};
//!
//! let prompt = render_complaint_prompt(&ComplaintPromptInput {
//!     name: "Asha",
//!     email: "asha@example.com",
//!     location: "Dadar",
//!     complaint: "Garbage not collected for a week",
//! })?;
//! ```

pub mod engine;

pub use engine::{render_template_simple, TemplateError};

use std::collections::HashMap;

/// Citizen-supplied values interpolated into the drafting prompt.
///
/// Values are embedded verbatim; nothing is escaped or sanitized.
#[derive(Debug, Clone, Copy)]
pub struct ComplaintPromptInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub location: &'a str,
    pub complaint: &'a str,
}

/// Render the instruction sent to the text-generation provider for one complaint.
pub fn render_complaint_prompt(input: &ComplaintPromptInput<'_>) -> Result<String, TemplateError> {
    let mut ctx: HashMap<&str, &str> = HashMap::new();
    ctx.insert("name", input.name);
    ctx.insert("email", input.email);
    ctx.insert("location", input.location);
    ctx.insert("complaint", input.complaint);

    render_template_simple("complaints/draft_email.jinja", &ctx)
}
