//! Template engine for prompt management using Jinja2 syntax.
//!
//! Templates live under `templates/prompts/` and are compiled into the binary,
//! so rendering never touches the filesystem at request time.

use minijinja::{AutoEscape, Environment, Value};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Templates bundled at compile time, keyed by their path under `templates/prompts/`
const BUNDLED_TEMPLATES: &[(&str, &str)] = &[(
    "complaints/draft_email.jinja",
    include_str!("../../../templates/prompts/complaints/draft_email.jinja"),
)];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    // Prompts are plain text; user input must reach the model verbatim.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);

    for (name, source) in BUNDLED_TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Arguments
/// * `template_name` - The template path relative to `templates/prompts/` (e.g., "complaints/draft_email.jinja")
/// * `ctx` - A HashMap of variable names to values
pub fn render_template(
    template_name: &str,
    ctx: &HashMap<&str, Value>,
) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    let render_ctx = Value::from_iter(ctx.iter().map(|(k, v)| (*k, v.clone())));

    template
        .render(render_ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Render a template with a simpler string-only context.
pub fn render_template_simple(
    template_name: &str,
    ctx: &HashMap<&str, &str>,
) -> Result<String, TemplateError> {
    let value_ctx: HashMap<&str, Value> = ctx.iter().map(|(k, v)| (*k, Value::from(*v))).collect();

    render_template(template_name, &value_ctx)
}

/// Check if a template exists
#[cfg(test)]
pub fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_missing_template() {
        let mut ctx = HashMap::new();
        ctx.insert("test_var", "test_value");

        let result = render_template_simple("nonexistent.jinja", &ctx);
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_template_exists() {
        assert!(template_exists("complaints/draft_email.jinja"));
        assert!(!template_exists("definitely_not_a_real_template.jinja"));
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let mut ctx = HashMap::new();
        ctx.insert("name", "<Tom & Jerry>");
        ctx.insert("email", "tom@example.com");
        ctx.insert("location", "\"Andheri\"");
        ctx.insert("complaint", "Water & sewage");

        let rendered = render_template_simple("complaints/draft_email.jinja", &ctx).unwrap();

        assert!(rendered.contains("<Tom & Jerry>"));
        assert!(rendered.contains("\"Andheri\""));
        assert!(rendered.contains("Water & sewage"));
    }
}
