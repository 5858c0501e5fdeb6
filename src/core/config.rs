use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub openai: OpenAIConfig,
    pub sendgrid: SendGridConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Text-generation provider settings
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

/// Email-delivery provider settings
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            openai: OpenAIConfig::from_env()?,
            sendgrid: SendGridConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins =
            parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Civic Complaint Mailer API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Drafts citizen complaints with an LLM and forwards them to the municipal commissioner"
                .to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl OpenAIConfig {
    const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    const DEFAULT_TIMEOUT_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| "OPENAI_API_KEY environment variable is required".to_string())?;

        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout = parse_timeout(
            "OPENAI_TIMEOUT_SECS",
            env::var("OPENAI_TIMEOUT_SECS").ok(),
            Self::DEFAULT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

impl SendGridConfig {
    const DEFAULT_BASE_URL: &'static str = "https://api.sendgrid.com";
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("SENDGRID_API_KEY")
            .map_err(|_| "SENDGRID_API_KEY environment variable is required".to_string())?;

        let base_url = env::var("SENDGRID_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout = parse_timeout(
            "SENDGRID_TIMEOUT_SECS",
            env::var("SENDGRID_TIMEOUT_SECS").ok(),
            Self::DEFAULT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

/// Parse a comma-separated origin list, dropping empty entries
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_timeout(name: &str, raw: Option<String>, default_secs: u64) -> Result<Duration, String> {
    let secs = match raw {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("{} must be a valid number", name))?,
        None => default_secs,
    };

    if secs == 0 {
        return Err(format!("{} must be greater than zero", name));
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*".to_string()]);
        assert_eq!(
            parse_origins("http://a.test, http://b.test,,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_parse_timeout_default_and_override() {
        assert_eq!(
            parse_timeout("X", None, 30).unwrap(),
            Duration::from_secs(30)
        );
        assert_eq!(
            parse_timeout("X", Some(" 5 ".to_string()), 30).unwrap(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_parse_timeout_rejects_invalid() {
        let err = parse_timeout("OPENAI_TIMEOUT_SECS", Some("soon".to_string()), 30).unwrap_err();
        assert!(err.contains("OPENAI_TIMEOUT_SECS"));
        assert!(parse_timeout("X", Some("0".to_string()), 30).is_err());
    }

    #[test]
    fn test_swagger_credentials() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }
}
