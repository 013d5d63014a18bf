use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// The single frontend origin allowed by CORS
    #[serde(default = "default_frontend_origin")]
    pub frontend_origin: String,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub inference: InferenceSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceSettings {
    /// Bearer token for the hosted inference API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    #[serde(default = "default_zero_shot_model")]
    pub zero_shot_model: String,

    #[serde(default = "default_ner_model")]
    pub ner_model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            frontend_origin: default_frontend_origin(),
            logging: LoggingConfig::default(),
            inference: InferenceSettings::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_api_base_url(),
            zero_shot_model: default_zero_shot_model(),
            ner_model: default_ner_model(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents)?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents)?
        };

        Ok(config)
    }

    /// Merge environment variables into config (env vars take precedence)
    pub fn merge_env(&mut self) {
        if let Ok(token) = std::env::var("HUGGINGFACE_API_TOKEN") {
            self.inference.api_token = Some(token);
        }

        if let Ok(val) = std::env::var("MAILSIFT_API_BASE_URL") {
            self.inference.base_url = val;
        }

        if let Ok(val) = std::env::var("MAILSIFT_ZERO_SHOT_MODEL") {
            self.inference.zero_shot_model = val;
        }

        if let Ok(val) = std::env::var("MAILSIFT_NER_MODEL") {
            self.inference.ner_model = val;
        }

        if let Ok(val) = std::env::var("MAILSIFT_FRONTEND_ORIGIN") {
            self.frontend_origin = val;
        }

        if let Ok(val) = std::env::var("MAILSIFT_LOG_LEVEL") {
            self.logging.level = val;
        }

        if let Ok(val) = std::env::var("MAILSIFT_PORT") {
            if let Ok(port) = val.parse::<u16>() {
                self.port = port;
            }
        }

        if let Ok(val) = std::env::var("MAILSIFT_HOST") {
            self.host = val;
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_frontend_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_base_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_zero_shot_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

fn default_ner_model() -> String {
    "urchade/gliner_multi_pii-v1".to_string()
}
