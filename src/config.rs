//! Layered application configuration.
//!
//! Priority, lowest first: built-in defaults, the YAML config file
//! (`--config`/`CONFIG_FILE`, else `./config.yaml` when present),
//! `PORTFOLIO_` prefixed environment variables (`PORTFOLIO_SERVER__PORT=8000`),
//! then CLI flags and their env aliases.

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::chat::ChatPersona;
use crate::dock::{Dock, DockItem};
use crate::placeholder::PlaceholderTiming;

/// Config file picked up from the working directory when no path is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Chat endpoint the widget proxies to
    #[arg(long, env = "CHAT_ENDPOINT")]
    pub chat_endpoint: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub chat: ChatConfig,
    pub placeholder: PlaceholderConfig,
    #[serde(default)]
    pub dock: DockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Seconds of inactivity before a mounted widget is dropped.
    pub widget_idle_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    pub endpoint: Url,
    pub system_prompt: String,
    pub fallback_message: String,
    /// First assistant message of every widget; empty disables it.
    pub welcome_message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlaceholderConfig {
    pub prompts: Vec<String>,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub pause_ms: u64,
    /// Delay before typing the next prompt.
    pub switch_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DockConfig {
    #[serde(default = "Dock::default_items")]
    pub items: Vec<DockItem>,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            items: Dock::default_items(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn widget_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.widget_idle_secs)
    }
}

impl ChatConfig {
    #[must_use]
    pub fn persona(&self) -> ChatPersona {
        let persona = ChatPersona::new(self.system_prompt.as_str(), self.fallback_message.as_str());
        if self.welcome_message.trim().is_empty() {
            persona
        } else {
            persona.with_welcome(self.welcome_message.as_str())
        }
    }
}

impl PlaceholderConfig {
    #[must_use]
    pub fn timing(&self) -> PlaceholderTiming {
        PlaceholderTiming {
            type_delay: Duration::from_millis(self.type_delay_ms),
            delete_delay: Duration::from_millis(self.delete_delay_ms),
            pause: Duration::from_millis(self.pause_ms),
            switch: Duration::from_millis(self.switch_ms),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("server.widget_idle_secs", 30 * 60)?
            .set_default("chat.endpoint", "http://127.0.0.1:8787/api/chat")?
            .set_default(
                "chat.system_prompt",
                "You are the assistant on a personal portfolio site. Answer questions \
                 about the owner's projects, skills, and availability briefly and in the \
                 visitor's language.",
            )?
            .set_default(
                "chat.fallback_message",
                "Sorry, I can't answer right now. Please get in touch by email and \
                 I'll reply as soon as I can.",
            )?
            .set_default(
                "chat.welcome_message",
                "Welcome to my portfolio!\n\n\
                 Ask me about my projects, my stack, or how to get in touch.",
            )?
            .set_default(
                "placeholder.prompts",
                vec![
                    "What are you working on right now?",
                    "Which stack do you use most?",
                    "Are you open to freelance work?",
                    "How can I contact you?",
                ],
            )?
            .set_default("placeholder.type_delay_ms", 120)?
            .set_default("placeholder.delete_delay_ms", 80)?
            .set_default("placeholder.pause_ms", 1500)?
            .set_default("placeholder.switch_ms", 400)?;

        // Config file: explicit path must exist, the cwd fallback is optional
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE));
        }

        // PORTFOLIO_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(endpoint) = cli.chat_endpoint {
            builder = builder.set_override("chat.endpoint", endpoint)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_conversion() {
        let placeholder = PlaceholderConfig {
            prompts: vec![],
            type_delay_ms: 10,
            delete_delay_ms: 20,
            pause_ms: 30,
            switch_ms: 40,
        };
        let timing = placeholder.timing();
        assert_eq!(timing.type_delay, Duration::from_millis(10));
        assert_eq!(timing.delete_delay, Duration::from_millis(20));
        assert_eq!(timing.pause, Duration::from_millis(30));
        assert_eq!(timing.switch, Duration::from_millis(40));
    }

    #[test]
    fn test_persona_carries_texts() {
        let chat = ChatConfig {
            endpoint: Url::parse("http://localhost/api/chat").unwrap(),
            system_prompt: "sys".into(),
            fallback_message: "mail me".into(),
            welcome_message: "hello".into(),
        };
        let persona = chat.persona();
        assert_eq!(&*persona.system_prompt, "sys");
        assert_eq!(&*persona.fallback_message, "mail me");
        assert_eq!(persona.welcome_message.as_deref(), Some("hello"));
    }

    #[test]
    fn test_blank_welcome_is_disabled() {
        let chat = ChatConfig {
            endpoint: Url::parse("http://localhost/api/chat").unwrap(),
            system_prompt: "sys".into(),
            fallback_message: "mail me".into(),
            welcome_message: "  ".into(),
        };
        assert!(chat.persona().welcome_message.is_none());
    }
}
