//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, path::Path, sync::Arc};

use serde::Deserialize;

use super::types::{Res, Void};

/// Environment variable holding the Discord bot token.
pub const TOKEN_ENV_VAR: &str = "DISCORD_TOKEN";

/// Default Einstein picture served by `/siggi`.
pub const EINSTEIN_IMAGE: &str = "https://upload.wikimedia.org/wikipedia/commons/1/14/Albert_Einstein_1947.jpg";

/// Default "listening" activity shown once connected
fn default_presence_activity() -> String {
    "/siggi commands".to_string()
}

/// Default image pool for `/siggi`
fn default_siggi_images() -> Vec<String> {
    vec![EINSTEIN_IMAGE.to_string()]
}

/// Configuration for the siggi-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Discord bot token (`DISCORD_TOKEN`).
    #[serde(default)]
    pub discord_token: String,
    /// Activity shown as "Listening to ..." (`SIGGI_BOT_PRESENCE_ACTIVITY`).
    #[serde(default = "default_presence_activity")]
    pub presence_activity: String,
    /// Pictures `/siggi` picks from.
    #[serde(default = "default_siggi_images")]
    pub siggi_images: Vec<String>,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            discord_token: String::new(),
            presence_activity: default_presence_activity(),
            siggi_images: default_siggi_images(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Res<Self> {
        // `SIGGI_BOT_SIGGI_IMAGES` is a comma-separated list.
        let env = config::Environment::with_prefix("SIGGI_BOT")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("siggi_images");

        let mut cfg = config::Config::builder().add_source(env);

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        // The bare token variable wins over everything else.
        cfg = cfg.set_override_option("discord_token", std::env::var(TOKEN_ENV_VAR).ok())?;

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Checks the invariants the bot relies on before connecting.
    pub fn validate(&self) -> Void {
        if self.discord_token.trim().is_empty() {
            return Err(anyhow::anyhow!("{} not found in environment variables!", TOKEN_ENV_VAR));
        }

        if self.siggi_images.is_empty() {
            return Err(anyhow::anyhow!("The siggi image pool must contain at least one image."));
        }

        Ok(())
    }
}
