use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use client_core::{IdStrategy, DEFAULT_DIRECTORY_URL};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "card_list.toml";

#[derive(Parser, Debug, Default)]
#[command(name = "desktop_gui", about = "Browse and edit a user directory locally")]
pub struct Args {
    /// Optional TOML file with `endpoint` and `id_strategy` keys.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    #[arg(long)]
    pub endpoint: Option<String>,
    /// `monotonic` or `length-plus-one`.
    #[arg(long)]
    pub id_strategy: Option<IdStrategy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub id_strategy: IdStrategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DIRECTORY_URL.to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint: Url,
    pub id_strategy: IdStrategy,
}

impl StartupConfig {
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let settings = load_settings(&args.config, |name| std::env::var(name).ok());
        Self::from_settings(settings, args)
    }

    pub fn from_settings(mut settings: Settings, args: &Args) -> anyhow::Result<Self> {
        if let Some(endpoint) = &args.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(strategy) = args.id_strategy {
            settings.id_strategy = strategy;
        }

        let endpoint = Url::parse(settings.endpoint.trim()).with_context(|| {
            format!("invalid user directory endpoint '{}'", settings.endpoint)
        })?;
        anyhow::ensure!(
            matches!(endpoint.scheme(), "http" | "https"),
            "user directory endpoint must be http(s), got '{endpoint}'"
        );

        Ok(Self {
            endpoint,
            id_strategy: settings.id_strategy,
        })
    }
}

/// Defaults, then `path` if it exists, then environment overrides.
pub fn load_settings(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let settings = match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<Settings>(&raw) {
            Ok(file_cfg) => {
                tracing::info!(path = %path.display(), "loaded settings file");
                file_cfg
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    "ignoring unreadable settings file: {err}"
                );
                Settings::default()
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => Settings::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), "could not read settings file: {err}");
            Settings::default()
        }
    };
    apply_env_overrides(settings, env)
}

pub fn apply_env_overrides(
    mut settings: Settings,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let non_empty = |name: &str| env(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = non_empty("CARD_LIST_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = non_empty("APP__ENDPOINT") {
        settings.endpoint = v;
    }

    for name in ["CARD_LIST_ID_STRATEGY", "APP__ID_STRATEGY"] {
        if let Some(v) = non_empty(name) {
            match v.parse::<IdStrategy>() {
                Ok(strategy) => settings.id_strategy = strategy,
                Err(err) => tracing::warn!(variable = name, "{err}"),
            }
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
