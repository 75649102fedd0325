#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    BackendURL,
    ConfigFile,
    Deck,
    Username,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "Founder".to_string();
            }

            return user;
        }

        let config_path = dirs::config_dir()
            .unwrap_or_else(env::temp_dir)
            .join("angel/config.toml");

        let res = match key {
            ConfigKey::BackendURL => "http://127.0.0.1:5000".to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
            ConfigKey::Deck => "".to_string(),
            ConfigKey::Username => "".to_string(),
        };

        return res;
    }

    /// Layers values from lowest to highest priority: built in defaults, the
    /// TOML config file, then whatever clap resolved from flags or env vars.
    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        // A broken file must leave the current config untouched.
        let config_path = path::PathBuf::from(config_file);
        let mut doc = None;
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            doc = Some(toml_str.parse::<toml_edit::Document>()?);
        }

        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        if let Some(doc) = doc {
            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile || key == ConfigKey::Deck {
                    continue;
                }

                if let Some(val_str) = doc.get(&key.to_string()).and_then(|e| return e.as_str())
                {
                    if val_str.is_empty() {
                        continue;
                    }
                    Config::set(key, val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            username = Config::get(ConfigKey::Username),
            backend_url = Config::get(ConfigKey::BackendURL),
            deck = Config::get(ConfigKey::Deck),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile || key == ConfigKey::Deck {
                    return None;
                }

                if key == ConfigKey::Username {
                    return Some(
                        "# Your name, displayed on your chat bubbles.\n# username = \"\""
                            .to_string(),
                    );
                }

                let mut description = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    .and_then(|arg| return arg.get_help())
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let val = Config::default(key);
                let line = if val.is_empty() {
                    format!("# {key} = \"\"")
                } else {
                    format!("{key} = \"{val}\"")
                };

                return Some(format!("# {description}\n{line}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
