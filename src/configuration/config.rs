#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::ThemeName;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ClassifierURL,
    ConfigFile,
    Theme,
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

    pub fn config_dir() -> path::PathBuf {
        #[cfg(not(target_os = "macos"))]
        let dir = dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("safechat");
        #[cfg(target_os = "macos")]
        let dir = dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".config/safechat");

        return dir;
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "You".to_string();
            }

            return user;
        }

        let config_path = Config::config_dir().join("config.toml");
        let default_theme = ThemeName::Dark.to_string();

        let res = match key {
            ConfigKey::ClassifierURL => "http://localhost:5000",
            ConfigKey::Theme => default_theme.as_str(),

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                let val_str = match doc.get(&key.to_string()).and_then(|val| return val.as_str()) {
                    Some(val_str) => val_str,
                    None => continue,
                };
                if val_str.is_empty() {
                    continue;
                }

                // Validate against the same possible values clap would accept.
                let possible_values = cmd
                    .get_arguments()
                    .find(|arg| return arg.get_long() == Some(key.to_string().as_str()))
                    .map(|arg| {
                        return arg
                            .get_possible_values()
                            .iter()
                            .map(|e| return e.get_name().to_string())
                            .collect::<Vec<String>>();
                    })
                    .unwrap_or_default();

                if !possible_values.is_empty() && !possible_values.contains(&val_str.to_string()) {
                    bail!(format!(
                        "config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}",
                        possible_values.join(", ")
                    ));
                }

                Config::set(key, val_str);
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
            classifier_url = Config::get(ConfigKey::ClassifierURL),
            theme = Config::get(ConfigKey::Theme),
            username = Config::get(ConfigKey::Username),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                if key == ConfigKey::Username {
                    return Some(
                        "# Your name displayed above your chat bubbles.\n# username = \"\""
                            .to_string(),
                    );
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default()
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {possible_values}]");
                }

                let val = Config::default(key);
                return Some(format!("# {description}\n{key} = \"{val}\""));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
