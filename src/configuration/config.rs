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

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    MobileBreakpoint,
    Page,
    Referrer,
    ReplyDelay,
    StorageFile,
    UserAgent,
    WebhookTimeout,
    WebhookURL,
}

impl ConfigKey {
    /// Keys holding millisecond or pixel values that must parse as unsigned integers.
    pub fn is_integer(&self) -> bool {
        return matches!(
            self,
            ConfigKey::MobileBreakpoint | ConfigKey::ReplyDelay | ConfigKey::WebhookTimeout
        );
    }
}

fn app_dir(base: Option<path::PathBuf>) -> path::PathBuf {
    return base
        .unwrap_or_else(|| return path::PathBuf::from("."))
        .join("classicmode");
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn get_u64(key: ConfigKey) -> Result<u64> {
        let val = Config::get(key);
        return match val.parse::<u64>() {
            Ok(parsed) => Ok(parsed),
            Err(_) => bail!(format!("{key} must be a non-negative whole number, got '{val}'")),
        };
    }

    /// Returns the value for a key that has no usable default.
    pub fn require(key: ConfigKey) -> Result<String> {
        let val = Config::get(key);
        if val.trim().is_empty() {
            bail!(format!(
                "{key} is not set. Pass --{key}, set CLASSICMODE_{}, or add it to {}",
                key.to_string().replace('-', "_").to_uppercase(),
                Config::get(ConfigKey::ConfigFile)
            ));
        }

        return Ok(val);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        #[cfg(not(target_os = "macos"))]
        let config_path = app_dir(dirs::config_dir()).join("config.toml");
        #[cfg(target_os = "macos")]
        let config_path = env::var("HOME")
            .map(path::PathBuf::from)
            .unwrap_or_else(|_| return path::PathBuf::from("."))
            .join(".config/classicmode/config.toml");

        let storage_path = app_dir(dirs::cache_dir()).join("storage.yaml");
        let user_agent = format!(
            "classicmode/{} ({}; {})",
            env!("CARGO_PKG_VERSION"),
            env::consts::OS,
            env::consts::ARCH
        );

        let res = match key {
            ConfigKey::MobileBreakpoint => "768".to_string(),
            ConfigKey::Page => "/".to_string(),
            ConfigKey::Referrer => "".to_string(),
            ConfigKey::ReplyDelay => "500".to_string(),
            ConfigKey::UserAgent => user_agent,
            ConfigKey::WebhookTimeout => "10000".to_string(),
            ConfigKey::WebhookURL => "".to_string(),

            // Paths
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
            ConfigKey::StorageFile => storage_path.to_string_lossy().to_string(),
        };

        return res;
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
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

        let config_path = path::PathBuf::from(&config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    } else {
                        bail!(format!(
                            "{config_file} has an invalid value for key '{key}', expected a string or a number"
                        ));
                    }
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
        Config::set(ConfigKey::ConfigFile, &config_file);

        for key in ConfigKey::iter().filter(|key| return key.is_integer()) {
            Config::get_u64(key)?;
        }

        tracing::debug!(
            webhook_url = Config::get(ConfigKey::WebhookURL),
            webhook_timeout = Config::get(ConfigKey::WebhookTimeout),
            reply_delay = Config::get(ConfigKey::ReplyDelay),
            mobile_breakpoint = Config::get(ConfigKey::MobileBreakpoint),
            storage_file = Config::get(ConfigKey::StorageFile),
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

                let arg = cmd.get_arguments().find(|e| {
                    return e.get_long() == Some(key.to_string().as_str());
                })?;

                let description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default()
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if key.is_integer() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
