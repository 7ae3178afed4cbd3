//! Validation settings loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Language used for rule failure messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// English messages, joined with " and "
    #[default]
    #[serde(rename = "en")]
    En,

    /// Brazilian Portuguese messages, joined with " e "
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    /// Connective placed between failure messages when none is configured
    pub fn default_connective(self) -> &'static str {
        match self {
            Locale::En => " and ",
            Locale::PtBr => " e ",
        }
    }

    /// Parse a locale tag such as `en`, `pt-BR` or `pt_br`
    pub fn parse(tag: &str) -> Result<Self, ConfigError> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            other => Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                message: format!("unsupported locale '{}'", other),
            }),
        }
    }
}

/// Settings applied to every validation call built from them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Message language
    #[serde(default, deserialize_with = "deserialize_locale")]
    pub locale: Locale,

    /// Overrides the locale's connective when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connective: Option<String>,
}

impl ValidationSettings {
    /// Settings for a given locale with its default connective
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            connective: None,
        }
    }

    /// Load settings from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        if settings.connective.as_deref() == Some("") {
            return Err(ConfigError::InvalidValue {
                key: "connective".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(settings)
    }

    /// The connective actually used to join failure messages
    pub fn effective_connective(&self) -> &str {
        self.connective
            .as_deref()
            .unwrap_or_else(|| self.locale.default_connective())
    }
}

fn deserialize_locale<'de, D>(deserializer: D) -> Result<Locale, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tag = String::deserialize(deserializer)?;
    Locale::parse(&tag).map_err(serde::de::Error::custom)
}
