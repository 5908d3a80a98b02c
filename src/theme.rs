use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_BREAKPOINT: &str = "DEFAULT";
pub const SPACING_NAMESPACE: &str = "rspacing";
pub const TEXT_NAMESPACE: &str = "rtext";

pub type ValueTable = IndexMap<String, String>;
pub type ScaleTable = IndexMap<String, ValueTable>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Theme {
    #[serde(default)]
    pub screens: IndexMap<String, String>,
    #[serde(default)]
    pub rspacing: ScaleTable,
    #[serde(default)]
    pub rtext: ScaleTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeError {
    pub message: String,
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ThemeError {}

impl Theme {
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        toml::from_str(text).map_err(|err| ThemeError {
            message: format!("failed to parse theme: {}", err),
        })
    }

    pub fn scale(&self, namespace: &str) -> Option<&ScaleTable> {
        match namespace {
            SPACING_NAMESPACE => Some(&self.rspacing),
            TEXT_NAMESPACE => Some(&self.rtext),
            _ => None,
        }
    }

    pub fn is_active(&self, namespace: &str) -> bool {
        self.scale(namespace)
            .map(|scale| !scale.is_empty())
            .unwrap_or(false)
    }

    pub fn default_values(&self, namespace: &str) -> Option<&ValueTable> {
        self.scale(namespace)
            .and_then(|scale| scale.get(DEFAULT_BREAKPOINT))
    }
}
