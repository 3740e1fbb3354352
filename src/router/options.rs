use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    pub case_sensitive: bool,
    pub prefix: Option<String>,
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            prefix: None,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if let Some(prefix) = self.prefix.as_deref() {
            if !prefix.starts_with('/') {
                return Err(RouterOptionsError::PrefixMissingLeadingSlash {
                    prefix: prefix.to_string(),
                });
            }
            if prefix.contains(['{', '}']) {
                return Err(RouterOptionsError::PrefixContainsPlaceholder {
                    prefix: prefix.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.options.prefix = Some(prefix.into());
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("mount prefix '{prefix}' must start with '/'")]
    PrefixMissingLeadingSlash { prefix: String },
    #[error("mount prefix '{prefix}' must not contain placeholders")]
    PrefixContainsPlaceholder { prefix: String },
}
