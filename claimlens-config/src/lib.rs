//! Loader for workspace configuration with YAML + environment overlays.
//!
//! A `claimlens.yaml` file supplies the LLM provider and search credentials;
//! `CLAIMLENS__`-prefixed environment variables override individual keys, and
//! `${VAR}` placeholders inside values are expanded from the environment so
//! secrets never need to live in the file itself.

use claimlens_common::LlmConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct ClaimlensConfig {
    pub version: Option<String>,
    /// Language-model backend used for claim extraction and verification.
    pub llm: LlmConfig,
    /// Web-search backend used for evidence gathering.
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub api_key: String,
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct ClaimlensConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for ClaimlensConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimlensConfigLoader {
    /// Start with the defaults: `CLAIMLENS__` env overrides, no file yet.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("CLAIMLENS").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use claimlens_common::LlmConfig;
    /// use claimlens_config::ClaimlensConfigLoader;
    ///
    /// let cfg = ClaimlensConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// version: "1"
    /// llm:
    ///   provider: "openai"
    ///   model: "gpt-4o-mini"
    ///   api_key: "sk-inline"
    /// search:
    ///   api_key: "tvly-inline"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.version.as_deref(), Some("1"));
    /// let LlmConfig::OpenAi { model, .. } = &cfg.llm;
    /// assert_eq!(model, "gpt-4o-mini");
    /// assert_eq!(cfg.search.api_key, "tvly-inline");
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// `${VAR}` placeholders are expanded (recursively, up to a fixed depth)
    /// before the strongly typed config materialises.
    pub fn load(self) -> Result<ClaimlensConfig, ConfigError> {
        let cfg = self.builder.build()?;

        // Convert to serde_json::Value first so expansion can walk the tree.
        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: ClaimlensConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(typed)
    }
}
