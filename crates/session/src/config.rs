//! Session configuration.

use tracing::warn;

/// Storage key of the persisted session record.
pub const DEFAULT_STORAGE_KEY: &str = "sms_user";

/// Shared secret of the sample deployment.
///
/// Every registered principal signs in with this one secret. This is a
/// stand-in for per-principal credential checks and is not secure.
pub const DEFAULT_SHARED_SECRET: &str = "password";

pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Session configuration.
#[derive(Clone)]
pub struct SessionConfig {
    /// Key of the persisted session record in local storage.
    pub storage_key: String,
    /// Secret accepted for every registered principal.
    pub shared_secret: String,
    /// Maximum number of retained audit events.
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            shared_secret: DEFAULT_SHARED_SECRET.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl core::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("storage_key", &self.storage_key)
            .field("shared_secret", &"<redacted>")
            .field("history_limit", &self.history_limit)
            .finish()
    }
}

impl SessionConfig {
    /// Defaults overridden by `SCHOOLHUB_STORAGE_KEY`, `SCHOOLHUB_SHARED_SECRET`
    /// and `SCHOOLHUB_HISTORY_LIMIT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup("SCHOOLHUB_STORAGE_KEY").filter(|v| !v.trim().is_empty()) {
            config.storage_key = key;
        }

        if let Some(secret) = lookup("SCHOOLHUB_SHARED_SECRET") {
            config.shared_secret = secret;
        }

        if let Some(raw) = lookup("SCHOOLHUB_HISTORY_LIMIT") {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.history_limit = limit,
                Err(err) => warn!(value = %raw, error = %err, "ignoring invalid SCHOOLHUB_HISTORY_LIMIT"),
            }
        }

        config
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_shared_secret(mut self, secret: impl Into<String>) -> Self {
        self.shared_secret = secret.into();
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_sample_deployment() {
        let config = SessionConfig::default();
        assert_eq!(config.storage_key, "sms_user");
        assert_eq!(config.shared_secret, "password");
        assert_eq!(config.history_limit, 64);
    }

    #[test]
    fn env_overrides_apply() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            ("SCHOOLHUB_STORAGE_KEY", "other_user"),
            ("SCHOOLHUB_SHARED_SECRET", "s3cret"),
            ("SCHOOLHUB_HISTORY_LIMIT", "8"),
        ]));
        assert_eq!(config.storage_key, "other_user");
        assert_eq!(config.shared_secret, "s3cret");
        assert_eq!(config.history_limit, 8);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            ("SCHOOLHUB_STORAGE_KEY", "  "),
            ("SCHOOLHUB_HISTORY_LIMIT", "many"),
        ]));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = SessionConfig::default().with_shared_secret("hunter2");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("redacted"));
    }
}
