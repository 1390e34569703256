//! Bearer-key caller authentication.

use newsroom_config::AuthConfig;
use newsroom_error::{AuthError, AuthErrorKind, ConfigError};
use newsroom_interface::{Authenticator, Caller};
use tracing::{debug, instrument};

/// Accepts `Authorization: Bearer <key>` for a fixed set of keys.
///
/// Callers are identified by the position of their key (`key-1`, `key-2`,
/// ...) so keys never end up in logs.
///
/// # Examples
///
/// ```
/// use newsroom_generation::StaticKeyAuthenticator;
/// use newsroom_interface::Authenticator;
///
/// let auth = StaticKeyAuthenticator::new(["alpha", "beta"]);
/// let caller = auth.authenticate(Some("Bearer beta")).unwrap();
/// assert_eq!(caller.id(), "key-2");
/// assert!(auth.authenticate(Some("Bearer gamma")).is_err());
/// assert!(auth.authenticate(None).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticKeyAuthenticator {
    keys: Vec<String>,
}

impl StaticKeyAuthenticator {
    /// Authenticator over the given keys. Blank keys are ignored.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys
                .into_iter()
                .map(Into::into)
                .map(|k: String| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Read comma-separated keys from the variable named by `config.api_keys_env`.
    #[instrument(skip(config), fields(var = %config.api_keys_env))]
    pub fn from_env(config: &AuthConfig) -> Result<Self, ConfigError> {
        let raw = std::env::var(&config.api_keys_env).map_err(|_| {
            ConfigError::new(format!(
                "{} environment variable not set",
                config.api_keys_env
            ))
        })?;
        let auth = Self::new(raw.split(','));
        if auth.keys.is_empty() {
            return Err(ConfigError::new(format!(
                "{} contains no keys",
                config.api_keys_env
            )));
        }
        debug!(keys = auth.keys.len(), "Loaded caller keys");
        Ok(auth)
    }

    /// Number of accepted keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is accepted.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Authenticator for StaticKeyAuthenticator {
    fn authenticate(&self, authorization: Option<&str>) -> Result<Caller, AuthError> {
        let header = authorization
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AuthError::new(AuthErrorKind::MissingCredentials))?;

        let (scheme, token) = header.split_once(' ').unwrap_or((header, ""));
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AuthError::new(AuthErrorKind::InvalidCredentials));
        }
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::new(AuthErrorKind::MissingCredentials));
        }

        self.keys
            .iter()
            .position(|key| key == token)
            .map(|index| Caller::new(format!("key-{}", index + 1)))
            .ok_or_else(|| AuthError::new(AuthErrorKind::InvalidCredentials))
    }
}
