use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

static DEFAULT_LANGS: OnceCell<Vec<String>> = OnceCell::new();

/// Set the process-wide default language list. Called once at startup;
/// returns false (and changes nothing) if a default was already set.
pub fn set_default_langs<I, S>(langs: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DEFAULT_LANGS
        .set(langs.into_iter().map(Into::into).collect())
        .is_ok()
}

/// Process-wide default language list, falling back to English when startup
/// never set one.
pub fn default_langs() -> Vec<String> {
    DEFAULT_LANGS
        .get()
        .cloned()
        .unwrap_or_else(|| vec!["en".to_string()])
}

/// Configuration consumed once when opening a backend session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    preferred_langs: Option<Vec<String>>,
    server: bool,
    expected_build_hash: Option<String>,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit language preference list, most preferred first.
    pub fn with_langs<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_langs = Some(langs.into_iter().map(Into::into).collect());
        self
    }

    /// Headless (server) mode rather than interactive.
    pub fn server(mut self, server: bool) -> Self {
        self.server = server;
        self
    }

    /// Require the engine build hash to match before the session opens.
    pub fn with_build_hash(mut self, hash: impl Into<String>) -> Self {
        self.expected_build_hash = Some(hash.into());
        self
    }

    pub fn expected_build_hash(&self) -> Option<&str> {
        self.expected_build_hash.as_deref()
    }

    /// The language list the session will use: the explicit list if one was
    /// given, otherwise the process-wide default.
    pub fn resolved_langs(&self) -> Vec<String> {
        match &self.preferred_langs {
            Some(langs) => langs.clone(),
            None => default_langs(),
        }
    }

    pub fn init_request(&self) -> InitRequest {
        InitRequest {
            preferred_langs: self.resolved_langs(),
            server: self.server,
        }
    }
}

/// Wire message handed to the engine at session open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitRequest {
    pub preferred_langs: Vec<String>,
    pub server: bool,
}
