//! Appearance mode state and its derived style tokens.
//!
//! [`ThemeStore`] owns the single source of truth for the light/dark mode. It
//! reads the persisted preference on start-up, writes it back on every change,
//! mirrors it into a document-level attribute and notifies subscribers
//! synchronously, so every consumer sees the new tokens in the same update.
//!
//! Rendering code does not reach into the store; it receives a [`ThemeContext`]
//! value threaded through the render call tree.

pub mod tokens;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::KeyValueStore;

pub use tokens::{StyleTokens, TokenValue, DARK_TOKENS, LIGHT_TOKENS};

/// Storage key holding the persisted mode marker.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Document attribute mirroring the active mode.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Light/dark display setting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Light backgrounds, dark text
    #[default]
    Light,
    /// Dark backgrounds, light text
    Dark,
}

impl AppearanceMode {
    /// Canonical persisted marker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interprets a persisted marker. Only the exact `"dark"` marker selects
    /// dark mode; anything else, including garbage, means light.
    #[must_use]
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Returns the complementary mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the static token set for this mode.
    #[must_use]
    pub fn tokens(self) -> &'static StyleTokens {
        match self {
            Self::Light => &LIGHT_TOKENS,
            Self::Dark => &DARK_TOKENS,
        }
    }

    /// True for [`AppearanceMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppearanceMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => anyhow::bail!("Unknown appearance mode: {other} (expected light or dark)"),
        }
    }
}

/// The theme handle passed to rendering functions.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    /// Active mode
    pub mode: AppearanceMode,
    /// Tokens derived from `mode`
    pub tokens: &'static StyleTokens,
}

impl ThemeContext {
    /// Builds the context for a mode.
    #[must_use]
    pub fn for_mode(mode: AppearanceMode) -> Self {
        Self {
            mode,
            tokens: mode.tokens(),
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::for_mode(AppearanceMode::default())
    }
}

/// Attributes set on the document root element (`<html>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    attributes: BTreeMap<String, String>,
}

impl DocumentRoot {
    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterates attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(ThemeContext)>;

/// Owner of the appearance mode.
pub struct ThemeStore<S: KeyValueStore> {
    mode: AppearanceMode,
    storage: S,
    document: DocumentRoot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Creates the store from persisted state.
    ///
    /// A missing, unreadable or unrecognized value yields light mode. No error
    /// is surfaced; read failures are logged and degrade to the default.
    pub fn initialize(storage: S) -> Self {
        let stored = match storage.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read theme preference, using light mode: {e:#}");
                None
            }
        };

        let mode = AppearanceMode::from_marker(stored.as_deref());
        debug!("Initial appearance mode: {mode}");

        let mut store = Self {
            mode,
            storage,
            document: DocumentRoot::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.apply_side_effects();
        store
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> AppearanceMode {
        self.mode
    }

    /// Convenience for `mode().is_dark()`.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Tokens for the current mode.
    #[must_use]
    pub fn current_tokens(&self) -> &'static StyleTokens {
        self.mode.tokens()
    }

    /// Theme handle for rendering.
    #[must_use]
    pub fn context(&self) -> ThemeContext {
        ThemeContext::for_mode(self.mode)
    }

    /// Document-level attributes maintained by the store.
    #[must_use]
    pub fn document(&self) -> &DocumentRoot {
        &self.document
    }

    /// Backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Flips the mode, persists it, updates the document attribute and
    /// notifies every subscriber before returning.
    pub fn toggle(&mut self) -> AppearanceMode {
        self.mode = self.mode.toggled();
        debug!("Appearance mode toggled to {}", self.mode);

        self.apply_side_effects();

        let context = self.context();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(context);
        }

        self.mode
    }

    /// Switches to `mode` through [`ThemeStore::toggle`] if it differs.
    ///
    /// Returns whether a change happened.
    pub fn set_mode(&mut self, mode: AppearanceMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.toggle();
        true
    }

    /// Registers a callback invoked with the new context on every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(ThemeContext) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn apply_side_effects(&mut self) {
        let marker = self.mode.as_str();

        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, marker) {
            warn!("Failed to persist theme preference: {e:#}");
        }

        self.document.set_attribute(THEME_ATTRIBUTE, marker);
    }
}

impl<S: KeyValueStore> fmt::Debug for ThemeStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("document", &self.document)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
