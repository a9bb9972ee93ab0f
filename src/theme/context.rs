//! Theme context

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tokio::sync::watch;
use tracing::debug;

/// Colour scheme chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    Dark,
    /// Follow the system
    #[default]
    Auto,
}

/// Colour scheme actually applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedScheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedScheme {
    /// Class toggled on the document root
    pub fn document_class(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }

    /// The other scheme
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<ResolvedScheme> for ColorScheme {
    fn from(scheme: ResolvedScheme) -> Self {
        match scheme {
            ResolvedScheme::Light => Self::Light,
            ResolvedScheme::Dark => Self::Dark,
        }
    }
}

/// Everything the theme depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub preference: ColorScheme,
    /// Scheme reported by the system
    pub system: ResolvedScheme,
}

impl ThemeState {
    /// Scheme to apply
    pub fn resolved(&self) -> ResolvedScheme {
        match self.preference {
            ColorScheme::Light => ResolvedScheme::Light,
            ColorScheme::Dark => ResolvedScheme::Dark,
            ColorScheme::Auto => self.system,
        }
    }
}

static GLOBAL: LazyLock<ThemeContext> = LazyLock::new(ThemeContext::new);

/// Single source of truth for the theme
///
/// Subscribers are notified only when the state actually changes.
#[derive(Debug)]
pub struct ThemeContext {
    sender: watch::Sender<ThemeState>,
}

impl ThemeContext {
    /// Context with the default state
    pub fn new() -> Self {
        Self::with_state(ThemeState::default())
    }

    /// Context with an initial state
    pub fn with_state(state: ThemeState) -> Self {
        let (sender, _) = watch::channel(state);
        Self { sender }
    }

    /// The process-wide context
    pub fn global() -> &'static ThemeContext {
        &GLOBAL
    }

    /// Current state
    pub fn state(&self) -> ThemeState {
        *self.sender.borrow()
    }

    /// Scheme to apply right now
    pub fn resolved(&self) -> ResolvedScheme {
        self.state().resolved()
    }

    /// Receiver that observes every subsequent change
    pub fn subscribe(&self) -> watch::Receiver<ThemeState> {
        self.sender.subscribe()
    }

    /// Store the user's preference; returns whether anything changed
    pub fn set_preference(&self, preference: ColorScheme) -> bool {
        self.update(|state| state.preference = preference)
    }

    /// Record the system scheme; returns whether anything changed
    pub fn set_system_scheme(&self, system: ResolvedScheme) -> bool {
        self.update(|state| state.system = system)
    }

    /// Switch to the opposite of what is applied now
    ///
    /// The result is stored as an explicit preference, so it sticks even if
    /// the system scheme changes later.
    pub fn toggle(&self) -> ResolvedScheme {
        let mut applied = ResolvedScheme::default();
        self.update(|state| {
            applied = state.resolved().flipped();
            state.preference = applied.into();
        });
        applied
    }

    fn update(&self, change: impl FnOnce(&mut ThemeState)) -> bool {
        self.sender.send_if_modified(|state| {
            let before = *state;
            change(state);
            let modified = *state != before;
            if modified {
                debug!(
                    preference = ?state.preference,
                    resolved = ?state.resolved(),
                    "Theme changed"
                );
            }
            modified
        })
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}
