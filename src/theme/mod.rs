//! Theme module
//!
//! One process-wide colour-scheme context. The user's preference and the
//! system scheme are held in a single place and every change is pushed to
//! subscribers.

mod context;

pub use context::{ColorScheme, ResolvedScheme, ThemeContext, ThemeState};
