//! First-run asset bootstrap.
//!
//! Bundled resources ship read-only; the engine needs them in writable
//! storage on its search path. The bootstrap copies the bundled tree before
//! the search path is registered, guarded by a persisted preference.

mod bootstrap;
mod prefs;

pub use bootstrap::{
    bootstrap_assets, copy_tree, BootstrapOutcome, BootstrapPolicy, CopyReport, ASSETS_COPIED_KEY,
};
pub use prefs::Preferences;
