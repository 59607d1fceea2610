use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::prefs::Preferences;

/// Preference key recording a completed copy.
pub const ASSETS_COPIED_KEY: &str = "assets_copied";

/// When the bundled tree is copied.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapPolicy {
    /// Copy until one copy completes without failures, then persist the flag.
    #[default]
    Once,
    /// Copy on every launch; the flag is neither read nor written.
    EveryLaunch,
}

/// Tally of a tree copy.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CopyReport {
    pub files: usize,
    pub failed: usize,
}

impl CopyReport {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BootstrapOutcome {
    /// The flag says a previous launch already copied.
    Skipped,
    Copied(CopyReport),
}

/// Ensures `dest` exists and holds the bundled tree according to `policy`.
pub fn bootstrap_assets(
    bundled: &Path,
    dest: &Path,
    prefs: &mut Preferences,
    policy: BootstrapPolicy,
) -> Result<BootstrapOutcome> {
    fs::create_dir_all(dest)
        .with_context(|| format!("failed to create resource dir {}", dest.display()))?;

    if policy == BootstrapPolicy::Once && prefs.get_bool(ASSETS_COPIED_KEY, false) {
        log::debug!("assets already copied to {}", dest.display());
        return Ok(BootstrapOutcome::Skipped);
    }

    log::info!("copying assets {} -> {}", bundled.display(), dest.display());
    let report = copy_tree(bundled, dest)?;

    if report.is_complete() {
        log::debug!("copied {} asset files", report.files);
        if policy == BootstrapPolicy::Once {
            prefs.set_bool(ASSETS_COPIED_KEY, true);
            // Assets are in place either way; an unsaved flag only costs a re-copy.
            if let Err(e) = prefs.commit() {
                log::warn!("failed to persist {ASSETS_COPIED_KEY}: {e:#}");
            }
        }
    } else {
        log::warn!(
            "asset copy incomplete: {} copied, {} failed",
            report.files,
            report.failed
        );
    }

    Ok(BootstrapOutcome::Copied(report))
}

/// Recursively copies `src` into `dst`, overwriting existing files.
///
/// Failing to list `src` itself is an error. Failures below it are logged,
/// counted in the report, and skipped.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyReport> {
    let entries = fs::read_dir(src)
        .with_context(|| format!("failed to list bundled assets in {}", src.display()))?;

    let mut report = CopyReport::default();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::error!("failed to read entry in {}: {e}", src.display());
                report.failed += 1;
                continue;
            }
        };

        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            let nested = fs::create_dir_all(&to)
                .with_context(|| format!("failed to create {}", to.display()))
                .and_then(|()| copy_tree(&from, &to));
            match nested {
                Ok(r) => {
                    report.files += r.files;
                    report.failed += r.failed;
                }
                Err(e) => {
                    log::error!("failed to copy directory {}: {e:#}", from.display());
                    report.failed += 1;
                }
            }
            continue;
        }

        log::trace!("copy {}", from.display());
        match fs::copy(&from, &to) {
            Ok(_) => report.files += 1,
            Err(e) => {
                log::error!("failed to copy file {}: {e}", from.display());
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_tree(root: &Path) {
        fs::create_dir_all(root.join("shaders")).unwrap();
        fs::write(root.join("scene.json"), "{}").unwrap();
        fs::write(root.join("shaders").join("pbr.vs"), "void main() {}").unwrap();
    }

    #[test]
    fn copies_nested_tree_and_creates_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let bundled = tmp.path().join("bundled");
        let dest = tmp.path().join("files").join("app");
        bundled_tree(&bundled);

        let mut prefs = Preferences::open(tmp.path().join("prefs.json")).unwrap();
        let outcome = bootstrap_assets(&bundled, &dest, &mut prefs, BootstrapPolicy::Once).unwrap();

        assert_eq!(outcome, BootstrapOutcome::Copied(CopyReport { files: 2, failed: 0 }));
        assert_eq!(fs::read_to_string(dest.join("scene.json")).unwrap(), "{}");
        assert!(dest.join("shaders").join("pbr.vs").is_file());
    }

    #[test]
    fn once_policy_skips_second_launch() {
        let tmp = tempfile::tempdir().unwrap();
        let bundled = tmp.path().join("bundled");
        let dest = tmp.path().join("app");
        let prefs_path = tmp.path().join("prefs.json");
        bundled_tree(&bundled);

        let mut prefs = Preferences::open(&prefs_path).unwrap();
        bootstrap_assets(&bundled, &dest, &mut prefs, BootstrapPolicy::Once).unwrap();

        let mut relaunch = Preferences::open(&prefs_path).unwrap();
        let outcome =
            bootstrap_assets(&bundled, &dest, &mut relaunch, BootstrapPolicy::Once).unwrap();
        assert_eq!(outcome, BootstrapOutcome::Skipped);
    }

    #[test]
    fn unsaved_flag_still_reports_copy() {
        let tmp = tempfile::tempdir().unwrap();
        let bundled = tmp.path().join("bundled");
        let dest = tmp.path().join("app");
        let prefs_path = tmp.path().join("prefs.json");
        bundled_tree(&bundled);

        let mut prefs = Preferences::open(&prefs_path).unwrap();
        // A directory in the way makes the preference write fail.
        fs::create_dir_all(&prefs_path).unwrap();

        let outcome = bootstrap_assets(&bundled, &dest, &mut prefs, BootstrapPolicy::Once).unwrap();
        assert_eq!(outcome, BootstrapOutcome::Copied(CopyReport { files: 2, failed: 0 }));
        assert!(dest.join("scene.json").is_file());
        assert!(prefs_path.is_dir());
    }

    #[test]
    fn every_launch_policy_always_copies_and_never_persists() {
        let tmp = tempfile::tempdir().unwrap();
        let bundled = tmp.path().join("bundled");
        let dest = tmp.path().join("app");
        let prefs_path = tmp.path().join("prefs.json");
        bundled_tree(&bundled);

        for _ in 0..2 {
            let mut prefs = Preferences::open(&prefs_path).unwrap();
            let outcome =
                bootstrap_assets(&bundled, &dest, &mut prefs, BootstrapPolicy::EveryLaunch)
                    .unwrap();
            assert!(matches!(outcome, BootstrapOutcome::Copied(_)));
        }
        assert!(!prefs_path.exists());
    }

    #[test]
    fn missing_bundle_is_an_error_but_destination_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("app");
        let mut prefs = Preferences::open(tmp.path().join("prefs.json")).unwrap();

        let result =
            bootstrap_assets(&tmp.path().join("nope"), &dest, &mut prefs, BootstrapPolicy::Once);

        assert!(result.is_err());
        assert!(dest.is_dir());
        assert!(!prefs.get_bool(ASSETS_COPIED_KEY, false));
    }

    #[test]
    fn policy_parses_from_snake_case() {
        let p: BootstrapPolicy = serde_json::from_str(r#""every_launch""#).unwrap();
        assert_eq!(p, BootstrapPolicy::EveryLaunch);
    }
}
