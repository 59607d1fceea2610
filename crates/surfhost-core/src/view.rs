//! Render view composition.
//!
//! Owns the surface lifecycle controller and the touch router for one
//! rendering surface, and performs the one-time resource setup they rely on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::assets::{bootstrap_assets, Preferences};
use crate::config::ViewConfig;
use crate::engine::Engine;
use crate::input::TouchRouter;
use crate::surface::SurfaceLifecycleController;

/// A rendering surface bound to an engine.
///
/// `E` is a shared engine handle (`Arc<T>`, `&T`, ...): the controller and the
/// router each hold a clone and may be driven from different host contexts
/// after [`RenderView::into_parts`].
pub struct RenderView<E> {
    surface: SurfaceLifecycleController<E>,
    input: TouchRouter<E>,
    resource_dir: PathBuf,
}

impl<E: Engine + Clone> RenderView<E> {
    /// Bootstraps bundled assets into writable storage, then registers the
    /// resource directory as an engine search path.
    pub fn new(config: &ViewConfig, engine: E) -> Result<Self> {
        let resource_dir = config.resource_dir();

        let mut prefs = Preferences::open(config.preferences_path())?;
        bootstrap_assets(&config.bundled_dir, &resource_dir, &mut prefs, config.bootstrap)
            .context("asset bootstrap failed")?;

        engine.register_search_path(&resource_dir);

        Ok(Self {
            surface: SurfaceLifecycleController::new(engine.clone()),
            input: TouchRouter::with_config(engine, config.scale_detector()),
            resource_dir,
        })
    }
}

impl<E: Engine> RenderView<E> {
    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    pub fn surface_mut(&mut self) -> &mut SurfaceLifecycleController<E> {
        &mut self.surface
    }

    pub fn input_mut(&mut self) -> &mut TouchRouter<E> {
        &mut self.input
    }

    /// Splits the view for hosts that run surface and input callbacks on
    /// separate contexts.
    pub fn into_parts(self) -> (SurfaceLifecycleController<E>, TouchRouter<E>) {
        (self.surface, self.input)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use super::*;
    use crate::assets::BootstrapPolicy;
    use crate::engine::{EngineCall, RecordingEngine};
    use crate::input::{MouseButton, TouchInput, TouchPhase};
    use crate::surface::TargetId;

    fn config(root: &Path) -> ViewConfig {
        let bundled = root.join("bundled");
        fs::create_dir_all(&bundled).unwrap();
        fs::write(bundled.join("scene.json"), "{}").unwrap();

        ViewConfig {
            app_path: "/viewer/".to_string(),
            storage_root: root.join("files"),
            bundled_dir: bundled,
            bootstrap: BootstrapPolicy::Once,
            ..ViewConfig::default()
        }
    }

    #[test]
    fn construction_copies_assets_then_registers_search_path() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = config(tmp.path());
        let engine = Arc::new(RecordingEngine::new());

        let view = RenderView::new(&cfg, Arc::clone(&engine)).unwrap();

        assert!(view.resource_dir().join("scene.json").is_file());
        assert_eq!(
            engine.take(),
            vec![EngineCall::RegisterSearchPath(tmp.path().join("files").join("viewer"))]
        );
    }

    #[test]
    fn bootstrap_failure_does_not_register() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = ViewConfig {
            storage_root: tmp.path().join("files"),
            bundled_dir: tmp.path().join("missing"),
            ..ViewConfig::default()
        };
        let engine = Arc::new(RecordingEngine::new());

        assert!(RenderView::new(&cfg, Arc::clone(&engine)).is_err());
        assert!(engine.is_empty());
    }

    #[test]
    fn parts_share_one_engine() {
        let tmp = tempfile::tempdir().unwrap();
        let engine = Arc::new(RecordingEngine::new());
        let view = RenderView::new(&config(tmp.path()), Arc::clone(&engine)).unwrap();
        engine.take();

        let (mut surface, mut input) = view.into_parts();
        surface.on_create();
        surface.on_target_changed(TargetId(1), 800, 600);
        engine.take();

        input.on_touch(TouchInput::new(0, TouchPhase::Start, 1.0, 2.0));
        surface.on_frame_tick();

        assert_eq!(
            engine.take(),
            vec![
                EngineCall::ButtonEvent { button: MouseButton::Left, down: true, x: 1, y: 2 },
                EngineCall::AdvanceSimulation,
                EngineCall::RenderFrame,
            ]
        );
    }
}
