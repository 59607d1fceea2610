use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;

use surfhost_core::config::ViewConfig;
use surfhost_core::engine::{Engine, TracedEngine};
use surfhost_core::input::MouseButton;
use surfhost_core::logging::init_logging;
use surfhost_core::surface::TargetId;
use surfhost_core::view::RenderView;
use surfhost_core::window::{Runtime, RuntimeConfig};

/// Frames between progress lines.
const FRAME_REPORT_INTERVAL: u64 = 300;

/// Stand-in engine that reports what it is asked to do.
#[derive(Debug, Default)]
struct ConsoleEngine {
    frames: AtomicU64,
}

impl Engine for ConsoleEngine {
    fn engine_init(&self) {
        log::info!("engine: init");
    }

    fn scene_init(&self) {
        log::info!("engine: scene init");
    }

    fn engine_start(&self) {
        log::info!("engine: start");
    }

    fn bind(&self, target: TargetId, width: u32, height: u32) {
        log::info!("engine: bind {target} ({width}x{height})");
    }

    fn resize(&self, width: u32, height: u32) {
        log::info!("engine: resize {width}x{height}");
    }

    fn advance_simulation(&self) {}

    fn render_frame(&self) {
        let n = self.frames.fetch_add(1, Ordering::Relaxed) + 1;
        if n % FRAME_REPORT_INTERVAL == 0 {
            log::info!("engine: {n} frames rendered");
        }
    }

    fn register_search_path(&self, path: &Path) {
        log::info!("engine: search path {}", path.display());
    }

    fn button_event(&self, button: MouseButton, down: bool, x: i32, y: i32) {
        let dir = if down { "down" } else { "up" };
        log::info!("engine: {button:?} {dir} at {x},{y}");
    }

    fn pointer_move(&self, x: i32, y: i32) {
        log::debug!("engine: drag to {x},{y}");
    }

    fn pinch(&self, scale: f32) {
        log::info!("engine: pinch x{scale:.3}");
    }
}

fn default_config() -> ViewConfig {
    ViewConfig {
        app_path: "/surfhost_demo/".to_string(),
        storage_root: std::env::temp_dir().join("surfhost"),
        bundled_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("bundled"),
        ..ViewConfig::default()
    }
}

fn main() -> Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => ViewConfig::from_json_file(Path::new(&path))?,
        None => default_config(),
    };

    init_logging(config.logging());

    let engine = Arc::new(TracedEngine::new(ConsoleEngine::default()));
    let view = RenderView::new(&config, engine)?;

    let runtime = RuntimeConfig {
        title: "surfhost demo".to_string(),
        ..RuntimeConfig::default()
    };
    Runtime::run(runtime, view)
}
