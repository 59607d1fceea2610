use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::engine::Engine;
use crate::input::platform::winit::{map_mouse_button, translate_pinch, translate_touch};
use crate::surface::TargetId;
use crate::view::RenderView;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "surfhost".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window closes.
    pub fn run<E: Engine>(config: RuntimeConfig, view: RenderView<E>) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = HostState::new(config, view);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

/// Hands out target ids for native surfaces.
///
/// A surface lost on suspend comes back as a different native surface, so the
/// next resume gets a fresh id even when the size is unchanged.
#[derive(Debug, Default)]
struct TargetIds {
    next: u64,
    current: Option<TargetId>,
}

impl TargetIds {
    fn acquire(&mut self) -> TargetId {
        if let Some(id) = self.current {
            return id;
        }
        let id = TargetId(self.next);
        self.next += 1;
        self.current = Some(id);
        id
    }

    fn release(&mut self) {
        self.current = None;
    }

    fn current(&self) -> Option<TargetId> {
        self.current
    }
}

struct HostState<E> {
    config: RuntimeConfig,
    view: RenderView<E>,
    window: Option<Window>,
    targets: TargetIds,
    cursor: PhysicalPosition<f64>,
    exit_requested: bool,
}

impl<E: Engine> HostState<E> {
    fn new(config: RuntimeConfig, view: RenderView<E>) -> Self {
        Self {
            config,
            view,
            window: None,
            targets: TargetIds::default(),
            cursor: PhysicalPosition::new(0.0, 0.0),
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn ensure_window(&mut self, event_loop: &ActiveEventLoop) -> Result<&Window> {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title(self.config.title.clone())
                .with_inner_size(self.config.initial_size);

            let window = event_loop
                .create_window(attrs)
                .context("failed to create window")?;
            self.window = Some(window);
        }

        self.window.as_ref().context("window missing after creation")
    }

    fn report_target(&mut self, size: PhysicalSize<u32>) {
        if let Some(target) = self.targets.current() {
            self.view
                .surface_mut()
                .on_target_changed(target, size.width, size.height);
        }
    }
}

impl<E: Engine> ApplicationHandler for HostState<E> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let size = match self.ensure_window(event_loop) {
            Ok(w) => w.inner_size(),
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.request_exit(event_loop);
                return;
            }
        };

        self.view.surface_mut().on_create();

        let target = self.targets.acquire();
        log::debug!("surface available as {target}");
        self.report_target(size);

        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        log::debug!("surface lost");
        self.targets.release();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; the engine animates every frame.
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.request_exit(event_loop),

            WindowEvent::Resized(size) => self.report_target(size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.window.as_ref().map(Window::inner_size) {
                    self.report_target(size);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.targets.current().is_some() {
                    self.view.surface_mut().on_frame_tick();
                }
            }

            WindowEvent::Touch(touch) => {
                self.view.input_mut().on_touch(translate_touch(&touch));
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                self.view
                    .input_mut()
                    .gestures_mut()
                    .on_pointer_move(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_mouse_button(button);
                let (x, y) = (self.cursor.x as f32, self.cursor.y as f32);
                let gestures = self.view.input_mut().gestures_mut();
                match state {
                    ElementState::Pressed => gestures.on_pointer_down(x, y, button),
                    ElementState::Released => gestures.on_pointer_up(x, y, button),
                };
            }

            WindowEvent::PinchGesture { delta, phase, .. } => {
                self.view
                    .input_mut()
                    .gestures_mut()
                    .on_scale_signal(translate_pinch(phase, delta));
            }

            _ => {}
        }
    }
}
