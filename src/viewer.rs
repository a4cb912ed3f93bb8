//! Standalone window backed by winit that renders the controlled box.
//!
//! The viewer translates winit window events into [`InputEvent`]s, feeds
//! them to an [`OrientationController`], and advances the controller once
//! per `RedrawRequested`.
//!
//! ```no_run
//! # use tumble::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("Box")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use glam::{Mat4, Vec2};
use web_time::Duration;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    camera::Camera,
    controller::OrientationController,
    error::TumbleError,
    gpu::{box_pass::BoxPass, render_context::RenderContext},
    input::{InputEvent, KeyAction, TouchTracker},
    options::Options,
    util::frame_timing::FrameTiming,
};

/// Browser-equivalent pixels per scrolled line.
const LINE_HEIGHT_PX: f32 = 100.0;

/// Eased values closer than this to their targets stop requesting redraws.
const SETTLE_EPSILON: f32 = 1e-4;

const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Convert a winit scroll delta to a browser-convention `deltaY` in pixels.
///
/// winit reports scrolling up as positive; browsers report scrolling down
/// as positive.
#[must_use]
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    preset: Option<PathBuf>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Tumble", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            preset: None,
            title: "Tumble".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Remember the preset file the options came from, so
    /// [`KeyAction::ReloadOptions`] can re-read it.
    #[must_use]
    pub fn with_preset(mut self, path: impl Into<PathBuf>) -> Self {
        self.preset = Some(path.into());
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            preset: self.preset,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays a draggable, zoomable box.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    preset: Option<PathBuf>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`TumbleError::InvalidOptions`] for unusable options and
    /// [`TumbleError::Viewer`] if the event loop cannot start.
    pub fn run(self) -> Result<(), TumbleError> {
        let mut app = ViewerApp::new(self.options, self.preset, self.title)?;

        let event_loop =
            EventLoop::new().map_err(|e| TumbleError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        log::info!("starting viewer");
        event_loop
            .run_app(&mut app)
            .map_err(|e| TumbleError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU resources, created once the window exists.
struct GpuState {
    context: RenderContext,
    pass: BoxPass,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    controller: OrientationController,
    touches: TouchTracker,
    /// Last cursor position; winit button events carry no position.
    cursor: Vec2,
    options: Options,
    preset: Option<PathBuf>,
    title: String,
    frame_timing: FrameTiming,
}

impl ViewerApp {
    fn new(
        options: Options,
        preset: Option<PathBuf>,
        title: String,
    ) -> Result<Self, TumbleError> {
        options.validate()?;
        let controller = OrientationController::new(options.controls)?;
        Ok(Self {
            window: None,
            gpu: None,
            controller,
            touches: TouchTracker::default(),
            cursor: Vec2::ZERO,
            options,
            preset,
            title,
            frame_timing: FrameTiming::new(FPS_REPORT_INTERVAL),
        })
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    /// Feed one event to the controller and schedule a frame if it acted.
    fn dispatch(&mut self, event: &InputEvent) {
        if self.controller.handle_event(event).is_consumed() {
            self.request_redraw();
        }
    }

    fn apply_key(&mut self, event_loop: &ActiveEventLoop, key: &str) {
        match self.options.keybindings.lookup(key) {
            Some(KeyAction::ResetView) => {
                self.controller.reset_view();
                self.request_redraw();
            }
            Some(KeyAction::Quit) => event_loop.exit(),
            Some(KeyAction::ReloadOptions) => {
                if let Err(e) = self.reload_options() {
                    log::warn!("keeping current options: {e}");
                }
                self.request_redraw();
            }
            None => {}
        }
    }

    /// Re-read the preset file and apply it. Without a preset this is a
    /// no-op; on failure the current options stay in effect.
    fn reload_options(&mut self) -> Result<(), TumbleError> {
        let Some(path) = &self.preset else {
            log::debug!("no preset to reload");
            return Ok(());
        };
        let options = Options::load(path)?;
        self.apply_options(options)
    }

    /// Swap in new options: controls go to the controller, scene settings
    /// to the box pass. Camera options apply from the next frame.
    fn apply_options(&mut self, options: Options) -> Result<(), TumbleError> {
        options.validate()?;
        self.controller.set_options(options.controls)?;
        if let Some(gpu) = &mut self.gpu {
            gpu.pass.set_scene(&gpu.context, &options.scene);
        }
        self.options = options;
        Ok(())
    }

    fn redraw(&mut self) {
        let frame = self.controller.tick();
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let camera = Camera::from_transform(
            &frame,
            gpu.context.aspect(),
            &self.options.camera,
        );
        let model = Mat4::from_quat(frame.object_rotation());
        gpu.pass.update(&gpu.context, &camera, model);

        match gpu.context.get_next_frame() {
            Ok(surface_frame) => {
                let view = surface_frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                let mut encoder = gpu.context.create_encoder();
                gpu.pass.render(&mut encoder, &view);
                gpu.context.submit(encoder);
                if let Some(w) = &self.window {
                    w.pre_present_notify();
                }
                surface_frame.present();
            }
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::warn!("surface lost, reconfiguring");
                let (w, h) = (gpu.context.config.width, gpu.context.config.height);
                gpu.context.resize(w, h);
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }

        self.frame_timing.end_frame();
        if let Some(fps) = self.frame_timing.take_report() {
            log::debug!(
                "{:.1} fps after {} frames",
                fps,
                self.frame_timing.frame_index()
            );
        }

        if !self.controller.is_settled(SETTLE_EPSILON) {
            self.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.6) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.6) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width, inner.height),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };
        let pass = BoxPass::new(&context, &self.options.scene);

        window.request_redraw();
        self.gpu = Some(GpuState { context, pass });
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(size.width, size.height);
                    gpu.pass.resize(&gpu.context);
                }
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                let event = if state == ElementState::Pressed {
                    InputEvent::PointerDown {
                        x: self.cursor.x,
                        y: self.cursor.y,
                    }
                } else {
                    InputEvent::PointerUp
                };
                self.dispatch(&event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.dispatch(&InputEvent::PointerMove {
                    x: self.cursor.x,
                    y: self.cursor.y,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.dispatch(&InputEvent::PointerLeave);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.dispatch(&InputEvent::Wheel {
                    delta_y: wheel_delta_y(delta),
                });
            }

            WindowEvent::Touch(touch) => {
                let pos = Vec2::new(
                    touch.location.x as f32,
                    touch.location.y as f32,
                );
                if let Some(event) =
                    self.touches.handle(touch.id, touch.phase.into(), pos)
                {
                    self.dispatch(&event);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.apply_key(event_loop, &format!("{code:?}"));
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;

    use super::*;

    #[test]
    fn line_scroll_up_zooms_in() {
        assert_eq!(
            wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 1.0)),
            -100.0
        );
        assert_eq!(
            wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -2.0)),
            200.0
        );
    }

    #[test]
    fn pixel_scroll_is_negated() {
        let delta =
            MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 42.0));
        assert_eq!(wheel_delta_y(delta), -42.0);
    }

    #[test]
    fn builder_defaults() {
        let viewer = Viewer::builder().build();
        assert_eq!(viewer.title, "Tumble");
        assert_eq!(viewer.options, Options::default());
        assert!(viewer.preset.is_none());
    }

    fn preset_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("tumble-viewer-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reload_applies_edited_preset() {
        let dir = preset_dir("reload");
        let path = dir.join("preset.toml");
        Options::default().save(&path).unwrap();

        let mut app =
            ViewerApp::new(Options::default(), Some(path.clone()), "t".into())
                .unwrap();

        let mut edited = Options::default();
        edited.controls.zoom_max = 8.0;
        edited.scene.ambient = 0.5;
        edited.save(&path).unwrap();

        app.reload_options().unwrap();
        assert_eq!(app.options, edited);
        assert_eq!(app.controller.options().zoom_max, 8.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn broken_preset_keeps_current_options() {
        let dir = preset_dir("broken");
        let path = dir.join("preset.toml");
        std::fs::write(&path, "[controls]\nzoom_min = 9.0\nzoom_max = 4.0\n")
            .unwrap();

        let mut app =
            ViewerApp::new(Options::default(), Some(path), "t".into()).unwrap();
        assert!(app.reload_options().is_err());
        assert_eq!(app.options, Options::default());
        assert_eq!(*app.controller.options(), Options::default().controls);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn reload_without_preset_is_a_no_op() {
        let mut app =
            ViewerApp::new(Options::default(), None, "t".into()).unwrap();
        app.reload_options().unwrap();
        assert_eq!(app.options, Options::default());
    }
}
