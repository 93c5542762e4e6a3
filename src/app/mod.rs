//! Winit application runner.
//!
//! Owns the window, the GPU stage and the animation loop. One frame is:
//! drain events, advance the animation (which may end the story), render
//! the selected draw set, then sleep off the remainder of the fixed frame
//! interval. The loop exits on window close, any key release, or the
//! asteroid phase crossing its terminal threshold.

use std::sync::Arc;

use glam::Vec3;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::animation::{AnimationDriver, FramePlan};
use crate::assets::AssetServer;
use crate::errors::{AstrofallError, Result};
use crate::renderer::context::WgpuContext;
use crate::renderer::settings::RenderSettings;
use crate::renderer::Renderer;
use crate::scenario::Scenario;
use crate::scene::{Camera, SceneGraph};
use crate::utils::{FramePacer, Timer};

/// Everything that exists only after the window is up.
struct Stage {
    renderer: Renderer,
    scene: SceneGraph,
    scenario: Scenario,
    driver: AnimationDriver,
    camera: Camera,
    pacer: FramePacer,
    timer: Timer,
}

/// Application entry point; construct, configure, [`run`](App::run).
pub struct App {
    title: String,
    settings: RenderSettings,

    window: Option<Arc<Window>>,
    stage: Option<Stage>,
    /// First fatal initialization error, surfaced by `run` after the loop.
    error: Option<AstrofallError>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Astrofall".into(),
            settings: RenderSettings::default(),
            window: None,
            stage: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Blocks until the animation ends or the window is closed.
    ///
    /// Initialization failures inside the event loop (GPU context, shader
    /// validation, texture loading) are carried out of the loop and
    /// returned here, so the process exits with a failure code.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn init_stage(&self, window: Arc<Window>) -> Result<Stage> {
        let context = pollster::block_on(WgpuContext::new(window, &self.settings))?;

        let mut assets = AssetServer::new();
        let mut scene = SceneGraph::new();
        let scenario = Scenario::build(&mut scene, &mut assets)?;

        let renderer = Renderer::new(context, &self.settings, &assets)?;

        let mut camera = Camera::new_perspective(45.0, self.settings.aspect(), 0.1, 1000.0);
        camera.look_at_from(Vec3::new(0.0, 2.0, 4.0), Vec3::ZERO, Vec3::Y);

        Ok(Stage {
            renderer,
            scene,
            scenario,
            driver: AnimationDriver::new(),
            camera,
            pacer: FramePacer::new(self.settings.target_fps),
            timer: Timer::new(),
        })
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(stage) = &mut self.stage else {
            return;
        };

        stage.pacer.begin_frame();
        stage.timer.tick();

        match stage.driver.advance(&mut stage.scene, &stage.scenario) {
            FramePlan::Halt => {
                log::info!(
                    "Animation finished after {} frames in {:.2?}",
                    stage.timer.frame_count,
                    stage.timer.elapsed
                );
                event_loop.exit();
                return;
            }
            FramePlan::Draw(set) => {
                let roots = stage.scenario.roots_for(set);
                stage.renderer.render(&stage.scene, &roots, &stage.camera);
            }
        }

        stage.pacer.end_frame();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        log::info!("Initializing renderer backend...");
        match self.init_stage(window) {
            Ok(stage) => self.stage = Some(stage),
            Err(e) => {
                log::error!("Fatal initialization error: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            // Any key release ends the show, same as closing the window.
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Released =>
            {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(stage) = &mut self.stage {
                    stage.renderer.resize(size.width, size.height);
                    if size.height > 0 {
                        stage
                            .camera
                            .set_aspect(size.width as f32 / size.height as f32);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.stage.is_some()
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
    }
}
