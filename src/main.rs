use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use flyby::camera::FlightCamera;
use flyby::cli::Cli;
use flyby::frame::FrameClock;
use flyby::path::CameraPath;
use flyby::renderer::SceneRenderer;
use flyby::scenes::SceneConfig;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

struct App {
    cli: Cli,
    scene: SceneConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: FlightCamera,
    clock: FrameClock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli, scene: SceneConfig) -> anyhow::Result<Self> {
        let path = CameraPath::from_config(&scene.path).context("Invalid camera path")?;
        let step = cli.step.unwrap_or(scene.path.step);
        let camera = FlightCamera::new(path, scene.path.tangent_params, step);

        Ok(Self {
            cli,
            scene,
            window: None,
            renderer: None,
            camera,
            clock: FrameClock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        })
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            if !self.cli.no_ui {
                println!("FPS: {:.1}", self.fps);
            }
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Flyby")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let ui_enabled = !self.cli.no_ui;
            let renderer = match pollster::block_on(SceneRenderer::new(
                window.clone(),
                &self.scene,
                ui_enabled,
            )) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return; // egui consumed the event
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                self.update_fps(frame.delta);
                self.camera.update();

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    if let Err(e) = renderer.render(&self.camera, window, self.fps) {
                        eprintln!("Render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scene = SceneConfig::resolve(&cli.scene)
        .with_context(|| format!("Failed to load scene '{}'", cli.scene))?;
    println!(
        "Scene '{}': {} cubes, {} waypoints",
        cli.scene,
        scene.cubes.len(),
        scene.path.waypoints.len()
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, scene)?;

    println!("Flyby - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
