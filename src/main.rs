//! Tesseract4D - interactive 4D hypercube viewer
//!
//! Drag with the left button to turn the tesseract in the XZ/YZ planes, with
//! the right button to turn it through W, and scroll to zoom.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use tesseract4d::config::AppConfig;
use tesseract4d::input::{InputAction, InputMapper};
use tesseract4d::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use tesseract4d_input::PointerController;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    pointer: PointerController,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let simulation = SimulationSystem::new(config.hypercube.scale());

        Self {
            config,
            window: None,
            render: None,
            simulation,
            pointer: PointerController::new(),
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::LeaveFullscreen => {
                if let Some(window) = &self.window {
                    window.leave_fullscreen();
                }
            }
            InputAction::Exit => {
                log::info!("Exit requested");
                event_loop.exit();
            }
        }
    }

    /// Update phase followed by the draw phase
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let input = self.pointer.take_frame_input();
        let result = self.simulation.update(&input);

        if let Some(window) = &mut self.window {
            window.update_title(self.simulation.scale());
        }

        if let Some(render) = &mut self.render {
            render.apply(&result, self.simulation.streams());

            match render.render_frame() {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => {
                    log::warn!("Surface lost; reconfiguring");
                    render.reconfigure();
                }
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}; skipping frame", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(window.window().clone(), &self.config, self.simulation.streams()) {
            Ok(render) => {
                let (width, height) = render.size();
                log::info!("Renderer ready at {}x{}", width, height);
                self.render = Some(render);
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let fullscreen = self.window.as_ref().is_some_and(|w| w.is_fullscreen());
                    if let Some(action) =
                        InputMapper::map_keyboard(key, event.state, event.repeat, fullscreen)
                    {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.process_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.process_cursor_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.pointer.process_mouse_wheel(delta);
            }

            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    let config = AppConfig::load();

    // RUST_LOG wins over the configured level
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting Tesseract4D");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
