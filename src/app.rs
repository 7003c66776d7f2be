use anyhow::Context;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::{
    config::IslandConfig,
    game::IslandGame,
    gfx::picking::screen_to_ndc,
    simulation::Clock,
};

const WINDOW_WIDTH: u32 = 1200;
const WINDOW_HEIGHT: u32 = 800;

/// Window shell around [`IslandGame`]: owns the clock, forwards input and
/// mirrors the score readout into the window title.
///
/// Drawing is left to a renderer sampling the game's scene each frame.
pub struct IslandApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    game: IslandGame,
    clock: Clock,
    cursor: Option<PhysicalPosition<f64>>,
    size: PhysicalSize<u32>,
    shown_revision: Option<u64>,
}

impl IslandApp {
    /// Create the event loop and the game
    pub fn new(config: IslandConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let aspect = WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32;
        let game = IslandGame::new(config, aspect).context("invalid island configuration")?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                game,
                clock: Clock::new(),
                cursor: None,
                size: PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                shown_revision: None,
            },
        })
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated with an error")
    }
}

impl AppState {
    fn click(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if self.size.width == 0 || self.size.height == 0 {
            return;
        }

        let ndc = screen_to_ndc(
            (cursor.x as f32, cursor.y as f32),
            (self.size.width as f32, self.size.height as f32),
        );
        let outcome = self.game.click(ndc, self.clock.elapsed());
        log::debug!("Click at {:?}: {:?}", ndc, outcome);
    }

    fn sync_title(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        let status = self.game.status();
        if self.shown_revision != Some(status.revision()) {
            window.set_title(status.text());
            self.shown_revision = Some(status.revision());
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.game.status().text())
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window_handle = Arc::new(window);
                let size = window_handle.inner_size();
                self.size = size;
                self.game
                    .scene_mut()
                    .camera_manager
                    .camera
                    .resize_projection(size.width, size.height);
                self.window = Some(window_handle);
                log::info!("Window created ({}x{})", size.width, size.height);
            }
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.size = size;
                self.game
                    .scene_mut()
                    .camera_manager
                    .camera
                    .resize_projection(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => self.click(),
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                self.game.frame(frame);
                self.sync_title();
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        self.game.scene_mut().camera_manager.process_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
