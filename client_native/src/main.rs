//! Native desktop client for Pong
//!
//! Owns the window, keyboard state and frame clock; drives the simulation in
//! `pong_core` once per redraw and draws the result with wgpu.

mod camera;
mod game;
mod input;
mod mesh;
mod renderer;

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowId};

use game::Game;
use input::{KeyboardState, PLAYER_KEYS};
use pong_core::ControlSource;
use renderer::Renderer;

const WINDOW_TITLE: &str = "PONG";

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    game: Game,
    keyboard: KeyboardState,
    last_frame: Option<Instant>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            // Both paddles take keyboard input; swap either side to
            // ControlSource::RuleBasedAi for a computer opponent
            game: Game::new(ControlSource::Human, ControlSource::Human),
            keyboard: KeyboardState::new(),
            last_frame: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        if self.keyboard.is_held(KeyCode::Escape) {
            log::info!("Escape pressed, exiting.");
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        for (player_id, keys) in PLAYER_KEYS.iter().enumerate() {
            let player_id = player_id as u8;
            if self.game.is_human(player_id) {
                self.game
                    .queue_direction(player_id, self.keyboard.direction(*keys));
            }
        }

        self.game.step(dt);

        let events = self.game.events();
        if events.left_scored || events.right_scored {
            let score = self.game.score();
            let side = if events.left_scored { "Left" } else { "Right" };
            log::info!("{} player scores ({} - {})", side, score.left, score.right);
        }

        if let Err(err) = renderer.draw(&self.game) {
            log::warn!("Frame skipped: {err}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let config = self.game.config();
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                config.arena_width as f64,
                config.arena_height as f64,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("Failed to create window"),
        );

        let renderer = Renderer::new(window.clone(), config.arena_width, config.arena_height)
            .expect("Failed to initialize renderer");

        log::info!(
            "Window created: {}x{}",
            config.arena_width,
            config.arena_height
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.handle_key_event(&event);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
