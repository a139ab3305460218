use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::frame_clock::FrameClock;
use engine::input::{key_label, InputConfig, KeyboardState};
use engine::renderer::{RenderError, Renderer, ShapeBatch};
use game::{Game, GameConfig};

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u64 = 600;

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Pong...");

    let config = GameConfig::default();
    let bindings = InputConfig::default();
    let screen = config.screen_size;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Pong")
            .with_inner_size(winit::dpi::LogicalSize::new(screen.x, screen.y))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone(), screen))?;
    let mut game = Game::new(config, bindings);
    let mut keyboard = KeyboardState::new();
    let mut clock = FrameClock::new(config.target_fps);
    let mut batch = ShapeBatch::new();
    let mut shown_scores = game.scores();

    info!("Pacing frames every {:?}", clock.frame_interval());

    info!(
        "Controls: left {}/{}, right {}/{}, menu {}, restart {}",
        key_label(bindings.left.up()),
        key_label(bindings.left.down()),
        key_label(bindings.right.up()),
        key_label(bindings.right.down()),
        key_label(bindings.toggle_menu),
        key_label(bindings.restart),
    );

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    keyboard.process_event(&event);
                }
                WindowEvent::Focused(false) => {
                    // Released keys are not reported while unfocused
                    keyboard.reset();
                }
                WindowEvent::RedrawRequested => {
                    let dt = clock.begin_frame();
                    game.update(&keyboard, dt, screen);
                    keyboard.end_frame();

                    game.draw(&mut batch, screen);
                    match renderer.render(&batch) {
                        Ok(()) => {}
                        Err(RenderError::Surface(
                            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated,
                        )) => renderer.reconfigure(),
                        Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                            error!("Out of GPU memory, shutting down");
                            elwt.exit();
                        }
                        Err(e) => warn!("Render error: {}", e),
                    }

                    if game.scores() != shown_scores {
                        shown_scores = game.scores();
                        window.set_title(&format!("Pong {} : {}", shown_scores.0, shown_scores.1));
                    }

                    if clock.frame_count() % FPS_LOG_INTERVAL == 0 {
                        debug!(
                            "{:.1} fps, {:?}, ball speed {:.1}",
                            clock.fps(),
                            game.state(),
                            game.ball().velocity().x.abs()
                        );
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Pace redraws to the target frame rate
                if clock.frame_due() {
                    window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(clock.next_frame_at()));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
