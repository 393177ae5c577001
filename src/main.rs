use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use dash_platformer::engine::game_loop::GameLoop;
use dash_platformer::engine::host::{LogRenderer, TitleBarHud};
use dash_platformer::engine::input::{Action, InputManager};
use dash_platformer::game::player::{ActionSource, PlayerConfig, PlayerController};
use dash_platformer::game::{CooldownDisplay, SpriteRenderer};

const WINDOW_TITLE: &str = "Dash Platformer";
const DEFAULT_CONFIG_PATH: &str = "config/player.toml";

/// Load the player config, falling back to defaults when the file is missing
fn load_config(path: &Path) -> Result<PlayerConfig> {
    if !path.exists() {
        warn!("No config at {}, using defaults", path.display());
        return Ok(PlayerConfig::default());
    }
    let config = PlayerConfig::load(path)
        .with_context(|| format!("Failed to load player config from {}", path.display()))?;
    info!("Loaded player config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Dash Platformer...");

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = load_config(&config_path)?;
    let mut controller = PlayerController::new(config).context("Invalid player config")?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
        // The ground line comes from the player config and does not follow the window
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputManager::default();
    input.resize(window.inner_size(), window.scale_factor());
    let mut game_loop = GameLoop::new();
    let mut hud = TitleBarHud::new(WINDOW_TITLE);
    let mut renderer = LogRenderer::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state == ElementState::Pressed
                {
                    elwt.exit();
                    return;
                }
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Touch(touch),
                ..
            } => {
                input.process_touch_event(&touch);
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                // Also fires when the window moves to a display with another scale
                input.resize(size, window.scale_factor());
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key-up events are lost while unfocused
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.player().just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }

                let dt = game_loop.begin_frame();
                if !game_loop.is_paused() {
                    controller.step(&input.snapshot(), dt);
                }
                input.update();

                renderer.draw(&controller.sprite_view());
                hud.show(&controller.cooldown_readouts());
                hud.set_fps(game_loop.fps());
                if let Some(title) = hud.take_changed() {
                    window.set_title(title);
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!(
                    "Ran {} frames in {:.1}s",
                    game_loop.frame_count(),
                    game_loop.elapsed().as_secs_f32()
                );
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
