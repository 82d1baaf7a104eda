use anyhow::Result;
use log::{debug, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::physics::{presets, PhysicsWorld, SurfaceTag};
use game::character::{Character, ControllerConfig};

/// Where the character (re)appears
const SPAWN: (f32, f32) = (0.0, 2.0);

/// Falling below this height respawns the character
const KILL_HEIGHT: f32 = -20.0;

/// Lay out the demo level: a long floor, a raised ledge and a present to bump into
fn build_level(physics: &mut PhysicsWorld) {
    let floor = physics.add_rigid_body(presets::static_body(0.0, -0.5));
    physics.add_surface(presets::ground_collider(60.0, 1.0), floor, SurfaceTag::Ground);

    let ledge = physics.add_rigid_body(presets::static_body(-8.0, 3.0));
    physics.add_surface(presets::ground_collider(6.0, 0.5), ledge, SurfaceTag::Ground);

    let present = physics.add_rigid_body(presets::static_body(6.0, 0.5));
    physics.add_surface(presets::hazard_collider(1.0, 1.0), present, SurfaceTag::Hazard);
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Puffball...");

    let config = ControllerConfig::standard();
    config.validate()?;

    let mut physics = PhysicsWorld::new();
    build_level(&mut physics);
    let mut character = Character::new(config, &mut physics, SPAWN.0, SPAWN.1);
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Puffball")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

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
                event: WindowEvent::Focused(false),
                ..
            } => input.reset(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                        PhysicalKey::Code(KeyCode::KeyP) => game_loop.toggle_pause(),
                        PhysicalKey::Code(KeyCode::Backspace) => character.respawn(&mut physics),
                        _ => {}
                    }
                }
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let ticks = game_loop.begin_frame();
                for _ in 0..ticks {
                    let report = character.tick(&mut physics, &input.snapshot());
                    physics.step();
                    input.end_tick();

                    for sound in character.drain_sounds() {
                        debug!("Playing sound {:#x}", sound.as_u64());
                    }
                    if report.flipped {
                        debug!("Now facing {:?}", character.status().facing);
                    }
                }

                character.update_animation_timing(ticks as f32 * game_loop.fixed_timestep());

                let fell_out = character
                    .position(&physics)
                    .is_some_and(|pos| pos.y < KILL_HEIGHT);
                if fell_out {
                    info!("Fell out of the level");
                    character.respawn(&mut physics);
                }

                window.request_redraw();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
