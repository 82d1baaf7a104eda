// Character entity: the controller wired to its rigid body, sprite and sound bank

use glam::Vec2;
use log::info;

use crate::engine::audio::{SoundBank, SoundId};
use crate::engine::input::InputSnapshot;
use crate::engine::physics::{
    presets, ColliderHandle, MotionBuffer, PhysicsWorld, RigidBodyHandle,
};

use super::animation::AnimationPlayer;
use super::config::ControllerConfig;
use super::controller::{ActionController, TickReport};
use super::state::{AnimState, CharacterStatus};

/// Width and height of the character's collider
const BODY_SIZE: (f32, f32) = (1.0, 1.0);

/// Controller driving the bundled collaborators
pub type PlayerController = ActionController<MotionBuffer, AnimationPlayer, SoundBank>;

/// The player character living in a physics world
pub struct Character {
    /// Handle to the character's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the character's collider
    pub collider_handle: ColliderHandle,

    spawn: Vec2,
    controller: PlayerController,
}

impl Character {
    /// Create a character and add it to the physics world
    pub fn new(config: ControllerConfig, physics: &mut PhysicsWorld, spawn_x: f32, spawn_y: f32) -> Self {
        let body_handle = physics.add_rigid_body(presets::player_body(spawn_x, spawn_y));
        let collider_handle =
            physics.add_collider(presets::player_collider(BODY_SIZE.0, BODY_SIZE.1), body_handle);

        let controller = ActionController::new(
            config,
            MotionBuffer::new(),
            AnimationPlayer::with_standard_clips(),
            SoundBank::with_character_clips(),
        );

        info!("Character spawned at ({}, {})", spawn_x, spawn_y);

        Self {
            body_handle,
            collider_handle,
            spawn: Vec2::new(spawn_x, spawn_y),
            controller,
        }
    }

    /// Run one controller tick against the world.
    ///
    /// Call before `PhysicsWorld::step`; contacts come from the previous step.
    pub fn tick(&mut self, physics: &mut PhysicsWorld, input: &InputSnapshot) -> TickReport {
        physics.read_motion(self.body_handle, self.controller.body_mut());
        let contacts = physics.contacts_for(self.collider_handle);

        let report = self.controller.tick(input, &contacts);

        physics.apply_motion(self.body_handle, self.controller.body_mut());
        report
    }

    /// Advance sprite playback (called every frame)
    pub fn update_animation_timing(&mut self, dt: f32) {
        self.controller.animator_mut().update(dt);
    }

    /// Something got caught by the inhale
    pub fn on_capture(&mut self) {
        self.controller.on_capture();
    }

    /// Put the character back at its spawn point, freshly initialized
    pub fn respawn(&mut self, physics: &mut PhysicsWorld) {
        physics.reset_body(self.body_handle, self.spawn.x, self.spawn.y);
        self.controller.respawn();
    }

    /// Sounds triggered since the last call
    pub fn drain_sounds(&mut self) -> Vec<SoundId> {
        self.controller.sounds_mut().drain()
    }

    /// Get character's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    pub fn state(&self) -> AnimState {
        self.controller.state()
    }

    pub fn status(&self) -> &CharacterStatus {
        self.controller.status()
    }

    pub fn animation(&self) -> &AnimationPlayer {
        self.controller.animator()
    }

    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Button;
    use crate::engine::physics::SurfaceTag;

    fn level() -> (PhysicsWorld, Character) {
        let mut world = PhysicsWorld::new();
        let ground = world.add_rigid_body(presets::static_body(0.0, -0.5));
        world.add_surface(presets::ground_collider(40.0, 1.0), ground, SurfaceTag::Ground);

        let character = Character::new(ControllerConfig::default(), &mut world, 0.0, 0.5);
        (world, character)
    }

    fn run(world: &mut PhysicsWorld, character: &mut Character, input: &InputSnapshot, ticks: usize) {
        for _ in 0..ticks {
            character.tick(world, input);
            world.step();
        }
    }

    #[test]
    fn test_walking_moves_right() {
        let (mut world, mut character) = level();
        let start = character.position(&world).map(|p| p.x);

        let input = InputSnapshot::builder().hold(Button::Right).build();
        run(&mut world, &mut character, &input, 30);

        let end = character.position(&world).map(|p| p.x);
        assert_eq!(character.state(), AnimState::Walking);
        assert!(end > start, "{:?} -> {:?}", start, end);
        assert_eq!(character.animation().current(), AnimState::Walking);
    }

    #[test]
    fn test_jump_then_land() {
        let (mut world, mut character) = level();
        let idle = InputSnapshot::default();
        run(&mut world, &mut character, &idle, 10);

        let jump = InputSnapshot::builder().press(Button::Jump).build();
        character.tick(&mut world, &jump);
        world.step();
        assert!(!character.status().grounded);
        assert_eq!(character.status().jump_charges, 5);

        run(&mut world, &mut character, &idle, 240);
        assert!(character.status().grounded);
        assert_eq!(character.status().jump_charges, 6);
        assert_eq!(character.state(), AnimState::Idle);
    }

    #[test]
    fn test_sounds_are_drained() {
        let (mut world, mut character) = level();
        let jump = InputSnapshot::builder().press(Button::Jump).build();
        character.tick(&mut world, &jump);

        assert_eq!(
            character.drain_sounds(),
            vec![SoundId::from_path("sounds/jump.wav")]
        );
        assert!(character.drain_sounds().is_empty());
    }

    #[test]
    fn test_respawn_returns_to_spawn() {
        let (mut world, mut character) = level();
        let input = InputSnapshot::builder().hold(Button::Left).build();
        run(&mut world, &mut character, &input, 30);

        character.respawn(&mut world);
        let pos = character.position(&world);
        assert_eq!(pos, Some(Vec2::new(0.0, 0.5)));
        assert_eq!(character.state(), AnimState::Idle);
        assert_eq!(character.status().facing, Default::default());
    }
}
