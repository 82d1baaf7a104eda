// Seams between the controller and the collaborators that consume its output

use glam::Vec2;

use crate::engine::audio::SoundBank;
use crate::engine::physics::MotionBuffer;

use super::state::{AnimState, CharacterStatus};

/// Rigid body the controller drives. Integration itself happens elsewhere.
pub trait PhysicsBody {
    /// Current linear velocity of the body
    fn linear_velocity(&self) -> Vec2;

    /// Overwrite the horizontal velocity, keeping the vertical component
    fn set_horizontal_velocity(&mut self, vx: f32);

    /// Queue an instantaneous impulse
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// Receives animator parameters and sprite orientation
pub trait AnimationSink {
    fn set_params(&mut self, params: &AnimatorParams);

    fn set_flip_horizontal(&mut self, flip: bool);
}

/// Receives named sound triggers
pub trait SoundSink {
    fn play(&mut self, name: &str);
}

/// Typed animator parameter set published after every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorParams {
    pub state: AnimState,
    pub grounded: bool,
    pub can_move: bool,
    pub is_full: bool,
    pub is_inhaling: bool,
    pub jump_charges: u32,
    pub inhale_charges: u32,
    pub timeout_count: u32,
}

impl AnimatorParams {
    pub fn capture(state: AnimState, status: &CharacterStatus) -> Self {
        Self {
            state,
            grounded: status.grounded,
            can_move: status.can_move,
            is_full: status.is_full,
            is_inhaling: status.is_inhaling,
            jump_charges: status.jump_charges,
            inhale_charges: status.inhale_charges,
            timeout_count: status.timeout_count,
        }
    }
}

impl PhysicsBody for MotionBuffer {
    fn linear_velocity(&self) -> Vec2 {
        self.velocity()
    }

    fn set_horizontal_velocity(&mut self, vx: f32) {
        self.set_horizontal(vx);
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.add_impulse(impulse);
    }
}

impl SoundSink for SoundBank {
    fn play(&mut self, name: &str) {
        SoundBank::play(self, name);
    }
}
