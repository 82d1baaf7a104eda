// Action controller
//
// Reads one input snapshot per tick, resolves facing and intent, and fires the movement
// and ability triggers. Triggers are silent no-ops when their preconditions fail, so any
// key-mashing is safe. The order of `dispatch` is load-bearing: later steps see the
// effects of earlier ones within the same tick.

use glam::Vec2;
use log::{debug, info};

use crate::engine::input::{Button, InputSnapshot};
use crate::engine::physics::{ContactEvent, ContactPhase, SurfaceTag};

use super::config::ControllerConfig;
use super::machine::AnimationStateMachine;
use super::sinks::{AnimationSink, AnimatorParams, PhysicsBody, SoundSink};
use super::state::{AnimState, CharacterStatus, Facing};

/// What one tick produced, for collaborators that poll instead of listening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Horizontal velocity written to the body
    pub horizontal_velocity: f32,
    /// Impulse requested this tick, if any
    pub impulse: Option<Vec2>,
    /// Animation state after the tick
    pub state: AnimState,
    /// Whether facing changed this tick
    pub flipped: bool,
    /// Whether the character landed this tick
    pub landed: bool,
}

/// Drives one character from input to movement, animation and sound
pub struct ActionController<B, A, S> {
    config: ControllerConfig,
    machine: AnimationStateMachine,

    /// Requested horizontal speed; persists across ticks until a trigger changes it
    speed: f32,

    // Per-tick bookkeeping
    jumped: bool,
    flipped: bool,
    landed: bool,
    impulse: Option<Vec2>,

    body: B,
    animator: A,
    sounds: S,
}

impl<B, A, S> ActionController<B, A, S>
where
    B: PhysicsBody,
    A: AnimationSink,
    S: SoundSink,
{
    /// Create a controller for a freshly spawned character.
    ///
    /// `config` is expected to have passed `ControllerConfig::validate`.
    pub fn new(config: ControllerConfig, body: B, animator: A, sounds: S) -> Self {
        let mut controller = Self {
            machine: AnimationStateMachine::new(&config),
            config,
            speed: 0.0,
            jumped: false,
            flipped: false,
            landed: false,
            impulse: None,
            body,
            animator,
            sounds,
        };
        controller.publish();
        controller
    }

    /// Run one simulation tick.
    ///
    /// Contacts are handled first; a landing re-runs the input dispatch inline, which then
    /// counts as this tick's dispatch.
    pub fn tick(&mut self, input: &InputSnapshot, contacts: &[ContactEvent]) -> TickReport {
        self.jumped = false;
        self.flipped = false;
        self.landed = false;
        self.impulse = None;

        for contact in contacts {
            self.on_contact(*contact, input);
        }
        if !self.landed {
            self.dispatch(input);
        }

        self.machine.tick(&mut self.sounds);
        let horizontal_velocity = self.apply_motion();
        self.publish();

        TickReport {
            horizontal_velocity,
            impulse: self.impulse,
            state: self.machine.state(),
            flipped: self.flipped,
            landed: self.landed,
        }
    }

    /// Handle a tagged collision
    pub fn on_contact(&mut self, contact: ContactEvent, input: &InputSnapshot) {
        if contact.phase != ContactPhase::Enter {
            return;
        }

        match contact.tag {
            SurfaceTag::Hazard if self.status().grounded => {
                debug!("Pinned by hazard");
                self.status_mut().can_move = false;
            }
            SurfaceTag::Ground if !self.status().grounded => self.land(input),
            _ => {}
        }
    }

    /// The inhale caught something.
    ///
    /// Enters InhaleSuccess at once so this tick's dispatch cannot overwrite it.
    pub fn on_capture(&mut self) {
        info!("Capture succeeded");
        self.status_mut().is_full = true;
        self.machine.enter(AnimState::InhaleSuccess, &mut self.sounds);
    }

    /// Reinitialize as if freshly spawned
    pub fn respawn(&mut self) {
        info!("Respawning");
        let was_facing = self.status().facing;
        self.machine.reset(&self.config);
        self.speed = 0.0;
        if was_facing != Facing::Right {
            self.animator.set_flip_horizontal(Facing::Right.flip_x());
        }
        self.publish();
    }

    /// The per-tick input dispatch
    pub fn dispatch(&mut self, input: &InputSnapshot) {
        let left = input.held(Button::Left);
        let right = input.held(Button::Right);

        // 1. Fresh directional presses turn the character
        self.resolve_direction(input);

        // 2. Jump
        if input.pressed(Button::Jump) {
            self.trigger_jump();
        }

        // 3. Letting go of either inhale button ends the inhale
        if self.status().is_inhaling
            && (input.released(Button::Action) || input.released(Button::Down))
        {
            self.status_mut().is_inhaling = false;
        }

        // 4. Action while full spits or swallows
        if input.pressed(Button::Action) && self.status().is_full {
            self.trigger_exhale(input);
        }

        // 5. Exactly one direction held
        if left != right {
            self.resolve_movement(input);
        }

        // 6. No direction held, or one just let go of: stationary actions
        let released_alone = (input.released(Button::Right) && !left)
            || (input.released(Button::Left) && !right);

        if released_alone || (!left && !right) {
            if input.held(Button::Down) && input.held(Button::Action) {
                self.trigger_inhale();
            } else if input.pressed(Button::Action) && self.status().is_full {
                self.trigger_exhale(input);
            } else {
                self.trigger_idle(input);
            }
        }
        // 7. Let go of one direction while still holding the other: turn and move that way
        else if input.released(Button::Right) && left && self.turn_toward(Facing::Left) {
            self.resolve_movement(input);
        } else if input.released(Button::Left) && right && self.turn_toward(Facing::Right) {
            self.resolve_movement(input);
        }

        if (input.pressed(Button::Right) && !left) || (input.pressed(Button::Left) && !right) {
            self.resolve_movement(input);
        }
    }

    /// Face a freshly pressed direction unless the opposite one is held
    pub fn resolve_direction(&mut self, input: &InputSnapshot) {
        if input.pressed(Button::Right) && !input.held(Button::Left) {
            self.turn_toward(Facing::Right);
        } else if input.pressed(Button::Left) && !input.held(Button::Right) {
            self.turn_toward(Facing::Left);
        }
    }

    /// Walk in the facing direction
    pub fn trigger_move(&mut self) {
        if !self.status().can_move {
            return;
        }

        self.speed = self.status().facing.sign() * self.config.speed_x;
        if self.status().grounded {
            self.machine.request(AnimState::Walking);
        }
    }

    /// Run in the facing direction
    pub fn trigger_run(&mut self) {
        let status = self.status();
        if !status.can_move || !status.grounded || status.is_full {
            return;
        }

        let sign = status.facing.sign();
        self.speed = sign * 2.0 * self.config.speed_x;
        self.machine.request(AnimState::Running);
    }

    /// Spend jump charges for an upward impulse
    pub fn trigger_jump(&mut self) {
        let status = self.status();
        if !status.can_move || status.jump_charges == 0 || self.jumped {
            return;
        }

        let (factor, cost) = if status.is_full {
            (self.config.full_force_factor, self.config.full_jump_cost)
        } else {
            (1.0, 1)
        };

        let vx = self.body.linear_velocity().x;
        let impulse = Vec2::new(vx, self.config.jump_force) * factor;
        self.body.apply_impulse(impulse);
        self.impulse = Some(impulse);
        self.jumped = true;

        self.machine.request(AnimState::Jumping);
        let status = self.status_mut();
        status.grounded = false;
        status.jump_charges = status.jump_charges.saturating_sub(cost);
        let remaining = status.jump_charges;
        if remaining < 1 {
            self.machine.request(AnimState::Falling);
        }

        self.sounds.play("jump");
        debug!("Jump, {} charges left", remaining);
    }

    /// Start inhaling
    pub fn trigger_inhale(&mut self) {
        if self.machine.state() == AnimState::Timeout {
            return;
        }
        self.machine.request(AnimState::Inhaling);
    }

    /// Get rid of what is in the mouth: spit it out with Down held, swallow otherwise
    pub fn trigger_exhale(&mut self, input: &InputSnapshot) {
        if !self.status().is_full {
            return;
        }

        let next = if input.held(Button::Down) {
            AnimState::FullExhale
        } else {
            AnimState::Swallow
        };
        self.machine.request(next);
    }

    /// Stop, and pick an idle pose from the look buttons
    pub fn trigger_idle(&mut self, input: &InputSnapshot) {
        self.speed = 0.0;

        if !self.status().grounded || self.machine.state().is_idle_variant() {
            return;
        }

        let next = match (input.held(Button::Up), input.held(Button::Down)) {
            (true, true) => AnimState::IdleTwirl,
            (true, false) => AnimState::IdleUp,
            (false, true) => AnimState::IdleDown,
            (false, false) => AnimState::Idle,
        };
        self.machine.request(next);
    }

    pub fn status(&self) -> &CharacterStatus {
        self.machine.status()
    }

    pub fn state(&self) -> AnimState {
        self.machine.state()
    }

    pub fn machine(&self) -> &AnimationStateMachine {
        &self.machine
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Requested horizontal speed before air/lock adjustments
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn sounds(&self) -> &S {
        &self.sounds
    }

    pub fn sounds_mut(&mut self) -> &mut S {
        &mut self.sounds
    }

    fn status_mut(&mut self) -> &mut CharacterStatus {
        self.machine.status_mut()
    }

    /// Pick walk, run or jump for a single held direction
    fn resolve_movement(&mut self, input: &InputSnapshot) {
        if input.released(Button::Action) {
            self.trigger_move();
        }

        if input.pressed(Button::Jump) {
            self.trigger_jump();
        } else if input.held(Button::Action) && !self.status().is_full {
            self.trigger_run();
        } else {
            self.trigger_move();
        }
    }

    /// Returns true if facing changed
    fn turn_toward(&mut self, facing: Facing) -> bool {
        if self.status().facing == facing {
            return false;
        }

        self.status_mut().facing = facing;
        self.animator.set_flip_horizontal(facing.flip_x());
        self.flipped = true;
        true
    }

    fn land(&mut self, input: &InputSnapshot) {
        let max = self.config.max_jump_charges;
        let status = self.status_mut();
        status.grounded = true;
        status.jump_charges = max;
        self.machine.force(AnimState::Idle);
        self.landed = true;
        self.sounds.play("land");
        info!("Landed");

        self.dispatch(input);
    }

    fn apply_motion(&mut self) -> f32 {
        let status = self.status();
        let speed = if status.can_move { self.speed } else { 0.0 };
        let vx = if status.grounded {
            speed
        } else {
            speed * self.config.air_speed_factor
        };

        self.body.set_horizontal_velocity(vx);
        vx
    }

    fn publish(&mut self) {
        let params = AnimatorParams::capture(self.machine.state(), self.machine.status());
        self.animator.set_params(&params);
    }
}
