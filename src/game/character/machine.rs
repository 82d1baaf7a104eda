// Animation state machine
//
// Holds the authoritative animation state together with the character status it gates.
// Triggers only *request* a state; the request is settled at the start of the next
// machine tick, which runs the exit behavior of the old state and the enter behavior of
// the new one. Per-state behaviors live in a single dispatch table (`behavior`).

use log::{debug, info, trace};

use super::config::ControllerConfig;
use super::sinks::SoundSink;
use super::state::{AnimState, CharacterStatus};

type EnterFn = fn(&mut AnimationStateMachine, &mut dyn SoundSink);
type TickFn = fn(&mut AnimationStateMachine);
type ExitFn = fn(&mut AnimationStateMachine, AnimState);

/// Hooks attached to a single state
#[derive(Clone, Copy, Default)]
struct StateBehavior {
    on_enter: Option<EnterFn>,
    on_tick: Option<TickFn>,
    on_exit: Option<ExitFn>,
}

/// Dispatch table: state -> behaviors run while that state is active
fn behavior(state: AnimState) -> StateBehavior {
    match state {
        AnimState::Inhaling => StateBehavior {
            on_enter: Some(enter_inhale),
            on_tick: Some(tick_inhale),
            on_exit: Some(exit_inhale),
        },
        AnimState::Timeout => StateBehavior {
            on_tick: Some(tick_timeout),
            on_exit: Some(exit_timeout),
            ..Default::default()
        },
        AnimState::InhaleSuccess => StateBehavior {
            on_enter: Some(enter_inhale_success),
            on_tick: Some(tick_inhale_success),
            on_exit: Some(exit_inhale_success),
        },
        AnimState::Swallow | AnimState::FullExhale => StateBehavior {
            on_enter: Some(enter_empty_mouth),
            ..Default::default()
        },
        _ => StateBehavior::default(),
    }
}

fn enter_inhale(sm: &mut AnimationStateMachine, sounds: &mut dyn SoundSink) {
    sm.status.is_inhaling = true;
    sm.status.can_move = false;
    sounds.play("inhale");
}

fn tick_inhale(sm: &mut AnimationStateMachine) {
    sm.status.inhale_charges = sm.status.inhale_charges.saturating_sub(1);
    if sm.status.inhale_charges < 1 {
        sm.status.timeout_count = sm.timeout_ticks;
        sm.status.is_inhaling = false;
        sm.request(AnimState::Timeout);
        info!("Inhale exhausted, timing out for {} ticks", sm.timeout_ticks);
    }
}

fn exit_inhale(sm: &mut AnimationStateMachine, next: AnimState) {
    if !matches!(
        next,
        AnimState::InhaleSuccess | AnimState::Timeout | AnimState::Inhaling
    ) {
        sm.status.can_move = true;
    }
    sm.status.inhale_charges = sm.max_inhale_charges;
    sm.status.is_inhaling = false;
}

fn tick_timeout(sm: &mut AnimationStateMachine) {
    sm.status.timeout_count = sm.status.timeout_count.saturating_sub(1);
    if sm.status.timeout_count == 0 {
        sm.status.inhale_charges = sm.max_inhale_charges;
        sm.status.can_move = true;
        sm.request(AnimState::Idle);
        info!("Timeout expired");
    }
}

fn exit_timeout(sm: &mut AnimationStateMachine, _next: AnimState) {
    sm.status.timeout_count = 0;
    sm.status.inhale_charges = sm.max_inhale_charges;
    sm.status.can_move = true;
}

fn enter_inhale_success(sm: &mut AnimationStateMachine, sounds: &mut dyn SoundSink) {
    sm.status.is_inhaling = false;
    sounds.play("capture");
}

fn tick_inhale_success(sm: &mut AnimationStateMachine) {
    sm.status.can_move = true;
    if sm.state == AnimState::InhaleSuccess {
        sm.request(AnimState::Idle);
    }
}

fn exit_inhale_success(sm: &mut AnimationStateMachine, _next: AnimState) {
    sm.status.can_move = true;
}

fn enter_empty_mouth(sm: &mut AnimationStateMachine, sounds: &mut dyn SoundSink) {
    sm.status.is_full = false;
    sounds.play(if sm.active == AnimState::Swallow {
        "swallow"
    } else {
        "exhale"
    });
}

/// Owns the discrete animation state and the status it gates
#[derive(Debug)]
pub struct AnimationStateMachine {
    /// Requested state (the animator parameter)
    state: AnimState,
    /// State whose behaviors are currently running
    active: AnimState,
    previous: AnimState,
    ticks_in_state: u32,
    status: CharacterStatus,
    max_inhale_charges: u32,
    timeout_ticks: u32,
}

impl AnimationStateMachine {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            state: AnimState::Idle,
            active: AnimState::Idle,
            previous: AnimState::Idle,
            ticks_in_state: 0,
            status: CharacterStatus::spawn(config),
            max_inhale_charges: config.max_inhale_charges,
            timeout_ticks: config.timeout_ticks,
        }
    }

    /// Get the requested state
    pub fn state(&self) -> AnimState {
        self.state
    }

    /// Get the state whose behaviors are running
    pub fn active(&self) -> AnimState {
        self.active
    }

    /// Get the previously active state
    pub fn previous(&self) -> AnimState {
        self.previous
    }

    /// Ticks spent in the active state
    pub fn ticks_in_state(&self) -> u32 {
        self.ticks_in_state
    }

    pub fn status(&self) -> &CharacterStatus {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut CharacterStatus {
        &mut self.status
    }

    /// Check if trigger requests are currently refused
    pub fn is_locked(&self) -> bool {
        self.state == AnimState::Timeout && self.status.timeout_count > 0
    }

    /// Request a new state. Returns false if the request was refused.
    ///
    /// Timeout cannot be left until its countdown has expired.
    pub fn request(&mut self, next: AnimState) -> bool {
        if next != self.state && self.is_locked() {
            trace!("Ignoring {:?} while timed out", next);
            return false;
        }
        self.state = next;
        true
    }

    /// Set the state past the timeout lock; used for collision-driven transitions.
    ///
    /// Overriding a pending or running Timeout ends the cooldown.
    pub fn force(&mut self, next: AnimState) {
        if self.state == AnimState::Timeout && next != AnimState::Timeout {
            debug!("Forcing {:?} out of timeout", next);
            self.status.timeout_count = 0;
        }
        self.state = next;
    }

    /// Force `next` and settle into it right away, running exit and enter behaviors
    pub fn enter(&mut self, next: AnimState, sounds: &mut dyn SoundSink) {
        self.force(next);
        self.settle(sounds);
    }

    /// Advance one tick: settle a pending transition, then run the active state's tick.
    pub fn tick(&mut self, sounds: &mut dyn SoundSink) {
        self.settle(sounds);
        self.ticks_in_state += 1;

        if let Some(on_tick) = behavior(self.active).on_tick {
            on_tick(self);
        }
    }

    /// Reinitialize for a respawn
    pub fn reset(&mut self, config: &ControllerConfig) {
        *self = Self::new(config);
    }

    fn settle(&mut self, sounds: &mut dyn SoundSink) {
        if self.state == self.active {
            return;
        }

        let next = self.state;
        if let Some(on_exit) = behavior(self.active).on_exit {
            on_exit(self, next);
        }

        debug!("State {:?} -> {:?}", self.active, next);
        self.previous = self.active;
        self.active = next;
        self.ticks_in_state = 0;

        if let Some(on_enter) = behavior(next).on_enter {
            on_enter(self, sounds);
        }
    }
}
