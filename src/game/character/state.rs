// Character state: discrete animation state plus the flags and counters it gates

use super::config::ControllerConfig;

/// Discrete animation state. The discriminant is the integer the animator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnimState {
    /// Standing still on ground
    Idle = 0,
    /// Moving horizontally on ground
    Walking = 1,
    /// Moving at double speed on ground
    Running = 2,
    /// Rising after a jump
    Jumping = 3,
    /// Inhale ability active; drains inhale charges every tick
    Inhaling = 4,
    /// Out of jump charges, dropping
    Falling = 5,
    /// Inhale caught something
    InhaleSuccess = 6,
    /// Inhale exhausted, locked until the countdown expires
    Timeout = 7,
    /// Swallowing what was caught
    Swallow = 8,
    /// Spitting out what was caught
    FullExhale = 9,
    /// Skidding out of a run
    RunStop = 10,
    /// Idle, looking up
    IdleUp = 11,
    /// Idle, twirling
    IdleTwirl = 12,
    /// Idle, looking down
    IdleDown = 13,
}

impl Default for AnimState {
    fn default() -> Self {
        Self::Idle
    }
}

impl AnimState {
    /// Every state, ordered by animator index
    pub const ALL: [AnimState; 14] = [
        Self::Idle,
        Self::Walking,
        Self::Running,
        Self::Jumping,
        Self::Inhaling,
        Self::Falling,
        Self::InhaleSuccess,
        Self::Timeout,
        Self::Swallow,
        Self::FullExhale,
        Self::RunStop,
        Self::IdleUp,
        Self::IdleTwirl,
        Self::IdleDown,
    ];

    /// Integer the animator consumes (0-13)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a state by animator index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Check if this is one of the look-up/twirl/look-down idle variants
    pub fn is_idle_variant(self) -> bool {
        matches!(self, Self::IdleUp | Self::IdleTwirl | Self::IdleDown)
    }

    /// Get the animation clip name for this state
    pub fn animation_name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walk",
            Self::Running => "run",
            Self::Jumping => "jump_start",
            Self::Inhaling => "inhale_cycle",
            Self::Falling => "full_fall",
            Self::InhaleSuccess => "inhale_success",
            Self::Timeout => "inhale_timeout",
            Self::Swallow => "full_swallow",
            Self::FullExhale => "full_exhale",
            Self::RunStop => "run_stop",
            Self::IdleUp => "idle_up",
            Self::IdleTwirl => "idle_twirl",
            Self::IdleDown => "idle_down",
        }
    }
}

/// Direction the character faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Sign applied to horizontal speed (1 = right, -1 = left)
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the sprite must be mirrored (art faces right)
    pub fn flip_x(self) -> bool {
        self == Self::Left
    }
}

/// Flags and resource counters of the character.
///
/// Fields are only written by the controller and its state machine; everyone else reads.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStatus {
    pub facing: Facing,
    pub grounded: bool,
    pub can_move: bool,
    pub is_full: bool,
    pub is_inhaling: bool,
    pub jump_charges: u32,
    pub inhale_charges: u32,
    pub timeout_count: u32,
}

impl CharacterStatus {
    /// Fresh status for a character that just spawned
    pub fn spawn(config: &ControllerConfig) -> Self {
        Self {
            facing: Facing::Right,
            grounded: true,
            can_move: true,
            is_full: false,
            is_inhaling: false,
            jump_charges: config.max_jump_charges,
            inhale_charges: config.max_inhale_charges,
            timeout_count: 0,
        }
    }
}
