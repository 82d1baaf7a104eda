// Controller tuning - the one puffball everybody plays
// Values mirror the shipped level; tweak here, not at call sites

/// Tuning parameters for the character controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    // Movement
    /// Walking speed (units/second). Running is twice this.
    pub speed_x: f32,
    /// Vertical impulse applied by a normal jump
    pub jump_force: f32,
    /// Multiplier on the jump impulse while the mouth is full
    pub full_force_factor: f32,
    /// Multiplier on horizontal speed while airborne
    pub air_speed_factor: f32,

    // Resources
    /// Jumps available between landings
    pub max_jump_charges: u32,
    /// Jump charges spent by a single jump while full
    pub full_jump_cost: u32,
    /// Ticks of continuous inhale before the ability times out
    pub max_inhale_charges: u32,
    /// Ticks the character stays locked in timeout once inhale is exhausted
    pub timeout_ticks: u32,
}

/// Default tuning used by the game
pub const BASE_CONFIG: ControllerConfig = ControllerConfig {
    speed_x: 3.0,
    jump_force: 8.0,
    full_force_factor: 0.5,
    air_speed_factor: 0.5,

    max_jump_charges: 6,
    full_jump_cost: 3,
    max_inhale_charges: 50,
    timeout_ticks: 100,
};

/// Rejected controller configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be within (0, 1], got {value}")]
    FactorOutOfRange { field: &'static str, value: f32 },

    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },

    #[error("full_jump_cost ({cost}) exceeds max_jump_charges ({max})")]
    FullJumpTooExpensive { cost: u32, max: u32 },
}

impl Default for ControllerConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl ControllerConfig {
    /// Get the standard tuning
    pub fn standard() -> Self {
        BASE_CONFIG
    }

    /// Check the configuration before handing it to a controller.
    ///
    /// The controller itself never re-validates; setup code is expected to call this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("speed_x", self.speed_x), ("jump_force", self.jump_force)] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("full_force_factor", self.full_force_factor),
            ("air_speed_factor", self.air_speed_factor),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::FactorOutOfRange { field, value });
            }
        }

        for (field, value) in [
            ("max_jump_charges", self.max_jump_charges),
            ("full_jump_cost", self.full_jump_cost),
            ("max_inhale_charges", self.max_inhale_charges),
            ("timeout_ticks", self.timeout_ticks),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroCount { field });
            }
        }

        if self.full_jump_cost > self.max_jump_charges {
            return Err(ConfigError::FullJumpTooExpensive {
                cost: self.full_jump_cost,
                max: self.max_jump_charges,
            });
        }

        Ok(())
    }
}
