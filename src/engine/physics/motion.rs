// Motion requests buffered between the controller and the rigid body

use glam::Vec2;

/// Velocity mirror plus pending writes for one rigid body.
///
/// The physics world fills in the current velocity before a tick and flushes the
/// pending horizontal velocity and impulse after it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionBuffer {
    velocity: Vec2,
    horizontal: Option<f32>,
    impulse: Option<Vec2>,
}

impl MotionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Velocity as of the last sync, including writes made since
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn sync_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_horizontal(&mut self, vx: f32) {
        self.velocity.x = vx;
        self.horizontal = Some(vx);
    }

    /// Impulses within one tick accumulate
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.impulse = Some(self.impulse.unwrap_or(Vec2::ZERO) + impulse);
    }

    pub fn pending_horizontal(&self) -> Option<f32> {
        self.horizontal
    }

    pub fn pending_impulse(&self) -> Option<Vec2> {
        self.impulse
    }

    pub fn take_horizontal(&mut self) -> Option<f32> {
        self.horizontal.take()
    }

    pub fn take_impulse(&mut self) -> Option<Vec2> {
        self.impulse.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_horizontal_keeps_vertical() {
        let mut motion = MotionBuffer::new();
        motion.sync_velocity(Vec2::new(1.0, -4.0));
        motion.set_horizontal(3.0);
        assert_eq!(motion.velocity(), Vec2::new(3.0, -4.0));
        assert_eq!(motion.take_horizontal(), Some(3.0));
        assert_eq!(motion.take_horizontal(), None);
    }

    #[test]
    fn test_impulses_accumulate() {
        let mut motion = MotionBuffer::new();
        motion.add_impulse(Vec2::new(1.0, 8.0));
        motion.add_impulse(Vec2::new(0.0, 4.0));
        assert_eq!(motion.take_impulse(), Some(Vec2::new(1.0, 12.0)));
        assert_eq!(motion.pending_impulse(), None);
    }
}
