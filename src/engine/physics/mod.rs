// Physics system using rapier2d

pub mod body;
mod collision;
mod motion;
mod world;

pub use body::{presets, ColliderHandle, RigidBodyHandle};
pub use collision::{CollisionEvent, CollisionGroups, ContactEvent, ContactPhase, SurfaceTag};
pub use motion::MotionBuffer;
pub use world::PhysicsWorld;
