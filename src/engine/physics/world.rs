use glam::Vec2;
use log::trace;
use rapier2d::prelude::*;
use std::collections::HashMap;

use super::collision::{CollisionEvent, CollisionEventQueue, ContactEvent, SurfaceTag};
use super::motion::MotionBuffer;

/// Physics world that manages all physics simulation
pub struct PhysicsWorld {
    /// Gravity vector (default: -9.81 m/s² in y-axis)
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Collision event handler
    collision_event_queue: CollisionEventQueue,

    /// What each tagged collider means to the character
    surface_tags: HashMap<ColliderHandle, SurfaceTag>,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, -9.81])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            collision_event_queue: CollisionEventQueue::new(),
            surface_tags: HashMap::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        // Clear previous step's collision events
        self.collision_event_queue.clear();

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &self.collision_event_queue,
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Add a collider and tag it as ground or hazard
    pub fn add_surface(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
        tag: SurfaceTag,
    ) -> ColliderHandle {
        let handle = self.add_collider(collider, parent_handle);
        self.surface_tags.insert(handle, tag);
        handle
    }

    /// Get the tag of a collider, if it has one
    pub fn surface_tag(&self, handle: ColliderHandle) -> Option<SurfaceTag> {
        self.surface_tags.get(&handle).copied()
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Teleport a body and stop it
    pub fn reset_body(&mut self, handle: RigidBodyHandle, x: Real, y: Real) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_translation(vector![x, y], true);
            body.set_linvel(vector![0.0, 0.0], true);
        }
    }

    /// Get all raw collision events from the last step
    pub fn get_collision_events(&self) -> Vec<CollisionEvent> {
        self.collision_event_queue.events()
    }

    /// Tagged contacts involving `collider` from the last step.
    ///
    /// Contacts with untagged colliders are dropped.
    pub fn contacts_for(&self, collider: ColliderHandle) -> Vec<ContactEvent> {
        self.get_collision_events()
            .iter()
            .filter_map(|event| {
                let other = event.other(collider)?;
                let tag = self.surface_tag(other)?;
                trace!("Contact {:?} with {:?}", event.phase(), tag);
                Some(ContactEvent {
                    tag,
                    phase: event.phase(),
                })
            })
            .collect()
    }

    /// Copy a body's velocity into its motion buffer
    pub fn read_motion(&self, handle: RigidBodyHandle, motion: &mut MotionBuffer) {
        if let Some(body) = self.rigid_body_set.get(handle) {
            let vel = body.linvel();
            motion.sync_velocity(Vec2::new(vel.x, vel.y));
        }
    }

    /// Flush pending velocity and impulse writes onto a body
    pub fn apply_motion(&mut self, handle: RigidBodyHandle, motion: &mut MotionBuffer) {
        let Some(body) = self.rigid_body_set.get_mut(handle) else {
            return;
        };

        if let Some(vx) = motion.take_horizontal() {
            let vy = body.linvel().y;
            body.set_linvel(vector![vx, vy], true);
        }
        if let Some(impulse) = motion.take_impulse() {
            body.apply_impulse(vector![impulse.x, impulse.y], true);
        }
    }

    /// Get current gravity
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Get the current timestep
    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;
    use crate::engine::physics::collision::ContactPhase;

    /// Player dropped just above a ground slab
    fn drop_test() -> (PhysicsWorld, RigidBodyHandle, ColliderHandle) {
        let mut world = PhysicsWorld::new();

        let ground = world.add_rigid_body(presets::static_body(0.0, -0.5));
        world.add_surface(presets::ground_collider(20.0, 1.0), ground, SurfaceTag::Ground);

        let player = world.add_rigid_body(presets::player_body(0.0, 1.5));
        let collider = world.add_collider(presets::player_collider(1.0, 2.0), player);

        (world, player, collider)
    }

    #[test]
    fn test_default_gravity() {
        let world = PhysicsWorld::new();
        assert_eq!(world.gravity().y, -9.81);
        assert!((world.timestep() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_falling_player_touches_ground() {
        let (mut world, _player, collider) = drop_test();

        let mut contacts = Vec::new();
        for _ in 0..120 {
            world.step();
            contacts.extend(world.contacts_for(collider));
        }

        assert!(contacts.contains(&ContactEvent {
            tag: SurfaceTag::Ground,
            phase: ContactPhase::Enter,
        }));
    }

    #[test]
    fn test_apply_motion_sets_horizontal_velocity() {
        let (mut world, player, _collider) = drop_test();
        let mut motion = MotionBuffer::new();
        motion.set_horizontal(3.0);

        world.apply_motion(player, &mut motion);
        let vel = world.get_rigid_body(player).map(|b| *b.linvel());
        assert_eq!(vel.map(|v| v.x), Some(3.0));
        assert_eq!(motion.pending_horizontal(), None);
    }

    #[test]
    fn test_read_motion_mirrors_body() {
        let (mut world, player, _collider) = drop_test();
        if let Some(body) = world.get_rigid_body_mut(player) {
            body.set_linvel(vector![1.0, 2.0], true);
        }

        let mut motion = MotionBuffer::new();
        world.read_motion(player, &mut motion);
        assert_eq!(motion.velocity(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_untagged_contacts_are_dropped() {
        let world = PhysicsWorld::new();
        let collider = ColliderHandle::from_raw_parts(7, 0);
        assert!(world.contacts_for(collider).is_empty());
    }
}
