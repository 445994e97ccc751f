//! [`EngineAccess`] backed by a `bevy_ecs` [`World`].
//!
//! Component mapping:
//! - position and size: the [`BoxCollider`] AABB at the entity's
//!   [`MapPosition`]; without a collider the box is the bare position with
//!   zero extent
//! - velocity: [`RigidBody`]
//! - properties: [`Signals`], inserted on first write
//! - sounds: [`AudioCmd::PlayFx`] written into `Messages<AudioCmd>`

use bevy_ecs::prelude::*;

use super::engine::{EngineAccess, PropertyValue, ResponderError};
use crate::components::boxcollider::{Aabb, BoxCollider};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::signals::Signals;
use crate::events::audio::AudioCmd;

/// Exclusive view of the world handed to a responder for one call.
pub struct WorldEngine<'w> {
    world: &'w mut World,
}

fn no_such_entity(id: Entity) -> ResponderError {
    ResponderError::NoSuchEntity(format!("{id:?}"))
}

fn missing(id: Entity, component: &'static str) -> ResponderError {
    ResponderError::MissingComponent {
        entity: format!("{id:?}"),
        component,
    }
}

impl<'w> WorldEngine<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }

    fn aabb(&self, id: Entity) -> Result<Aabb, ResponderError> {
        let entity = self.world.get_entity(id).map_err(|_| no_such_entity(id))?;
        let pos = entity
            .get::<MapPosition>()
            .ok_or_else(|| missing(id, "MapPosition"))?;
        Ok(match entity.get::<BoxCollider>() {
            Some(collider) => collider.aabb(pos.x, pos.y),
            None => Aabb::new(pos.x, pos.y, 0.0, 0.0),
        })
    }
}

impl EngineAccess for WorldEngine<'_> {
    type Id = Entity;

    fn position(&self, id: Entity) -> Result<(f32, f32), ResponderError> {
        let r = self.aabb(id)?;
        Ok((r.x, r.y))
    }

    fn size(&self, id: Entity) -> Result<(f32, f32), ResponderError> {
        let r = self.aabb(id)?;
        Ok((r.w, r.h))
    }

    fn bounds(&self, id: Entity) -> Result<Aabb, ResponderError> {
        self.aabb(id)
    }

    fn velocity(&self, id: Entity) -> Result<(f32, f32), ResponderError> {
        let entity = self.world.get_entity(id).map_err(|_| no_such_entity(id))?;
        entity
            .get::<RigidBody>()
            .map(RigidBody::velocity)
            .ok_or_else(|| missing(id, "RigidBody"))
    }

    fn set_velocity(&mut self, id: Entity, vx: f32, vy: f32) -> Result<(), ResponderError> {
        let mut entity = self
            .world
            .get_entity_mut(id)
            .map_err(|_| no_such_entity(id))?;
        let mut rb = entity
            .get_mut::<RigidBody>()
            .ok_or_else(|| missing(id, "RigidBody"))?;
        rb.set_velocity(vx, vy);
        Ok(())
    }

    fn destroy(&mut self, id: Entity) -> Result<(), ResponderError> {
        if self.world.despawn(id) {
            Ok(())
        } else {
            Err(no_such_entity(id))
        }
    }

    fn set_property(
        &mut self,
        id: Entity,
        name: &str,
        value: PropertyValue,
    ) -> Result<(), ResponderError> {
        let mut entity = self
            .world
            .get_entity_mut(id)
            .map_err(|_| no_such_entity(id))?;
        if !entity.contains::<Signals>() {
            entity.insert(Signals::default());
        }
        let mut signals = entity
            .get_mut::<Signals>()
            .ok_or_else(|| missing(id, "Signals"))?;
        value.apply_to(&mut signals, name);
        Ok(())
    }

    fn play_sound(&mut self, sound_id: &str) -> Result<(), ResponderError> {
        let mut messages = self
            .world
            .get_resource_mut::<Messages<AudioCmd>>()
            .ok_or(ResponderError::AudioUnavailable)?;
        messages.write(AudioCmd::PlayFx {
            id: sound_id.to_string(),
        });
        Ok(())
    }
}
