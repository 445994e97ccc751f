//! In-memory [`EngineAccess`] used by responder unit tests.

use rustc_hash::FxHashMap;

use super::engine::{EngineAccess, PropertyValue, ResponderError};
use crate::components::signals::Signals;

#[derive(Debug, Clone, Default)]
pub(crate) struct MockEntity {
    pub position: (f32, f32),
    pub size: (f32, f32),
    pub velocity: (f32, f32),
    pub signals: Signals,
}

#[derive(Debug, Default)]
pub(crate) struct MockEngine {
    pub entities: FxHashMap<u32, MockEntity>,
    pub sounds: Vec<String>,
}

impl MockEngine {
    pub fn add(&mut self, id: u32, position: (f32, f32), size: (f32, f32), velocity: (f32, f32)) {
        self.entities.insert(
            id,
            MockEntity {
                position,
                size,
                velocity,
                signals: Signals::default(),
            },
        );
    }

    pub fn exists(&self, id: u32) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn velocity_of(&self, id: u32) -> (f32, f32) {
        self.entities[&id].velocity
    }

    pub fn signals_of(&self, id: u32) -> &Signals {
        &self.entities[&id].signals
    }

    fn get(&self, id: u32) -> Result<&MockEntity, ResponderError> {
        self.entities
            .get(&id)
            .ok_or_else(|| ResponderError::NoSuchEntity(id.to_string()))
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut MockEntity, ResponderError> {
        self.entities
            .get_mut(&id)
            .ok_or_else(|| ResponderError::NoSuchEntity(id.to_string()))
    }
}

impl EngineAccess for MockEngine {
    type Id = u32;

    fn position(&self, id: u32) -> Result<(f32, f32), ResponderError> {
        Ok(self.get(id)?.position)
    }

    fn size(&self, id: u32) -> Result<(f32, f32), ResponderError> {
        Ok(self.get(id)?.size)
    }

    fn velocity(&self, id: u32) -> Result<(f32, f32), ResponderError> {
        Ok(self.get(id)?.velocity)
    }

    fn set_velocity(&mut self, id: u32, vx: f32, vy: f32) -> Result<(), ResponderError> {
        self.get_mut(id)?.velocity = (vx, vy);
        Ok(())
    }

    fn destroy(&mut self, id: u32) -> Result<(), ResponderError> {
        self.entities
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ResponderError::NoSuchEntity(id.to_string()))
    }

    fn set_property(
        &mut self,
        id: u32,
        name: &str,
        value: PropertyValue,
    ) -> Result<(), ResponderError> {
        value.apply_to(&mut self.get_mut(id)?.signals, name);
        Ok(())
    }

    fn play_sound(&mut self, sound_id: &str) -> Result<(), ResponderError> {
        self.sounds.push(sound_id.to_string());
        Ok(())
    }
}
