//! Engine capability consumed by collision responders.

use crate::components::boxcollider::Aabb;
use crate::components::signals::Signals;

/// Errors surfaced by an [`EngineAccess`] implementation.
///
/// Responders never handle these locally; they abort and hand the error to
/// the collision dispatcher.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ResponderError {
    #[error("entity {0} does not exist")]
    NoSuchEntity(String),

    #[error("entity {entity} has no {component} component")]
    MissingComponent {
        entity: String,
        component: &'static str,
    },

    #[error("audio command queue is not available")]
    AudioUnavailable,
}

/// Value stored by [`EngineAccess::set_property`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Flag(bool),
    Integer(i32),
    Scalar(f32),
    Text(String),
}

impl PropertyValue {
    /// Write the value into an entity's [`Signals`] under `name`.
    ///
    /// `Flag(false)` clears the flag rather than storing a false value.
    pub fn apply_to(self, signals: &mut Signals, name: &str) {
        match self {
            PropertyValue::Flag(true) => signals.set_flag(name),
            PropertyValue::Flag(false) => signals.clear_flag(name),
            PropertyValue::Integer(v) => signals.set_integer(name, v),
            PropertyValue::Scalar(v) => signals.set_scalar(name, v),
            PropertyValue::Text(v) => signals.set_string(name, v),
        }
    }
}

/// Accessors and mutators the host engine exposes to responders.
///
/// Positions are the top-left corner of the entity's bounding box and sizes
/// are its extent, so `position + size / 2` is the box center.
pub trait EngineAccess {
    /// Engine-side entity handle.
    type Id: Copy + std::fmt::Debug;

    fn position(&self, id: Self::Id) -> Result<(f32, f32), ResponderError>;
    fn size(&self, id: Self::Id) -> Result<(f32, f32), ResponderError>;
    fn velocity(&self, id: Self::Id) -> Result<(f32, f32), ResponderError>;
    fn set_velocity(&mut self, id: Self::Id, vx: f32, vy: f32) -> Result<(), ResponderError>;

    /// Remove the entity. The id is invalid afterwards.
    fn destroy(&mut self, id: Self::Id) -> Result<(), ResponderError>;

    fn set_property(
        &mut self,
        id: Self::Id,
        name: &str,
        value: PropertyValue,
    ) -> Result<(), ResponderError>;

    fn play_sound(&mut self, sound_id: &str) -> Result<(), ResponderError>;

    /// Bounding box assembled from [`position`](Self::position) and [`size`](Self::size).
    fn bounds(&self, id: Self::Id) -> Result<Aabb, ResponderError> {
        let (x, y) = self.position(id)?;
        let (w, h) = self.size(id)?;
        Ok(Aabb::new(x, y, w, h))
    }
}
