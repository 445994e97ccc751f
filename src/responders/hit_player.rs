//! Projectile-hits-target responder.

use log::debug;

use super::engine::{EngineAccess, PropertyValue, ResponderError};
use super::modifier::Modifier;

/// Sound played when the modifier does not name one.
pub const DEFAULT_HIT_SOUND: &str = "player_hit";
/// Flag raised on the target. What a hit costs is decided elsewhere.
pub const WAS_HIT_PROPERTY: &str = "was_hit";

/// Destroy `projectile`, play the hit sound and flag `target` as hit.
pub fn hit_player<E: EngineAccess>(
    engine: &mut E,
    projectile: E::Id,
    target: E::Id,
    modifier: Option<&Modifier>,
) -> Result<(), ResponderError> {
    engine.destroy(projectile)?;

    let sound = modifier
        .and_then(Modifier::sound)
        .unwrap_or(DEFAULT_HIT_SOUND);
    engine.play_sound(sound)?;

    engine.set_property(target, WAS_HIT_PROPERTY, PropertyValue::Flag(true))?;
    debug!("{:?} hit {:?}", projectile, target);
    Ok(())
}
