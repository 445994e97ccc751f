//! Collision rule component and its JSON loader.
//!
//! A [`CollisionRule`] maps an ordered pair of group names to the responder
//! that runs when entities of those groups overlap. Rules live on their own
//! entities so a scene can add and remove them like any other data.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "rules": [
//!     { "groups": ["ball", "wall"], "action": "bounce" },
//!     { "groups": ["ball", "paddle"], "action": "bounce",
//!       "modifier": { "speed_increase": 5, "max_speed": 600, "sound": "ping" } },
//!     { "groups": ["bullet", "player"], "action": "hit_player",
//!       "modifier": { "play_sound": "player_hit" } }
//!   ]
//! }
//! ```
//!
//! The first group names the entity the action acts on (the bouncing body,
//! the projectile).

use std::path::Path;

use bevy_ecs::prelude::*;
use serde::Deserialize;

use crate::responders::{CollisionAction, Modifier};

/// Errors raised while loading a rules file.
#[derive(thiserror::Error, Debug)]
pub enum RulesError {
    #[error("failed to read collision rules: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse collision rules: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct CollisionRule {
    pub group_a: String,
    pub group_b: String,
    pub action: CollisionAction,
    pub modifier: Option<Modifier>,
}

impl CollisionRule {
    pub fn new(
        group_a: impl Into<String>,
        group_b: impl Into<String>,
        action: CollisionAction,
    ) -> Self {
        Self {
            group_a: group_a.into(),
            group_b: group_b.into(),
            action,
            modifier: None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Check if this rule matches the given groups and return entities in order.
    ///
    /// Returns `Some((first, second))` with `first` belonging to `group_a`,
    /// whichever order the collision reported them in.
    pub fn match_and_order(
        &self,
        ent_a: Entity,
        ent_b: Entity,
        group_a: &str,
        group_b: &str,
    ) -> Option<(Entity, Entity)> {
        if self.group_a == group_a && self.group_b == group_b {
            Some((ent_a, ent_b))
        } else if self.group_a == group_b && self.group_b == group_a {
            Some((ent_b, ent_a))
        } else {
            None
        }
    }
}

/// One entry of the rules file.
#[derive(Debug, Clone, Deserialize)]
pub struct CollisionRuleData {
    pub groups: [String; 2],
    pub action: CollisionAction,
    #[serde(default)]
    pub modifier: Option<Modifier>,
}

impl From<CollisionRuleData> for CollisionRule {
    fn from(data: CollisionRuleData) -> Self {
        let [group_a, group_b] = data.groups;
        Self {
            group_a,
            group_b,
            action: data.action,
            modifier: data.modifier,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollisionRulesFile {
    #[serde(default)]
    pub rules: Vec<CollisionRuleData>,
}

impl CollisionRulesFile {
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn into_rules(self) -> Vec<CollisionRule> {
        self.rules.into_iter().map(CollisionRule::from).collect()
    }
}
