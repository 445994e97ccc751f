//! Collision detection and rule dispatch.
//!
//! - [`collision_detector`] tests every pair of collider-bearing entities
//!   and triggers a [`CollisionEvent`] for each overlapping pair.
//! - [`collision_observer`] reacts to the event by queueing
//!   [`dispatch_collision`] as a world command, so responders run with
//!   exclusive world access, one collision at a time.
//! - [`dispatch_collision`] finds the [`CollisionRule`]s matching the pair's
//!   groups and runs their actions through a [`WorldEngine`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::CollisionRule;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;
use crate::responders::WorldEngine;

/// Trigger a [`CollisionEvent`] for every overlapping pair of colliders.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider)>,
    mut commands: Commands,
) {
    for [(entity_a, pos_a, collider_a), (entity_b, pos_b, collider_b)] in
        query.iter_combinations::<2>()
    {
        if collider_a.overlaps((pos_a.x, pos_a.y), collider_b, (pos_b.x, pos_b.y)) {
            commands.trigger(CollisionEvent {
                a: entity_a,
                b: entity_b,
            });
        }
    }
}

/// Global observer that hands each collision to [`dispatch_collision`].
pub fn collision_observer(trigger: On<CollisionEvent>, mut commands: Commands) {
    let CollisionEvent { a, b } = *trigger.event();
    commands.queue(move |world: &mut World| {
        dispatch_collision(world, a, b);
    });
}

/// Run every collision rule matching the groups of `a` and `b`.
///
/// Returns how many actions completed. A failing action is logged and the
/// remaining rules still run; once either entity is gone the pair is done.
pub fn dispatch_collision(world: &mut World, a: Entity, b: Entity) -> usize {
    let group_of = |e: Entity| world.get::<Group>(e).map(|g| g.name().to_string());
    let (Some(group_a), Some(group_b)) = (group_of(a), group_of(b)) else {
        return 0;
    };

    let mut rules = world.query::<&CollisionRule>();
    let matched: SmallVec<[(Entity, Entity, CollisionRule); 2]> = rules
        .iter(world)
        .filter_map(|rule| {
            rule.match_and_order(a, b, &group_a, &group_b)
                .map(|(first, second)| (first, second, rule.clone()))
        })
        .collect();

    let mut fired = 0;
    for (first, second, rule) in matched {
        if world.get_entity(first).is_err() || world.get_entity(second).is_err() {
            debug!("collision {:?}/{:?} ended early, entity gone", first, second);
            break;
        }
        let mut engine = WorldEngine::new(world);
        match rule
            .action
            .run(&mut engine, first, second, rule.modifier.as_ref())
        {
            Ok(()) => fired += 1,
            Err(e) => warn!(
                "collision action '{}' on {:?}/{:?} failed: {}",
                rule.action.name(),
                first,
                second,
                e
            ),
        }
    }
    fired
}
