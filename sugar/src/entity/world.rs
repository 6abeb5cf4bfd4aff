//! Extension methods on `hecs::World`

use super::components::{Name, Parent, Transform};
use crate::error::{Result, SugarError};
use hecs::{Entity, EntityBuilder, World};
use tracing::debug;

/// Prefab and lifecycle helpers for a hecs world
pub trait WorldExt {
    /// Spawn a copy of `prefab` at the root of the hierarchy
    fn instantiate(&mut self, prefab: Entity) -> Result<Entity>;

    /// Spawn a copy of `prefab` as a child of `parent`
    fn instantiate_under(&mut self, prefab: Entity, parent: Entity) -> Result<Entity>;

    /// Clone of a component, `None` if the entity or component is missing
    fn try_component<T: hecs::Component + Clone>(&self, entity: Entity) -> Option<T>;

    /// Like [`WorldExt::try_component`] but reports what was missing
    fn component_or_err<T: hecs::Component + Clone>(&self, entity: Entity) -> Result<T>;

    /// Despawn every listed entity and clear the list. Returns how many
    /// entities were still alive and got despawned.
    fn despawn_all(&mut self, entities: &mut Vec<Entity>) -> usize;
}

fn prefab_builder(world: &World, prefab: Entity) -> Result<EntityBuilder> {
    if !world.contains(prefab) {
        return Err(SugarError::NoSuchEntity(prefab));
    }

    let mut builder = EntityBuilder::new();
    builder.add(world.try_component::<Transform>(prefab).unwrap_or_default());
    if let Some(name) = world.try_component::<Name>(prefab) {
        builder.add(name);
    }
    Ok(builder)
}

impl WorldExt for World {
    fn instantiate(&mut self, prefab: Entity) -> Result<Entity> {
        let mut builder = prefab_builder(self, prefab)?;
        let entity = self.spawn(builder.build());
        debug!(prefab = ?prefab, entity = ?entity, "Instantiated prefab");
        Ok(entity)
    }

    fn instantiate_under(&mut self, prefab: Entity, parent: Entity) -> Result<Entity> {
        if !self.contains(parent) {
            return Err(SugarError::NoSuchEntity(parent));
        }
        let mut builder = prefab_builder(self, prefab)?;
        builder.add(Parent(parent));
        let entity = self.spawn(builder.build());
        debug!(prefab = ?prefab, parent = ?parent, entity = ?entity, "Instantiated prefab under parent");
        Ok(entity)
    }

    fn try_component<T: hecs::Component + Clone>(&self, entity: Entity) -> Option<T> {
        self.get::<&T>(entity).ok().map(|component| (*component).clone())
    }

    fn component_or_err<T: hecs::Component + Clone>(&self, entity: Entity) -> Result<T> {
        match self.get::<&T>(entity) {
            Ok(component) => Ok((*component).clone()),
            Err(hecs::ComponentError::NoSuchEntity) => Err(SugarError::NoSuchEntity(entity)),
            Err(_) => Err(SugarError::MissingComponent {
                entity,
                component: std::any::type_name::<T>(),
            }),
        }
    }

    fn despawn_all(&mut self, entities: &mut Vec<Entity>) -> usize {
        let requested = entities.len();
        let despawned = entities
            .drain(..)
            .rev()
            .filter(|&entity| self.despawn(entity).is_ok())
            .count();
        debug!(requested = requested, despawned = despawned, "Despawned entity list");
        despawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Prefab;
    use glam::Vec3;

    fn goblin_prefab(world: &mut World) -> Entity {
        world.spawn((
            Prefab,
            Name::new("Goblin"),
            Transform::from_position(Vec3::new(1.0, 0.0, 2.0)),
        ))
    }

    #[test]
    fn test_instantiate_copies_components_without_marker() {
        let mut world = World::new();
        let prefab = goblin_prefab(&mut world);

        let instance = world.instantiate(prefab).unwrap();

        assert_ne!(instance, prefab);
        assert_eq!(world.try_component::<Name>(instance), Some(Name::new("Goblin")));
        assert_eq!(
            world.try_component::<Transform>(instance).unwrap().position,
            Vec3::new(1.0, 0.0, 2.0)
        );
        assert!(world.get::<&Prefab>(instance).is_err());
        assert!(world.get::<&Parent>(instance).is_err());
    }

    #[test]
    fn test_instantiate_without_transform_gets_default() {
        let mut world = World::new();
        let prefab = world.spawn((Prefab,));

        let instance = world.instantiate(prefab).unwrap();
        assert_eq!(world.try_component::<Transform>(instance), Some(Transform::default()));
        assert_eq!(world.try_component::<Name>(instance), None);
    }

    #[test]
    fn test_instantiate_under_parent() {
        let mut world = World::new();
        let prefab = goblin_prefab(&mut world);
        let camp = world.spawn((Name::new("Camp"),));

        let instance = world.instantiate_under(prefab, camp).unwrap();
        assert_eq!(world.try_component::<Parent>(instance), Some(Parent(camp)));
    }

    #[test]
    fn test_instantiate_missing_entities() {
        let mut world = World::new();
        let prefab = goblin_prefab(&mut world);
        let gone = world.spawn(());
        world.despawn(gone).unwrap();

        assert!(matches!(world.instantiate(gone), Err(SugarError::NoSuchEntity(e)) if e == gone));
        assert!(matches!(
            world.instantiate_under(prefab, gone),
            Err(SugarError::NoSuchEntity(e)) if e == gone
        ));
    }

    #[test]
    fn test_component_or_err() {
        let mut world = World::new();
        let entity = world.spawn((Name::new("Bare"),));

        assert_eq!(world.component_or_err::<Name>(entity).unwrap(), Name::new("Bare"));
        assert!(matches!(
            world.component_or_err::<Transform>(entity),
            Err(SugarError::MissingComponent { .. })
        ));

        world.despawn(entity).unwrap();
        assert!(matches!(
            world.component_or_err::<Name>(entity),
            Err(SugarError::NoSuchEntity(_))
        ));
    }

    #[test]
    fn test_despawn_all() {
        let mut world = World::new();
        let mut spawned: Vec<Entity> = (0..4).map(|_| world.spawn((Transform::default(),))).collect();
        let keep = world.spawn((Transform::default(),));

        world.despawn(spawned[1]).unwrap();
        let despawned = world.despawn_all(&mut spawned);

        assert_eq!(despawned, 3);
        assert!(spawned.is_empty());
        assert!(world.contains(keep));
        assert_eq!(world.len(), 1);
    }
}
