//! End-to-end integration tests
//!
//! Exercises the full stack: named scenes from the registry, entities and
//! components through the scene, and processors driving a simulation.

use std::collections::HashSet;

use diorama::engine::{Processor, Scene};
use diorama::foundation::{Error, Result};
use diorama::runtime::SceneRegistry;

#[derive(Debug, PartialEq)]
struct Transform {
    x: f64,
    y: f64,
}

#[derive(Debug)]
struct Velocity {
    dx: f64,
    dy: f64,
}

#[derive(Debug)]
struct Expired;

/// Applies each entity's velocity to its transform.
struct Movement;

impl Processor for Movement {
    fn process(&mut self, scene: &mut Scene) -> Result<()> {
        for entity in scene.fetch_entities::<Velocity>() {
            let (dx, dy) = {
                let velocity = scene.component::<Velocity>(entity)?;
                (velocity.dx, velocity.dy)
            };
            let transform = scene.component_mut::<Transform>(entity)?;
            transform.x += dx;
            transform.y += dy;
        }
        Ok(())
    }
}

/// Marks expired entities for destruction at the next tick.
struct Cleanup;

impl Processor for Cleanup {
    fn process(&mut self, scene: &mut Scene) -> Result<()> {
        for entity in scene.fetch_entities::<Expired>() {
            scene.kill_entity(entity)?;
        }
        Ok(())
    }
}

// =============================================================================
// Scenario: build a scene through the registry
// =============================================================================

#[test]
fn build_a_scene_and_query_it() {
    let mut registry = SceneRegistry::new();
    let scene = registry.new_scene("town");

    let first = scene.make_entity();
    let second = scene.make_entity();
    assert_eq!(first.id(), 0);
    assert_eq!(second.id(), 1);

    scene.add_component(first, Transform { x: 0.0, y: 0.0 }).unwrap();

    assert_eq!(
        scene.fetch_entities::<Transform>(),
        HashSet::from([first])
    );
}

// =============================================================================
// Scenario: simulation loop
// =============================================================================

#[test]
fn movement_processor_advances_transforms_each_tick() {
    let mut scene = Scene::new();
    let mover = scene.make_entity();
    scene.add_component(mover, Transform { x: 0.0, y: 0.0 }).unwrap();
    scene.add_component(mover, Velocity { dx: 1.0, dy: 2.0 }).unwrap();

    let anchored = scene.make_entity();
    scene
        .add_component(anchored, Transform { x: 5.0, y: 5.0 })
        .unwrap();

    scene.register_processor(Movement, 10);

    for _ in 0..3 {
        scene.process().unwrap();
    }

    assert_eq!(
        *scene.component::<Transform>(mover).unwrap(),
        Transform { x: 3.0, y: 6.0 }
    );
    // Entities without velocity stay put
    assert_eq!(
        *scene.component::<Transform>(anchored).unwrap(),
        Transform { x: 5.0, y: 5.0 }
    );
}

#[test]
fn cleanup_processor_reaps_expired_entities() {
    let mut scene = Scene::new();
    let doomed = scene.make_entity();
    scene.add_component(doomed, Expired).unwrap();
    let survivor = scene.make_entity();
    scene
        .add_component(survivor, Transform { x: 0.0, y: 0.0 })
        .unwrap();

    scene.register_processor(Cleanup, 0);

    // The tick that observes Expired marks the entity; the one after
    // destroys it.
    scene.process().unwrap();
    assert_eq!(scene.entity_count(), 2);

    scene.process().unwrap();
    assert_eq!(scene.entity_count(), 1);
    assert!(scene.is_entity(survivor));
    assert!(!scene.is_entity(doomed));
}

#[test]
fn processors_run_highest_priority_first_across_the_stack() {
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<&'static str>>>;

    struct A(Log);
    struct B(Log);

    impl Processor for A {
        fn process(&mut self, _scene: &mut Scene) -> Result<()> {
            self.0.lock().unwrap().push("a");
            Ok(())
        }
    }

    impl Processor for B {
        fn process(&mut self, _scene: &mut Scene) -> Result<()> {
            self.0.lock().unwrap().push("b");
            Ok(())
        }
    }

    let log: Log = Arc::default();
    let mut registry = SceneRegistry::new();
    let scene = registry.new_scene("ordered");
    scene.register_processor(B(Arc::clone(&log)), 5);
    scene.register_processor(A(Arc::clone(&log)), 10);

    scene.process().unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["a", "b"]);
}

// =============================================================================
// Scenario: registry lifecycle around a running simulation
// =============================================================================

#[test]
fn registry_errors_and_reset_behave_end_to_end() {
    let mut registry = SceneRegistry::new();

    assert!(matches!(
        registry.rem_scene("missing").unwrap_err(),
        Error::SceneNotFound(_)
    ));

    let scene = registry.new_scene("arena");
    let entity = scene.make_entity();
    scene.add_component(entity, Transform { x: 1.0, y: 1.0 }).unwrap();
    registry.set_scene("arena").unwrap();

    registry.reset_scene("arena").unwrap();

    let scene = registry.current_scene();
    assert_eq!(scene.entity_count(), 0);
    assert!(scene.fetch_entities::<Transform>().is_empty());
    assert_eq!(registry.current_name(), "arena");
}
