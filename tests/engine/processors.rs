//! Integration tests for processor scheduling
//!
//! Tests priority ordering, fail-fast dispatch, and mid-tick registration.

use std::sync::{Arc, Mutex};

use diorama_engine::{Processor, Scene};
use diorama_foundation::{Entity, Error, Result};

type Log = Arc<Mutex<Vec<&'static str>>>;

struct Named {
    label: &'static str,
    log: Log,
}

impl Processor for Named {
    fn process(&mut self, _scene: &mut Scene) -> Result<()> {
        self.log.lock().unwrap().push(self.label);
        Ok(())
    }
}

struct Failing;

impl Processor for Failing {
    fn process(&mut self, _scene: &mut Scene) -> Result<()> {
        Err(Error::unknown_entity(Entity::new(99)))
    }
}

// =============================================================================
// Priority Ordering
// =============================================================================

#[test]
fn higher_priority_runs_first() {
    let log: Log = Arc::default();
    let mut scene = Scene::new();
    scene.register_processor(Named { label: "b", log: Arc::clone(&log) }, 5);
    scene.register_processor(Named { label: "a", log: Arc::clone(&log) }, 10);

    scene.process().unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["a", "b"]);
}

#[test]
fn equal_priorities_run_in_registration_order() {
    let log: Log = Arc::default();
    let mut scene = Scene::new();
    scene.register_processor(Named { label: "x", log: Arc::clone(&log) }, 3);
    scene.register_processor(Named { label: "y", log: Arc::clone(&log) }, 3);
    scene.register_processor(Named { label: "z", log: Arc::clone(&log) }, 3);

    scene.process().unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["x", "y", "z"]);
}

#[test]
fn priorities_may_be_negative() {
    let log: Log = Arc::default();
    let mut scene = Scene::new();
    scene.register_processor(Named { label: "late", log: Arc::clone(&log) }, -10);
    scene.register_processor(Named { label: "early", log: Arc::clone(&log) }, 0);

    scene.process().unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["early", "late"]);
}

// =============================================================================
// Fail-Fast Dispatch
// =============================================================================

#[test]
fn processor_error_halts_the_tick() {
    let log: Log = Arc::default();
    let mut scene = Scene::new();
    scene.register_processor(Named { label: "before", log: Arc::clone(&log) }, 10);
    scene.register_processor(Failing, 5);
    scene.register_processor(Named { label: "after", log: Arc::clone(&log) }, 0);

    let result = scene.process();

    assert!(matches!(result.unwrap_err(), Error::UnknownEntity(_)));
    assert_eq!(*log.lock().unwrap(), vec!["before"]);
}

#[test]
fn the_next_tick_runs_after_a_failure() {
    let log: Log = Arc::default();
    let mut scene = Scene::new();
    scene.register_processor(Failing, 10);
    scene.register_processor(Named { label: "tick", log: Arc::clone(&log) }, 0);

    assert!(scene.process().is_err());
    scene.unregister_processor::<Failing>();
    scene.process().unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["tick"]);
}

// =============================================================================
// Mid-Tick Registration
// =============================================================================

#[test]
fn registrations_made_during_a_tick_are_kept() {
    struct Spawner {
        log: Log,
    }

    impl Processor for Spawner {
        fn process(&mut self, scene: &mut Scene) -> Result<()> {
            if !scene.has_processor::<Named>() {
                scene.register_processor(
                    Named { label: "spawned", log: Arc::clone(&self.log) },
                    0,
                );
            }
            Ok(())
        }
    }

    let log: Log = Arc::default();
    let mut scene = Scene::new();
    scene.register_processor(Spawner { log: Arc::clone(&log) }, 5);

    scene.process().unwrap();
    assert_eq!(scene.processor_count(), 2);

    scene.process().unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["spawned"]);
}

// =============================================================================
// Timing
// =============================================================================

#[test]
fn timed_process_records_per_processor_durations() {
    let log: Log = Arc::default();
    let mut scene = Scene::new();
    scene.register_processor(Named { label: "one", log: Arc::clone(&log) }, 1);
    scene.register_processor(Failing, -1);
    scene.unregister_processor::<Failing>();

    scene.timed_process().unwrap();

    assert_eq!(scene.process_times().len(), 1);
}
