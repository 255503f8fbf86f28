//! Integration tests for LightingDriver using a mock register sink.
//!
//! Covers stage enable on bind, full re-upload when switching environments,
//! incremental flushes and sink error propagation.
//!
//! Uses a Vec-based mock sink that captures (addr, data) write tuples.

use std::cell::RefCell;
use std::rc::Rc;

use fraglight_core::gpu::registers::map;
use fraglight_core::{
    DriverError, EnvHandle, LightingDriver, LightingError, RegisterLog, RegisterSink,
};

/// Captured register write: (address, data).
type WriteRecord = (u16, u32);

/// Mock sink that records all register writes and can be told to fail.
#[derive(Clone)]
struct MockSink {
    writes: Rc<RefCell<Vec<WriteRecord>>>,
    fail: Rc<RefCell<bool>>,
}

impl MockSink {
    fn new() -> Self {
        Self {
            writes: Rc::new(RefCell::new(Vec::new())),
            fail: Rc::new(RefCell::new(false)),
        }
    }

    /// Get all captured writes and forget them.
    fn take_writes(&self) -> Vec<WriteRecord> {
        std::mem::take(&mut *self.writes.borrow_mut())
    }

    /// Find the last write to a specific address.
    fn last_write_to(&self, addr: u16) -> Option<u32> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(a, _)| *a == addr)
            .map(|(_, d)| *d)
    }

    fn set_failing(&self, fail: bool) {
        *self.fail.borrow_mut() = fail;
    }
}

#[derive(Debug, PartialEq)]
struct MockError;

impl RegisterSink for MockSink {
    type Error = MockError;

    fn write_register(&mut self, addr: u16, data: u32) -> Result<(), Self::Error> {
        if *self.fail.borrow() {
            return Err(MockError);
        }
        self.writes.borrow_mut().push((addr, data));
        Ok(())
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Helper: create a driver with one environment holding one light.
fn make_driver() -> (LightingDriver<MockSink>, MockSink, EnvHandle) {
    init_logger();
    let sink = MockSink::new();
    let mut driver = LightingDriver::new(sink.clone());
    let env = driver.create_environment();
    driver.add_light(env).expect("light should register");
    (driver, sink, env)
}

// ============================================================================
// bind
// ============================================================================

mod bind_tests {
    use super::*;

    #[test]
    fn bind_enables_stage() {
        let (mut driver, sink, env) = make_driver();
        driver.bind(Some(env)).expect("bind should succeed");

        assert_eq!(
            sink.take_writes(),
            vec![(map::LIGHTING_ENABLE, 1), (map::LIGHTING_DISABLE, 0)]
        );
        assert_eq!(driver.bound(), Some(env));
    }

    #[test]
    fn unbind_disables_stage() {
        let (mut driver, sink, env) = make_driver();
        driver.bind(Some(env)).expect("bind should succeed");
        sink.take_writes();

        driver.bind(None).expect("unbind should succeed");
        assert_eq!(sink.last_write_to(map::LIGHTING_ENABLE), Some(0));
        assert_eq!(sink.last_write_to(map::LIGHTING_DISABLE), Some(1));
        assert_eq!(driver.bound(), None);
        assert_eq!(driver.flush().expect("flush should succeed"), 0);
    }

    #[test]
    fn rebinding_does_not_rewrite_enable() {
        let (mut driver, sink, env) = make_driver();
        let other = driver.create_environment();
        driver.bind(Some(env)).expect("bind should succeed");
        sink.take_writes();

        driver.bind(Some(other)).expect("bind should succeed");
        assert!(sink.take_writes().is_empty());
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let (mut driver, sink, _) = make_driver();
        let mut other = LightingDriver::new(RegisterLog::new());
        other.create_environment();
        let foreign = other.create_environment();

        let err = driver.bind(Some(foreign)).expect_err("bind should fail");
        assert!(matches!(
            err,
            DriverError::Lighting(LightingError::InvalidIndex { index: 1, .. })
        ));
        assert!(sink.take_writes().is_empty());
        assert_eq!(driver.bound(), None);
    }
}

// ============================================================================
// flush
// ============================================================================

mod flush_tests {
    use super::*;

    #[test]
    fn incremental_after_full_upload() {
        let (mut driver, sink, env) = make_driver();
        driver.bind(Some(env)).expect("bind should succeed");
        let first = driver.flush().expect("flush should succeed");
        assert!(first > 0);
        sink.take_writes();

        let light = driver
            .environment(env)
            .and_then(|e| e.lights().next())
            .map(|l| l.id())
            .expect("light should exist");
        driver
            .environment_mut(env)
            .and_then(|e| e.light_mut(light))
            .expect("light should exist")
            .set_diffuse(0.0, 1.0, 0.0);

        assert_eq!(driver.flush().expect("flush should succeed"), 1);
        assert_eq!(
            sink.take_writes(),
            vec![(map::light_reg(0, map::LIGHT_DIFFUSE), 0)]
        );
        assert_eq!(driver.flush().expect("flush should succeed"), 0);
    }

    #[test]
    fn switching_environments_reuploads_everything() {
        let (mut driver, sink, a) = make_driver();
        let b = driver.create_environment();

        driver.bind(Some(a)).expect("bind should succeed");
        let full = driver.flush().expect("flush should succeed");
        driver.bind(Some(b)).expect("bind should succeed");
        driver.flush().expect("flush should succeed");
        sink.take_writes();

        // a is clean, but the hardware now holds b's state.
        assert!(driver.environment(a).expect("a should exist").is_clean());
        driver.bind(Some(a)).expect("bind should succeed");
        assert_eq!(driver.flush().expect("flush should succeed"), full);
    }

    #[test]
    fn light_handles_reach_their_environment() {
        let (mut driver, sink, env) = make_driver();
        let handle = driver.add_light(env).expect("light should register");
        assert_eq!(handle.env, env);
        assert_eq!(handle.light.index(), 1);

        driver.bind(Some(env)).expect("bind should succeed");
        driver.flush().expect("flush should succeed");
        sink.take_writes();

        driver
            .light_mut(handle)
            .expect("light should exist")
            .set_specular0(1.0, 1.0, 1.0);
        driver.flush().expect("flush should succeed");
        assert_eq!(
            sink.take_writes(),
            vec![(map::light_reg(1, map::LIGHT_SPECULAR0), 0)]
        );
        assert_eq!(
            driver.light(handle).map(|l| l.specular0()),
            Some(glam::Vec3::ONE)
        );
    }

    #[test]
    fn sink_error_keeps_state_dirty() {
        let (mut driver, sink, env) = make_driver();
        driver.bind(Some(env)).expect("bind should succeed");

        sink.set_failing(true);
        let err = driver.flush().expect_err("flush should fail");
        assert!(matches!(err, DriverError::Transport(MockError)));

        sink.set_failing(false);
        let retried = driver.flush().expect("flush should succeed");
        assert!(retried > 0);
        assert!(driver.environment(env).expect("env should exist").is_clean());
    }

    #[test]
    fn flush_without_enabled_light_still_uploads() {
        init_logger();
        let mut driver = LightingDriver::new(RegisterLog::new());
        let env = driver.create_environment();
        driver.bind(Some(env)).expect("bind should succeed");

        let count = driver.flush().expect("flush should succeed");
        assert_eq!(count + 2, driver.sink().len());
        assert_eq!(driver.sink().last_write(map::LIGHTING_NUM_LIGHTS), Some(0));
    }
}
