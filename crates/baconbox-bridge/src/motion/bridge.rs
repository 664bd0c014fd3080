use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::NativeEngine;

use super::{MotionSample, SamplingRate, SensorHost, SensorKind};

/// Forwards motion samples into the engine.
///
/// Tracks which sensor kinds are registered so that enabling or disabling
/// twice reaches the host only once.
pub struct MotionBridge<S: SensorHost> {
    host: S,
    engine: Arc<dyn NativeEngine>,
    enabled: Mutex<HashSet<SensorKind>>,
    log_tag: String,
}

impl<S: SensorHost> MotionBridge<S> {
    pub fn new(host: S, engine: Arc<dyn NativeEngine>, log_tag: impl Into<String>) -> Self {
        Self {
            host,
            engine,
            enabled: Mutex::new(HashSet::new()),
            log_tag: log_tag.into(),
        }
    }

    pub fn host(&self) -> &S {
        &self.host
    }

    pub fn is_enabled(&self, kind: SensorKind) -> bool {
        self.enabled.lock().contains(&kind.canonical())
    }

    /// Registers or unregisters for `kind` at the game sampling rate.
    ///
    /// Already being in the requested state is a no-op.
    pub fn set_enabled(&self, kind: SensorKind, enabled: bool) {
        let kind = kind.canonical();
        let mut registered = self.enabled.lock();

        if enabled {
            if registered.contains(&kind) {
                return;
            }
            if self.host.register(kind, SamplingRate::Game) {
                registered.insert(kind);
                log::debug!(target: self.log_tag.as_str(), "listening to {kind:?}");
            } else {
                log::warn!(target: self.log_tag.as_str(), "no default sensor for {kind:?}");
            }
        } else if registered.remove(&kind) {
            self.host.unregister(kind);
            log::debug!(target: self.log_tag.as_str(), "stopped listening to {kind:?}");
        }
    }

    /// Handles one host sample. Only accelerometer samples reach the engine.
    pub fn on_sample(&self, kind: SensorKind, values: [f32; 3]) {
        if kind.canonical() == SensorKind::Accelerometer {
            self.forward(MotionSample::from(values));
        }
    }

    pub fn on_accuracy_changed(&self, kind: SensorKind, accuracy: i32) {
        log::trace!(target: self.log_tag.as_str(), "{kind:?} accuracy changed to {accuracy}");
    }

    pub fn forward(&self, sample: MotionSample) {
        self.engine.on_accel(sample.x, sample.y, sample.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{EngineCall, FakeSensors, RecordingEngine, SensorCall};

    fn bridge(sensors: FakeSensors) -> (MotionBridge<FakeSensors>, Arc<RecordingEngine>) {
        let engine = Arc::new(RecordingEngine::default());
        (MotionBridge::new(sensors, engine.clone(), "test"), engine)
    }

    #[test]
    fn double_enable_registers_once_at_game_rate() {
        let (motion, _) = bridge(FakeSensors::default());

        for _ in 0..3 {
            motion.set_enabled(SensorKind::Accelerometer, true);
        }

        assert!(motion.is_enabled(SensorKind::Accelerometer));
        assert_eq!(
            motion.host().calls(),
            vec![SensorCall::Register(SensorKind::Accelerometer, SamplingRate::Game)]
        );
    }

    #[test]
    fn double_disable_unregisters_once() {
        let (motion, _) = bridge(FakeSensors::default());
        motion.set_enabled(SensorKind::Accelerometer, true);

        motion.set_enabled(SensorKind::Accelerometer, false);
        motion.set_enabled(SensorKind::Accelerometer, false);

        assert!(!motion.is_enabled(SensorKind::Accelerometer));
        assert_eq!(
            motion.host().calls(),
            vec![
                SensorCall::Register(SensorKind::Accelerometer, SamplingRate::Game),
                SensorCall::Unregister(SensorKind::Accelerometer),
            ]
        );
    }

    #[test]
    fn disable_without_enable_is_noop() {
        let (motion, _) = bridge(FakeSensors::default());
        motion.set_enabled(SensorKind::Gyroscope, false);
        assert!(motion.host().calls().is_empty());
    }

    #[test]
    fn rejected_registration_stays_disabled() {
        let (motion, _) = bridge(FakeSensors::rejecting());

        motion.set_enabled(SensorKind::Accelerometer, true);
        assert!(!motion.is_enabled(SensorKind::Accelerometer));

        // Not registered, so there is nothing to unregister.
        motion.set_enabled(SensorKind::Accelerometer, false);
        assert_eq!(motion.host().calls().len(), 1);
    }

    #[test]
    fn accelerometer_sample_is_forwarded_unchanged() {
        let (motion, engine) = bridge(FakeSensors::default());

        motion.on_sample(SensorKind::Accelerometer, [0.5, -9.81, 3.25]);
        assert_eq!(engine.calls(), vec![EngineCall::Accel(0.5, -9.81, 3.25)]);
    }

    #[test]
    fn raw_accelerometer_id_is_the_accelerometer() {
        let (motion, engine) = bridge(FakeSensors::default());

        motion.set_enabled(SensorKind::Accelerometer, true);
        motion.set_enabled(SensorKind::Other(SensorKind::TYPE_ACCELEROMETER), true);
        assert!(motion.is_enabled(SensorKind::Other(1)));
        assert_eq!(
            motion.host().calls(),
            vec![SensorCall::Register(SensorKind::Accelerometer, SamplingRate::Game)]
        );

        motion.on_sample(SensorKind::Other(1), [0.1, 0.2, 0.3]);
        assert_eq!(engine.calls(), vec![EngineCall::Accel(0.1, 0.2, 0.3)]);

        motion.set_enabled(SensorKind::Other(1), false);
        assert!(!motion.is_enabled(SensorKind::Accelerometer));
    }

    #[test]
    fn other_sensor_samples_are_ignored() {
        let (motion, engine) = bridge(FakeSensors::default());

        motion.on_sample(SensorKind::Gyroscope, [1.0, 2.0, 3.0]);
        motion.on_sample(SensorKind::Other(42), [1.0, 2.0, 3.0]);
        motion.on_accuracy_changed(SensorKind::Accelerometer, 3);

        assert!(engine.calls().is_empty());
    }
}
