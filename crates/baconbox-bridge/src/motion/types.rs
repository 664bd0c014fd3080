/// Host sensor kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
    /// Host sensor type without a dedicated variant.
    Other(i32),
}

impl SensorKind {
    /// Host sensor type ids (Android `Sensor.TYPE_*`).
    pub const TYPE_ACCELEROMETER: i32 = 1;
    pub const TYPE_GYROSCOPE: i32 = 4;

    pub fn from_type(ty: i32) -> Self {
        match ty {
            Self::TYPE_ACCELEROMETER => Self::Accelerometer,
            Self::TYPE_GYROSCOPE => Self::Gyroscope,
            other => Self::Other(other),
        }
    }

    /// Folds `Other` ids that have a dedicated variant into that variant.
    pub fn canonical(self) -> Self {
        Self::from_type(self.type_id())
    }

    pub fn type_id(self) -> i32 {
        match self {
            Self::Accelerometer => Self::TYPE_ACCELEROMETER,
            Self::Gyroscope => Self::TYPE_GYROSCOPE,
            Self::Other(ty) => ty,
        }
    }
}

/// Sampling rate tier requested from the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SamplingRate {
    Fastest,
    /// Rate suitable for games; the one the bridge registers with.
    Game,
    Ui,
    Normal,
}

/// One accelerometer reading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for MotionSample {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Host sensor system.
///
/// Samples for registered kinds are delivered back through
/// [`SensorListener`](crate::host::SensorListener) on the host thread.
pub trait SensorHost: Send + Sync + 'static {
    /// Starts delivering samples for `kind`.
    ///
    /// Returns `false` when the host has no sensor of that kind.
    fn register(&self, kind: SensorKind, rate: SamplingRate) -> bool;

    fn unregister(&self, kind: SensorKind);
}
