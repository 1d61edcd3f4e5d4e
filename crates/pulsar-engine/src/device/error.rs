use std::fmt;

/// Failure to flush a frame to the physical display.
///
/// The scheduler treats every present failure as unrecoverable.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentError {
    /// The panel stopped responding or was detached.
    Disconnected,
    /// The buffer does not match the panel resolution.
    SizeMismatch {
        expected: (u16, u16),
        actual: (u16, u16),
    },
    /// Bus-level transfer error, with a driver-specific code.
    Transfer(u8),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::Disconnected => write!(f, "display disconnected"),
            PresentError::SizeMismatch { expected, actual } => write!(
                f,
                "buffer is {}x{}, panel expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            PresentError::Transfer(code) => write!(f, "display transfer failed (code {code})"),
        }
    }
}

impl std::error::Error for PresentError {}

/// Failure to read the inertial sensor.
///
/// Recovered locally: the attitude estimator keeps its last angles.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ImuError {
    /// No sensor fitted or it has not finished initializing.
    Unavailable,
    /// The sensor has no new data since the previous read.
    Stale,
    /// Bus-level transfer error, with a driver-specific code.
    Transfer(u8),
}

impl fmt::Display for ImuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImuError::Unavailable => write!(f, "imu unavailable"),
            ImuError::Stale => write!(f, "imu sample stale"),
            ImuError::Transfer(code) => write!(f, "imu transfer failed (code {code})"),
        }
    }
}

impl std::error::Error for ImuError {}
