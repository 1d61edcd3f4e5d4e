//! Coordinate and vector types shared by input and sensor code.
//!
//! Screen space:
//! - Physical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Sensor space follows the IMU axes; see [`crate::imu`].

mod vec2;
mod vec3;

pub use vec2::Vec2i;
pub use vec3::Vec3f;
