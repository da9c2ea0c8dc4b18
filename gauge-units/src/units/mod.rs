//! Per-kind unit tables

mod dimensionless;
mod distance;
mod information;
mod rate;
mod shirt;
mod temperature;
mod time;

pub use dimensionless::DimensionlessUnit;
pub use distance::DistanceUnit;
pub use information::BitUnit;
pub use rate::BitRateUnit;
pub use shirt::{ShirtSize, ShirtSizeUnit};
pub use temperature::TemperatureUnit;
pub use time::TimeUnit;
