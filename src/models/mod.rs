pub mod bell_schedule;
pub mod calculation;
pub mod preset;

pub use bell_schedule::BellSchedule;
pub use calculation::{CalculationResult, MinRule};
pub use preset::Preset;
