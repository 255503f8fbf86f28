pub mod driver;
pub mod recorder;
pub mod registers;

pub use driver::{DriverError, EnvHandle, LightHandle, LightingDriver};
pub use recorder::RegisterLog;
