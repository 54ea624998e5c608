pub mod choreography;
pub mod config;
pub mod constants;
pub mod paths;
pub mod pulses;
pub mod signals;

pub use choreography::*;
pub use config::*;
pub use paths::*;
pub use pulses::*;
pub use signals::*;
