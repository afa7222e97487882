//! Infrastructure configuration modules.

pub mod logging;
pub mod market;
pub mod names;
pub mod settings;

pub use settings::Config;
