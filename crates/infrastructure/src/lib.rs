//! Ferrous Authority Infrastructure Layer
pub mod dns;
pub mod logging;

pub use dns::RecordMapper;
pub use logging::init_logging;
