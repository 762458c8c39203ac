pub mod logging;
pub mod timestamps;

pub use logging::setup_logging;
pub use timestamps::utc_date_from_epoch_seconds;
