//! Terminal front end for the serialpulse delta engine
//!
//! This crate owns no computation: it loads the two source tables, hands the
//! grouped snapshots plus a query to `serialpulse_core` on every control
//! change, and draws whatever series come back.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod util;

pub use app::App;
pub use data::load_datasets;
pub use logging::init_logging;
