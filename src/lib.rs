pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;

pub use clock::{Clock, FixedClock, ServerClock, SystemClock};
pub use config::Config;
pub use database::db::ReviewStore;
pub use error::{Error, Result};
pub use models::{Card, Model, ParentRef, REPLY_NO, REPLY_YES, ReviewEvent};
