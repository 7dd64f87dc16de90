pub mod config;
#[cfg(feature = "desktop")]
mod desktop;
pub mod errors;
pub mod models;
pub mod query;
pub mod registry;
pub mod session;
pub mod store;
pub mod telemetry;
pub mod validation;

pub use crate::errors::{AppError, AppResult};
pub use crate::models::{DraftRecord, SpaceId, SpaceRecord, SpaceStatus, SpaceType, TypeFilter};
pub use crate::registry::SpaceRegistry;

#[cfg(feature = "desktop")]
pub use crate::desktop::run;
