pub mod config;
pub mod error;
pub mod root;

pub use config::{app_router, configure_app, AppState};
pub use error::{AppError, RootValueError};
pub use root::{RootContext, RootValue, RootValueSource, StaticRootValue};
