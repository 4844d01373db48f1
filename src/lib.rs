pub mod configuration;
pub mod document;
pub mod routes;
pub mod server;
pub mod templates;
pub mod views;

pub use document::{Document, MetaTag};
pub use server::*;
