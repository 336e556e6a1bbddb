//! Browser-independent logic for the Finanzas client: wire types, endpoint
//! paths, error normalization, validation and the aggregates behind the
//! statistics and calendar views.

pub mod calendar;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod guard;
pub mod models;
pub mod nav;
pub mod notify;
pub mod sessions;
pub mod stats;
pub mod validation;

pub use error::ApiError;
