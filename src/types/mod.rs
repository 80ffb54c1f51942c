//! Shared request/response types.

pub mod apps;
pub mod common;
pub mod deliveries;
pub mod endpoints;
pub mod events;

pub use apps::*;
pub use common::*;
pub use deliveries::*;
pub use endpoints::*;
pub use events::*;
