//! Hookfreight SDK: choose **async** *or* **blocking** at compile time.

// compile-time guard: enable at least one client kind.
#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("Enable at least one of: `async` (default) or `blocking`.");

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod pagination;
pub mod transport;
pub mod types;
pub(crate) mod util;

pub use auth::{Auth, SecretString};
pub use error::{Error, ErrorKind, FieldError, HttpError, Result};
pub use pagination::{
    MAX_LIMIT_APPS, MAX_LIMIT_DELIVERIES, MAX_LIMIT_ENDPOINTS, MAX_LIMIT_EVENTS, PageParams,
    Paginated, clamp_page,
};
pub use types::*;

#[cfg(feature = "async")]
pub use client::{Client, ClientBuilder};
#[cfg(feature = "blocking")]
pub use client::{BlockingClient, BlockingClientBuilder};
