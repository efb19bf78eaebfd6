#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Corner toast notifications: placement, slide/fade animation and a
//! strictly linear lifecycle driven on tokio.

pub mod animation;
pub mod assets;
pub mod builder;
pub mod config;
pub mod error;
pub mod geometry;
pub mod platform;
pub mod scene;
pub mod telemetry;
pub mod toast;
pub mod types;

pub use builder::ToastBuilder;
pub use toast::{Outcome, Toast, ToastHandle, ToastState};

pub type Result<T> = std::result::Result<T, error::Error>;
