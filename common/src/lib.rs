//! # Shared building blocks
//!
//! Everything the other crates agree on lives here:
//!
//! * **[`target`]**: the raw hostnames we analyze and how list files become targets.
//! * **[`result`]**: verdicts, findings and the per-target [`result::ScanResult`].
//! * **[`config`]**: the configuration value object handed to the analyzer.
//! * **[`dns`]** and **[`http`]**: the outbound ports implemented by `azfd-protocols`.

pub mod config;
pub mod dns;
pub mod error;
pub mod http;
pub mod result;
pub mod target;
