//! Core services
//!
//! Business logic over the persistent store, shared by the CLI shell and
//! anything else that embeds the crate.

pub mod clicks;
pub mod generator;
pub mod registry;
pub mod resolver;
pub mod stats;

pub use clicks::ClickRecorder;
pub use generator::AliasGenerator;
pub use registry::LinkRegistry;
pub use resolver::RedirectResolver;
pub use stats::{dashboard_stats, DashboardStats};
