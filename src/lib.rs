//! LinkSmart - a local-first URL shortener with click analytics
//!
//! This library provides the core of the LinkSmart tool: the link registry
//! and redirect-resolution engine. A user submits a long URL, the app
//! generates a short alias, persists the mapping in a single versioned JSON
//! data file, and resolves later visits to that alias back to the original
//! URL while recording daily click counters. There is no server; a short
//! link resolves only on the machine that created it.
//!
//! # Architecture
//! - `storages`: persistent store (file and memory backends, one collection)
//! - `services`: link registry, click recorder, alias generator, resolver
//! - `cli`: command-line hosting shell
//! - `config`: configuration management
//! - `logging`: tracing subscriber setup
//! - `utils`: random codes, alias normalization, URL validation, ANSI colors

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod services;
pub mod storages;
pub mod utils;
