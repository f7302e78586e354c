//! Alias generation
//!
//! Produces short random aliases and resolves collisions against the
//! registry by regenerating. With 36^6 possible aliases the collision
//! probability per attempt stays negligible until the registry holds a very
//! large number of links; the retry cap is defensive, not expected to hit.

use tracing::debug;

use crate::config::get_config;
use crate::errors::{LinkSmartError, Result};
use crate::services::registry::LinkRegistry;
use crate::utils::generate_random_code;

/// Defensive cap on regeneration attempts.
pub const MAX_GENERATE_ATTEMPTS: usize = 50;

pub struct AliasGenerator;

impl AliasGenerator {
    /// Returns a free alias of the configured length (default 6) drawn from
    /// `[a-z0-9]`.
    pub fn generate(registry: &LinkRegistry) -> Result<String> {
        let length = get_config().features.random_code_length;

        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let candidate = generate_random_code(length);
            if !registry.exists(&candidate) {
                return Ok(candidate);
            }
            debug!("alias collision on attempt {}: {}", attempt, candidate);
        }

        Err(LinkSmartError::alias_space_exhausted(format!(
            "no free alias found after {} attempts",
            MAX_GENERATE_ATTEMPTS
        )))
    }
}
