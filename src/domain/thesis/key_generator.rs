//! Section key generation.

use crate::domain::foundation::SectionKey;

/// Attempts made before giving up with `DuplicateKey`.
pub const DEFAULT_KEY_ATTEMPTS: u32 = 5;

/// Source of candidate section keys.
///
/// The registry checks each candidate against the keys already present and
/// asks again on collision, up to `max_attempts` times.
pub trait SectionKeyGenerator: Send + Sync {
    /// Produces a candidate key.
    fn generate(&self) -> SectionKey;

    /// How many candidates to try before failing.
    fn max_attempts(&self) -> u32 {
        DEFAULT_KEY_ATTEMPTS
    }
}

/// UUID-backed generator (`section_<12 hex>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKeyGenerator;

impl RandomKeyGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SectionKeyGenerator for RandomKeyGenerator {
    fn generate(&self) -> SectionKey {
        SectionKey::random()
    }
}
