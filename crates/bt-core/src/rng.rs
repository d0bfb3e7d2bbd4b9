//! Seedable RNG wrapper used for response sampling.
//!
//! Every random draw the agent makes goes through one `AgentRng` owned by the
//! controller.  Seeding it with a fixed value makes the whole dialogue
//! sequence reproducible, which is what tests and replays rely on.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Per-agent RNG.
///
/// `!Sync` on purpose: the controller is its only user.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Output is not reproducible.
    pub fn from_entropy() -> Self {
        AgentRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
