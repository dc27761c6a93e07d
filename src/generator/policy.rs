use rand::{Rng, seq::SliceRandom};

use crate::types::{GenerationOptions, TrackCandidate};

/// How one artist's candidates are ordered before pooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Least popular first.
    Discovery,
    /// Uniform random order.
    Balanced,
    /// Provider order, assumed relevance ranked.
    Relevance,
}

impl SelectionPolicy {
    pub fn from_options(options: &GenerationOptions) -> Self {
        if options.discovery_mode {
            SelectionPolicy::Discovery
        } else if options.include_popular {
            SelectionPolicy::Balanced
        } else {
            SelectionPolicy::Relevance
        }
    }

    /// Reorders in place; never adds or drops a candidate.
    pub fn apply<R: Rng + ?Sized>(self, candidates: &mut [TrackCandidate], rng: &mut R) {
        match self {
            // sort_by_key is stable, equal popularity keeps provider order
            SelectionPolicy::Discovery => candidates.sort_by_key(|c| c.popularity),
            SelectionPolicy::Balanced => candidates.shuffle(rng),
            SelectionPolicy::Relevance => {}
        }
    }
}

pub fn apply_policy<R: Rng + ?Sized>(
    mut candidates: Vec<TrackCandidate>,
    options: &GenerationOptions,
    rng: &mut R,
) -> Vec<TrackCandidate> {
    SelectionPolicy::from_options(options).apply(&mut candidates, rng);
    candidates
}
