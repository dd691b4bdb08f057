/// Strategy dispatch — weighted choice between the two draw modes and
/// their sentence-count distributions.

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;

use crate::core::picker::Picker;
use crate::core::story::StoryConfig;
use crate::schema::sentence::Sentence;

/// Weighted discrete distribution over a contiguous sentence-count range
/// starting at `start`, one weight per count.
#[derive(Debug, Clone)]
pub struct CountRange {
    start: usize,
    weights: Vec<u32>,
}

impl CountRange {
    pub fn new(start: usize, weights: Vec<u32>) -> Self {
        CountRange { start, weights }
    }

    pub fn sample(&self, rng: &mut StdRng) -> Option<usize> {
        let dist = WeightedIndex::new(&self.weights).ok()?;
        Some(self.start + dist.sample(rng))
    }
}

/// The draw mode for one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Unconstrained enumeration of mutually non-colliding sentences.
    Enumeration,
    /// Sentences anchored on one shared root verb.
    RepeatedVerb,
}

/// Sentences chosen by one successful draw, plus the anchor verb when the
/// repeated-verb mode produced one (the loop registers it into the
/// repeated_verbs bin).
#[derive(Debug)]
pub struct StrategyOutcome<'s> {
    pub sentences: Vec<&'s Sentence>,
    pub repeated_verb: Option<String>,
}

impl Strategy {
    /// Weighted draw of the mode for the next attempt.
    pub fn choose(rng: &mut StdRng, weights: &[u32; 2]) -> Option<Strategy> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(match dist.sample(rng) {
            0 => Strategy::Enumeration,
            _ => Strategy::RepeatedVerb,
        })
    }

    /// Run this mode once against the corpus. `None` means the corpus
    /// could not satisfy the draw; the attempt is skipped, never fatal.
    pub fn run<'s>(
        &self,
        picker: &Picker<'s, '_>,
        config: &StoryConfig,
        rng: &mut StdRng,
    ) -> Option<StrategyOutcome<'s>> {
        match self {
            Strategy::Enumeration => {
                let count = config.enumeration_counts.sample(rng)?;
                let sentences = picker.pick(rng, count, None)?;
                Some(StrategyOutcome {
                    sentences,
                    repeated_verb: None,
                })
            }
            Strategy::RepeatedVerb => {
                let count = config.repeated_verb_counts.sample(rng)?;
                let anchor = picker.pick_anchor_verb(rng)?;
                let sentences = picker.pick(rng, count, Some(&anchor))?;
                Some(StrategyOutcome {
                    sentences,
                    repeated_verb: Some(anchor),
                })
            }
        }
    }
}
