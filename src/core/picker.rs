/// Corpus sampling — one-pass quota draws over a seeded index permutation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

use crate::core::filter::{CandidateFilter, Draft};
use crate::core::trash::{TrashKind, TrashMap};
use crate::schema::sentence::Sentence;

/// Draws sentences from the corpus for one generation attempt.
///
/// Every draw scans a fresh permutation of corpus indices, so the caller's
/// sentence slice is never reordered and a fixed seed gives deterministic
/// picks.
pub struct Picker<'s, 'c> {
    sentences: &'s [Sentence],
    trash: &'c TrashMap,
    stoplist: &'c FxHashSet<String>,
}

impl<'s, 'c> Picker<'s, 'c> {
    pub fn new(
        sentences: &'s [Sentence],
        trash: &'c TrashMap,
        stoplist: &'c FxHashSet<String>,
    ) -> Self {
        Picker {
            sentences,
            trash,
            stoplist,
        }
    }

    fn permutation(&self, rng: &mut StdRng) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.sentences.len()).collect();
        indices.shuffle(rng);
        indices
    }

    /// Accept sentences passing the candidate filter in one linear scan,
    /// stopping as soon as `count` are found. Returns `None` when the
    /// corpus cannot fill the quota in a single pass; that exhaustion is
    /// the expected signal for a skipped attempt, not an error.
    pub fn pick(
        &self,
        rng: &mut StdRng,
        count: usize,
        anchor: Option<&str>,
    ) -> Option<Vec<&'s Sentence>> {
        let filter = CandidateFilter::new(self.trash, self.stoplist, anchor);
        let mut draft = Draft::new();

        for index in self.permutation(rng) {
            let sentence = &self.sentences[index];
            if !filter.admits(sentence, &draft) {
                continue;
            }

            draft.accept(sentence);
            if draft.len() == count {
                return Some(draft.into_sentences());
            }
        }

        None
    }

    /// Find an anchor verb for a repeated-verb draw: the first sentence in
    /// a fresh permutation whose root-verb lemma sits in neither the
    /// repeated_verbs bin nor the verbs bin. `None` when every root lemma
    /// is still in recent history.
    pub fn pick_anchor_verb(&self, rng: &mut StdRng) -> Option<String> {
        let verbs_bin = self.trash.bin(TrashKind::Verbs);
        let repeated_bin = self.trash.bin(TrashKind::RepeatedVerbs);

        for index in self.permutation(rng) {
            let sentence = &self.sentences[index];
            if !repeated_bin.has(&sentence.root_verb_lemma)
                && !verbs_bin.has(&sentence.root_verb_lemma)
            {
                return Some(sentence.root_verb.clone());
            }
        }

        None
    }
}
