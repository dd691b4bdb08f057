/// Candidate filtering — the rejection rules that keep a draft result free
/// of repeats against itself and against the trash bins.

use rustc_hash::FxHashSet;

use crate::core::trash::{TrashKind, TrashMap};
use crate::schema::sentence::Sentence;

/// Sentences accepted so far within one draw, with their accumulated
/// lemmas for collision checks in the same scan.
#[derive(Debug, Default)]
pub struct Draft<'s> {
    picked: Vec<&'s Sentence>,
    found_verbs: FxHashSet<String>,
    found_nouns: FxHashSet<String>,
    found_and: bool,
}

impl<'s> Draft<'s> {
    pub fn new() -> Self {
        Draft::default()
    }

    /// Accept a sentence and fold its lemmas into the collision sets.
    pub fn accept(&mut self, sentence: &'s Sentence) {
        self.found_verbs
            .extend(sentence.verbs_lemma.iter().cloned());
        self.found_nouns
            .extend(sentence.nouns_lemma.iter().cloned());
        self.found_and |= sentence.has_and();
        self.picked.push(sentence);
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn into_sentences(self) -> Vec<&'s Sentence> {
        self.picked
    }

    fn has_verb_lemma(&self, lemma: &str) -> bool {
        self.found_verbs.contains(lemma)
    }

    fn has_noun_lemma(&self, lemma: &str) -> bool {
        self.found_nouns.contains(lemma)
    }
}

/// Pure predicate deciding whether a sentence may extend an in-progress
/// result, given the draft so far and the trash state.
///
/// With an anchor verb set, the verb rules switch to the repeated-verb
/// variant: the root verb must equal the anchor and only the candidate's
/// secondary verb lemmas are checked for collisions.
pub struct CandidateFilter<'a> {
    trash: &'a TrashMap,
    stoplist: &'a FxHashSet<String>,
    anchor: Option<&'a str>,
}

impl<'a> CandidateFilter<'a> {
    pub fn new(
        trash: &'a TrashMap,
        stoplist: &'a FxHashSet<String>,
        anchor: Option<&'a str>,
    ) -> Self {
        CandidateFilter {
            trash,
            stoplist,
            anchor,
        }
    }

    pub fn admits(&self, sentence: &Sentence, draft: &Draft<'_>) -> bool {
        if !self.admits_verbs(sentence, draft) {
            return false;
        }

        for lemma in &sentence.nouns_lemma {
            if draft.has_noun_lemma(lemma) || self.trash.bin(TrashKind::Nouns).has(lemma) {
                return false;
            }
        }

        if self.trash.bin(TrashKind::Sources).has(&sentence.source) {
            return false;
        }

        if self.trash.bin(TrashKind::Sentences).has(&sentence.id) {
            return false;
        }

        if sentence.is_single_word() {
            return false;
        }

        if sentence.ends_with_colon {
            return false;
        }

        // " und " appears at most once per result.
        if draft.found_and && sentence.has_and() {
            return false;
        }

        // Discourse connectors may not open a result.
        if draft.is_empty() && self.opens_with_connector(sentence) {
            return false;
        }

        true
    }

    fn admits_verbs(&self, sentence: &Sentence, draft: &Draft<'_>) -> bool {
        match self.anchor {
            Some(anchor) => {
                if sentence.root_verb != anchor {
                    return false;
                }

                // The root lemma itself is exempt; only secondary verb
                // lemmas may not collide with the draft or the verbs bin.
                let verbs_bin = self.trash.bin(TrashKind::Verbs);
                sentence
                    .verbs_lemma
                    .iter()
                    .filter(|lemma| **lemma != sentence.root_verb_lemma)
                    .all(|lemma| !draft.has_verb_lemma(lemma) && !verbs_bin.has(lemma))
            }
            None => {
                let verbs_bin = self.trash.bin(TrashKind::Verbs);
                let repeated_bin = self.trash.bin(TrashKind::RepeatedVerbs);
                sentence.verbs_lemma.iter().all(|lemma| {
                    !draft.has_verb_lemma(lemma)
                        && !verbs_bin.has(lemma)
                        && !repeated_bin.has(lemma)
                })
            }
        }
    }

    fn opens_with_connector(&self, sentence: &Sentence) -> bool {
        sentence
            .words()
            .any(|word| self.stoplist.contains(&word.to_lowercase()))
    }
}
