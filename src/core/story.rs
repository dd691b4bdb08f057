/// The generation loop: strategy draws, trash registration, and assembly.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

use crate::core::assemble::{join_sentences, sort_sentences};
use crate::core::picker::Picker;
use crate::core::strategy::{CountRange, Strategy};
use crate::core::trash::{TrashError, TrashKind, TrashMap, TrashMapConfig};
use crate::schema::sentence::Sentence;

/// Tuning for a generation run: strategy weights, sentence-count
/// distributions, trash capacities, and the sentence-initial connector
/// stoplist.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// Relative weights for [`Strategy::Enumeration`] and
    /// [`Strategy::RepeatedVerb`].
    pub strategy_weights: [u32; 2],
    pub enumeration_counts: CountRange,
    pub repeated_verb_counts: CountRange,
    pub trash: TrashMapConfig,
    /// Lowercase discourse connectors that may not open a result.
    pub first_sentence_stoplist: FxHashSet<String>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        StoryConfig {
            strategy_weights: [100, 15],
            enumeration_counts: CountRange::new(1, vec![80, 10, 80, 100, 100, 50, 30, 10]),
            repeated_verb_counts: CountRange::new(4, vec![100, 100, 100, 40, 10, 10, 5]),
            trash: TrashMapConfig::default(),
            first_sentence_stoplist: default_stoplist(),
        }
    }
}

/// Deduplicated whole-word stoplist of German discourse connectors.
fn default_stoplist() -> FxHashSet<String> {
    const WORDS: &[&str] = &[
        "aber",
        "also",
        "andererseits",
        "aufgrund",
        "außerdem",
        "beide",
        "beiden",
        "beides",
        "dadurch",
        "daher",
        "damit",
        "danach",
        "daraufhin",
        "daraus",
        "darum",
        "dementsprechend",
        "demnach",
        "demzufolge",
        "denn",
        "dennoch",
        "deshalb",
        "deswegen",
        "doch",
        "einerseits",
        "folglich",
        "hierdurch",
        "infolgedessen",
        "jedoch",
        "nichtsdestotrotz",
        "nämlich",
        "obwohl",
        "somit",
        "sondern",
        "sonst",
        "sowohl",
        "sozusagen",
        "stattdessen",
        "trotzdem",
        "weder",
        "weil",
        "wenn",
        "weshalb",
        "wie",
        "wieso",
        "während",
        "währenddessen",
        "wodurch",
        "wofür",
        "woher",
        "wohin",
        "womit",
        "woran",
        "worauf",
        "zudem",
        "zwar",
    ];
    WORDS.iter().map(|w| w.to_string()).collect()
}

/// A long-running, non-repetitive generation stream over a finite corpus.
///
/// Owns its corpus copy and trash state; every generation step mutates the
/// trash bins in place, so one `Story` serves exactly one producer.
pub struct Story {
    sentences: Vec<Sentence>,
    trash: TrashMap,
    config: StoryConfig,
    rng: StdRng,
}

/// Builder for constructing a [`Story`].
pub struct StoryBuilder {
    sentences: Vec<Sentence>,
    config: StoryConfig,
    trash: Option<TrashMap>,
    trash_dir: Option<PathBuf>,
    seed: Option<u64>,
}

impl Story {
    pub fn builder() -> StoryBuilder {
        StoryBuilder {
            sentences: Vec::new(),
            config: StoryConfig::default(),
            trash: None,
            trash_dir: None,
            seed: None,
        }
    }

    /// Generate up to `target` texts.
    ///
    /// Each attempt draws one strategy; a draw the corpus cannot satisfy
    /// is skipped. The loop gives up after corpus-many attempts, so the
    /// returned list may be shorter than requested.
    pub fn generate(&mut self, target: usize) -> Vec<String> {
        let mut results = Vec::new();
        let budget = self.sentences.len();

        for _ in 0..budget {
            if results.len() == target {
                break;
            }

            let Some(strategy) = Strategy::choose(&mut self.rng, &self.config.strategy_weights)
            else {
                break;
            };

            let picker = Picker::new(
                &self.sentences,
                &self.trash,
                &self.config.first_sentence_stoplist,
            );
            let Some(outcome) = strategy.run(&picker, &self.config, &mut self.rng) else {
                continue;
            };

            let ordered = sort_sentences(outcome.sentences);

            for sentence in &ordered {
                self.trash
                    .bin_mut(TrashKind::Sentences)
                    .add(sentence.id.clone());
                if !sentence.verbs_lemma.is_empty() {
                    self.trash
                        .bin_mut(TrashKind::Verbs)
                        .add_many(sentence.verbs_lemma.iter().cloned());
                }
                if !sentence.nouns_lemma.is_empty() {
                    self.trash
                        .bin_mut(TrashKind::Nouns)
                        .add_many(sentence.nouns_lemma.iter().cloned());
                }
                self.trash
                    .bin_mut(TrashKind::Sources)
                    .add(sentence.source.clone());
            }
            if let Some(verb) = &outcome.repeated_verb {
                self.trash
                    .bin_mut(TrashKind::RepeatedVerbs)
                    .add(verb.clone());
            }

            results.push(join_sentences(&ordered));
        }

        results
    }

    pub fn trash(&self) -> &TrashMap {
        &self.trash
    }

    /// Persist every trash bin for the next run.
    pub fn save_trash(&self, dir: &Path) -> Result<(), TrashError> {
        self.trash.save_to_dir(dir)
    }

    pub fn corpus_len(&self) -> usize {
        self.sentences.len()
    }
}

impl StoryBuilder {
    pub fn sentences(mut self, sentences: Vec<Sentence>) -> Self {
        self.sentences = sentences;
        self
    }

    pub fn config(mut self, config: StoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide a pre-hydrated trash map, overriding `trash_dir`.
    pub fn trash(mut self, trash: TrashMap) -> Self {
        self.trash = Some(trash);
        self
    }

    /// Hydrate trash bins from `<kind>.txt` files in this directory;
    /// missing files yield empty bins.
    pub fn trash_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.trash_dir = Some(dir.into());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Story, TrashError> {
        let trash = match (self.trash, self.trash_dir) {
            (Some(trash), _) => trash,
            (None, Some(dir)) => TrashMap::load_from_dir(&dir, &self.config.trash)?,
            (None, None) => TrashMap::new(&self.config.trash),
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Story {
            sentences: self.sentences,
            trash,
            config: self.config,
            rng,
        })
    }
}
