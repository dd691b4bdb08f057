/// Sentence records — corpus units, CSV ingestion, and load-time validation.

use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed sentence '{id}': {reason}")]
    Malformed { id: String, reason: String },
}

/// One corpus sentence with its extracted verb and noun features.
///
/// Feature lists arrive in the CSV as `;`-joined strings and are split
/// during deserialization. Lemma lists correspond 1:1 with their surface
/// lists; [`Sentence::validate`] enforces that at load time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sentence {
    pub id: String,
    pub text: String,
    pub root_verb: String,
    pub root_verb_lemma: String,
    #[serde(deserialize_with = "joined_field")]
    pub verbs: Vec<String>,
    #[serde(deserialize_with = "joined_field")]
    pub verbs_lemma: Vec<String>,
    #[serde(deserialize_with = "joined_field")]
    pub nouns: Vec<String>,
    #[serde(deserialize_with = "joined_field")]
    pub nouns_lemma: Vec<String>,
    pub source: String,
    #[serde(deserialize_with = "flag_field")]
    pub ends_with_colon: bool,
}

impl Sentence {
    /// Whether the text contains the connector " und ".
    pub fn has_and(&self) -> bool {
        self.text.contains(" und ")
    }

    /// Whether the text contains a colon anywhere.
    pub fn has_colon(&self) -> bool {
        self.text.contains(':')
    }

    /// Degenerate one-token sentences are never usable.
    pub fn is_single_word(&self) -> bool {
        self.text.split_whitespace().nth(1).is_none()
    }

    /// Whole-word tokens of the text, punctuation stripped.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
    }

    /// Reject sentences with empty required fields or mismatched
    /// surface/lemma cardinality. Runs once at corpus load; the engine
    /// assumes validated input.
    pub fn validate(&self) -> Result<(), CorpusError> {
        let fail = |reason: &str| {
            Err(CorpusError::Malformed {
                id: self.id.clone(),
                reason: reason.to_string(),
            })
        };

        if self.id.is_empty() {
            return fail("empty id");
        }
        if self.text.is_empty() {
            return fail("empty text");
        }
        if self.root_verb.is_empty() || self.root_verb_lemma.is_empty() {
            return fail("empty root verb or root verb lemma");
        }
        if self.source.is_empty() {
            return fail("empty source");
        }
        if self.verbs.len() != self.verbs_lemma.len() {
            return fail("verbs and verb lemmas differ in length");
        }
        if self.nouns.len() != self.nouns_lemma.len() {
            return fail("nouns and noun lemmas differ in length");
        }
        if self.verbs.iter().chain(&self.verbs_lemma).any(|v| v.is_empty())
            || self.nouns.iter().chain(&self.nouns_lemma).any(|n| n.is_empty())
        {
            return fail("empty feature value");
        }

        Ok(())
    }
}

/// Split a `;`-joined CSV field into its ordered values.
fn joined_field<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    Ok(raw.split(';').map(str::to_string).collect())
}

/// Parse the `True`/`False` flag strings the extraction step emits.
fn flag_field<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "True" | "true" | "1" => Ok(true),
        "False" | "false" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected True or False, got '{}'",
            other
        ))),
    }
}

/// Parse and validate a corpus from CSV data.
pub fn parse_corpus<R: Read>(reader: R) -> Result<Vec<Sentence>, CorpusError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut sentences = Vec::new();

    for record in csv_reader.deserialize() {
        let sentence: Sentence = record?;
        sentence.validate()?;
        sentences.push(sentence);
    }

    Ok(sentences)
}

/// Load a corpus from a CSV file.
pub fn load_corpus(path: &Path) -> Result<Vec<Sentence>, CorpusError> {
    let file = std::fs::File::open(path)?;
    parse_corpus(file)
}
