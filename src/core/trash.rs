/// Trash bins — bounded-recency records of recently used feature values.

use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A bounded FIFO record of used tokens.
///
/// Insertion order equals usage order. Once the bin grows past its
/// capacity the oldest excess is evicted; `None` means unbounded. There is
/// no manual removal besides eviction.
#[derive(Debug, Clone, Default)]
pub struct Trash {
    data: Vec<String>,
    max_items: Option<usize>,
}

impl Trash {
    pub fn new(max_items: Option<usize>) -> Self {
        Trash {
            data: Vec::new(),
            max_items,
        }
    }

    /// Append one token, evicting the oldest entry if over capacity.
    pub fn add(&mut self, value: impl Into<String>) {
        let value = value.into();
        debug_assert!(!value.is_empty(), "trash tokens must be non-empty");
        self.data.push(value);
        self.truncate();
    }

    /// Append many tokens in order, evicting the oldest excess once.
    pub fn add_many<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            let value = value.into();
            debug_assert!(!value.is_empty(), "trash tokens must be non-empty");
            self.data.push(value);
        }
        self.truncate();
    }

    fn truncate(&mut self) {
        if let Some(max) = self.max_items {
            if self.data.len() > max {
                let excess = self.data.len() - max;
                self.data.drain(..excess);
            }
        }
    }

    pub fn has(&self, value: &str) -> bool {
        self.data.iter().any(|v| v == value)
    }

    pub fn has_any<S: AsRef<str>>(&self, values: &[S]) -> bool {
        values.iter().any(|v| self.has(v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Retained tokens, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(String::as_str)
    }

    /// Load a bin from a flat text file, one token per line. Blank lines
    /// are skipped; a missing file yields an empty bin.
    pub fn load_from_file(path: &Path, max_items: Option<usize>) -> Result<Trash, TrashError> {
        let mut trash = Trash::new(max_items);
        if !path.exists() {
            return Ok(trash);
        }

        let contents = std::fs::read_to_string(path)?;
        trash.add_many(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        Ok(trash)
    }

    /// Write the bin to a flat text file, one token per line, replacing
    /// any prior content.
    pub fn save_to_file(&self, path: &Path) -> Result<(), TrashError> {
        let mut contents = String::new();
        for value in &self.data {
            contents.push_str(value);
            contents.push('\n');
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// The feature kinds tracked across a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrashKind {
    Verbs,
    RepeatedVerbs,
    Nouns,
    Sentences,
    Sources,
}

impl TrashKind {
    pub const ALL: [TrashKind; 5] = [
        TrashKind::Verbs,
        TrashKind::RepeatedVerbs,
        TrashKind::Nouns,
        TrashKind::Sentences,
        TrashKind::Sources,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TrashKind::Verbs => "verbs",
            TrashKind::RepeatedVerbs => "repeated_verbs",
            TrashKind::Nouns => "nouns",
            TrashKind::Sentences => "sentences",
            TrashKind::Sources => "sources",
        }
    }

    fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }
}

/// Per-kind bin capacities, fixed at construction of a [`TrashMap`].
#[derive(Debug, Clone)]
pub struct TrashMapConfig {
    pub verbs: Option<usize>,
    pub repeated_verbs: Option<usize>,
    pub nouns: Option<usize>,
    pub sentences: Option<usize>,
    pub sources: Option<usize>,
}

impl Default for TrashMapConfig {
    fn default() -> Self {
        TrashMapConfig {
            verbs: Some(14),
            repeated_verbs: Some(3),
            nouns: Some(40),
            sentences: None,
            sources: Some(70),
        }
    }
}

impl TrashMapConfig {
    pub fn capacity(&self, kind: TrashKind) -> Option<usize> {
        match kind {
            TrashKind::Verbs => self.verbs,
            TrashKind::RepeatedVerbs => self.repeated_verbs,
            TrashKind::Nouns => self.nouns,
            TrashKind::Sentences => self.sentences,
            TrashKind::Sources => self.sources,
        }
    }
}

/// One [`Trash`] bin per [`TrashKind`], capacities fixed at construction.
///
/// Lives for one generation run; optionally hydrated from and flushed to a
/// directory of flat text files at run boundaries.
#[derive(Debug, Clone)]
pub struct TrashMap {
    bins: FxHashMap<TrashKind, Trash>,
}

impl TrashMap {
    pub fn new(config: &TrashMapConfig) -> Self {
        let mut bins = FxHashMap::default();
        for kind in TrashKind::ALL {
            bins.insert(kind, Trash::new(config.capacity(kind)));
        }
        TrashMap { bins }
    }

    /// Rebuild every bin from `<kind>.txt` files in `dir`. Missing files
    /// yield empty bins rather than errors.
    pub fn load_from_dir(dir: &Path, config: &TrashMapConfig) -> Result<Self, TrashError> {
        let mut bins = FxHashMap::default();
        for kind in TrashKind::ALL {
            let trash = Trash::load_from_file(&dir.join(kind.file_name()), config.capacity(kind))?;
            bins.insert(kind, trash);
        }
        Ok(TrashMap { bins })
    }

    /// Persist every bin to `<kind>.txt` files in `dir`, creating the
    /// directory if needed.
    pub fn save_to_dir(&self, dir: &Path) -> Result<(), TrashError> {
        std::fs::create_dir_all(dir)?;
        for kind in TrashKind::ALL {
            self.bin(kind).save_to_file(&dir.join(kind.file_name()))?;
        }
        Ok(())
    }

    pub fn bin(&self, kind: TrashKind) -> &Trash {
        // Every kind is inserted at construction.
        &self.bins[&kind]
    }

    pub fn bin_mut(&mut self, kind: TrashKind) -> &mut Trash {
        self.bins.get_mut(&kind).expect("bin exists for every kind")
    }
}

impl Default for TrashMap {
    fn default() -> Self {
        TrashMap::new(&TrashMapConfig::default())
    }
}
