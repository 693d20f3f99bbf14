use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{Config, Difficulty};

#[derive(Embed)]
#[folder = "assets/levels/"]
struct LevelAssets;

const BUNDLED_CATALOG: &str = "catalog.toml";

/// Sentences with at most this many words make up the easy subset.
pub const EASY_MAX_WORDS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: u32,
    #[serde(rename = "correct")]
    pub correct_text: String,
    pub words: Vec<String>,
    pub theme: String,
    pub theme_icon: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("sentence {id} has no words")]
    EmptySentence { id: u32 },
    #[error("sentence {id}: words join to {joined:?}, expected {correct:?}")]
    WordsMismatch {
        id: u32,
        joined: String,
        correct: String,
    },
    #[error("duplicate sentence id {id}")]
    DuplicateId { id: u32 },
    #[error("catalog contains no usable sentences")]
    Empty,
    #[error("bundled catalog asset {0} is missing")]
    MissingAsset(&'static str),
    #[error("catalog is not valid TOML: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "sentence")]
    sentences: Vec<Sentence>,
}

impl Sentence {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.words.is_empty() {
            return Err(CatalogError::EmptySentence { id: self.id });
        }
        let joined = self.words.join(" ");
        if joined != self.correct_text {
            return Err(CatalogError::WordsMismatch {
                id: self.id,
                joined,
                correct: self.correct_text.clone(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Ordered, read-only list of sentences indexed by 1-based level with wraparound.
#[derive(Clone, Debug)]
pub struct Catalog {
    sentences: Vec<Sentence>,
}

impl Catalog {
    /// Build a catalog, dropping invalid sentences with a warning.
    pub fn new(sentences: Vec<Sentence>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut valid = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let check = sentence.validate().and_then(|()| {
                if seen.insert(sentence.id) {
                    Ok(())
                } else {
                    Err(CatalogError::DuplicateId { id: sentence.id })
                }
            });
            match check {
                Ok(()) => valid.push(sentence),
                Err(err) => tracing::warn!(%err, "skipping catalog sentence"),
            }
        }
        if valid.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { sentences: valid })
    }

    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.sentences)
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        let file =
            LevelAssets::get(BUNDLED_CATALOG).ok_or(CatalogError::MissingAsset(BUNDLED_CATALOG))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_toml(content)
    }

    /// User `levels.toml` from the config dir if usable, else the bundled set.
    pub fn load() -> Result<Self, CatalogError> {
        let user_path = Config::config_dir().join("levels.toml");
        match Self::load_user(&user_path) {
            Some(catalog) => Ok(catalog),
            None => Self::bundled(),
        }
    }

    fn load_user(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match Self::from_toml(&content) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), count = catalog.len(), "loaded user catalog");
                Some(catalog)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring user catalog");
                None
            }
        }
    }

    /// Subset presented for a difficulty. Falls back to the full set when
    /// no sentence is short enough.
    pub fn for_difficulty(&self, difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Normal => self.clone(),
            Difficulty::Easy => {
                let short: Vec<Sentence> = self
                    .sentences
                    .iter()
                    .filter(|s| s.len() <= EASY_MAX_WORDS)
                    .cloned()
                    .collect();
                if short.is_empty() {
                    self.clone()
                } else {
                    Self { sentences: short }
                }
            }
        }
    }

    pub fn sentence(&self, level: u32) -> &Sentence {
        let idx = level.saturating_sub(1) as usize % self.sentences.len();
        &self.sentences[idx]
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }
}

#[cfg(test)]
pub(crate) fn sentence_from(id: u32, text: &str) -> Sentence {
    Sentence {
        id,
        correct_text: text.to_string(),
        words: text.split(' ').map(str::to_string).collect(),
        theme: "Prueba".to_string(),
        theme_icon: "*".to_string(),
    }
}
