//! Question bank loading.
//!
//! A bank is two parallel lists, statements and answers, zipped by index
//! when the quiz starts. One bank ships inside the binary; others are read
//! from JSON files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::QuizError;
use crate::quiz::QuestionStore;

/// Bundled bank: Kotlin & Android basics
const BUNDLED_DEFAULT: &str = include_str!("../bundled_banks/default.json");

/// Fixed set of statements and their answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default = "default_name")]
    pub name: String,
    pub statements: Vec<String>,
    pub answers: Vec<bool>,
}

fn default_name() -> String {
    "Quiz".to_string()
}

impl QuestionBank {
    /// The bank compiled into the binary.
    pub fn bundled() -> Result<Self> {
        serde_json::from_str(BUNDLED_DEFAULT).context("Failed to parse bundled question bank")
    }

    /// Load a bank from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank: {:?}", path))?;
        let bank: QuestionBank = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse question bank: {:?}", path))?;
        Ok(bank)
    }

    /// Load from `path` if given, otherwise fall back to the bundled bank.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    /// Build a fresh store from this bank.
    pub fn to_store(&self) -> Result<QuestionStore, QuizError> {
        QuestionStore::initialize(self.statements.clone(), self.answers.clone())
    }

    pub fn question_count(&self) -> usize {
        self.statements.len()
    }
}
