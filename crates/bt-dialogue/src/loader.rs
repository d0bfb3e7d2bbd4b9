//! CSV loaders for the dialogue catalog and the keyword rules.
//!
//! # Catalog format
//!
//! One row per response.  Rows for the same intent keep their file order.
//!
//! ```csv
//! intent,response
//! greeting,안녕하세요
//! unknown,다시 말씀해주세요
//! ```
//!
//! # Rules format
//!
//! One row per keyword.  Rule priority is the order in which each intent
//! *first* appears in the file; later rows for that intent just add keywords.
//!
//! ```csv
//! intent,keyword
//! deposit,입금
//! loan,대출
//! deposit,저금
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{DialogueCatalog, DialogueError, DialogueResult, Intent, IntentClassifier, KeywordRule};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ResponseRecord {
    intent:   String,
    response: String,
}

#[derive(Deserialize)]
struct KeywordRecord {
    intent:  String,
    keyword: String,
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Load and validate a [`DialogueCatalog`] from a CSV file.
pub fn load_catalog_csv(path: &Path) -> DialogueResult<DialogueCatalog> {
    let file = std::fs::File::open(path).map_err(DialogueError::Io)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
pub fn load_catalog_reader<R: Read>(reader: R) -> DialogueResult<DialogueCatalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries: HashMap<Intent, Vec<String>> = HashMap::new();

    for result in csv_reader.deserialize::<ResponseRecord>() {
        let row = result.map_err(|e| DialogueError::Parse(e.to_string()))?;
        let intent: Intent = row.intent.parse()?;
        entries.entry(intent).or_default().push(row.response);
    }

    DialogueCatalog::new(entries)
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Load and validate an [`IntentClassifier`] from a CSV file.
pub fn load_rules_csv(path: &Path) -> DialogueResult<IntentClassifier> {
    let file = std::fs::File::open(path).map_err(DialogueError::Io)?;
    load_rules_reader(file)
}

/// Like [`load_rules_csv`] but accepts any `Read` source.
pub fn load_rules_reader<R: Read>(reader: R) -> DialogueResult<IntentClassifier> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rules: Vec<KeywordRule> = Vec::new();

    for result in csv_reader.deserialize::<KeywordRecord>() {
        let row = result.map_err(|e| DialogueError::Parse(e.to_string()))?;
        let intent: Intent = row.intent.parse()?;
        let keyword = row.keyword.to_lowercase();
        match rules.iter_mut().find(|r| r.intent == intent) {
            Some(rule) => rule.keywords.push(keyword),
            None       => rules.push(KeywordRule { intent, keywords: vec![keyword] }),
        }
    }

    IntentClassifier::new(rules)
}
