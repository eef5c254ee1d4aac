use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of a compilation database: the build invocation of a single
/// source file. Keys other than `command` and `arguments` are carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildEntry(pub Map<String, Value>);

impl BuildEntry {
    /// The `command` value, if it is a string.
    pub fn command(&self) -> Option<&str> {
        self.0.get("command").and_then(Value::as_str)
    }

    /// The `arguments` value, if it is an array.
    pub fn arguments_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.0.get_mut("arguments").and_then(Value::as_array_mut)
    }

    pub fn set_command(&mut self, command: String) {
        self.0.insert("command".to_string(), Value::String(command));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// An ordered list of build entries, as found in `compile_commands.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompileDatabase {
    pub entries: Vec<BuildEntry>,
}

impl CompileDatabase {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BuildEntry> {
        self.entries.iter()
    }

    /// Parse a database from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an array of objects.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a CompileDatabase {
    type Item = &'a BuildEntry;
    type IntoIter = std::slice::Iter<'a, BuildEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Read and parse the compilation database at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of objects.
pub fn load(path: &Path) -> anyhow::Result<CompileDatabase> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read compilation database: {}", path.display()))?;
    CompileDatabase::from_json(&content)
        .with_context(|| format!("failed to parse compilation database: {}", path.display()))
}

/// Write `db` to `path` as compact JSON, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(path: &Path, db: &CompileDatabase) -> anyhow::Result<()> {
    let json = db.to_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write compilation database: {}", path.display()))
}
