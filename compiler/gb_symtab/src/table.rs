//! Flat symbol table loaded from `#define` declarations.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

/// Prefix marking a symbol declaration line.
pub const DEFINE_MARKER: &str = "#define ";

/// Error reading a symbol source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single declaration: `#define <name> <value>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Symbol {
    pub name: String,
    /// Raw value text, trimmed. Quotes are kept as written.
    pub value: String,
}

/// Mapping from symbol name to its literal value.
///
/// Symbols are stored in declaration order. Redefining a name replaces the
/// value but keeps the position of the first declaration, so iteration is
/// deterministic for a given input.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_name: FxHashMap<String, u32>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the whole file at `path` and parse it.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&source);
        tracing::debug!(path = %path.display(), symbols = table.len(), "loaded symbol table");
        Ok(table)
    }

    /// Parse declarations out of `source`.
    ///
    /// Only lines starting with [`DEFINE_MARKER`] (after leading whitespace)
    /// are considered. The first whitespace-delimited token is the name and
    /// the rest of the line, trimmed, is the value.
    pub fn parse(source: &str) -> Self {
        let mut table = Self::new();
        for line in source.lines() {
            let Some(decl) = line.trim().strip_prefix(DEFINE_MARKER) else {
                continue;
            };
            let decl = decl.trim_start();
            let (name, value) = match decl.split_once(char::is_whitespace) {
                Some((name, rest)) => (name, rest.trim()),
                None => (decl, ""),
            };
            if name.is_empty() {
                continue;
            }
            table.insert(name, value);
        }
        table
    }

    /// Insert or replace a symbol.
    pub fn insert(&mut self, name: &str, value: &str) {
        if let Some(&idx) = self.by_name.get(name) {
            value.clone_into(&mut self.symbols[idx as usize].value);
            return;
        }
        // A header with more than u32::MAX defines is not a realistic input.
        #[allow(clippy::cast_possible_truncation)]
        let idx = self.symbols.len() as u32;
        self.symbols.push(Symbol {
            name: name.to_owned(),
            value: value.to_owned(),
        });
        self.by_name.insert(name.to_owned(), idx);
    }

    /// Look up the value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .map(|&idx| self.symbols[idx as usize].value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
