//! Seed document parsers
//!
//! Each parser turns one text format into [`SeedData`]. [`SeedParsers`]
//! picks a parser from a file extension.

use crate::data::SeedData;
use crate::error::SeedError;
use std::path::Path;

/// Parser for one seed document format
pub trait SeedParser: Send + Sync {
    /// Parse document text
    ///
    /// # Errors
    /// Returns [`SeedError`] if the text is not a well-formed seed document
    fn parse(&self, content: &str) -> Result<SeedData, SeedError>;

    /// Supported file extensions (without dot)
    fn extensions(&self) -> &[&str];

    /// Check if this parser can handle the given path
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

/// JSON seed parser
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSeedParser;

impl SeedParser for JsonSeedParser {
    fn parse(&self, content: &str) -> Result<SeedData, SeedError> {
        Ok(serde_json::from_str(content)?)
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// YAML seed parser
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSeedParser;

impl SeedParser for YamlSeedParser {
    fn parse(&self, content: &str) -> Result<SeedData, SeedError> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Registered parsers, consulted in registration order
pub struct SeedParsers {
    parsers: Vec<Box<dyn SeedParser>>,
}

impl SeedParsers {
    /// Empty registry
    #[must_use]
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser
    #[must_use]
    pub fn with_parser(mut self, parser: impl SeedParser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Parser for `path`, if any
    #[must_use]
    pub fn for_path(&self, path: &Path) -> Option<&dyn SeedParser> {
        self.parsers
            .iter()
            .find(|p| p.can_parse(path))
            .map(AsRef::as_ref)
    }

    /// All supported extensions
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        self.parsers
            .iter()
            .flat_map(|p| p.extensions().iter().copied())
            .collect()
    }

    /// Parse `content` with the parser registered for `path`
    ///
    /// # Errors
    /// Returns [`SeedError::UnsupportedFormat`] if no parser matches, or the
    /// parser's own error
    pub fn parse(&self, path: &Path, content: &str) -> Result<SeedData, SeedError> {
        let parser = self
            .for_path(path)
            .ok_or_else(|| SeedError::UnsupportedFormat {
                path: path.to_path_buf(),
                expected: self.extensions().join(", "),
            })?;
        parser.parse(content)
    }
}

impl Default for SeedParsers {
    fn default() -> Self {
        Self::empty()
            .with_parser(JsonSeedParser)
            .with_parser(YamlSeedParser)
    }
}

impl std::fmt::Debug for SeedParsers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedParsers")
            .field("extensions", &self.extensions())
            .finish()
    }
}
