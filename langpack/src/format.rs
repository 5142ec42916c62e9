//! The line-oriented `key = value` locale file format.
//!
//! Each non-blank, non-comment line holds one pair: content before the first
//! `=` is the key, content after it is the value, both trimmed. `#` starts a
//! comment line. There is no escaping for literal `=` or newlines inside a
//! value; the split is on the first `=` only.

use std::io::Read;
use std::str::FromStr;

use crate::error::Error;

/// One parsed `key = value` line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub line: usize,
    pub key: String,
    pub value: String,
}

/// A parsed locale file: its pairs in file order.
///
/// Duplicate keys are preserved here; rejecting them is the job of
/// [`crate::types::TranslationTable::from_pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleFile {
    pub pairs: Vec<Pair>,
}

impl LocaleFile {
    /// Reads and parses a locale file from any byte stream.
    ///
    /// Input passes through BOM-aware decoding (UTF-8 assumed when no BOM is
    /// present), so UTF-8 and UTF-16 files both parse.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(reader);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        decoded.parse()
    }
}

impl FromStr for LocaleFile {
    type Err = Error;

    /// Parses locale file text.
    ///
    /// A data line without a `=` separator fails the whole parse; there is no
    /// partial result.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut pairs = Vec::new();

        for (index, raw) in s.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match trimmed.split_once('=') {
                Some((key, value)) => pairs.push(Pair {
                    line,
                    key: key.trim().to_string(),
                    value: value.trim().to_string(),
                }),
                None => return Err(Error::missing_separator(line, trimmed)),
            }
        }

        Ok(LocaleFile { pairs })
    }
}
