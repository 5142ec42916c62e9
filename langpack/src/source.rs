//! Resource sources: where locale files come from.
//!
//! The catalog needs exactly two capabilities: enumerate resource names and
//! open one as a byte stream. Any packaging (filesystem, embedded strings,
//! archives) satisfies the catalog identically through [`ResourceSource`].

use std::fs::{self, File};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Capability to enumerate named text resources and open one for reading.
///
/// Implementors must be `Send`: a catalog owns its source and can be
/// installed as the process-wide shared instance.
pub trait ResourceSource: Send {
    /// All resource names this source can open, in the source's own
    /// enumeration order.
    fn names(&self) -> Result<Vec<String>, Error>;

    /// Opens one resource as a byte stream; fails if the name is absent.
    fn open(&self, name: &str) -> Result<Box<dyn Read>, Error>;
}

/// Serves every file under a root directory.
///
/// Names are `/`-joined paths relative to the root. Enumeration is sorted:
/// `read_dir` order is platform-arbitrary, and registration order must be
/// reproducible.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectorySource { root: root.into() }
    }
}

impl ResourceSource for DirectorySource {
    fn names(&self) -> Result<Vec<String>, Error> {
        let mut names = Vec::new();
        collect_names(&self.root, "", &mut names)?;
        names.sort();
        Ok(names)
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read>, Error> {
        let file = File::open(self.root.join(name))?;
        Ok(Box::new(file))
    }
}

fn collect_names(dir: &Path, prefix: &str, names: &mut Vec<String>) -> Result<(), Error> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let relative = if prefix.is_empty() {
            file_name
        } else {
            format!("{prefix}/{file_name}")
        };
        if entry.file_type()?.is_dir() {
            collect_names(&entry.path(), &relative, names)?;
        } else {
            names.push(relative);
        }
    }
    Ok(())
}

/// Serves in-memory resources; used for embedded assets and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<(String, String)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one named resource, chainable.
    pub fn with(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.entries.push((name.into(), contents.into()));
        self
    }
}

impl ResourceSource for StaticSource {
    fn names(&self) -> Result<Vec<String>, Error> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read>, Error> {
        match self.entries.iter().find(|(n, _)| n == name) {
            Some((_, contents)) => Ok(Box::new(Cursor::new(contents.clone().into_bytes()))),
            None => Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such resource: {name}"),
            ))),
        }
    }
}
