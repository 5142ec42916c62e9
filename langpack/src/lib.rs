#![forbid(unsafe_code)]
//! Runtime translation catalogs for Rust.
//!
//! Discovers `key = value` locale resources by naming convention, loads one
//! active locale's table into memory, and serves translated strings with
//! positional `{0}` formatting. One locale is active at a time; switching
//! replaces the table wholesale.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langpack::{Catalog, Config, DirectorySource};
//!
//! // Discover `**/Locales/*.txt` under assets/, pick a default locale from
//! // the environment, and load it.
//! let mut catalog = Catalog::initialize(Config::new(), DirectorySource::new("assets"))?;
//!
//! println!("{}", catalog.translate("greeting")?);
//! println!("{}", catalog.translate_with("welcome", &[&"Ana"])?);
//!
//! // Switch locales at runtime.
//! catalog.load_locale("es")?;
//! for language in catalog.languages()? {
//!     println!("{language}");
//! }
//! # Ok::<(), langpack::Error>(())
//! ```
//!
//! # Resource convention
//!
//! A resource belongs to the catalog when its name contains a `Locales`
//! segment and ends with `.txt`; the locale identifier is the token before
//! the extension (`App.Locales.en-US.txt` → `en-US`,
//! `assets/Locales/fr.txt` → `fr`). Files are line-oriented `key = value`
//! text with `#` comments; see [`format`].
//!
//! # Choosing the default locale
//!
//! An explicit [`Config::default_locale`] wins. Otherwise the environment's
//! candidates (full tag, two-letter code, ISO 639-2 T and B codes, most
//! specific first) are matched against the registered identifiers, falling
//! back to the first registered locale; see [`detect`].

pub mod catalog;
pub mod config;
pub mod detect;
pub mod error;
pub mod format;
pub mod global;
pub mod source;
pub mod template;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::{Catalog, CatalogBuilder},
    config::Config,
    detect::{FixedLocaleInfo, LocaleInfo, SystemLocaleInfo, candidates_from_tag},
    error::Error,
    format::{LocaleFile, Pair},
    source::{DirectorySource, ResourceSource, StaticSource},
    types::{Language, LocaleEntry, TranslationTable},
};
