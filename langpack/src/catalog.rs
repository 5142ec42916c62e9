//! The translation catalog: locale discovery, default selection, loading,
//! and translation.

use std::fmt::Display;

use crate::{
    config::Config,
    detect::{LocaleInfo, SystemLocaleInfo},
    error::Error,
    format::LocaleFile,
    source::ResourceSource,
    template::render,
    types::{Language, LocaleEntry, TranslationTable},
};

/// Builder for a [`Catalog`].
///
/// # Example
///
/// ```rust,no_run
/// use langpack::{Catalog, Config, DirectorySource, FixedLocaleInfo};
///
/// let catalog = Catalog::builder()
///     .config(Config::new().with_not_found_symbol("?"))
///     .locale_info(FixedLocaleInfo::new(["fr-FR", "fr", "fra", "fre"]))
///     .initialize(DirectorySource::new("assets"))?;
/// # Ok::<(), langpack::Error>(())
/// ```
pub struct CatalogBuilder {
    config: Config,
    locale_info: Box<dyn LocaleInfo>,
}

impl CatalogBuilder {
    /// Creates a builder with the default configuration and the system
    /// locale provider.
    pub fn new() -> Self {
        CatalogBuilder {
            config: Config::default(),
            locale_info: Box::new(SystemLocaleInfo),
        }
    }

    /// Sets the catalog configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replaces the environment locale provider.
    pub fn locale_info(mut self, locale_info: impl LocaleInfo + 'static) -> Self {
        self.locale_info = Box::new(locale_info);
        self
    }

    /// Discovers locales in `source`, selects the default locale, and loads
    /// it.
    ///
    /// Fails with [`Error::NoLocalesFound`] when no resource name follows
    /// the locale naming convention, and with whatever the initial
    /// [`Catalog::load_locale`] reports when the default locale cannot be
    /// loaded.
    pub fn initialize(self, source: impl ResourceSource + 'static) -> Result<Catalog, Error> {
        let CatalogBuilder {
            config,
            locale_info,
        } = self;
        let source: Box<dyn ResourceSource> = Box::new(source);

        let registry = discover(&source.names()?);
        let first = match registry.first() {
            Some(entry) => entry.code.clone(),
            None => return Err(Error::NoLocalesFound),
        };

        let default = match &config.default_locale {
            Some(explicit) => {
                if config.logging_enabled {
                    tracing::info!(locale = %explicit, "using configured default locale");
                }
                explicit.clone()
            }
            None => derive_default(&registry, locale_info.as_ref()).unwrap_or(first),
        };

        let mut catalog = Catalog {
            config,
            source,
            registry,
            active: String::new(),
            table: TranslationTable::default(),
        };
        catalog.load_locale(&default)?;
        Ok(catalog)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Discovers, loads, and serves one active locale's translations.
///
/// A catalog is a plain owned value, intended to live at the application's
/// composition root; [`crate::global`] offers an optional process-wide
/// instance on top of it.
pub struct Catalog {
    config: Config,
    source: Box<dyn ResourceSource>,
    registry: Vec<LocaleEntry>,
    active: String,
    table: TranslationTable,
}

impl Catalog {
    /// Starts building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Initializes a catalog with `config`, the system locale provider, and
    /// `source`.
    ///
    /// Shorthand for `Catalog::builder().config(config).initialize(source)`.
    pub fn initialize(
        config: Config,
        source: impl ResourceSource + 'static,
    ) -> Result<Self, Error> {
        CatalogBuilder::new().config(config).initialize(source)
    }

    /// The identifier of the currently loaded locale.
    pub fn active_locale(&self) -> &str {
        &self.active
    }

    /// The active translation table.
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// The registered locales, in registration order.
    pub fn locales(&self) -> &[LocaleEntry] {
        &self.registry
    }

    /// The configuration this catalog was initialized with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads `code`'s resource and makes it the active locale.
    ///
    /// Fails with [`Error::LocaleNotFound`] when `code` is not registered.
    /// On any failure the previously active table stays in place: the fresh
    /// table replaces it only after the whole file has parsed.
    pub fn load_locale(&mut self, code: &str) -> Result<(), Error> {
        let resource = match self.registry.iter().find(|entry| entry.code == code) {
            Some(entry) => entry.resource.clone(),
            None => return Err(Error::LocaleNotFound(code.to_string())),
        };

        let reader = self.source.open(&resource)?;
        let file = LocaleFile::from_reader(reader)?;
        let table = TranslationTable::from_pairs(file.pairs)?;

        if self.config.logging_enabled {
            for (key, value) in table.iter() {
                tracing::debug!(locale = %code, %key, %value, "loaded translation");
            }
        }

        self.table = table;
        self.active = code.to_string();
        Ok(())
    }

    /// Translates `key` against the active table.
    ///
    /// The stored template comes back verbatim; placeholders are only
    /// rendered when arguments are supplied via [`Catalog::translate_with`].
    /// A missing key is [`Error::KeyNotFound`] in strict mode, otherwise the
    /// key wrapped in the configured not-found symbol.
    pub fn translate(&self, key: &str) -> Result<String, Error> {
        self.translate_with(key, &[])
    }

    /// Translates `key`, rendering `{0}`, `{1}`, … placeholders with `args`.
    ///
    /// An empty `args` returns the stored template verbatim. Rendering fails
    /// with [`Error::Format`] on a malformed template or a placeholder index
    /// with no matching argument. The missing-key fallback string is never
    /// rendered.
    pub fn translate_with(&self, key: &str, args: &[&dyn Display]) -> Result<String, Error> {
        match self.table.get(key) {
            Some(template) => {
                if args.is_empty() {
                    Ok(template.to_string())
                } else {
                    render(template, args)
                }
            }
            None if self.config.strict => Err(Error::KeyNotFound {
                key: key.to_string(),
                locale: self.active.clone(),
            }),
            None => {
                if self.config.logging_enabled {
                    tracing::warn!(locale = %self.active, %key, "missing translation key");
                }
                let symbol = &self.config.not_found_symbol;
                Ok(format!("{symbol}{key}{symbol}"))
            }
        }
    }

    /// Lists the registered locales with display names resolved against the
    /// *currently* active table.
    ///
    /// Recomputed on every call: switching the active locale changes the
    /// display names while registry membership stays the same. In strict
    /// mode an identifier with no entry in the active table surfaces
    /// [`Error::KeyNotFound`].
    pub fn languages(&self) -> Result<Vec<Language>, Error> {
        self.registry
            .iter()
            .map(|entry| {
                Ok(Language {
                    code: entry.code.clone(),
                    name: self.translate(&entry.code)?,
                })
            })
            .collect()
    }
}

/// Builds the locale registry from enumerated resource names.
///
/// Registration keeps enumeration order. A duplicate identifier overwrites
/// the earlier entry's resource, last wins, keeping the first occurrence's
/// position.
fn discover(names: &[String]) -> Vec<LocaleEntry> {
    let mut registry: Vec<LocaleEntry> = Vec::new();
    for name in names {
        let code = match locale_identifier(name) {
            Some(code) => code,
            None => continue,
        };
        match registry.iter_mut().find(|entry| entry.code == code) {
            Some(entry) => entry.resource = name.clone(),
            None => registry.push(LocaleEntry {
                code,
                resource: name.clone(),
            }),
        }
    }
    registry
}

/// Extracts the locale identifier from a resource name, or `None` when the
/// name does not follow the convention.
///
/// The name must contain a segment equal to `Locales` (segments split on
/// `/`, `\`, or `.`) and end with `.txt`. The identifier is the
/// second-to-last dot token of the final path component:
/// `App.Locales.en-US.txt` → `en-US`, `assets/Locales/fr.txt` → `fr`.
fn locale_identifier(name: &str) -> Option<String> {
    if !name.ends_with(".txt") {
        return None;
    }
    if !name.split(['/', '\\', '.']).any(|segment| segment == "Locales") {
        return None;
    }

    let file_name = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let tokens: Vec<&str> = file_name.split('.').collect();
    if tokens.len() < 2 {
        return None;
    }
    let code = tokens[tokens.len() - 2];
    if code.is_empty() {
        return None;
    }
    Some(code.to_string())
}

/// First environment candidate that names a registered locale, preferring
/// the most specific candidate.
fn derive_default(registry: &[LocaleEntry], locale_info: &dyn LocaleInfo) -> Option<String> {
    locale_info
        .candidates()
        .into_iter()
        .find(|candidate| registry.iter().any(|entry| &entry.code == candidate))
}
