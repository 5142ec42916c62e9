//! Optional process-wide shared catalog.
//!
//! Applications that want the one-catalog-per-process usage install a
//! catalog once and call the free functions from anywhere. `OnceLock`
//! guards construction, so exactly one concurrent first install wins; all
//! later access is serialized through a single mutex.

use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::{catalog::Catalog, error::Error, types::Language};

static SHARED: OnceLock<Mutex<Catalog>> = OnceLock::new();

/// Installs `catalog` as the process-wide instance.
///
/// The first install wins; returns `false` when one is already installed,
/// in which case the existing instance is kept and `catalog` is dropped.
pub fn install(catalog: Catalog) -> bool {
    SHARED.set(Mutex::new(catalog)).is_ok()
}

/// Whether a shared catalog has been installed.
pub fn is_installed() -> bool {
    SHARED.get().is_some()
}

fn lock() -> Result<MutexGuard<'static, Catalog>, Error> {
    let shared = SHARED.get().ok_or(Error::Uninitialized)?;
    // A poisoned lock still holds a valid catalog.
    Ok(shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
}

/// [`Catalog::translate`] on the shared instance.
pub fn translate(key: &str) -> Result<String, Error> {
    lock()?.translate(key)
}

/// [`Catalog::translate_with`] on the shared instance.
pub fn translate_with(key: &str, args: &[&dyn Display]) -> Result<String, Error> {
    lock()?.translate_with(key, args)
}

/// [`Catalog::load_locale`] on the shared instance.
pub fn load_locale(code: &str) -> Result<(), Error> {
    lock()?.load_locale(code)
}

/// [`Catalog::languages`] on the shared instance.
pub fn languages() -> Result<Vec<Language>, Error> {
    lock()?.languages()
}

/// The shared instance's active locale identifier.
pub fn active_locale() -> Result<String, Error> {
    Ok(lock()?.active_locale().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, detect::FixedLocaleInfo, source::StaticSource};

    // The shared slot is process-global, so the whole surface is covered by
    // one test; separate #[test] fns would race on installation order.
    #[test]
    fn test_shared_catalog_lifecycle() {
        assert!(!is_installed());
        assert!(matches!(translate("greeting"), Err(Error::Uninitialized)));
        assert!(matches!(load_locale("en"), Err(Error::Uninitialized)));

        let source = StaticSource::new()
            .with("App.Locales.en.txt", "greeting = Hello\nwelcome = Hi, {0}!")
            .with("App.Locales.es.txt", "greeting = Hola");
        let catalog = Catalog::builder()
            .config(Config::new().with_default_locale(Some("en".to_string())))
            .locale_info(FixedLocaleInfo::default())
            .initialize(source)
            .unwrap();

        assert!(install(catalog));
        assert!(is_installed());
        assert_eq!(active_locale().unwrap(), "en");
        assert_eq!(translate("greeting").unwrap(), "Hello");
        assert_eq!(translate_with("welcome", &[&"Ana"]).unwrap(), "Hi, Ana!");
        assert_eq!(languages().unwrap().len(), 2);

        load_locale("es").unwrap();
        assert_eq!(translate("greeting").unwrap(), "Hola");
        assert_eq!(active_locale().unwrap(), "es");

        // A second install is rejected and the active switch survives.
        let second = Catalog::builder()
            .config(Config::new().with_default_locale(Some("en".to_string())))
            .locale_info(FixedLocaleInfo::default())
            .initialize(StaticSource::new().with("App.Locales.en.txt", "greeting = Nope"))
            .unwrap();
        assert!(!install(second));
        assert_eq!(translate("greeting").unwrap(), "Hola");
    }
}
