use langpack::{Catalog, Error};
use serde_json::json;

/// Prints every registered locale, marking the active one.
///
/// Display names come from the active translation table, so switching the
/// locale first (via `--locale`) changes what this prints.
pub fn run(catalog: &Catalog, json_output: bool) -> Result<(), Error> {
    let languages = catalog.languages()?;

    if json_output {
        let body = json!({
            "active_locale": catalog.active_locale(),
            "languages": languages,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap());
        return Ok(());
    }

    for language in &languages {
        let marker = if language.code == catalog.active_locale() {
            "*"
        } else {
            " "
        };
        println!("{} {}", marker, language);
    }
    Ok(())
}
