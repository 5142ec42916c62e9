use std::collections::BTreeMap;

use langpack::Catalog;
use serde_json::json;

/// Prints the active locale's key/value table, sorted by key.
pub fn run(catalog: &Catalog, json_output: bool) {
    let entries: BTreeMap<&str, &str> = catalog.table().iter().collect();

    if json_output {
        let body = json!({
            "locale": catalog.active_locale(),
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap());
        return;
    }

    println!("Locale: {}", catalog.active_locale());
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}
