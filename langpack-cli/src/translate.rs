use std::fmt::Display;

use langpack::{Catalog, Error};

/// Looks up `key` and prints the result.
///
/// With positional arguments the template is rendered; without them it is
/// printed verbatim, braces and all.
pub fn run(catalog: &Catalog, key: &str, args: &[String]) -> Result<(), Error> {
    let args: Vec<&dyn Display> = args.iter().map(|arg| arg as &dyn Display).collect();
    println!("{}", catalog.translate_with(key, &args)?);
    Ok(())
}
