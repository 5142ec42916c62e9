use std::io::{BufRead, Write};

use langpack::{Catalog, Error};

/// Interactive locale switcher.
///
/// Lists the registered locales with their display names, reads a choice
/// from stdin, and loads the selected locale. `q`, an empty line, or EOF
/// leaves the catalog unchanged.
pub fn run(catalog: &mut Catalog) -> Result<(), Error> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    loop {
        let languages = catalog.languages()?;
        for (position, language) in languages.iter().enumerate() {
            println!("{}. {}", position + 1, language);
        }
        print!("Switch to [1-{}], or q to quit: ", languages.len());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            println!("Cancelled.");
            return Ok(());
        }
        let choice = line.trim();
        if choice.is_empty() || choice.eq_ignore_ascii_case("q") {
            println!("Cancelled.");
            return Ok(());
        }

        let selected = choice
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| languages.get(index));
        match selected {
            Some(language) => {
                catalog.load_locale(&language.code)?;
                println!("Switched to {}.", language.code);
            }
            None => println!("Unrecognized choice: {}", choice),
        }
    }
}
