mod list;
mod pick;
mod show;
mod translate;

use clap::{Parser, Subcommand};
use langpack::{Catalog, Config, DirectorySource, Error};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log catalog activity to stderr (RUST_LOG overrides the level)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List discovered locales with their display names.
    List {
        /// Directory scanned for `Locales/*.txt` resources
        root: String,

        /// Locale to load instead of the derived default
        #[arg(short, long)]
        locale: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the active locale's translation table.
    Show {
        /// Directory scanned for `Locales/*.txt` resources
        root: String,

        /// Locale to load instead of the derived default
        #[arg(short, long)]
        locale: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Translate one key, rendering positional arguments when given.
    Translate {
        /// Directory scanned for `Locales/*.txt` resources
        root: String,

        /// Translation key to look up
        key: String,

        /// Values for `{0}`, `{1}`, … placeholders
        args: Vec<String>,

        /// Locale to load instead of the derived default
        #[arg(short, long)]
        locale: Option<String>,

        /// Fail on missing keys instead of wrapping them
        #[arg(long)]
        strict: bool,

        /// Marker wrapped around unresolved keys
        #[arg(long, default_value = "?")]
        symbol: String,
    },

    /// Interactively switch between locales.
    Pick {
        /// Directory scanned for `Locales/*.txt` resources
        root: String,

        /// Locale to load instead of the derived default
        #[arg(short, long)]
        locale: Option<String>,
    },
}

fn main() {
    let Args { verbose, commands } = Args::parse();
    init_tracing(verbose);

    if let Err(e) = run(commands, verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(commands: Commands, verbose: bool) -> Result<(), Error> {
    match commands {
        Commands::List { root, locale, json } => {
            let catalog = open_catalog(&root, locale.as_deref(), false, "?", verbose)?;
            list::run(&catalog, json)
        }
        Commands::Show { root, locale, json } => {
            let catalog = open_catalog(&root, locale.as_deref(), false, "?", verbose)?;
            show::run(&catalog, json);
            Ok(())
        }
        Commands::Translate {
            root,
            key,
            args,
            locale,
            strict,
            symbol,
        } => {
            let catalog = open_catalog(&root, locale.as_deref(), strict, &symbol, verbose)?;
            translate::run(&catalog, &key, &args)
        }
        Commands::Pick { root, locale } => {
            let mut catalog = open_catalog(&root, locale.as_deref(), false, "?", verbose)?;
            pick::run(&mut catalog)
        }
    }
}

fn open_catalog(
    root: &str,
    locale: Option<&str>,
    strict: bool,
    symbol: &str,
    verbose: bool,
) -> Result<Catalog, Error> {
    let config = Config::new()
        .with_default_locale(locale.map(str::to_string))
        .with_strict(strict)
        .with_not_found_symbol(symbol)
        .with_logging_enabled(verbose);
    Catalog::initialize(config, DirectorySource::new(root))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
