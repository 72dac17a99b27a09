//! [`Args`] definitions.

use clap::{Parser, Subcommand};

/// Property search screen driven from the command line.
#[derive(Debug, Parser)]
#[command(name = "search-screen", version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run, [`Command::Resolve`] if omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command of the search screen.
#[derive(Clone, Debug, Default, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Centers the screen on the device's city and prints its state.
    #[default]
    Resolve,

    /// Searches cities, one request per text, and prints the options the
    /// latest text yields.
    Cities {
        /// Texts typed into the city autocomplete, in order.
        text: Vec<String>,
    },

    /// Prints the known property types.
    Types,
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use super::{Args, Command};

    #[test]
    fn resolves_by_default() {
        let args = Args::try_parse_from(["search-screen"]).unwrap();

        assert_eq!(args.config, "config.toml");
        assert_eq!(args.command.unwrap_or_default(), Command::Resolve);
    }

    #[test]
    fn parses_city_search() {
        let args = Args::try_parse_from([
            "search-screen",
            "-c",
            "local.toml",
            "cities",
            "Flo",
            "Floria",
        ])
        .unwrap();

        assert_eq!(args.config, "local.toml");
        assert_eq!(
            args.command,
            Some(Command::Cities {
                text: vec!["Flo".into(), "Floria".into()],
            }),
        );
    }
}
