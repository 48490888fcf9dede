use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "prep-broadcast stats backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Drop and recreate the stats schema
    InitDb,
    /// Insert stats rows from a JSON array file
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_default_port() {
        let cli = Cli::try_parse_from(["prep_broadcast", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }

    #[test]
    fn test_parse_init_db_and_import() {
        let init = Cli::try_parse_from(["prep_broadcast", "init-db"]).unwrap();
        let import = Cli::try_parse_from(["prep_broadcast", "import", "stats.json"]).unwrap();

        assert_eq!(init.command, Command::InitDb);
        assert_eq!(
            import.command,
            Command::Import {
                file: PathBuf::from("stats.json")
            }
        );
    }
}
