use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version)]
#[command(about = "A small in-memory to-do list for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory holding config.json (defaults to $TODOZ_CONFIG_DIR, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive session (the default)
    #[command(alias = "s")]
    Session,

    /// Replay a script of session lines and print the resulting list
    Run {
        /// Script file, or - for stdin
        #[arg(default_value = "-")]
        script: PathBuf,

        /// Print the final todos as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (prompt, color, line-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["todoz"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn run_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["todoz", "run"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Run {
                script: PathBuf::from("-"),
                json: false
            })
        );
    }

    #[test]
    fn run_with_file_and_json() {
        let cli = Cli::try_parse_from(["todoz", "run", "tasks.txt", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Run {
                script: PathBuf::from("tasks.txt"),
                json: true
            })
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["todoz", "config", "color", "--no-color", "--config-dir", "/x"])
                .unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/x")));
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                key: Some("color".into()),
                value: None
            })
        );
    }

    #[test]
    fn session_alias() {
        let cli = Cli::try_parse_from(["todoz", "s", "-v"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Session));
        assert!(cli.verbose);
    }
}
