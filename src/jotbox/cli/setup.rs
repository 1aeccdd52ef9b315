use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotbox", bin_name = "jotbox", version)]
#[command(about = "Keep notes and todo lists as JSON documents in a directory", long_about = None)]
pub struct Cli {
    /// Directory holding the documents (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Keep reading commands from stdin after the pre-seeded ones
    #[arg(short, long)]
    pub interactive: bool,

    /// Command line to run at start-up (repeatable)
    #[arg(short, long = "command", value_name = "CMD")]
    pub commands: Vec<String>,

    /// Command line to run after a clean exit (repeatable)
    #[arg(short = 'e', long = "on-exit", value_name = "CMD")]
    pub on_exit: Vec<String>,

    /// Answer every confirmation with yes
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Prompt shown before each interactive read
    #[arg(long, value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeatable_commands() {
        let cli = Cli::try_parse_from([
            "jotbox", "-w", "/tmp/notes", "-c", "ls", "-c", "todo buy milk", "-e", "write", "-y",
        ])
        .unwrap();
        assert_eq!(cli.workdir, Some(PathBuf::from("/tmp/notes")));
        assert_eq!(cli.commands, vec!["ls", "todo buy milk"]);
        assert_eq!(cli.on_exit, vec!["write"]);
        assert!(cli.assume_yes);
        assert!(!cli.interactive);
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["jotbox"]).unwrap();
        assert!(cli.workdir.is_none());
        assert!(cli.commands.is_empty());
        assert!(cli.prompt.is_none());
        assert!(!cli.no_color);
    }
}
