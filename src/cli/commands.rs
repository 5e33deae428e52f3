//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Static portfolio generator for writeups, tags and projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Site root (default: discovered from FOLIO_ROOT or the current directory)
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Site name shown in page titles and navigation
        #[arg(short, long)]
        name: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create a tag, optionally attaching it to existing writeups
    Tag {
        /// Tag name (e.g., linux, active-directory)
        name: String,

        /// Description shown on the tag page
        #[arg(short, long)]
        description: Option<String>,

        /// Titles of writeups to tag
        #[arg(short, long, num_args = 1.., value_name = "TITLE")]
        writeups: Vec<String>,
    },

    /// Create a writeup
    Writeup {
        /// Writeup title
        title: String,

        /// Tags for the writeup; unknown tags are created
        #[arg(short, long, num_args = 1.., required = true)]
        tags: Vec<String>,

        /// Photo URL
        #[arg(long)]
        photo: Option<String>,

        /// Creation date (default: today)
        #[arg(long)]
        created_date: Option<String>,

        /// Last updated date (default: creation date)
        #[arg(long)]
        updated_date: Option<String>,

        /// Difficulty label
        #[arg(long)]
        difficulty: Option<String>,

        /// Operating system label
        #[arg(long)]
        os: Option<String>,

        /// Address of the target
        #[arg(long)]
        ip: Option<String>,
    },

    /// Remove a writeup and clean up unused tags
    Remove {
        /// Title of the writeup to remove
        title: String,
    },

    /// Remove a tag from writeups, deleting it once unused
    RemoveTag {
        /// Tag name
        name: String,

        /// Only detach from these writeups (default: all)
        #[arg(short, long, num_args = 1.., value_name = "TITLE")]
        from_writeups: Vec<String>,
    },

    /// Add a project to the projects page
    Project {
        /// Project title
        title: String,

        /// Short description
        description: String,

        /// Project URL
        url: String,

        /// Display date (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List tags, writeups and projects
    List,

    /// Regenerate every listing page
    Update,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_writeup_with_tags() {
        let cli = Cli::try_parse_from([
            "folio", "-C", "site", "writeup", "Machine One", "--tags", "linux", "smb", "--os",
            "Linux",
        ])
        .unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("site")));
        match cli.command {
            Commands::Writeup { title, tags, os, .. } => {
                assert_eq!(title, "Machine One");
                assert_eq!(tags, vec!["linux", "smb"]);
                assert_eq!(os.as_deref(), Some("Linux"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn writeup_requires_tags() {
        assert!(Cli::try_parse_from(["folio", "writeup", "Machine One"]).is_err());
    }

    #[test]
    fn remove_tag_defaults_to_all_writeups() {
        let cli = Cli::try_parse_from(["folio", "remove-tag", "smb", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::RemoveTag { name, from_writeups } => {
                assert_eq!(name, "smb");
                assert!(from_writeups.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
