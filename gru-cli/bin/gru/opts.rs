//! Command line argument parsing for the gru utility

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gru_cli::{CliConfig, Command, JSON_ENV};

/// BMC result rendering and BIOS attribute decoding
#[derive(Parser, Debug)]
#[command(
    name = "gru",
    version,
    about = "Render BMC query results and decode BIOS attributes",
    long_about = "gru prints per-host BMC query results as aligned text or JSON and \
                 translates vendor BIOS attribute keys into readable names."
)]
pub struct GruOpts {
    /// Emit JSON instead of text
    #[arg(long = "json", global = true, env = JSON_ENV)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory of extra attribute descriptor documents (*.json)
    #[arg(long = "attributes-dir", value_name = "DIR", global = true)]
    pub attributes_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: GruCommand,
}

/// Subcommands of `gru`
#[derive(Subcommand, Debug)]
pub enum GruCommand {
    /// Print the target hosts, from arguments or piped standard input
    Hosts {
        /// Hosts to target
        #[arg(value_name = "HOST")]
        hosts: Vec<String>,
    },

    /// Decode BIOS attribute keys into readable names
    Decode {
        /// Attribute keys
        #[arg(value_name = "KEY", required = true)]
        keys: Vec<String>,
    },

    /// Describe BIOS attributes known to the dictionary
    Attributes {
        /// Attribute names; all attributes when omitted
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },

    /// Render a result set produced by a query
    Render {
        /// JSON result set; standard input when omitted or "-"
        #[arg(value_name = "FILE")]
        input: Option<String>,
    },
}

impl GruOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Options shared by every command
    pub fn config(&self) -> CliConfig {
        CliConfig {
            json: self.json,
            verbosity: self.verbose,
            attributes_dir: self.attributes_dir.clone(),
        }
    }

    /// The requested command
    pub fn command(&self) -> Command {
        match &self.command {
            GruCommand::Hosts { hosts } => Command::Hosts {
                hosts: hosts.clone(),
            },
            GruCommand::Decode { keys } => Command::Decode { keys: keys.clone() },
            GruCommand::Attributes { keys } => Command::Attributes { keys: keys.clone() },
            GruCommand::Render { input } => Command::Render {
                input: input.clone(),
            },
        }
    }
}
