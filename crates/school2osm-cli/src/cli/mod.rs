use clap::{Parser, Subcommand};

mod args;


pub use args::{ConvertArgs, GlobalArgs, NameArgs, PolicyArg};

#[derive(Debug, Parser)]
#[command(name = "school2osm")]
#[command(about = "Convert the Norwegian school register (NSR) to OSM XML", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch (or read) school records and write them as OSM nodes.
    Convert(ConvertArgs),
    /// Show how a school name is normalized.
    Name(NameArgs),
}
