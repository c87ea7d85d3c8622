use std::path::PathBuf;

use clap::{Args, ValueEnum};
use school2osm_core::FailurePolicy;

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// TOML configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Directory for cached registry responses.
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
    #[arg(long, global = true, default_value_t = false)]
    pub no_cache: bool,
    /// Registry base URL, e.g. `https://data-nsr.udir.no/v3`.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
    /// How records with a failed tag rule are handled.
    #[arg(long, global = true, value_enum)]
    pub policy: Option<PolicyArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Reject,
    BestEffort,
}

impl From<PolicyArg> for FailurePolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Reject => Self::Reject,
            PolicyArg::BestEffort => Self::BestEffort,
        }
    }
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Output OSM file.
    #[arg(default_value = "skoler.osm")]
    pub output: PathBuf,
    /// Read a JSON array of school records instead of calling the registry.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(allow_hyphen_values = true)]
    pub name: String,
    /// Department text appended to the name (`Karakteristikk`).
    #[arg(long)]
    pub characteristic: Option<String>,
}
