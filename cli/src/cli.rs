use std::path::PathBuf;

use clap::ValueEnum;
use nrn_schema::OutputFormat;

/// National Road Network conversion/packaging CLI (argument schema only;
/// `commands/` holds the behavior).
#[derive(clap::Parser, Debug)]
#[command(name = "nrn", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv); repeatable.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease output verbosity (-q, -qq); repeatable, cancels -v.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run S1-S6: ingest, conform, split/recover, domain/clean, topology, NID reconciliation.
    Convert(ConvertArgs),

    /// Run S7: project the canonical store into one delivery format/version.
    Package(PackageArgs),

    /// Run S8: advisory validation over an already-converted store.
    Validate(ValidateArgs),

    /// List the canonical tables and fields the tool knows about.
    Ls(LsArgs),
}

/// A thin wrapper around `clap::ValueEnum` so `--format` can name the four
/// NRN distribution formats without `nrn-schema` depending on `clap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Gpkg,
    Shp,
    Gml,
    Kml,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Gpkg => OutputFormat::Gpkg,
            FormatArg::Shp => OutputFormat::Shp,
            FormatArg::Gml => OutputFormat::Gml,
            FormatArg::Kml => OutputFormat::Kml,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Two-letter ISO province/territory code (case-insensitive).
    pub province: String,

    /// Path or HTTP(S) URL to the previous vintage's canonical GeoPackage.
    #[arg(long)]
    pub previous: Option<String>,

    /// Per-source YAML config, repeatable.
    #[arg(long = "config", value_hint = clap::ValueHint::FilePath)]
    pub configs: Vec<PathBuf>,

    /// Administrative boundary polygon (Shapefile or GeoPackage).
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub boundary: PathBuf,

    /// Directory to write the canonical working GeoPackage into.
    #[arg(long, short, value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct PackageArgs {
    /// Two-letter ISO province/territory code (case-insensitive).
    pub province: String,

    /// Canonical working GeoPackage produced by `convert`.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub source: PathBuf,

    #[arg(long)]
    pub major_version: u32,

    #[arg(long)]
    pub minor_version: u32,

    #[arg(long, value_enum)]
    pub format: FormatArg,

    #[arg(long = "out-path", value_hint = clap::ValueHint::DirPath)]
    pub out_path: PathBuf,

    #[arg(long, overrides_with = "no_compress")]
    pub compress: bool,

    #[arg(long)]
    pub no_compress: bool,
}

impl PackageArgs {
    pub fn compress(&self) -> bool {
        self.compress || !self.no_compress
    }
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Two-letter ISO province/territory code (case-insensitive).
    pub province: String,

    /// Canonical working GeoPackage to validate.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub source: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct LsArgs {
    /// Two-letter ISO province/territory code (case-insensitive); unused
    /// beyond echoing back in the listing header.
    pub province: String,
}

/// The 13 Canadian province/territory codes the tool recognizes (§6).
pub const PROVINCE_CODES: &[&str] = &[
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
];

pub fn validate_province(code: &str) -> anyhow::Result<String> {
    let upper = code.to_ascii_uppercase();
    if PROVINCE_CODES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        anyhow::bail!("unknown province/territory code `{code}` (expected one of {PROVINCE_CODES:?})")
    }
}
