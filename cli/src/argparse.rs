use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rio",
    about = "Reserved instance offerings: validate requests and look up the catalog",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Catalog configuration file (.yaml, .yml or .json); defaults to the built-in regions
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe the reserved instance offerings of a region
    Describe(DescribeArgs),
    /// List configured regions and their reservable availability zones
    Regions,
    /// List the valid values of a request parameter
    Values(ValuesArgs),
}

#[derive(Args, Debug, Default)]
pub struct DescribeArgs {
    /// Region to query, e.g. us-east-2
    #[arg(long)]
    pub region: String,

    /// Read the request from a JSON file; flags override its fields
    #[arg(long)]
    pub request_file: Option<String>,

    /// Instance type, e.g. m5.large
    #[arg(long)]
    pub instance_type: Option<String>,

    /// Product description, e.g. "Linux/UNIX"
    #[arg(long)]
    pub product_description: Option<String>,

    /// default or dedicated
    #[arg(long)]
    pub instance_tenancy: Option<String>,

    /// standard or convertible
    #[arg(long)]
    pub offering_class: Option<String>,

    /// "All Upfront", "Partial Upfront" or "No Upfront"
    #[arg(long)]
    pub offering_type: Option<String>,

    /// Accepted for compatibility, does not filter results
    #[arg(long, allow_negative_numbers = true)]
    pub min_duration: Option<i64>,

    /// Reservation term in seconds: 31536000 or 94608000
    #[arg(long, allow_negative_numbers = true)]
    pub max_duration: Option<i64>,

    #[arg(long)]
    pub availability_zone: Option<String>,

    /// Restrict results to these offering ids (repeatable)
    #[arg(long = "offering-id")]
    pub offering_ids: Vec<String>,

    /// Include marketplace offerings: true or false (the catalog lists none)
    #[arg(long)]
    pub include_marketplace: Option<bool>,

    /// Page size, 1 to 100
    #[arg(long, allow_negative_numbers = true)]
    pub max_results: Option<i64>,

    /// Token returned by the previous page
    #[arg(long)]
    pub next_token: Option<String>,
}

#[derive(Args, Debug)]
pub struct ValuesArgs {
    /// Request parameter name, e.g. OfferingType
    pub parameter: String,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
