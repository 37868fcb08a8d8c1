use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Compose SQL statements from form-style fragments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a statement from command-line fragments
    Generate(GenerateArgs),

    /// Generate a statement from a JSON request document
    Request {
        /// Path to a file holding {"kind": ..., "request": {...}}
        path: std::path::PathBuf,
    },

    /// List statement kinds, filter operators and join types
    Catalog {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Statement kind: SELECT, INSERT, UPDATE or DELETE (exact case)
    pub kind: String,

    /// Target table
    #[arg(short, long)]
    pub table: String,

    /// Comma-separated column names
    #[arg(short, long, default_value = "")]
    pub columns: String,

    /// Comma-separated values (INSERT and UPDATE)
    #[arg(long, default_value = "")]
    pub values: String,

    /// Column to filter on
    #[arg(long)]
    pub filter_column: Option<String>,

    /// Filter operator, e.g. "=", "LIKE", "IS NULL"
    #[arg(long)]
    pub operator: Option<String>,

    /// Filter value; not needed for IS NULL / IS NOT NULL
    #[arg(long)]
    pub filter_value: Option<String>,

    /// ORDER BY expression (SELECT only)
    #[arg(long)]
    pub order_by: Option<String>,

    /// LIMIT (SELECT only)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Join type: INNER, LEFT, RIGHT or FULL (SELECT only)
    #[arg(long)]
    pub join_type: Option<String>,

    /// Table to join
    #[arg(long)]
    pub join_table: Option<String>,

    /// Column of the joined table
    #[arg(long)]
    pub join_column: Option<String>,

    /// Column of the main table the join matches against
    #[arg(long)]
    pub join_main_column: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(&args),
        Commands::Request { path } => commands::request::execute(&path),
        Commands::Catalog { json } => commands::catalog::execute(json),
    }
}
