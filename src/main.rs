use clap::{Parser, Subcommand};
use sheetroute::cli;
use sheetroute::error::RouteResult;
use sheetroute::route::SHOP_ADDRESS;
use sheetroute::types::Selection;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetroute")]
#[command(about = "Cycling delivery routes and instructions from spreadsheet rows")]
#[command(long_about = "Sheetroute - delivery runs straight from the sheet

Reads delivery/collection entries from a CSV or XLSX file, filters them to a
selected row range, and turns them into a cycling route or HTML instructions.

COMMANDS:
  map          - Print a Google Maps cycling route URL through the stops
  instructions - Render the HTML instructions page
  send         - Queue an instructions email in the outbox
  list         - Show the extracted entries

ROW SELECTION:
  --rows takes 1-based data-row numbers, counted from the first row under
  the header: '--rows 3' for one row, '--rows 2:5' for a range. Without
  --rows, every data row is selected. Rows missing an address or post code
  are skipped (use --verbose to see which).

EXAMPLES:
  sheetroute map deliveries.csv --rows 2:5
  sheetroute instructions deliveries.xlsx -m \"Ring the bell\" -o run.html
  sheetroute send deliveries.csv --to driver@example.org --subject Tuesday")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Print a Google Maps cycling route URL through the stops.

The route starts and ends at the Share and Repair shop unless --origin or
--destination override it. Waypoints are the selected rows' 'address, post
code' pairs, deduplicated, in row order. Travel mode is always bicycling.")]
    /// Print a cycling route URL through the selected stops
    Map {
        /// Path to spreadsheet file (.csv or .xlsx)
        file: PathBuf,

        /// Data rows to include, 1-based ('3' or '2:5'; default: all)
        #[arg(short, long)]
        rows: Option<Selection>,

        /// Route start point
        #[arg(long, default_value = SHOP_ADDRESS)]
        origin: String,

        /// Route end point
        #[arg(long, default_value = SHOP_ADDRESS)]
        destination: String,

        /// Show skipped rows and header warnings
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Render the HTML instructions page for the selected entries.

Writes a standalone HTML document listing each stop with its details.
Without --output the document goes to stdout, suitable for piping.")]
    /// Render the HTML instructions page
    Instructions {
        /// Path to spreadsheet file (.csv or .xlsx)
        file: PathBuf,

        /// Data rows to include, 1-based ('3' or '2:5'; default: all)
        #[arg(short, long)]
        rows: Option<Selection>,

        /// Free-text message shown above the stops
        #[arg(short, long)]
        message: Option<String>,

        /// Output HTML file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show skipped rows and header warnings
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Queue an instructions email in the outbox directory.

Renders the instructions for the selected entries as an HTML email body and
writes it to the outbox as an .eml file for a transport to pick up. Use
--dry-run to print the email instead of writing it.")]
    /// Queue an instructions email in the outbox
    Send {
        /// Path to spreadsheet file (.csv or .xlsx)
        file: PathBuf,

        /// Data rows to include, 1-based ('3' or '2:5'; default: all)
        #[arg(short, long)]
        rows: Option<Selection>,

        /// Recipient email address
        #[arg(long)]
        to: String,

        /// Email subject line
        #[arg(long)]
        subject: String,

        /// Free-text message shown above the stops
        #[arg(short, long)]
        message: Option<String>,

        /// Outbox directory for queued .eml files
        #[arg(long, default_value = "outbox")]
        outbox: PathBuf,

        /// Print the email instead of writing it
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show skipped rows and header warnings
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the entries extracted from the selection
    List {
        /// Path to spreadsheet file (.csv or .xlsx)
        file: PathBuf,

        /// Data rows to include, 1-based ('3' or '2:5'; default: all)
        #[arg(short, long)]
        rows: Option<Selection>,

        /// Emit entries as JSON
        #[arg(long)]
        json: bool,

        /// Show skipped rows and header warnings
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> RouteResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Map {
            file,
            rows,
            origin,
            destination,
            verbose,
        } => cli::map(file, rows, origin, destination, verbose),

        Commands::Instructions {
            file,
            rows,
            message,
            output,
            verbose,
        } => cli::instructions(file, rows, message, output, verbose),

        Commands::Send {
            file,
            rows,
            to,
            subject,
            message,
            outbox,
            dry_run,
            verbose,
        } => cli::send(file, rows, to, subject, message, outbox, dry_run, verbose),

        Commands::List {
            file,
            rows,
            json,
            verbose,
        } => cli::list(file, rows, json, verbose),
    }
}
