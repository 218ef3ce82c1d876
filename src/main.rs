use clap::{Parser, Subcommand};
use locsheet::api::{server::DEFAULT_MAX_UPLOAD_BYTES, ApiConfig};
use locsheet::cli;
use locsheet::types::{ConversionMode, SheetSelector};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "locsheet")]
#[command(about = "Convert localization spreadsheets into JSON dictionaries")]
#[command(long_about = "locsheet - Spreadsheet to JSON localization converter

COMMANDS:
  convert  - Convert a workbook to localization JSON files
  sheets   - List the sheets of a workbook
  serve    - Run the HTTP conversion API

MODES:
  app      - localization_tr.json + localization_en.json
             columns: Key, HAS_LINKS, tr_TR, en_INT, *_Link_Text, *_Link_URL
  backend  - localization.json with { en, tr }
             columns: Key, en, tr

EXAMPLES:
  locsheet convert strings.xlsx
  locsheet convert strings.xlsx --mode backend --out-dir dist/
  locsheet convert strings.xlsx --versioned
  locsheet convert strings.xlsx --sheet-index 1
  locsheet serve --port 3000")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a workbook to localization JSON files.

App mode skips the first data row (a label row) and writes one file per
language. Rows with HAS_LINKS = 0 become { default }; any other value
becomes { default, links: [{ \"%1$s\": text, link: url }] }.

Backend mode reads every row and writes one file nesting en and tr.

Rows without a Key are skipped. Blank texts become \"-\".")]
    /// Convert a workbook to localization JSON files
    Convert {
        /// Path to the workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
        input: PathBuf,

        /// Output shape: app or backend
        #[arg(short, long, default_value = "app")]
        mode: ConversionMode,

        /// Sheet name to convert (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Zero-based sheet position to convert, as listed by `sheets`
        #[arg(long, conflicts_with = "sheet")]
        sheet_index: Option<usize>,

        /// Directory for the output files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Name app files localization_dev_<version>_<lang>.json
        #[arg(long)]
        versioned: bool,

        /// Print JSON to stdout instead of writing files
        #[arg(long)]
        stdout: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the sheets of a workbook
    Sheets {
        /// Path to the workbook
        input: PathBuf,
    },

    /// Run the HTTP conversion API
    Serve {
        /// Host address to bind to (use 0.0.0.0 for all interfaces)
        #[arg(short = 'H', long, default_value = "127.0.0.1", env = "LOCSHEET_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "LOCSHEET_PORT")]
        port: u16,

        /// Maximum upload size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "LOCSHEET_MAX_UPLOAD")]
        max_upload: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            mode,
            sheet,
            sheet_index,
            out_dir,
            versioned,
            stdout,
            verbose,
        } => {
            cli::init_logging(verbose);
            let selector = SheetSelector::from_options(sheet, sheet_index);
            cli::convert(input, mode, selector, out_dir, versioned, stdout, verbose)?;
        }

        Commands::Sheets { input } => {
            cli::init_logging(false);
            cli::sheets(input)?;
        }

        Commands::Serve {
            host,
            port,
            max_upload,
        } => cli::serve(ApiConfig {
            host,
            port,
            max_upload_bytes: max_upload,
        })?,
    }

    Ok(())
}
