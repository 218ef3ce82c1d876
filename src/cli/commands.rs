use crate::api::{run_api_server, ApiConfig};
use crate::core::{convert as convert_workbook, ConversionOutput};
use crate::error::{LocsheetError, LocsheetResult};
use crate::excel::Workbook;
use crate::types::{ConversionMode, SheetSelector};
use crate::writer::{output_files, write_output_files};
use colored::Colorize;
use std::path::PathBuf;

/// Send library logs to stderr. Debug level with `verbose`, warnings otherwise.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "locsheet=debug" } else { "locsheet=warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    mode: ConversionMode,
    sheet: SheetSelector,
    out_dir: PathBuf,
    versioned: bool,
    to_stdout: bool,
    verbose: bool,
) -> LocsheetResult<()> {
    if !input.exists() {
        return Err(LocsheetError::InputMissing);
    }

    let workbook = Workbook::open(&input)?;
    let output = convert_workbook(&workbook, &sheet, mode)?;

    if to_stdout {
        print_output(&output);
        return Ok(());
    }

    println!("{}", "🌐 locsheet - Converting spreadsheet".bold().green());
    println!("   Input: {}", input.display());
    println!("   Mode:  {}", mode.to_string().bright_yellow().bold());

    if verbose {
        let selected = workbook.select(&sheet)?;
        println!(
            "   Sheet: {} ({} data rows)",
            selected.name.bright_blue(),
            selected.rows.len()
        );
    }
    println!();

    let files = output_files(&output, versioned);
    let written = write_output_files(&out_dir, &files)?;

    println!("{}", "✅ Conversion complete".bold().green());
    if let ConversionOutput::App { version, .. } = &output {
        println!("   Version: {}", version.cyan());
    }
    for path in &written {
        println!("   📄 {}", path.display());
    }
    println!();

    Ok(())
}

/// JSON texts only, for piping
fn print_output(output: &ConversionOutput) {
    match output {
        ConversionOutput::App { tr, en, .. } => {
            println!("{}", tr);
            println!("{}", en);
        }
        ConversionOutput::Backend { combined } => println!("{}", combined),
    }
}

/// Execute the sheets command
pub fn sheets(input: PathBuf) -> LocsheetResult<()> {
    if !input.exists() {
        return Err(LocsheetError::InputMissing);
    }

    let workbook = Workbook::open(&input)?;

    println!("{}", "📋 Sheets".bold().green());
    println!("   File: {}\n", input.display());
    for (index, sheet) in workbook.sheets().iter().enumerate() {
        println!(
            "   {} {} ({} data rows)",
            format!("{}.", index).dimmed(),
            sheet.name.bright_blue().bold(),
            sheet.rows.len()
        );
    }
    println!();

    Ok(())
}

/// Execute the serve command
pub fn serve(config: ApiConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_api_server(config))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
