use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use msl::models::Record;

use super::config::{Config, OutputFormat};
use super::load_document;

/// Parse an MSL library and print its records
pub fn run(
    input: PathBuf,
    format: Option<OutputFormat>,
    pretty: bool,
    parallel: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    let settings = config.resolve(format, pretty, parallel);

    let document = load_document(&input, settings.parallel)?;
    info!("Parsed {} records", document.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match settings.format {
        OutputFormat::Json => write_json(&mut out, document.records(), settings.pretty)?,
        OutputFormat::Text => write_text(&mut out, document.records(), settings.pretty)?,
    }
    out.flush().context("Failed to flush output")
}

fn write_json<W: Write>(out: &mut W, records: &[Record], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, records)?;
    } else {
        serde_json::to_writer(&mut *out, records)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, records: &[Record], pretty: bool) -> Result<()> {
    for record in records {
        if !pretty {
            writeln!(out, "{}", record)?;
            continue;
        }

        writeln!(out, "Compound {}: {}", record.compound_id(), record.compound_name())?;
        writeln!(out, "  Formula:          {}", record.molecular_formula())?;
        writeln!(out, "  Molecular weight: {}", record.molecular_weight())?;
        writeln!(out, "  CAS number:       {}", record.cas_number().unwrap_or("-"))?;
        writeln!(out, "  Retention index:  {}", record.retention_index())?;
        writeln!(out, "  Retention time:   {}", record.retention_time())?;
        writeln!(out, "  Response factor:  {}", record.response_factor())?;
        writeln!(out, "  Resolution:       {}", record.resolution())?;
        if !record.comment().is_empty() {
            writeln!(out, "  Comment:          {}", record.comment())?;
        }
        write!(out, "  Peaks ({}):", record.peaks_count())?;
        for peak in record.peaks() {
            write!(out, " {}", peak)?;
        }
        writeln!(out)?;
        writeln!(out)?;
    }
    Ok(())
}
