use anyhow::Result;
use std::path::PathBuf;

use super::load_document;

/// Display summary statistics for an MSL library
pub fn run(input: PathBuf) -> Result<()> {
    let document = load_document(&input, false)?;
    let summary = document.summary();

    println!("MSL Library Information");
    println!("=======================");
    println!("File: {}", input.display());
    println!();

    #[cfg(feature = "colorized_output")]
    {
        use console::style;

        println!("{}", summary);
        if summary.skipped_fragments > 0 {
            println!(
                "{}",
                style(format!(
                    "{} record(s) could not be parsed and were skipped",
                    summary.skipped_fragments
                ))
                .yellow()
            );
        } else {
            println!("{}", style("All record-like entries parsed").green());
        }
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", summary);
        if summary.skipped_fragments > 0 {
            println!(
                "{} record(s) could not be parsed and were skipped",
                summary.skipped_fragments
            );
        }
    }

    Ok(())
}
