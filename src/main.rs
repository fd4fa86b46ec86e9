use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use mojiconv_core::{ConversionRequest, ConvertError, EncodingKind, NewlineTarget, convert, inspect};

#[derive(Parser, Debug)]
#[command(name = "mojiconv", version, about = "Convert encoding and newline of a text file")]
struct Cli {
    /// Input file path
    #[arg(short, long)]
    input: PathBuf,
    /// Output encoding (UTF8, UTF8BOM, SJIS, EUCJP)
    #[arg(short, long, default_value = "UTF8")]
    encoding: EncodingKind,
    /// Output newline (LF, CR, CRLF)
    #[arg(short = 'l', long = "new-line", default_value = "LF")]
    new_line: NewlineTarget,
    /// Output file path; omit to only report the detected encoding/newline
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    force: bool,
    /// Suppress conversion logs
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("input file does not exist: {}", cli.input.display());
    }
    let bytes =
        fs::read(&cli.input).with_context(|| format!("failed to read {}", cli.input.display()))?;

    // Without an output path, only report what the input file contains
    let Some(output) = cli.output else {
        let inspection = inspect(&bytes)?;
        println!(
            "Input File Encoding : [{}] ... Input File New Line : [{}] ... [{}]",
            inspection.encoding,
            inspection.newline,
            cli.input.display()
        );
        return Ok(());
    };

    if !cli.force && output.exists() {
        bail!("output file already exists: {}", output.display());
    }

    let request = ConversionRequest {
        encoding: cli.encoding,
        newline: cli.new_line,
    };
    let report = match convert(&bytes, &request) {
        Ok(report) => report,
        Err(ConvertError::NoConversionNeeded { encoding, newline }) => {
            if cli.quiet {
                bail!("no conversion needed");
            }
            eprintln!("Input File : [{encoding}] [{newline}] ... No Converts Needed");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&output, &report.bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if !cli.quiet {
        let same_encoding = if report.output_encoding == report.source_encoding {
            " (Same)"
        } else {
            ""
        };
        let same_newline = if report.output_newline == report.source_newline {
            " (Same)"
        } else {
            ""
        };
        println!(
            "Input File Encoding : [{}] ... Input File New Line : [{}] ... [{}]",
            report.source_encoding,
            report.source_newline,
            cli.input.display()
        );
        println!(
            "Output File Encoding : [{}{}] ... Output File New Line : [{}{}] ... [{}]",
            report.output_encoding,
            same_encoding,
            report.output_newline,
            same_newline,
            output.display()
        );
        println!("Converted");
    }
    Ok(())
}
