//! A CLI tool for decoding BEJ-encoded (DSP0218) files into pretty-printed
//! JSON, driven by a schema dictionary and an annotation dictionary.

use bej_parser::dictionary::{load_dictionary, trace_dictionary};
use clap::{Parser, Subcommand};
use snafu::{ResultExt, Snafu};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{error, info, Level};

/// Decode BEJ-encoded files into JSON
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a BEJ-encoded file into a `.json` file next to it
    Decode {
        /// Schema dictionary file
        #[arg(short = 's', long = "schema")]
        schema_dict: PathBuf,
        /// Annotation dictionary file
        #[arg(short = 'a', long = "annotations")]
        anno_dict: PathBuf,
        /// BEJ-encoded file to decode
        #[arg(short = 'b', long = "bej")]
        bej_file: PathBuf,
        /// Verbose mode
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("could not load schema dictionary {}: {source}", path.display()))]
    LoadSchemaDictionary {
        path: PathBuf,
        source: bej_core::Error,
    },

    #[snafu(display("could not load annotation dictionary {}: {source}", path.display()))]
    LoadAnnotationDictionary {
        path: PathBuf,
        source: bej_core::Error,
    },

    #[snafu(display("could not open BEJ file {}: {source}", path.display()))]
    OpenBejFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("could not create output file {}: {source}", path.display()))]
    CreateOutputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("decoding {} failed: {source}", path.display()))]
    Decode {
        path: PathBuf,
        source: bej_core::Error,
    },
}

fn main() {
    run().unwrap_or_else(|e| {
        error!("{}", snafu::Report::from_error(e));
        std::process::exit(1);
    });
}

fn run() -> Result<(), Error> {
    let App { command } = App::parse();

    let Command::Decode {
        schema_dict,
        anno_dict,
        bej_file,
        verbose,
    } = command;

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .unwrap_or_else(|e| {
        error!("{}", snafu::Report::from_error(e));
    });

    info!(?schema_dict, ?anno_dict, ?bej_file, "=== BEJ Decoder Starting ===");

    let schema = load_dictionary(&schema_dict).context(LoadSchemaDictionarySnafu {
        path: schema_dict.clone(),
    })?;
    let anno = load_dictionary(&anno_dict).context(LoadAnnotationDictionarySnafu {
        path: anno_dict.clone(),
    })?;

    if verbose {
        trace_dictionary("schema", &schema);
        trace_dictionary("annotation", &anno);
    }

    let output_path = derive_output_path(&bej_file);
    info!(output = %output_path.display(), "decoding");

    let input = File::open(&bej_file).context(OpenBejFileSnafu {
        path: bej_file.clone(),
    })?;
    let mut input = BufReader::new(input);

    let output = File::create(&output_path).context(CreateOutputFileSnafu {
        path: output_path.clone(),
    })?;
    let output = BufWriter::new(output);

    bej_parser::decode_bej(&mut input, &schema, &anno, output).context(DecodeSnafu {
        path: bej_file.clone(),
    })?;

    if verbose {
        info!("=== Decoding Complete ===");
    }

    Ok(())
}

/// Derive the output path from the BEJ input path: replace the extension
/// after the last `.` with `.json`, provided that dot comes after the last
/// path separator; otherwise append `.json`.
fn derive_output_path(bej_path: &Path) -> PathBuf {
    let raw = bej_path.as_os_str().to_string_lossy();

    let last_dot = raw.rfind('.');
    let last_separator = raw.rfind(&['/', '\\'][..]);

    match last_dot {
        Some(dot) if last_separator.map_or(true, |sep| dot > sep) => {
            PathBuf::from(format!("{}.json", &raw[..dot]))
        }
        _ => PathBuf::from(format!("{raw}.json")),
    }
}
