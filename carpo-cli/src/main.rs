//! Command-line interface for carpo
//! This binary converts Carpentries episode files into the MyST dialect used by the lesson build.
//!
//! Usage:
//!   carpo convert `<path>` [--output `<path>`] [--config `<file>`]   - Convert an episode
//!   carpo inspect `<path>` [--format `<format>`]                     - Dump extracted structure as JSON

use clap::{Arg, Command};
use std::path::Path;

fn main() {
    let matches = Command::new("carpo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting Carpentries episode files")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert an episode file to the MyST dialect")
                .arg(
                    Arg::new("path")
                        .help("Path to the episode file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output path (default: 'convert.output' from configuration)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML configuration file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print extracted episode structure as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the episode file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("What to print: 'front-matter' or 'blocks'")
                        .default_value("front-matter"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("convert", sub)) => {
            let path = sub
                .get_one::<String>("path")
                .expect("path is a required argument");
            handle_convert_command(
                path,
                sub.get_one::<String>("output").map(String::as_str),
                sub.get_one::<String>("config").map(String::as_str),
            );
        }
        Some(("inspect", sub)) => {
            let path = sub
                .get_one::<String>("path")
                .expect("path is a required argument");
            let format = sub.get_one::<String>("format").unwrap();
            handle_inspect_command(path, format);
        }
        _ => unreachable!("arg_required_else_help covers the no-subcommand case"),
    }
}

/// Handle the convert command
fn handle_convert_command(path: &str, output: Option<&str>, config_file: Option<&str>) {
    use carpo_convert::{convert_file, DottedTagResolver, Options};

    let mut loader = carpo_config::Loader::new();
    if let Some(file) = config_file {
        loader = loader.with_file(file);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let options = Options {
        language_aliases: config.convert.language_aliases.clone(),
        strip_shell_prompts: config.convert.strip_shell_prompts,
        resolver: Box::new(DottedTagResolver),
    };
    let output = output.unwrap_or(&config.convert.output);

    if let Err(e) = convert_file(Path::new(path), Path::new(output), &options) {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    }
    println!("Wrote {}", output);
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, format: &str) {
    use carpo_parser::{scan_code_blocks, FrontMatter};

    let config = carpo_config::load_defaults().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read '{}': {}", path, e);
        std::process::exit(1);
    });

    let value = match format {
        "front-matter" => {
            let (front_matter, _) = FrontMatter::extract(&source).unwrap_or_else(|e| {
                eprintln!("Extraction error: {}", e);
                std::process::exit(1);
            });
            serde_json::to_value(front_matter)
        }
        "blocks" => serde_json::to_value(scan_code_blocks(&source)),
        other => {
            eprintln!("Format '{}' not supported for inspect", other);
            eprintln!("Available formats: front-matter, blocks");
            std::process::exit(1);
        }
    };

    let value = value.unwrap_or_else(|e| {
        eprintln!("Error formatting JSON: {}", e);
        std::process::exit(1);
    });
    let rendered = if config.inspect.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .unwrap_or_else(|e| {
        eprintln!("Error formatting JSON: {}", e);
        std::process::exit(1);
    });

    println!("{}", rendered);
}
