use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tablify_core::error::TablifyError;
use tablify_core::parse::input::load_fragments;
use tablify_core::{LineEnding, ParserConfig, RenderConfigBuilder, Table, TableParser};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// The bordered text table
    Table,
    /// The labeled cells and the table as JSON
    Json,
    /// One line per labeled cell
    Cells,
}

#[derive(Parser)]
#[command(name = "tablify")]
#[command(about = "Rebuild a text table from recognized text lines and their bounding boxes")]
struct Args {
    #[arg(help = "Recognized lines as JSON, `-` or omitted for stdin")]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "native", help = "Line terminator")]
    line_ending: LineEnding,

    #[arg(long, default_value = "1", help = "Spaces on each side of cell text")]
    padding: usize,

    #[arg(short, long, value_enum, default_value = "table", help = "Output format")]
    format: OutputFormat,

    #[arg(long, help = "Keep control characters in cell text")]
    keep_control_chars: bool,

    #[arg(long, help = "Keep leading and trailing whitespace in cell text")]
    keep_whitespace: bool,
}

fn format_table(table: &Table, format: OutputFormat) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Table => table.text.clone(),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(table).context("encode table")?;
            format!("{json}\n")
        }
        OutputFormat::Cells => table.cells.iter().map(|cell| format!("{cell}\n")).collect(),
    };
    Ok(output)
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let render = RenderConfigBuilder::default()
        .line_ending(args.line_ending)
        .padding(args.padding)
        .build()?;
    let parser = TableParser::new(ParserConfig {
        trim_control_chars: !args.keep_control_chars,
        trim_whitespace: !args.keep_whitespace,
        render,
    });

    let fragments = load_fragments(args.input.as_deref())?;
    info!("Loaded {} recognized lines", fragments.len());

    match parser.parse(fragments) {
        Ok(table) => {
            print!("{}", format_table(&table, args.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(TablifyError::NoText) => {
            eprintln!("{}", TablifyError::NoText);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            error!("tablify failed: {:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_input(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tablify-{}-{name}.json", std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    fn parse_args(input: &PathBuf, extra: &[&str]) -> Args {
        let mut argv = vec!["tablify", input.to_str().unwrap()];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn sample_table() -> Table {
        TableParser::new(ParserConfig {
            render: RenderConfigBuilder::default()
                .line_ending(LineEnding::Lf)
                .build()
                .unwrap(),
            ..Default::default()
        })
        .parse(
            tablify_core::parse::input::parse_fragments(
                r#"[
                    { "text": "A", "top_left": [0, 0], "bottom_right": [10, 10] },
                    { "text": "BB", "top_left": [20, 0], "bottom_right": [40, 10] }
                ]"#,
                "test",
            )
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_run_empty_lines_fails() {
        let input = write_input("empty", r#"{ "lines": [] }"#);
        let code = run(parse_args(&input, &[])).unwrap();
        fs::remove_file(&input).ok();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_run_table_succeeds() {
        let input = write_input(
            "one",
            r#"[{ "text": "X", "top_left": [0, 0], "bottom_right": [10, 10] }]"#,
        );
        let code = run(parse_args(&input, &["--line-ending", "lf", "-f", "cells"])).unwrap();
        fs::remove_file(&input).ok();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_run_missing_input_errors() {
        let input = PathBuf::from("/nonexistent/tablify-input.json");
        assert!(run(parse_args(&input, &[])).is_err());
    }

    #[test]
    fn test_args_parse_options() {
        let input = PathBuf::from("in.json");
        let args = parse_args(
            &input,
            &["--line-ending", "crlf", "--padding", "2", "--format", "json", "--keep-whitespace"],
        );
        assert_eq!(args.line_ending, LineEnding::CrLf);
        assert_eq!(args.padding, 2);
        assert!(matches!(args.format, OutputFormat::Json));
        assert!(!args.keep_control_chars);
        assert!(args.keep_whitespace);
    }

    #[test]
    fn test_format_table_outputs() {
        let table = sample_table();

        assert_eq!(
            format_table(&table, OutputFormat::Table).unwrap(),
            "+---+----+\n| A | BB |\n+---+----+\n+---+----+\n"
        );

        let cells = format_table(&table, OutputFormat::Cells).unwrap();
        assert_eq!(
            cells,
            "(A, [0, 0], [10, 10], R: 1  C: 1)\n(BB, [20, 0], [40, 10], R: 1  C: 2)\n"
        );

        let json: serde_json::Value =
            serde_json::from_str(&format_table(&table, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["rows"], 1);
        assert_eq!(json["columns"], 2);
        assert_eq!(json["cells"][1]["text"], "BB");
    }
}
