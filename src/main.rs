mod debug_report;

use deedname::{BatchSummary, InteriorTokens, Options, classify_and_parse_batch_with, parse_verbose_with};
use std::io::{self, BufRead, BufWriter, IsTerminal, Read, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> deedname::Result<()> {
    match (&config.mode, &config.input) {
        (Mode::Batch, _) => run_batch(config),
        (Mode::Json, Some(input)) => {
            let res = parse_verbose_with(input, &config.options);
            println!("{}", serde_json::to_string(&res.result)?);
            Ok(())
        }
        (_, Some(input)) => {
            let res = parse_verbose_with(input, &config.options);
            debug_report::print_run(input, &res, config.color);
            Ok(())
        }
        (_, None) => Ok(()),
    }
}

fn run_batch(config: &CliConfig) -> deedname::Result<()> {
    let names = io::stdin().lock().lines().collect::<io::Result<Vec<String>>>()?;
    let results = classify_and_parse_batch_with(&names, &config.options);

    let mut out = BufWriter::new(io::stdout().lock());
    for parsed in &results {
        serde_json::to_writer(&mut out, parsed)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    let summary = BatchSummary::from_results(&results);
    summary.needs_lexicon_review(BatchSummary::DEFAULT_REVIEW_THRESHOLD);
    eprintln!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Report,
    Json,
    Batch,
}

struct CliConfig {
    input: Option<String>,
    mode: Mode,
    options: Options,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut batch = false;
    let mut json = false;
    let mut options = Options::from_env().map_err(|err| format!("error: {}: {err}", deedname::INTERIOR_ENV))?;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("deedname {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--batch" => batch = true,
            "--json" => json = true,
            "--retain-middle" => options.interior = InteriorTokens::Retain,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                set_input(&mut input, value.to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    if batch {
        if input.is_some() {
            return Err("error: --batch reads names from stdin and takes no input argument".to_string());
        }
        return Ok(CliConfig { input: None, mode: Mode::Batch, options, color });
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    // An empty command line is a usage error, not an empty owner name.
    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    let mode = if json { Mode::Json } else { Mode::Report };
    Ok(CliConfig { input: Some(input.trim().to_string()), mode, options, color })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "deedname {version}

Classify property owner names and extract first/last names.

Usage:
  deedname [OPTIONS] [--] <name...>
  deedname [OPTIONS] --input <name>
  deedname [OPTIONS] --batch < names.txt

Options:
  -i, --input <name>         Owner name to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --batch                    Read one name per stdin line and print one JSON
                             record per line. A summary goes to stderr.
  --json                     Print the record as JSON instead of the report.
  --retain-middle            Keep interior name tokens in middle_name.
                             Default comes from {env} (discard|retain).
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  I/O or serialization error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        env = deedname::INTERIOR_ENV,
    )
}
