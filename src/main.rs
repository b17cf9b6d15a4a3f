//! Purpose: `regconv` CLI entry point for the registry conversion run.
//! Role: Binary crate root; parses args, runs the pass, prints the report.
//! Invariants: Human report lines are stable (build scripts scrape them).
//! Invariants: Exit code is 0 iff the run recorded no failures; usage errors exit 2.
//! Invariants: Tracing goes to stderr; the report contract owns stdout.

use std::path::PathBuf;

use clap::{Parser, ValueHint, error::ErrorKind as ClapErrorKind};
use tracing_subscriber::EnvFilter;

mod report_json;

use regconv::core::convert::{ConvertOptions, RunReport, convert_registry};
use regconv::core::error::{ErrorKind, to_exit_code};
use regconv::core::registry::DEFAULT_REGISTRY_DIR;
use report_json::report_json;

#[derive(Parser)]
#[command(
    name = "regconv",
    version,
    about = "Convert registry YAML files to JSON",
    long_about = r#"Convert the fixed set of registry YAML files to pretty-printed JSON.

The registry holds five configuration domains (adapters, capabilities, policy,
result_profiles, ui). Each <name>.yaml is parsed and written back as a sibling
<name>.json with 2-space indentation, so consumers without a YAML parser can
read the same data. Run it whenever the YAML sources change."#,
    after_help = r#"EXAMPLES
  $ regconv                      # convert ./registry
  $ regconv path/to/registry
  $ regconv --check              # parse without writing (CI gate)
  $ regconv --json | jq '.ok'

NOTES
  - A missing or invalid source file does not stop the run; the other files
    are still attempted and each failure is listed under Errors.
  - Exit code is 0 only when all five files converted.
  - Existing .json files are overwritten."#
)]
struct Cli {
    #[arg(
        default_value = DEFAULT_REGISTRY_DIR,
        help = "Registry directory holding the YAML sources",
        value_hint = ValueHint::DirPath
    )]
    dir: PathBuf,
    #[arg(long, help = "Parse and convert without writing any .json file")]
    check: bool,
    #[arg(long, help = "Emit the run report as JSON instead of human-readable output")]
    json: bool,
}

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => 0,
                _ => to_exit_code(ErrorKind::Usage),
            };
        }
    };

    init_tracing();

    let options = ConvertOptions { check: cli.check };
    let report = convert_registry(&cli.dir, options);

    if cli.json {
        emit_json_report(&cli, &report);
    } else {
        emit_human_report(&cli, &report);
    }

    if report.succeeded() { 0 } else { 1 }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn emit_json_report(cli: &Cli, report: &RunReport) {
    let value = report_json(&cli.dir, cli.check, report);
    let json = serde_json::to_string(&value)
        .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn emit_human_report(cli: &Cli, report: &RunReport) {
    let verb = if cli.check { "Checking" } else { "Converting" };
    println!("{verb} YAML files in {}/", cli.dir.display());
    println!("{}", "-".repeat(50));
    for file in &report.converted {
        if cli.check {
            println!("✓ Parsed {file}");
        } else {
            println!("✓ Converted {file} to JSON");
        }
    }
    println!("{}", "-".repeat(50));
    if cli.check {
        println!("Checked {} files", report.converted.len());
    } else {
        println!("Converted {} files", report.converted.len());
    }

    if report.errors.is_empty() {
        println!();
        if cli.check {
            println!("✓ All files parse cleanly");
        } else {
            println!("✓ All files converted successfully");
        }
    } else {
        println!();
        println!("Errors:");
        for error in &report.errors {
            println!("  ✗ {error}");
        }
    }
}
