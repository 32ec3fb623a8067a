//! LogicLoom - Command Line Interface
//!
//! Minimizes a boolean function given as comma-separated variables and
//! minterms, printing equations and optionally the prime implicant chart.

use clap::{ArgAction, Parser, ValueEnum};
use logicloom::chart::LATEX_MARKER;
use logicloom::demos::DEMOS;
use logicloom::render::{self, pla, Notation};
use logicloom::{ChartData, Equation, LoomError, Simplifier, SimplifierConfig};
use serde::Serialize;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain-text equations
    String,
    /// LaTeX equations
    Latex,
    /// Both notations
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChartFormat {
    /// Box-drawing table
    Terminal,
    /// LaTeX tabular
    Latex,
}

#[derive(Parser, Debug)]
#[command(name = "logicloom")]
#[command(about = "Boolean logic minimization toolkit", long_about = None)]
#[command(version)]
struct Args {
    /// Comma-separated variable names, most significant first
    #[arg(short = 'v', long = "vars", value_name = "A,B,C")]
    variables: Option<String>,

    /// Comma-separated minterm indices
    #[arg(short = 'm', long = "minterms", value_name = "0,1,2")]
    minterms: Option<String>,

    /// Equation notation
    #[arg(long = "output", value_enum, default_value = "string")]
    output: OutputFormat,

    /// Print every minimal cover instead of the first
    #[arg(long = "all")]
    all: bool,

    /// Print the prime implicant chart
    #[arg(long = "pichart", value_enum)]
    pichart: Option<ChartFormat>,

    /// Print the prime implicants (binary and literal form)
    #[arg(long = "pitable")]
    pitable: bool,

    /// Print the essential prime implicants (binary and literal form)
    #[arg(long = "essentials")]
    essentials: bool,

    /// Write the first minimal cover as a PLA file
    #[arg(long = "pla", value_name = "FILE")]
    pla: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long = "json")]
    json: bool,

    /// Abort the cover search after this many milliseconds
    #[arg(long = "time-limit-ms", value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Abort the cover search beyond this many candidate selections
    #[arg(long = "max-candidates", value_name = "N")]
    max_candidates: Option<usize>,

    /// Run the bundled demo problems
    #[arg(long = "demo")]
    demo: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SimplifierConfig {
        SimplifierConfig {
            candidate_limit: self.max_candidates,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    variables: Vec<&'a str>,
    minterms: &'a [u64],
    prime_implicants: Vec<String>,
    essentials: Vec<String>,
    cost: usize,
    equations: Vec<Equation>,
    chart: ChartData,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
}

fn print_equations(equations: &[Equation], output: OutputFormat) {
    for (idx, equation) in equations.iter().enumerate() {
        if equations.len() > 1 {
            println!("Cover {}", idx + 1);
        }
        if matches!(output, OutputFormat::String | OutputFormat::Both) {
            println!("{}", equation.get(Notation::Text));
        }
        if matches!(output, OutputFormat::Latex | OutputFormat::Both) {
            println!("{}", equation.get(Notation::Latex));
        }
        if idx + 1 < equations.len() {
            println!();
        }
    }
}

fn run_problem(args: &Args, variables: &str, minterms: &str) -> Result<(), LoomError> {
    let simplifier = Simplifier::from_strings(variables, minterms)?.with_config(args.config());
    let solution = simplifier.solve()?;

    let mut equations = simplifier.all_equations()?;
    if !args.all {
        equations.truncate(1);
    }

    if let Some(path) = &args.pla {
        pla::to_pla_file(solution.minimal_cover(), simplifier.variables(), path)?;
        log::info!("wrote PLA to {}", path.display());
    }

    if args.json {
        let report = Report {
            variables: simplifier.variables().iter().map(|v| v.as_ref()).collect(),
            minterms: simplifier.problem().minterms(),
            prime_implicants: solution.prime_implicants().iter().map(|t| t.to_string()).collect(),
            essentials: solution.essentials().iter().map(|t| t.to_string()).collect(),
            cost: solution.cost(),
            equations,
            chart: solution.chart().data(),
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| LoomError::Io(std::io::Error::other(e)))?;
        println!("{}", json);
        return Ok(());
    }

    print_equations(&equations, args.output);

    if args.pitable {
        println!();
        println!("Prime implicants");
        println!(
            "{}",
            render::implicant_table(solution.prime_implicants(), simplifier.variables())
        );
    }
    if args.essentials {
        println!();
        println!("Essential prime implicants");
        println!(
            "{}",
            render::implicant_table(solution.essentials(), simplifier.variables())
        );
    }
    match args.pichart {
        Some(ChartFormat::Terminal) => {
            println!();
            println!("{}", render::chart_terminal(&solution.chart().data()));
        }
        Some(ChartFormat::Latex) => {
            println!();
            let data = solution.chart().data().with_marker(LATEX_MARKER);
            println!("{}", render::chart_latex(&data));
        }
        None => {}
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.demo {
        for demo in DEMOS {
            if let Err(e) = run_problem(&args, demo.variables, demo.minterms) {
                eprintln!("Error in demo {}: {}", demo.minterms, e);
                process::exit(1);
            }
            println!();
        }
        return;
    }

    let (Some(variables), Some(minterms)) = (args.variables.as_deref(), args.minterms.as_deref())
    else {
        eprintln!("Error: provide --vars and --minterms, or use --demo");
        process::exit(2);
    };

    if let Err(e) = run_problem(&args, variables, minterms) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
