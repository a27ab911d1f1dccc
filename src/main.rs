//! School Profile CLI
//!
//! Usage:
//!   school-profile [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --template <NAME>  Render with this template instead of the record's
//!   -s, --theme <FILE>     Theme palette file (TOML format)
//!   -f, --fragment         Emit an HTML fragment instead of a full document
//!   -o, --output <FILE>    Write to a file instead of stdout
//!   -v, --verbose          Debug logging to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use school_profile::{parse, render_profile, HtmlConfig, RenderConfig, TemplateKind, Theme};

#[derive(Parser)]
#[command(name = "school-profile")]
#[command(about = "Render a school profile record as an HTML page")]
struct Cli {
    /// Profile record as JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Template to use instead of the one named in the record
    /// (modern, classic, minimal, creative)
    #[arg(short, long)]
    template: Option<TemplateKind>,

    /// Theme palette file (TOML format)
    #[arg(short = 's', long)]
    theme: Option<PathBuf>,

    /// Emit an HTML fragment without doctype and head
    #[arg(short, long)]
    fragment: bool,

    /// Disable indentation
    #[arg(long)]
    compact: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Nothing piped in and no file: show usage rather than block on stdin
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Reported) => ExitCode::FAILURE,
        Err(Failure::Message(message)) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Why a run failed
enum Failure {
    /// A diagnostic has already been written to stderr
    Reported,
    Message(String),
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::Message(message)
    }
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let theme = match &cli.theme {
        Some(path) => Theme::from_file(path)
            .map_err(|e| format!("loading theme '{}': {}", path.display(), e))?,
        None => Theme::default(),
    };

    let (source, filename) = match &cli.input {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("reading file '{}': {}", path.display(), e))?;
            (content, path.display().to_string())
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("reading from stdin: {}", e))?;
            (buffer, "<stdin>".to_string())
        }
    };

    let record = match parse(&source) {
        Ok(record) => record,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            return Err(Failure::Reported);
        }
    };

    let html_config = HtmlConfig::default()
        .with_standalone(!cli.fragment)
        .with_pretty_print(!cli.compact);
    let mut config = RenderConfig::new().with_theme(theme).with_html(html_config);
    if let Some(template) = cli.template {
        config = config.with_template(template);
    }

    let template = config.template_for(&record);
    let html = render_profile(&record, &config);

    match &cli.output {
        Some(path) => {
            fs::write(path, &html)
                .map_err(|e| format!("writing '{}': {}", path.display(), e))?;
            info!(school = %record.name, %template, output = %path.display(), "profile written");
        }
        None => println!("{}", html),
    }

    Ok(())
}

fn print_intro() {
    println!(
        r##"School Profile - render a school profile record as an HTML page

USAGE:
    school-profile [OPTIONS] [FILE]
    cat school.json | school-profile

OPTIONS:
    -t, --template <NAME>  modern, classic, minimal or creative
    -s, --theme <FILE>     Theme palette (TOML file)
    -f, --fragment         HTML fragment without doctype/head
    --compact              No indentation
    -o, --output <FILE>    Write to a file
    -v, --verbose          Debug logging (RUST_LOG is honored otherwise)
    -h, --help             Print help

RECORD:
    {{
      "name": "Lakeside School",
      "brandColor": "#1d4ed8",
      "profile": {{
        "mission": "...",
        "goals": ["Excellence", {{"title": "Teamwork"}}],
        "layout": {{ "template": "classic", "sections": {{ "showVision": false }} }}
      }}
    }}

The record's template is used unless --template is given; unknown template
names fall back to modern."##
    );
}
