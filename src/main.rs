//! Command-line renderer.
//!
//! Reads a form or formset payload, renders it into a `<form>` element and
//! prints the HTML.
//!
//! # Input Sources
//!
//! - A JSON file given as `INPUT`
//! - Standard input, when `INPUT` is omitted or `-`
//! - An HTML page (`--page`), taking the payload from the JSON script element
//!   named by `--script-id`
//!
//! # Examples
//!
//! ```text
//! deform render form.json --action /accounts/new/
//! curl -s https://example.test/txn/ | deform render --page --script-id deform-data
//! deform check formset.json
//! ```

#![allow(clippy::multiple_crate_versions)]

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use deform::markup::Element;
use deform::page::{payload_from_page, DEFAULT_SCRIPT_ID};
use deform::Payload;

#[derive(Parser)]
#[command(name = "deform")]
#[command(about = "Render Django-style form payloads to HTML")]
struct Cli {
    /// Config file (defaults to $DEFORM_CONFIG, then ~/.config/deform/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a payload and print the resulting HTML
    Render {
        #[command(flatten)]
        input: InputArgs,
        /// `method` attribute of the generated form
        #[arg(long, default_value = "post")]
        method: String,
        /// `action` attribute of the generated form
        #[arg(long)]
        action: Option<String>,
    },
    /// Parse and render a payload, printing a summary instead of HTML
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Payload file; reads stdin when omitted or `-`
    input: Option<PathBuf>,
    /// Treat the input as an HTML page carrying the payload in a JSON script element
    #[arg(long)]
    page: bool,
    /// Id of the JSON script element to read with `--page`
    #[arg(long, default_value = DEFAULT_SCRIPT_ID)]
    script_id: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> deform::Result<()> {
    let config = deform::load_config(cli.config.as_deref())?;
    deform::observability::init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Render {
            input,
            method,
            action,
        } => {
            let payload = read_payload(&input)?;
            let mut form = Element::new("form");
            form.set_attribute("method", method);
            if let Some(action) = action {
                form.set_attribute("action", action);
            }
            deform::render_payload(&mut form, &payload, &config)?;
            println!("{}", form.outer_html());
        }
        Commands::Check { input } => {
            let payload = read_payload(&input)?;
            let mut scratch = Element::new("form");
            deform::render_payload(&mut scratch, &payload, &config)?;

            let forms = match &payload {
                Payload::FormSet(formset) => formset.forms.len(),
                Payload::Form(_) => 1,
            };
            let fields: usize = payload.forms().map(|form| form.fields.len()).sum();
            let hidden: usize = payload.forms().map(|form| form.hidden_fields.len()).sum();
            println!(
                "ok: {} with {forms} form(s), {fields} field(s), {hidden} hidden field(s)",
                payload.kind_name()
            );
        }
    }
    Ok(())
}

fn read_payload(args: &InputArgs) -> deform::Result<Payload> {
    let source = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            tracing::debug!(path = %path.display(), "reading payload file");
            fs::read_to_string(path)?
        }
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if args.page {
        payload_from_page(&source, &args.script_id)
    } else {
        Payload::from_json(&source)
    }
}
