use anyhow::{Context, Result};
use clap::Parser;
use cssify_lib::{stringify_style_declaration, stringify_style_rule, StringifyOptions, UnitSpec};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "cssify")]
#[command(about = "Turn JSON style objects into CSS text")]
struct Args {
    /// Input JSON file, or `-` for stdin.
    input: String,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    output: Option<String>,

    /// Treat the input as a single declaration block instead of selector => declaration.
    #[arg(long)]
    declaration: bool,

    /// Append `!important` to every declaration.
    #[arg(long)]
    important: bool,

    /// Unit for every numeric value (default px).
    #[arg(long, conflicts_with = "unit_for")]
    unit: Option<String>,

    /// Unit for one property, e.g. `fontSize=em`. Repeatable.
    #[arg(long = "unit-for", value_name = "PROPERTY=UNIT", value_parser = parse_unit_for)]
    unit_for: Vec<(String, String)>,
}

fn parse_unit_for(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((property, unit)) if !property.is_empty() => {
            Ok((property.to_string(), unit.to_string()))
        }
        _ => Err(format!("expected PROPERTY=UNIT, got '{arg}'")),
    }
}

impl Args {
    fn options(&self) -> StringifyOptions {
        let unit = match (&self.unit, self.unit_for.is_empty()) {
            (Some(unit), _) => Some(UnitSpec::Global(unit.clone())),
            (None, false) => Some(UnitSpec::PerProperty(
                self.unit_for.iter().cloned().collect::<HashMap<_, _>>(),
            )),
            (None, true) => None,
        };
        StringifyOptions {
            important: self.important,
            unit,
        }
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(input).with_context(|| format!("failed to read '{input}'"))
}

fn run(args: &Args) -> Result<()> {
    let source = read_input(&args.input)?;
    let styles: Value = serde_json::from_str(&source)
        .with_context(|| format!("'{}' is not valid JSON", args.input))?;

    let options = args.options();
    debug!("stringify options: {:?}", options);

    let css = if args.declaration {
        stringify_style_declaration(&styles, &options)?
    } else {
        stringify_style_rule(&styles, &options)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &css).with_context(|| format!("failed to write '{path}'"))?;
            info!("wrote {} bytes of CSS to {}", css.len(), path);
        }
        None => println!("{css}"),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
