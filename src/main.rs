// SPDX-License-Identifier: MIT
//
// token-forge — derive a design token set and write it out.
//
// This is the binary that wires together the crates:
//
//   forge-color  → hex/RGB/HSB conversion, rgba()/hsba() strings
//   forge-tokens → derivation: palettes, type ramp, spacing, contrast
//   forge-export → CSS / SCSS / JSON / JS writers
//
// The engine crates are pure; every side effect (config file, output
// file, stdout) lives here. A normal run flows:
//
//   tokens.toml → TokenSet → forge_export::render → stdout or --out
//
// plus three side doors: --init writes a starter config, --check
// measures the configured foreground/background pair instead of
// exporting, and --presets lists the named scales and the font catalog.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process;

use forge_export::{ExportFormat, render};

use forge_tokens::TokenSet;
use forge_tokens::contrast::ContrastReport;
use forge_tokens::fonts::{self, FontCategory};
use forge_tokens::spacing::SpacingPreset;
use forge_tokens::typography::TypeScale;

mod config;
mod error;

use error::Error;

const USAGE: &str = "\
token-forge — design token generator

USAGE:
  token-forge [OPTIONS]

OPTIONS:
  --config <PATH>   Config file (default: tokens.toml; a missing file
                    means the default token set)
  --format <NAME>   Export format: css, scss, json or js (default: css)
  --out <PATH>      Write to a file instead of stdout
  --init            Write the default config to the config path
  --check           Report WCAG contrast for the configured
                    foreground/background pair
  --presets         List the named type scales, spacing presets and
                    catalog fonts
  --help            Show this help
";

/// Parsed command line. `None` from [`Args::parse`] means `--help`.
#[derive(Debug)]
struct Args {
    config: PathBuf,
    format: ExportFormat,
    out: Option<PathBuf>,
    init: bool,
    check: bool,
    presets: bool,
}

impl Args {
    fn parse(mut args: pico_args::Arguments) -> Result<Option<Self>, Error> {
        if args.contains("--help") {
            return Ok(None);
        }

        let config = args
            .opt_value_from_str::<_, PathBuf>("--config")?
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH));

        let format = match args.opt_value_from_str::<_, String>("--format")? {
            Some(name) => ExportFormat::from_name(&name).ok_or(Error::UnknownFormat(name))?,
            None => ExportFormat::Css,
        };

        let out = args.opt_value_from_str("--out")?;
        let init = args.contains("--init");
        let check = args.contains("--check");
        let presets = args.contains("--presets");

        if let Some(unexpected) = args.finish().first() {
            return Err(Error::UnexpectedArgument(
                unexpected.to_string_lossy().into_owned(),
            ));
        }

        Ok(Some(Self { config, format, out, init, check, presets }))
    }
}

fn run() -> Result<(), Error> {
    let Some(args) = Args::parse(pico_args::Arguments::from_env())? else {
        print!("{USAGE}");
        return Ok(());
    };

    if args.init {
        config::save(&TokenSet::default(), &args.config)?;
        println!("wrote {}", args.config.display());
        return Ok(());
    }

    if args.presets {
        print!("{}", preset_listing());
        return Ok(());
    }

    let tokens = config::load(&args.config)?;

    if args.check {
        let report = ContrastReport::measure(
            tokens.colors.foreground.to_color(),
            tokens.colors.background.to_color(),
        );
        println!("{report}");
        return Ok(());
    }

    let content = render(&tokens, args.format)?;
    match args.out {
        Some(path) => fs::write(path, content)?,
        None => println!("{content}"),
    }
    Ok(())
}

/// The `--presets` listing: every named scale with the value it stores,
/// then the font catalog grouped the way pickers group it.
fn preset_listing() -> String {
    let mut out = String::new();

    out.push_str("Type scales:\n");
    for scale in TypeScale::all() {
        let _ = writeln!(out, "  {:<18} {:.3}", scale.name(), scale.ratio());
    }

    out.push_str("\nSpacing presets:\n");
    for preset in SpacingPreset::all() {
        let _ = writeln!(out, "  {:<18} x{}", preset.name(), preset.multiplier());
    }

    out.push_str("\nFonts:\n");
    for category in FontCategory::all() {
        let _ = writeln!(out, "  {}:", category.label());
        for font in fonts::fonts_in_category(*category) {
            let _ = writeln!(out, "    {:<18} {}", font.name, font.stack);
        }
    }

    out
}

fn main() {
    if let Err(e) = run() {
        eprintln!("token-forge: {e}");
        process::exit(1);
    }
}
