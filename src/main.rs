//! shadecn command-line interface
//!
//! ```bash
//! # List the colors used by an icon
//! shadecn colors icon.svg
//!
//! # Show the colors defined by a theme
//! shadecn theme app/globals.css
//!
//! # Emit a React component with red mapped to the primary token
//! shadecn transform icon.svg --map '#ff0000=primary' --remove-sizing
//!
//! # Swap colors in the raw SVG
//! cat icon.svg | shadecn recolor - --set '#ff0000=#00ff00' --out-dir dist
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shadecn::{import, Config, OutputKind, Session, TransformSettings, KEEP_ORIGINAL};

/// Remap SVG colors onto a shadcn theme and emit clean SVG or React components
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./shadecn.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the fill and stroke colors of an SVG
    Colors {
        /// SVG file, or `-` for stdin
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the colors resolved from a theme CSS file
    Theme {
        /// CSS file with custom properties
        css: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the transform pipeline
    Transform {
        /// SVG file, or `-` for stdin
        input: PathBuf,

        /// Theme CSS file, checked against the mapped tokens
        #[arg(long)]
        theme: Option<PathBuf>,

        /// Map an SVG color to a theme token (`COLOR=TOKEN`, TOKEN `none` unmaps)
        #[arg(short = 'm', long = "map", value_name = "COLOR=TOKEN", value_parser = parse_pair)]
        mappings: Vec<(String, String)>,

        #[command(flatten)]
        flags: SettingFlags,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Replace colors in the original SVG
    Recolor {
        /// SVG file, or `-` for stdin
        input: PathBuf,

        /// Color replacement (`OLD=NEW`)
        #[arg(short = 's', long = "set", value_name = "OLD=NEW", value_parser = parse_pair, required = true)]
        replacements: Vec<(String, String)>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Overrides for the `[settings]` table of the config file.
#[derive(Args, Debug)]
struct SettingFlags {
    /// Wrap the output in a React component
    #[arg(long, overrides_with = "no_react")]
    react: bool,

    /// Emit plain SVG
    #[arg(long, overrides_with = "react")]
    no_react: bool,

    /// Pretty-print the output
    #[arg(long, overrides_with = "no_format")]
    format: bool,

    /// Leave the output unformatted
    #[arg(long, overrides_with = "format")]
    no_format: bool,

    /// Remove id attributes
    #[arg(long)]
    remove_ids: bool,

    /// Remove class attributes
    #[arg(long)]
    remove_classes: bool,

    /// Remove the root width and height
    #[arg(long)]
    remove_sizing: bool,
}

impl SettingFlags {
    fn apply(&self, mut settings: TransformSettings) -> TransformSettings {
        if self.react {
            settings.react = true;
        }
        if self.no_react {
            settings.react = false;
        }
        if self.format {
            settings.format = true;
        }
        if self.no_format {
            settings.format = false;
        }
        settings.remove_ids |= self.remove_ids;
        settings.remove_classes |= self.remove_classes;
        settings.remove_sizing |= self.remove_sizing;
        settings
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Write into this directory using the default artifact name
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => {
            Ok((key.to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{}`", s)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Colors { input, json } => {
            let session = Session::new(read_input(&input)?);
            if json {
                println!("{}", serde_json::to_string_pretty(session.colors())?);
            } else if session.colors().is_empty() {
                eprintln!("No colors detected");
            } else {
                for color in session.colors() {
                    println!("{}", color);
                }
            }
        }

        Command::Theme { css, json } => {
            let colors = shadecn::extract_theme_colors(&read_text(&css)?)?;
            info!("Extracted {} theme colors", colors.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else {
                for (name, hex) in colors.iter() {
                    println!("{}\t{}", name, hex);
                }
            }
        }

        Command::Transform {
            input,
            theme,
            mappings,
            flags,
            output,
        } => {
            let settings = flags.apply(config.settings);
            let mut session = Session::new(read_input(&input)?);

            if let Some(css) = theme.or(config.theme.css) {
                let count = session.load_theme(&read_text(&css)?)?;
                info!("Extracted {} theme colors", count);
            }

            let configured = config.theme.mapping.iter().map(|(c, t)| (c.as_str(), t.as_str()));
            let requested = mappings.iter().map(|(c, t)| (c.as_str(), t.as_str()));
            for (color, token) in configured.chain(requested) {
                if !session.colors().iter().any(|c| c == color) {
                    tracing::warn!("{} does not appear as a fill or stroke color", color);
                }
                let theme_colors = session.theme_colors();
                if !theme_colors.is_empty()
                    && token != KEEP_ORIGINAL
                    && !theme_colors.contains_key(token)
                {
                    tracing::warn!("--{} is not defined by the theme", token);
                }
                session.map_theme_color(color, token);
            }

            let text = session
                .transform(&settings)
                .context("Failed to transform SVG")?;
            write_output(&output, OutputKind::for_settings(&settings), &text)?;
        }

        Command::Recolor {
            input,
            replacements,
            output,
        } => {
            let mut session = Session::new(read_input(&input)?);
            for (old, new) in &replacements {
                session.set_color(old, new);
            }
            write_output(&output, OutputKind::Original, session.current())?;
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(import::from_paste(&buf)?);
    }
    Ok(import::from_file(path)?)
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_output(args: &OutputArgs, kind: OutputKind, text: &str) -> anyhow::Result<()> {
    let target = match (&args.output, &args.out_dir) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(dir)) => {
            if dir.exists() && !dir.is_dir() {
                bail!("{} is not a directory", dir.display());
            }
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            Some(dir.join(kind.file_name()))
        }
        (None, None) => None,
    };

    match target {
        Some(path) => {
            fs::write(&path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
