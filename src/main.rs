//! apiview — render an OpenAPI JSON description as a collapsible tree.
//!
//! Two modes:
//!
//! - **one-shot**: `apiview spec.json -e /users -f html -o users.html`
//! - **interactive**: `apiview -i spec.json`, then `toggle /users`, `tab models`, ...

use anyhow::{bail, Context, Result};
use apiview::render;
use apiview::session;
use apiview::{Event, ViewMode, Viewer};
use clap::{ArgAction, Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "apiview",
    about = "Render an OpenAPI JSON description as a collapsible endpoint and model tree"
)]
struct Cli {
    /// Input JSON file. Reads from stdin when omitted or "-".
    file: Option<PathBuf>,

    /// Output format: text (default), html, markdown, json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Which tree to show
    #[arg(short = 'm', long = "view", value_enum, default_value_t = ViewMode::Endpoints)]
    view: ViewMode,

    /// Expand an endpoint path. Can be specified multiple times.
    #[arg(short = 'e', long = "expand", value_name = "PATH")]
    expand: Vec<String>,

    /// Expand a schema in the models tree. Can be specified multiple times.
    #[arg(short = 's', long = "expand-model", value_name = "NAME")]
    expand_models: Vec<String>,

    /// Expand every path and schema
    #[arg(short = 'a', long)]
    expand_all: bool,

    /// Write the rendered page to a file instead of stdout. When given a
    /// directory, the file is named after the input with the format's extension.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Read commands from stdin and re-render after each one
    #[arg(short = 'i', long, conflicts_with = "output")]
    interactive: bool,

    /// Colorize text output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Auto leaves NO_COLOR / CLICOLOR_FORCE and tty detection to `colored`.
    let color = match cli.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
            true
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
            false
        }
        ColorChoice::Auto => {
            cli.output.is_none() && colored::control::SHOULD_COLORIZE.should_colorize()
        }
    };
    let renderer = render::create_renderer(&cli.format, color)?;

    let mut viewer = Viewer::new();
    if let Some(text) = read_input(cli.file.as_deref(), cli.interactive)? {
        viewer.dispatch(Event::InputChanged(text));
    }
    viewer.dispatch(Event::SelectMode(cli.view));
    for path in &cli.expand {
        if !viewer.paths().is_expanded(path) {
            viewer.dispatch(Event::TogglePath(path.clone()));
        }
    }
    for name in &cli.expand_models {
        if !viewer.schemas().is_expanded(name) {
            viewer.dispatch(Event::ToggleSchema(name.clone()));
        }
    }
    if cli.expand_all {
        viewer.expand_all();
    }

    if cli.interactive {
        let stdin = io::stdin();
        return session::run(&mut viewer, renderer.as_ref(), stdin.lock(), io::stdout().lock())
            .context("interactive session failed");
    }

    tracing::info!(format = %cli.format, mode = %cli.view, "rendering");
    let page = renderer.render(&viewer.render())?;
    match cli.output {
        Some(ref output) => {
            let path = output_path(output, cli.file.as_deref(), renderer.file_extension());
            fs::write(&path, &page)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => io::stdout()
            .lock()
            .write_all(page.as_bytes())
            .context("failed to write stdout")?,
    }

    // The page already shows the alert; still signal failure to the caller.
    if let Some(err) = viewer.error() {
        bail!("{}", err);
    }
    Ok(())
}

/// Read the document text. Interactive mode without a file starts empty so
/// stdin stays free for commands.
fn read_input(file: Option<&Path>, interactive: bool) -> Result<Option<String>> {
    match file {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Some(text))
        }
        _ if interactive => Ok(None),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(Some(input))
        }
    }
}

/// `-o` naming a directory gets `<input stem>.<ext>` inside it; stdin input
/// is named `api`.
fn output_path(output: &Path, input: Option<&Path>, ext: &str) -> PathBuf {
    if !output.is_dir() {
        return output.to_path_buf();
    }
    let stem = input
        .filter(|path| *path != Path::new("-"))
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .unwrap_or("api");
    output.join(format!("{}.{}", stem, ext))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
