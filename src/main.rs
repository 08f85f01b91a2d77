//! Graphclip CLI
//!
//! Usage:
//!   graphclip [OPTIONS] [FILE]
//!
//! Reads DOT source from FILE (or stdin), lays it out as SVG via the external
//! Graphviz engine, splices captured page styles into the markup, and prints
//! the result or copies it to the system clipboard.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use graphclip::clipboard::write_or_log;
use graphclip::inliner::InlinerConfig;
use graphclip::layout::DEFAULT_ENGINE;
use graphclip::{
    export_svg, ExportConfig, FontAsset, GraphvizEngine, LayoutOpts, SheetSelector,
    StyleSnapshot, SystemClipboard,
};

#[derive(Parser)]
#[command(name = "graphclip")]
#[command(about = "Render Graphviz DOT to self-contained SVG with inlined page styles")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Stylesheet snapshot file (TOML format)
    #[arg(short, long)]
    styles: Option<PathBuf>,

    /// Select the sheet registered under this label instead of the heuristic
    #[arg(short, long)]
    label: Option<String>,

    /// Treat the input as already-rendered SVG markup and skip layout
    #[arg(long)]
    raw_svg: bool,

    /// Splice at a placeholder token instead of inserting a <style> block
    #[arg(
        long,
        value_name = "TOKEN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = graphclip::inliner::PLACEHOLDER_TOKEN
    )]
    placeholder: Option<String>,

    /// Font file to embed as an @font-face declaration
    #[arg(long, value_name = "FILE", requires = "font_family")]
    embed_font: Option<PathBuf>,

    /// Font family name for the embedded font
    #[arg(long, value_name = "NAME", requires = "embed_font")]
    font_family: Option<String>,

    /// Layout engine binary
    #[arg(short, long, default_value = DEFAULT_ENGINE)]
    engine: String,

    /// Copy the result to the system clipboard instead of printing it
    #[arg(short, long)]
    copy: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    // Lay out DOT source unless the input is already SVG markup
    let svg = if cli.raw_svg {
        source
    } else {
        let engine = match GraphvizEngine::load_with_engine(&cli.engine).await {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        };
        match engine.layout(&source, &LayoutOpts::default()).await {
            Ok(svg) => svg,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    // Inline styles when a snapshot is provided
    let output = match &cli.styles {
        Some(path) => {
            let snapshot = match StyleSnapshot::from_file(path) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    eprintln!("Error loading styles '{}': {}", path.display(), e);
                    return ExitCode::FAILURE;
                }
            };
            let config = match export_config(&cli) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            match export_svg(&svg, &snapshot, &config) {
                Ok(output) => output,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => svg,
    };

    if cli.copy {
        // Clipboard failure is logged, not surfaced: the write is
        // fire-and-forget by contract.
        match SystemClipboard::new() {
            Ok(mut sink) => write_or_log(&mut sink, &output),
            Err(e) => log::error!("clipboard write failed: {}", e),
        }
    } else {
        println!("{}", output);
    }

    ExitCode::SUCCESS
}

fn export_config(cli: &Cli) -> Result<ExportConfig, graphclip::inliner::FontError> {
    let mut selector = SheetSelector::new();
    if let Some(label) = &cli.label {
        selector = selector.with_label(label.as_str());
    }

    let mut inliner = InlinerConfig::new().with_selector(selector);
    inliner = match &cli.placeholder {
        Some(token) => inliner.with_placeholder(token.as_str()),
        None => inliner.with_style_tag_mode(),
    };
    if let (Some(path), Some(family)) = (&cli.embed_font, &cli.font_family) {
        inliner = inliner.with_font(FontAsset::from_file(family.as_str(), path)?);
    }

    Ok(ExportConfig::new().with_inliner(inliner))
}
