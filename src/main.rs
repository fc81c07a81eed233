//! CLI entry point for foldtree

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use foldtree::{
    DepthInference, Error, ExportError, ExportFormat, OutputConfig, SETTINGS_FILE, Settings,
    SymbolStyle, TreeFormatter, TreeNode, WalkSession, export_to_file, output, tree_to_html,
    tree_to_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Target of the `convert` subcommand
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ConvertTarget {
    #[default]
    Json,
    Html,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Rebuild JSON or HTML from a previously exported text tree
    Convert {
        /// Text tree to read
        input: PathBuf,

        /// Output format
        #[arg(long = "to", value_enum, default_value_t = ConvertTarget::Json)]
        to: ConvertTarget,

        /// Symbol style the text was drawn with (default: any named style)
        #[arg(short, long, value_enum)]
        style: Option<SymbolStyle>,

        /// Width of one indentation level in characters
        #[arg(long = "indent-width", value_name = "N")]
        indent_width: Option<usize>,

        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "foldtree")]
#[command(about = "Render a directory tree as text, JSON, HTML or Markdown")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    cmd: Option<Cmd>,

    /// Directory to display
    path: Option<PathBuf>,

    /// Include hidden entries (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<String>,

    /// Exclude entries with this exact name (repeatable, or comma-separated)
    #[arg(short = 'I', long = "exclude", value_name = "NAME", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Do not apply the default exclusions (node_modules, .git, ...)
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Show size and modification time of files
    #[arg(short, long)]
    metadata: bool,

    /// Tree symbol style
    #[arg(short, long, value_enum)]
    style: Option<SymbolStyle>,

    /// Output format (default: from --output extension, else text)
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Write the tree to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Load settings from FILE before applying other options [default: ./settings.json if present]
    #[arg(long = "settings", value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Save the effective settings to FILE
    #[arg(long = "save-settings", value_name = "FILE")]
    save_settings: Option<PathBuf>,

    /// Highlight case-insensitive matches of TERM in text output
    #[arg(long = "highlight", value_name = "TERM")]
    highlight: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let result = match &args.cmd {
        Some(Cmd::Convert {
            input,
            to,
            style,
            indent_width,
            output,
        }) => run_convert(input, *to, *style, *indent_width, output.as_deref()),
        None => run_tree(&args),
    };

    if let Err(e) = result {
        eprintln!("foldtree: {}", e);
        process::exit(1);
    }
}

/// Merge the settings file with command line options.
///
/// Without `--settings`, `settings.json` in the working directory is used
/// when present.
fn effective_settings(args: &Args) -> Result<Settings, Error> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(Path::new(SETTINGS_FILE))?,
    };

    if args.no_default_excludes {
        settings.exclusions.clear();
    }
    if !args.exclude.is_empty() {
        let mut extra: Vec<&str> = settings
            .additional_exclusions
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        extra.extend(args.exclude.iter().map(String::as_str));
        settings.additional_exclusions = extra.join(", ");
    }
    if let Some(level) = &args.level {
        settings.max_depth = level.clone();
    }
    if args.metadata {
        settings.show_metadata = true;
    }
    if let Some(style) = args.style {
        settings.symbols = style.name().to_string();
    }
    Ok(settings)
}

fn run_tree(args: &Args) -> Result<(), Error> {
    let settings = effective_settings(args)?;
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let mut config = settings.to_config(root)?;
    config.include_hidden = args.all;

    if let Some(path) = &args.save_settings {
        settings.save(path)?;
        eprintln!("foldtree: saved settings to {}", path.display());
    }

    let symbols = config.symbols.clone();
    let mut session = WalkSession::new();
    session.submit(config);
    let tree = session.wait_latest().ok_or(Error::Cancelled)?;

    let format = args
        .format
        .or_else(|| args.output.as_deref().map(ExportFormat::from_path))
        .unwrap_or_default();

    match &args.output {
        Some(path) => {
            export_to_file(path, format, &tree, &symbols)?;
            report_export(path, &tree);
        }
        None if format == ExportFormat::Text => {
            let formatter = TreeFormatter::new(OutputConfig {
                use_color: should_use_color(args.color),
                symbols,
                highlight: args.highlight.clone(),
            });
            formatter.print(&tree)?;
        }
        None => {
            println!("{}", format.render(&tree, &symbols)?);
        }
    }
    Ok(())
}

fn report_export(path: &Path, tree: &TreeNode) {
    let (dirs, files) = tree.summary();
    eprintln!(
        "foldtree: wrote {} ({} directories, {} files)",
        path.display(),
        dirs,
        files
    );
}

fn run_convert(
    input: &Path,
    to: ConvertTarget,
    style: Option<SymbolStyle>,
    indent_width: Option<usize>,
    output_path: Option<&Path>,
) -> Result<(), Error> {
    let text = fs::read_to_string(input).map_err(|source| ExportError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let mut inference = match style {
        Some(style) => DepthInference::for_symbols(&style.symbols()),
        None => DepthInference::default(),
    };
    if let Some(width) = indent_width {
        inference = inference.with_unit_width(width);
    }

    let rendered = match to {
        ConvertTarget::Json => match tree_to_json(&text, &inference) {
            Some(node) => output::to_pretty_json(&node).map_err(ExportError::from)?,
            None => {
                log::warn!("{} contains no tree lines", input.display());
                String::new()
            }
        },
        ConvertTarget::Html => tree_to_html(&text, &inference),
    };

    match output_path {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| ExportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!("foldtree: wrote {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
