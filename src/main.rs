//! CLI entry point for dirtally

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dirtally::output::{color_choice, to_json_string, write_quick_scan};
use dirtally::walk::progress_channel;
use dirtally::{DirectoryWalker, OutputConfig, TreeFormatter, Verbosity, WalkerConfig, print_json};
use termcolor::StandardStream;

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

/// How much of the report to print
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum VerbosityArg {
    /// Every directory, then the summary
    #[default]
    Detailed,
    /// Summary only
    Summary,
    /// Nothing (exit status only)
    Quiet,
}

impl From<VerbosityArg> for Verbosity {
    fn from(arg: VerbosityArg) -> Self {
        match arg {
            VerbosityArg::Detailed => Verbosity::Detailed,
            VerbosityArg::Summary => Verbosity::Summary,
            VerbosityArg::Quiet => Verbosity::Quiet,
        }
    }
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

#[derive(Parser, Debug)]
#[command(name = "dirtally")]
#[command(about = "Breadth-first directory statistics: file counts and file types per level")]
#[command(version)]
struct Args {
    /// Directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Include hidden files and folders (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels below the root (0 = root only)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Descend into symlinked directories (no cycle detection)
    #[arg(long = "follow-symlinks")]
    follow_symlinks: bool,

    /// How much to print: detailed, summary, quiet
    #[arg(long = "verbosity", value_name = "MODE", default_value = "detailed")]
    verbosity: VerbosityArg,

    /// Shorthand for --verbosity quiet
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Do not list subfolder names under each directory
    #[arg(long = "no-folders")]
    no_folders: bool,

    /// Subfolder names shown per directory (0 = all)
    #[arg(long = "folder-limit", default_value = "5")]
    folder_limit: usize,

    /// File types listed in the summary
    #[arg(long = "top", default_value = "5")]
    top: usize,

    /// Only print directories at this level (detailed or JSON output)
    #[arg(long = "at-level", value_name = "N", conflicts_with_all = ["quick", "structure"])]
    at_level: Option<usize>,

    /// Scan the root directory only, without descending
    #[arg(long = "quick", conflicts_with = "structure")]
    quick: bool,

    /// Print the nested folder structure with file names as JSON
    #[arg(long = "structure")]
    structure: bool,

    /// Output in JSON format
    #[arg(long = "json", conflicts_with = "quiet")]
    json: bool,

    /// Show a live counter on stderr while walking
    #[arg(long = "progress")]
    progress: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("dirtally: {:#}", e);
        process::exit(1);
    }
}

/// Reject combinations where one flag would silently cancel another.
fn check_flags(args: &Args, verbosity: Verbosity) -> anyhow::Result<()> {
    if args.json && verbosity == Verbosity::Quiet {
        anyhow::bail!("--json prints a report and cannot be combined with quiet verbosity");
    }
    if args.at_level.is_some() && !args.json && verbosity != Verbosity::Detailed {
        anyhow::bail!("--at-level prints directory blocks and needs detailed verbosity or --json");
    }
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let walker_config = WalkerConfig {
        max_depth: args.level,
        include_hidden: args.all,
        follow_symlinks: args.follow_symlinks,
        ..Default::default()
    };

    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else {
        args.verbosity.into()
    };
    check_flags(args, verbosity)?;
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        verbosity,
        show_folders: !args.no_folders,
        folder_limit: if args.folder_limit == 0 {
            None
        } else {
            Some(args.folder_limit)
        },
        top_types: args.top,
        ..Default::default()
    };

    if args.quick {
        let scan = DirectoryWalker::new(walker_config).quick_scan(&args.path)?;
        if args.json {
            print_json(&scan).context("error writing output")?;
        } else if verbosity != Verbosity::Quiet {
            let mut stdout = StandardStream::stdout(color_choice(output_config.use_color));
            write_quick_scan(&mut stdout, &args.path, &scan).context("error writing output")?;
        }
        return Ok(());
    }

    if args.structure {
        let tree = DirectoryWalker::new(walker_config).structure(&args.path)?;
        if verbosity != Verbosity::Quiet {
            println!("{}", to_json_string(&tree).context("error writing output")?);
        }
        return Ok(());
    }

    let started = Instant::now();
    let report = if args.progress {
        let (sink, rx) = progress_channel();
        let consumer = thread::spawn(move || {
            let mut stderr = std::io::stderr();
            for update in rx.iter() {
                let _ = write!(
                    stderr,
                    "\r\x1b[2K{} directories, {} files ({})",
                    update.dirs_visited,
                    update.files_counted,
                    update.current_path.display()
                );
                let _ = stderr.flush();
            }
            let _ = writeln!(stderr);
        });
        // The walker owns the only sender; dropping it ends the consumer loop
        let result = DirectoryWalker::new(walker_config)
            .with_progress(sink)
            .walk(&args.path);
        let _ = consumer.join();
        result?
    } else {
        DirectoryWalker::new(walker_config).walk(&args.path)?
    };
    let elapsed = started.elapsed();

    if args.json {
        let written = match args.at_level {
            Some(level) => print_json(&report.nodes_at_level(level)),
            None => print_json(&report),
        };
        written.context("error writing output")?;
        return Ok(());
    }

    let use_color = output_config.use_color;
    let formatter = TreeFormatter::new(output_config);
    match args.at_level {
        Some(level) => {
            let mut stdout = StandardStream::stdout(color_choice(use_color));
            formatter
                .write_nodes(&mut stdout, report.nodes_at_level(level))
                .context("error writing output")?;
        }
        None => formatter
            .print(&report, Some(elapsed))
            .context("error writing output")?,
    }
    Ok(())
}
