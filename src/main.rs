use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sufx::build::{BuildOptions, build_tree};
use sufx::config::BuildConfig;
use sufx::tree::{ROOT, SuffixTree, TreeStats};
use sufx::utils::{Input, prepare};

#[derive(Parser)]
#[command(name = "sufx")]
#[command(about = "Build suffix trees over files and report substring statistics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    build: BuildArgs,
}

#[derive(Args)]
struct BuildArgs {
    /// JSON build configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Terminator byte appended after the input (must not occur in it)
    #[arg(short, long, global = true)]
    terminator: Option<char>,

    /// Bytes fed to the tree per batch
    #[arg(short, long, global = true)]
    batch_size: Option<usize>,

    /// Lowercase ASCII input before indexing
    #[arg(short, long, global = true)]
    ignore_case: bool,

    /// Print build diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tree shape and substring statistics
    Stats {
        /// Input file (`-` for stdin)
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Count distinct substrings
    Count {
        /// Input file (`-` for stdin)
        file: PathBuf,
    },
    /// Check whether patterns occur in the input
    Contains {
        /// Input file (`-` for stdin)
        file: PathBuf,

        /// Patterns to look up
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// List the symbols leaving a node
    Alphabet {
        /// Input file (`-` for stdin)
        file: PathBuf,

        /// Node id (default: root)
        #[arg(short, long, default_value_t = ROOT)]
        node: usize,
    },
    /// Walk a path over single-symbol edges only (debugging aid)
    Follow {
        /// Input file (`-` for stdin)
        file: PathBuf,

        /// Path to follow from the root
        path: String,
    },
}

/// Everything `stats --json` prints
#[derive(Serialize)]
struct StatsReport {
    #[serde(flatten)]
    tree: TreeStats,
    /// Input symbols, excluding the appended terminator
    input_len: u64,
    distinct_substrings: u64,
    suffixes: u64,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(&cli.build)?;
    let options = BuildOptions {
        verbose: cli.build.verbose,
        progress: cli.build.verbose,
    };

    match cli.command {
        Commands::Stats { file, json } => {
            let tree = load_tree(&file, &config, options)?;
            show_stats(&tree, config.terminator, json)?;
        }
        Commands::Count { file } => {
            let tree = load_tree(&file, &config, options)?;
            println!("{}", tree.count_substrings(config.terminator).total);
        }
        Commands::Contains { file, patterns } => {
            let tree = load_tree(&file, &config, options)?;
            let mut all_found = true;
            for pattern in &patterns {
                let needle = if config.case_insensitive {
                    pattern.to_ascii_lowercase()
                } else {
                    pattern.clone()
                };
                // The terminator is not part of the input
                let found = !needle.as_bytes().contains(&config.terminator)
                    && tree.contains(needle.as_bytes());
                all_found &= found;
                println!("{}\t{}", if found { "yes" } else { "no" }, pattern);
            }
            if !all_found {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Alphabet { file, node } => {
            let tree = load_tree(&file, &config, options)?;
            if node >= tree.node_count() {
                anyhow::bail!("Node {} out of range (tree has {} nodes)", node, tree.node_count());
            }
            let symbols: Vec<String> = tree
                .alphabet(node)
                .into_iter()
                .map(|b| (b as char).escape_default().to_string())
                .collect();
            println!("{}", symbols.join(" "));
        }
        Commands::Follow { file, path } => {
            let tree = load_tree(&file, &config, options)?;
            match tree.follow(path.as_bytes()) {
                Ok(node) => println!("{}", node),
                Err(e) => {
                    println!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Config file first, then command line overrides
fn resolve_config(args: &BuildArgs) -> Result<BuildConfig> {
    let mut config = match &args.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };

    if let Some(t) = args.terminator {
        config.terminator = u8::try_from(t)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("Terminator {:?} is not a single ASCII byte", t))?;
    }
    if let Some(size) = args.batch_size {
        config.batch_size = size;
    }
    if args.ignore_case {
        config.case_insensitive = true;
    }

    Ok(config)
}

fn load_tree(path: &Path, config: &BuildConfig, options: BuildOptions) -> Result<SuffixTree<u8>> {
    let input = Input::open(path)?;
    let text = prepare(&input, config)
        .with_context(|| format!("Cannot index {}", path.display()))?;
    if options.verbose {
        eprintln!("sufx: indexing {} ({} bytes)", path.display(), text.len());
    }
    Ok(build_tree(&text, config, options))
}

fn show_stats(tree: &SuffixTree<u8>, terminator: u8, json: bool) -> Result<()> {
    let report = StatsReport {
        tree: tree.stats(),
        input_len: tree.len().saturating_sub(1) as u64,
        distinct_substrings: tree.count_substrings(terminator).total,
        suffixes: tree.count_suffixes(terminator)?.total,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Suffix Tree Statistics");
    println!("======================");
    println!();
    println!("Input length:         {}", format_size(report.input_len));
    println!("Terminated length:    {}", report.tree.text_len);
    println!("Nodes:                {}", report.tree.node_count);
    println!("  internal:           {}", report.tree.internal_nodes);
    println!("  leaves:             {}", report.tree.leaf_nodes);
    println!("Edges:                {}", report.tree.edge_count);
    println!("Distinct substrings:  {}", report.distinct_substrings);
    println!("Suffixes:             {}", report.suffixes);

    Ok(())
}

/// Format a symbol count as a human readable size
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
