use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lexfind::corpus::Corpus;
use lexfind::index::{SearchMode, SuffixIndex, SuffixIndexBuilder};
use lexfind::output::{color_choice, print_comparisons, print_definitions, print_suggestions};
use lexfind::query::{Comparison, sample_patterns, suggest, verify_patterns};
use lexfind::repl::Repl;
use lexfind::utils::progress::{build_bar, load_spinner};
use lexfind::utils::{AppConfig, get_config_path, logging};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use termcolor::StandardStream;
use tracing::info;

#[derive(Parser)]
#[command(name = "lexfind")]
#[command(about = "Dictionary lookup over a generalized suffix trie")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    corpus: CorpusArgs,

    /// Re-check every match with a literal substring test
    #[arg(long, global = true)]
    verify: bool,

    /// When to use colors
    #[arg(long, global = true, value_enum)]
    color: Option<ColorArg>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct CorpusArgs {
    /// Word file (JSON records, JSON strings, or .txt with one word per line)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Record field holding the indexed key
    #[arg(long, global = true)]
    key_field: Option<usize>,

    /// Record field holding the display form
    #[arg(long, global = true)]
    display_field: Option<usize>,

    /// Record field holding the definition
    #[arg(long, global = true)]
    definition_field: Option<usize>,

    /// Maximum number of matches ranked per query
    #[arg(short, long, global = true)]
    limit: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl ColorArg {
    fn as_str(self) -> &'static str {
        match self {
            ColorArg::Auto => "auto",
            ColorArg::Always => "always",
            ColorArg::Never => "never",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List words containing a pattern
    Search {
        /// Substring to look for (may be empty)
        pattern: String,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the definitions of a word
    Define {
        /// Word to look up
        word: String,
    },
    /// Interactive lookup (default when no subcommand is given)
    Repl,
    /// Compare indexed search against a brute-force scan
    Bench {
        /// Patterns to time (defaults to a sample drawn from the corpus)
        patterns: Vec<String>,

        /// Longest sampled pattern, in symbols
        #[arg(long, default_value_t = 3)]
        max_len: usize,

        /// Number of sampled patterns to time
        #[arg(long, default_value_t = 20)]
        samples: usize,

        /// Number of sampled patterns checked for agreement
        #[arg(long, default_value_t = 2000)]
        checks: usize,
    },
    /// Show index statistics
    Stats,
    /// Show or initialize the configuration file
    Config {
        /// Write the default configuration if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Effective settings after merging CLI flags over the config file
struct Settings {
    config: AppConfig,
    mode: SearchMode,
    color: termcolor::ColorChoice,
}

impl Settings {
    fn resolve(cli: &Cli, mut config: AppConfig) -> Self {
        let args = &cli.corpus;
        if let Some(file) = &args.file {
            config.words_file = Some(file.clone());
        }
        if let Some(key) = args.key_field {
            config.key_field = key;
        }
        if let Some(display) = args.display_field {
            config.display_field = display;
        }
        if let Some(definition) = args.definition_field {
            config.definition_field = definition;
        }
        if let Some(limit) = args.limit {
            config.suggestion_limit = limit;
        }
        if cli.verify {
            config.verify_matches = true;
        }

        let color = color_choice(cli.color.map(ColorArg::as_str), config.color);
        let mode = config.search_mode();

        Self {
            config,
            mode,
            color,
        }
    }

    fn stdout(&self) -> StandardStream {
        StandardStream::stdout(self.color)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::resolve(&cli, AppConfig::load()?);

    match cli.command {
        Some(Commands::Search { pattern, json }) => {
            let (corpus, index) = load_index(&settings)?;
            let suggestions = suggest(
                &index,
                &corpus.lexicon,
                &pattern,
                settings.mode,
                settings.config.suggestion_limit,
            );

            if json {
                let text = serde_json::to_string_pretty(&suggestions)
                    .context("Failed to serialize suggestions")?;
                println!("{}", text);
            } else {
                print_suggestions(&mut settings.stdout(), &suggestions, &pattern)?;
            }
        }
        Some(Commands::Define { word }) => {
            let (_, corpus) = load_corpus(&settings)?;
            let entries = corpus.lexicon.definitions(&word);
            if entries.is_empty() {
                eprintln!("No definitions for {:?}", word);
            } else {
                print_definitions(&mut settings.stdout(), &word, entries)?;
            }
        }
        Some(Commands::Repl) | None => {
            let (corpus, index) = load_index(&settings)?;
            let repl = Repl::new(
                &index,
                &corpus.lexicon,
                settings.mode,
                settings.config.suggestion_limit,
            );
            let stdin = io::stdin();
            let searches = repl.run(stdin.lock(), &mut settings.stdout())?;
            info!(searches, "session finished");
        }
        Some(Commands::Bench {
            patterns,
            max_len,
            samples,
            checks,
        }) => {
            let (corpus, index) = load_index(&settings)?;
            run_bench(
                &settings,
                &corpus,
                &index,
                &patterns,
                max_len,
                samples,
                checks,
            )?;
        }
        Some(Commands::Stats) => {
            let (corpus, index) = load_index(&settings)?;
            let source = settings.config.words_file.clone().unwrap_or_default();
            lexfind::index::stats::show_stats(&index, &source, corpus.lexicon.len())?;
        }
        Some(Commands::Config { init }) => {
            show_config(&settings.config, init)?;
        }
    }

    Ok(())
}

/// Read the word file named by the settings
fn load_corpus(settings: &Settings) -> Result<(PathBuf, Corpus)> {
    let Some(path) = settings.config.words_file.clone() else {
        bail!("No word file given (pass --file or set words_file)");
    };

    let spinner = load_spinner("Loading words...");
    let corpus = Corpus::load(&path, settings.config.field_layout());
    spinner.finish_and_clear();

    Ok((path, corpus?))
}

/// Read the word file and build the suffix index over it
fn load_index(settings: &Settings) -> Result<(Corpus, SuffixIndex)> {
    let (path, corpus) = load_corpus(settings)?;

    let start = Instant::now();
    let mut builder = SuffixIndexBuilder::with_capacity(corpus.len());
    builder.add_words(corpus.words.iter().cloned());

    let bar = build_bar();
    let index = builder.build_with_progress(&bar);
    bar.finish_and_clear();

    info!(
        path = %path.display(),
        words = index.len(),
        nodes = index.stats().node_count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "index ready"
    );

    Ok((corpus, index))
}

fn run_bench(
    settings: &Settings,
    corpus: &Corpus,
    index: &SuffixIndex,
    patterns: &[String],
    max_len: usize,
    samples: usize,
    checks: usize,
) -> Result<()> {
    let timed: Vec<String> = if patterns.is_empty() {
        sample_patterns(&corpus.words, max_len, samples)
    } else {
        patterns.to_vec()
    };

    let comparisons: Vec<Comparison> = timed
        .iter()
        .map(|pattern| Comparison::run(index, &corpus.words, pattern, settings.mode))
        .collect();

    let mut out = settings.stdout();
    print_comparisons(&mut out, &comparisons)?;

    let checked = sample_patterns(&corpus.words, max_len, checks);
    let mismatches = verify_patterns(index, &corpus.words, &checked, settings.mode);

    writeln!(out)?;
    writeln!(
        out,
        "Checked {} sampled patterns against brute force: {} mismatch(es)",
        checked.len(),
        mismatches.len()
    )?;

    let timed_diffs = comparisons.iter().filter(|c| !c.equal).count();
    if timed_diffs > 0 || !mismatches.is_empty() {
        for pattern in mismatches.iter().take(10) {
            eprintln!("mismatch: {:?}", pattern);
        }
        bail!(
            "Index disagrees with brute force on {} pattern(s)",
            timed_diffs + mismatches.len()
        );
    }

    Ok(())
}

fn show_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = get_config_path()?;

    if init {
        if path.exists() {
            println!("Config already exists: {}", path.display());
        } else {
            AppConfig::default().save_to(&path)?;
            println!("Wrote default config: {}", path.display());
        }
        return Ok(());
    }

    println!("Config file: {}", path.display());
    println!(
        "{}",
        serde_json::to_string_pretty(config).context("Failed to serialize config")?
    );
    Ok(())
}
