//! Command-line front end for the Amharic stemmer.
//!
//! ## Usage
//!
//! ```bash
//! # Stem a file (or stdin), line by line
//! fidel-stem stem corpus.txt
//! echo "ልጆች እና ወንድሞቻችን" | fidel-stem stem
//!
//! # Override stems and tune the pipeline
//! fidel-stem stem corpus.txt --lexicon exceptions.json --config stemmer.json --stats
//!
//! # Show every step for a few words
//! fidel-stem explain እሰብኦች ሰባበረ
//!
//! # Measure throughput on a large file
//! fidel-stem bench corpus.txt
//! ```
//!
//! `--config` takes a JSON object with any of the `StemmerConfig` fields;
//! missing fields keep their defaults. Logging goes to stderr and follows
//! `RUST_LOG`, falling back to `--log-level`.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fidel_core::{MapLexicon, StemStats, Stemmer, StemmerConfig};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Parser)]
#[command(name = "fidel-stem", version, about = "Amharic morphological stemmer")]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stem text line by line
    Stem {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
        /// JSON object of word -> stem overrides
        #[arg(long)]
        lexicon: Option<PathBuf>,
        /// JSON stemmer configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print counters to stderr when done
        #[arg(long)]
        stats: bool,
    },
    /// Show how individual words are stemmed
    Explain {
        /// Words to trace
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Measure normalization and stemming throughput
    Bench {
        /// Input file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    match cli.command {
        Command::Stem {
            file,
            lexicon,
            config,
            stats,
        } => run_stem(file.as_deref(), lexicon.as_deref(), config.as_deref(), stats),
        Command::Explain { words } => run_explain(&words),
        Command::Bench { file } => run_bench(&file),
    }
}

fn load_config(path: Option<&Path>) -> Result<StemmerConfig> {
    let Some(path) = path else {
        return Ok(StemmerConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(?config, "loaded stemmer config");
    Ok(config)
}

fn load_lexicon(path: Option<&Path>) -> Result<MapLexicon> {
    let Some(path) = path else {
        return Ok(MapLexicon::new());
    };
    let lexicon = MapLexicon::from_path(path)
        .with_context(|| format!("loading lexicon {}", path.display()))?;
    info!(entries = lexicon.len(), "loaded exception lexicon");
    Ok(lexicon)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn run_stem(
    file: Option<&Path>,
    lexicon: Option<&Path>,
    config: Option<&Path>,
    print_stats: bool,
) -> Result<()> {
    let stemmer = Stemmer::standard()?
        .with_config(load_config(config)?)
        .with_lexicon(load_lexicon(lexicon)?);
    let input = read_input(file)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut total = StemStats::default();

    for line in input.lines() {
        let (stemmed, stats) = stemmer.stem_text_with_stats(line);
        total.merge(&stats);
        writeln!(out, "{stemmed}")?;
    }
    out.flush()?;

    if print_stats {
        eprintln!("{total}");
    }
    Ok(())
}

fn run_explain(words: &[String]) -> Result<()> {
    let stemmer = Stemmer::standard()?;
    for word in words {
        print!("{}", stemmer.trace_word(word));
    }
    Ok(())
}

fn run_bench(path: &Path) -> Result<()> {
    let stemmer = Stemmer::standard()?;

    println!("Loading file...");
    let input = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let lines: Vec<&str> = input.lines().collect();

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Lines:     {}\n", fmt_count(lines.len() as u64));

    bench_normalize(&stemmer, &input);
    let tokens = bench_stem(&stemmer, &lines, input.len());
    bench_batch(&stemmer, &lines, input.len(), tokens);

    Ok(())
}

fn bench_normalize(stemmer: &Stemmer, input: &str) {
    let normalizer = stemmer.tables().normalizer();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| {
        normalizer.normalize_into(input, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.normalize_into(input, &mut out);
        std::hint::black_box(&out);
    });

    print_perf("Normalize", input.len(), elapsed, 0);
}

/// Returns the number of tokens stemmed per pass.
fn bench_stem(stemmer: &Stemmer, lines: &[&str], bytes: usize) -> u64 {
    println!("=== Stem (sequential) ===");

    warmup(|| {
        for line in lines {
            std::hint::black_box(stemmer.stem_text(line));
        }
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        for line in lines {
            let (stemmed, stats) = stemmer.stem_text_with_stats(line);
            local += stats.tokens as u64;
            std::hint::black_box(stemmed);
        }
        tokens = local;
    });

    print_perf("Stem", bytes, elapsed, tokens);
    tokens
}

fn bench_batch(stemmer: &Stemmer, lines: &[&str], bytes: usize, tokens: u64) {
    println!("=== Stem (parallel batch) ===");

    warmup(|| {
        std::hint::black_box(stemmer.stem_batch(lines));
    });

    let elapsed = measure(|| {
        std::hint::black_box(stemmer.stem_batch(lines));
    });

    print_perf("Batch", bytes, elapsed, tokens);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.2} MiB/s", mib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
