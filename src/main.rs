use anyhow::Context;
use clap::Parser;
use ip_filter::Pool;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ip_filter")]
#[command(about = "Sort IPv4 addresses in descending order and print filtered pools.")]
struct Opts {
    /// Separator between the address and the remaining fields of a record
    #[arg(short, long, default_value = "\t")]
    sep: String,

    /// Read records from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(opts: Opts) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    match &opts.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            filter_records(BufReader::new(f), out, &opts.sep)
        }
        None => {
            let stdin = io::stdin();
            let lock = stdin.lock();
            filter_records(lock, out, &opts.sep)
        }
    }
}

/// Reads the pool, sorts it, and writes it followed by the filtered pools.
/// Blocks written before a failing filter stay in `out`.
fn filter_records<R: BufRead, W: Write>(input: R, mut out: W, sep: &str) -> anyhow::Result<()> {
    let mut pool = Pool::read_from(input, sep).context("failed to read input")?;
    pool.sort();
    tracing::debug!(addresses = pool.len(), "pool sorted");

    write!(out, "{}", pool)?;
    let result = write_filtered(&pool, &mut out);
    out.flush()?;
    result
}

fn write_filtered<W: Write>(pool: &Pool, out: &mut W) -> anyhow::Result<()> {
    write!(out, "{}", pool.filter_prefix(&[1])?)?;
    write!(out, "{}", pool.filter_prefix(&[46, 70])?)?;
    write!(out, "{}", pool.filter_any(46))?;
    Ok(())
}

fn main() {
    let opts = Opts::parse();
    init_logging();
    if let Err(e) = run(opts) {
        tracing::error!(error = %e, "ip_filter failed");
        eprintln!("{:#}", e);
    }
}
