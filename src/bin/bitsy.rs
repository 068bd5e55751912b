//! Sums the set bits of random binary numbers with a chunked lookup table and with Kernighan's
//! algorithm, and reports the elapsed time of each.
use anyhow::{Context, Result};
use bitsy::Calculation;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bitsy", about = "Compare lookup-table and Kernighan popcounts")]
struct Args {
    /// Number of random numbers to sum
    #[arg(short, long, default_value_t = 1000)]
    samples: usize,

    /// Bit width of each generated number
    #[arg(short, long, default_value_t = 16)]
    bits: usize,

    /// Chunk width of the lookup table; must evenly divide --bits [default: --bits]
    #[arg(short, long)]
    lookup: Option<usize>,

    /// Seed for reproducible samples
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level and print the lookup table keys
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(error) = run(&args) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    #[cfg(debug_assertions)]
    println!("Debugging enabled");

    let calc = calculation(args)?;

    if args.verbose {
        let mut keys: Vec<&String> = calc.table().iter().map(|(k, _)| k).collect();
        keys.sort();
        println!("Lookup keys ({}): {:?}", keys.len(), keys);
    }

    let samples = draw_samples(&calc, args)?;

    let report = calc.run(&samples).context("failed to count set bits")?;

    println!(
        "--- N={} bits={} lookup={} ---",
        report.samples,
        calc.bits(),
        calc.lookup_bits()
    );
    println!(
        "Lookup:\t\t{} set bits in {} sec",
        report.by_lookup,
        report.lookup_elapsed.as_secs_f64()
    );
    println!(
        "Kernighan:\t{} set bits in {} sec",
        report.by_kernighan,
        report.kernighan_elapsed.as_secs_f64()
    );

    if !report.agree() {
        anyhow::bail!(
            "algorithms disagree: lookup counted {}, kernighan counted {}",
            report.by_lookup,
            report.by_kernighan
        );
    }
    Ok(())
}

/// Builds the calculation, with the lookup chunk width defaulting to the sample width.
fn calculation(args: &Args) -> Result<Calculation> {
    let lookup_bits = args.lookup.unwrap_or(args.bits);
    Calculation::new(args.bits, lookup_bits).with_context(|| {
        format!(
            "invalid configuration --bits {} --lookup {}",
            args.bits, lookup_bits
        )
    })
}

/// Draws the samples from a seeded RNG if `--seed` is given, else from the thread RNG.
fn draw_samples(calc: &Calculation, args: &Args) -> Result<Vec<String>> {
    match args.seed {
        Some(seed) => calc.sample(&mut StdRng::seed_from_u64(seed), args.samples),
        None => calc.sample(&mut thread_rng(), args.samples),
    }
    .context("failed to generate samples")
}
