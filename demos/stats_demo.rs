use clap::Parser;
use fib_chain::HashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Fills a `HashTable<u64, u64>` and reports how its chains are distributed.
#[derive(Parser, Debug)]
struct Args {
    /// Number of keys to insert.
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: usize,

    /// Draw random keys instead of `0..entries`.
    #[arg(short = 'r', long = "random")]
    random: bool,

    /// Seed for `--random` key generation.
    #[arg(short = 's', long = "seed", default_value_t = 0)]
    seed: u64,
}

fn print_histogram(hist: &[usize]) {
    let max = hist.iter().copied().max().unwrap_or(0);
    if max == 0 {
        println!("chain histogram: empty");
        return;
    }

    let max_bar = 60usize;
    println!("chain histogram (buckets per chain length):");
    for (length, &count) in hist.iter().enumerate() {
        let bar = "█".repeat((count * max_bar).div_ceil(max));
        println!("{length:>3} | {bar} ({count})");
    }
}

fn main() {
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut table: HashTable<u64, u64> = HashTable::new();
    println!("Filling table with {} entries...", args.entries);
    for i in 0..args.entries as u64 {
        let key = if args.random { rng.random() } else { i };
        table.insert(key, i);
    }

    println!(
        "Final load factor: {:.2}% over {} buckets",
        table.load_factor() * 100.0,
        table.capacity()
    );

    print_histogram(&table.chain_histogram());
    table.debug_stats().print();
}
