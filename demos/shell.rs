use std::io;
use std::io::BufRead;
use std::io::Write;

use clap::Parser;
use env_logger::Builder;
use fib_chain::HashTable;
use log::LevelFilter;

/// Interactive front end for a `HashTable<i64, i64>`.
#[derive(Parser, Debug)]
struct Args {
    /// Initial number of buckets (rounded up to a power of two, at least 8).
    #[arg(short = 'c', long = "capacity", default_value_t = 8)]
    capacity: usize,
}

fn initialize_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("fib_chain", LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env();
    let _ = builder.try_init();
}

/// Prints `message` and reads one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads integers until one parses. `None` on end of input.
fn prompt_i64(input: &mut impl BufRead, message: &str) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = prompt(input, message)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("'{line}' is not an integer, please try again."),
        }
    }
}

fn print_menu() {
    println!("\nHash Table Operations:");
    println!("1. Insert");
    println!("2. Get");
    println!("3. Remove");
    println!("4. Print Hash Table");
    println!("5. Exit");
}

/// Writes the option 4 listing: the `Hash Table:` header, one line per
/// bucket, then the entry and bucket counts.
fn write_table(out: &mut impl Write, table: &HashTable<i64, i64>) -> io::Result<()> {
    writeln!(out, "Hash Table:")?;
    write!(out, "{table}")?;
    writeln!(out, "({} entries, {} buckets)", table.len(), table.capacity())
}

fn main() -> io::Result<()> {
    initialize_logger();
    let args = Args::parse();

    let mut table: HashTable<i64, i64> = HashTable::with_capacity(args.capacity);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(key) = prompt_i64(&mut input, "Enter key to insert: ")? else {
                    break;
                };
                let Some(value) = prompt_i64(&mut input, "Enter value to insert: ")? else {
                    break;
                };
                table.insert(key, value);
                println!("Inserted ({key}, {value})");
            }
            "2" => {
                let Some(key) = prompt_i64(&mut input, "Enter key to get value: ")? else {
                    break;
                };
                match table.get(&key) {
                    Ok(value) => println!("Value for key {key} is {value}"),
                    Err(e) => println!("{e}"),
                }
            }
            "3" => {
                let Some(key) = prompt_i64(&mut input, "Enter key to remove: ")? else {
                    break;
                };
                match table.remove(&key) {
                    Ok(_) => println!("Removed key {key}"),
                    Err(e) => println!("{e}"),
                }
            }
            "4" => {
                write_table(&mut io::stdout().lock(), &table)?;
            }
            "5" => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("Invalid choice! Please try again."),
        }
    }

    println!("End of input, exiting...");
    Ok(())
}
