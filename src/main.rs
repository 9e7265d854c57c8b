use std::fmt::Display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, trace};

/// Run the dsa_kit algorithms from the command line
#[derive(Parser)]
#[command(name = "dsa-kit")]
#[command(about = "Exercise the dsa_kit array and string algorithms", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the array followed by itself
    #[command(allow_negative_numbers = true)]
    Concat { values: Vec<i64> },
    /// Check whether any value occurs more than once
    #[command(allow_negative_numbers = true)]
    HasDuplicate { values: Vec<i64> },
    /// Check a sorted array for two equal neighbours
    #[command(allow_negative_numbers = true)]
    AdjacentDuplicate { values: Vec<i64> },
    /// List each repeated value once, ascending
    #[command(allow_negative_numbers = true)]
    Duplicates { values: Vec<i64> },
    /// Find two indices whose values sum to the target
    #[command(allow_negative_numbers = true)]
    TwoSum {
        /// Sum to look for
        #[arg(short, long)]
        target: i64,

        /// Check every pair instead of using the complement map
        #[arg(long)]
        brute_force: bool,

        values: Vec<i64>,
    },
    /// Print the largest value strictly below the maximum
    #[command(allow_negative_numbers = true)]
    SecondLargest { values: Vec<i64> },
    /// Check whether a string equals its own reversal, exactly
    SelfReversal { text: String },
    /// Check whether two strings are anagrams
    Anagrams {
        first: String,
        second: String,

        /// Lowercase both strings before comparing
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// Check for a palindrome, ignoring case and punctuation
    Palindrome { text: String },
    /// Reverse a string
    Reverse { text: String },
    /// Print the smallest word of a space separated string
    SmallestWord {
        text: String,

        /// Prefer the last of equally small words
        #[arg(long)]
        last: bool,
    },
    /// Print the first N Fibonacci numbers
    #[command(allow_negative_numbers = true)]
    Fibonacci { count: i64 },
    /// Check whether a number is prime
    #[command(allow_negative_numbers = true)]
    Prime { number: i64 },
    /// Print N!
    #[command(allow_negative_numbers = true)]
    Factorial { number: i64 },
    /// Swap two numbers without a temporary
    #[command(allow_negative_numbers = true)]
    Swap { a: i64, b: i64 },
    /// Run every algorithm on a fixed set of sample inputs (default command)
    Demo,
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_none<T: Display>(v: Option<T>) -> String {
    v.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn pair(p: Option<(usize, usize)>) -> String {
    or_none(p.map(|(i, j)| format!("{i}, {j}")))
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Concat { values } => println!("{}", join(&dsa_kit::concat_array(&values))),
        Commands::HasDuplicate { values } => println!("{}", dsa_kit::has_duplicate(&values)),
        Commands::AdjacentDuplicate { values } => {
            if !values.windows(2).all(|w| w[0] <= w[1]) {
                anyhow::bail!("adjacent-duplicate expects sorted input");
            }
            println!("{}", dsa_kit::has_adjacent_duplicate(&values));
        }
        Commands::Duplicates { values } => {
            println!("{}", join(&dsa_kit::find_duplicate_values(&values)));
        }
        Commands::TwoSum {
            target,
            brute_force,
            values,
        } => {
            let found = if brute_force {
                dsa_kit::two_sum_brute_force(&values, target)
            } else {
                dsa_kit::two_sum_complement(&values, target)
            };
            println!("{}", pair(found));
        }
        Commands::SecondLargest { values } => {
            println!("{}", or_none(dsa_kit::second_largest(&values)));
        }
        Commands::SelfReversal { text } => println!("{}", dsa_kit::is_self_reversal(&text)),
        Commands::Anagrams {
            first,
            second,
            ignore_case,
        } => {
            let result = if ignore_case {
                dsa_kit::are_anagrams_ignore_case(&first, &second)
            } else {
                dsa_kit::are_anagrams(&first, &second)
            };
            println!("{result}");
        }
        Commands::Palindrome { text } => println!("{}", dsa_kit::is_palindrome(&text)),
        Commands::Reverse { text } => println!("{}", dsa_kit::reverse_string(&text)),
        Commands::SmallestWord { text, last } => {
            let word = if last {
                dsa_kit::smallest_word_last(&text)
            } else {
                dsa_kit::smallest_word_first(&text)?
            };
            println!("{word}");
        }
        Commands::Fibonacci { count } => println!("{}", join(&dsa_kit::fibonacci(count)?)),
        Commands::Prime { number } => println!("{}", dsa_kit::is_prime(number)),
        Commands::Factorial { number } => println!("{}", dsa_kit::factorial(number)?),
        Commands::Swap { a, b } => {
            let (a, b) = dsa_kit::swap_without_temp(a, b);
            println!("{a}, {b}");
        }
        Commands::Demo => demo()?,
    }

    Ok(())
}

fn demo() -> Result<()> {
    println!("concat [1, 2, 3, 4]: {}", join(&dsa_kit::concat_array(&[1, 2, 3, 4])));
    println!("two sum [4, 5, 6] -> 10: {}", pair(dsa_kit::two_sum_brute_force(&[4, 5, 6], 10)));
    println!(
        "two sum (complement) [4, 5, 6] -> 10: {}",
        pair(dsa_kit::two_sum_complement(&[4, 5, 6], 10))
    );
    println!(
        "duplicates [1, 2, 2, 3, 3, 3]: {}",
        join(&dsa_kit::find_duplicate_values(&[1, 2, 2, 3, 3, 3]))
    );
    println!("racecar is its own reversal? {}", dsa_kit::is_self_reversal("racecar"));
    println!("Madam is a palindrome? {}", dsa_kit::is_palindrome("Madam"));
    println!("fibonacci 10 is {}", join(&dsa_kit::fibonacci(10)?));
    println!("listen and silent are anagrams? {}", dsa_kit::are_anagrams("listen", "silent"));
    println!("29 is prime? {}", dsa_kit::is_prime(29));
    println!("Factorial of 5 is {}", dsa_kit::factorial(5)?);
    println!("Reversed: {}", dsa_kit::reverse_string("Kotlin"));

    let (a, b) = dsa_kit::swap_without_temp(5, 10);
    println!("After swap {a}, {b}");

    println!(
        "Second largest: {}",
        or_none(dsa_kit::second_largest(&[10, 40, 20, 30, 50]))
    );

    let sentence = "I am word best coder";
    println!("Smallest word {}", dsa_kit::smallest_word_first(sentence)?);
    println!("Last smallest word {}", dsa_kit::smallest_word_last(sentence));

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("dsa-kit started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    run(cli.command.unwrap_or(Commands::Demo))
}
