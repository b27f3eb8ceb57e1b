use clap::{Parser, Subcommand};
use cosmic_base::{FourPillars, Pillar, ZodiacSign, zodiac_sign};
use cosmic_rs::{
    BirthData, CivilDate, Clock, CosmicError, SystemClock, TokenMetadata,
    compatibility_from_births, cosmic_profile, daily_horoscope_on,
};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "cosmic", about = "Four Pillars + Western zodiac cosmic profile CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Four-Pillars chart and element tally
    Pillars {
        /// Birth date and hour (YYYY-MM-DD or YYYY-MM-DDTHH, hour defaults to 12)
        birth: String,
    },
    /// Western sun sign for a month and day
    Zodiac {
        /// Month (1-12)
        month: u32,
        /// Day of month
        day: u32,
    },
    /// Full cosmic profile: chart, sign, title and description
    Profile {
        /// Birth date and hour (YYYY-MM-DD or YYYY-MM-DDTHH)
        birth: String,
    },
    /// Compatibility of two people by birth date (both charts cast at noon)
    Compat {
        /// First person's birth date (YYYY-MM-DD)
        first: String,
        /// Second person's birth date (YYYY-MM-DD)
        second: String,
    },
    /// Daily horoscope for a profile
    Daily {
        /// Birth date and hour (YYYY-MM-DD or YYYY-MM-DDTHH)
        birth: String,
        /// Day to read for (YYYY-MM-DD); defaults to today's local date
        #[arg(long)]
        date: Option<String>,
    },
    /// Shareable message for a profile
    Share {
        /// Birth date and hour (YYYY-MM-DD or YYYY-MM-DDTHH)
        birth: String,
    },
    /// Token metadata for minting a profile
    Metadata {
        /// Birth date and hour (YYYY-MM-DD or YYYY-MM-DDTHH)
        birth: String,
        /// Print the base64 data URI instead of the JSON document
        #[arg(long)]
        uri: bool,
    },
}

#[derive(Serialize, Debug)]
struct ZodiacOutput {
    sign: &'static str,
    symbol: &'static str,
    element: &'static str,
}

impl From<ZodiacSign> for ZodiacOutput {
    fn from(sign: ZodiacSign) -> Self {
        Self {
            sign: sign.name(),
            symbol: sign.symbol(),
            element: sign.element().name(),
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn or_exit<T>(result: Result<T, CosmicError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn parse_birth(s: &str) -> BirthData {
    or_exit(s.parse())
}

fn parse_date(s: &str) -> CivilDate {
    or_exit(s.parse::<CivilDate>().map_err(CosmicError::from))
}

fn print_json<T: Serialize>(value: &T) {
    let text = or_exit(serde_json::to_string_pretty(value).map_err(CosmicError::from));
    println!("{text}");
}

fn print_pillar(label: &str, p: &Pillar) {
    println!(
        "{label:<6} {:<10} {}  ({} / {})",
        p.to_string(),
        p.hanzi(),
        p.stem.element(),
        p.branch.element()
    );
}

fn print_chart(chart: &FourPillars) {
    print_pillar("Year", &chart.year);
    print_pillar("Month", &chart.month);
    print_pillar("Day", &chart.day);
    print_pillar("Hour", &chart.hour);
    let tally: Vec<String> = chart
        .element_counts
        .iter()
        .map(|(e, n)| format!("{e} {n}"))
        .collect();
    println!("Elements: {}", tally.join(", "));
    println!("Dominant: {}", chart.dominant_element);
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, json = cli.json, "dispatching");

    match cli.command {
        Commands::Pillars { birth } => {
            let profile = or_exit(cosmic_profile(&parse_birth(&birth)));
            if cli.json {
                print_json(&profile.four_pillars);
            } else {
                print_chart(&profile.four_pillars);
            }
        }

        Commands::Zodiac { month, day } => {
            let sign = zodiac_sign(month, day);
            if cli.json {
                print_json(&ZodiacOutput::from(sign));
            } else {
                println!("{} {} ({})", sign.symbol(), sign.name(), sign.element());
            }
        }

        Commands::Profile { birth } => {
            let profile = or_exit(cosmic_profile(&parse_birth(&birth)));
            if cli.json {
                print_json(&profile);
            } else {
                println!("{}", profile.title);
                println!("{}", profile.description);
                println!();
                print_chart(&profile.four_pillars);
                println!(
                    "Zodiac:   {} {} ({})",
                    profile.zodiac.symbol(),
                    profile.zodiac,
                    profile.zodiac.element()
                );
            }
        }

        Commands::Compat { first, second } => {
            let result = or_exit(compatibility_from_births(
                parse_date(&first),
                parse_date(&second),
            ));
            if cli.json {
                print_json(&result);
            } else {
                println!("Score: {}/100", result.score);
                println!(
                    "  element {} / zodiac {}",
                    result.element_score, result.zodiac_score
                );
                println!("{}", result.description);
                println!("Strengths:");
                for s in &result.strengths {
                    println!("  + {s}");
                }
                println!("Challenges:");
                for c in &result.challenges {
                    println!("  - {c}");
                }
            }
        }

        Commands::Daily { birth, date } => {
            let profile = or_exit(cosmic_profile(&parse_birth(&birth)));
            let day = match date {
                Some(s) => parse_date(&s),
                None => SystemClock.today(),
            };
            let horoscope = daily_horoscope_on(&profile, day);
            if cli.json {
                print_json(&horoscope);
            } else {
                println!("{} for {day}", profile.title);
                println!("{}", horoscope.combined);
                println!(
                    "Lucky number: {}  Lucky color: {}",
                    horoscope.lucky_number, horoscope.lucky_color
                );
            }
        }

        Commands::Share { birth } => {
            let profile = or_exit(cosmic_profile(&parse_birth(&birth)));
            let text = profile.share_text();
            if cli.json {
                print_json(&serde_json::json!({ "text": text }));
            } else {
                println!("{text}");
            }
        }

        Commands::Metadata { birth, uri } => {
            let profile = or_exit(cosmic_profile(&parse_birth(&birth)));
            let metadata = TokenMetadata::from_profile(&profile);
            if uri {
                println!("{}", or_exit(metadata.to_data_uri()));
            } else {
                print_json(&metadata);
            }
        }
    }
}
