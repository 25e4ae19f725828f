mod remote;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cupful_core::{ConversionRequest, ConversionResult, Locale};

const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(name = "cupful")]
#[command(about = "Convert grams and milliliters into cups, tablespoons and teaspoons", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount of some material
    Convert {
        /// Amount in grams or milliliters
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        /// Unit of the amount: gram or ml
        #[arg(long, default_value = cupful_core::convert::DEFAULT_UNIT)]
        unit: String,
        /// Material identifier (see `cupful materials`)
        #[arg(long, default_value = cupful_core::convert::DEFAULT_MATERIAL)]
        material: String,
        /// Language of the results: en or he
        #[arg(long, default_value = "en")]
        locale: Locale,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Convert through a running server instead of locally
        #[arg(long)]
        server: Option<String>,
    },
    /// List known materials and their densities
    Materials,
    /// Ping the server
    Ping {
        /// Server URL (default: http://localhost:5000)
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            amount,
            unit,
            material,
            locale,
            json,
            server,
        } => {
            let request = ConversionRequest::new(amount, unit, material);
            let result = match server {
                Some(server) => remote::convert(&server, &request, locale).await?,
                None => cupful_core::convert(&request, locale),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render(&result));
            }
        }
        Commands::Materials => {
            for (name, density) in ingredient_density::materials() {
                println!("{:<16}{} g/ml", name, density);
            }
        }
        Commands::Ping { server } => {
            let response = remote::ping(&server).await?;
            println!("{} (build {})", response.message, response.build_id);
        }
    }

    Ok(())
}

/// One line per measure; measures with nothing to show are skipped.
fn render(result: &ConversionResult) -> String {
    [
        ("cups", &result.cups),
        ("tablespoons", &result.tablespoons),
        ("teaspoons", &result.teaspoons),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{:<13}{}\n", format!("{label}:"), value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_defaults() {
        let cli = Cli::try_parse_from(["cupful", "convert", "--amount", "200"]).unwrap();
        let Commands::Convert {
            amount,
            unit,
            material,
            locale,
            json,
            server,
        } = cli.command
        else {
            panic!("expected convert command");
        };
        assert_eq!(amount, 200.0);
        assert_eq!(unit, "gram");
        assert_eq!(material, "water");
        assert_eq!(locale, Locale::En);
        assert!(!json);
        assert!(server.is_none());
    }

    #[test]
    fn test_parse_locale() {
        let cli = Cli::try_parse_from(["cupful", "convert", "--amount", "1", "--locale", "he"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Convert {
                locale: Locale::He,
                ..
            }
        ));
        assert!(
            Cli::try_parse_from(["cupful", "convert", "--amount", "1", "--locale", "fr"]).is_err()
        );
    }

    #[test]
    fn test_render_skips_empty_fields() {
        let result = ConversionResult {
            cups: "Unsupported unit".to_string(),
            tablespoons: String::new(),
            teaspoons: String::new(),
        };
        assert_eq!(render(&result), "cups:        Unsupported unit\n");
    }

    #[test]
    fn test_render_all_fields() {
        let result = cupful_core::convert(&ConversionRequest::new(90.0, "ml", "water"), Locale::En);
        assert_eq!(
            render(&result),
            "cups:        ½ cup\ntablespoons: 6 tbs\nteaspoons:   18 ts\n"
        );
    }
}
