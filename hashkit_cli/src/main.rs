use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hashkit_cli::config::{self, AppConfig, ConfigManager};
use hashkit_cli::error::CliError;
use hashkit_cli::output::{self, HashEntry, OutputFormat};
use hashkit_core::{HashAlgorithm, HashCalculator, TextEncoding};
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hashkit")]
#[command(author, version, about = "Hashkit - SHA-256, SHA-512, CRC-32 and MD5 digests in uppercase hex", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash text arguments, files, or standard input
    Hash {
        /// Text to hash (standard input is read when neither text nor files are given)
        texts: Vec<String>,

        /// File to hash (can be specified multiple times)
        #[arg(long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,

        /// Hash algorithm to use (defaults to hashing.default_algorithm)
        #[arg(short, long, value_enum)]
        algorithm: Option<HashAlgorithmArg>,

        /// Character encoding for text arguments (defaults to hashing.default_encoding)
        #[arg(short = 'E', long)]
        encoding: Option<String>,

        /// Output format (defaults to output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List supported algorithms
    Algorithms,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., hashing.default_algorithm)
        key: String,
    },

    /// List all configuration values
    List,

    /// Show the configuration file path
    Path,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum HashAlgorithmArg {
    Sha256,
    Sha512,
    Crc32,
    Md5,
    All,
}

impl From<HashAlgorithmArg> for Vec<HashAlgorithm> {
    fn from(arg: HashAlgorithmArg) -> Self {
        match arg {
            HashAlgorithmArg::Sha256 => vec![HashAlgorithm::Sha256],
            HashAlgorithmArg::Sha512 => vec![HashAlgorithm::Sha512],
            HashAlgorithmArg::Crc32 => vec![HashAlgorithm::Crc32],
            HashAlgorithmArg::Md5 => vec![HashAlgorithm::Md5],
            HashAlgorithmArg::All => HashAlgorithm::ALL.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("hashkit_core", log::LevelFilter::Debug)
            .filter_module("hashkit_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match run(cli.command).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            let error = CliError::from(error);
            eprint!("{}", error.format_for_user(cli.debug));
            error.exit_code().into()
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Hash {
            texts,
            files,
            algorithm,
            encoding,
            format,
        } => {
            let config = config::get_config()?;
            hash_command(config, texts, files, algorithm, encoding, format).await
        }
        Commands::Algorithms => {
            for algorithm in HashAlgorithm::ALL {
                let width = match algorithm.output_len() {
                    Some(len) => format!("{len} bytes"),
                    None => "variable".to_string(),
                };
                println!("{:<8} {width}", algorithm.name());
            }
            Ok(())
        }
        Commands::Config { command } => config_command(command),
    }
}

async fn hash_command(
    config: AppConfig,
    texts: Vec<String>,
    files: Vec<PathBuf>,
    algorithm: Option<HashAlgorithmArg>,
    encoding: Option<String>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let algorithms: Vec<HashAlgorithm> = match algorithm {
        Some(arg) => arg.into(),
        None => vec![config.hashing.algorithm()?],
    };
    let encoding: TextEncoding = match encoding {
        Some(label) => label.parse()?,
        None => config.hashing.encoding()?,
    };
    let format = match format {
        Some(format) => format,
        None => config.output.format()?,
    };
    let calculator = HashCalculator::with_config(config.client.clone())?;

    log::debug!("Hashing with {algorithms:?} under {encoding}");

    let mut entries = Vec::new();

    for text in &texts {
        for &algorithm in &algorithms {
            let result = calculator
                .calculate_text(algorithm, text, Some(encoding))
                .with_context(|| format!("Failed to hash text {text:?}"))?;
            entries.push(HashEntry {
                input: text.clone(),
                result,
            });
        }
    }

    for file in &files {
        for &algorithm in &algorithms {
            let result = calculator
                .calculate_file(file, algorithm)
                .await
                .with_context(|| format!("Failed to hash file: {}", file.display()))?;
            entries.push(HashEntry {
                input: file.display().to_string(),
                result,
            });
        }
    }

    if texts.is_empty() && files.is_empty() {
        let mut stdin = Vec::new();
        std::io::Read::read_to_end(&mut std::io::stdin().lock(), &mut stdin)
            .context("Failed to read standard input")?;
        for result in calculator.calculate_multiple(&stdin, &algorithms)?.into_values() {
            entries.push(HashEntry {
                input: "-".to_string(),
                result,
            });
        }
        entries.sort_by_key(|entry| {
            algorithms
                .iter()
                .position(|a| *a == entry.result.algorithm)
        });
    }

    let color = config.output.color_enabled && std::io::stdout().is_terminal();
    print!("{}", output::render(&entries, format, color)?);

    Ok(())
}

fn config_command(command: ConfigCommand) -> Result<()> {
    let manager = ConfigManager::new();

    match command {
        ConfigCommand::Get { key } => {
            println!("{}", manager.get(&key)?);
        }
        ConfigCommand::List => {
            for (key, value) in manager.list()? {
                println!("{key} = {value}");
            }
        }
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
    }

    Ok(())
}
