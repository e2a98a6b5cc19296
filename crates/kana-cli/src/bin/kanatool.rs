use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, corpus_ops, expand_ops, play_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana typing trainer tool")]
struct Cli {
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    /// Custom settings TOML (see `kanatool settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every romaji spelling of a reading
    Expand {
        /// Reading (hiragana, ー, ASCII letters)
        reading: String,
        /// Skip the trailing-ん filter and the empty-set check
        #[arg(long)]
        raw: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Feed keystrokes for a reading and show the display split
    Project {
        /// Reading (hiragana, ー, ASCII letters)
        reading: String,
        /// Keys typed so far
        typed: String,
    },
    /// Validate a JSON word corpus
    CorpusValidate {
        /// Path to the JSON file
        file: String,
    },
    /// Draw random words from a corpus
    CorpusSample {
        /// Path to the JSON file (default: configured or builtin corpus)
        #[arg(long)]
        file: Option<String>,
        /// Number of words to draw
        #[arg(short, long, default_value = "10")]
        n: usize,
        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Export the romaji table as TOML
    RomajiExport,
    /// Validate a romaji TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Run the interactive trainer in this terminal
    Play {
        /// Session mode: 30s, 60s, 120s, 30, 50 or 100
        #[arg(long)]
        mode: Option<String>,
        /// Path to a JSON word corpus
        #[arg(long)]
        corpus: Option<String>,
        /// RNG seed for a reproducible word order
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        kana_engine::trace_init::init_tracing(dir);
    }
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Expand { reading, raw, json } => expand_ops::expand(&reading, raw, json),
        Command::Project { reading, typed } => expand_ops::project(&reading, &typed),
        Command::CorpusValidate { file } => corpus_ops::corpus_validate(&file),
        Command::CorpusSample { file, n, seed } => {
            corpus_ops::corpus_sample(file.as_deref(), n, seed)
        }
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Play { mode, corpus, seed } => {
            play_ops::play(mode.as_deref(), corpus.as_deref(), seed)
        }
    }
}
