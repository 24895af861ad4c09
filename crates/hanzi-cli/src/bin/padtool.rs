use clap::{Parser, Subcommand};

use hanzi_cli::commands::{config_ops, dict_ops, session_ops};
use hanzi_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "padtool", about = "Pinyin input panel dictionary and session tool")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a syllable key (exact match, insertion order)
    Lookup {
        /// Dictionary file
        dict_file: String,
        /// Syllable key, e.g. "aiq"
        key: String,
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },
    /// List every stored pair, sorted by key
    Dump {
        /// Dictionary file
        dict_file: String,
        /// Print a JSON array of {key, hanzi}
        #[arg(long)]
        json: bool,
    },
    /// Show the keys a phrase is indexed under
    Expand {
        /// Apostrophe-separated syllables, e.g. "ai'qing"
        phrase: String,
    },
    /// Show key and pair counts
    Info {
        /// Dictionary file
        dict_file: String,
    },
    /// Type into a pinyin panel and show the candidate page
    Type {
        /// Dictionary file (default: dictionary.path from settings)
        #[arg(long)]
        dict: Option<String>,
        /// Keys to press; a space presses the space bar
        input: String,
        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(ref file) = cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Lookup {
            dict_file,
            key,
            json,
        } => dict_ops::lookup_cmd(&dict_file, &key, json),
        Command::Dump { dict_file, json } => dict_ops::dump_cmd(&dict_file, json),
        Command::Expand { phrase } => dict_ops::expand_cmd(&phrase),
        Command::Info { dict_file } => dict_ops::info_cmd(&dict_file),
        Command::Type {
            dict,
            input,
            page,
            json,
        } => session_ops::type_cmd(dict.as_deref(), &input, page, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
