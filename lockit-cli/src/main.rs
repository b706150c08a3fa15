use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use lockit::ParseMode;
use lockit_cli::{chars, create_tsv, diff, full_tsv, rename, stats, update};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export a language's .loc tree into a single TSV document.
    CreateTsv {
        /// Root directory of the .loc tree
        path: String,

        /// Language directory prefix to export (all files when omitted)
        #[arg(requires = "original_language")]
        language: Option<String>,

        /// Language directory prefix supplying the Original column
        original_language: Option<String>,

        /// Output TSV file
        #[arg(short, long, default_value = "_loc_kit_output.txt")]
        output: String,

        /// Fail on malformed input instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Merge every language of a .loc tree into one multi-column TSV document.
    CreateFullTsv {
        /// Root directory of the .loc tree
        path: String,

        /// Base language; it leads the column order and must be present
        base_language: String,

        /// Output TSV file
        #[arg(short, long, default_value = "_loc_kit_output.txt")]
        output: String,

        /// Fail on malformed input instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Split a full TSV document back into a per-language .loc tree.
    ExtractTsv {
        /// Input full-TSV document
        input: String,

        /// Directory to write the .loc tree into
        output_path: String,

        /// Fail on malformed input instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Diff a translation against its original language.
    DiffTsv {
        /// Root directory of the .loc tree
        path: String,

        /// Language directory prefix of the translation
        language: String,

        /// Language directory prefix of the original
        original_language: String,

        /// File listing keys whose original text changed, one per line
        #[arg(long)]
        changed_keys: Option<String>,

        /// Output TSV for entries needing translation
        #[arg(short, long, default_value = "_loc_kit_output.txt")]
        output: String,

        /// Output TSV for entries the original no longer contains
        #[arg(long, default_value = "_loc_kit_removed.txt")]
        removed_output: String,

        /// Fail on malformed input instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Apply a translated TSV document onto an original .loc tree.
    UpdateLoc {
        /// Directory to write the updated .loc files into
        path: String,

        /// Input TSV document with translated values
        input: String,

        /// Root directory of the original tree
        original_path: String,

        /// Language directory prefix of the original files
        original_language: String,

        /// Fail on malformed input instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Rename keys across a .loc tree from a tab-separated mapping file.
    RenameKeys {
        /// Root directory of the .loc tree
        path: String,

        /// Language directory prefix to rewrite
        language: String,

        /// File of OLD<TAB>NEW pairs, one per line
        renames: String,

        /// Fail on malformed input instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Count entries and words in a .loc tree.
    Wordcount {
        /// Root directory of the .loc tree
        path: String,

        /// Language directory prefix to count (all files when omitted)
        language: Option<String>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the distinct non-ASCII characters a language uses.
    ExportChars {
        /// Root directory of the .loc tree
        path: String,

        /// Language directory prefix to scan
        language: String,

        /// Output listing file (default `output_<LANGUAGE>.txt`)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate a shell completion script on stdout.
    Completions {
        /// Shell to generate the script for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_mode(strict: bool) -> ParseMode {
    if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    }
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::CreateTsv {
            path,
            language,
            original_language,
            output,
            strict,
        } => create_tsv::run_create_tsv_command(
            &path,
            language.as_deref().unwrap_or(""),
            original_language.as_deref().unwrap_or(""),
            &output,
            parse_mode(strict),
        ),
        Commands::CreateFullTsv {
            path,
            base_language,
            output,
            strict,
        } => full_tsv::run_create_full_tsv_command(
            &path,
            &base_language,
            &output,
            parse_mode(strict),
        ),
        Commands::ExtractTsv {
            input,
            output_path,
            strict,
        } => full_tsv::run_extract_tsv_command(&input, &output_path, parse_mode(strict)),
        Commands::DiffTsv {
            path,
            language,
            original_language,
            changed_keys,
            output,
            removed_output,
            strict,
        } => diff::run_diff_tsv_command(&diff::DiffTsvOptions {
            path,
            language,
            original_language,
            changed_keys,
            output,
            removed_output,
            mode: parse_mode(strict),
        }),
        Commands::UpdateLoc {
            path,
            input,
            original_path,
            original_language,
            strict,
        } => update::run_update_loc_command(
            &path,
            &input,
            &original_path,
            &original_language,
            parse_mode(strict),
        ),
        Commands::RenameKeys {
            path,
            language,
            renames,
            strict,
        } => rename::run_rename_keys_command(&path, &language, &renames, parse_mode(strict)),
        Commands::Wordcount {
            path,
            language,
            json,
        } => stats::run_wordcount_command(&path, language.as_deref().unwrap_or(""), json),
        Commands::ExportChars {
            path,
            language,
            output,
        } => chars::run_export_chars_command(&path, &language, output.as_deref()),
        Commands::Completions { shell } => {
            let mut command = Args::command();
            generate(shell, &mut command, "lockit", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
