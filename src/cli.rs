use crate::config::OperationMode;
use crate::validator::ArgumentError;
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, Write};

/// Bundled single-letter flags such as `-v`, `-vv` or `-jv`
static SHORT_FLAGS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-[vjhV]+$").unwrap());

/// Single-dash named argument with exactly one `=`: `-name=value`
static NAMED_ARG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-([^=]+)=([^=]*)$").unwrap());

#[derive(Parser, Debug)]
#[command(name = "hookrename")]
#[command(author, version, long_about = None)]
#[command(about = "Batch-rename files by replacing a hook word in their names")]
pub struct Args {
    /// Target directory (positional form)
    #[arg(value_name = "DIR", conflicts_with = "dir")]
    pub target_dir: Option<String>,

    /// Word to replace (positional form)
    #[arg(value_name = "WORD", conflicts_with = "word")]
    pub match_word: Option<String>,

    /// Replacement word (positional form, default: delete the match)
    #[arg(value_name = "NEW", conflicts_with = "new")]
    pub replacement: Option<String>,

    /// Target directory
    #[arg(long, value_name = "PATH", aliases = ["target-dir", "targetDir"])]
    pub dir: Option<String>,

    /// Word to look for in each entry name
    #[arg(long, value_name = "WORD", aliases = ["hook", "hook-word", "hookWord"])]
    pub word: Option<String>,

    /// Word that replaces the first occurrence of the match word
    #[arg(long, value_name = "WORD", aliases = ["alt", "alt-word", "altWord"])]
    pub new: Option<String>,

    /// Only process .jpeg, .jpg and .JPG entries
    #[arg(short, long)]
    pub jpeg_only: bool,

    /// Rename entries, or write re-encoded JPEG copies under the new name
    #[arg(long, value_enum, default_value_t = OperationMode::Rename)]
    pub mode: OperationMode,

    /// Replace destination files that already exist instead of failing
    #[arg(long)]
    pub overwrite: bool,

    /// Do not report entries that fail to decode as images (reencode mode)
    #[arg(long)]
    pub skip_undecodable: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

const USAGE: &str = "\
Usage:
  hookrename -dir=<path> -word=<word> [-new=<word>] [options]
  hookrename <path> <word> [<new>] [options]

  -dir=<path>          : directory whose entries are renamed
  -word=<word>         : word to look for in each name (first occurrence only)
  -new=<word>          : word that replaces it (default: empty, deletes the match)
  -j, --jpeg-only      : only process .jpeg/.jpg/.JPG entries
  --mode <mode>        : rename (default) or reencode (write quality-100 JPEG copies)
  --overwrite          : replace existing destination files
  --skip-undecodable   : do not report entries that fail to decode (reencode)
  -v, --verbose        : increase log output (repeatable)";

pub fn print_usage(writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}", USAGE)
}

/// Map a single-dash argument name to its long flag
fn canonical_name(name: &str) -> Option<&'static str> {
    match name {
        "dir" | "targetDir" | "target-dir" => Some("dir"),
        "word" | "hook" | "hookWord" | "hook-word" => Some("word"),
        "new" | "alt" | "altWord" | "alt-word" => Some("new"),
        _ => None,
    }
}

/// Rewrite `-name=value` arguments into `--name=value` so clap can parse them.
///
/// The first item is the program name. Double-dash arguments, bundled short
/// flags and positionals pass through unchanged; everything after a bare `--`
/// is left alone.
pub fn normalize_args<I>(raw: I) -> Result<Vec<String>, ArgumentError>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = raw.into_iter();
    let mut normalized: Vec<String> = iter.next().into_iter().collect();
    let mut passthrough = false;

    for arg in iter {
        if passthrough || arg == "-" || !arg.starts_with('-') || arg.starts_with("--") {
            passthrough |= arg == "--";
            normalized.push(arg);
            continue;
        }

        if SHORT_FLAGS_REGEX.is_match(&arg) {
            normalized.push(arg);
            continue;
        }

        let caps = NAMED_ARG_REGEX
            .captures(&arg)
            .ok_or_else(|| ArgumentError::MissingSeparator { arg: arg.clone() })?;

        let name = &caps[1];
        let canonical = canonical_name(name).ok_or_else(|| ArgumentError::UnknownArgument {
            name: format!("-{}", name),
        })?;

        normalized.push(format!("--{}={}", canonical, &caps[2]));
    }

    Ok(normalized)
}
