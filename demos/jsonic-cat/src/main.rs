use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser as ClapParser;
use jsonic::{Compose, Dialect, Driver, JsonValue, NewlineConvention, ParseConfig, TrailingPolicy};
use tracing::*;

mod logging;

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files to parse. Reads stdin when empty or `-`.
    inputs: Vec<PathBuf>,

    /// Reject objects with duplicate keys.
    #[arg(long)]
    strict_keys: bool,

    /// Accept a comma before a closing bracket or brace.
    #[arg(long)]
    trailing_commas: bool,

    /// Count lines by `\r\n` instead of `\n`.
    #[arg(long)]
    crlf: bool,

    /// Fail when anything but whitespace follows the document.
    #[arg(long)]
    ensure_consumed: bool,

    /// Treat every non-blank line as its own document.
    #[arg(long)]
    lines: bool,

    /// Characters of history kept for error backtraces.
    #[arg(long, default_value_t = ParseConfig::DEFAULT.history_capacity)]
    history: NonZeroUsize,

    /// Characters shown in an error backtrace.
    #[arg(long, default_value_t = ParseConfig::DEFAULT.backtrace_limit)]
    backtrace: usize,

    /// Maximum nesting of arrays and objects; 0 disables the limit.
    #[arg(long, default_value_t = ParseConfig::DEFAULT.max_recursion_depth)]
    max_depth: usize,
}

impl Args {
    fn config(&self) -> ParseConfig {
        let newline = if self.crlf {
            NewlineConvention::CrLf
        } else {
            NewlineConvention::Lf
        };
        let config = ParseConfig::new()
            .with_newline(newline)
            .with_history_capacity(self.history)
            .with_backtrace_limit(self.backtrace)
            .with_ensure_consumed(self.ensure_consumed || self.lines);
        if self.max_depth == 0 {
            config.disable_recursion_limit()
        } else {
            config.with_max_recursion_depth(self.max_depth)
        }
    }

    fn dialect(&self) -> Dialect {
        let trailing = if self.trailing_commas {
            TrailingPolicy::Optional
        } else {
            TrailingPolicy::Forbidden
        };
        Dialect::new()
            .with_strict_keys(self.strict_keys)
            .with_trailing(trailing)
    }
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let cli = Args::parse();
    debug!(?cli);

    let driver = Driver::new(cli.config());
    let grammar = cli.dialect().build();
    let mut out = io::stdout().lock();

    let inputs = if cli.inputs.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.inputs.clone()
    };

    let mut failures = 0usize;
    for path in &inputs {
        let result = if cli.lines {
            cat_lines(&driver, &grammar, path, &mut out)
        } else {
            cat_document(&driver, &grammar, path, &mut out)
        };
        if let Err(e) = result {
            error!(path = %path.display(), "failed to parse input");
            eprintln!("{}: {e:#}", path.display());
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} inputs failed", inputs.len());
    }
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn cat_document(
    driver: &Driver,
    grammar: &Compose<JsonValue>,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let value = if is_stdin(path) {
        driver.parse_reader(grammar, io::stdin().lock())?
    } else {
        driver.parse_path(grammar, path)?
    };
    writeln!(out, "{value}")?;
    Ok(())
}

fn cat_lines(
    driver: &Driver,
    grammar: &Compose<JsonValue>,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = if is_stdin(path) {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?;
        Box::new(BufReader::new(file))
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let value = driver
            .parse_str(grammar, &line)
            .with_context(|| format!("line {}", index + 1))?;
        writeln!(out, "{value}")?;
    }
    Ok(())
}
