//! Drivers running a parser over strings, readers and files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use jsonic_core::{
    CharSource, ErrorFactory, ErrorKind, JsonParser, LineContext, ParseConfig, ParseError,
    ReaderSource, StrSource, SourceError, SyntaxReader, Traverser,
};

use crate::dialect::default_dialect;
use crate::error::Error;
use crate::value::JsonValue;

/// Runs parsers with a fixed [`ParseConfig`] and error factory.
///
/// A driver primes the traverser, runs the parser once and, with
/// [`ParseConfig::ensure_consumed`], rejects trailing content. Inputs it
/// opens are closed before it returns.
///
/// # Example
///
/// ```ignore
/// let driver = Driver::new(ParseConfig::new().with_ensure_consumed(true));
/// let value = driver.parse_str(&jsonic::default_dialect(), "[1, 2] ")?;
/// ```
#[derive(Debug, Clone)]
pub struct Driver {
    config: ParseConfig,
    reader: SyntaxReader,
}

impl Driver {
    pub fn new(config: ParseConfig) -> Self {
        Self {
            config,
            reader: SyntaxReader::from_config(&config),
        }
    }

    /// Replaces the error factory used for every error of this driver.
    pub fn with_error_factory<F>(mut self, factory: F) -> Self
    where
        F: ErrorFactory + Send + Sync + 'static,
    {
        self.reader = self.reader.with_error_factory(factory);
        self
    }

    #[inline]
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn parse_str<P: JsonParser>(&self, parser: &P, input: &str) -> Result<P::Output, ParseError> {
        let source = StrSource::new(input).map_err(|e| self.reader.error_in(&LineContext::new(), e))?;
        self.run(parser, source)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_reader<P: JsonParser, R: Read>(&self, parser: &P, reader: R) -> Result<P::Output, ParseError> {
        self.run(parser, ReaderSource::new(reader))
    }

    /// Opens `path`, parses it and closes it again.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn parse_path<P: JsonParser>(&self, parser: &P, path: impl AsRef<Path>) -> Result<P::Output, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse_reader(parser, BufReader::new(file))?)
    }

    fn run<P, S>(&self, parser: &P, source: S) -> Result<P::Output, ParseError>
    where
        P: JsonParser,
        S: CharSource,
    {
        let mut traverser = Traverser::with_config(source, &self.config);
        if !traverser.has_next() {
            return Err(self.reader.error(&traverser, SourceError::Empty));
        }
        self.reader.advance(&mut traverser)?;
        let output = parser.parse(&mut traverser, &self.reader)?;
        if self.config.ensure_consumed {
            self.ensure_consumed(&mut traverser)?;
        }
        tracing::debug!(
            line = traverser.context().line_index() + 1,
            column = traverser.context().column_in_line(),
            "parsed"
        );
        Ok(output)
    }

    fn ensure_consumed(&self, traverser: &mut Traverser<'_>) -> Result<(), ParseError> {
        while traverser.has_next() {
            let ch = self.reader.advance(traverser)?;
            if !ch.is_whitespace() {
                return Err(self.reader.error(traverser, ErrorKind::TrailingContent(ch)));
            }
        }
        Ok(())
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(ParseConfig::DEFAULT)
    }
}

/// Parses `input` with the default configuration.
pub fn from_str<P: JsonParser>(parser: &P, input: &str) -> Result<P::Output, ParseError> {
    Driver::default().parse_str(parser, input)
}

pub fn from_str_with<P: JsonParser>(parser: &P, input: &str, config: ParseConfig) -> Result<P::Output, ParseError> {
    Driver::new(config).parse_str(parser, input)
}

/// Parses a UTF-8 byte stream.
pub fn from_reader<P: JsonParser, R: Read>(parser: &P, reader: R, config: ParseConfig) -> Result<P::Output, ParseError> {
    Driver::new(config).parse_reader(parser, reader)
}

pub fn from_path<P: JsonParser>(parser: &P, path: impl AsRef<Path>, config: ParseConfig) -> Result<P::Output, Error> {
    Driver::new(config).parse_path(parser, path)
}

/// Parses `input` with the default dialect and configuration.
pub fn parse(input: &str) -> Result<JsonValue, ParseError> {
    from_str(&default_dialect(), input)
}
