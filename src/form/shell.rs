//! Line-oriented form that collects a [`PricingRequest`], prices it once and renders the
//! result. Field values persist for the lifetime of the shell only.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::form::config::FormConfig;
use crate::pricing::error::Parameter;
use crate::pricing::types::{PricingRequest, PricingResult};

/// Outcome of prompting for one field. End of input counts as quitting.
enum FieldInput {
    Value(f64),
    Quit,
}

/// Interactive pricing form over any line reader and writer.
///
/// Each cycle prompts for S, X, T, r and sigma in that order, prices the
/// completed request once and renders both prices under the configured
/// headings. Field values carry over between cycles.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use bs_pricer::{default_forms, FormShell};
///
/// let input = Cursor::new("\n\n\n\n\n");
/// let mut shell = FormShell::new(default_forms::standard(), input, Vec::new());
/// assert_eq!(shell.run().unwrap(), 1);
///
/// let out = String::from_utf8(shell.into_output()).unwrap();
/// assert!(out.contains("**Call Option Price:** 10.45"));
/// ```
pub struct FormShell<R, W> {
    config: FormConfig,
    input: R,
    output: W,
    current: PricingRequest,
}

impl<R: BufRead, W: Write> FormShell<R, W> {
    /// Create a shell whose fields start at the config's defaults.
    pub fn new(config: FormConfig, input: R, output: W) -> Self {
        let current = config.default_request();
        Self {
            config,
            input,
            output,
            current,
        }
    }

    /// Values the next cycle will start from.
    pub fn current(&self) -> &PricingRequest {
        &self.current
    }

    /// Consume the shell and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run interaction cycles until the user quits or input ends.
    ///
    /// Returns the number of cycles that produced prices.
    pub fn run(&mut self) -> Result<usize> {
        writeln!(self.output, "# {}", self.config.title)?;
        writeln!(self.output, "{}", self.config.description)?;

        let mut priced = 0;
        while let Some(request) = self.collect_request()? {
            match request.price() {
                Ok(result) => {
                    self.render(&result)?;
                    priced += 1;
                }
                Err(err) => {
                    warn!("Pricing rejected: {}", err);
                    writeln!(self.output, "Error: {}", err)?;
                    writeln!(self.output, "Please correct the inputs.")?;
                }
            }
        }
        info!("Form session ended after {} priced cycles", priced);
        Ok(priced)
    }

    /// Prompt for all five fields. `None` means the session is over.
    pub fn collect_request(&mut self) -> Result<Option<PricingRequest>> {
        writeln!(self.output)?;
        for parameter in Parameter::ALL {
            match self.prompt_field(parameter)? {
                FieldInput::Value(value) => self.current.set(parameter, value),
                FieldInput::Quit => return Ok(None),
            }
        }
        Ok(Some(self.current))
    }

    /// Write both prices under their headings.
    pub fn render(&mut self, result: &PricingResult) -> Result<()> {
        let precision = self.config.precision;
        writeln!(self.output, "### Option Prices")?;
        writeln!(
            self.output,
            "**{}:** {:.*}",
            self.config.call_heading, precision, result.call
        )?;
        writeln!(
            self.output,
            "**{}:** {:.*}",
            self.config.put_heading, precision, result.put
        )?;
        self.output.flush().context("Failed to flush form output")
    }

    fn prompt_field(&mut self, parameter: Parameter) -> Result<FieldInput> {
        let field = self.config.field(parameter).clone();
        loop {
            write!(
                self.output,
                "{} {} [{}]: ",
                field.label,
                field.range_hint(),
                self.current.get(parameter)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read form input")?;
            if read == 0 {
                writeln!(self.output)?;
                return Ok(FieldInput::Quit);
            }

            let entry = line.trim();
            if entry.is_empty() {
                return Ok(FieldInput::Value(self.current.get(parameter)));
            }
            if entry.eq_ignore_ascii_case("q") || entry.eq_ignore_ascii_case("quit") {
                return Ok(FieldInput::Quit);
            }

            match entry.parse::<f64>() {
                Ok(value) if field.accepts(value) => return Ok(FieldInput::Value(value)),
                Ok(value) => {
                    warn!("{} = {} outside {}", parameter, value, field.range_hint());
                    writeln!(
                        self.output,
                        "{} must be within {}, got {}",
                        field.label,
                        field.range_hint(),
                        value
                    )?;
                }
                Err(_) => {
                    warn!("{}: unparseable entry {:?}", parameter, entry);
                    writeln!(self.output, "{}: '{}' is not a number", field.label, entry)?;
                }
            }
        }
    }
}
