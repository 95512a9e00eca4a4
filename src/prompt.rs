//! Interactive selector prompts.
//!
//! Each `ask_*` method keeps asking until the answer parses. `Ok(None)`
//! means input was closed before a valid answer arrived.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::calendar::{DaySelector, MonthSelector};
use crate::city::City;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output stream the prompts are written to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and returns the next line, lowercased and trimmed.
    pub fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn ask_until_valid<T: FromStr>(&mut self, first: &str, retry: &str) -> Result<Option<T>> {
        let mut prompt = first;
        loop {
            let Some(answer) = self.read_answer(prompt)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    debug!(answer = %answer, "Rejected prompt answer");
                    prompt = retry;
                }
            }
        }
    }

    pub fn ask_city(&mut self) -> Result<Option<City>> {
        self.ask_until_valid(
            "City name (chicago, new york city, washington): ",
            "Please give a valid city name (chicago, new york city, washington): ",
        )
    }

    pub fn ask_month(&mut self) -> Result<Option<MonthSelector>> {
        self.ask_until_valid(
            "Month (type all for all the months): ",
            "Please give a valid month (all, january, february, ... , december): ",
        )
    }

    pub fn ask_day(&mut self) -> Result<Option<DaySelector>> {
        self.ask_until_valid(
            "Day of the Week (all, monday, tuesday, ... sunday): ",
            "Please give a valid day of the week (all, monday, tuesday, ... sunday): ",
        )
    }

    /// `true` only for an explicit `yes` / `y`.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(matches!(
            self.read_answer(question)?.as_deref(),
            Some("yes" | "y")
        ))
    }
}
