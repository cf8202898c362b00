use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use bikeshare_core::{validate::validate, BikeshareError};

const YES_NO: [&str; 2] = ["yes", "no"];

/// line-oriented prompt/response channel for the interactive explorer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> Result<(), BikeshareError> {
        writeln!(self.output, "{message}").map_err(BikeshareError::Console)
    }

    /// shows a question and reads one line of response. returns None once
    /// the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, BikeshareError> {
        writeln!(self.output, "\n{question}").map_err(BikeshareError::Console)?;
        self.output.flush().map_err(BikeshareError::Console)?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(BikeshareError::Console)?;
        if n == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }

    /// repeats a question until the response parses. parse failures are
    /// reported back to the user along with the accepted values.
    pub fn ask_until_valid<T>(&mut self, question: &str) -> Result<Option<T>, BikeshareError>
    where
        T: FromStr<Err = BikeshareError>,
    {
        loop {
            let Some(response) = self.ask(question)? else {
                return Ok(None);
            };
            match T::from_str(&response) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    log::debug!("rejected input '{response}': {e}");
                    self.say(&format!("please try again, {e}"))?;
                }
            }
        }
    }

    /// repeats a question until answered with yes or no.
    pub fn confirm(&mut self, question: &str) -> Result<Option<bool>, BikeshareError> {
        loop {
            let Some(response) = self.ask(question)? else {
                return Ok(None);
            };
            match validate(&response, &YES_NO) {
                Ok(answer) => return Ok(Some(answer == "yes")),
                Err(_) => self.say("Please enter yes or no")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::{filter::MonthFilter, City};
    use chrono::Month;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), vec![])
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).expect("utf8 output")
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut c = console("boston\n\nChicago\n");
        let city: Option<City> = c.ask_until_valid("which city?").expect("io");
        assert_eq!(city, Some(City::Chicago));
        let out = output_of(c);
        assert_eq!(out.matches("which city?").count(), 3);
        assert_eq!(out.matches("please try again").count(), 2);
    }

    #[test]
    fn test_parses_month_selection() {
        let mut c = console("April\n");
        let month: Option<MonthFilter> = c.ask_until_valid("which month?").expect("io");
        assert_eq!(month, Some(MonthFilter::Only(Month::April)));
    }

    #[test]
    fn test_end_of_input_yields_none() {
        let mut c = console("nowhere\n");
        let city: Option<City> = c.ask_until_valid("which city?").expect("io");
        assert_eq!(city, None);
    }

    #[test]
    fn test_confirm() {
        let mut c = console("maybe\nYES\nno\n");
        assert_eq!(c.confirm("continue?").expect("io"), Some(true));
        assert_eq!(c.confirm("continue?").expect("io"), Some(false));
        assert_eq!(c.confirm("continue?").expect("io"), None);
        assert!(output_of(c).contains("Please enter yes or no"));
    }
}
