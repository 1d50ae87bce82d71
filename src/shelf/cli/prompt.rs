use shelf::error::{Result, ShelfError};
use shelf::library::FieldProvider;
use shelf::model::{Book, BookFields};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const INVALID_NUMBER: &str = "Invalid number, try again.";

/// Line-oriented prompts over any reader/writer pair.
///
/// End of input surfaces as an `UnexpectedEof` I/O error so callers anywhere
/// in the menu can unwind with `?`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes pre-rendered text as is.
    pub fn emit(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line ending.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        self.emit(prompt)?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(ShelfError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Re-prompts until the answer parses and passes `accept`.
    pub fn number<T, F>(&mut self, prompt: &str, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let answer = self.line(prompt)?;
            match answer.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => self.say(INVALID_NUMBER)?,
            }
        }
    }

    /// Like [`Prompter::number`], but an empty answer returns `current`.
    pub fn number_or<T, F>(&mut self, prompt: &str, current: T, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let answer = self.line(prompt)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(current);
            }
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => self.say(INVALID_NUMBER)?,
            }
        }
    }

    pub fn text_or(&mut self, prompt: &str, current: &str) -> Result<String> {
        let answer = self.line(prompt)?;
        if answer.is_empty() {
            Ok(current.to_string())
        } else {
            Ok(answer)
        }
    }
}

pub fn valid_price(price: &f64) -> bool {
    price.is_finite() && *price >= 0.0
}

pub fn any_year(_year: &i32) -> bool {
    true
}

pub fn is_closed(err: &ShelfError) -> bool {
    matches!(err, ShelfError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

/// Asks for every updatable field, showing the current value; an empty answer
/// keeps it.
pub struct PromptedFields<'p, R, W>(pub &'p mut Prompter<R, W>);

impl<R: BufRead, W: Write> FieldProvider for PromptedFields<'_, R, W> {
    type Error = ShelfError;

    fn provide(&mut self, current: &Book) -> Result<BookFields> {
        let prompter = &mut *self.0;
        let title = prompter.text_or(
            &format!("Enter new title (current: {}): ", current.title),
            &current.title,
        )?;
        let author = prompter.text_or(
            &format!("Enter new author (current: {}): ", current.author),
            &current.author,
        )?;
        let year = prompter.number_or(
            &format!("Enter new year (current: {}): ", current.year),
            current.year,
            any_year,
        )?;
        let price = prompter.number_or(
            &format!("Enter new price (current: {}): ", current.price),
            current.price,
            valid_price,
        )?;
        Ok(BookFields::new(title, author, year, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(out: &[u8]) -> String {
        String::from_utf8_lossy(out).into_owned()
    }

    #[test]
    fn line_strips_line_endings() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new("hello world\r\n".as_bytes(), &mut out);
        assert_eq!(prompter.line("> ").unwrap(), "hello world");
        drop(prompter);
        assert_eq!(output(&out), "> ");
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new("".as_bytes(), &mut out);
        let err = prompter.line("> ").unwrap_err();
        assert!(is_closed(&err));
    }

    #[test]
    fn number_reprompts_until_valid() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new("abc\n-3\n4.5\n".as_bytes(), &mut out);
        let price: f64 = prompter.number("Price: ", valid_price).unwrap();
        assert_eq!(price, 4.5);
        drop(prompter);
        assert_eq!(output(&out).matches(INVALID_NUMBER).count(), 2);
    }

    #[test]
    fn number_or_keeps_current_on_empty() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new("\n".as_bytes(), &mut out);
        assert_eq!(prompter.number_or("Year: ", 1999, any_year).unwrap(), 1999);
    }

    #[test]
    fn prompted_fields_mix_kept_and_new_values() {
        let mut out = Vec::new();
        let script = "Updated Title\n\nnope\n2001\n\n";
        let mut prompter = Prompter::new(script.as_bytes(), &mut out);
        let current = Book::new("Title1", "Author1", "ISBN1", 2020, 15.99);

        let fields = PromptedFields(&mut prompter).provide(&current).unwrap();
        assert_eq!(fields, BookFields::new("Updated Title", "Author1", 2001, 15.99));

        drop(prompter);
        let text = output(&out);
        assert!(text.contains("Enter new title (current: Title1): "));
        assert!(text.contains("Enter new price (current: 15.99): "));
        assert!(text.contains(INVALID_NUMBER));
    }
}
