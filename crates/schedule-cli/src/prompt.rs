//! Interactive selection prompt.
//!
//! Invalid or out-of-range input is rejected and the question asked again;
//! end of input aborts.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use schedule_engine::{parse_indices, DesiredSelection, Item};

const QUESTION: &str = "Enter the numbers of the items you want to see (e.g. 1, 3): ";

pub fn prompt_selection<R, W>(items: &[Item], input: &mut R, output: &mut W) -> Result<DesiredSelection>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", QUESTION)?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read selection")?;
        if read == 0 {
            bail!("No selection entered");
        }

        let indices = match parse_indices(&line) {
            Ok(indices) if indices.is_empty() => {
                writeln!(output, "Select at least one item.")?;
                continue;
            }
            Ok(indices) => indices,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match DesiredSelection::from_indices(items, &indices) {
            Ok(selection) => return Ok(selection),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use schedule_engine::Showing;

    fn items() -> Vec<Item> {
        let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let start = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        ["A", "B"]
            .iter()
            .map(|name| {
                Item::new(
                    *name,
                    vec![Showing::with_duration(start, 60, day, "Capitol").unwrap()],
                )
            })
            .collect()
    }

    #[test]
    fn accepts_valid_line() {
        let mut input = "2 1\n".as_bytes();
        let mut output = Vec::new();

        let selection = prompt_selection(&items(), &mut input, &mut output).unwrap();

        assert_eq!(selection.keys().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn reprompts_after_bad_input() {
        let mut input = "seven\n3\n\n2\n".as_bytes();
        let mut output = Vec::new();

        let selection = prompt_selection(&items(), &mut input, &mut output).unwrap();

        assert_eq!(selection.items()[0].name, "B");
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches(QUESTION).count(), 4);
        assert!(shown.contains("Invalid selection input: 'seven'"));
        assert!(shown.contains("Selection 3 is out of range"));
        assert!(shown.contains("Select at least one item."));
    }

    #[test]
    fn eof_aborts() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        assert!(prompt_selection(&items(), &mut input, &mut output).is_err());
    }
}
