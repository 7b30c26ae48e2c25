//! Field-by-field prompting.

use super::error::EntryError;
use crate::record::{LoadRecord, ValidationError, MAX_URGENCY, MIN_URGENCY};
use std::io::{BufRead, Write};

/// Prompts for a record on `output` and reads the answers from `input`.
///
/// Urgency is checked before the weight is asked for, and weight before the
/// description, so a bad value stops the dialogue immediately.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use u_loadheap::entry::read_record;
///
/// let mut input = Cursor::new("4\n2\n3\n12\nFrozen food\n");
/// let mut output = Vec::new();
/// let record = read_record(&mut input, &mut output).unwrap();
/// assert_eq!(record.priority(), 30 + 24 + 10);
/// ```
pub fn read_record<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<LoadRecord, EntryError> {
    writeln!(output, "\n=== Insert New Load ===")?;

    let id = prompt_int(input, output, "ID: ", "id")?;
    let category = prompt_int(input, output, "Type (1-9): ", "category")?;
    let urgency = prompt_int(
        input,
        output,
        "Urgency (1=low, 2=medium, 3=high): ",
        "urgency",
    )?;
    if !(MIN_URGENCY..=MAX_URGENCY).contains(&urgency) {
        return Err(ValidationError::UrgencyOutOfRange(urgency).into());
    }
    let weight = prompt_int(input, output, "Weight (kg): ", "weight")?;
    if weight < 0 {
        return Err(ValidationError::NegativeWeight(weight).into());
    }
    let description = prompt_line(input, output, "Description: ")?;

    Ok(LoadRecord::try_new(
        id,
        category,
        urgency,
        weight,
        description,
    )?)
}

/// Writes `prompt` and returns the next line, trimmed.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, EntryError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(EntryError::EndOfInput);
    }
    Ok(line.trim().to_string())
}

fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<i32, EntryError> {
    let raw = prompt_line(input, output, prompt)?;
    raw.parse()
        .map_err(|_| EntryError::InvalidNumber { field, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<LoadRecord, EntryError>, String) {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let result = read_record(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_complete_entry() {
        let (result, out) = run("1\n2\n3\n10\n  Medical supplies \n");
        let record = result.unwrap();
        assert_eq!(record.id(), 1);
        assert_eq!(record.priority(), 60);
        assert_eq!(record.description(), "Medical supplies");
        assert!(out.contains("Urgency (1=low, 2=medium, 3=high): "));
        assert!(out.contains("Description: "));
    }

    #[test]
    fn test_urgency_rejected_before_weight_prompt() {
        let (result, out) = run("1\n2\n5\n10\nx\n");
        assert!(matches!(
            result,
            Err(EntryError::Validation(ValidationError::UrgencyOutOfRange(5)))
        ));
        assert!(!out.contains("Weight"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let (result, out) = run("1\n2\n2\n-4\nx\n");
        assert!(matches!(
            result,
            Err(EntryError::Validation(ValidationError::NegativeWeight(-4)))
        ));
        assert!(!out.contains("Description"));
    }

    #[test]
    fn test_non_numeric_field() {
        let (result, _) = run("one\n");
        match result {
            Err(EntryError::InvalidNumber { field, value }) => {
                assert_eq!(field, "id");
                assert_eq!(value, "one");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_end_of_input() {
        let (result, _) = run("1\n2\n");
        assert!(matches!(result, Err(EntryError::EndOfInput)));
    }

    #[test]
    fn test_empty_description_allowed() {
        let (result, _) = run("3\n0\n1\n0\n\n");
        let record = result.unwrap();
        assert_eq!(record.description(), "");
        assert_eq!(record.priority(), 10);
    }
}
