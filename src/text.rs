//! # Text Capitalization
//!
//! Title-cases a sentence word by word. Words are separated by a single space;
//! an empty word (two spaces in a row, a leading or trailing space, or an empty
//! input) is rejected instead of being skipped.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while capitalizing text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextError {
    /// The input was not a text value.
    #[error("not a string")]
    NotAString,

    /// The word at the given position has no first character.
    #[error("empty word at position {0}")]
    EmptyWord(usize),
}

/// Uppercases the first character of every space-separated word.
///
/// The rest of each word is left as it is, so `"hELLO"` becomes `"HELLO"`.
///
/// # Example
/// ```
/// use fruit_utils::text::capitalize;
///
/// assert_eq!(capitalize("hello my name is bill").unwrap(), "Hello My Name Is Bill");
/// ```
pub fn capitalize(text: &str) -> Result<String, TextError> {
    let words = text
        .split(' ')
        .enumerate()
        .map(|(position, word)| capitalize_word(word).ok_or(TextError::EmptyWord(position)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(words.join(" "))
}

/// Capitalizes a dynamically typed value.
///
/// Anything other than a JSON string (including `Null`, which stands for an
/// absent argument) fails with [`TextError::NotAString`].
pub fn capitalize_value(value: &Value) -> Result<String, TextError> {
    match value {
        Value::String(text) => capitalize(text),
        _ => Err(TextError::NotAString),
    }
}

fn capitalize_word(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
