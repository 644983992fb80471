use crate::error::{ApiError, Field};

/// Check the required text fields of a question or reply.
///
/// `None` and `""` are both rejected; author is checked first. Runs before
/// any store access.
pub fn validate<'a>(
    author: Option<&'a str>,
    message: Option<&'a str>,
) -> Result<(&'a str, &'a str), ApiError> {
    let author = required(Field::Author, author)?;
    let message = required(Field::Message, message)?;
    Ok((author, message))
}

fn required(field: Field, value: Option<&str>) -> Result<&str, ApiError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ApiError::Validation(field)),
    }
}
