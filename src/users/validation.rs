use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use super::{error::*, models::UserData};

pub const MIN_NAME_LEN: usize = 2;

///
/// Checks the fields present in `user_data`. Absent fields pass,
/// and so does an empty email.
///
pub fn validate_fields(user_data: &UserData) -> Result<()> {
    let mut errors = match without_empty_email(user_data).validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    // Length counts UTF-16 code units, so one astral character is two
    if let Some(name) = &user_data.name {
        if name.encode_utf16().count() < MIN_NAME_LEN {
            let mut error = ValidationError::new("length");
            error.message = Some(Cow::from("name must be at least 2 characters"));
            errors.add("name", error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::ValidationFailed(join_messages(&errors)))
    }
}

fn without_empty_email(user_data: &UserData) -> Cow<'_, UserData> {
    if user_data.email.as_deref() == Some("") {
        Cow::Owned(UserData { email: None, ..user_data.clone() })
    } else {
        Cow::Borrowed(user_data)
    }
}

fn join_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields.into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
