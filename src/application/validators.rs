use serde_json::Value;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{user_type::UserType, waitlist_entry::NormalizedEmail},
};

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const USER_TYPE_REQUIRED: &str = "Please select whether you're a worker or homeowner.";

/// Loose shape check for waitlist emails: at least one `@` and one `.`.
/// Deliverability is not our problem here, only obvious typos.
pub fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Pulls the email out of an untyped request field, normalizes it, and
/// applies the shape check.
pub fn parse_email(raw: Option<&Value>) -> AppResult<NormalizedEmail> {
    let raw = match raw {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return Err(AppError::Validation(EMAIL_REQUIRED.into())),
    };

    let email = NormalizedEmail::new(raw);
    if !is_plausible_email(email.as_str()) {
        return Err(AppError::Validation(EMAIL_INVALID.into()));
    }
    Ok(email)
}

pub fn parse_user_type(raw: Option<&Value>) -> AppResult<UserType> {
    raw.and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AppError::Validation(USER_TYPE_REQUIRED.into()))
}
