use super::{AuthError, Profile};

const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly two whitespace separated parts, the first being
/// `Bearer` in any case. A missing header is `MissingHeader`; anything else
/// that does not fit is `MalformedHeader`.
pub fn parse_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// The owner identity of an authenticated profile.
pub fn owner_identity(profile: &Profile) -> Result<&str, AuthError> {
    profile
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .ok_or_else(|| AuthError::MissingClaim("email".to_string()))
}
