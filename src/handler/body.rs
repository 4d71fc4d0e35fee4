//! Request body decoding.

use std::borrow::Cow;

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    Engine as _,
};

use crate::error::{HandlerError, Result};
use crate::models::{ApiEvent, PutItemRequest};

/// Padding is optional and stray low bits in the last symbol are ignored.
const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Returns the event body as text, base64-decoding it first when flagged.
pub fn decode_body(event: &ApiEvent) -> Result<Cow<'_, str>> {
    let raw = event.body.as_deref().ok_or(HandlerError::MissingBody)?;
    if !event.is_base64_encoded {
        return Ok(Cow::Borrowed(raw));
    }

    Ok(Cow::Owned(String::from_utf8(decode_base64(raw)?)?))
}

/// Decodes base64 text the way clients actually send it: with or without
/// padding, wrapped across lines, in the standard or the URL-safe alphabet.
fn decode_base64(raw: &str) -> Result<Vec<u8>> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let engine = if compact.contains(|c| c == '-' || c == '_') {
        &URL_SAFE_LENIENT
    } else {
        &STANDARD_LENIENT
    };
    Ok(engine.decode(compact)?)
}

/// Decodes, parses and validates the body of a `PUT /items` event.
pub fn parse_put_request(event: &ApiEvent) -> Result<PutItemRequest> {
    let text = decode_body(event)?;
    let request: PutItemRequest = serde_json::from_str(&text)?;
    request.validate()?;
    Ok(request)
}
