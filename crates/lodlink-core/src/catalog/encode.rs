//! Percent-encoding for catalog resource names.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters kept verbatim in resource names. Underscore and comma are
/// word separators in the catalog's naming convention and must survive
/// encoding; `-`, `.` and `~` are unreserved.
const RESOURCE_NAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'~')
    .remove(b'_')
    .remove(b',');

/// Encode a resource name for inclusion in a catalog URI path.
pub fn encode_resource_name(name: &str) -> String {
    utf8_percent_encode(name, RESOURCE_NAME).to_string()
}

/// Decode a path segment back to a resource name. Falls back to the raw
/// segment when it is not valid percent-encoded UTF-8.
pub fn decode_resource_name(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
