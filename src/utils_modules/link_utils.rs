use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::enums::link_target::*;

/// Characters `encodeURIComponent` leaves untouched besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

#[doc = "Deep link that opens the chat application with `message` prefilled"]
pub fn share_link(message: &str, target: LinkTarget) -> String {
    format!("{}{}", target.base_url(), encode_uri_component(message))
}

#[doc = "Message length as a browser or chat client counts it (UTF-16 code units)"]
pub fn char_count(message: &str) -> usize {
    message.encode_utf16().count()
}
