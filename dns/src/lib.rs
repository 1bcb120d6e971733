//! Wire format of a minimal A-record responder.
//!
//! <https://datatracker.ietf.org/doc/html/rfc1035#section-4>

mod error;
mod handler;
mod header;
mod question;
mod request_message;
mod resolver;
mod resource_record;
mod response_message;
mod utils;

use bytes::BytesMut;

pub use error::{DnsError, Result};
pub use handler::{handle_query, QueryHandler};
pub use header::{Header, HEADER_LEN, QUERY_FLAGS, RESPONSE_FLAGS};
pub use question::Question;
pub use request_message::QueryMessage;
pub use resolver::Resolver;
pub use resource_record::{encode_answer, ResourceRecord, DEFAULT_TTL};
pub use response_message::ResponseMessage;
pub use utils::{decode_name, encode_name, MAX_LABEL_LEN, MAX_NAME_LEN};

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1
//
// Messages carried by UDP are restricted to 512 bytes (not counting the IP
// or UDP headers).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

pub fn decode_query(request_bytes: &[u8]) -> Result<QueryMessage> {
    QueryMessage::parse_query(request_bytes)
}

pub fn encode_response(response: &ResponseMessage) -> Result<Vec<u8>> {
    let mut response_bytes = BytesMut::new();
    response.to_bytes(&mut response_bytes)?;

    Ok(response_bytes.to_vec())
}

pub fn encode_request(id: u16, domain: &str) -> Result<Vec<u8>> {
    let request_msg = QueryMessage::new(id, domain);
    let mut request_bytes = BytesMut::new();
    request_msg.to_bytes(&mut request_bytes)?;

    Ok(request_bytes.to_vec())
}

pub fn decode_response(response_bytes: &[u8]) -> Result<ResponseMessage> {
    ResponseMessage::parse_response(response_bytes)
}
