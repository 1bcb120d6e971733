use crate::encode_response;
use crate::error::Result;
use crate::request_message::QueryMessage;
use crate::resolver::Resolver;
use crate::resource_record::ResourceRecord;
use crate::response_message::ResponseMessage;

/// Turns one query datagram into one response datagram.
///
/// Holds nothing but the resolver, so a single handler can serve any number
/// of queries in parallel.
#[derive(Debug, Clone)]
pub struct QueryHandler<R> {
    resolver: R,
}

impl<R: Resolver> QueryHandler<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn respond(&self, query: &QueryMessage) -> Result<ResponseMessage> {
        let question = query.question();
        tracing::debug!(
            "query {}: {} {} {}",
            query.id(),
            question.domain(),
            question.qtype(),
            question.qclass()
        );

        let mut response = ResponseMessage::for_query(query);

        if !question.is_address_query() {
            tracing::debug!("query {}: only A/IN is answered", query.id());
            return Ok(response);
        }

        match self.resolver.resolve(question.domain()) {
            Some(address) => {
                tracing::debug!(
                    "query {}: resolved {} to {}",
                    query.id(),
                    question.domain(),
                    address
                );
                response.push_answer(ResourceRecord::a_record(question.domain(), address)?);
            }
            None => {
                tracing::debug!("query {}: no record for {}", query.id(), question.domain());
            }
        }

        Ok(response)
    }

    pub fn handle(&self, request: &[u8]) -> Result<Vec<u8>> {
        let query = QueryMessage::parse_query(request)?;
        let response = self.respond(&query)?;

        encode_response(&response)
    }
}

pub fn handle_query<R: Resolver + ?Sized>(resolver: &R, request: &[u8]) -> Result<Vec<u8>> {
    QueryHandler::new(resolver).handle(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DnsError;
    use bytes::BytesMut;
    use crate::header::{HEADER_LEN, RESPONSE_FLAGS};
    use crate::resource_record::DEFAULT_TTL;
    use crate::utils::encode_name;
    use std::collections::HashMap;
    use std::net::Ipv4Addr;
    use std::sync::Arc;

    fn records() -> HashMap<String, String> {
        let mut records = HashMap::new();
        records.insert("example.com".to_string(), "93.184.216.34".to_string());
        records.insert("www.youtube.com".to_string(), "127.0.0.1".to_string());
        records.insert("broken.test".to_string(), "300.1.1.1".to_string());
        records.insert("padded.test".to_string(), "010.001.002.003".to_string());
        records
    }

    fn build_query(id: u16, domain: &str) -> Vec<u8> {
        let mut bytes = BytesMut::new();
        QueryMessage::new(id, domain).to_bytes(&mut bytes).unwrap();
        bytes.to_vec()
    }

    #[test]
    fn resolved_query() {
        let handler = QueryHandler::new(records());
        let bytes = handler.handle(&build_query(0xBEEF, "example.com")).unwrap();

        let response = ResponseMessage::parse_response(&bytes).unwrap();
        assert_eq!(0xBEEF, response.id());
        assert_eq!(RESPONSE_FLAGS, response.header().flags());
        assert_eq!(1, response.header().qd_count());
        assert_eq!(1, response.header().answer_count());
        assert_eq!(0, response.header().authority_count());
        assert_eq!(0, response.header().additional_count());
        assert_eq!(Some("example.com"), response.question().map(|q| q.domain()));

        let answers = response.answers();
        assert_eq!(1, answers.len());
        assert_eq!("example.com", answers[0].domain());
        assert_eq!(DEFAULT_TTL, answers[0].ttl());
        assert_eq!(Some(Ipv4Addr::new(93, 184, 216, 34)), answers[0].ipv4_address());
    }

    #[test]
    fn unresolved_query() {
        let handler = QueryHandler::new(records());
        let bytes = handler.handle(&build_query(42, "nonexistent.test")).unwrap();

        let response = ResponseMessage::parse_response(&bytes).unwrap();
        assert_eq!(42, response.id());
        assert_eq!(RESPONSE_FLAGS, response.header().flags());
        assert_eq!(0, response.header().answer_count());
        assert!(response.answers().is_empty());
        assert_eq!(Some("nonexistent.test"), response.question().map(|q| q.domain()));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let handler = QueryHandler::new(records());
        let bytes = handler.handle(&build_query(1, "EXAMPLE.com")).unwrap();

        let response = ResponseMessage::parse_response(&bytes).unwrap();
        assert!(response.answers().is_empty());
        assert_eq!(Some("EXAMPLE.com"), response.question().map(|q| q.domain()));
    }

    #[test]
    fn truncated_query_fails() {
        let handler = QueryHandler::new(records());
        for len in 0..HEADER_LEN {
            let request = &build_query(1, "example.com")[..len];
            assert!(matches!(
                handler.handle(request),
                Err(DnsError::MalformedMessage(_))
            ));
        }
    }

    #[test]
    fn oversized_label_byte_fails() {
        let mut request = build_query(1, "www.example.com");
        // length byte of "example"
        request[HEADER_LEN + 4] = 64;

        assert!(matches!(
            handle_query(&records(), &request),
            Err(DnsError::MalformedMessage(_))
        ));
    }

    #[test]
    fn bad_table_address_fails_whole_response() {
        assert_eq!(
            Err(DnsError::InvalidAddress("300.1.1.1".to_string())),
            handle_query(&records(), &build_query(1, "broken.test"))
        );
    }

    #[test]
    fn zero_padded_table_address_is_served() {
        let bytes = handle_query(&records(), &build_query(11, "padded.test")).unwrap();
        let response = ResponseMessage::parse_response(&bytes).unwrap();
        assert_eq!(vec![Ipv4Addr::new(10, 1, 2, 3)], response.addresses());
    }

    #[test]
    fn non_address_query_gets_empty_answer() {
        let mut request = build_query(9, "example.com");
        let qtype_at = request.len() - 4;
        // AAAA
        request[qtype_at + 1] = 28;

        let bytes = handle_query(&records(), &request).unwrap();
        let response = ResponseMessage::parse_response(&bytes).unwrap();
        assert!(response.answers().is_empty());
        assert_eq!(&request[HEADER_LEN..], &bytes[HEADER_LEN..]);
    }

    #[test]
    fn output_has_no_padding() {
        let handler = QueryHandler::new(records());
        for (domain, ancount) in [("example.com", 1), ("nonexistent.test", 0)] {
            let bytes = handler.handle(&build_query(3, domain)).unwrap();

            let name_len = encode_name(domain).unwrap().len();
            let question_len = name_len + 4;
            let answer_len = name_len + 14;
            assert_eq!(HEADER_LEN + question_len + answer_len * ancount, bytes.len());
        }
    }

    #[test]
    fn trailing_bytes_after_question_are_ignored() {
        let mut request = build_query(5, "example.com");
        request.extend(vec![0u8; 512 - request.len()]);

        let bytes = handle_query(&records(), &request).unwrap();
        let response = ResponseMessage::parse_response(&bytes).unwrap();
        assert_eq!(1, response.answers().len());
    }

    #[test]
    fn sequential_queries_do_not_share_answers() {
        let handler = QueryHandler::new(records());

        let first = handler.handle(&build_query(1, "example.com")).unwrap();
        let second = handler.handle(&build_query(2, "nonexistent.test")).unwrap();
        let third = handler.handle(&build_query(3, "www.youtube.com")).unwrap();

        let first = ResponseMessage::parse_response(&first).unwrap();
        let second = ResponseMessage::parse_response(&second).unwrap();
        let third = ResponseMessage::parse_response(&third).unwrap();

        assert_eq!(1, first.id());
        assert_eq!(vec![Ipv4Addr::new(93, 184, 216, 34)], first.addresses());
        assert_eq!(2, second.id());
        assert!(second.answers().is_empty());
        assert_eq!(3, third.id());
        assert_eq!(vec![Ipv4Addr::LOCALHOST], third.addresses());
    }

    #[test]
    fn concurrent_queries_do_not_share_answers() {
        let handler = Arc::new(QueryHandler::new(Arc::new(records())));

        std::thread::scope(|s| {
            for i in 0..8u16 {
                let handler = Arc::clone(&handler);
                s.spawn(move || {
                    let domain = if i % 2 == 0 { "example.com" } else { "nonexistent.test" };
                    for _ in 0..100 {
                        let bytes = handler.handle(&build_query(i, domain)).unwrap();
                        let response = ResponseMessage::parse_response(&bytes).unwrap();

                        assert_eq!(i, response.id());
                        assert_eq!(Some(domain), response.question().map(|q| q.domain()));
                        if i % 2 == 0 {
                            assert_eq!(vec![Ipv4Addr::new(93, 184, 216, 34)], response.addresses());
                        } else {
                            assert!(response.answers().is_empty());
                        }
                    }
                });
            }
        });
    }
}
