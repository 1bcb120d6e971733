use bytes::BytesMut;
use std::io::Cursor;
use std::net::Ipv4Addr;

use crate::error::{DnsError, Result};
use crate::header::Header;
use crate::question::Question;
use crate::request_message::QueryMessage;
use crate::resource_record::ResourceRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    header: Header,
    question: Option<Question>,
    answer_records: Vec<ResourceRecord>,
}

impl ResponseMessage {
    /// Empty answer for `query`, echoing its id and question.
    pub fn for_query(query: &QueryMessage) -> Self {
        Self {
            header: Header::response(query.id(), 0),
            question: Some(query.question().clone()),
            answer_records: Vec::new(),
        }
    }

    pub fn push_answer(&mut self, record: ResourceRecord) {
        self.answer_records.push(record);
        self.header = Header::response(self.header.id(), self.answer_records.len() as u16);
    }

    pub fn to_bytes(&self, bytes: &mut BytesMut) -> Result<()> {
        let question = self.question.as_ref().ok_or_else(|| {
            DnsError::MalformedMessage(format!("response {} has no question", self.id()))
        })?;

        Header::response(self.id(), self.answer_records.len() as u16).to_bytes(bytes);
        question.to_bytes(bytes)?;
        for record in &self.answer_records {
            record.to_bytes(bytes)?;
        }

        Ok(())
    }

    // 解析 DNS 的响应
    pub fn parse_response(response: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(response);

        let header = Header::parse_from_reader(&mut reader)?;

        let question = if header.qd_count() == 1 {
            Some(Question::parse_from_reader(&mut reader)?)
        } else {
            None
        };

        let count = header.answer_count() as usize;
        let mut answer_records: Vec<ResourceRecord> = Vec::with_capacity(count);
        for _ in 0..header.answer_count() {
            let record = ResourceRecord::parse_from_reader(&mut reader)?;
            answer_records.push(record);
        }

        let msg = Self {
            header,
            question,
            answer_records,
        };

        Ok(msg)
    }

    pub fn id(&self) -> u16 {
        self.header.id()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answer_records
    }

    pub fn first_address(&self) -> Option<Ipv4Addr> {
        self.answer_records.first()?.ipv4_address()
    }

    pub fn addresses(&self) -> Vec<Ipv4Addr> {
        self.answer_records
            .iter()
            .filter_map(|r| r.ipv4_address())
            .collect()
    }
}
