use bytes::BytesMut;
use std::io::Cursor;

use crate::error::Result;
use crate::header::Header;
use crate::question::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMessage {
    header: Header,
    question: Question,
}

impl QueryMessage {
    pub fn new(id: u16, domain: &str) -> Self {
        let header = Header::query(id);
        let question = Question::new(domain);

        Self { header, question }
    }

    pub fn to_bytes(&self, bytes: &mut BytesMut) -> Result<()> {
        self.header.to_bytes(bytes);
        self.question.to_bytes(bytes)?;

        Ok(())
    }

    // 解析 DNS 的请求
    //
    // The header counts are kept but not checked: only the first question is read.
    pub fn parse_query(request: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(request);

        let header = Header::parse_from_reader(&mut reader)?;
        if header.qd_count() != 1 {
            tracing::debug!(
                "query {} declares {} questions, reading the first",
                header.id(),
                header.qd_count()
            );
        }

        let question = Question::parse_from_reader(&mut reader)?;

        Ok(Self { header, question })
    }

    pub fn id(&self) -> u16 {
        self.header.id()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn question(&self) -> &Question {
        &self.question
    }
}
