use byteorder::{ReadBytesExt, BE};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

use crate::error::{DnsError, Result};

pub const HEADER_LEN: usize = 12;

// QR = 1, RD = 1, RA = 1, RCODE = 0
pub const RESPONSE_FLAGS: u16 = 0x8180;
// rd = 1, rd 设置为 1 启用服务端的递归查询，只需一次请求即可返回地址
pub const QUERY_FLAGS: u16 = 0x0100;

// 12 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    id: u16,
    flags: u16,
    qdcount: u16, // question 数量，一般为 1
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl Header {
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: QUERY_FLAGS,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn response(id: u16, ancount: u16) -> Self {
        Self {
            id,
            flags: RESPONSE_FLAGS,
            qdcount: 1,
            ancount,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn to_bytes(&self, bytes: &mut BytesMut) {
        bytes.put_u16(self.id);
        bytes.put_u16(self.flags);
        bytes.put_u16(self.qdcount);
        bytes.put_u16(self.ancount);
        bytes.put_u16(self.nscount);
        bytes.put_u16(self.arcount);
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self> {
        let remaining = rdr.get_ref().len().saturating_sub(rdr.position() as usize);
        if remaining < HEADER_LEN {
            return Err(DnsError::MalformedMessage(format!(
                "header needs {} bytes, got {}",
                HEADER_LEN, remaining
            )));
        }

        let id = rdr.read_u16::<BE>()?;
        let flags = rdr.read_u16::<BE>()?;
        let qdcount = rdr.read_u16::<BE>()?;
        let ancount = rdr.read_u16::<BE>()?;
        let nscount = rdr.read_u16::<BE>()?;
        let arcount = rdr.read_u16::<BE>()?;

        let h = Self {
            id,
            flags,
            qdcount,
            ancount,
            nscount,
            arcount,
        };

        Ok(h)
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn qd_count(&self) -> u16 {
        self.qdcount
    }

    pub fn answer_count(&self) -> u16 {
        self.ancount
    }

    pub fn authority_count(&self) -> u16 {
        self.nscount
    }

    pub fn additional_count(&self) -> u16 {
        self.arcount
    }
}
