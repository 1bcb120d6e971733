use byteorder::{ReadBytesExt, BE};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

use domain_name_query_types::{Name, QClass, QType};

use crate::error::Result;
use crate::utils::{decode_name, write_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    domain: Name,
    qtype: QType,
    qclass: QClass,
}

impl Question {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            qtype: QType::A,
            qclass: QClass::In,
        }
    }

    pub fn to_bytes(&self, bytes: &mut BytesMut) -> Result<()> {
        write_name(&self.domain, bytes)?;

        bytes.put_u16(self.qtype.code());
        bytes.put_u16(self.qclass.code());

        Ok(())
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self> {
        let (domain, next) = decode_name(rdr.get_ref(), rdr.position() as usize)?;
        rdr.set_position(next as u64);

        let qtype = QType::from(rdr.read_u16::<BE>()?);
        let qclass = QClass::from(rdr.read_u16::<BE>()?);

        let q = Self {
            domain,
            qtype,
            qclass,
        };

        Ok(q)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn qtype(&self) -> QType {
        self.qtype
    }

    pub fn qclass(&self) -> QClass {
        self.qclass
    }

    pub fn is_address_query(&self) -> bool {
        self.qtype == QType::A && self.qclass == QClass::In
    }
}
