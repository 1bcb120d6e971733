use byteorder::{ReadBytesExt, BE};
use bytes::{BufMut, BytesMut};
use std::io::{Cursor, Read};
use std::net::Ipv4Addr;

use domain_name_query_types::{Name, QClass, QType};

use crate::error::{DnsError, Result};
use crate::utils::{decode_name, write_name};

pub const DEFAULT_TTL: u32 = 3600;

const A_RDLENGTH: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    domain: Name,
    rtype: QType,
    rclass: QClass,
    ttl: u32,
    rdata: Vec<u8>,
}

impl ResourceRecord {
    // `address` must be a dotted quad, e.g. "93.184.216.34"
    pub fn a_record(domain: &str, address: &str) -> Result<Self> {
        let ip = parse_ipv4(address)?;

        let record = Self {
            domain: domain.to_string(),
            rtype: QType::A,
            rclass: QClass::In,
            ttl: DEFAULT_TTL,
            rdata: ip.octets().to_vec(),
        };

        Ok(record)
    }

    pub fn to_bytes(&self, bytes: &mut BytesMut) -> Result<()> {
        write_name(&self.domain, bytes)?;

        bytes.put_u16(self.rtype.code());
        bytes.put_u16(self.rclass.code());
        bytes.put_u32(self.ttl);
        bytes.put_u16(self.rdata.len() as u16);
        bytes.put_slice(&self.rdata);

        Ok(())
    }

    // Names must be spelled out; compression pointers are rejected by the label codec.
    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self> {
        let (domain, next) = decode_name(rdr.get_ref(), rdr.position() as usize)?;
        rdr.set_position(next as u64);

        let rtype = QType::from(rdr.read_u16::<BE>()?);
        let rclass = QClass::from(rdr.read_u16::<BE>()?);
        let ttl = rdr.read_u32::<BE>()?;
        let rdlength = rdr.read_u16::<BE>()?;

        let mut rdata = vec![0; rdlength as usize];
        rdr.read_exact(&mut rdata)?;

        let record = Self {
            domain,
            rtype,
            rclass,
            ttl,
            rdata,
        };

        Ok(record)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn rtype(&self) -> QType {
        self.rtype
    }

    pub fn rclass(&self) -> QClass {
        self.rclass
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn rdata(&self) -> &[u8] {
        &self.rdata
    }

    pub fn ipv4_address(&self) -> Option<Ipv4Addr> {
        if self.rtype != QType::A || self.rdata.len() != A_RDLENGTH as usize {
            return None;
        }

        let addr = [self.rdata[0], self.rdata[1], self.rdata[2], self.rdata[3]];
        Some(Ipv4Addr::from(addr))
    }
}

// Four dot-separated decimal octets; leading zeros are plain decimal ("010" is 10).
fn parse_ipv4(address: &str) -> Result<Ipv4Addr> {
    let invalid = || DnsError::InvalidAddress(address.to_string());

    let mut octets = [0u8; 4];
    let mut parts = address.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next().ok_or_else(invalid)?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = part.parse().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(Ipv4Addr::from(octets))
}

/// Encodes one A record for `domain` pointing at `address`.
pub fn encode_answer(domain: &str, address: &str) -> Result<Vec<u8>> {
    let record = ResourceRecord::a_record(domain, address)?;
    let mut bytes = BytesMut::new();
    record.to_bytes(&mut bytes)?;

    Ok(bytes.to_vec())
}
