use bytes::{BufMut, BytesMut};

use crate::error::{DnsError, Result};

// https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const SEPARATOR: &str = ".";

// qname 转换为可读的字符串
//
// Returns the name and the position right after its terminating zero byte.
pub fn decode_name(buffer: &[u8], cursor: usize) -> Result<(String, usize)> {
    let mut labels: Vec<&str> = Vec::new();
    let mut index = cursor;

    loop {
        let label_len = match buffer.get(index) {
            Some(len) => *len as usize,
            None => {
                return Err(DnsError::MalformedMessage(format!(
                    "name starting at {} is not terminated",
                    cursor
                )))
            }
        };

        if label_len == 0 {
            index += 1;
            break;
        }

        // 64..=255 are either pointers (0b11) or reserved label types
        if label_len > MAX_LABEL_LEN {
            return Err(DnsError::MalformedMessage(format!(
                "label length byte {:#04x} at {}",
                label_len, index
            )));
        }

        let label_begin_index = index + 1;
        let next_index = label_begin_index + label_len;

        let label_bytes = buffer.get(label_begin_index..next_index).ok_or_else(|| {
            DnsError::MalformedMessage(format!(
                "label at {} runs past the end of the message",
                index
            ))
        })?;

        let label = std::str::from_utf8(label_bytes).map_err(|_| {
            DnsError::MalformedMessage(format!("label at {} is not valid UTF-8", index))
        })?;
        if label.contains(SEPARATOR) {
            return Err(DnsError::MalformedMessage(format!(
                "label at {} contains '{}'",
                index, SEPARATOR
            )));
        }

        labels.push(label);
        index = next_index;

        // terminator still to come
        if index - cursor + 1 > MAX_NAME_LEN {
            return Err(DnsError::MalformedMessage(format!(
                "name starting at {} is longer than {} bytes",
                cursor, MAX_NAME_LEN
            )));
        }
    }

    Ok((labels.join(SEPARATOR), index))
}

// 把域名从转换为 C 风格的字符串
pub fn encode_name(domain: &str) -> Result<Vec<u8>> {
    let mut qname = BytesMut::with_capacity(domain.len() + 2);
    write_name(domain, &mut qname)?;

    Ok(qname.to_vec())
}

// Appends the encoded name, or leaves `bytes` untouched on error.
pub fn write_name(domain: &str, bytes: &mut BytesMut) -> Result<()> {
    let domain = domain.strip_suffix(SEPARATOR).unwrap_or(domain);

    let mut qname = BytesMut::with_capacity(domain.len() + 2);
    if !domain.is_empty() {
        for label in domain.split(SEPARATOR) {
            if label.is_empty() {
                return Err(DnsError::InvalidName(format!(
                    "'{}' contains an empty label",
                    domain
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DnsError::InvalidName(format!(
                    "label '{}' is longer than {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }

            qname.put_u8(label.len() as u8);
            qname.put_slice(label.as_bytes());
        }
    }
    qname.put_u8(0);

    if qname.len() > MAX_NAME_LEN {
        return Err(DnsError::InvalidName(format!(
            "'{}' encodes to {} bytes, limit is {}",
            domain,
            qname.len(),
            MAX_NAME_LEN
        )));
    }

    bytes.put_slice(&qname);

    Ok(())
}
