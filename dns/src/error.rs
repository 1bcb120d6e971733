use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),
}

// Reads only fail when the datagram ends early.
impl From<std::io::Error> for DnsError {
    fn from(err: std::io::Error) -> Self {
        DnsError::MalformedMessage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DnsError>;
