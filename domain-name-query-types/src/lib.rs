use std::fmt;

pub type Name = String;

// https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.2
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QType {
    A,
    Other(u16),
}

impl QType {
    pub fn code(&self) -> u16 {
        match self {
            QType::A => 1,
            QType::Other(code) => *code,
        }
    }
}

impl From<u16> for QType {
    fn from(code: u16) -> Self {
        match code {
            1 => QType::A,
            other => QType::Other(other),
        }
    }
}

impl fmt::Display for QType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QType::A => write!(f, "A"),
            QType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

// https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.4
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QClass {
    In,
    Other(u16),
}

impl QClass {
    pub fn code(&self) -> u16 {
        match self {
            QClass::In => 1,
            QClass::Other(code) => *code,
        }
    }
}

impl From<u16> for QClass {
    fn from(code: u16) -> Self {
        match code {
            1 => QClass::In,
            other => QClass::Other(other),
        }
    }
}

impl fmt::Display for QClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QClass::In => write!(f, "IN"),
            QClass::Other(code) => write!(f, "CLASS{}", code),
        }
    }
}
