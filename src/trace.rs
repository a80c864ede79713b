//! Memory access records and the line-oriented trace format (`<I|D> <hex-address>`).

use std::fmt;
use std::io::BufRead;

use crate::error::TraceError;

/// Which cache path an access takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessKind {
    Instruction,
    Data,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Instruction => write!(f, "I"),
            AccessKind::Data => write!(f, "D"),
        }
    }
}

/// A single simulated memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRecord {
    pub address: u32,
    pub kind: AccessKind,
}

impl AccessRecord {
    pub fn instruction(address: u32) -> Self {
        Self {
            address,
            kind: AccessKind::Instruction,
        }
    }

    pub fn data(address: u32) -> Self {
        Self {
            address,
            kind: AccessKind::Data,
        }
    }
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:x}", self.kind, self.address)
    }
}

/// Parses one trace line. Returns `Ok(None)` for blank lines.
///
/// `line_no` is 1-based and only used for error messages.
pub fn parse_line(text: &str, line_no: usize) -> Result<Option<AccessRecord>, TraceError> {
    let mut tokens = text.split_whitespace();
    let Some(kind_token) = tokens.next() else {
        return Ok(None);
    };
    let kind = match kind_token {
        "I" => AccessKind::Instruction,
        "D" => AccessKind::Data,
        other => {
            return Err(TraceError::UnknownAccessKind {
                line: line_no,
                token: other.to_string(),
            })
        }
    };
    let addr_token = tokens
        .next()
        .ok_or(TraceError::MissingAddress { line: line_no })?;
    let digits = addr_token
        .strip_prefix("0x")
        .or_else(|| addr_token.strip_prefix("0X"))
        .unwrap_or(addr_token);
    let address = u32::from_str_radix(digits, 16).map_err(|_| TraceError::InvalidAddress {
        line: line_no,
        token: addr_token.to_string(),
    })?;
    Ok(Some(AccessRecord { address, kind }))
}

/// Iterator over the access records of a trace, in file order.
pub struct TraceReader<R> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<AccessRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_no += 1;
            match parse_line(&self.buf, self.line_no) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
