use std::fmt;
use std::io::Write;

use crate::Result;

/// A single named entry. Both fields are plain value members and the record
/// is immutable after construction.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Record {
    pub name: String,
    pub age: i64,
}

impl Record {
    pub fn new(name: String, age: i64) -> Self {
        Self { name, age }
    }

    /// Writes the record as one `<name>: <age>` line.
    pub fn display<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.age)
    }
}
