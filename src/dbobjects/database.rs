use std::io::Write;

use tracing::debug;

use super::record::Record;
use crate::Result;

/// An ordered, append-only, in-memory collection of records. Insertion order
/// is the print order.
#[derive(Debug, Default, PartialEq)]
pub struct Database {
    records: Vec<Record>,
}

impl Database {
    pub fn new() -> Self {
        Self { records: vec![] }
    }

    /// Constructs a record from the given inputs and appends it. Accepts any
    /// name and any age, including empty text and negative values.
    pub fn add(&mut self, name: &str, age: i64) {
        debug!("{:<12} - {name}: {age}", "ADD_RECORD");
        self.records.push(Record::new(name.to_string(), age));
    }

    /// Writes one line per record, in insertion order. An empty database
    /// writes nothing.
    pub fn print_all<W: Write>(&self, out: &mut W) -> Result<()> {
        for record in &self.records {
            record.display(out)?;
        }
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Database;

    fn rendered(db: &Database) -> String {
        let mut out = Vec::new();
        db.print_all(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn print_all_in_insertion_order() {
        let mut db = Database::new();
        db.add("Alice", 30);
        db.add("Bob", 25);
        db.add("Charlie", 40);

        assert_eq!(db.len(), 3);
        assert_eq!(rendered(&db), "Alice: 30\nBob: 25\nCharlie: 40\n");
    }

    #[test]
    fn empty_database_prints_nothing() {
        let db = Database::new();
        assert!(db.is_empty());
        assert_eq!(rendered(&db), "");
    }

    #[test]
    fn print_all_is_idempotent() {
        let mut db = Database::new();
        db.add("Alice", 30);
        db.add("Bob", 25);

        let first = rendered(&db);
        assert_eq!(rendered(&db), first);
        assert_eq!(rendered(&db), first);
    }

    #[test]
    fn add_accepts_any_inputs() {
        let mut db = Database::new();
        db.add("", 0);
        db.add("negative", -42);
        db.add("huge", i64::MAX);

        assert_eq!(db.records()[0].name, "");
        assert_eq!(db.records()[1].age, -42);
        assert_eq!(
            rendered(&db),
            format!(": 0\nnegative: -42\nhuge: {}\n", i64::MAX)
        );
    }

    #[test]
    fn one_line_per_add() {
        let mut db = Database::new();
        for i in 0..10 {
            db.add("person", i);
        }
        assert_eq!(rendered(&db).lines().count(), 10);
    }
}
