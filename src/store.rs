// src/store.rs
//
// The save capability. A bill can be saved more than once (duplicate index
// links, re-save after its votes are attached); every sink keeps only the
// latest copy per (session, chamber, identifier).

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::sanitize::sanitize_filename;
use crate::error::BoxError;
use crate::model::{Bill, Chamber};

pub trait Save {
    fn save(&mut self, bill: &Bill) -> Result<(), BoxError>;
}

impl<S: Save + ?Sized> Save for &mut S {
    fn save(&mut self, bill: &Bill) -> Result<(), BoxError> {
        (**self).save(bill)
    }
}

pub type BillKey = (String, Chamber, String);

fn key(bill: &Bill) -> BillKey {
    (bill.session.clone(), bill.chamber, bill.identifier.clone())
}

/// Keeps bills in memory, ordered by key.
#[derive(Default, Debug)]
pub struct MemorySink {
    bills: BTreeMap<BillKey, Bill>,
    saves: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session: &str, chamber: Chamber, identifier: &str) -> Option<&Bill> {
        self.bills.get(&(s!(session), chamber, s!(identifier)))
    }

    pub fn bills(&self) -> impl Iterator<Item = &Bill> {
        self.bills.values()
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    /// Number of `save` calls, overwrites included.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Save for MemorySink {
    fn save(&mut self, bill: &Bill) -> Result<(), BoxError> {
        self.bills.insert(key(bill), bill.clone());
        self.saves += 1;
        Ok(())
    }
}

/// One pretty-printed JSON file per bill:
/// `<root>/<session>/<chamber>/<identifier>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    root: PathBuf,
}

impl JsonFileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, bill: &Bill) -> PathBuf {
        self.root
            .join(sanitize_filename(&bill.session))
            .join(bill.chamber.as_str())
            .join(format!("{}.json", sanitize_filename(&bill.identifier)))
    }

    pub fn load(path: &Path) -> Result<Bill, BoxError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Save for JsonFileSink {
    fn save(&mut self, bill: &Bill) -> Result<(), BoxError> {
        let path = self.path_for(bill);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write next to the target and rename, so a reader never sees half a bill.
        let tmp = path.with_extension("json.tmp");
        {
            let mut w = BufWriter::new(fs::File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut w, bill)?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        fs::rename(&tmp, &path).map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;

        logd!("saved {} → {}", bill.identifier, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(id: &str, title: &str) -> Bill {
        Bill::new("2009", Chamber::Lower, id, title)
    }

    #[test]
    fn memory_sink_last_write_wins() {
        let mut sink = MemorySink::new();
        sink.save(&bill("HB0001", "First")).unwrap();
        sink.save(&bill("HB0001", "Second")).unwrap();
        sink.save(&bill("HB0002", "Other")).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.saves(), 3);
        assert_eq!(sink.get("2009", Chamber::Lower, "HB0001").unwrap().title, "Second");
        assert!(sink.get("2009", Chamber::Upper, "HB0001").is_none());
    }

    #[test]
    fn json_sink_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonFileSink::new(dir.path());

        let mut b = bill("HB0001", "First");
        sink.save(&b).unwrap();
        b.title = s!("Second");
        b.add_source("http://x.test/1");
        sink.save(&b).unwrap();

        let path = dir.path().join("2009").join("lower").join("HB0001.json");
        assert_eq!(sink.path_for(&b), path);
        let back = JsonFileSink::load(&path).unwrap();
        assert_eq!(back, b);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn json_sink_sanitizes_names() {
        let sink = JsonFileSink::new("/out");
        let b = Bill::new("2009 A", Chamber::Upper, "SB 2-A", "x");
        assert_eq!(sink.path_for(&b), PathBuf::from("/out/2009_A/upper/SB_2-A.json"));
    }
}
