//! Per-stage outcome records.
//!
//! Each stage walks the manifest once and records one outcome per item,
//! tagged with the item's position and derived name so failures are
//! attributable. Rendering the records (console lines, summaries) is the
//! CLI's job.

/// One item's outcome within a stage pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord<O> {
    /// Zero-based position in the manifest's `data` array.
    pub index: usize,
    /// Derived filename, the item's identity across stages.
    pub name: String,
    pub outcome: O,
}

/// Ordered outcome records for one stage pass over the manifest.
#[derive(Debug, Default)]
pub struct StageSummary<O> {
    pub records: Vec<ItemRecord<O>>,
}

impl<O> StageSummary<O> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, index: usize, name: String, outcome: O) {
        self.records.push(ItemRecord {
            index,
            name,
            outcome,
        });
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn count(&self, pred: impl Fn(&O) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.outcome)).count()
    }
}
