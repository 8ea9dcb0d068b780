//! Per-range formatting attributes.
//!
//! Formatting is a list of runs, each pairing a char range with one
//! attribute. Runs are non-empty, except that the highlight may mark an empty
//! selection at a cursor position. Runs may overlap. They are kept in the order they were applied,
//! and the attribute set at an offset is the union of every run covering it.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A visual attribute attached to a range of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Marks the selected sentence. At most one highlight run exists.
    Highlight,
    Bold,
    Italic,
    Underline,
}

/// One attribute applied over a half-open char range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRun {
    pub range: Range<usize>,
    pub attribute: Attribute,
}

impl FormatRun {
    pub fn new(range: Range<usize>, attribute: Attribute) -> Self {
        Self { range, attribute }
    }

    /// Shift both bounds by a char delta.
    fn adjust_positions(&mut self, char_delta: usize) {
        self.range.start += char_delta;
        self.range.end += char_delta;
    }
}

/// The formatting layer of a text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatting {
    runs: Vec<FormatRun>,
}

impl Formatting {
    pub fn new() -> Self {
        Self::default()
    }

    /// All runs in application order.
    pub fn runs(&self) -> &[FormatRun] {
        &self.runs
    }

    /// Append a run. Empty ranges are ignored, except for the highlight.
    pub fn push(&mut self, run: FormatRun) {
        if !run.range.is_empty() || run.attribute == Attribute::Highlight {
            self.runs.push(run);
        }
    }

    /// Ranges carrying `attribute`, in application order.
    pub fn ranges_with(&self, attribute: Attribute) -> Vec<Range<usize>> {
        self.runs
            .iter()
            .filter(|run| run.attribute == attribute)
            .map(|run| run.range.clone())
            .collect()
    }

    /// Attributes covering `offset`, without duplicates, in application order.
    pub fn attributes_at(&self, offset: usize) -> Vec<Attribute> {
        let mut attrs = Vec::new();
        for run in &self.runs {
            if run.range.contains(&offset) && !attrs.contains(&run.attribute) {
                attrs.push(run.attribute);
            }
        }
        attrs
    }

    /// Drop every run carrying `attribute`.
    pub fn clear_attribute(&mut self, attribute: Attribute) {
        self.runs.retain(|run| run.attribute != attribute);
    }

    /// Remove `attribute` from `range`, splitting runs that extend past it.
    pub fn remove_attribute(&mut self, range: Range<usize>, attribute: Attribute) {
        if range.is_empty() {
            return;
        }
        let mut runs = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            let disjoint = run.range.end <= range.start || run.range.start >= range.end;
            if run.attribute != attribute || disjoint {
                runs.push(run);
                continue;
            }
            if run.range.start < range.start {
                runs.push(FormatRun::new(run.range.start..range.start, attribute));
            }
            if run.range.end > range.end {
                runs.push(FormatRun::new(range.end..run.range.end, attribute));
            }
        }
        self.runs = runs;
    }

    /// Runs clipped to `range` and rebased so `range.start` becomes 0.
    ///
    /// `skip` names an attribute to leave out, typically the highlight.
    pub fn runs_within(&self, range: Range<usize>, skip: Option<Attribute>) -> Vec<FormatRun> {
        self.runs
            .iter()
            .filter(|run| Some(run.attribute) != skip)
            .filter_map(|run| {
                let start = run.range.start.max(range.start);
                let end = run.range.end.min(range.end);
                (start < end).then(|| {
                    FormatRun::new(start - range.start..end - range.start, run.attribute)
                })
            })
            .collect()
    }

    /// Update runs for the deletion of `deleted`.
    ///
    /// Runs after the deletion move left, runs inside it disappear and runs
    /// partially covering it keep only their surviving part.
    pub fn on_delete(&mut self, deleted: Range<usize>) {
        let removed = deleted.len();
        if removed == 0 {
            return;
        }
        let map = |offset: usize| {
            if offset <= deleted.start {
                offset
            } else if offset >= deleted.end {
                offset - removed
            } else {
                deleted.start
            }
        };
        for run in &mut self.runs {
            run.range = map(run.range.start)..map(run.range.end);
        }
        self.runs.retain(|run| !run.range.is_empty());
    }

    /// Update runs for the insertion of `inserted_len` chars at `offset`.
    ///
    /// Runs starting at or after `offset` move right. A run straddling
    /// `offset` grows over the insertion; a run ending exactly at `offset`
    /// stays put.
    pub fn on_insert(&mut self, offset: usize, inserted_len: usize) {
        if inserted_len == 0 {
            return;
        }
        for run in &mut self.runs {
            if run.range.start >= offset {
                run.adjust_positions(inserted_len);
            } else if run.range.end > offset {
                run.range.end += inserted_len;
            }
        }
    }

    /// Add runs that arrived with inserted text, rebased from 0 to `offset`.
    pub fn extend_rebased(&mut self, offset: usize, runs: impl IntoIterator<Item = FormatRun>) {
        for mut run in runs {
            run.adjust_positions(offset);
            self.push(run);
        }
    }

    /// Drop all runs.
    pub fn clear(&mut self) {
        self.runs.clear();
    }
}
