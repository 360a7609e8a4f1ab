//! Column width calculation for group-bordered tables

use std::ops::Range;

/// Display cells between adjacent visible columns: pad, border, pad.
pub const SEPARATOR_WIDTH: usize = 3;

/// A partition of the display columns into adjacent merged groups.
///
/// Construction checks the size-sum invariant once, so every later
/// `update`/`get` call can trust the offsets.
#[derive(Debug, Clone)]
pub struct Grouping {
    sizes: Vec<usize>,
    offsets: Vec<usize>,
    columns: usize,
}

impl Grouping {
    /// Build a grouping over `columns` display columns.
    ///
    /// # Panics
    ///
    /// Panics when the group sizes do not sum to the column count; that
    /// is a contract violation by the caller, caught at startup.
    pub fn new(sizes: &[usize], columns: usize) -> Self {
        let total: usize = sizes.iter().sum();
        assert_eq!(total, columns, "group sizes must sum to the column count");

        let mut offsets = Vec::with_capacity(sizes.len());
        let mut offset = 0;
        for &size in sizes {
            offsets.push(offset);
            offset += size;
        }

        Self {
            sizes: sizes.to_vec(),
            offsets,
            columns,
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True when the grouping has no groups (only possible for zero
    /// columns).
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    fn members(&self, group: usize) -> Range<usize> {
        let start = self.offsets[group];
        start..start + self.sizes[group]
    }
}

/// Minimum per-column display widths satisfying every cell seen so far.
///
/// Seeded from the header cells, then widened by [`update`] passes over
/// group captions, content rows and the summary row. Hidden columns
/// (visibility mask false) stay at width zero and never receive growth.
///
/// [`update`]: WidthCalculator::update
#[derive(Debug, Clone)]
pub struct WidthCalculator {
    mask: Vec<bool>,
    widths: Vec<usize>,
}

impl WidthCalculator {
    /// Seed column widths from the header cells under a visibility mask.
    pub fn new<T: AsRef<str>>(headers: &[T], mask: &[bool]) -> Self {
        assert_eq!(headers.len(), mask.len(), "one mask entry per column");
        let widths = headers
            .iter()
            .zip(mask)
            .map(|(header, &visible)| if visible { text_width(header.as_ref()) } else { 0 })
            .collect();
        Self {
            mask: mask.to_vec(),
            widths,
        }
    }

    /// Widen member columns until each group fits its own cell text.
    ///
    /// For each group the current merged width is the sum of its visible
    /// members plus separator overhead; any shortfall against the group's
    /// cell text is distributed across the visible members by the
    /// balanced-partition rule (shares differ by at most one and sum
    /// exactly to the shortfall).
    pub fn update<T: AsRef<str>>(&mut self, grouping: &Grouping, values: &[T]) {
        assert_eq!(grouping.columns, self.widths.len(), "grouping covers all columns");
        assert_eq!(values.len(), grouping.len(), "one value per group");

        for (group, value) in values.iter().enumerate() {
            let members = grouping.members(group);
            let (count, current) = self.merged(members.clone());
            if count == 0 {
                continue;
            }
            let required = text_width(value.as_ref());
            if required <= current {
                continue;
            }
            let growth = required - current;
            let mut visible = 0;
            for column in members {
                if self.mask[column] {
                    self.widths[column] += balanced_share(growth, visible, count);
                    visible += 1;
                }
            }
        }
    }

    /// Merged display width per group; hidden groups report zero.
    pub fn get(&self, grouping: &Grouping, group_mask: &[bool]) -> Vec<usize> {
        assert_eq!(grouping.columns, self.widths.len(), "grouping covers all columns");
        assert_eq!(group_mask.len(), grouping.len(), "one mask entry per group");

        (0..grouping.len())
            .map(|group| {
                if group_mask[group] {
                    self.merged(grouping.members(group)).1
                } else {
                    0
                }
            })
            .collect()
    }

    /// Visible member count and merged width of a column range.
    fn merged(&self, members: Range<usize>) -> (usize, usize) {
        let mut count = 0;
        let mut sum = 0;
        for column in members {
            if self.mask[column] {
                count += 1;
                sum += self.widths[column];
            }
        }
        let width = if count == 0 {
            0
        } else {
            sum + (count - 1) * SEPARATOR_WIDTH
        };
        (count, width)
    }
}

/// Width increment for visible member `index` of `count` when a group
/// must grow by `growth`.
fn balanced_share(growth: usize, index: usize, count: usize) -> usize {
    growth * (index + 1) / count - growth * index / count
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}
