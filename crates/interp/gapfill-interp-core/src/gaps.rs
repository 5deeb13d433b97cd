//! Gap detection.
//!
//! A gap is a position whose projected value is absent. Each gap records the
//! nearest present position on either side. Both neighbour columns are
//! computed in one forward and one backward sweep, so detection is O(n) no
//! matter how many gaps share the same bounds.

/// Transient description of one absent position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    /// 0-based position in the sequence
    pub position: usize,
    /// Largest present position before `position`
    pub previous: Option<usize>,
    /// Smallest present position after `position`
    pub next: Option<usize>,
}

impl Gap {
    /// Leading and trailing gaps are never filled (no extrapolation).
    #[inline]
    pub fn is_fillable(&self) -> bool {
        self.previous.is_some() && self.next.is_some()
    }

    /// `(previous, next)` when both sides are bounded.
    #[inline]
    pub fn bounds(&self) -> Option<(usize, usize)> {
        Some((self.previous?, self.next?))
    }
}

/// One [`Gap`] per absent position, in order, fillable or not.
pub fn detect_gaps<T>(values: &[Option<T>]) -> Vec<Gap> {
    let mut gaps = Vec::new();
    let mut last_present = None;
    for (position, value) in values.iter().enumerate() {
        if value.is_some() {
            last_present = Some(position);
        } else {
            gaps.push(Gap {
                position,
                previous: last_present,
                next: None,
            });
        }
    }

    let mut next_present = None;
    let mut cursor = values.len();
    for gap in gaps.iter_mut().rev() {
        while cursor > gap.position + 1 {
            cursor -= 1;
            if values[cursor].is_some() {
                next_present = Some(cursor);
            }
        }
        cursor = gap.position;
        gap.next = next_present;
    }

    gaps
}
