use crate::Segment;
use std::cmp::Ordering;

/// An ordered collection of segments over a single reference.
///
/// Segments are kept sorted by start, then end. Duplicates and overlaps are
/// allowed; `support()` produces the merged form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut timeline = Self::new();
        for segment in segments {
            timeline.add(segment);
        }
        timeline
    }

    /// Insert a segment, keeping the collection ordered. Empty segments are
    /// ignored.
    pub fn add(&mut self, segment: Segment) {
        if segment.is_empty() {
            return;
        }
        let index = self
            .segments
            .partition_point(|s| s.cmp_order(&segment) == Ordering::Less);
        self.segments.insert(index, segment);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Smallest segment covering every member. [0, 0) when empty.
    pub fn extent(&self) -> Segment {
        let Some(first) = self.segments.first() else {
            return Segment::new(0.0, 0.0);
        };
        let end = self
            .segments
            .iter()
            .map(|s| s.end)
            .fold(first.end, f64::max);
        Segment::new(first.start, end)
    }

    /// Merge overlapping or touching segments.
    pub fn support(&self) -> Timeline {
        let mut merged: Vec<Segment> = Vec::new();
        for segment in &self.segments {
            match merged.last_mut() {
                Some(last) if segment.start <= last.end => {
                    if segment.end > last.end {
                        last.end = segment.end;
                    }
                }
                _ => merged.push(*segment),
            }
        }
        Timeline { segments: merged }
    }

    /// Complement of the support within the extent.
    pub fn gaps(&self) -> Timeline {
        let mut gaps = Timeline::new();
        let mut previous_end: Option<f64> = None;
        for segment in &self.support().segments {
            if let Some(end) = previous_end {
                gaps.add(Segment::new(end, segment.start));
            }
            previous_end = Some(segment.end);
        }
        gaps
    }

    /// Intersections with `window`. Segments are clipped to the window
    /// boundaries; empty intersections are dropped.
    pub fn crop(&self, window: &Segment) -> Timeline {
        Timeline::from_segments(self.segments.iter().filter_map(|s| s.intersection(window)))
    }

    /// Total covered duration, overlaps counted once.
    pub fn duration(&self) -> f64 {
        self.support().segments.iter().map(Segment::duration).sum()
    }
}
