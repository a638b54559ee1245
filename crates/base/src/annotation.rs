use crate::{Segment, Timeline};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A set of labeled segments over a single reference.
///
/// Tracks are kept sorted by segment, then label. Pipeline transformations
/// never mutate an annotation in place: each one builds a new annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub uri: Option<String>,
    tracks: Vec<(Segment, String)>,
}

impl Annotation {
    pub fn new() -> Self {
        Self {
            uri: None,
            tracks: Vec::new(),
        }
    }

    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            tracks: Vec::new(),
        }
    }

    /// An annotation with the same uri and no tracks.
    pub fn empty_copy(&self) -> Self {
        Self {
            uri: self.uri.clone(),
            tracks: Vec::new(),
        }
    }

    /// Insert a labeled segment. Empty segments are ignored.
    pub fn insert(&mut self, segment: Segment, label: impl Into<String>) {
        if segment.is_empty() {
            return;
        }
        let label = label.into();
        let index = self.tracks.partition_point(|(s, l)| {
            s.cmp_order(&segment)
                .then_with(|| l.as_str().cmp(label.as_str()))
                == Ordering::Less
        });
        self.tracks.insert(index, (segment, label));
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Tracks in chronological order.
    pub fn itertracks(&self) -> impl Iterator<Item = (&Segment, &str)> {
        self.tracks.iter().map(|(s, l)| (s, l.as_str()))
    }

    /// Timeline of all track segments.
    pub fn timeline(&self) -> Timeline {
        Timeline::from_segments(self.tracks.iter().map(|(s, _)| *s))
    }

    /// Distinct labels in order of first appearance.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for (_, label) in &self.tracks {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.clone());
            }
        }
        labels
    }

    /// Total duration attributed to `label`, overlaps counted once.
    pub fn label_duration(&self, label: &str) -> f64 {
        Timeline::from_segments(
            self.tracks
                .iter()
                .filter(|(_, l)| l == label)
                .map(|(s, _)| *s),
        )
        .duration()
    }

    /// Restrict to `window`: tracks are clipped to the window boundaries,
    /// empty intersections dropped.
    pub fn crop(&self, window: &Segment) -> Annotation {
        let mut result = self.empty_copy();
        for (segment, label) in &self.tracks {
            if let Some(intersection) = segment.intersection(window) {
                result.insert(intersection, label.clone());
            }
        }
        result
    }

    /// Merge overlapping or touching segments that carry the same label.
    pub fn support(&self) -> Annotation {
        let mut result = self.empty_copy();
        for label in self.labels() {
            let mut current: Option<Segment> = None;
            for (segment, track_label) in &self.tracks {
                if *track_label != label {
                    continue;
                }
                match &mut current {
                    Some(merged) if segment.start <= merged.end => {
                        if segment.end > merged.end {
                            merged.end = segment.end;
                        }
                    }
                    Some(merged) => {
                        result.insert(*merged, label.clone());
                        current = Some(*segment);
                    }
                    None => current = Some(*segment),
                }
            }
            if let Some(merged) = current {
                result.insert(merged, label.clone());
            }
        }
        result
    }

    /// Relabel to "0", "1", ... in order of first appearance.
    pub fn relabel_sequential(&self) -> Annotation {
        let labels = self.labels();
        let mut result = self.empty_copy();
        for (segment, label) in &self.tracks {
            let index = labels.iter().position(|l| l == label).unwrap_or(0);
            result.insert(*segment, index.to_string());
        }
        result
    }
}
