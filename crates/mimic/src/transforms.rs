use base::{Annotation, Segment};

/// Remove non-speech gaps by left-shifting every track by the cumulative
/// gap duration preceding it.
///
/// A gap before the first segment counts as non-speech too, so the result
/// always starts at 0. Segment durations and labels are unchanged. Empty
/// annotations are returned as-is.
pub fn remove_non_speech(annotation: &Annotation) -> Annotation {
    let timeline = annotation.timeline();
    if timeline.is_empty() {
        return annotation.clone();
    }

    let mut non_speech = timeline.gaps();
    let first_start = timeline.extent().start;
    if first_start > 0.0 {
        non_speech.add(Segment::new(0.0, first_start));
    }

    let mut result = annotation.empty_copy();
    for (segment, label) in annotation.itertracks() {
        // gaps never overlap speech, so this is the gap time before the track
        let preceding = non_speech.crop(&Segment::new(0.0, segment.end)).duration();
        result.insert(segment.shift(-preceding), label);
    }
    result
}

/// Shift an entire annotation so its first segment begins at `start`.
///
/// Empty annotations are returned as-is.
pub fn reset_start(annotation: &Annotation, start: f64) -> Annotation {
    let timeline = annotation.timeline();
    if timeline.is_empty() {
        return annotation.clone();
    }

    let delta = start - timeline.extent().start;
    let mut result = annotation.empty_copy();
    for (segment, label) in annotation.itertracks() {
        result.insert(segment.shift(delta), label);
    }
    result
}
