use base::Segment;
use rttm::{RttmError, load_rttm, parse_rttm, write_rttm};

const SAMPLE: &str = "\
;; generated by the annotation tool
SPEAKER meeting-1 1 0.000 2.000 <NA> <NA> alice <NA> <NA>
SPKR-INFO meeting-1 1 <NA> <NA> <NA> unknown alice <NA> <NA>
SPEAKER meeting-2 1 1.500 0.500 <NA> <NA> carol <NA> <NA>
SPEAKER meeting-1 1 2.000 3.000 <NA> <NA> bob <NA> <NA>

SPEAKER meeting-2 1 2.000 1.000 <NA> <NA> dave <NA> <NA>
";

// --- Parsing ---

#[test]
fn test_parse_groups_by_uri_in_file_order() {
    let annotations = parse_rttm(SAMPLE.as_bytes()).unwrap();
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].uri.as_deref(), Some("meeting-1"));
    assert_eq!(annotations[1].uri.as_deref(), Some("meeting-2"));
    assert_eq!(annotations[0].len(), 2);
    assert_eq!(annotations[1].len(), 2);
}

#[test]
fn test_parse_turn_fields() {
    let annotations = parse_rttm(SAMPLE.as_bytes()).unwrap();
    let tracks: Vec<(Segment, String)> = annotations[0]
        .itertracks()
        .map(|(s, l)| (*s, l.to_string()))
        .collect();
    assert_eq!(
        tracks,
        vec![
            (Segment::new(0.0, 2.0), "alice".to_string()),
            (Segment::new(2.0, 5.0), "bob".to_string()),
        ]
    );
}

#[test]
fn test_parse_skips_comments_and_other_records() {
    // SAMPLE holds one comment, one SPKR-INFO record and one blank line;
    // none of them produce tracks
    let annotations = parse_rttm(SAMPLE.as_bytes()).unwrap();
    let total: usize = annotations.iter().map(|a| a.len()).sum();
    assert_eq!(total, 4);
}

#[test]
fn test_parse_empty_input() {
    let annotations = parse_rttm("".as_bytes()).unwrap();
    assert!(annotations.is_empty());
}

// --- Parse errors ---

#[test]
fn test_parse_reports_field_count_with_line_number() {
    let input = "\
SPEAKER meeting 1 0.000 2.000 <NA> <NA> alice <NA> <NA>
SPEAKER meeting 1 2.000 1.000
";
    let err = parse_rttm(input.as_bytes()).unwrap_err();
    match err {
        RttmError::Parse { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("10 fields"), "unexpected message: {message}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_bad_onset() {
    let input = "SPEAKER meeting 1 abc 2.000 <NA> <NA> alice <NA> <NA>\n";
    let err = parse_rttm(input.as_bytes()).unwrap_err();
    match err {
        RttmError::Parse { line, message } => {
            assert_eq!(line, 1);
            assert!(message.contains("onset"), "unexpected message: {message}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_negative_duration() {
    let input = "SPEAKER meeting 1 1.000 -2.000 <NA> <NA> alice <NA> <NA>\n";
    let err = parse_rttm(input.as_bytes()).unwrap_err();
    assert!(matches!(err, RttmError::Parse { line: 1, .. }));
}

// --- File loading ---

#[test]
fn test_load_rttm_reads_file() {
    let path = std::env::temp_dir().join(format!("rttm-test-{}.rttm", std::process::id()));
    std::fs::write(&path, SAMPLE).expect("Failed to write test file");

    let annotations = load_rttm(&path).unwrap();
    assert_eq!(annotations.len(), 2);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_rttm_missing_file_is_io_error() {
    let err = load_rttm("/nonexistent/missing.rttm").unwrap_err();
    assert!(matches!(err, RttmError::Io(_)));
}

// --- Writing ---

#[test]
fn test_write_rttm_format() {
    let mut annotation = base::Annotation::with_uri("sample-0");
    annotation.insert(Segment::new(0.0, 2.5), "0");
    annotation.insert(Segment::new(2.5, 6.0), "1");

    let mut buffer = Vec::new();
    write_rttm(&mut buffer, &annotation).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(
        text,
        "SPEAKER sample-0 1 0.000 2.500 <NA> <NA> 0 <NA> <NA>\n\
         SPEAKER sample-0 1 2.500 3.500 <NA> <NA> 1 <NA> <NA>\n"
    );
}

#[test]
fn test_write_then_parse() {
    let mut annotation = base::Annotation::with_uri("sample-0");
    annotation.insert(Segment::new(0.0, 2.0), "0");
    annotation.insert(Segment::new(2.0, 6.0), "1");

    let mut buffer = Vec::new();
    write_rttm(&mut buffer, &annotation).unwrap();

    let parsed = parse_rttm(buffer.as_slice()).unwrap();
    assert_eq!(parsed, vec![annotation]);
}
