use {
    crate::error::{Result, RttmError},
    base::{Annotation, Segment},
    std::{
        fs::File,
        io::{BufRead, BufReader},
        path::Path,
    },
};

/// Read SPEAKER records from an RTTM file, one annotation per uri.
///
/// Annotations are returned in order of first appearance in the file.
pub fn load_rttm(path: impl AsRef<Path>) -> Result<Vec<Annotation>> {
    let file = File::open(path.as_ref())?;
    parse_rttm(BufReader::new(file))
}

/// Parse RTTM SPEAKER records from a buffered reader.
///
/// Each record is `SPEAKER <uri> <chan> <tbeg> <tdur> <ortho> <stype> <name>
/// <conf> <slat>`. Blank lines, `;;` comment lines and other record types
/// are skipped.
pub fn parse_rttm(reader: impl BufRead) -> Result<Vec<Annotation>> {
    let mut annotations: Vec<Annotation> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(";;") {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields[0] != "SPEAKER" {
            log::debug!("skipping {} record at line {}", fields[0], number);
            continue;
        }
        if fields.len() != 10 {
            return Err(RttmError::Parse {
                line: number,
                message: format!("expected 10 fields in SPEAKER record, got {}", fields.len()),
            });
        }

        let uri = fields[1];
        let onset = parse_seconds(fields[3], number, "turn onset")?;
        let duration = parse_seconds(fields[4], number, "turn duration")?;
        if duration < 0.0 {
            return Err(RttmError::Parse {
                line: number,
                message: format!("negative turn duration {duration}"),
            });
        }
        let label = fields[7];

        let position = annotations
            .iter()
            .position(|a| a.uri.as_deref() == Some(uri));
        let position = match position {
            Some(position) => position,
            None => {
                annotations.push(Annotation::with_uri(uri));
                annotations.len() - 1
            }
        };
        annotations[position].insert(Segment::new(onset, onset + duration), label);
    }

    Ok(annotations)
}

fn parse_seconds(field: &str, line: usize, what: &str) -> Result<f64> {
    field.parse::<f64>().map_err(|_| RttmError::Parse {
        line,
        message: format!("invalid {what}: {field:?}"),
    })
}
