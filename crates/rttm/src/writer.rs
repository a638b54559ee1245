use {
    crate::error::Result,
    base::Annotation,
    std::io::Write,
};

/// Write an annotation as RTTM SPEAKER records.
///
/// Times are rendered with millisecond precision. Fields the annotation
/// does not carry (orthography, speaker type, confidence) are `<NA>`.
pub fn write_rttm(writer: &mut impl Write, annotation: &Annotation) -> Result<()> {
    let uri = annotation.uri.as_deref().unwrap_or("<NA>");
    for (segment, label) in annotation.itertracks() {
        writeln!(
            writer,
            "SPEAKER {} 1 {:.3} {:.3} <NA> <NA> {} <NA> <NA>",
            uri,
            segment.start,
            segment.duration(),
            label
        )?;
    }
    Ok(())
}
