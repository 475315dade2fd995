use crate::errors::{Result, StaticfierError};
use crate::features::source_edit::domain::TextEdit;

/// Apply non-overlapping edits to `source`
///
/// Edits may come in any order; they are applied back to front so earlier
/// byte offsets stay valid. Overlapping edits fail the whole call and
/// leave nothing applied.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Result<String> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.start, edit.end));

    for edit in &ordered {
        if edit.start > edit.end
            || edit.end > source.len()
            || !source.is_char_boundary(edit.start)
            || !source.is_char_boundary(edit.end)
        {
            return Err(StaticfierError::EditOutOfBounds {
                start: edit.start,
                end: edit.end,
                len: source.len(),
            });
        }
    }
    for pair in ordered.windows(2) {
        if pair[0].overlaps(pair[1]) {
            return Err(StaticfierError::EditConflict {
                first_start: pair[0].start,
                first_end: pair[0].end,
                second_start: pair[1].start,
                second_end: pair[1].end,
            });
        }
    }

    let mut result = source.to_string();
    for edit in ordered.iter().rev() {
        result.replace_range(edit.start..edit.end, &edit.replacement);
    }
    Ok(result)
}
