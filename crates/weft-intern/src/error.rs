//! Contract violations reported by the interning API.
//! 驻留 API 报告的契约违规。

use thiserror::Error;

/// A requested range that cannot address the source text.
/// 无法定位源文本的请求范围。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternError {
    /// Range end lies past the end of the source.
    #[error("range {start}..{end} out of bounds for text of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// Range start lies after its end.
    #[error("range start {start} is greater than end {end}")]
    ReversedRange { start: usize, end: usize },

    /// Range boundary splits a UTF-8 sequence.
    #[error("offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },
}

/// Check that `start..end` addresses whole chars of `text`.
pub(crate) fn check_range(text: &str, start: usize, end: usize) -> Result<(), InternError> {
    if start > end {
        return Err(InternError::ReversedRange { start, end });
    }
    if end > text.len() {
        return Err(InternError::RangeOutOfBounds {
            start,
            end,
            len: text.len(),
        });
    }
    for offset in [start, end] {
        if !text.is_char_boundary(offset) {
            return Err(InternError::NotCharBoundary { offset });
        }
    }
    Ok(())
}

/// Panic unless `start..end` addresses whole chars of `text`.
pub(crate) fn require_range(text: &str, start: usize, end: usize) {
    if let Err(err) = check_range(text, start, end) {
        panic!("invalid intern range: {err}");
    }
}
