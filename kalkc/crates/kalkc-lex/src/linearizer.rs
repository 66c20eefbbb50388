//! Splits source text into logical lines.
//!
//! Every source line is measured for indentation, and the indentation is
//! cut off. A line whose code starts with `##` is a block comment and is
//! dropped whole; otherwise a `#` ends the code of the line. Lines that are
//! empty after trimming are not stored, so line numbers may have gaps.

use kalkc_util::{ComponentId, Indentation};
use tracing::debug;

use crate::line::Line;
use crate::unit::Unit;

const COMMENT: char = '#';
const BLOCK_COMMENT: &str = "##";

/// Splits `source` into the lines of a new [`Unit`].
///
/// # Arguments
///
/// * `source` - full text of the component
/// * `id` - identifier of the component
/// * `indentation` - how one indentation level is written
///
/// # Example
///
/// ```
/// use kalkc_lex::linearize;
/// use kalkc_util::{ComponentId, Indentation};
///
/// let source = "main\n    ## block comment\n\n    x = 1 # note\n";
/// let unit = linearize(source, ComponentId::parse("Demo"), Indentation::spaces(4).unwrap());
///
/// assert_eq!(unit.line_count(), 2);
/// let line = unit.line(4).unwrap();
/// assert_eq!(line.level(), 1);
/// assert_eq!(line.code(), "x = 1");
/// ```
pub fn linearize(source: &str, id: ComponentId, indentation: Indentation) -> Unit {
    let mut unit = Unit::new(id);
    let mut discarded = 0usize;

    for (index, text) in source.split('\n').enumerate() {
        let nr = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let (level, rest) = split_indentation(text, indentation);

        if rest.starts_with(BLOCK_COMMENT) {
            discarded += 1;
            continue;
        }

        let code = match rest.find(COMMENT) {
            Some(at) => &rest[..at],
            None => rest,
        }
        .trim_end();

        if code.is_empty() {
            discarded += 1;
            continue;
        }
        unit.push_line(Line::new(nr, level, code));
    }

    debug!(
        component = %unit.id(),
        lines = unit.line_count(),
        discarded,
        "linearized"
    );
    unit
}

/// Returns the indentation level and the text after the indentation.
fn split_indentation(text: &str, indentation: Indentation) -> (usize, &str) {
    let rest = text.trim_start_matches(indentation.character());
    // Indentation characters are single bytes.
    let count = text.len() - rest.len();
    let level = match indentation.width() {
        Some(width) => count / usize::from(width),
        None => count,
    };
    (level, rest)
}
