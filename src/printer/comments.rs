use super::Printer;
use crate::ast::{Comment, CommentKind};
use crate::error::PrintError;

impl<'a> Printer<'a> {
    // =========================================================================
    // Comment Emission
    // =========================================================================

    /// Write `comments` one per line at `indent`. Expects to start on a
    /// fresh unindented line and leaves the output the same way.
    pub(crate) fn format_comments(
        &mut self,
        comments: &[Comment],
        indent: &str,
    ) -> Result<(), PrintError> {
        for comment in comments {
            self.write(indent)?;
            match comment.kind {
                CommentKind::Line => {
                    self.write("// ")?;
                    self.write(comment.text.trim())?;
                    // Line comments always end with a bare newline, whatever
                    // the configured line end.
                    self.write("\n")?;
                }
                CommentKind::Block => {
                    self.write("/*")?;
                    let body = reindent(&comment.text, indent);
                    self.write(&body)?;
                    self.write("*/")?;
                    self.write_line_end()?;
                }
            }
        }
        Ok(())
    }
}

/// Re-indent a block comment body to `indent`.
///
/// The run of spaces and tabs after the first newline is taken as the
/// comment's internal indent unit; each subsequent line swaps that unit
/// for `indent`, preserving deeper nesting within the comment. A body
/// with no newline is simply prefixed with `indent`.
fn reindent(text: &str, indent: &str) -> String {
    let text = text.trim_end();
    match text.find('\n') {
        Some(newline) => {
            let after = &text[newline + 1..];
            let prefix_len = after
                .bytes()
                .take_while(|b| matches!(b, b' ' | b'\t'))
                .count();
            let separator = format!("\n{}", &after[..prefix_len]);
            let replacement = format!("\n{indent}");
            text.trim_start()
                .split(separator.as_str())
                .collect::<Vec<_>>()
                .join(&replacement)
        }
        None => format!("{indent}{}", text.trim_start()),
    }
}
