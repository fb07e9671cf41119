//! Turns linearized records into indented, stack-annotated text lines.

use crate::report::linearize::Record;

/// Renders linearized records into report lines, one entry per error.
///
/// Each record contributes two lines when its error carries at least one
/// resolvable frame (type and function name, then file, line, and message)
/// and a single line otherwise. Every line is indented with one tab per
/// level, and entries under a fan-out point are labeled with their sibling
/// index the first time the position changes, with an equal-width blank
/// placeholder on continuation entries so the branch stays aligned.
pub fn render(records: &[Record<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur_level = 0;
    let mut cur_index = 0;

    for record in records {
        let print_index = record.level() != cur_level || record.index() != cur_index;
        cur_level = record.level();
        cur_index = record.index();

        let mut prefix = String::new();
        if record.level() > 0 {
            prefix = format!("[{}] ", record.index());
            if !print_index {
                prefix = " ".repeat(prefix.len());
            }
        }

        let indent = "\t".repeat(record.level());
        match record.stack().and_then(|stack| stack.frames().first()) {
            Some(frame) => {
                lines.push(format!(
                    "{indent}{prefix}({}) {}",
                    record.type_name(),
                    frame.name()
                ));
                lines.push(format!(
                    "{indent}\t{}:{}: {}",
                    frame.file(),
                    frame.line(),
                    record.message()
                ));
            }
            None => {
                lines.push(format!(
                    "{indent}{prefix}({}) {}",
                    record.type_name(),
                    record.message()
                ));
            }
        }
    }

    lines
}
