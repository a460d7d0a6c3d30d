//! Phase 2: Hierarchy Builder
//!
//! The builder consumes the stream of tokenized lines and reconstructs the
//! nested mapping. Indentation is the sole structural signal: there is no
//! end-of-section marker, so the builder keeps an explicit stack of open
//! group frames and closes every frame whose indentation is not strictly
//! less than the current line's. Any strictly greater indentation opens one
//! level; no particular indent unit is required.

use crate::error::Result;
use crate::tokenizer::{tokenize, Line};
use crate::value::{Group, Value};

/// One open section on the builder's stack.
///
/// The root frame sits at indentation -1 with no name and is never closed by
/// a line; real lines have indentation >= 0 and therefore always nest inside
/// it.
struct Frame {
    indentation: isize,
    name: Option<String>,
    group: Group,
}

impl Frame {
    fn root() -> Self {
        Self {
            indentation: -1,
            name: None,
            group: Group::new(),
        }
    }
}

/// Parse a whole configuration document into its root mapping.
///
/// Lines are numbered from 1 for error reporting. Line separators are
/// consumed by the line split, so both LF and CRLF input parse identically.
/// Duplicate names at one level silently overwrite; the last occurrence
/// wins.
pub fn parse(input: &str) -> Result<Group> {
    let mut stack = vec![Frame::root()];

    for (index, raw) in input.lines().enumerate() {
        match tokenize(raw, index + 1)? {
            Line::Blank => continue,
            Line::Section { indentation, name } => {
                close_frames(&mut stack, indentation as isize);
                stack.push(Frame {
                    indentation: indentation as isize,
                    name: Some(name),
                    group: Group::new(),
                });
            }
            Line::Setting {
                indentation,
                name,
                value,
            } => {
                close_frames(&mut stack, indentation as isize);
                if let Some(top) = stack.last_mut() {
                    top.group.insert(name, value);
                }
            }
        }
    }

    close_frames(&mut stack, 0);
    match stack.pop() {
        Some(root) => Ok(root.group),
        None => Ok(Group::new()),
    }
}

/// Close every open frame at or below the given indentation, attaching each
/// closed section into its parent under its declared name.
fn close_frames(stack: &mut Vec<Frame>, indentation: isize) {
    while stack.last().is_some_and(|top| top.indentation >= indentation) {
        let Some(closed) = stack.pop() else { break };
        if let (Some(name), Some(parent)) = (closed.name, stack.last_mut()) {
            parent.group.insert(name, Value::Group(closed.group));
        }
    }
}
