//! Debug printer.

use core::fmt::{self, Write as _};

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::preorder::Node;

/// Pretty-printable proxy of a subtree.
///
/// Created by [`Node::debug_print`]. Values are formatted with [`fmt::Display`]
/// or [`fmt::Debug`] following the format used for the proxy itself, and the
/// alternate flag is passed through to each value.
pub struct DebugPrint<'a, T> {
    /// Root of the printed subtree.
    root: Node<'a, T>,
}

impl<'a, T> DebugPrint<'a, T> {
    /// Creates a new proxy.
    #[inline]
    #[must_use]
    pub(super) fn new(root: Node<'a, T>) -> Self {
        Self { root }
    }

    /// Writes the subtree, formatting each value with `render`.
    fn write<F>(&self, f: &mut fmt::Formatter<'_>, render: F) -> fmt::Result
    where
        F: Fn(&T) -> String,
    {
        let top = self.root.index();
        let tree = self.root.tree();
        let values = self.root.subtree_values();
        let weights = &tree.weights()[top..(top + values.len())];

        // For each open ancestor below the top: its last position, and whether
        // it is the last child of its parent.
        let mut levels: Vec<(usize, bool)> = Vec::new();
        for (offset, (value, &weight)) in values.iter().zip(weights).enumerate() {
            while levels.last().map_or(false, |&(end, _)| end < offset) {
                levels.pop();
            }
            let parent_end = levels.last().map_or(values.len() - 1, |&(end, _)| end);
            let end = offset + weight;
            let is_last = end == parent_end;
            if offset != 0 {
                f.write_char('\n')?;
            }

            let rendered = render(value);
            let mut indent = String::new();
            for (line_no, line) in rendered.split('\n').enumerate() {
                if line_no != 0 {
                    f.write_char('\n')?;
                }
                indent.clear();
                for &(_, ancestor_is_last) in &levels {
                    indent.push_str(if ancestor_is_last { "    " } else { "|   " });
                }
                if offset != 0 {
                    indent.push_str(match (is_last, line_no == 0) {
                        (false, true) => "|-- ",
                        (true, true) => "`-- ",
                        (false, false) => "|   ",
                        (true, false) => "    ",
                    });
                }
                // Empty lines get no trailing whitespace.
                if line.is_empty() {
                    f.write_str(indent.trim_end())?;
                } else {
                    f.write_str(&indent)?;
                    f.write_str(line)?;
                }
            }

            if offset != 0 {
                levels.push((end, is_last));
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alternate = f.alternate();
        self.write(f, |value| {
            if alternate {
                format!("{:#}", value)
            } else {
                format!("{}", value)
            }
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alternate = f.alternate();
        self.write(f, |value| {
            if alternate {
                format!("{:#?}", value)
            } else {
                format!("{:?}", value)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::TreeBuilder;

    #[test]
    fn subtree_only() {
        let tree = TreeBuilder::new(0)
            .child(1)
            .child(2)
            .sibling(3)
            .parent()
            .sibling(4)
            .build();
        let node = tree.node(1).expect("valid position");
        assert_eq!(node.debug_print().to_string(), "1\n|-- 2\n`-- 3");
    }

    #[test]
    fn multiline_values() {
        let tree = TreeBuilder::new("r")
            .child("a\nb")
            .child("c")
            .parent()
            .sibling("d\ne")
            .build();
        let root = tree.root().expect("the tree is not empty");
        let expected = "r\n\
                        |-- a\n\
                        |   b\n\
                        |   `-- c\n\
                        `-- d\n\
                        \x20   e";
        assert_eq!(root.debug_print().to_string(), expected);
    }

    #[test]
    fn blank_lines_have_no_trailing_spaces() {
        let tree = TreeBuilder::new("r")
            .child("a\n\nb")
            .child("c\n")
            .parent()
            .sibling("\nd")
            .build();
        let root = tree.root().expect("the tree is not empty");
        let expected = "r\n\
                        |-- a\n\
                        |\n\
                        |   b\n\
                        |   `-- c\n\
                        |\n\
                        `--\n\
                        \x20   d";
        let printed = root.debug_print().to_string();
        assert_eq!(printed, expected);
        assert!(printed.lines().all(|line| !line.ends_with(' ')));
    }
}
