use std::fmt::{Display, Formatter, Result, Write};

use crate::{AvlSet, NodeRef};

/// Render the tree as an indented multi-line string for debugging.
///
/// Each node prints as `key (h=height, s=skew)` with its children indented
/// one level below it, left before right. An absent child of an internal node
/// prints as `nil` so single-child nodes remain unambiguous; an empty set
/// prints as a lone `nil`.
impl<T> Display for AvlSet<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.root() {
            Some(root) => recurse(root, 0, f),
            None => writeln!(f, "nil"),
        }
    }
}

fn recurse<T, W>(n: NodeRef<'_, T>, depth: usize, buf: &mut W) -> Result
where
    T: Display,
    W: Write,
{
    writeln!(
        buf,
        "{:indent$}{} (h={}, s={})",
        "",
        n.key(),
        n.height(),
        n.skew(),
        indent = depth * 2
    )?;

    // Leaves print no child placeholders.
    if n.height() == 1 {
        return Ok(());
    }

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => recurse(v, depth + 1, buf)?,
            None => writeln!(buf, "{:indent$}nil", "", indent = (depth + 1) * 2)?,
        };
    }

    Ok(())
}
