//! ASCII drawings of an [`OrderedTree`]. Every node's label sits above its children with `_`
//! runs and `/` `\` connectors leading down to them.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.diagram().to_string(), " 2\n/ \\\n1 3");
//! ```

use std::fmt;

use crate::tree::{Node, OrderedTree};

/// Draws a tree when formatted with `{}`. Created by [`OrderedTree::diagram`].
pub struct Diagram<'a, T> {
    tree: &'a OrderedTree<T>,
}

impl<'a, T> Diagram<'a, T> {
    pub(crate) fn new(tree: &'a OrderedTree<T>) -> Self {
        Self { tree }
    }
}

impl<T> fmt::Display for Diagram<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root() else {
            return f.write_str("Empty Tree");
        };

        for (i, line) in Block::draw(root).lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}

/// A rectangle of text holding a drawn subtree. All lines are `width` characters wide and the
/// subtree's root label is centered at column `middle`.
struct Block {
    lines: Vec<String>,
    width: usize,
    middle: usize,
}

impl Block {
    fn draw<T: fmt::Display>(node: &Node<T>) -> Self {
        // Every label takes at least one column or the connectors above it have nowhere to go.
        let mut label = node.value().to_string();
        if label.is_empty() {
            label.push(' ');
        }
        let u = label.chars().count();

        match (node.left().map(Self::draw), node.right().map(Self::draw)) {
            (None, None) => Self {
                lines: vec![label],
                width: u,
                middle: u / 2,
            },
            (Some(left), None) => {
                let (n, x) = (left.width, left.middle);
                let mut lines = vec![
                    format!("{}{}{}", spaces(x + 1), underscores(n - x - 1), label),
                    format!("{}/{}", spaces(x), spaces(n - x - 1 + u)),
                ];
                lines.extend(left.lines.into_iter().map(|line| line + &spaces(u)));
                Self {
                    lines,
                    width: n + u,
                    middle: n + u / 2,
                }
            }
            (None, Some(right)) => {
                let (n, x) = (right.width, right.middle);
                let mut lines = vec![
                    format!("{}{}{}", label, underscores(x), spaces(n - x)),
                    format!("{}\\{}", spaces(u + x), spaces(n - x - 1)),
                ];
                lines.extend(right.lines.into_iter().map(|line| spaces(u) + &line));
                Self {
                    lines,
                    width: n + u,
                    middle: u / 2,
                }
            }
            (Some(left), Some(right)) => {
                let (n, x) = (left.width, left.middle);
                let (m, y) = (right.width, right.middle);
                let mut lines = vec![
                    format!(
                        "{}{}{}{}{}",
                        spaces(x + 1),
                        underscores(n - x - 1),
                        label,
                        underscores(y),
                        spaces(m - y)
                    ),
                    format!(
                        "{}/{}\\{}",
                        spaces(x),
                        spaces(n - x - 1 + u + y),
                        spaces(m - y - 1)
                    ),
                ];

                // Pad the shorter side with blank lines so the two columns zip up.
                let height = left.lines.len().max(right.lines.len());
                let mut left_lines = left.lines.into_iter();
                let mut right_lines = right.lines.into_iter();
                for _ in 0..height {
                    let l = left_lines.next().unwrap_or_else(|| spaces(n));
                    let r = right_lines.next().unwrap_or_else(|| spaces(m));
                    lines.push(format!("{}{}{}", l, spaces(u), r));
                }

                Self {
                    lines,
                    width: n + m + u,
                    middle: n + u / 2,
                }
            }
        }
    }
}

fn spaces(count: usize) -> String {
    " ".repeat(count)
}

fn underscores(count: usize) -> String {
    "_".repeat(count)
}
