//! Diagnostic rendering.
//!
//! [`List::render`] describes the chain node by node for inspection
//! during debugging. Only the element count, the forward order and the
//! payload values are contractual; the addresses merely make it possible
//! to follow the links by eye.

use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::list::{Link, List};

impl<T: Debug> List<T> {
    /// Produces a multi-line, human-readable description of the list: a
    /// header with the element count and the anchor addresses, then one
    /// entry per node in forward order with its position, address, links
    /// and payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back("a");
    /// list.push_back("b");
    ///
    /// let report = list.render();
    /// assert!(report.starts_with("list of 2 node(s)"));
    /// assert!(report.contains("[0]"));
    /// assert!(report.contains("\"b\""));
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!("list of {} node(s)\n", self.len);
        if self.is_empty() {
            return out;
        }
        out.push_str(&format!(
            "head: {}, tail: {}\n",
            render_link(self.head),
            render_link(self.tail)
        ));
        let mut at = 0;
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: the walk only follows links of nodes owned by this
            // list.
            let node_ref = unsafe { node.as_ref() };
            out.push_str(&format!(
                "[{}] {:p}  prev: {}  next: {}  value: {:?}\n",
                at,
                node,
                render_link(node_ref.prev),
                render_link(node_ref.next),
                node_ref.element
            ));
            current = node_ref.next;
            at += 1;
        }
        out
    }
}

fn render_link<T>(link: Link<T>) -> String {
    match link {
        Some(node) => format!("{:p}", node),
        None => String::from("(none)"),
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_list();
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: the walk only follows links of nodes owned by this
            // list.
            let node_ref = unsafe { node.as_ref() };
            f.entry(&node_ref.element);
            current = node_ref.next;
        }
        f.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;

    #[test]
    fn renders_nodes_in_forward_order() {
        let mut list = List::new();
        list.push_back('x');
        list.push_back('y');
        list.push_back('z');

        let report = list.render();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "list of 3 node(s)");
        assert!(lines[1].starts_with("head: "));
        assert!(lines[2].starts_with("[0]"));
        assert!(lines[2].ends_with("value: 'x'"));
        assert!(lines[3].starts_with("[1]"));
        assert!(lines[3].ends_with("value: 'y'"));
        assert!(lines[4].starts_with("[2]"));
        assert!(lines[4].ends_with("value: 'z'"));
        assert_eq!(lines.len(), 5);

        // The end nodes have one absent link each.
        assert!(lines[2].contains("prev: (none)"));
        assert!(lines[4].contains("next: (none)"));
    }

    #[test]
    fn renders_the_empty_list() {
        let list = List::<i32>::new();
        assert_eq!(list.render(), "list of 0 node(s)\n");
    }

    #[test]
    fn debug_formats_like_a_sequence() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i32>::new()), "[]");
    }
}
