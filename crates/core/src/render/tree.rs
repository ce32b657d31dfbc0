use crate::graph::Graph;

/// A labelled tree, drawn with box-drawing characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub value: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }
}

impl<T: AsRef<str>> Tree<T> {
    /// Draw `children`, each line starting with `indentation`
    ///
    /// Pass an indentation starting with `\n` to put every entry on its own line.
    pub fn draw(indentation: &str, children: &[Tree<T>]) -> String {
        let mut out = String::new();
        let len = children.len();

        for (ix, tree) in children.iter().enumerate() {
            let is_last = ix == len - 1;
            out.push_str(indentation);
            out.push_str(if is_last { "└" } else { "├" });
            out.push_str("─ ");
            out.push_str(tree.value.as_ref());

            let rail = if len > 1 && !is_last { "│  " } else { "   " };
            out.push_str(&Self::draw(&format!("{indentation}{rail}"), &tree.children));
        }

        out
    }
}

/// One entry per package, its internal dependencies nested below it
pub fn short_view(graph: &Graph) -> String {
    let trees: Vec<Tree<&str>> = graph
        .iter()
        .map(|node| Tree {
            value: node.name.as_str(),
            children: node
                .dependencies
                .iter()
                .map(|dep| Tree::leaf(dep.as_str()))
                .collect(),
        })
        .collect();

    Tree::draw("\n", &trees)
        .strip_prefix('\n')
        .map(str::to_string)
        .unwrap_or_default()
}
