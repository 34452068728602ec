//! Declarative element trees.
//!
//! Rows are described as plain [`Node`] values and handed to
//! [`Document::replace_children`](super::Document::replace_children) in one
//! batch, so a document never observes a half-built row list.

/// A node in a declarative element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag, classes, attributes and children.
    Element(ElementNode),
    /// A text node.
    Text(String),
}

/// The element variant of [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element node with no classes, attributes or children.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(ElementNode {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Add a class. Has no effect on text nodes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        if let Self::Element(element) = &mut self {
            element.classes.push(class.into());
        }
        self
    }

    /// Set an attribute, replacing any previous value. Has no effect on text
    /// nodes.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element(element) = &mut self {
            element.set_attribute(name.into(), value.into());
        }
        self
    }

    /// Append a child. Has no effect on text nodes.
    pub fn child(mut self, child: Node) -> Self {
        if let Self::Element(element) = &mut self {
            element.children.push(child);
        }
        self
    }

    /// Append several children. Has no effect on text nodes.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        if let Self::Element(element) = &mut self {
            element.children.extend(children);
        }
        self
    }

    /// Wrap a text node in a `div` so it can carry classes and attributes.
    pub fn into_element(self) -> ElementNode {
        match self {
            Self::Element(element) => element,
            text @ Self::Text(_) => ElementNode {
                tag: "div".to_string(),
                classes: Vec::new(),
                attributes: Vec::new(),
                children: vec![text],
            },
        }
    }

    /// The concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Returns `true` if this is an element carrying `class`.
    pub fn has_class(&self, class: &str) -> bool {
        matches!(self, Self::Element(element) if element.has_class(class))
    }

    /// The value of an attribute, if this is an element that has it.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element(element) => element.attribute(name),
            Self::Text(_) => None,
        }
    }

    /// The child nodes. Text nodes have none.
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Self::Element(element) => &element.children,
            Self::Text(_) => &[],
        }
    }
}

impl ElementNode {
    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: String, value: String) {
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// The value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Add a class unless it is already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Returns `true` if the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}
