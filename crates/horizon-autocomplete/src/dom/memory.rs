//! An in-memory [`Document`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use slotmap::SlotMap;

use super::{Document, DomEvent, ElementId, EventKind, ListenTarget, ListenerId, Node};
use crate::geometry::Rect;

const TEXT_TAG: &str = "#text";

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    rect: Rect,
}

#[derive(Debug)]
struct Inner {
    elements: SlotMap<ElementId, ElementData>,
    listeners: SlotMap<ListenerId, (ListenTarget, EventKind)>,
    body: ElementId,
    focused: Option<ElementId>,
    batch_updates: usize,
}

impl Inner {
    fn destroy(&mut self, id: ElementId) {
        if let Some(data) = self.elements.remove(id) {
            for child in data.children {
                self.destroy(child);
            }
            if self.focused == Some(id) {
                self.focused = None;
            }
        }
    }

    fn detach(&mut self, id: ElementId) {
        let parent = self.elements.get_mut(id).and_then(|data| data.parent.take());
        if let Some(parent) = parent
            && let Some(parent_data) = self.elements.get_mut(parent)
        {
            parent_data.children.retain(|child| *child != id);
        }
    }

    fn build(&mut self, parent: ElementId, node: &Node) {
        let data = match node {
            Node::Text(text) => ElementData {
                tag: TEXT_TAG.to_string(),
                parent: Some(parent),
                text: text.clone(),
                ..ElementData::default()
            },
            Node::Element(element) => ElementData {
                tag: element.tag.clone(),
                parent: Some(parent),
                classes: element.classes.clone(),
                attributes: element.attributes.iter().cloned().collect(),
                ..ElementData::default()
            },
        };
        let id = self.elements.insert(data);
        if let Some(parent_data) = self.elements.get_mut(parent) {
            parent_data.children.push(id);
        }
        for child in node.child_nodes() {
            self.build(id, child);
        }
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        if let Some(data) = self.elements.get(id) {
            out.push_str(&data.text);
            for child in &data.children {
                self.collect_text(*child, out);
            }
        }
    }

    fn collect_by_class(&self, id: ElementId, class: &str, out: &mut Vec<ElementId>) {
        if let Some(data) = self.elements.get(id) {
            if data.classes.iter().any(|c| c == class) {
                out.push(id);
            }
            for child in &data.children {
                self.collect_by_class(*child, class, out);
            }
        }
    }
}

/// A headless document kept entirely in memory.
///
/// Clones share the same tree, so a test can hand one clone to the
/// controller and inspect the page through another.
///
/// # Example
///
/// ```
/// use horizon_autocomplete::dom::{Document, MemoryDocument};
/// use horizon_autocomplete::geometry::Rect;
///
/// let doc = MemoryDocument::new();
/// let input = doc.create_input(Rect::new(10.0, 10.0, 200.0, 24.0));
/// let event = doc.type_text(input, "lon");
/// assert_eq!(doc.value(input), "lon");
/// # let _ = event;
/// ```
#[derive(Clone)]
pub struct MemoryDocument {
    inner: Rc<RefCell<Inner>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document containing only a `body` element.
    pub fn new() -> Self {
        let mut elements = SlotMap::with_key();
        let body = elements.insert(ElementData {
            tag: "body".to_string(),
            ..ElementData::default()
        });
        Self {
            inner: Rc::new(RefCell::new(Inner {
                elements,
                listeners: SlotMap::with_key(),
                body,
                focused: None,
                batch_updates: 0,
            })),
        }
    }

    /// Create an `input` element attached to the body, laid out at `rect`.
    pub fn create_input(&self, rect: Rect) -> ElementId {
        let mut inner = self.inner.borrow_mut();
        let body = inner.body;
        let id = inner.elements.insert(ElementData {
            tag: "input".to_string(),
            parent: Some(body),
            rect,
            ..ElementData::default()
        });
        if let Some(body_data) = inner.elements.get_mut(body) {
            body_data.children.push(id);
        }
        id
    }

    /// Create a `div` attached to `parent` (or the body).
    pub fn create_div(&self, parent: Option<ElementId>) -> ElementId {
        let mut doc = self.clone();
        let parent = parent.unwrap_or_else(|| doc.body());
        let id = doc.create_element("div");
        doc.append_child(parent, id);
        id
    }

    /// Lay an element out at `rect`.
    pub fn set_rect(&self, id: ElementId, rect: Rect) {
        if let Some(data) = self.inner.borrow_mut().elements.get_mut(id) {
            data.rect = rect;
        }
    }

    /// Focus `id` and return the matching focus event.
    pub fn focus(&self, id: ElementId) -> DomEvent {
        self.inner.borrow_mut().focused = Some(id);
        DomEvent::Focus { target: id }
    }

    /// The focused element, if any.
    pub fn focused(&self) -> Option<ElementId> {
        self.inner.borrow().focused
    }

    /// Set the value of `id` as if the user typed it and return the matching
    /// input event.
    pub fn type_text(&self, id: ElementId, text: &str) -> DomEvent {
        if let Some(data) = self.inner.borrow_mut().elements.get_mut(id) {
            data.value = text.to_string();
        }
        DomEvent::Input { target: id }
    }

    /// The tag name of an element.
    pub fn tag(&self, id: ElementId) -> Option<String> {
        self.inner.borrow().elements.get(id).map(|d| d.tag.clone())
    }

    /// The children of an element, in order. Text nodes are included.
    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.inner
            .borrow()
            .elements
            .get(id)
            .map(|d| d.children.clone())
            .unwrap_or_default()
    }

    /// Every element under `root` (inclusive) carrying `class`, in document
    /// order.
    pub fn find_by_class(&self, root: ElementId, class: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.inner.borrow().collect_by_class(root, class, &mut out);
        out
    }

    /// The concatenated text under an element.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.inner.borrow().collect_text(id, &mut out);
        out
    }

    /// The class list of an element.
    pub fn classes(&self, id: ElementId) -> Vec<String> {
        self.inner
            .borrow()
            .elements
            .get(id)
            .map(|d| d.classes.clone())
            .unwrap_or_default()
    }

    /// An inline style property of an element.
    pub fn style(&self, id: ElementId, property: &str) -> Option<String> {
        self.inner
            .borrow()
            .elements
            .get(id)
            .and_then(|d| d.styles.get(property).cloned())
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Returns `true` if any listener for `kind` is registered.
    pub fn has_listener(&self, kind: EventKind) -> bool {
        self.inner
            .borrow()
            .listeners
            .values()
            .any(|(_, k)| *k == kind)
    }

    /// Number of [`Document::replace_children`] calls so far.
    pub fn batch_update_count(&self) -> usize {
        self.inner.borrow().batch_updates
    }
}

impl Document for MemoryDocument {
    fn body(&self) -> ElementId {
        self.inner.borrow().body
    }

    fn contains(&self, id: ElementId) -> bool {
        self.inner.borrow().elements.contains_key(id)
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        self.inner.borrow_mut().elements.insert(ElementData {
            tag: tag.to_string(),
            ..ElementData::default()
        })
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        let mut inner = self.inner.borrow_mut();
        if !inner.elements.contains_key(parent) || !inner.elements.contains_key(child) {
            return;
        }
        inner.detach(child);
        if let Some(data) = inner.elements.get_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(data) = inner.elements.get_mut(parent) {
            data.children.push(child);
        }
    }

    fn remove_element(&mut self, id: ElementId) {
        let mut inner = self.inner.borrow_mut();
        inner.detach(id);
        inner.destroy(id);
    }

    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.inner.borrow().elements.get(id).and_then(|d| d.parent)
    }

    fn replace_children(&mut self, parent: ElementId, nodes: &[Node]) {
        let mut inner = self.inner.borrow_mut();
        let Some(data) = inner.elements.get_mut(parent) else {
            return;
        };
        let old = std::mem::take(&mut data.children);
        for child in old {
            inner.destroy(child);
        }
        for node in nodes {
            inner.build(parent, node);
        }
        inner.batch_updates += 1;
    }

    fn attribute(&self, id: ElementId, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .elements
            .get(id)
            .and_then(|d| d.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(data) = self.inner.borrow_mut().elements.get_mut(id) {
            data.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.inner
            .borrow()
            .elements
            .get(id)
            .is_some_and(|d| d.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, id: ElementId, class: &str) {
        if let Some(data) = self.inner.borrow_mut().elements.get_mut(id) {
            data.classes = class.split_whitespace().map(str::to_string).collect();
        }
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        if let Some(data) = self.inner.borrow_mut().elements.get_mut(id) {
            data.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn bounding_rect(&self, id: ElementId) -> Rect {
        self.inner
            .borrow()
            .elements
            .get(id)
            .map(|d| d.rect)
            .unwrap_or_default()
    }

    fn value(&self, id: ElementId) -> String {
        self.inner
            .borrow()
            .elements
            .get(id)
            .map(|d| d.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, id: ElementId, value: &str) {
        if let Some(data) = self.inner.borrow_mut().elements.get_mut(id) {
            data.value = value.to_string();
        }
    }

    fn blur(&mut self, id: ElementId) {
        let mut inner = self.inner.borrow_mut();
        if inner.focused == Some(id) {
            inner.focused = None;
        }
    }

    fn add_listener(&mut self, target: ListenTarget, kind: EventKind) -> ListenerId {
        self.inner.borrow_mut().listeners.insert((target, kind))
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(id);
    }
}

impl std::fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryDocument")
            .field("elements", &inner.elements.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
