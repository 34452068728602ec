//! The document the controller drives.
//!
//! The controller never touches a browser API directly. Everything it needs
//! from the page (element lookup, attributes, styles, focus, the bounding box
//! of the anchor, listener registration) goes through the [`Document`] trait.
//! A `web-sys` binding implements it over the real DOM; [`MemoryDocument`] is
//! an in-memory implementation for headless hosts and tests.
//!
//! # Listener registration
//!
//! Hosts forward events to [`Autocomplete::handle_event`]. The controller only
//! reacts to events of a kind it currently holds a listener for, so a host
//! may simply forward everything it receives.
//!
//! [`Autocomplete::handle_event`]: crate::Autocomplete::handle_event

mod event;
mod memory;
mod node;

use slotmap::new_key_type;

pub use event::{DomEvent, EventKind, EventResponse, Key, ListenTarget};
pub use memory::MemoryDocument;
pub use node::{ElementNode, Node};

use crate::geometry::Rect;

new_key_type! {
    /// Identifies an element in a [`Document`].
    pub struct ElementId;

    /// Identifies a listener registered with [`Document::add_listener`].
    pub struct ListenerId;
}

/// The operations the controller needs from a document.
pub trait Document {
    /// The element new overlays are appended to.
    fn body(&self) -> ElementId;

    /// Returns `true` if `id` refers to a live element.
    fn contains(&self, id: ElementId) -> bool;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> ElementId;

    /// Append `child` to `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Detach and destroy an element and its subtree.
    fn remove_element(&mut self, id: ElementId);

    /// The parent of `id`, if attached.
    fn parent(&self, id: ElementId) -> Option<ElementId>;

    /// Replace every child of `parent` with elements built from `nodes`, in
    /// a single update.
    fn replace_children(&mut self, parent: ElementId, nodes: &[Node]);

    /// Read an attribute.
    fn attribute(&self, id: ElementId, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str);

    /// Returns `true` if the element's class list contains `class`.
    fn has_class(&self, id: ElementId, class: &str) -> bool;

    /// Replace the element's class list with a single class.
    fn set_class(&mut self, id: ElementId, class: &str);

    /// Set an inline style property.
    fn set_style(&mut self, id: ElementId, property: &str, value: &str);

    /// The element's bounding box in document coordinates.
    fn bounding_rect(&self, id: ElementId) -> Rect;

    /// The live value of a form control.
    fn value(&self, id: ElementId) -> String;

    /// Set the live value of a form control.
    fn set_value(&mut self, id: ElementId, value: &str);

    /// Remove focus from an element.
    fn blur(&mut self, id: ElementId);

    /// Register interest in events of `kind` on `target`.
    fn add_listener(&mut self, target: ListenTarget, kind: EventKind) -> ListenerId;

    /// Drop a registration made with [`Document::add_listener`].
    fn remove_listener(&mut self, id: ListenerId);
}
