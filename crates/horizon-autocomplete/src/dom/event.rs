//! Events delivered to the controller by the host document.

use super::ElementId;

/// The kinds of event the controller subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The input gained focus.
    Focus,
    /// The input's value changed.
    Input,
    /// A key was pressed.
    KeyDown,
    /// A pointer click.
    Click,
    /// A touch ended. Used instead of [`EventKind::Click`] on mobile browsers.
    TouchEnd,
    /// The viewport was resized.
    Resize,
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// A specific element.
    Element(ElementId),
    /// The document.
    Document,
    /// The window.
    Window,
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowRight,
    Enter,
    Escape,
    /// Any other key, by its `KeyboardEvent.key` name.
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` string to a [`Key`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            other => Self::Other(other.to_string()),
        }
    }
}

/// An event as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// `target` gained focus.
    Focus { target: ElementId },
    /// The value of `target` changed.
    Input { target: ElementId },
    /// A key was pressed anywhere in the document.
    KeyDown { key: Key },
    /// A click or touch-end landed on `target`.
    ///
    /// `target` is `None` when the event hit no element (for example the
    /// scrollbar or outside the document).
    Pointer {
        kind: EventKind,
        target: Option<ElementId>,
    },
    /// The viewport was resized.
    Resize,
}

impl DomEvent {
    /// A key-down event for `key`.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// A click on `target`.
    pub fn click(target: ElementId) -> Self {
        Self::Pointer {
            kind: EventKind::Click,
            target: Some(target),
        }
    }

    /// A touch ending on `target`.
    pub fn touch_end(target: ElementId) -> Self {
        Self::Pointer {
            kind: EventKind::TouchEnd,
            target: Some(target),
        }
    }

    /// The kind of this event, for listener matching.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Focus { .. } => EventKind::Focus,
            Self::Input { .. } => EventKind::Input,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::Pointer { kind, .. } => *kind,
            Self::Resize => EventKind::Resize,
        }
    }
}

/// What the host should do with an event after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The controller did not act on the event.
    Ignored,
    /// The controller acted on the event.
    Handled,
    /// The controller acted on the event and the host should suppress the
    /// browser's default action (caret movement, form submission).
    PreventDefault,
}

impl EventResponse {
    /// Returns `true` unless the event was ignored.
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Returns `true` if the default action should be suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}
