//! Row rendering.
//!
//! Rendering is a pure function of the results, the selection, the query and
//! the configuration. [`render_rows`] builds the complete row list; the
//! controller hands it to the document in one batch.

use std::fmt;

use crate::candidate::Candidate;
use crate::config::AutocompleteConfig;
use crate::dom::Node;
use crate::highlight::highlight_nodes;

/// Attribute carrying a row's position in the results.
pub const INDEX_ATTRIBUTE: &str = "data-index";

/// Builds the element for one candidate.
pub enum RowRenderer {
    /// Primary label with the query highlighted, secondary label below it.
    Default,
    /// A caller-supplied renderer. The candidate is opaque to the controller;
    /// the row class and index attribute are added to whatever it returns.
    Custom(Box<dyn Fn(&Candidate) -> Node>),
}

impl RowRenderer {
    /// Wrap a rendering function.
    pub fn from_fn<F>(render: F) -> Self
    where
        F: Fn(&Candidate) -> Node + 'static,
    {
        Self::Custom(Box::new(render))
    }
}

impl Default for RowRenderer {
    fn default() -> Self {
        Self::Default
    }
}

impl fmt::Debug for RowRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The built-in row body.
///
/// ```text
/// div.{prefix}primary    label with the query emphasized
/// div.{prefix}secondary  secondary label, omitted when absent
/// ```
pub fn default_row(candidate: &Candidate, query: &str, config: &AutocompleteConfig) -> Node {
    let primary = candidate.text(&config.primary_field);
    let mut row = Node::element("div").child(
        Node::element("div")
            .class(config.class("primary"))
            .children(highlight_nodes(
                primary.as_deref(),
                query,
                &config.class_prefix,
            )),
    );

    if let Some(secondary) = candidate.text(&config.secondary_field) {
        row = row.child(
            Node::element("div")
                .class(config.class("secondary"))
                .child(Node::text(secondary)),
        );
    }
    row
}

/// Build one row per candidate, tagged with its index and marked selected
/// where appropriate.
pub fn render_rows(
    results: &[Candidate],
    selected: Option<usize>,
    query: &str,
    renderer: &RowRenderer,
    config: &AutocompleteConfig,
) -> Vec<Node> {
    let row_class = config.class("row");
    let selected_class = config.class("selected");

    results
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let body = match renderer {
                RowRenderer::Default => default_row(candidate, query, config),
                RowRenderer::Custom(render) => render(candidate),
            };
            let mut row = body.into_element();
            row.add_class(row_class.as_str());
            if selected == Some(index) {
                row.add_class(selected_class.as_str());
            }
            row.set_attribute(INDEX_ATTRIBUTE.to_string(), index.to_string());
            Node::from(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<Candidate> {
        vec![
            Candidate::new()
                .with("title", "London")
                .with("subtitle", "United Kingdom"),
            Candidate::new().with("title", "Londrina"),
            Candidate::new().with("subtitle", "no title"),
        ]
    }

    #[test]
    fn test_rows_are_tagged() {
        let config = AutocompleteConfig::default();
        let rows = render_rows(&cities(), Some(1), "lon", &RowRenderer::Default, &config);

        assert_eq!(rows.len(), 3);
        for (i, row) in rows.iter().enumerate() {
            assert!(row.has_class("ac-row"));
            assert_eq!(row.attribute(INDEX_ATTRIBUTE), Some(i.to_string().as_str()));
        }
        assert!(!rows[0].has_class("ac-selected"));
        assert!(rows[1].has_class("ac-selected"));
    }

    #[test]
    fn test_default_row_layout() {
        let config = AutocompleteConfig::default();
        let rows = render_rows(&cities(), None, "lon", &RowRenderer::Default, &config);

        let first = rows[0].child_nodes();
        assert_eq!(first.len(), 2);
        assert!(first[0].has_class("ac-primary"));
        assert_eq!(first[0].child_nodes().len(), 3);
        assert!(first[0].child_nodes()[1].has_class("ac-match"));
        assert!(first[1].has_class("ac-secondary"));
        assert_eq!(first[1].text_content(), "United Kingdom");

        let second = rows[1].child_nodes();
        assert_eq!(second.len(), 1);

        let untitled = rows[2].child_nodes();
        assert!(untitled[0].child_nodes().is_empty());
    }

    #[test]
    fn test_custom_renderer_gets_tagged() {
        let config = AutocompleteConfig::default().with_class_prefix("x-");
        let renderer = RowRenderer::from_fn(|c| {
            Node::text(c.text("title").unwrap_or_default())
        });
        let rows = render_rows(&cities(), Some(0), "", &renderer, &config);

        assert!(rows[0].has_class("x-row"));
        assert!(rows[0].has_class("x-selected"));
        assert_eq!(rows[0].text_content(), "London");
        assert_eq!(rows[2].attribute(INDEX_ATTRIBUTE), Some("2"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = AutocompleteConfig::default();
        let a = render_rows(&cities(), Some(2), "lo", &RowRenderer::Default, &config);
        let b = render_rows(&cities(), Some(2), "lo", &RowRenderer::Default, &config);
        assert_eq!(a, b);
    }
}
