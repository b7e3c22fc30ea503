//! A minimal virtual-node description of what a component renders.
//!
//! The picker does not draw anything. Each component reports the element it
//! wants, the attributes it manages and the children it wraps, and the host
//! turns the resulting [`Node`] into real markup. A component can be
//! rendered as a plain element, as a host-supplied component, or as a
//! template that merges the component's attributes into its single child.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{DatePickerError, Result};

/// An HTML-like element kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `button`
    Button,
    /// `input`
    Input,
    /// `div`
    Div,
    /// `span`
    Span,
    /// Any other tag name.
    Custom(String),
}

impl ElementKind {
    /// The tag name.
    pub fn tag(&self) -> &str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Div => "div",
            Self::Span => "span",
            Self::Custom(tag) => tag,
        }
    }
}

impl From<&str> for ElementKind {
    fn from(tag: &str) -> Self {
        match tag {
            "button" => Self::Button,
            "input" => Self::Input,
            "div" => Self::Div,
            "span" => Self::Span,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// How a component is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// A plain element.
    Element(ElementKind),
    /// A composite component supplied by the host, by name.
    Component(String),
    /// No wrapper: attributes are merged into the single child.
    Template,
}

impl From<ElementKind> for RenderTarget {
    fn from(kind: ElementKind) -> Self {
        Self::Element(kind)
    }
}

impl FromStr for RenderTarget {
    type Err = DatePickerError;

    /// `"template"` selects [`RenderTarget::Template`]; any other tag name
    /// selects an element.
    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "template" => Self::Template,
            tag => Self::Element(ElementKind::from(tag)),
        })
    }
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    /// A string value.
    Str(String),
    /// A boolean value.
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Attributes keyed by name, in a stable order.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A rendered node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A plain element.
    Element {
        /// The element kind.
        kind: ElementKind,
        /// Its attributes.
        attributes: Attributes,
        /// Its children.
        children: Vec<Node>,
    },
    /// A host component.
    Component {
        /// The component name.
        name: String,
        /// Its attributes.
        attributes: Attributes,
        /// Its children.
        children: Vec<Node>,
    },
    /// A text node.
    Text(String),
}

impl Node {
    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// An element without attributes.
    pub fn element(kind: ElementKind, children: Vec<Node>) -> Self {
        Self::Element {
            kind,
            attributes: Attributes::new(),
            children,
        }
    }

    /// The node's attributes; `None` for text.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Element { attributes, .. } | Self::Component { attributes, .. } => Some(attributes),
            Self::Text(_) => None,
        }
    }

    /// Look up one attribute.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes().and_then(|attrs| attrs.get(name))
    }

    /// The node's children; empty for text.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } | Self::Component { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// The element kind, if this is an element.
    pub fn kind(&self) -> Option<&ElementKind> {
        match self {
            Self::Element { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Render a component's `attributes` and `children` as `target`.
///
/// For [`RenderTarget::Template`] there must be exactly one child and it
/// must be an element or component; the child keeps its own attributes
/// where both define the same name.
pub fn render(target: &RenderTarget, attributes: Attributes, mut children: Vec<Node>) -> Result<Node> {
    match target {
        RenderTarget::Element(kind) => Ok(Node::Element {
            kind: kind.clone(),
            attributes,
            children,
        }),
        RenderTarget::Component(name) => Ok(Node::Component {
            name: name.clone(),
            attributes,
            children,
        }),
        RenderTarget::Template => {
            if children.len() != 1 {
                return Err(DatePickerError::TemplateChildCount(children.len()));
            }
            let mut child = children.remove(0);
            match &mut child {
                Node::Element { attributes: own, .. } | Node::Component { attributes: own, .. } => {
                    let mut merged = attributes;
                    merged.append(own);
                    *own = merged;
                }
                Node::Text(_) => return Err(DatePickerError::TemplateChildNotElement),
            }
            Ok(child)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), AttrValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_render_element() {
        let node = render(
            &RenderTarget::Element(ElementKind::Button),
            attrs(&[("type", "button")]),
            vec![Node::text("Open")],
        )
        .unwrap();
        assert_eq!(node.kind(), Some(&ElementKind::Button));
        assert_eq!(node.attr("type"), Some(&AttrValue::from("button")));
        assert_eq!(node.children(), &[Node::text("Open")]);
    }

    #[test]
    fn test_template_merges_into_child() {
        let child = Node::Element {
            kind: ElementKind::Span,
            attributes: attrs(&[("type", "submit"), ("class", "mine")]),
            children: vec![],
        };
        let node = render(
            &RenderTarget::Template,
            attrs(&[("type", "button"), ("aria-label", "open")]),
            vec![child],
        )
        .unwrap();

        assert_eq!(node.kind(), Some(&ElementKind::Span));
        assert_eq!(node.attr("type"), Some(&AttrValue::from("submit")));
        assert_eq!(node.attr("class"), Some(&AttrValue::from("mine")));
        assert_eq!(node.attr("aria-label"), Some(&AttrValue::from("open")));
    }

    #[test]
    fn test_template_requires_one_child() {
        assert_eq!(
            render(&RenderTarget::Template, Attributes::new(), vec![]),
            Err(DatePickerError::TemplateChildCount(0))
        );
        let two = vec![
            Node::element(ElementKind::Div, vec![]),
            Node::element(ElementKind::Div, vec![]),
        ];
        assert_eq!(
            render(&RenderTarget::Template, Attributes::new(), two),
            Err(DatePickerError::TemplateChildCount(2))
        );
        assert_eq!(
            render(&RenderTarget::Template, Attributes::new(), vec![Node::text("x")]),
            Err(DatePickerError::TemplateChildNotElement)
        );
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!("template".parse::<RenderTarget>(), Ok(RenderTarget::Template));
        assert_eq!(
            "div".parse::<RenderTarget>(),
            Ok(RenderTarget::Element(ElementKind::Div))
        );
        assert_eq!(
            "my-button".parse::<RenderTarget>(),
            Ok(RenderTarget::Element(ElementKind::Custom("my-button".to_string())))
        );
    }
}
