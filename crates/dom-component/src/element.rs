//! Element Builder
//!
//! Builds one DOM element from a tag, attributes, children and event
//! listeners.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

/// A single child: text or an already built node
#[derive(Clone, Debug)]
pub enum Child {
    Text(String),
    Node(Node),
}

/// Children of an element: one text, one node, or an ordered mix of both
#[derive(Clone, Debug)]
pub enum Children {
    Text(String),
    Node(Node),
    Many(Vec<Child>),
}

impl Default for Children {
    fn default() -> Self {
        Children::Many(Vec::new())
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Node(element.into())
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children::Node(node)
    }
}

impl From<Element> for Children {
    fn from(element: Element) -> Self {
        Children::Node(element.into())
    }
}

impl From<Vec<Child>> for Children {
    fn from(children: Vec<Child>) -> Self {
        Children::Many(children)
    }
}

impl Children {
    fn into_vec(self) -> Vec<Child> {
        match self {
            Children::Text(text) => vec![Child::Text(text)],
            Children::Node(node) => vec![Child::Node(node)],
            Children::Many(children) => children,
        }
    }
}

/// An event binding: event type plus the JS function that handles it.
///
/// The closure is handed over to the JS side, so it lives as long as the
/// element it is attached to.
pub struct Listener {
    event_type: String,
    callback: JsValue,
}

impl Listener {
    pub fn new(event_type: impl Into<String>, listener: impl FnMut(Event) + 'static) -> Self {
        let closure = Closure::<dyn FnMut(Event)>::new(listener);
        Self {
            event_type: event_type.into(),
            callback: closure.into_js_value(),
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    fn attach(&self, element: &Element) -> Result<(), JsValue> {
        element.add_event_listener_with_callback(
            &self.event_type,
            self.callback.unchecked_ref::<js_sys::Function>(),
        )
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}

/// Current page document
pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))
}

/// Create an element in one call.
///
/// Attributes with a `None` value are skipped. Text children become text
/// nodes; children are appended in order.
pub fn create_element(
    tag: &str,
    attributes: &[(&str, Option<&str>)],
    children: impl Into<Children>,
    listeners: Vec<Listener>,
) -> Result<Element, JsValue> {
    let document = document()?;
    let element = document.create_element(tag)?;

    for (name, value) in attributes {
        if let Some(value) = value {
            element.set_attribute(name, value)?;
        }
    }

    for child in children.into().into_vec() {
        match child {
            Child::Text(text) => {
                let text_node = document.create_text_node(&text);
                element.append_child(&text_node)?;
            }
            Child::Node(node) => {
                element.append_child(&node)?;
            }
        }
    }

    for listener in &listeners {
        listener.attach(&element)?;
    }

    Ok(element)
}

/// Start building an element with the given tag
pub fn el(tag: &str) -> ElementBuilder {
    ElementBuilder::new(tag)
}

/// Fluent form of [`create_element`]
#[derive(Debug)]
pub struct ElementBuilder {
    tag: String,
    attributes: Vec<(String, Option<String>)>,
    children: Vec<Child>,
    listeners: Vec<Listener>,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.attr_opt(name, Some(value))
    }

    /// Attribute that is only set when `value` is `Some`
    pub fn attr_opt(mut self, name: &str, value: Option<&str>) -> Self {
        self.attributes
            .push((name.to_string(), value.map(str::to_string)));
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.child(text)
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl Into<Children>) -> Self {
        self.children.extend(children.into().into_vec());
        self
    }

    pub fn on(mut self, event_type: &str, listener: impl FnMut(Event) + 'static) -> Self {
        self.listeners.push(Listener::new(event_type, listener));
        self
    }

    pub fn build(self) -> Result<Element, JsValue> {
        let attributes: Vec<(&str, Option<&str>)> = self
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
            .collect();
        create_element(
            &self.tag,
            &attributes,
            Children::Many(self.children),
            self.listeners,
        )
    }
}
