//! View tree - in-memory description of the UI
//!
//! Section views are pure functions from data to a `ViewNode` tree. A frontend
//! commits the tree to the display; interactive nodes name the `Action` to
//! dispatch instead of holding callbacks.

pub mod about;
pub mod contact;
pub mod hero;
pub mod navigation;
pub mod projects;

use crate::data::{FormField, Section};
use serde::Serialize;

/// What activating an interactive node asks the composer to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum Action {
    Select(Section),
    OpenLink(String),
    Focus(FormField),
    Submit,
}

/// Node kinds, roughly one per HTML element the page uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    App,
    Nav,
    Brand,
    List,
    Item,
    Section { section: Section },
    Heading { level: u8 },
    Paragraph,
    Block,
    Button { action: Action },
    Tag,
    Link { href: String },
    Progress { width: String },
    Form,
    Field {
        field: FormField,
        value: String,
        cursor: (usize, usize),
    },
    FieldError { field: FormField },
    Alert,
    Status,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub focused: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            class: None,
            text: None,
            focused: false,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.class
            .as_deref()
            .map(|c| c.split_whitespace().any(|part| part == name))
            .unwrap_or(false)
    }

    /// The action dispatched when this node is clicked or activated
    pub fn action(&self) -> Option<Action> {
        match &self.kind {
            NodeKind::Button { action } => Some(action.clone()),
            NodeKind::Link { href } => Some(Action::OpenLink(href.clone())),
            NodeKind::Field { field, .. } => Some(Action::Focus(*field)),
            _ => None,
        }
    }

    /// Pre-order walk
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    pub fn find_all(&self, pred: impl Fn(&ViewNode) -> bool) -> Vec<&ViewNode> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if pred(node) {
                found.push(node);
            }
        });
        found
    }

    /// Actions of all interactive nodes in document (tab) order
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.walk(&mut |node| {
            if let Some(action) = node.action() {
                actions.push(action);
            }
        });
        actions
    }

    /// Mark the `index`-th interactive node as focused
    pub fn mark_focus(&mut self, index: usize) {
        let mut seen = 0;
        self.mark_focus_inner(index, &mut seen);
    }

    fn mark_focus_inner(&mut self, index: usize, seen: &mut usize) -> bool {
        if self.action().is_some() {
            if *seen == index {
                self.focused = true;
                return true;
            }
            *seen += 1;
        }
        self.children
            .iter_mut()
            .any(|child| child.mark_focus_inner(index, seen))
    }

    /// Sections mounted anywhere in the tree
    #[cfg(test)]
    pub fn mounted_sections(&self) -> Vec<Section> {
        self.find_all(|node| matches!(node.kind, NodeKind::Section { .. }))
            .into_iter()
            .filter_map(|node| match node.kind {
                NodeKind::Section { section } => Some(section),
                _ => None,
            })
            .collect()
    }

    /// Concatenated text of this node and its descendants
    #[cfg(test)]
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.walk(&mut |node| {
            if let Some(text) = &node.text {
                parts.push(text.as_str());
            }
        });
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewNode {
        ViewNode::new(NodeKind::App)
            .child(ViewNode::new(NodeKind::Heading { level: 1 }).text("Title"))
            .child(
                ViewNode::new(NodeKind::Block)
                    .child(ViewNode::new(NodeKind::Button { action: Action::Submit }).text("Go"))
                    .child(ViewNode::new(NodeKind::Link { href: "#".to_string() }).text("GitHub")),
            )
    }

    #[test]
    fn test_actions_in_document_order() {
        let actions = sample().actions();
        assert_eq!(actions, vec![Action::Submit, Action::OpenLink("#".to_string())]);
    }

    #[test]
    fn test_mark_focus() {
        let mut tree = sample();
        tree.mark_focus(1);
        let focused = tree.find_all(|n| n.focused);
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].text.as_deref(), Some("GitHub"));
    }

    #[test]
    fn test_has_class_matches_words() {
        let node = ViewNode::new(NodeKind::Nav).class("navbar scrolled");
        assert!(node.has_class("scrolled"));
        assert!(!node.has_class("scroll"));
    }

    #[test]
    fn test_serializes_kind_inline() {
        let node = ViewNode::new(NodeKind::Progress { width: "85%".to_string() });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "progress");
        assert_eq!(json["width"], "85%");
        assert!(json.get("children").is_none());
    }
}
