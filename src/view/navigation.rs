//! Navigation bar: brand plus one button per section.

use super::{Action, NodeKind, ViewNode};
use crate::data::content::BRAND;
use crate::data::{ActiveSection, Section};

pub fn render(active: &ActiveSection, scrolled: bool) -> ViewNode {
    let class = if scrolled { "navbar scrolled" } else { "navbar" };

    let buttons = Section::ALL.into_iter().map(|section| {
        let button = ViewNode::new(NodeKind::Button {
            action: Action::Select(section),
        })
        .text(section.label());
        let button = if active.is(section) {
            button.class("active")
        } else {
            button
        };
        ViewNode::new(NodeKind::Item).child(button)
    });

    ViewNode::new(NodeKind::Nav)
        .class(class)
        .child(ViewNode::new(NodeKind::Brand).class("nav-brand").text(BRAND))
        .child(ViewNode::new(NodeKind::List).class("nav-links").children(buttons))
}
