use super::{Action, NodeKind, ViewNode};
use crate::data::content::{HERO_HEADLINE, HERO_TAGLINE, HERO_TITLE};
use crate::data::Section;

/// Landing section with the "View My Work" call-to-action
pub fn render() -> ViewNode {
    ViewNode::new(NodeKind::Section {
        section: Section::Home,
    })
    .class("hero")
    .child(
        ViewNode::new(NodeKind::Block)
            .class("hero-content")
            .child(ViewNode::new(NodeKind::Heading { level: 1 }).text(HERO_TITLE))
            .child(ViewNode::new(NodeKind::Heading { level: 2 }).text(HERO_HEADLINE))
            .child(ViewNode::new(NodeKind::Paragraph).text(HERO_TAGLINE))
            .child(
                ViewNode::new(NodeKind::Button {
                    action: Action::Select(Section::Projects),
                })
                .class("cta-button btn btn-primary")
                .text("View My Work"),
            ),
    )
}
