//! About section: bio paragraph and skill bars.

use super::{NodeKind, ViewNode};
use crate::data::content::ABOUT_TEXT;
use crate::data::{Section, SkillRecord};

pub fn render(skills: &[SkillRecord]) -> ViewNode {
    let items = skills.iter().map(|skill| {
        ViewNode::new(NodeKind::Block)
            .class("skill-item")
            .child(ViewNode::new(NodeKind::Tag).text(skill.name))
            .child(
                ViewNode::new(NodeKind::Block).class("skill-bar").child(
                    ViewNode::new(NodeKind::Progress {
                        width: skill.width(),
                    })
                    .class("skill-progress"),
                ),
            )
    });

    ViewNode::new(NodeKind::Section {
        section: Section::About,
    })
    .class("about")
    .child(ViewNode::new(NodeKind::Heading { level: 2 }).text("About Me"))
    .child(
        ViewNode::new(NodeKind::Block)
            .class("about-content container")
            .child(
                ViewNode::new(NodeKind::Block)
                    .class("about-text")
                    .child(ViewNode::new(NodeKind::Paragraph).text(ABOUT_TEXT)),
            )
            .child(
                ViewNode::new(NodeKind::Block)
                    .class("skills")
                    .child(ViewNode::new(NodeKind::Heading { level: 3 }).text("Technical Skills"))
                    .children(items),
            ),
    )
}
