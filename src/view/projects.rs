use super::{NodeKind, ViewNode};
use crate::data::{ProjectRecord, Section};

/// Project cards with technology tags and outbound links
pub fn render(projects: &[ProjectRecord]) -> ViewNode {
    let cards = projects.iter().map(|project| {
        let tags = project
            .technologies
            .iter()
            .map(|tech| ViewNode::new(NodeKind::Tag).class("tech-tag").text(*tech));

        ViewNode::new(NodeKind::Block)
            .class("project-card fade-in-up")
            .child(ViewNode::new(NodeKind::Heading { level: 3 }).text(project.title))
            .child(ViewNode::new(NodeKind::Paragraph).text(project.description))
            .child(ViewNode::new(NodeKind::Block).class("tech-tags").children(tags))
            .child(
                ViewNode::new(NodeKind::Block)
                    .class("project-links")
                    .child(link(project.github_url, "GitHub"))
                    .child(link(project.demo_url, "Live Demo")),
            )
    });

    ViewNode::new(NodeKind::Section {
        section: Section::Projects,
    })
    .class("projects")
    .child(ViewNode::new(NodeKind::Heading { level: 2 }).text("My Projects"))
    .child(
        ViewNode::new(NodeKind::Block)
            .class("projects-grid container")
            .children(cards),
    )
}

fn link(href: &str, label: &str) -> ViewNode {
    ViewNode::new(NodeKind::Link {
        href: href.to_string(),
    })
    .text(label)
}
