//! Static portfolio content
//!
//! Fixed project and skill tables plus the profile strings shown by the
//! hero and about sections. Nothing here is mutated at runtime.

/// A portfolio project card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Rendered as tags in this order
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub demo_url: &'static str,
}

/// A named skill with a proficiency level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    pub name: &'static str,
    /// Percentage, 0..=100
    pub level: u8,
}

impl SkillRecord {
    /// Width of the progress fill, e.g. "85%"
    pub fn width(&self) -> String {
        format!("{}%", self.level)
    }
}

/// Brand shown on the left of the nav bar
pub const BRAND: &str = "John Developer";

pub const HERO_TITLE: &str = "Hi, I'm John Developer";
pub const HERO_HEADLINE: &str = "Full-Stack Developer & UI/UX Enthusiast";
pub const HERO_TAGLINE: &str =
    "I create beautiful, functional web applications using modern technologies";

pub const ABOUT_TEXT: &str = "I'm a passionate full-stack developer with expertise in creating \
responsive, mobile-first web applications. I specialize in modern technologies like React, \
Node.js, and Python.";

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "E-commerce Store",
        description: "Full-stack e-commerce platform with React, Node.js, and MongoDB. \
Features user authentication, payment processing, and admin dashboard.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Express"],
        github_url: "#",
        demo_url: "#",
    },
    ProjectRecord {
        id: 2,
        title: "Task Manager Pro",
        description: "Productivity app with drag-and-drop functionality, real-time updates, \
and team collaboration features. Built with React and Firebase.",
        technologies: &["React", "Firebase", "CSS3", "Context API"],
        github_url: "#",
        demo_url: "#",
    },
    ProjectRecord {
        id: 3,
        title: "Weather Dashboard",
        description: "Real-time weather application with location-based forecasts and \
interactive charts. Features geolocation and multiple data sources.",
        technologies: &["JavaScript", "API Integration", "Chart.js", "Geolocation"],
        github_url: "#",
        demo_url: "#",
    },
];

pub const SKILLS: &[SkillRecord] = &[
    SkillRecord { name: "JavaScript", level: 90 },
    SkillRecord { name: "React", level: 85 },
    SkillRecord { name: "Python", level: 80 },
    SkillRecord { name: "Node.js", level: 75 },
    SkillRecord { name: "HTML/CSS", level: 95 },
    SkillRecord { name: "SQL", level: 70 },
];
