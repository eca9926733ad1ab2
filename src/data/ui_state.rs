//! UI State - active section and scroll flag
//!
//! This module contains UI state that is independent of rendering.
//! The root composer owns a single `UiState`; views only read slices of it.

use serde::Serialize;
use std::fmt;

/// One of the four content sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Navigation order
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Exact match against the section identifiers (case-sensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Value held by the active-section slot
///
/// `Unknown` keeps whatever string was handed to the raw setter. No section
/// body is mounted for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActiveSection {
    Known(Section),
    Unknown(String),
}

impl ActiveSection {
    pub fn parse(raw: &str) -> Self {
        match Section::from_id(raw) {
            Some(section) => Self::Known(section),
            None => Self::Unknown(raw.to_string()),
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Known(section) => Some(*section),
            Self::Unknown(_) => None,
        }
    }

    pub fn is(&self, section: Section) -> bool {
        self.section() == Some(section)
    }
}

/// Application UI state
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub scrolled: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_section: ActiveSection::Known(Section::Home),
            scrolled: false,
        }
    }

    /// Raw setter: accepts any identifier without validation
    pub fn set_active_section(&mut self, raw: &str) {
        let next = ActiveSection::parse(raw);
        if let ActiveSection::Unknown(ref id) = next {
            tracing::warn!("Unrecognized section '{}' - body will be empty", id);
        }
        self.active_section = next;
    }

    /// Typed setter used by navigation and the hero call-to-action
    pub fn select(&mut self, section: Section) {
        self.active_section = ActiveSection::Known(section);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
