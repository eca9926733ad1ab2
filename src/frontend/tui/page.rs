//! Page layout for the terminal
//!
//! Flows a composed `ViewNode` tree into terminal rows: a fixed nav bar at the
//! top, a scrollable body, an optional status line at the bottom, and the
//! acknowledgement popup over everything. Interactive nodes leave hit regions
//! behind so clicks can be mapped back to their `Action`.

use super::progress_bar::ProgressBar;
use crate::theme::AppTheme;
use crate::view::{Action, NodeKind, ViewNode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAV_HEIGHT: u16 = 3;
const INDENT: u16 = 2;
const SKILL_NAME_WIDTH: u16 = 12;
const SKILL_BAR_MAX: u16 = 48;
const MESSAGE_ROWS: usize = 4;
const ALERT_WIDTH: u16 = 60;

/// Clickable span in page coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    pub action: Action,
}

impl HitRegion {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.area.x
            && x < self.area.x + self.area.width
            && y >= self.area.y
            && y < self.area.y + self.area.height
    }
}

/// Clickable span on a body row, in content coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
struct BodyHit {
    row: u32,
    x: u16,
    width: u16,
    action: Action,
}

/// Click targets of one laid-out frame, valid at any scroll offset
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    nav: Vec<HitRegion>,
    body: Vec<BodyHit>,
    body_area: Rect,
}

impl HitMap {
    /// Screen regions with the body scrolled to `offset` rows
    pub fn regions(&self, offset: u32) -> Vec<HitRegion> {
        let mut regions = self.nav.clone();
        let visible = offset..offset + self.body_area.height as u32;
        for hit in self.body.iter().filter(|hit| visible.contains(&hit.row)) {
            regions.push(HitRegion {
                area: Rect::new(
                    hit.x,
                    self.body_area.y + (hit.row - offset) as u16,
                    hit.width,
                    1,
                ),
                action: hit.action.clone(),
            });
        }
        regions
    }

    pub fn action_at(&self, x: u16, y: u16, offset: u32) -> Option<Action> {
        self.regions(offset)
            .into_iter()
            .find(|hit| hit.contains(x, y))
            .map(|hit| hit.action)
    }
}

/// One laid-out body row; hits are (start col, end col, action)
#[derive(Debug, Clone, Default)]
struct Row {
    line: Line<'static>,
    hits: Vec<(u16, u16, Action)>,
}

impl Row {
    fn blank() -> Self {
        Self::default()
    }

    fn text(text: String, style: Style) -> Self {
        Self {
            line: Line::from(Span::styled(text, style)),
            hits: Vec::new(),
        }
    }

    fn width(&self) -> u16 {
        self.line.width() as u16
    }

    fn push(&mut self, text: String, style: Style, action: Option<Action>) {
        let start = self.width();
        let span = Span::styled(text, style);
        let len = span.width() as u16;
        self.line.spans.push(span);
        if let Some(action) = action {
            self.hits.push((start, start + len, action));
        }
    }
}

/// A laid-out frame, ready to be drawn at any scroll offset
pub struct Page<'t> {
    theme: &'t AppTheme,
    nav: Option<Row>,
    nav_scrolled: bool,
    body: Vec<Row>,
    status: Option<String>,
    alert: Option<&'t ViewNode>,
    nav_area: Rect,
    body_area: Rect,
    status_area: Option<Rect>,
    focused_field: bool,
}

impl<'t> Page<'t> {
    pub fn build(tree: &'t ViewNode, area: Rect, theme: &'t AppTheme) -> Self {
        let mut nav = None;
        let mut nav_scrolled = false;
        let mut sections = Vec::new();
        let mut status = None;
        let mut alert = None;

        for child in &tree.children {
            match child.kind {
                NodeKind::Nav => {
                    nav_scrolled = child.has_class("scrolled");
                    nav = Some(nav_row(child, theme));
                }
                NodeKind::Status => status = child.text.clone(),
                NodeKind::Alert => alert = Some(child),
                _ => sections.push(child),
            }
        }

        let nav_height = NAV_HEIGHT.min(area.height);
        let status_height = u16::from(status.is_some()).min(area.height - nav_height);
        let nav_area = Rect::new(area.x, area.y, area.width, nav_height);
        let body_area = Rect::new(
            area.x,
            area.y + nav_height,
            area.width,
            area.height - nav_height - status_height,
        );
        let status_area = (status_height > 0).then(|| {
            Rect::new(area.x, area.y + area.height - 1, area.width, 1)
        });

        let content_width = area.width.saturating_sub(INDENT * 2).max(1);
        let mut body = Vec::new();
        for section in sections {
            let mut flow = Flow {
                theme,
                width: content_width,
                rows: &mut body,
            };
            flow.node(section, 0);
        }

        let focused_field = tree
            .find_all(|n| n.focused)
            .iter()
            .any(|n| matches!(n.kind, NodeKind::Field { .. }));

        Self {
            theme,
            nav,
            nav_scrolled,
            body,
            status,
            alert,
            nav_area,
            body_area,
            status_area,
            focused_field,
        }
    }

    pub fn content_height(&self) -> u32 {
        self.body.len() as u32
    }

    pub fn visible_height(&self) -> u32 {
        self.body_area.height as u32
    }

    /// True when keys should go to a text field rather than scroll the page
    pub fn focused_field(&self) -> bool {
        self.focused_field
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    /// Click targets for this layout
    pub fn hit_map(&self) -> HitMap {
        // The popup is modal; clicks anywhere just close it
        if self.alert.is_some() {
            return HitMap::default();
        }

        let mut nav = Vec::new();
        if let Some(row) = &self.nav {
            let y = self.nav_area.y + self.nav_area.height / 2;
            for (start, end, action) in &row.hits {
                nav.push(HitRegion {
                    area: Rect::new(self.nav_area.x + 1 + start, y, end - start, 1),
                    action: action.clone(),
                });
            }
        }

        let mut body = Vec::new();
        for (idx, row) in self.body.iter().enumerate() {
            for (start, end, action) in &row.hits {
                body.push(BodyHit {
                    row: idx as u32,
                    x: self.body_area.x + INDENT + start,
                    width: end - start,
                    action: action.clone(),
                });
            }
        }

        HitMap {
            nav,
            body,
            body_area: self.body_area,
        }
    }

    fn visible_rows(&self, offset: u32) -> impl Iterator<Item = &Row> {
        self.body
            .iter()
            .skip(offset as usize)
            .take(self.body_area.height as usize)
    }

    pub fn render(&self, buf: &mut Buffer, offset: u32) {
        self.render_nav(buf);

        for (screen_row, row) in self.visible_rows(offset).enumerate() {
            let y = self.body_area.y + screen_row as u16;
            let width = self.body_area.width.saturating_sub(INDENT);
            buf.set_line(self.body_area.x + INDENT, y, &row.line, width);
        }

        if let (Some(area), Some(text)) = (self.status_area, &self.status) {
            Paragraph::new(Line::from(Span::styled(
                text.clone(),
                Style::default().fg(self.theme.status_text),
            )))
            .render(area, buf);
        }

        if let Some(alert) = self.alert {
            self.render_alert(alert, buf);
        }
    }

    fn render_nav(&self, buf: &mut Buffer) {
        if self.nav_area.height == 0 {
            return;
        }

        let (bg, border) = if self.nav_scrolled {
            (self.theme.nav_background_scrolled, self.theme.nav_border_scrolled)
        } else {
            (self.theme.nav_background, self.theme.nav_border)
        };

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(bg));
        let inner = block.inner(self.nav_area);
        block.render(self.nav_area, buf);

        if let Some(nav) = &self.nav {
            let y = self.nav_area.y + self.nav_area.height / 2;
            if inner.height > 0 {
                buf.set_line(inner.x + 1, y, &nav.line, inner.width.saturating_sub(1));
            }
        }
    }

    fn render_alert(&self, alert: &ViewNode, buf: &mut Buffer) {
        let area = buf.area;
        let width = ALERT_WIDTH.min(area.width);
        let mut lines = vec![Line::from(Span::styled(
            alert.text.clone().unwrap_or_default(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for child in &alert.children {
            let style = if child.has_class("hint") {
                Style::default().fg(self.theme.text_secondary)
            } else {
                Style::default()
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                child.text.clone().unwrap_or_default(),
                style,
            )));
        }

        let text_width = width.saturating_sub(4).max(1) as usize;
        let wrapped: usize = lines
            .iter()
            .map(|l| (l.width().max(1)).div_ceil(text_width))
            .sum();
        let height = (wrapped as u16 + 2).min(area.height);
        let popup = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(self.theme.alert_background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.alert_border)),
            )
            .render(popup, buf);
    }
}

fn nav_row(nav: &ViewNode, theme: &AppTheme) -> Row {
    let mut row = Row::default();
    let mut buttons = Vec::new();

    for child in &nav.children {
        match child.kind {
            NodeKind::Brand => row.push(
                child.text.clone().unwrap_or_default(),
                Style::default()
                    .fg(theme.nav_brand)
                    .add_modifier(Modifier::BOLD),
                None,
            ),
            NodeKind::List => {
                buttons.extend(child.find_all(|n| matches!(n.kind, NodeKind::Button { .. })))
            }
            _ => {}
        }
    }

    row.push("   ".to_string(), Style::default(), None);
    for button in buttons {
        let mut style = if button.has_class("active") {
            Style::default()
                .fg(theme.nav_item_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.nav_item)
        };
        if button.focused {
            style = style.fg(theme.focus).add_modifier(Modifier::REVERSED);
        }
        row.push(
            format!(" {} ", button.text.as_deref().unwrap_or_default()),
            style,
            button.action(),
        );
        row.push(" ".to_string(), Style::default(), None);
    }
    row
}

/// Body layout cursor
struct Flow<'a> {
    theme: &'a AppTheme,
    width: u16,
    rows: &'a mut Vec<Row>,
}

impl Flow<'_> {
    fn node(&mut self, node: &ViewNode, depth: u16) {
        let theme = self.theme;
        match &node.kind {
            NodeKind::Section { .. } | NodeKind::Form => {
                for child in &node.children {
                    self.node(child, depth);
                }
            }
            NodeKind::Block if node.has_class("skill-item") => self.skill(node, depth),
            NodeKind::Block if node.has_class("tech-tags") => self.tags(node, depth),
            NodeKind::Block if node.has_class("project-links") => self.inline(node, depth),
            NodeKind::Block if node.has_class("project-card") => {
                self.rule(depth);
                for child in &node.children {
                    self.node(child, depth + 1);
                }
                self.rows.push(Row::blank());
            }
            NodeKind::Block | NodeKind::List | NodeKind::Item => {
                for child in &node.children {
                    self.node(child, depth);
                }
            }
            NodeKind::Heading { level } => {
                let mut style = Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD);
                let text = node.text.clone().unwrap_or_default();
                let text = match *level {
                    1 => {
                        style = style.fg(theme.accent);
                        text.to_uppercase()
                    }
                    3 => {
                        style = style.add_modifier(Modifier::UNDERLINED);
                        text
                    }
                    _ => text,
                };
                self.wrapped(&text, style, depth);
                self.rows.push(Row::blank());
            }
            NodeKind::Paragraph | NodeKind::Tag | NodeKind::Brand => {
                let style = Style::default().fg(theme.text_primary);
                self.wrapped(node.text.as_deref().unwrap_or_default(), style, depth);
                if matches!(node.kind, NodeKind::Paragraph) {
                    self.rows.push(Row::blank());
                }
            }
            NodeKind::Button { .. } | NodeKind::Link { .. } => self.inline_one(node, depth),
            NodeKind::Field { field, value, cursor } => {
                self.field(node, field.multiline(), value, *cursor, depth)
            }
            NodeKind::FieldError { .. } => {
                let text = format!("⚠ {}", node.text.as_deref().unwrap_or_default());
                self.wrapped(&text, Style::default().fg(theme.form_error), depth);
            }
            NodeKind::Progress { width } => self.bar(width, depth),
            NodeKind::App | NodeKind::Nav | NodeKind::Alert | NodeKind::Status => {}
        }
    }

    fn pad(depth: u16) -> String {
        " ".repeat((depth * INDENT) as usize)
    }

    fn avail(&self, depth: u16) -> u16 {
        self.width.saturating_sub(depth * INDENT).max(1)
    }

    fn wrapped(&mut self, text: &str, style: Style, depth: u16) {
        for line in wrap_text(text, self.avail(depth) as usize) {
            self.rows.push(Row::text(format!("{}{}", Self::pad(depth), line), style));
        }
    }

    fn rule(&mut self, depth: u16) {
        let style = Style::default().fg(self.theme.text_secondary);
        let line = "─".repeat(self.avail(depth) as usize);
        self.rows.push(Row::text(format!("{}{}", Self::pad(depth), line), style));
    }

    fn interactive_style(&self, node: &ViewNode) -> Style {
        let base = match node.kind {
            NodeKind::Link { .. } => Style::default()
                .fg(self.theme.link)
                .add_modifier(Modifier::UNDERLINED),
            _ => Style::default()
                .fg(self.theme.button_text)
                .bg(self.theme.button_normal)
                .add_modifier(Modifier::BOLD),
        };
        if node.focused {
            base.fg(self.theme.focus).add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }

    fn label(node: &ViewNode) -> String {
        let text = node.text.as_deref().unwrap_or_default();
        match node.kind {
            NodeKind::Link { .. } => format!("[{}]", text),
            _ => format!(" {} ", text),
        }
    }

    fn inline_one(&mut self, node: &ViewNode, depth: u16) {
        let mut row = Row::text(Self::pad(depth), Style::default());
        row.push(Self::label(node), self.interactive_style(node), node.action());
        self.rows.push(row);
        self.rows.push(Row::blank());
    }

    /// Children side by side on one row
    fn inline(&mut self, node: &ViewNode, depth: u16) {
        let mut row = Row::text(Self::pad(depth), Style::default());
        for child in &node.children {
            row.push(Self::label(child), self.interactive_style(child), child.action());
            row.push("  ".to_string(), Style::default(), None);
        }
        self.rows.push(row);
    }

    fn tags(&mut self, node: &ViewNode, depth: u16) {
        let style = Style::default()
            .fg(self.theme.tag_text)
            .bg(self.theme.tag_background);
        let limit = self.width;
        let mut row = Row::text(Self::pad(depth), Style::default());
        for child in &node.children {
            let tag = format!(" {} ", child.text.as_deref().unwrap_or_default());
            let needed = tag.width() as u16 + 1;
            if row.width() + needed > limit && row.width() > depth * INDENT {
                self.rows.push(std::mem::take(&mut row));
                row = Row::text(Self::pad(depth), Style::default());
            }
            row.push(tag, style, None);
            row.push(" ".to_string(), Style::default(), None);
        }
        self.rows.push(row);
        self.rows.push(Row::blank());
    }

    fn skill(&mut self, node: &ViewNode, depth: u16) {
        let name = node
            .children
            .iter()
            .find(|c| matches!(c.kind, NodeKind::Tag))
            .and_then(|c| c.text.clone())
            .unwrap_or_default();
        let width = node
            .find_all(|n| matches!(n.kind, NodeKind::Progress { .. }))
            .first()
            .and_then(|n| match &n.kind {
                NodeKind::Progress { width } => Some(width.clone()),
                _ => None,
            })
            .unwrap_or_default();

        let mut row = Row::text(Self::pad(depth), Style::default());
        let fill = (SKILL_NAME_WIDTH as usize).saturating_sub(name.width());
        row.push(
            format!("{}{}", name, " ".repeat(fill)),
            Style::default().fg(self.theme.text_primary),
            None,
        );
        let bar_width = self
            .avail(depth)
            .saturating_sub(SKILL_NAME_WIDTH)
            .min(SKILL_BAR_MAX);
        if let Some(bar) = ProgressBar::from_width(&width) {
            let bar = bar
                .set_colors(self.theme.bar_fill, self.theme.bar_background)
                .set_text_color(Some(self.theme.text_secondary));
            row.line.spans.extend(bar.spans(bar_width));
        }
        self.rows.push(row);
    }

    fn bar(&mut self, width: &str, depth: u16) {
        if let Some(bar) = ProgressBar::from_width(width) {
            let bar = bar.set_colors(self.theme.bar_fill, self.theme.bar_background);
            let mut row = Row::text(Self::pad(depth), Style::default());
            row.line.spans.extend(bar.spans(self.avail(depth).min(SKILL_BAR_MAX)));
            self.rows.push(row);
        }
    }

    fn field(
        &mut self,
        node: &ViewNode,
        multiline: bool,
        value: &str,
        cursor: (usize, usize),
        depth: u16,
    ) {
        let theme = self.theme;
        let placeholder = node.text.clone().unwrap_or_default();
        let label_style = if node.focused {
            Style::default().fg(theme.form_label_focused)
        } else {
            Style::default().fg(theme.form_label)
        };
        self.rows
            .push(Row::text(format!("{}{}", Self::pad(depth), placeholder), label_style));

        let box_width = self.avail(depth) as usize;
        let field_style = Style::default()
            .fg(theme.form_field_text)
            .bg(theme.form_field_background);
        let action = node.action();

        let mut lines: Vec<String> = if value.is_empty() {
            vec![String::new()]
        } else {
            value.split('\n').map(str::to_string).collect()
        };
        if multiline {
            while lines.len() < MESSAGE_ROWS {
                lines.push(String::new());
            }
        }

        for (row_idx, text) in lines.iter().enumerate() {
            let mut row = Row::text(Self::pad(depth), Style::default());
            let chars: Vec<char> = text.chars().collect();

            if value.is_empty() && row_idx == 0 && !node.focused {
                let placeholder: Vec<char> = placeholder.chars().collect();
                let (shown, used) = fit(&placeholder, box_width);
                row.push(
                    format!("{}{}", shown, " ".repeat(box_width.saturating_sub(used))),
                    field_style.fg(theme.form_placeholder),
                    action.clone(),
                );
            } else if node.focused && row_idx == cursor.0 {
                // Widen the window leftwards from the cursor cell while it fits
                let col = cursor.1.min(chars.len());
                let at = chars.get(col).copied().unwrap_or(' ');
                let mut used = char_cells(at).max(1);
                let mut start = col;
                while start > 0 {
                    let cells = char_cells(chars[start - 1]);
                    if used + cells > box_width {
                        break;
                    }
                    start -= 1;
                    used += cells;
                }
                let before: String = chars[start..col].iter().collect();
                let rest = chars.get(col + 1..).unwrap_or_default();
                let (after, after_used) = fit(rest, box_width.saturating_sub(used));
                let fill = box_width.saturating_sub(used + after_used);

                row.push(before, field_style, action.clone());
                row.push(
                    at.to_string(),
                    field_style.add_modifier(Modifier::REVERSED),
                    action.clone(),
                );
                row.push(format!("{}{}", after, " ".repeat(fill)), field_style, action.clone());
            } else {
                let (shown, used) = fit(&chars, box_width);
                row.push(
                    format!("{}{}", shown, " ".repeat(box_width.saturating_sub(used))),
                    field_style,
                    action.clone(),
                );
            }
            self.rows.push(row);
        }
        self.rows.push(Row::blank());
    }
}

fn char_cells(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Longest prefix of `chars` that fits in `max` terminal cells, and its width
fn fit(chars: &[char], max: usize) -> (String, usize) {
    let mut shown = String::new();
    let mut used = 0;
    for &ch in chars {
        let cells = char_cells(ch);
        if used + cells > max {
            break;
        }
        shown.push(ch);
        used += cells;
    }
    (shown, used)
}

/// Greedy word wrap on display width; over-long words are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_cells = 0;

    for word in text.split_whitespace() {
        let mut rest: Vec<char> = word.chars().collect();
        while rest.iter().map(|ch| char_cells(*ch)).sum::<usize>() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_cells = 0;
            }
            let (head, _) = fit(&rest, width);
            let take = head.chars().count().max(1);
            lines.push(rest.drain(..take).collect());
        }
        let word: String = rest.into_iter().collect();
        if word.is_empty() {
            continue;
        }

        let word_cells = word.width();
        let needed = if current.is_empty() {
            word_cells
        } else {
            current_cells + 1 + word_cells
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_cells = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_cells += 1;
        }
        current.push_str(&word);
        current_cells += word_cells;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::content::{PROJECTS, SKILLS};
    use crate::data::{ActiveSection, FormField, FormState, Section};
    use crate::view::contact::{self, ContactProps};
    use crate::view::{about, navigation, projects};

    fn page_tree(body: ViewNode) -> ViewNode {
        ViewNode::new(NodeKind::App)
            .child(navigation::render(&ActiveSection::Known(Section::About), false))
            .child(body)
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_counts_wide_cells() {
        assert_eq!(wrap_text("日本語 日本語", 6), vec!["日本語", "日本語"]);
        assert_eq!(wrap_text("日本語日本", 4), vec!["日本", "語日", "本"]);
    }

    #[test]
    fn test_cursor_stays_visible_in_wide_text() {
        let name = "日本語".repeat(14);
        let form = FormState {
            name: name.clone(),
            ..FormState::default()
        };
        let mut tree = page_tree(contact::render(&ContactProps {
            form: &form,
            cursors: [(0, name.chars().count()), (0, 0), (0, 0)],
            error: None,
        }));
        // Four nav buttons come first in tab order
        tree.mark_focus(4);

        let theme = AppTheme::default();
        let area = Rect::new(0, 0, 80, 30);
        let page = Page::build(&tree, area, &theme);
        assert!(page.focused_field());

        let mut buf = Buffer::empty(area);
        page.render(&mut buf, 0);
        let cursor_cells = (NAV_HEIGHT..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter(|pos| buf[*pos].modifier.contains(Modifier::REVERSED))
            .count();
        assert_eq!(cursor_cells, 1);

        let name_hits: Vec<HitRegion> = page
            .hit_map()
            .regions(0)
            .into_iter()
            .filter(|h| h.action == Action::Focus(FormField::Name))
            .collect();
        assert!(!name_hits.is_empty());
        assert!(name_hits
            .iter()
            .all(|h| h.area.x + h.area.width <= area.width - INDENT));
    }

    #[test]
    fn test_nav_hits_on_first_rows() {
        let tree = page_tree(about::render(SKILLS));
        let theme = AppTheme::default();
        let page = Page::build(&tree, Rect::new(0, 0, 100, 30), &theme);

        let regions = page.hit_map().regions(0);
        let nav_hits: Vec<&HitRegion> = regions.iter().filter(|h| h.area.y < NAV_HEIGHT).collect();
        assert_eq!(nav_hits.len(), 4);
        assert_eq!(nav_hits[1].action, Action::Select(Section::About));
        assert!(nav_hits[0].area.x < nav_hits[1].area.x);
    }

    #[test]
    fn test_body_scrolls_hits() {
        let tree = page_tree(projects::render(PROJECTS));
        let theme = AppTheme::default();
        let full = Page::build(&tree, Rect::new(0, 0, 80, 200), &theme);
        let page = Page::build(&tree, Rect::new(0, 0, 80, 12), &theme);
        assert!(page.content_height() > page.visible_height());
        assert_eq!(page.content_height(), full.content_height());

        let link_rows = |page: &Page, offset: u32| -> Vec<u16> {
            page.hit_map()
                .regions(offset)
                .into_iter()
                .filter(|h| matches!(h.action, Action::OpenLink(_)))
                .map(|h| h.area.y)
                .collect()
        };

        let all = link_rows(&full, 0);
        assert_eq!(all.len(), PROJECTS.len() * 2);
        for offset in [0, 3, page.content_height() - page.visible_height()] {
            let expected: Vec<u16> = all
                .iter()
                .map(|y| *y as i64 - offset as i64)
                .filter(|y| *y >= NAV_HEIGHT as i64 && *y < 12)
                .map(|y| y as u16)
                .collect();
            assert_eq!(link_rows(&page, offset), expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_skill_rows_render_bars() {
        let tree = page_tree(about::render(SKILLS));
        let theme = AppTheme::default();
        let area = Rect::new(0, 0, 80, 40);
        let page = Page::build(&tree, area, &theme);
        let mut buf = Buffer::empty(area);
        page.render(&mut buf, 0);

        let screen: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect();
        let react = screen
            .iter()
            .find(|l| l.trim_start().starts_with("React "))
            .expect("React skill row");
        assert!(react.contains(" 85%"));
    }
}
