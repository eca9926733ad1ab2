use crate::config::UiConfig;
use crate::core::contact_form::{Acknowledgement, ContactForm, SubmitOutcome};
use crate::core::input_router::{route_key, Command, InputContext};
use crate::core::scroll::{is_scrolled, ScrollSubscription};
use crate::data::content::{PROJECTS, SKILLS};
use crate::data::{FormField, Section, UiState};
use crate::frontend::{Frontend, FrontendEvent};
use crate::view::contact::ContactProps;
use crate::view::{about, contact, hero, navigation, projects};
use crate::view::{Action, NodeKind, ViewNode};
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEventKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Section component currently mounted in the body
enum Mounted {
    Hero,
    About,
    Projects,
    Contact(ContactForm),
}

impl Mounted {
    fn mount(section: Section) -> Self {
        match section {
            Section::Home => Self::Hero,
            Section::About => Self::About,
            Section::Projects => Self::Projects,
            Section::Contact => Self::Contact(ContactForm::new()),
        }
    }

    fn section(&self) -> Section {
        match self {
            Self::Hero => Section::Home,
            Self::About => Section::About,
            Self::Projects => Section::Projects,
            Self::Contact(_) => Section::Contact,
        }
    }
}

/// Root composer (frontend-agnostic)
///
/// Owns the UI state and the scroll subscription, keeps exactly one section
/// component mounted for the active section, and composes the full view tree.
/// All state changes arrive through `handle_event` or the setters.
pub struct AppCore {
    /// Shared with the scroll handler, which only writes `scrolled`
    state: Rc<RefCell<UiState>>,

    /// Released on drop
    _scroll_subscription: ScrollSubscription,

    mounted: Option<Mounted>,

    /// Index into the tree's interactive nodes (tab order)
    focus: Option<usize>,

    acknowledgement: Option<Acknowledgement>,

    /// One-line feedback (e.g. link copied)
    status: Option<String>,

    /// Application running flag
    pub running: bool,
}

impl AppCore {
    /// Create the composer and subscribe to the host scroll signal
    pub fn new(config: &UiConfig, scroll: &crate::core::scroll::ScrollSignal) -> Self {
        let state = Rc::new(RefCell::new(UiState::new()));
        let threshold = config.scroll_threshold;

        let handler_state = Rc::clone(&state);
        let subscription = scroll.subscribe(move |offset| {
            let scrolled = is_scrolled(offset, threshold);
            let mut state = handler_state.borrow_mut();
            if state.scrolled != scrolled {
                tracing::debug!(offset, scrolled, "Nav scroll style changed");
            }
            state.scrolled = scrolled;
        });

        let mut core = Self {
            state,
            _scroll_subscription: subscription,
            mounted: None,
            focus: None,
            acknowledgement: None,
            status: None,
            running: true,
        };
        core.sync_mount();
        core
    }

    #[cfg(test)]
    pub fn ui_state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Raw setter: any identifier is accepted, unknown ones blank the body
    pub fn set_active_section(&mut self, raw: &str) {
        self.state.borrow_mut().set_active_section(raw);
        self.sync_mount();
    }

    pub fn select(&mut self, section: Section) {
        self.state.borrow_mut().select(section);
        self.sync_mount();
    }

    /// Remount the body if the active section changed
    fn sync_mount(&mut self) {
        let wanted = self.state.borrow().active_section.section();
        let current = self.mounted.as_ref().map(Mounted::section);
        if wanted == current {
            return;
        }

        tracing::debug!("Mounting section {:?} (was {:?})", wanted, current);
        self.mounted = wanted.map(Mounted::mount);

        // Focus survives only on the nav buttons, which come first
        if self.focus.is_some_and(|idx| idx >= Section::ALL.len()) {
            self.focus = None;
        }
    }

    /// Current contact form values, if the contact section is mounted
    #[cfg(test)]
    pub fn contact_form(&self) -> Option<&ContactForm> {
        match &self.mounted {
            Some(Mounted::Contact(form)) => Some(form),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.acknowledgement.as_ref()
    }

    fn render_body(&self) -> Option<ViewNode> {
        let mounted = self.mounted.as_ref()?;
        Some(match mounted {
            Mounted::Hero => hero::render(),
            Mounted::About => about::render(SKILLS),
            Mounted::Projects => projects::render(PROJECTS),
            Mounted::Contact(form) => {
                let state = form.state();
                contact::render(&ContactProps {
                    form: &state,
                    cursors: form.cursors(),
                    error: form.error(),
                })
            }
        })
    }

    /// Navigation plus the mounted section, without overlays or focus marks
    fn render_page(&self) -> ViewNode {
        let state = self.state.borrow();
        let nav = navigation::render(&state.active_section, state.scrolled);
        ViewNode::new(NodeKind::App)
            .class("App")
            .child(nav)
            .children(self.render_body())
    }

    /// Compose the full view tree for the current state
    pub fn compose(&self) -> ViewNode {
        let mut tree = self.render_page();

        if let Some(idx) = self.focus {
            tree.mark_focus(idx);
        }

        if let Some(status) = &self.status {
            tree = tree.child(ViewNode::new(NodeKind::Status).class("status").text(status.clone()));
        }

        if let Some(ack) = &self.acknowledgement {
            tree = tree.child(
                ViewNode::new(NodeKind::Alert)
                    .class("alert")
                    .text(ack.message)
                    .child(
                        ViewNode::new(NodeKind::Paragraph)
                            .text(format!("Sent at {}", ack.sent_at.format("%H:%M:%S"))),
                    )
                    .child(ViewNode::new(NodeKind::Paragraph).class("hint").text("Press any key")),
            );
        }

        tree
    }

    fn actions(&self) -> Vec<Action> {
        self.render_page().actions()
    }

    fn focused_action(&self) -> Option<Action> {
        let idx = self.focus?;
        self.actions().get(idx).cloned()
    }

    fn focused_field(&self) -> Option<FormField> {
        match self.focused_action() {
            Some(Action::Focus(field)) => Some(field),
            _ => None,
        }
    }

    pub fn handle_event(&mut self, event: FrontendEvent) {
        match event {
            FrontendEvent::Key { code, modifiers } => {
                let ctx = InputContext {
                    alert_open: self.acknowledgement.is_some(),
                    focused_field: self.focused_field(),
                    has_focus: self.focus.is_some(),
                };
                let command = route_key(KeyEvent::new(code, modifiers), ctx);
                self.apply_command(command);
            }
            FrontendEvent::Mouse { kind, .. } => {
                if matches!(kind, MouseEventKind::Down(_)) {
                    if self.acknowledgement.is_some() {
                        self.acknowledgement = None;
                    } else {
                        // Clicking empty space blurs, like a page background
                        self.focus = None;
                    }
                }
            }
            FrontendEvent::Activate(action) => {
                if self.acknowledgement.take().is_some() {
                    return;
                }
                self.focus = self.actions().iter().position(|a| *a == action);
                self.dispatch(action);
            }
            FrontendEvent::Paste { text } => {
                if let Some(field) = self.focused_field() {
                    if let Some(Mounted::Contact(form)) = &mut self.mounted {
                        form.paste(field, &text);
                    }
                }
            }
            FrontendEvent::Resize { width, height } => {
                tracing::debug!("Resized to {}x{}", width, height);
            }
        }
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.running = false,
            Command::Dismiss => self.acknowledgement = None,
            Command::FocusNext => self.move_focus(true),
            Command::FocusPrev => self.move_focus(false),
            Command::Blur => self.focus = None,
            Command::Activate => {
                if let Some(action) = self.focused_action() {
                    self.dispatch(action);
                }
            }
            Command::Submit => self.dispatch(Action::Submit),
            Command::Select(section) => self.dispatch(Action::Select(section)),
            Command::Edit(field, key) => {
                if let Some(Mounted::Contact(form)) = &mut self.mounted {
                    form.handle_key(field, key);
                }
            }
            Command::Ignore => {}
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.actions().len();
        if count == 0 {
            self.focus = None;
            return;
        }
        self.focus = Some(match (self.focus, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(idx), true) => (idx + 1) % count,
            (Some(idx), false) => (idx + count - 1) % count,
        });
    }

    /// Apply an action emitted by an interactive node
    pub fn dispatch(&mut self, action: Action) {
        self.status = None;
        match action {
            Action::Select(section) => {
                tracing::debug!("Section selected: {}", section);
                self.select(section);
            }
            Action::OpenLink(url) => {
                self.status = Some(match crate::clipboard::copy(&url) {
                    Ok(()) => format!("Copied {} to clipboard", url),
                    Err(e) => {
                        tracing::warn!("Failed to copy link {}: {}", url, e);
                        format!("Link: {} (clipboard unavailable)", url)
                    }
                });
            }
            Action::Focus(field) => {
                self.focus = self
                    .actions()
                    .iter()
                    .position(|a| *a == Action::Focus(field));
            }
            Action::Submit => self.submit_contact(),
        }
    }

    fn submit_contact(&mut self) {
        let Some(Mounted::Contact(form)) = &mut self.mounted else {
            return;
        };

        match form.submit() {
            SubmitOutcome::Sent(ack) => {
                self.acknowledgement = Some(ack);
                self.focus = None;
            }
            SubmitOutcome::Blocked(error) => {
                let target = Action::Focus(error.field);
                self.focus = self.actions().iter().position(|a| *a == target);
            }
        }
    }
}

/// Mount the portfolio into `frontend` and run until quit
///
/// The composer (and with it the scroll subscription) lives exactly as long
/// as this call.
pub fn start(frontend: &mut dyn Frontend, config: &UiConfig) -> Result<()> {
    let mut app = AppCore::new(config, frontend.scroll_signal());
    let (width, height) = frontend.size();
    tracing::info!("Portfolio mounted ({}x{})", width, height);

    while app.running {
        let tree = app.compose();
        frontend.commit(&tree)?;

        for event in frontend.poll_events()? {
            app.handle_event(event);
            if !app.running {
                break;
            }
        }
    }

    drop(app);
    tracing::info!("Portfolio unmounted");
    frontend.cleanup()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scroll::ScrollSignal;
    use crate::data::{ActiveSection, FormState};
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton};

    fn new_core(signal: &ScrollSignal) -> AppCore {
        AppCore::new(&UiConfig::default(), signal)
    }

    fn key(code: KeyCode) -> FrontendEvent {
        FrontendEvent::key(code, KeyModifiers::NONE)
    }

    fn type_text(core: &mut AppCore, text: &str) {
        for ch in text.chars() {
            core.handle_event(key(KeyCode::Char(ch)));
        }
    }

    fn navs(tree: &ViewNode) -> usize {
        tree.find_all(|n| matches!(n.kind, NodeKind::Nav)).len()
    }

    #[test]
    fn test_initial_state() {
        let signal = ScrollSignal::new();
        let core = new_core(&signal);
        let state = core.ui_state();
        assert_eq!(state.active_section, ActiveSection::Known(Section::Home));
        assert!(!state.scrolled);
        assert_eq!(core.compose().mounted_sections(), vec![Section::Home]);
    }

    #[test]
    fn test_each_section_mounts_exactly_one_body() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        for section in Section::ALL {
            core.set_active_section(section.id());
            let tree = core.compose();
            assert_eq!(tree.mounted_sections(), vec![section]);
            assert_eq!(navs(&tree), 1);
        }
    }

    #[test]
    fn test_unknown_section_renders_no_body() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.set_active_section("blog");
        let tree = core.compose();
        assert!(tree.mounted_sections().is_empty());
        assert_eq!(navs(&tree), 1);
        assert!(core.contact_form().is_none());
    }

    #[test]
    fn test_scroll_threshold() {
        let signal = ScrollSignal::new();
        let core = new_core(&signal);

        signal.emit(50);
        assert!(!core.ui_state().scrolled);
        signal.emit(51);
        assert!(core.ui_state().scrolled);
        assert!(core.compose().children[0].has_class("scrolled"));
        signal.emit(0);
        assert!(!core.ui_state().scrolled);
    }

    #[test]
    fn test_drop_releases_scroll_listener() {
        let signal = ScrollSignal::new();
        let core = new_core(&signal);
        assert_eq!(signal.listener_count(), 1);
        drop(core);
        assert_eq!(signal.listener_count(), 0);
        signal.emit(100);
    }

    #[test]
    fn test_hero_cta_goes_to_projects() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        let cta = core
            .compose()
            .find_all(|n| n.has_class("cta-button"))[0]
            .action()
            .unwrap();
        core.handle_event(FrontendEvent::Activate(cta));
        assert_eq!(core.ui_state().active_section, ActiveSection::Known(Section::Projects));
        // CTA unmounted, so focus is dropped
        assert!(core.compose().find_all(|n| n.focused).is_empty());
    }

    #[test]
    fn test_tab_then_enter_activates_nav() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.handle_event(key(KeyCode::Tab));
        core.handle_event(key(KeyCode::Tab));
        core.handle_event(key(KeyCode::Enter));
        assert_eq!(core.ui_state().active_section, ActiveSection::Known(Section::About));

        let tree = core.compose();
        let focused = tree.find_all(|n| n.focused);
        assert_eq!(focused[0].text.as_deref(), Some("About"));
        assert!(focused[0].has_class("active"));
    }

    #[test]
    fn test_contact_submit_resets_form() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.handle_event(key(KeyCode::Char('4')));
        core.handle_event(FrontendEvent::Activate(Action::Focus(FormField::Name)));
        type_text(&mut core, "Ada");
        core.handle_event(key(KeyCode::Tab));
        type_text(&mut core, "ada@example.com");
        core.handle_event(key(KeyCode::Tab));
        type_text(&mut core, "Hi! 1234 q");

        let form = core.contact_form().unwrap().state();
        assert_eq!(form.message, "Hi! 1234 q");
        assert!(core.running);

        core.handle_event(FrontendEvent::key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(core.contact_form().unwrap().state(), FormState::default());
        assert!(core.acknowledgement().is_some());

        let tree = core.compose();
        assert_eq!(tree.find_all(|n| matches!(n.kind, NodeKind::Alert)).len(), 1);

        // Any key closes the notice without side effects
        core.handle_event(key(KeyCode::Char('q')));
        assert!(core.acknowledgement().is_none());
        assert!(core.running);
    }

    #[test]
    fn test_blocked_submit_focuses_field() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.select(Section::Contact);
        core.handle_event(FrontendEvent::Activate(Action::Submit));

        assert!(core.acknowledgement().is_none());
        let tree = core.compose();
        let focused = tree.find_all(|n| n.focused);
        assert!(matches!(
            focused[0].kind,
            NodeKind::Field {
                field: FormField::Name,
                ..
            }
        ));
        assert_eq!(
            tree.find_all(|n| matches!(n.kind, NodeKind::FieldError { .. })).len(),
            1
        );
    }

    #[test]
    fn test_leaving_contact_discards_input() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.select(Section::Contact);
        core.handle_event(FrontendEvent::Activate(Action::Focus(FormField::Name)));
        type_text(&mut core, "Ada");
        assert_eq!(core.contact_form().unwrap().state().name, "Ada");

        core.select(Section::About);
        core.select(Section::Contact);
        assert_eq!(core.contact_form().unwrap().state(), FormState::default());
    }

    #[test]
    fn test_reselecting_same_section_keeps_form() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.select(Section::Contact);
        core.handle_event(FrontendEvent::Activate(Action::Focus(FormField::Email)));
        type_text(&mut core, "a@b");
        core.handle_event(FrontendEvent::Activate(Action::Select(Section::Contact)));
        assert_eq!(core.contact_form().unwrap().state().email, "a@b");
    }

    #[test]
    fn test_click_dismisses_alert_before_acting() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.select(Section::Contact);
        core.handle_event(FrontendEvent::Activate(Action::Focus(FormField::Name)));
        type_text(&mut core, "Ada");
        core.handle_event(key(KeyCode::Tab));
        type_text(&mut core, "ada@example.com");
        core.handle_event(key(KeyCode::Tab));
        type_text(&mut core, "Hello");
        core.handle_event(FrontendEvent::Activate(Action::Submit));
        assert!(core.acknowledgement().is_some());

        core.handle_event(FrontendEvent::Activate(Action::Select(Section::Home)));
        assert!(core.acknowledgement().is_none());
        assert!(core.ui_state().active_section.is(Section::Contact));

        core.handle_event(FrontendEvent::mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(core.ui_state().active_section.is(Section::Contact));
    }

    /// Frontend that replays canned event batches and records commits
    struct ScriptedFrontend {
        scroll: ScrollSignal,
        batches: Vec<Vec<FrontendEvent>>,
        commits: Vec<ViewNode>,
        cleaned_up: bool,
    }

    impl Frontend for ScriptedFrontend {
        fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
            if self.batches.is_empty() {
                return Ok(vec![FrontendEvent::key(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
            }
            Ok(self.batches.remove(0))
        }

        fn commit(&mut self, tree: &ViewNode) -> Result<()> {
            self.commits.push(tree.clone());
            Ok(())
        }

        fn scroll_signal(&self) -> &ScrollSignal {
            &self.scroll
        }

        fn cleanup(&mut self) -> Result<()> {
            self.cleaned_up = true;
            Ok(())
        }

        fn size(&self) -> (u16, u16) {
            (80, 24)
        }
    }

    #[test]
    fn test_start_runs_until_quit() {
        let mut frontend = ScriptedFrontend {
            scroll: ScrollSignal::new(),
            batches: vec![
                vec![key(KeyCode::Char('3'))],
                vec![FrontendEvent::Activate(Action::Select(Section::About))],
                vec![key(KeyCode::Char('q')), key(KeyCode::Char('1'))],
            ],
            commits: Vec::new(),
            cleaned_up: false,
        };

        start(&mut frontend, &UiConfig::default()).unwrap();

        let mounted: Vec<Vec<Section>> =
            frontend.commits.iter().map(ViewNode::mounted_sections).collect();
        assert_eq!(
            mounted,
            vec![vec![Section::Home], vec![Section::Projects], vec![Section::About]]
        );
        assert!(frontend.cleaned_up);
        assert_eq!(frontend.scroll.listener_count(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.handle_event(key(KeyCode::Char('q')));
        assert!(!core.running);

        let mut core = new_core(&signal);
        core.handle_event(FrontendEvent::key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!core.running);
    }

    fn status_text(core: &AppCore) -> Option<String> {
        core.compose()
            .find_all(|n| matches!(n.kind, NodeKind::Status))
            .first()
            .and_then(|n| n.text.clone())
    }

    #[test]
    fn test_open_link_reports_on_status_line() {
        let signal = ScrollSignal::new();
        let mut core = new_core(&signal);
        core.select(Section::Projects);
        assert_eq!(status_text(&core), None);

        // Clipboard may be unavailable in CI; either message names the link
        core.dispatch(Action::OpenLink("#".to_string()));
        let status = status_text(&core).expect("status line after opening a link");
        assert!(status.contains('#'));
        assert!(core.running);
        assert!(core.ui_state().active_section.is(Section::Projects));

        core.dispatch(Action::Select(Section::About));
        assert_eq!(status_text(&core), None);
    }
}
