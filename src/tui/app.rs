use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame, Terminal,
};

use super::events::{Action, AppEvent, Notification, NotificationLevel};
use super::layout::{self, centered_rect, AnalysisLayout};
use super::theme;
use super::views::chat::ChatPanelState;
use super::views::clauses::{ClauseListState, ClauseResult};
use super::views::documents::{DocumentMenuState, MenuResult};
use super::views::upload::{UploadResult, UploadState};
use crate::config::LayoutConfig;
use crate::core::intake::IntakeSource;
use crate::core::session::{MobileView, Page, Session};

/// Notifications kept on screen at once.
const MAX_NOTIFICATIONS: usize = 3;
/// Lifetime of a notification in ticks.
const NOTIFICATION_TTL: u32 = 100;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Documents, selection, chat log and page state.
    pub session: Session,
    /// Upload page fields.
    pub upload: UploadState,
    /// Clause list cursor.
    pub clauses: ClauseListState,
    /// Chat input and scroll.
    pub chat: ChatPanelState,
    /// Slide-over menu cursor.
    pub menu: DocumentMenuState,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    layout: LayoutConfig,
}

impl AppState {
    pub fn new(session: Session, layout: LayoutConfig) -> Self {
        Self {
            running: true,
            session,
            upload: UploadState::new(),
            clauses: ClauseListState::new(),
            chat: ChatPanelState::new(),
            menu: DocumentMenuState::new(),
            show_help: false,
            notifications: Vec::new(),
            notification_counter: 0,
            layout,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(crossterm_event)) => {
                        self.handle_event(AppEvent::Input(crossterm_event));
                    }
                    Some(Err(e)) => return Err(e),
                    None => self.running = false,
                },
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Slide-over menu
                if self.session.is_menu_open() {
                    let result = self
                        .menu
                        .handle_input(&crossterm_event, self.session.documents());
                    match result {
                        MenuResult::Consumed => {}
                        MenuResult::Close => self.handle_action(Action::CloseMenu),
                        MenuResult::Quit => self.handle_action(Action::Quit),
                        MenuResult::Help => self.handle_action(Action::ShowHelp),
                        MenuResult::Switch(index) => {
                            self.handle_action(Action::SwitchDocument(index))
                        }
                        MenuResult::UploadAnother => self.handle_action(Action::UploadAnother),
                    }
                    return;
                }

                // Priority 3: Page view
                if self.dispatch_view_input(&crossterm_event) {
                    return;
                }

                // Priority 4: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
        }
    }

    /// Dispatch input to the current page. Returns true if consumed.
    fn dispatch_view_input(&mut self, event: &Event) -> bool {
        match self.session.page() {
            Page::Upload => match self.upload.handle_input(event) {
                UploadResult::Ignored => false,
                UploadResult::Consumed => true,
                UploadResult::Submit(source) => {
                    self.intake(source);
                    true
                }
            },
            Page::Analysis => match self.session.mobile_view() {
                MobileView::Chat => self.chat.handle_input(event, &mut self.session),
                MobileView::Clauses => {
                    let result = match self.session.current_document() {
                        Some(doc) => self.clauses.handle_input(event, doc),
                        None => ClauseResult::Ignored,
                    };
                    match result {
                        ClauseResult::Ignored => false,
                        ClauseResult::Consumed => true,
                        ClauseResult::Activate(id) => {
                            self.session.select_clause(id);
                            true
                        }
                    }
                }
            },
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (_, KeyCode::F(1)) => Some(Action::ShowHelp),
            // The upload page types every printable key into its fields.
            _ if self.session.page() == Page::Upload => None,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Char('m') => Some(Action::OpenMenu),
                KeyCode::Char('1') | KeyCode::Char('h') => Some(Action::ShowClauses),
                KeyCode::Char('2') | KeyCode::Char('l') => Some(Action::ShowChat),
                KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleView),
                KeyCode::Char('i') => Some(Action::FocusChatInput),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowClauses => self.set_view(MobileView::Clauses),
            Action::ShowChat => self.set_view(MobileView::Chat),
            Action::ToggleView => self.set_view(self.session.mobile_view().toggle()),
            Action::FocusChatInput => {
                self.set_view(MobileView::Chat);
                if !self.chat.focus_input(&self.session) {
                    self.push_notification(
                        "Select a clause first".to_string(),
                        NotificationLevel::Info,
                    );
                }
            }
            Action::OpenMenu => {
                self.session.open_menu();
                self.menu.open_at(self.session.current_index());
                self.chat.leave_input();
            }
            Action::CloseMenu => self.session.close_menu(),
            Action::SwitchDocument(index) => {
                if self.session.switch_document(index) {
                    self.sync_clause_cursor();
                    if let Some(doc) = self.session.current_document() {
                        let message = format!("Viewing {}", doc.file_name);
                        self.push_notification(message, NotificationLevel::Info);
                    }
                }
            }
            Action::UploadAnother => {
                self.session.upload_another();
                self.upload.reset();
                self.chat.leave_input();
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    fn set_view(&mut self, view: MobileView) {
        if view != MobileView::Chat {
            self.chat.leave_input();
        }
        self.session.set_mobile_view(view);
    }

    fn intake(&mut self, source: IntakeSource) {
        let document = self.session.intake(source);
        let message = format!(
            "Analyzed {} ({} clauses)",
            document.file_name,
            document.clauses.len()
        );
        self.upload.reset();
        self.chat.leave_input();
        self.sync_clause_cursor();
        self.push_notification(message, NotificationLevel::Success);
    }

    /// Point the clause cursor at the selection of the current document.
    fn sync_clause_cursor(&mut self) {
        if let Some(doc) = self.session.current_document() {
            self.clauses
                .focus_clause(doc, self.session.selected_clause_id());
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }
        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL,
        });
        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let (content, status) = layout::split_status(area);

        match self.session.page() {
            Page::Upload => self.upload.render(frame, content),
            Page::Analysis => self.render_analysis(frame, content),
        }
        self.render_status_bar(frame, status);

        // Overlays
        if self.session.is_menu_open() {
            let menu = layout::menu_area(content, self.layout.menu_width);
            self.menu.render(
                frame,
                menu,
                self.session.documents(),
                self.session.current_index(),
            );
        }
        self.render_notifications(frame, area);
        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_analysis(&self, frame: &mut Frame, area: Rect) {
        let view = self.session.mobile_view();
        let (regions, _mode) = AnalysisLayout::compute(area, view, &self.layout);

        if let Some(tabs) = regions.tabs {
            let titles = MobileView::ALL.map(|v| format!(" {} ", v.label()));
            let selected = MobileView::ALL
                .iter()
                .position(|v| *v == view)
                .unwrap_or(0);
            frame.render_widget(
                Tabs::new(titles)
                    .select(selected)
                    .style(theme::muted())
                    .highlight_style(theme::highlight())
                    .divider("│"),
                tabs,
            );
        }
        if let Some(clauses) = regions.clauses {
            self.clauses.render(
                frame,
                clauses,
                self.session.current_document(),
                self.session.selected_clause_id(),
                view == MobileView::Clauses,
            );
        }
        if let Some(chat) = regions.chat {
            self.chat
                .render(frame, chat, &self.session, view == MobileView::Chat);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_indicator = if self.chat.is_inserting() && self.session.page() == Page::Analysis {
            Span::styled(" INSERT ", theme::insert_badge())
        } else {
            Span::raw("")
        };

        let mut spans = vec![
            Span::styled(" CLAUSE ASSISTANT ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.session.page().label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if let (Page::Analysis, Some(doc)) = (self.session.page(), self.session.current_document())
        {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(doc.file_name.clone(), theme::muted()));
        }
        spans.push(Span::raw(" │ "));

        let hints: &[(&str, &str)] = match self.session.page() {
            Page::Upload => &[
                ("Tab", ":field "),
                ("Enter", ":open "),
                ("Ctrl+S", ":analyze "),
                ("F1", ":help "),
                ("Ctrl+C", ":quit"),
            ],
            Page::Analysis => &[
                ("m", ":files "),
                ("1/2", ":view "),
                ("Enter", ":select "),
                ("i", ":ask "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };
        for (key, desc) in hints {
            spans.push(Span::styled(*key, theme::key_hint()));
            spans.push(Span::raw(*desc));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height.saturating_sub(1));
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, area.y + 1, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.clone()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            notification_area,
        );
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("Ctrl+C", "Quit"),
            ("F1", "Toggle this help"),
            ("", ""),
            ("Upload Page:", ""),
            ("Tab / Shift+Tab", "Switch between path and text fields"),
            ("Enter", "Open the typed file path"),
            ("Paste a path", "Treated as a dropped file"),
            ("Ctrl+S", "Analyze pasted text"),
            ("", ""),
            ("Analysis Page:", ""),
            ("q", "Quit"),
            ("?", "Toggle this help"),
            ("m", "Uploaded files menu"),
            ("1 / h", "Contract analysis panel"),
            ("2 / l", "AI assistant panel"),
            ("Tab", "Toggle panel"),
            ("j/k", "Move between clauses / scroll chat"),
            ("Enter", "Select clause"),
            ("i", "Ask about the selected clause"),
            ("Esc", "Leave the chat input"),
            ("", ""),
            ("Files Menu:", ""),
            ("j/k", "Navigate"),
            ("Enter", "Open file / upload another"),
            ("u", "Upload another file"),
            ("Esc / m", "Close menu"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];
        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::heading())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{key:<18}"),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help (Esc to close) ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_BASE));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Map help modal input to action.
fn map_help_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match (*modifiers, *code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Char('q')) => {
            Some(Action::CloseHelp)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::SampleAnalyzer;
    use crate::core::chat::{CannedReply, DEMO_REPLY};
    use crate::core::session::DocumentSwitchPolicy;
    use ratatui::backend::TestBackend;

    fn app() -> AppState {
        app_with_policy(DocumentSwitchPolicy::Keep)
    }

    fn app_with_policy(policy: DocumentSwitchPolicy) -> AppState {
        let session = Session::new(
            Box::new(SampleAnalyzer::bundled().unwrap()),
            Box::new(CannedReply),
        )
        .with_switch_policy(policy);
        AppState::new(session, LayoutConfig::default())
    }

    fn press_with(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_event(AppEvent::Input(Event::Key(KeyEvent::new(code, modifiers))));
    }

    fn press(app: &mut AppState, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn open_file(app: &mut AppState, path: &str) {
        type_str(app, path);
        press(app, KeyCode::Enter);
    }

    fn screen(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_typed_path_opens_analysis() {
        let mut app = app();
        open_file(&mut app, "/home/me/contract.pdf");

        assert_eq!(app.session.page(), Page::Analysis);
        assert_eq!(app.session.current_document().unwrap().file_name, "contract.pdf");
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications[0].message, "Analyzed contract.pdf (4 clauses)");
        assert_eq!(app.notifications[0].level, NotificationLevel::Success);
    }

    #[test]
    fn test_q_types_on_upload_page_but_quits_on_analysis() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);

        press(&mut app, KeyCode::Backspace);
        open_file(&mut app, "a.pdf");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app();
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_and_f1_reach_app_with_menu_open() {
        let mut app = app();
        open_file(&mut app, "contract.pdf");
        press(&mut app, KeyCode::Char('m'));
        assert!(app.session.is_menu_open());

        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.session.is_menu_open());

        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.running);
    }

    #[test]
    fn test_dropped_path_via_paste() {
        let mut app = app();
        app.handle_event(AppEvent::Input(Event::Paste(
            "file:///tmp/Offer%20Letter.docx".into(),
        )));
        assert_eq!(app.session.page(), Page::Analysis);
        assert_eq!(
            app.session.current_document().unwrap().file_name,
            "Offer Letter.docx"
        );
    }

    #[test]
    fn test_select_clause_and_chat() {
        let mut app = app();
        open_file(&mut app, "contract.pdf");

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selected_clause_id(), Some(2));
        assert_eq!(app.session.mobile_view(), MobileView::Chat);

        press(&mut app, KeyCode::Char('i'));
        assert!(app.chat.is_inserting());
        type_str(&mut app, "Can I negotiate this?");
        press(&mut app, KeyCode::Enter);

        let messages = app.session.chat().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].text, DEMO_REPLY);
        assert!(app.chat.input_text().is_empty());

        // 'q' inside the input is text, not quit.
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        press(&mut app, KeyCode::Esc);
        assert!(!app.chat.is_inserting());
    }

    #[test]
    fn test_i_without_selection_notifies() {
        let mut app = app();
        open_file(&mut app, "contract.pdf");
        press(&mut app, KeyCode::Char('i'));
        assert!(!app.chat.is_inserting());
        assert_eq!(app.session.mobile_view(), MobileView::Chat);
        assert!(app
            .notifications
            .iter()
            .any(|n| n.message == "Select a clause first"));
    }

    #[test]
    fn test_view_switch_keys() {
        let mut app = app();
        open_file(&mut app, "contract.pdf");
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.mobile_view(), MobileView::Chat);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.session.mobile_view(), MobileView::Clauses);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.mobile_view(), MobileView::Chat);
    }

    #[test]
    fn test_menu_switch_and_upload_another() {
        let mut app = app();
        open_file(&mut app, "first.pdf");
        press(&mut app, KeyCode::Char('m'));
        assert!(app.session.is_menu_open());

        // Upload entry is the row after the only document.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.page(), Page::Upload);
        assert!(!app.session.is_menu_open());

        open_file(&mut app, "second.pdf");
        assert_eq!(app.session.current_index(), Some(1));

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.menu.cursor(), 1);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.current_index(), Some(0));
        assert!(!app.session.is_menu_open());
    }

    #[test]
    fn test_menu_not_available_on_upload_page() {
        let mut app = app();
        app.handle_event(AppEvent::Action(Action::OpenMenu));
        assert!(!app.session.is_menu_open());
    }

    #[test]
    fn test_reset_policy_drops_chat_on_switch() {
        let mut app = app_with_policy(DocumentSwitchPolicy::Reset);
        open_file(&mut app, "first.pdf");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "hi");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.chat().len(), 2);

        app.handle_event(AppEvent::Action(Action::UploadAnother));
        open_file(&mut app, "second.pdf");
        assert!(app.session.chat().is_empty());
        assert!(app.session.selected_clause_id().is_none());
        assert_eq!(app.session.mobile_view(), MobileView::Clauses);
    }

    #[test]
    fn test_help_modal_captures_input() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);

        // Nothing reached the path field while help was open.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.page(), Page::Upload);
    }

    #[test]
    fn test_notifications_dedup_cap_and_expire() {
        let mut app = app();
        app.push_notification("one".into(), NotificationLevel::Info);
        app.push_notification("one".into(), NotificationLevel::Info);
        assert_eq!(app.notifications.len(), 1);

        for msg in ["two", "three", "four"] {
            app.push_notification(msg.into(), NotificationLevel::Info);
        }
        assert_eq!(app.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(app.notifications[0].message, "two");

        for _ in 0..NOTIFICATION_TTL {
            app.handle_event(AppEvent::Tick);
        }
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_render_upload_page() {
        let app = app();
        let text = screen(&app, 100, 30);
        assert!(text.contains("Legal AI Clause Assistant"));
        assert!(text.contains("CLAUSE ASSISTANT"));
    }

    #[test]
    fn test_render_wide_shows_both_panels() {
        let mut app = app();
        open_file(&mut app, "contract.pdf");
        let text = screen(&app, 140, 40);
        assert!(text.contains("Contract Analysis · contract.pdf"));
        assert!(text.contains("AI Legal Assistant"));
        assert!(text.contains("Clause 1 - Salary & Compensation"));
    }

    #[test]
    fn test_render_narrow_shows_tabs_and_one_panel() {
        let mut app = app();
        open_file(&mut app, "contract.pdf");
        let text = screen(&app, 80, 30);
        assert!(text.contains("Contract Analysis"));
        assert!(text.contains("AI Assistant"));
        assert!(!text.contains("AI Legal Assistant"));

        press(&mut app, KeyCode::Char('2'));
        let text = screen(&app, 80, 30);
        assert!(text.contains("AI Legal Assistant"));
        assert!(!text.contains("Clause 1 - Salary"));
    }

    #[test]
    fn test_render_menu_and_help_overlays() {
        let mut app = app();
        open_file(&mut app, "contract.pdf");
        press(&mut app, KeyCode::Char('m'));
        let text = screen(&app, 120, 30);
        assert!(text.contains("Uploaded Files"));
        assert!(text.contains("+ Upload Another File"));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('?'));
        let text = screen(&app, 120, 40);
        assert!(text.contains("Keybindings"));
    }
}
