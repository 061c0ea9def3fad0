//! Session state container.
//!
//! Holds the page, the submitted documents, the clause selection and the chat
//! log. Views read it through accessors and change it only through the
//! transition methods below.

use serde::{Deserialize, Serialize};

use crate::core::analysis::{Clause, ClauseAnalyzer, ClauseId, Document};
use crate::core::chat::{ChatLog, ChatMessage, ReplySource};
use crate::core::intake::IntakeSource;

/// Top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Upload,
    Analysis,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Upload => "Upload",
            Page::Analysis => "Analysis",
        }
    }
}

/// Which analysis panel is shown on narrow layouts (and focused on wide ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileView {
    #[default]
    Clauses,
    Chat,
}

impl MobileView {
    pub const ALL: [MobileView; 2] = [MobileView::Clauses, MobileView::Chat];

    pub fn label(self) -> &'static str {
        match self {
            MobileView::Clauses => "Contract Analysis",
            MobileView::Chat => "AI Assistant",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            MobileView::Clauses => MobileView::Chat,
            MobileView::Chat => MobileView::Clauses,
        }
    }
}

/// What happens to chat history and clause selection when the current
/// document changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSwitchPolicy {
    /// One running conversation across all documents.
    #[default]
    Keep,
    /// Clear chat, selection and the mobile view on every switch.
    Reset,
}

pub struct Session {
    analyzer: Box<dyn ClauseAnalyzer>,
    replies: Box<dyn ReplySource>,
    switch_policy: DocumentSwitchPolicy,

    page: Page,
    documents: Vec<Document>,
    current: Option<usize>,
    selected_clause: Option<ClauseId>,
    mobile_view: MobileView,
    menu_open: bool,
    chat: ChatLog,
}

impl Session {
    pub fn new(analyzer: Box<dyn ClauseAnalyzer>, replies: Box<dyn ReplySource>) -> Self {
        Self {
            analyzer,
            replies,
            switch_policy: DocumentSwitchPolicy::default(),
            page: Page::Upload,
            documents: Vec::new(),
            current: None,
            selected_clause: None,
            mobile_view: MobileView::Clauses,
            menu_open: false,
            chat: ChatLog::new(),
        }
    }

    pub fn with_switch_policy(mut self, policy: DocumentSwitchPolicy) -> Self {
        self.switch_policy = policy;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_document(&self) -> Option<&Document> {
        self.current.and_then(|i| self.documents.get(i))
    }

    pub fn selected_clause_id(&self) -> Option<ClauseId> {
        self.selected_clause
    }

    /// Selected clause, resolved against the current document.
    pub fn selected_clause(&self) -> Option<&Clause> {
        let id = self.selected_clause?;
        self.current_document()?.clause(id)
    }

    pub fn mobile_view(&self) -> MobileView {
        self.mobile_view
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    /// Chat input is inert until a clause is selected.
    pub fn can_chat(&self) -> bool {
        self.selected_clause().is_some()
    }

    pub fn switch_policy(&self) -> DocumentSwitchPolicy {
        self.switch_policy
    }

    // ── Intake ───────────────────────────────────────────────────────

    /// Analyse a submitted contract, make it current and show the analysis.
    pub fn intake(&mut self, source: IntakeSource) -> &Document {
        let document = self.analyzer.analyze(&source);
        log::info!(
            "Document intake: {} ({}, {} clauses)",
            document.file_name,
            document.origin.label(),
            document.clauses.len()
        );

        self.documents.push(document);
        let index = self.documents.len() - 1;
        self.make_current(index);
        self.page = Page::Analysis;

        &self.documents[index]
    }

    /// Picker submission. Returns false (and changes nothing) for an empty path.
    pub fn submit_picked(&mut self, raw_path: &str) -> bool {
        self.submit(IntakeSource::picked(raw_path))
    }

    /// Drop submission. Returns false for a payload that is not a single path.
    pub fn submit_dropped(&mut self, payload: &str) -> bool {
        self.submit(IntakeSource::dropped(payload))
    }

    /// Pasted-text submission. Returns false for whitespace-only text.
    pub fn submit_pasted(&mut self, text: &str) -> bool {
        self.submit(IntakeSource::pasted(text))
    }

    fn submit(&mut self, source: Option<IntakeSource>) -> bool {
        match source {
            Some(source) => {
                self.intake(source);
                true
            }
            None => false,
        }
    }

    // ── Clause browser ───────────────────────────────────────────────

    /// Select a clause of the current document and switch to the chat view.
    /// Unknown ids are ignored.
    pub fn select_clause(&mut self, id: ClauseId) -> bool {
        let known = self
            .current_document()
            .is_some_and(|doc| doc.clause(id).is_some());
        if !known {
            return false;
        }
        self.selected_clause = Some(id);
        self.mobile_view = MobileView::Chat;
        true
    }

    pub fn set_mobile_view(&mut self, view: MobileView) {
        self.mobile_view = view;
    }

    // ── Chat ─────────────────────────────────────────────────────────

    /// Send a chat message about the selected clause.
    ///
    /// Appends the user message and the assistant reply and returns true.
    /// Whitespace-only input or no selection appends nothing.
    pub fn send_chat(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        let Some(clause) = self.selected_clause() else {
            return false;
        };

        let answer = self.replies.reply(clause, input);
        self.chat
            .push_exchange(ChatMessage::user(input), ChatMessage::assistant(answer));
        true
    }

    // ── Slide-over menu ──────────────────────────────────────────────

    pub fn open_menu(&mut self) {
        if self.page == Page::Analysis {
            self.menu_open = true;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Make a previously submitted document current and close the menu.
    pub fn switch_document(&mut self, index: usize) -> bool {
        if index >= self.documents.len() {
            return false;
        }
        self.make_current(index);
        self.menu_open = false;
        true
    }

    /// "+ Upload Another File": back to the upload page.
    pub fn upload_another(&mut self) {
        self.page = Page::Upload;
        self.menu_open = false;
    }

    fn make_current(&mut self, index: usize) {
        let changed = self.current.is_some_and(|prev| prev != index);
        self.current = Some(index);

        if changed && self.switch_policy == DocumentSwitchPolicy::Reset {
            self.chat.clear();
            self.selected_clause = None;
            self.mobile_view = MobileView::Clauses;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::SampleAnalyzer;
    use crate::core::chat::{CannedReply, Role, DEMO_REPLY};
    use crate::core::intake::PASTED_FILE_NAME;

    fn session() -> Session {
        Session::new(
            Box::new(SampleAnalyzer::bundled().unwrap()),
            Box::new(CannedReply),
        )
    }

    #[test]
    fn test_new_session_starts_on_upload() {
        let s = session();
        assert_eq!(s.page(), Page::Upload);
        assert!(s.documents().is_empty());
        assert!(s.current_document().is_none());
        assert!(s.selected_clause().is_none());
        assert_eq!(s.mobile_view(), MobileView::Clauses);
        assert!(!s.is_menu_open());
        assert!(!s.can_chat());
    }

    #[test]
    fn test_picked_file_moves_to_analysis() {
        let mut s = session();
        assert!(s.submit_picked("contract.pdf"));

        assert_eq!(s.page(), Page::Analysis);
        let doc = s.current_document().unwrap();
        assert_eq!(doc.file_name, "contract.pdf");
        assert_eq!(doc.clauses.len(), 4);
        assert_eq!(s.documents().len(), 1);
        assert_eq!(s.current_index(), Some(0));
    }

    #[test]
    fn test_empty_picker_is_noop() {
        let mut s = session();
        assert!(!s.submit_picked("   "));
        assert_eq!(s.page(), Page::Upload);
        assert!(s.documents().is_empty());
    }

    #[test]
    fn test_pasted_text() {
        let mut s = session();
        assert!(!s.submit_pasted(" \n "));
        assert_eq!(s.page(), Page::Upload);

        assert!(s.submit_pasted("This agreement is made between..."));
        assert_eq!(s.page(), Page::Analysis);
        assert_eq!(s.current_document().unwrap().file_name, PASTED_FILE_NAME);
    }

    #[test]
    fn test_select_clause_switches_to_chat() {
        let mut s = session();
        s.submit_picked("contract.pdf");
        assert!(s.select_clause(2));
        assert_eq!(s.selected_clause_id(), Some(2));
        assert_eq!(s.selected_clause().unwrap().title, "Non-Compete Clause");
        assert_eq!(s.mobile_view(), MobileView::Chat);
        assert!(s.can_chat());
    }

    #[test]
    fn test_select_unknown_clause_ignored() {
        let mut s = session();
        assert!(!s.select_clause(1));

        s.submit_picked("contract.pdf");
        assert!(!s.select_clause(42));
        assert!(s.selected_clause().is_none());
        assert_eq!(s.mobile_view(), MobileView::Clauses);
    }

    #[test]
    fn test_chat_requires_selection() {
        let mut s = session();
        s.submit_picked("contract.pdf");
        assert!(!s.send_chat("hello"));
        assert!(s.chat().is_empty());
    }

    #[test]
    fn test_chat_appends_pair() {
        let mut s = session();
        s.submit_picked("contract.pdf");
        s.select_clause(1);

        assert!(!s.send_chat("   "));
        assert!(s.chat().is_empty());

        assert!(s.send_chat("Is this standard?"));
        let messages = s.chat().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text, "Is this standard?");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].text, DEMO_REPLY);
    }

    #[test]
    fn test_menu_only_opens_on_analysis() {
        let mut s = session();
        s.open_menu();
        assert!(!s.is_menu_open());

        s.submit_picked("a.pdf");
        s.open_menu();
        assert!(s.is_menu_open());
        s.close_menu();
        assert!(!s.is_menu_open());
    }

    #[test]
    fn test_upload_another_returns_to_upload() {
        let mut s = session();
        s.submit_picked("a.pdf");
        s.open_menu();
        s.upload_another();
        assert_eq!(s.page(), Page::Upload);
        assert!(!s.is_menu_open());
        // Documents survive the round trip.
        assert_eq!(s.documents().len(), 1);
    }

    #[test]
    fn test_switch_document_keep_policy_preserves_chat() {
        let mut s = session();
        s.submit_picked("a.pdf");
        s.select_clause(3);
        s.send_chat("question");
        s.upload_another();
        s.submit_picked("b.pdf");
        assert_eq!(s.current_document().unwrap().file_name, "b.pdf");

        s.open_menu();
        assert!(s.switch_document(0));
        assert!(!s.is_menu_open());
        assert_eq!(s.current_document().unwrap().file_name, "a.pdf");
        assert_eq!(s.chat().len(), 2);
        assert_eq!(s.selected_clause_id(), Some(3));
    }

    #[test]
    fn test_switch_document_reset_policy_clears_chat() {
        let mut s = session().with_switch_policy(DocumentSwitchPolicy::Reset);
        s.submit_picked("a.pdf");
        s.select_clause(3);
        s.send_chat("question");
        s.upload_another();
        s.submit_picked("b.pdf");

        assert!(s.chat().is_empty());
        assert!(s.selected_clause().is_none());
        assert_eq!(s.mobile_view(), MobileView::Clauses);
    }

    #[test]
    fn test_reset_policy_same_document_keeps_chat() {
        let mut s = session().with_switch_policy(DocumentSwitchPolicy::Reset);
        s.submit_picked("a.pdf");
        s.select_clause(1);
        s.send_chat("q");
        assert!(s.switch_document(0));
        assert_eq!(s.chat().len(), 2);
    }

    #[test]
    fn test_switch_document_out_of_range() {
        let mut s = session();
        s.submit_picked("a.pdf");
        s.open_menu();
        assert!(!s.switch_document(5));
        assert!(s.is_menu_open());
        assert_eq!(s.current_index(), Some(0));
    }

    #[test]
    fn test_mobile_view_toggle() {
        assert_eq!(MobileView::Clauses.toggle(), MobileView::Chat);
        assert_eq!(MobileView::Chat.toggle(), MobileView::Clauses);
    }

    #[test]
    fn test_reply_source_sees_selected_clause_and_question() {
        use crate::core::chat::MockReplySource;

        let mut replies = MockReplySource::new();
        replies
            .expect_reply()
            .withf(|clause, question| clause.id == 2 && question == "Is 24 months enforceable?")
            .times(1)
            .returning(|clause, _| format!("About {}", clause.title));

        let mut s = Session::new(Box::new(SampleAnalyzer::bundled().unwrap()), Box::new(replies));
        s.submit_picked("contract.pdf");
        s.select_clause(2);
        assert!(s.send_chat("Is 24 months enforceable?"));
        assert!(!s.send_chat("   "));

        assert_eq!(s.chat().messages()[1].text, "About Non-Compete Clause");
    }
}
