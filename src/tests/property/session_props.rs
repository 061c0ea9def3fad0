//! Property-based tests for the session state machine.

use proptest::prelude::*;

use crate::core::analysis::SampleAnalyzer;
use crate::core::chat::{CannedReply, Role, DEMO_REPLY};
use crate::core::session::{DocumentSwitchPolicy, MobileView, Page, Session};

// ============================================================================
// Strategies
// ============================================================================

/// One user interaction.
#[derive(Debug, Clone)]
enum Op {
    Pick(String),
    Drop(String),
    Paste(String),
    Select(u32),
    Chat(String),
    SetView(MobileView),
    OpenMenu,
    CloseMenu,
    Switch(usize),
    UploadAnother,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[ a-z]{0,10}(\\.pdf)?".prop_map(Op::Pick),
        "[ a-z/]{0,10}".prop_map(Op::Drop),
        "[ \na-z]{0,30}".prop_map(Op::Paste),
        (0u32..7).prop_map(Op::Select),
        "[ a-z?]{0,20}".prop_map(Op::Chat),
        prop_oneof![Just(MobileView::Clauses), Just(MobileView::Chat)].prop_map(Op::SetView),
        Just(Op::OpenMenu),
        Just(Op::CloseMenu),
        (0usize..5).prop_map(Op::Switch),
        Just(Op::UploadAnother),
    ]
}

fn arb_policy() -> impl Strategy<Value = DocumentSwitchPolicy> {
    prop_oneof![Just(DocumentSwitchPolicy::Keep), Just(DocumentSwitchPolicy::Reset)]
}

fn session(policy: DocumentSwitchPolicy) -> Session {
    Session::new(
        Box::new(SampleAnalyzer::bundled().unwrap()),
        Box::new(CannedReply),
    )
    .with_switch_policy(policy)
}

fn apply(s: &mut Session, op: &Op) {
    match op {
        Op::Pick(path) => {
            s.submit_picked(path);
        }
        Op::Drop(payload) => {
            s.submit_dropped(payload);
        }
        Op::Paste(text) => {
            s.submit_pasted(text);
        }
        Op::Select(id) => {
            s.select_clause(*id);
        }
        Op::Chat(text) => {
            s.send_chat(text);
        }
        Op::SetView(view) => s.set_mobile_view(*view),
        Op::OpenMenu => s.open_menu(),
        Op::CloseMenu => s.close_menu(),
        Op::Switch(index) => {
            s.switch_document(*index);
        }
        Op::UploadAnother => s.upload_another(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: structural invariants hold after every interaction
    #[test]
    fn prop_session_invariants(
        policy in arb_policy(),
        ops in prop::collection::vec(arb_op(), 0..60),
    ) {
        let mut s = session(policy);

        for op in &ops {
            apply(&mut s, op);

            // Chat grows in (user, assistant) pairs with the constant reply.
            let messages = s.chat().messages();
            prop_assert_eq!(messages.len() % 2, 0);
            for pair in messages.chunks(2) {
                prop_assert_eq!(pair[0].role, Role::User);
                prop_assert!(!pair[0].text.trim().is_empty());
                prop_assert_eq!(pair[1].role, Role::Assistant);
                prop_assert_eq!(pair[1].text.as_str(), DEMO_REPLY);
            }

            // The menu only exists on the analysis page.
            if s.is_menu_open() {
                prop_assert_eq!(s.page(), Page::Analysis);
            }

            // Analysis always has a current document.
            if s.page() == Page::Analysis {
                prop_assert!(s.current_document().is_some());
            }
            if let Some(index) = s.current_index() {
                prop_assert!(index < s.documents().len());
            }

            // A selection always resolves against the current document.
            if s.selected_clause_id().is_some() {
                prop_assert!(s.selected_clause().is_some());
            }
        }
    }

    /// Property: activating a known clause selects it and shows the chat
    #[test]
    fn prop_select_clause_shows_chat(
        ops in prop::collection::vec(arb_op(), 0..20),
        id in 1u32..=4,
    ) {
        let mut s = session(DocumentSwitchPolicy::Keep);
        for op in &ops {
            apply(&mut s, op);
        }
        s.submit_picked("contract.pdf");

        prop_assert!(s.select_clause(id));
        prop_assert_eq!(s.selected_clause_id(), Some(id));
        prop_assert_eq!(s.mobile_view(), MobileView::Chat);
    }

    /// Property: whitespace-only chat input never appends, selected or not
    #[test]
    fn prop_whitespace_chat_is_noop(
        text in "[ \t\n]{0,16}",
        select in any::<bool>(),
    ) {
        let mut s = session(DocumentSwitchPolicy::Keep);
        s.submit_picked("contract.pdf");
        if select {
            s.select_clause(1);
        }

        prop_assert!(!s.send_chat(&text));
        prop_assert!(s.chat().is_empty());
    }

    /// Property: every document carries the same four clauses in order
    #[test]
    fn prop_every_document_has_template_clauses(
        names in prop::collection::vec("[a-z]{1,8}\\.pdf", 1..6),
    ) {
        let mut s = session(DocumentSwitchPolicy::Keep);
        for name in &names {
            prop_assert!(s.submit_picked(name));
            s.upload_another();
        }

        prop_assert_eq!(s.documents().len(), names.len());
        for (doc, name) in s.documents().iter().zip(&names) {
            prop_assert_eq!(&doc.file_name, name);
            let ids: Vec<u32> = doc.clauses.iter().map(|c| c.id).collect();
            prop_assert_eq!(ids, vec![1, 2, 3, 4]);
        }
    }
}
