//! Property-based tests for document intake.

use proptest::prelude::*;

use crate::core::analysis::{ClauseAnalyzer, DocumentOrigin, SampleAnalyzer};
use crate::core::intake::{IntakeSource, PASTED_FILE_NAME};

// ============================================================================
// Strategies
// ============================================================================

fn arb_dir() -> impl Strategy<Value = String> {
    "(/[a-z0-9_-]{1,8}){0,4}"
}

fn arb_file_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}\\.(pdf|doc|docx|txt|odt)"
}

fn arb_whitespace() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,24}"
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the document is named after the picked file, not its directory
    #[test]
    fn prop_picked_file_name_is_last_component(
        dir in arb_dir(),
        name in arb_file_name(),
    ) {
        let source = IntakeSource::picked(&format!("{dir}/{name}")).unwrap();
        prop_assert_eq!(source.file_name(), name);
        prop_assert_eq!(source.origin(), DocumentOrigin::Picked);
    }

    /// Property: terminal drop decorations do not leak into the file name
    #[test]
    fn prop_drop_decorations_are_stripped(
        dir in arb_dir(),
        name in arb_file_name(),
        quote in prop_oneof![Just(""), Just("'"), Just("\"")],
        scheme in prop_oneof![Just(""), Just("file://")],
        pad in "[ ]{0,3}",
    ) {
        let payload = format!("{pad}{quote}{scheme}{dir}/{name}{quote}{pad}");
        let source = IntakeSource::dropped(&payload).unwrap();
        prop_assert_eq!(source.file_name(), name);
    }

    /// Property: whitespace-only pastes are never submitted
    #[test]
    fn prop_whitespace_paste_is_rejected(text in arb_whitespace()) {
        prop_assert!(IntakeSource::pasted(&text).is_none());
        prop_assert!(IntakeSource::picked(&text).is_none());
    }

    /// Property: any pasted text with content becomes the fixed pasted document
    #[test]
    fn prop_pasted_text_gets_fixed_name(
        lead in arb_whitespace(),
        body in "[A-Za-z0-9.,;: ]{0,200}[A-Za-z0-9]",
    ) {
        let source = IntakeSource::pasted(&format!("{lead}{body}")).unwrap();
        prop_assert_eq!(source.file_name(), PASTED_FILE_NAME);
    }

    /// Property: analysis output ignores the input and mirrors the template
    #[test]
    fn prop_analysis_mirrors_template(name in arb_file_name()) {
        let analyzer = SampleAnalyzer::bundled().unwrap();
        let doc = analyzer.analyze(&IntakeSource::picked(&name).unwrap());

        prop_assert_eq!(&doc.file_name, &name);
        prop_assert_eq!(&doc.clauses, &analyzer.template().clauses);
    }

    /// Property: multi-line payloads are never mistaken for dropped files
    #[test]
    fn prop_multi_line_is_not_a_drop(
        first in "[a-z/.]{1,20}",
        second in "[a-z/.]{1,20}",
    ) {
        let payload = format!("{}\n{}", first, second);
        prop_assert!(IntakeSource::dropped(&payload).is_none());
    }
}
