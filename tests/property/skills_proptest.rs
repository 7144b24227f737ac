//! Property tests for skills normalization

use campus_connect::shared::SkillsInput;
use proptest::prelude::*;

fn skill() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9+#.]{1,12}"
}

proptest! {
    #[test]
    fn csv_and_list_agree(skills in prop::collection::vec(skill(), 1..8)) {
        let csv = SkillsInput::Csv(skills.join(", "));
        let list = SkillsInput::List(skills.clone());
        prop_assert_eq!(csv.normalize(), skills.clone());
        prop_assert_eq!(list.normalize(), skills);
    }

    #[test]
    fn normalized_entries_are_trimmed_and_non_empty(raw in "[a-z ,]{0,40}") {
        let normalized = SkillsInput::Csv(raw).normalize();
        for entry in &normalized {
            prop_assert!(!entry.is_empty());
            prop_assert_eq!(entry.trim(), entry.as_str());
            prop_assert!(!entry.contains(','));
        }
    }

    #[test]
    fn normalize_is_idempotent(raw in "[a-z ,]{0,40}") {
        let once = SkillsInput::Csv(raw).normalize();
        let twice = SkillsInput::List(once.clone()).normalize();
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn csv_with_spaces_matches_list() {
    assert_eq!(
        SkillsInput::Csv("a, b, c".to_string()).normalize(),
        vec!["a", "b", "c"]
    );
    assert_eq!(
        SkillsInput::List(vec!["a".into(), "b".into(), "c".into()]).normalize(),
        vec!["a", "b", "c"]
    );
}
