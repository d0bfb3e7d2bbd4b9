//! Unit tests for bt-dialogue.

use std::collections::HashMap;
use std::sync::Arc;

use bt_core::AgentRng;

use crate::{DialogueCatalog, DialogueError, Intent, IntentClassifier, KeywordRule, ResponseSelector};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A catalog with only a greeting list and the fallback.
fn small_catalog() -> DialogueCatalog {
    let mut entries = HashMap::new();
    entries.insert(Intent::Greeting, lines(&["hi", "hello"]));
    entries.insert(Intent::Unknown, lines(&["pardon?"]));
    DialogueCatalog::new(entries).unwrap()
}

// ── Intent ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
    }

    #[test]
    fn bad_label_is_parse_error() {
        assert!(matches!("mortgage".parse::<Intent>(), Err(DialogueError::Parse(_))));
    }
}

// ── IntentClassifier ──────────────────────────────────────────────────────────

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn single_keyword_per_intent() {
        let c = IntentClassifier::banking();
        assert_eq!(c.classify("통장 하나 부탁드려요"), Intent::AccountOpening);
        assert_eq!(c.classify("저금 하려고요"), Intent::Deposit);
        assert_eq!(c.classify("현금 인출이요"), Intent::Withdrawal);
        assert_eq!(c.classify("융자 상담"), Intent::Loan);
        assert_eq!(c.classify("송금할게요"), Intent::Transfer);
        assert_eq!(c.classify("잔액이요"), Intent::Inquiry);
        assert_eq!(c.classify("고마워요"), Intent::Thanks);
        assert_eq!(c.classify("안녕하세요"), Intent::Greeting);
    }

    #[test]
    fn account_opening_phrase() {
        let c = IntentClassifier::banking();
        assert_eq!(c.classify("계좌 개설하고 싶어요"), Intent::AccountOpening);
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        let c = IntentClassifier::banking();
        // deposit (입금) is checked before loan (대출)
        assert_eq!(c.classify("대출금 입금하려고요"), Intent::Deposit);
        // "계좌 이동" is a transfer keyword but "계좌" already matches account_opening
        assert_eq!(c.classify("계좌 이동 부탁해요"), Intent::AccountOpening);
        // thanks before greeting
        assert_eq!(c.classify("안녕하세요 감사합니다"), Intent::Thanks);
    }

    #[test]
    fn substring_match_ignores_word_boundaries() {
        let c = IntentClassifier::banking();
        assert_eq!(c.classify("돈을넣어주세요"), Intent::Deposit);
    }

    #[test]
    fn unmatched_is_unknown() {
        let c = IntentClassifier::banking();
        assert_eq!(c.classify("날씨가 좋네요"), Intent::Unknown);
        assert_eq!(c.classify(""), Intent::Unknown);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = IntentClassifier::new(vec![KeywordRule::new(Intent::Thanks, ["Thank"])]).unwrap();
        assert_eq!(c.classify("THANK YOU"), Intent::Thanks);
    }

    #[test]
    fn reports_matched_keyword() {
        let c = IntentClassifier::banking();
        assert_eq!(c.classify_with_keyword("이자 얼마예요"), (Intent::Loan, Some("이자")));
        assert_eq!(c.classify_with_keyword("음"), (Intent::Unknown, None));
    }

    #[test]
    fn banking_priority_order() {
        let order: Vec<Intent> = IntentClassifier::banking().rules().iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::AccountOpening,
                Intent::Deposit,
                Intent::Withdrawal,
                Intent::Loan,
                Intent::Transfer,
                Intent::Inquiry,
                Intent::Thanks,
                Intent::Greeting,
            ]
        );
    }

    #[test]
    fn empty_keyword_rejected() {
        let err = IntentClassifier::new(vec![KeywordRule::new(Intent::Loan, [""])]);
        assert!(matches!(err, Err(DialogueError::InvalidRule(Intent::Loan, _))));
    }

    #[test]
    fn unknown_rule_rejected() {
        let err = IntentClassifier::new(vec![KeywordRule::new(Intent::Unknown, ["x"])]);
        assert!(err.is_err());
    }

    #[test]
    fn duplicate_intent_rejected() {
        let err = IntentClassifier::new(vec![
            KeywordRule::new(Intent::Loan, ["a"]),
            KeywordRule::new(Intent::Loan, ["b"]),
        ]);
        assert!(err.is_err());
    }
}

// ── DialogueCatalog ───────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn banking_covers_every_intent() {
        let catalog = DialogueCatalog::banking();
        for intent in Intent::ALL {
            assert!(catalog.contains(intent), "{intent} missing");
            assert_eq!(catalog.responses(intent).len(), 3);
        }
    }

    #[test]
    fn missing_intent_falls_back_to_unknown() {
        let catalog = small_catalog();
        assert!(!catalog.contains(Intent::Loan));
        assert_eq!(catalog.responses(Intent::Loan), &["pardon?".to_string()]);
    }

    #[test]
    fn empty_list_rejected() {
        let mut entries = HashMap::new();
        entries.insert(Intent::Unknown, lines(&["?"]));
        entries.insert(Intent::Loan, vec![]);
        assert!(matches!(
            DialogueCatalog::new(entries),
            Err(DialogueError::EmptyResponses(Intent::Loan))
        ));
    }

    #[test]
    fn blank_response_rejected() {
        let mut entries = HashMap::new();
        entries.insert(Intent::Unknown, lines(&["?", "   "]));
        assert!(matches!(
            DialogueCatalog::new(entries),
            Err(DialogueError::BlankResponse(Intent::Unknown))
        ));
    }

    #[test]
    fn missing_fallback_rejected() {
        let mut entries = HashMap::new();
        entries.insert(Intent::Greeting, lines(&["hi"]));
        assert!(matches!(DialogueCatalog::new(entries), Err(DialogueError::MissingFallback)));
    }
}

// ── ResponseSelector ──────────────────────────────────────────────────────────

#[cfg(test)]
mod selector_tests {
    use super::*;

    #[test]
    fn picks_come_from_resolved_list() {
        let selector = ResponseSelector::new(Arc::new(DialogueCatalog::banking()));
        let mut rng = AgentRng::new(11);
        for intent in Intent::ALL {
            for _ in 0..20 {
                let pick = selector.select(intent, &mut rng);
                assert!(!pick.is_empty());
                assert!(selector.catalog().responses(intent).iter().any(|r| r == pick));
            }
        }
    }

    #[test]
    fn absent_intent_resolves_to_unknown() {
        let selector = ResponseSelector::new(Arc::new(small_catalog()));
        let mut rng = AgentRng::new(0);
        assert_eq!(selector.resolve(Intent::Deposit), Intent::Unknown);
        assert_eq!(selector.resolve(Intent::Greeting), Intent::Greeting);
        assert_eq!(selector.select(Intent::Deposit, &mut rng), "pardon?");
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let selector = ResponseSelector::new(Arc::new(DialogueCatalog::banking()));
        let mut a = AgentRng::new(99);
        let mut b = AgentRng::new(99);
        let run_a: Vec<&str> = (0..10).map(|_| selector.select(Intent::Loan, &mut a)).collect();
        let run_b: Vec<&str> = (0..10).map(|_| selector.select(Intent::Loan, &mut b)).collect();
        assert_eq!(run_a, run_b);
    }

    #[test]
    fn sampling_reaches_every_entry() {
        let selector = ResponseSelector::new(Arc::new(DialogueCatalog::banking()));
        let mut rng = AgentRng::new(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(selector.select(Intent::Greeting, &mut rng));
        }
        assert_eq!(seen.len(), 3);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{load_catalog_reader, load_rules_reader};

    const CATALOG_CSV: &str = "\
intent,response\n\
greeting,어서 오세요\n\
greeting,\"안녕하세요, 반갑습니다\"\n\
unknown,다시 말씀해주세요\n\
";

    const RULES_CSV: &str = "\
intent,keyword\n\
loan,대출\n\
deposit,입금\n\
loan,이자\n\
";

    #[test]
    fn catalog_keeps_row_order() {
        let catalog = load_catalog_reader(Cursor::new(CATALOG_CSV)).unwrap();
        assert_eq!(
            catalog.responses(Intent::Greeting),
            &["어서 오세요".to_string(), "안녕하세요, 반갑습니다".to_string()]
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn catalog_without_fallback_fails() {
        let csv = "intent,response\ngreeting,hi\n";
        assert!(matches!(
            load_catalog_reader(Cursor::new(csv)),
            Err(DialogueError::MissingFallback)
        ));
    }

    #[test]
    fn catalog_bad_intent_fails() {
        let csv = "intent,response\nsmalltalk,hi\nunknown,?\n";
        assert!(matches!(load_catalog_reader(Cursor::new(csv)), Err(DialogueError::Parse(_))));
    }

    #[test]
    fn rules_priority_is_first_appearance() {
        let c = load_rules_reader(Cursor::new(RULES_CSV)).unwrap();
        let order: Vec<Intent> = c.rules().iter().map(|r| r.intent).collect();
        assert_eq!(order, vec![Intent::Loan, Intent::Deposit]);
        assert_eq!(c.rules()[0].keywords, vec!["대출".to_string(), "이자".to_string()]);
        // loan now outranks deposit
        assert_eq!(c.classify("대출금 입금"), Intent::Loan);
    }

    #[test]
    fn rules_missing_column_fails() {
        let csv = "intent\nloan\n";
        assert!(load_rules_reader(Cursor::new(csv)).is_err());
    }
}
