//! Keyword-based intent classification.
//!
//! # Matching model
//!
//! Rules are checked in priority order and the first one with any keyword
//! occurring as a substring of the lower-cased query wins.  There is no word
//! segmentation: `"넣"` matches inside `"넣어주세요"`.  Order is therefore part
//! of the contract: a query mentioning both a deposit and a loan keyword is
//! a deposit because the deposit rule is checked first.

use crate::{DialogueError, DialogueResult, Intent};

// ── KeywordRule ───────────────────────────────────────────────────────────────

/// One intent and the substrings that select it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordRule {
    pub intent:   Intent,
    /// Stored lower-cased so matching is case-insensitive.
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            intent,
            keywords: keywords.into_iter().map(|k| k.as_ref().to_lowercase()).collect(),
        }
    }

    /// The first keyword found in `lowered`, if any.
    fn find_in(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }
}

// ── IntentClassifier ──────────────────────────────────────────────────────────

/// Ordered, first-match-wins keyword classifier.
#[derive(Clone, Debug)]
pub struct IntentClassifier {
    rules: Vec<KeywordRule>,
}

impl IntentClassifier {
    /// Build a classifier from rules in priority order.
    ///
    /// Rejects rules with no keywords or an empty keyword (an empty substring
    /// would match every query), rules targeting `unknown`, and intents that
    /// appear in more than one rule.
    pub fn new(rules: Vec<KeywordRule>) -> DialogueResult<Self> {
        for (i, rule) in rules.iter().enumerate() {
            if rule.intent == Intent::Unknown {
                return Err(DialogueError::InvalidRule(
                    rule.intent,
                    "`unknown` is the fallback and cannot have keywords".into(),
                ));
            }
            if rule.keywords.is_empty() {
                return Err(DialogueError::InvalidRule(rule.intent, "no keywords".into()));
            }
            if rule.keywords.iter().any(String::is_empty) {
                return Err(DialogueError::InvalidRule(rule.intent, "empty keyword".into()));
            }
            if rules[..i].iter().any(|r| r.intent == rule.intent) {
                return Err(DialogueError::InvalidRule(
                    rule.intent,
                    "intent appears in more than one rule".into(),
                ));
            }
        }
        Ok(Self { rules })
    }

    /// The branch-office rule set.
    ///
    /// Priority: account_opening, deposit, withdrawal, loan, transfer,
    /// inquiry, thanks, greeting.  `farewell` has no keywords.
    pub fn banking() -> Self {
        Self {
            rules: vec![
                KeywordRule::new(Intent::AccountOpening, ["계좌", "통장", "개설", "만들"]),
                KeywordRule::new(Intent::Deposit,        ["입금", "넣", "저금"]),
                KeywordRule::new(Intent::Withdrawal,     ["출금", "찾", "인출"]),
                KeywordRule::new(Intent::Loan,           ["대출", "융자", "돈 빌리", "이자"]),
                KeywordRule::new(Intent::Transfer,       ["이체", "송금", "보내", "계좌 이동"]),
                KeywordRule::new(Intent::Inquiry,        ["잔액", "조회", "확인", "얼마"]),
                KeywordRule::new(Intent::Thanks,         ["감사", "고마", "땡큐"]),
                KeywordRule::new(Intent::Greeting,       ["안녕", "반가", "처음"]),
            ],
        }
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Classify `text`.  Total: anything unmatched is [`Intent::Unknown`].
    pub fn classify(&self, text: &str) -> Intent {
        self.classify_with_keyword(text).0
    }

    /// Like [`classify`][Self::classify] but also reports which keyword fired.
    pub fn classify_with_keyword(&self, text: &str) -> (Intent, Option<&str>) {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find_map(|rule| rule.find_in(&lowered).map(|k| (rule.intent, Some(k))))
            .unwrap_or((Intent::Unknown, None))
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::banking()
    }
}
