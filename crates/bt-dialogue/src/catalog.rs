//! The dialogue catalog: canned responses per intent.
//!
//! A catalog is validated once, when it is built.  After that every lookup
//! is guaranteed to yield a nonempty list of nonblank strings, which is what
//! lets [`ResponseSelector`][crate::ResponseSelector] be infallible.

use std::collections::HashMap;

use crate::{DialogueError, DialogueResult, Intent};

/// Immutable intent → responses mapping.
#[derive(Clone, Debug)]
pub struct DialogueCatalog {
    entries: HashMap<Intent, Vec<String>>,
}

impl DialogueCatalog {
    /// Validate and wrap `entries`.
    ///
    /// Every list must be nonempty with no blank strings, and an
    /// [`Intent::Unknown`] list must be present for the fallback path.
    pub fn new(entries: HashMap<Intent, Vec<String>>) -> DialogueResult<Self> {
        for (&intent, responses) in &entries {
            if responses.is_empty() {
                return Err(DialogueError::EmptyResponses(intent));
            }
            if responses.iter().any(|r| r.trim().is_empty()) {
                return Err(DialogueError::BlankResponse(intent));
            }
        }
        if !entries.contains_key(&Intent::Unknown) {
            return Err(DialogueError::MissingFallback);
        }
        Ok(Self { entries })
    }

    /// The branch-office catalog.  Covers every [`Intent`].
    pub fn banking() -> Self {
        let table: [(Intent, [&str; 3]); 10] = [
            (Intent::Greeting, [
                "안녕하세요, 무엇을 도와드릴까요?",
                "안녕하세요, 은행에 오신 것을 환영합니다. 어떤 업무를 도와드릴까요?",
                "안녕하세요, 오늘 어떤 은행 업무를 도와드릴까요?",
            ]),
            (Intent::AccountOpening, [
                "계좌 개설을 원하시는군요. 어떤 종류의 계좌를 개설하고 싶으신가요? 입출금 통장, 적금, 청약 등이 있습니다.",
                "계좌 개설을 도와드리겠습니다. 신분증 확인이 필요합니다. 준비되어 있으신가요?",
                "새 계좌 개설이요? 네, 도와드리겠습니다. 어떤 목적으로 계좌를 개설하시나요?",
            ]),
            (Intent::Deposit, [
                "입금 업무를 도와드리겠습니다. 입금하실 금액이 얼마인가요?",
                "입금이요? 네, 계좌번호와 입금하실 금액을 알려주세요.",
                "입금 처리를 도와드리겠습니다. 현금으로 입금하시나요, 아니면 수표로 입금하시나요?",
            ]),
            (Intent::Withdrawal, [
                "출금 업무를 도와드리겠습니다. 출금하실 금액이 얼마인가요?",
                "출금이요? 네, 계좌번호와 출금하실 금액을 알려주세요. 신분증도 필요합니다.",
                "출금 처리를 도와드리겠습니다. 얼마를 출금하시겠어요?",
            ]),
            (Intent::Loan, [
                "대출 상담을 원하시는군요. 어떤 종류의 대출에 관심이 있으신가요?",
                "대출 상담이요? 네, 주택대출, 개인대출, 사업자대출 등 다양한 상품이 있습니다.",
                "대출 상담을 도와드리겠습니다. 대출 용도와 희망 금액은 어떻게 되시나요?",
            ]),
            (Intent::Transfer, [
                "이체 업무를 도와드리겠습니다. 어떤 계좌로 이체하시겠어요?",
                "이체 처리를 도와드리겠습니다. 받으실 분의 계좌번호를 알려주세요.",
                "이체 서비스입니다. 이체하실 금액과 받으실 분의 정보를 알려주세요.",
            ]),
            (Intent::Inquiry, [
                "잔액 조회를 도와드리겠습니다. 어떤 계좌의 잔액을 확인하시겠어요?",
                "계좌 조회 서비스입니다. 조회하실 계좌번호를 알려주세요.",
                "잔액 확인이요? 네, 신분증과 계좌번호를 확인하겠습니다.",
            ]),
            (Intent::Farewell, [
                "다른 필요하신 업무가 있으신가요?",
                "더 도와드릴 일이 있으신가요?",
                "다른 문의사항이 있으시면 언제든지 말씀해주세요.",
            ]),
            (Intent::Thanks, [
                "감사합니다. 좋은 하루 되세요!",
                "이용해 주셔서 감사합니다. 다음에 또 뵙겠습니다.",
                "도움이 필요하시면 언제든지 찾아주세요. 감사합니다!",
            ]),
            (Intent::Unknown, [
                "죄송합니다. 다시 한번 말씀해주시겠어요?",
                "잘 이해하지 못했습니다. 다른 방식으로 설명해주실 수 있을까요?",
                "죄송합니다만, 다시 한번 설명해주시겠어요?",
            ]),
        ];

        let entries = table
            .into_iter()
            .map(|(intent, lines)| (intent, lines.iter().map(|s| s.to_string()).collect()))
            .collect();
        Self { entries }
    }

    /// `true` if `intent` has its own list (no fallback needed).
    pub fn contains(&self, intent: Intent) -> bool {
        self.entries.contains_key(&intent)
    }

    /// Responses for `intent`, or the `unknown` list when it has none.
    pub fn responses(&self, intent: Intent) -> &[String] {
        self.entries
            .get(&intent)
            .or_else(|| self.entries.get(&Intent::Unknown))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of intents with their own list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DialogueCatalog {
    fn default() -> Self {
        Self::banking()
    }
}
