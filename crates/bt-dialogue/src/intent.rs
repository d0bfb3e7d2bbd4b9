//! The closed set of things a customer can ask for.

use std::str::FromStr;

use crate::DialogueError;

/// Classification label for one customer query.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Intent {
    Greeting,
    AccountOpening,
    Deposit,
    Withdrawal,
    Loan,
    Transfer,
    Inquiry,
    Farewell,
    Thanks,
    /// Fallback when nothing matched.
    Unknown,
}

impl Intent {
    /// Every label, in declaration order.
    pub const ALL: [Intent; 10] = [
        Intent::Greeting,
        Intent::AccountOpening,
        Intent::Deposit,
        Intent::Withdrawal,
        Intent::Loan,
        Intent::Transfer,
        Intent::Inquiry,
        Intent::Farewell,
        Intent::Thanks,
        Intent::Unknown,
    ];

    /// Label used on the wire and in CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting       => "greeting",
            Intent::AccountOpening => "account_opening",
            Intent::Deposit        => "deposit",
            Intent::Withdrawal     => "withdrawal",
            Intent::Loan           => "loan",
            Intent::Transfer       => "transfer",
            Intent::Inquiry        => "inquiry",
            Intent::Farewell       => "farewell",
            Intent::Thanks         => "thanks",
            Intent::Unknown        => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = DialogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Intent::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| DialogueError::Parse(format!("unknown intent label {s:?}")))
    }
}
