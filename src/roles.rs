//! Specialist role catalogue.
//!
//! The assistant always answers in one of five fixed specialist personas.
//! [`SpecialistRole`] is a closed enum so an invalid selection is rejected at
//! the boundary (deserialization / parsing) instead of flowing through as a
//! raw string. The Japanese labels are the text filled into the role
//! instruction verbatim - they are display strings, not wire values; wire
//! and config use the stable ASCII [`id`](SpecialistRole::id).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown specialist role: {0}")]
pub struct RoleParseError(pub String);

/// One of the five supported specialist personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistRole {
    /// ビジネス戦略、プロセス改善の専門家
    BusinessStrategy,
    /// キャンペーン設計、ターゲット分析の専門家
    Marketing,
    /// 財務分析、投資戦略の専門家
    Finance,
    /// スケジュール管理、リスク評価の専門家
    Scheduling,
    /// 採用戦略、組織開発の専門家
    Hr,
}

impl SpecialistRole {
    /// All roles, in presentation order.
    pub const ALL: [SpecialistRole; 5] = [
        SpecialistRole::BusinessStrategy,
        SpecialistRole::Marketing,
        SpecialistRole::Finance,
        SpecialistRole::Scheduling,
        SpecialistRole::Hr,
    ];

    /// Stable ASCII identifier used on the wire and in config.
    pub fn id(self) -> &'static str {
        match self {
            SpecialistRole::BusinessStrategy => "business_strategy",
            SpecialistRole::Marketing => "marketing",
            SpecialistRole::Finance => "finance",
            SpecialistRole::Scheduling => "scheduling",
            SpecialistRole::Hr => "hr",
        }
    }

    /// Human-facing persona label, filled into the role instruction verbatim.
    pub fn label(self) -> &'static str {
        match self {
            SpecialistRole::BusinessStrategy => "ビジネス戦略、プロセス改善の専門家",
            SpecialistRole::Marketing => "キャンペーン設計、ターゲット分析の専門家",
            SpecialistRole::Finance => "財務分析、投資戦略の専門家",
            SpecialistRole::Scheduling => "スケジュール管理、リスク評価の専門家",
            SpecialistRole::Hr => "採用戦略、組織開発の専門家",
        }
    }
}

impl fmt::Display for SpecialistRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SpecialistRole {
    type Err = RoleParseError;

    /// Accepts either the ASCII id or the full label, so both the web form
    /// and hand-typed console input resolve to the same variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.id() == s || r.label() == s)
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}
