//! Common types used across the cafe stock tracker

use serde::{Deserialize, Serialize};

/// Account roles
///
/// There is no default variant: the role must be stated explicitly when an
/// account is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Staff => "staff",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(Role::Owner),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }

    pub fn is_owner(&self) -> bool {
        matches!(self, Role::Owner)
    }
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    In,
    Out,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::In => "in",
            ChangeType::Out => "out",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(ChangeType::In),
            "out" => Some(ChangeType::Out),
            _ => None,
        }
    }

    /// Quantity signed by direction: positive for in, negative for out.
    pub fn signed(&self, quantity: i64) -> i64 {
        match self {
            ChangeType::In => quantity,
            ChangeType::Out => -quantity,
        }
    }
}

/// Lifecycle of a purchase plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Open,
    Done,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Open => "open",
            PlanStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "open" => Some(PlanStatus::Open),
            "done" => Some(PlanStatus::Done),
            _ => None,
        }
    }
}

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "Pagination::default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl Pagination {
    fn default_limit() -> i64 {
        50
    }

    /// Clamp to sane bounds so a single request cannot pull the whole table.
    pub fn clamped(&self) -> Self {
        Self {
            limit: self.limit.clamp(1, 200),
            offset: self.offset.max(0),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        assert_eq!(Role::from_str("owner"), Some(Role::Owner));
        assert_eq!(Role::from_str("staff"), Some(Role::Staff));
        assert_eq!(Role::from_str(""), None);
        assert_eq!(Role::from_str("manager"), None);
        assert_eq!(Role::Owner.as_str(), "owner");
    }

    #[test]
    fn change_type_sign() {
        assert_eq!(ChangeType::In.signed(5), 5);
        assert_eq!(ChangeType::Out.signed(5), -5);
    }

    #[test]
    fn pagination_clamped() {
        let p = Pagination {
            limit: 10_000,
            offset: -3,
        }
        .clamped();
        assert_eq!(p.limit, 200);
        assert_eq!(p.offset, 0);
    }
}
