//! User domain model and the ban ledger.
//!
//! A [`User`] owns its [`BanHistory`]. The `banned` flag and the history
//! can only change together through [`User::ban`] and [`User::unban`], which
//! keeps `banned` equal to `is_ban` of the most recent event.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Timestamp layout used when rendering ban history.
pub const TIMESTAMP_FORMAT: &str = "%d %B %Y %H:%M:%S";

/// Authorization level of an account.
///
/// `Admin` satisfies every gate `User` satisfies. There is no other
/// ordering between roles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Whether a caller holding `self` may pass a gate requiring `required`.
    pub fn grants(self, required: Role) -> bool {
        match (self, required) {
            (Role::Admin, _) => true,
            (Role::User, Role::User) => true,
            (Role::User, Role::Admin) => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    /// An empty string is an unset role and parses as `User`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "user" | "UserRole" => Ok(Role::User),
            "admin" | "AdminRole" => Ok(Role::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// A single ban or unban transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanEvent {
    pub executed_by: String,
    pub is_ban: bool,
    /// Empty for unban events.
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl BanEvent {
    pub fn action(&self) -> &'static str {
        if self.is_ban { "banned" } else { "unbanned" }
    }
}

impl fmt::Display for BanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-- was {}", self.action())?;
        if self.is_ban {
            write!(f, " (reason: {})", self.reason)?;
        }
        write!(
            f,
            " at {} by {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.executed_by
        )
    }
}

/// Append-only ban ledger. Insertion order is chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BanHistory(Vec<BanEvent>);

impl BanHistory {
    pub fn iter(&self) -> std::slice::Iter<'_, BanEvent> {
        self.0.iter()
    }

    pub fn latest(&self) -> Option<&BanEvent> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn append(&mut self, event: BanEvent) {
        self.0.push(event);
    }
}

impl<'a> IntoIterator for &'a BanHistory {
    type Item = &'a BanEvent;
    type IntoIter = std::slice::Iter<'a, BanEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An account record as held by the user store.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub password_digest: String,
    pub favorite_cake: String,
    pub role: Role,
    banned: bool,
    ban_history: BanHistory,
}

impl User {
    /// A `User`-role account that has never been banned.
    pub fn new(
        email: impl Into<String>,
        password_digest: impl Into<String>,
        favorite_cake: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password_digest: password_digest.into(),
            favorite_cake: favorite_cake.into(),
            role: Role::User,
            banned: false,
            ban_history: BanHistory::default(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn is_banned(&self) -> bool {
        self.banned
    }

    pub fn ban_history(&self) -> &BanHistory {
        &self.ban_history
    }

    pub fn ban(&mut self, executed_by: &str, reason: &str, at: DateTime<Utc>) {
        self.ban_history.append(BanEvent {
            executed_by: executed_by.to_string(),
            is_ban: true,
            reason: reason.to_string(),
            timestamp: at,
        });
        self.banned = true;
    }

    pub fn unban(&mut self, executed_by: &str, at: DateTime<Utc>) {
        self.ban_history.append(BanEvent {
            executed_by: executed_by.to_string(),
            is_ban: false,
            reason: String::new(),
            timestamp: at,
        });
        self.banned = false;
    }

    /// Reason of the ban currently in force.
    ///
    /// `None` when the user is not banned, or when the ledger does not end
    /// in a ban event (which `ban`/`unban` never produce).
    pub fn ban_reason(&self) -> Option<&str> {
        if !self.banned {
            return None;
        }
        self.ban_history
            .latest()
            .filter(|event| event.is_ban)
            .map(|event| event.reason.as_str())
    }

    /// `banned` agrees with the most recent ledger entry.
    pub fn ban_state_consistent(&self) -> bool {
        self.banned == self.ban_history.latest().is_some_and(|event| event.is_ban)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("favorite_cake", &self.favorite_cake)
            .field("role", &self.role)
            .field("banned", &self.banned)
            .field("ban_history", &self.ban_history.len())
            .finish_non_exhaustive()
    }
}
