//! Identity types for the four stored record kinds.
//!
//! Every identity is an SQLite rowid assigned on insert. Wrapping them keeps a
//! `PlayerId` from being passed where a `GameId` is expected.

use crate::error::{Result, StatsError};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = StatsError;

            fn from_str(s: &str) -> Result<Self> {
                s.trim()
                    .parse()
                    .map(Self)
                    .map_err(|_| StatsError::InvalidId {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

row_id!(
    /// Identity of a stored team.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bball_stats::TeamId;
    ///
    /// let id = TeamId::new(7);
    /// assert_eq!(id.as_i64(), 7);
    /// assert_eq!(id.to_string(), "7");
    /// ```
    TeamId
);

row_id!(
    /// Identity of a stored player.
    PlayerId
);

row_id!(
    /// Identity of a stored game (one per date).
    GameId
);

row_id!(
    /// Identity of one recorded stat line.
    StatId
);
