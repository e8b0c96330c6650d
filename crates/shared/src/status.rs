//! MyAnimeList status vocabulary.
//!
//! Two closed sets: the lifecycle of the work itself (series status) and a
//! user's personal state for a list entry (user status). Both carry the
//! numeric codes the MAL list API reports.

use serde::{Deserialize, Serialize};

/// Lifecycle of an anime or manga
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SeriesStatus {
    Started,
    Finished,
    Planned,
}

impl SeriesStatus {
    /// All series statuses, in code order
    pub const ALL: [SeriesStatus; 3] = [
        SeriesStatus::Started,
        SeriesStatus::Finished,
        SeriesStatus::Planned,
    ];

    /// MAL numeric code
    pub fn code(&self) -> u8 {
        match self {
            SeriesStatus::Started => 1,
            SeriesStatus::Finished => 2,
            SeriesStatus::Planned => 3,
        }
    }

    /// Look up a status by its MAL numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(SeriesStatus::Started),
            2 => Some(SeriesStatus::Finished),
            3 => Some(SeriesStatus::Planned),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeriesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesStatus::Started => write!(f, "started"),
            SeriesStatus::Finished => write!(f, "finished"),
            SeriesStatus::Planned => write!(f, "planned"),
        }
    }
}

impl std::str::FromStr for SeriesStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "started" => Ok(SeriesStatus::Started),
            "finished" => Ok(SeriesStatus::Finished),
            "planned" => Ok(SeriesStatus::Planned),
            _ => Err(anyhow::anyhow!("Invalid series status: {}", s)),
        }
    }
}

/// A user's state for a list entry
///
/// Code 5 is unassigned in the MAL list API; plan-to-watch/plan-to-read is 6.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Watching,
    Completed,
    OnHold,
    Dropped,
    PlanToConsume,
}

impl UserStatus {
    /// All user statuses, in code order
    pub const ALL: [UserStatus; 5] = [
        UserStatus::Watching,
        UserStatus::Completed,
        UserStatus::OnHold,
        UserStatus::Dropped,
        UserStatus::PlanToConsume,
    ];

    /// MAL numeric code
    pub fn code(&self) -> u8 {
        match self {
            UserStatus::Watching => 1,
            UserStatus::Completed => 2,
            UserStatus::OnHold => 3,
            UserStatus::Dropped => 4,
            UserStatus::PlanToConsume => 6,
        }
    }

    /// Look up a status by its MAL numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(UserStatus::Watching),
            2 => Some(UserStatus::Completed),
            3 => Some(UserStatus::OnHold),
            4 => Some(UserStatus::Dropped),
            6 => Some(UserStatus::PlanToConsume),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Watching => write!(f, "watching"),
            UserStatus::Completed => write!(f, "completed"),
            UserStatus::OnHold => write!(f, "on_hold"),
            UserStatus::Dropped => write!(f, "dropped"),
            UserStatus::PlanToConsume => write!(f, "plan_to_consume"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "watching" | "reading" => Ok(UserStatus::Watching),
            "completed" => Ok(UserStatus::Completed),
            "on_hold" | "onhold" => Ok(UserStatus::OnHold),
            "dropped" => Ok(UserStatus::Dropped),
            "plan_to_consume" | "plan_to_watch" | "plan_to_read" => {
                Ok(UserStatus::PlanToConsume)
            }
            _ => Err(anyhow::anyhow!("Invalid user status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_codes_round_trip() {
        for status in SeriesStatus::ALL {
            assert_eq!(SeriesStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(SeriesStatus::from_code(0), None);
        assert_eq!(SeriesStatus::from_code(4), None);
    }

    #[test]
    fn test_user_code_five_is_unassigned() {
        assert_eq!(UserStatus::from_code(5), None);
        assert_eq!(UserStatus::from_code(6), Some(UserStatus::PlanToConsume));
        for status in UserStatus::ALL {
            assert_eq!(UserStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_display_and_parse() {
        for status in UserStatus::ALL {
            let parsed: UserStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert_eq!("plan_to_read".parse::<UserStatus>().unwrap(), UserStatus::PlanToConsume);
        assert!("rewatching".parse::<UserStatus>().is_err());
        assert!("airing".parse::<SeriesStatus>().is_err());
    }
}
