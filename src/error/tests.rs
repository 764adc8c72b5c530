//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_database_error_conversion() {
        let stats_error = StatsError::from(rusqlite::Error::QueryReturnedNoRows);

        match stats_error {
            StatsError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_team_not_found_message_asks_to_add_team() {
        let error = StatsError::TeamNotFound {
            name: "Lakers".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Lakers"));
        assert!(error_string.contains("add the team first"));
    }

    #[test]
    fn test_player_not_found_message() {
        let error = StatsError::PlayerNotFound {
            name: "Nobody".to_string(),
        };
        assert_eq!(error.to_string(), "Player not found: Nobody");
    }

    #[test]
    fn test_invalid_stat_lists_valid_names() {
        let error = StatsError::InvalidStat {
            name: "fouls".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("fouls"));
        assert!(error_string.contains("Turnovers"));
    }

    #[test]
    fn test_data_dir_error_mentions_env_var() {
        let error = StatsError::DataDir {
            env_var: "BBALL_STATS_DB".to_string(),
        };
        assert!(error.to_string().contains("BBALL_STATS_DB"));
    }

    #[test]
    fn test_game_exists_formats_iso_date() {
        let error = StatsError::GameExists {
            date: chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };
        assert_eq!(error.to_string(), "A game already exists on 2024-03-09");
    }

    #[test]
    fn test_error_debug_format() {
        let error = StatsError::InvalidDate {
            value: "yesterday".to_string(),
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidDate"));
        assert!(debug_string.contains("yesterday"));
    }
}
