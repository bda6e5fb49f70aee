use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::GameStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "X")]
    pub x_wins: u32,
    #[serde(rename = "O")]
    pub o_wins: u32,
    pub draws: u32,
}

impl Score {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins = self.x_wins.saturating_add(1),
            GameStatus::OWon => self.o_wins = self.o_wins.saturating_add(1),
            GameStatus::Draw => self.draws = self.draws.saturating_add(1),
            GameStatus::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }
}

impl Validate for Score {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_record_increments_matching_counter() {
        let mut score = Score::default();
        score.record(GameStatus::XWon);
        score.record(GameStatus::XWon);
        score.record(GameStatus::OWon);
        score.record(GameStatus::Draw);
        score.record(GameStatus::InProgress);
        assert_eq!(score, Score { x_wins: 2, o_wins: 1, draws: 1 });
        assert_eq!(score.games_played(), 4);
    }

    #[test]
    fn test_score_uses_mark_keys() {
        let score = Score { x_wins: 3, o_wins: 1, draws: 2 };
        let serializer = YamlConfigSerializer::new();
        let content = serializer.serialize(&score).unwrap();
        assert!(content.contains("X: 3"));
        assert!(content.contains("O: 1"));
        assert!(content.contains("draws: 2"));
        let loaded: Score = serializer.deserialize(&content).unwrap();
        assert_eq!(loaded, score);
    }
}
