use std::path::Path;

use crate::config::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider,
    MemoryContentProvider, Validate, YamlConfigSerializer,
};
use crate::{log_debug, log_warn};
use super::board::Board;
use super::score::Score;
use super::session::PersistedState;

pub const BOARD_ENTRY_FILE: &str = "board.yaml";
pub const SCORE_ENTRY_FILE: &str = "score.yaml";

/// Board and score, each kept in its own entry.
pub struct GameStore<TProvider, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Board> + ConfigSerializer<Score>,
{
    board_entry: TProvider,
    score_entry: TProvider,
    serializer: TSerializer,
}

impl GameStore<FileContentConfigProvider, YamlConfigSerializer> {
    pub fn in_directory(directory: &Path) -> Self {
        Self::new(
            FileContentConfigProvider::new(directory.join(BOARD_ENTRY_FILE)),
            FileContentConfigProvider::new(directory.join(SCORE_ENTRY_FILE)),
            YamlConfigSerializer::new(),
        )
    }
}

impl GameStore<MemoryContentProvider, YamlConfigSerializer> {
    pub fn in_memory() -> Self {
        Self::new(
            MemoryContentProvider::new(),
            MemoryContentProvider::new(),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TProvider, TSerializer> GameStore<TProvider, TSerializer>
where
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Board> + ConfigSerializer<Score>,
{
    pub fn new(board_entry: TProvider, score_entry: TProvider, serializer: TSerializer) -> Self {
        Self {
            board_entry,
            score_entry,
            serializer,
        }
    }

    /// Never fails: an entry that is absent or unusable falls back to its default.
    pub fn load(&self) -> PersistedState {
        PersistedState {
            board: self.load_entry("board", &self.board_entry),
            score: self.load_entry("score", &self.score_entry),
        }
    }

    pub fn save(&self, state: &PersistedState) -> Result<(), ConfigError> {
        self.save_entry(&self.board_entry, &state.board)?;
        self.save_entry(&self.score_entry, &state.score)
    }

    fn load_entry<T>(&self, name: &str, entry: &TProvider) -> T
    where
        T: Default + Validate,
        TSerializer: ConfigSerializer<T>,
    {
        match self.read_entry(entry) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log_debug!("No stored {}, starting fresh", name);
                T::default()
            }
            Err(e) => {
                log_warn!("Ignoring stored {}: {}", name, e);
                T::default()
            }
        }
    }

    fn read_entry<T>(&self, entry: &TProvider) -> Result<Option<T>, ConfigError>
    where
        T: Validate,
        TSerializer: ConfigSerializer<T>,
    {
        let Some(content) = entry.get_config_content()? else {
            return Ok(None);
        };
        let value: T = self.serializer.deserialize(&content)?;
        value.validate().map_err(ConfigError::Validation)?;
        Ok(Some(value))
    }

    fn save_entry<T>(&self, entry: &TProvider, value: &T) -> Result<(), ConfigError>
    where
        TSerializer: ConfigSerializer<T>,
    {
        let content = self.serializer.serialize(value)?;
        entry.set_config_content(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_str;

    fn memory_store(board: &MemoryContentProvider, score: &MemoryContentProvider) -> GameStore<MemoryContentProvider> {
        GameStore::new(board.clone(), score.clone(), YamlConfigSerializer::new())
    }

    fn get_temp_dir() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_state_{}", random_number))
    }

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = GameStore::in_memory();
        assert_eq!(store.load(), PersistedState::default());
    }

    #[test]
    fn test_saved_state_reloads_identically() {
        let board_entry = MemoryContentProvider::new();
        let score_entry = MemoryContentProvider::new();
        let state = PersistedState {
            board: board_from_str("XO_ _X_ __O"),
            score: Score { x_wins: 4, o_wins: 2, draws: 7 },
        };

        memory_store(&board_entry, &score_entry).save(&state).unwrap();
        let loaded = memory_store(&board_entry, &score_entry).load();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_corrupt_entries_fall_back_independently() {
        let board_entry = MemoryContentProvider::with_content("not: [a board");
        let score_entry = MemoryContentProvider::with_content("X: 1\nO: 2\ndraws: 3\n");
        let loaded = memory_store(&board_entry, &score_entry).load();
        assert_eq!(loaded.board, Board::new());
        assert_eq!(loaded.score, Score { x_wins: 1, o_wins: 2, draws: 3 });

        let board_entry = MemoryContentProvider::with_content("- X\n- X\n- X\n");
        let score_entry = MemoryContentProvider::with_content("X: -4\n");
        let loaded = memory_store(&board_entry, &score_entry).load();
        assert_eq!(loaded, PersistedState::default());
    }

    #[test]
    fn test_unreachable_board_falls_back() {
        let serializer = YamlConfigSerializer::new();
        for layout in ["XXX XX_ ___", "XXX OO_ O__", "OOO XX_ XX_"] {
            let board_entry = MemoryContentProvider::new();
            let score_entry = MemoryContentProvider::new();
            let content = ConfigSerializer::<Board>::serialize(&serializer, &board_from_str(layout)).unwrap();
            board_entry.set_config_content(&content).unwrap();

            let loaded = memory_store(&board_entry, &score_entry).load();
            assert_eq!(loaded.board, Board::new(), "layout {}", layout);
        }
    }

    #[test]
    fn test_file_store_round_trip() {
        let directory = get_temp_dir();
        let state = PersistedState {
            board: board_from_str("X__ _O_ __X"),
            score: Score { x_wins: 1, o_wins: 0, draws: 2 },
        };

        GameStore::in_directory(&directory).save(&state).unwrap();
        assert!(directory.join(BOARD_ENTRY_FILE).exists());
        assert!(directory.join(SCORE_ENTRY_FILE).exists());

        let loaded = GameStore::in_directory(&directory).load();
        assert_eq!(loaded, state);

        let _ = std::fs::remove_dir_all(&directory);
    }

    #[test]
    fn test_missing_directory_loads_defaults() {
        let store = GameStore::in_directory(&get_temp_dir());
        assert_eq!(store.load(), PersistedState::default());
    }
}
