use common::games::tictactoe::{
    Board, COMPUTER_MARK, Difficulty, GameMode, GameStatus, HUMAN_MARK, PlayerCommand, Score,
    SessionPhase, SessionSnapshot,
};
use common::log_warn;
use eframe::egui;
use tokio::sync::mpsc;

use crate::config::ClientConfigManager;
use crate::state::SharedState;

use super::board::BoardUi;

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<PlayerCommand>,
    config_manager: ClientConfigManager,
    board_ui: BoardUi,
    last_mode: Option<GameMode>,
}

impl TicTacToeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<PlayerCommand>,
        config_manager: ClientConfigManager,
    ) -> Self {
        let last_mode = config_manager.get_config().ok().and_then(|config| config.last_mode);

        Self {
            shared_state,
            command_tx,
            config_manager,
            board_ui: BoardUi::new(),
            last_mode,
        }
    }

    fn send(&self, command: PlayerCommand) {
        let _ = self.command_tx.send(command);
    }

    fn select_mode(&mut self, mode: GameMode) {
        self.send(PlayerCommand::SelectMode(mode));
        if self.last_mode == Some(mode) {
            return;
        }
        self.last_mode = Some(mode);

        let mut config = self.config_manager.get_config().unwrap_or_default();
        config.last_mode = Some(mode);
        if let Err(e) = self.config_manager.set_config(&config) {
            log_warn!("Failed to remember game mode: {}", e);
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        ui.heading("Choose a game mode");
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            for (mode, icon) in [(GameMode::HumanVsHuman, "👥"), (GameMode::HumanVsComputer, "🤖")] {
                let label = format!("{} {}", icon, mode);
                if ui.selectable_label(self.last_mode == Some(mode), label).clicked() {
                    self.select_mode(mode);
                }
            }
        });

        ui.add_space(10.0);
        ui.label(score_line(&snapshot.score));

        if snapshot.board != Board::new() {
            ui.separator();
            ui.label("Last saved board:");
            self.board_ui.render(ui, snapshot);
        }
    }

    fn render_game(&mut self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        if snapshot.mode == Some(GameMode::HumanVsComputer) {
            ui.horizontal(|ui| {
                ui.label("Difficulty:");
                for difficulty in Difficulty::ALL {
                    let selected = snapshot.difficulty == Some(difficulty);
                    if ui.selectable_label(selected, difficulty.to_string()).clicked() {
                        self.send(PlayerCommand::SelectDifficulty(difficulty));
                    }
                }
            });
        }

        ui.label(score_line(&snapshot.score));
        ui.separator();

        let status = status_text(snapshot);
        if snapshot.status.is_over() {
            ui.colored_label(egui::Color32::GREEN, egui::RichText::new(status).size(18.0).strong());
        } else {
            ui.label(egui::RichText::new(status).size(18.0));
        }
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            if snapshot.phase == SessionPhase::GameOver && ui.button("🔄 Play again").clicked() {
                self.send(PlayerCommand::Reset);
            }
            if snapshot.phase != SessionPhase::ModeSelected && ui.button("Reset game").clicked() {
                self.send(PlayerCommand::Reset);
            }
            if ui.button("⬅ Back to menu").clicked() {
                self.send(PlayerCommand::BackToMenu);
            }
        });
        ui.add_space(5.0);

        if snapshot.phase != SessionPhase::ModeSelected
            && let Some(index) = self.board_ui.render(ui, snapshot)
        {
            self.send(PlayerCommand::PlaceMark(index));
        }
    }
}

fn score_line(score: &Score) -> String {
    format!(
        "X: {} - O: {} - Draws: {} ({} played)",
        score.x_wins,
        score.o_wins,
        score.draws,
        score.games_played()
    )
}

fn status_text(snapshot: &SessionSnapshot) -> String {
    let against_computer = snapshot.mode == Some(GameMode::HumanVsComputer);

    if snapshot.phase == SessionPhase::ModeSelected {
        return "Choose a difficulty to start".to_string();
    }
    if snapshot.computer_thinking {
        return "Computer is thinking...".to_string();
    }

    match snapshot.status {
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::XWon | GameStatus::OWon => match snapshot.status.winner() {
            Some(winner) if against_computer && winner == COMPUTER_MARK => "Computer wins!".to_string(),
            Some(winner) if against_computer && winner == HUMAN_MARK => "You win!".to_string(),
            Some(winner) => format!("Player {} wins!", winner),
            None => String::new(),
        },
        GameStatus::InProgress if against_computer => format!("Your turn ({})", HUMAN_MARK),
        GameStatus::InProgress => format!("Player {}'s turn", snapshot.current_mark),
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let snapshot = self.shared_state.get_snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("Tic Tac Toe").size(28.0));
                ui.separator();

                let Some(snapshot) = snapshot else {
                    ui.label("Loading saved game...");
                    ui.spinner();
                    return;
                };

                match snapshot.phase {
                    SessionPhase::Menu => self.render_menu(ui, &snapshot),
                    SessionPhase::ModeSelected | SessionPhase::InProgress | SessionPhase::GameOver => {
                        self.render_game(ui, &snapshot)
                    }
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::{SessionAction, TicTacToeSession};

    fn session_in(mode: GameMode) -> TicTacToeSession {
        let mut session = TicTacToeSession::new(SessionRng::new(3));
        session.update(SessionAction::SelectMode(mode)).unwrap();
        session
    }

    #[test]
    fn test_score_line_format() {
        let score = Score { x_wins: 3, o_wins: 1, draws: 2 };
        assert_eq!(score_line(&score), "X: 3 - O: 1 - Draws: 2 (6 played)");
    }

    #[test]
    fn test_labels_use_display_names() {
        let labels: Vec<String> = Difficulty::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Easy", "Medium", "Hard"]);
        assert_eq!(GameMode::HumanVsComputer.to_string(), "Human vs Computer");
    }

    #[test]
    fn test_status_in_human_mode_names_current_player() {
        let mut session = session_in(GameMode::HumanVsHuman);
        assert_eq!(status_text(&session.snapshot()), "Player X's turn");
        session.update(SessionAction::PlaceMark(0)).unwrap();
        assert_eq!(status_text(&session.snapshot()), "Player O's turn");
    }

    #[test]
    fn test_status_while_computer_thinks() {
        let mut session = session_in(GameMode::HumanVsComputer);
        assert_eq!(status_text(&session.snapshot()), "Choose a difficulty to start");
        session.update(SessionAction::SelectDifficulty(Difficulty::Easy)).unwrap();
        assert_eq!(status_text(&session.snapshot()), "Your turn (X)");
        session.update(SessionAction::PlaceMark(4)).unwrap();
        assert_eq!(status_text(&session.snapshot()), "Computer is thinking...");
    }

    #[test]
    fn test_status_reports_winner() {
        let mut session = session_in(GameMode::HumanVsHuman);
        for index in [0, 3, 1, 4, 2] {
            session.update(SessionAction::PlaceMark(index)).unwrap();
        }
        assert_eq!(status_text(&session.snapshot()), "Player X wins!");
    }
}
