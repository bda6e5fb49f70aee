use common::games::tictactoe::{BOARD_SIDE, Mark, SessionSnapshot, WinningLine};
use eframe::egui;

pub struct BoardUi {
    last_hover: Option<usize>,
}

impl BoardUi {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / BOARD_SIDE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Paints the board and returns the cell the player clicked, if input is accepted.
    pub fn render(&mut self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height() - 40.0);
        let board_size = cell_size * BOARD_SIDE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_size, board_size),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        if let Some(index) = snapshot.last_move {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, index).shrink(Self::LINE_WIDTH),
                0.0,
                egui::Color32::from_rgb(255, 245, 200),
            );
        }

        for (index, mark) in snapshot.board.cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, cell_size, index);
            match mark {
                Mark::X => self.draw_x(painter, cell_rect),
                Mark::O => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if let Some(line) = snapshot.winning_line {
            Self::draw_winning_line(painter, rect, cell_size, &line);
        }

        self.last_hover = None;
        if !snapshot.accepts_board_input() {
            return None;
        }

        if let Some(hover_pos) = response.hover_pos() {
            let column = ((hover_pos.x - rect.left()) / cell_size) as usize;
            let row = ((hover_pos.y - rect.top()) / cell_size) as usize;

            if column < BOARD_SIDE && row < BOARD_SIDE {
                let index = row * BOARD_SIDE + column;
                if snapshot.board.is_empty_cell(index) {
                    painter.rect_filled(
                        Self::cell_rect(rect, cell_size, index),
                        0.0,
                        egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                    );
                    self.last_hover = Some(index);
                }
            }
        }

        if response.clicked() {
            self.last_hover
        } else {
            None
        }
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
        let column = index % BOARD_SIDE;
        let row = index / BOARD_SIDE;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + column as f32 * cell_size,
                board_rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let color = egui::Color32::from_rgb(220, 50, 50);
        let stroke = egui::Stroke::new(4.0, color);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let color = egui::Color32::from_rgb(50, 50, 220);
        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(4.0, color));
    }

    fn draw_winning_line(painter: &egui::Painter, rect: egui::Rect, cell_size: f32, line: &WinningLine) {
        let start = Self::cell_rect(rect, cell_size, line.start()).center();
        let end = Self::cell_rect(rect, cell_size, line.end()).center();
        painter.line_segment(
            [start, end],
            egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
        );
    }
}
