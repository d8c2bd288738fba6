//! 駐車場グリッド画面

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

use super::terminal::{restore_terminal, setup_terminal};
use crate::session::{Outcome, Session};
use parkflow_core::SpotView;

/// 1行あたりのスポット数
const GRID_COLUMNS: usize = 5;

/// ステータス行の種別
#[derive(Debug, Clone, Copy, PartialEq)]
enum MessageKind {
    Info,
    Success,
    Error,
}

/// 画面の状態
struct LotViewState {
    session: Session,
    input: String,
    message: (String, MessageKind),
}

impl LotViewState {
    fn new(session: Session) -> Self {
        Self {
            session,
            input: String::new(),
            message: (
                "コマンドを入力して Enter (例: park AB12 car)".to_string(),
                MessageKind::Info,
            ),
        }
    }

    /// キー入力を処理する。終了する場合は true
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => return true,
            KeyCode::Enter => return self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        false
    }

    fn submit(&mut self) -> bool {
        let line = std::mem::take(&mut self.input);
        match self.session.execute_line(&line) {
            Ok(Some(Outcome::Quit)) => return true,
            Ok(Some(Outcome::Help)) => {
                self.message = (
                    "park <ID> <car|motorcycle|truck> | remove <ID> | find <ID> | status | fees | quit"
                        .to_string(),
                    MessageKind::Info,
                );
            }
            Ok(Some(Outcome::Spots(_))) | Ok(Some(Outcome::Json(_))) => {
                self.message = ("一覧は常に表示されています".to_string(), MessageKind::Info);
            }
            Ok(Some(Outcome::Fees(fees))) => {
                let text = fees
                    .iter()
                    .map(|(c, f)| format!("{} ${}", c.label(), f))
                    .collect::<Vec<_>>()
                    .join(" / ");
                self.message = (text, MessageKind::Info);
            }
            Ok(Some(outcome)) => {
                self.message = (outcome.summary(), MessageKind::Success);
            }
            Ok(None) => {}
            Err(e) => {
                self.message = (e.to_string(), MessageKind::Error);
            }
        }
        false
    }
}

/// グリッド画面を実行
pub fn run_lot_view(session: Session) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut state = LotViewState::new(session);

    let result = loop {
        if let Err(e) = terminal.draw(|f| draw_ui(f, &state)) {
            break Err(e);
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if state.handle_key(key.code) {
                    break Ok(());
                }
            }
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };

    restore_terminal(&mut terminal)?;
    result
}

fn draw_ui(frame: &mut Frame, state: &LotViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);
    draw_grid(frame, chunks[1], &state.session.service().list_spots());
    draw_message(frame, chunks[2], state);
    draw_input(frame, chunks[3], state);
    draw_footer(frame, chunks[4]);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &LotViewState) {
    let service = state.session.service();
    let occupancy = service.occupancy();

    let title = Line::from(vec![
        Span::styled(
            service.name().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  使用中 {}/{}  空き {}",
            occupancy.occupied, occupancy.capacity, occupancy.free
        )),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// グリッドの行数
fn grid_rows(spot_count: usize) -> usize {
    spot_count.div_ceil(GRID_COLUMNS)
}

fn draw_grid(frame: &mut Frame, area: Rect, spots: &[SpotView]) {
    let outer = Block::default().title("駐車スポット").borders(Borders::ALL);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = grid_rows(spots.len());
    if rows == 0 {
        return;
    }

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows as u32)))
        .split(inner);

    for (row_area, row_spots) in row_areas.iter().zip(spots.chunks(GRID_COLUMNS)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..GRID_COLUMNS).map(|_| Constraint::Ratio(1, GRID_COLUMNS as u32)))
            .split(*row_area);

        for (cell, spot) in cells.iter().zip(row_spots) {
            draw_spot(frame, *cell, spot);
        }
    }
}

fn draw_spot(frame: &mut Frame, area: Rect, spot: &SpotView) {
    let (background, lines) = match (&spot.vehicle_id, spot.category, spot.fee) {
        (Some(id), Some(category), Some(fee)) => (
            Color::LightRed,
            vec![
                Line::from(Span::styled(
                    id.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("{} (${})", category, fee)),
            ],
        ),
        _ => (Color::LightGreen, vec![Line::from("空き")]),
    };

    let block = Block::default()
        .title(format!("Spot {}", spot.number))
        .borders(Borders::ALL);
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::Black).bg(background))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_message(frame: &mut Frame, area: Rect, state: &LotViewState) {
    let (text, kind) = &state.message;
    let color = match kind {
        MessageKind::Info => Color::Gray,
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
    };

    let message = Paragraph::new(text.as_str())
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

fn draw_input(frame: &mut Frame, area: Rect, state: &LotViewState) {
    let input = Paragraph::new(format!("> {}", state.input))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("コマンド").borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("Enter: 実行 | Backspace: 削除 | Esc: 終了")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkflow_core::{AllocationService, LotSettings};

    fn state() -> LotViewState {
        LotViewState::new(Session::new(AllocationService::new(LotSettings {
            capacity: 7,
            ..Default::default()
        })))
    }

    fn type_line(state: &mut LotViewState, line: &str) -> bool {
        for c in line.chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state.handle_key(KeyCode::Enter)
    }

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(20), 4);
        assert_eq!(grid_rows(7), 2);
        assert_eq!(grid_rows(0), 0);
    }

    #[test]
    fn test_submit_park_updates_message_and_clears_input() {
        let mut state = state();
        assert!(!type_line(&mut state, "park AB12 car"));

        assert!(state.input.is_empty());
        assert_eq!(state.message.1, MessageKind::Success);
        assert!(state.session.service().list_spots()[0].occupied);
    }

    #[test]
    fn test_submit_error_shows_message() {
        let mut state = state();
        type_line(&mut state, "remove ZZ99");
        assert_eq!(state.message.1, MessageKind::Error);
        assert!(state.message.0.contains("ZZ99"));
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut state = state();
        state.handle_key(KeyCode::Char('a'));
        state.handle_key(KeyCode::Char('b'));
        state.handle_key(KeyCode::Backspace);
        assert_eq!(state.input, "a");
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state();
        assert!(state.handle_key(KeyCode::Esc));

        let mut state = self::state();
        assert!(type_line(&mut state, "quit"));
    }
}
