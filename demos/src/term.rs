//! Crossterm front-end for the [`Editor`](crate::Editor).

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{self, Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{MarkerKind, Point};

use crate::{Action, Editor, Tile};

fn tile_glyph(tile: Tile) -> (char, Color) {
    match tile {
        Tile::Start => ('S', Color::Green),
        Tile::Finish => ('F', Color::Red),
        Tile::Wall => ('#', Color::Grey),
        Tile::Visited => ('o', Color::Cyan),
        Tile::Path => ('*', Color::Yellow),
        Tile::Free => ('.', Color::DarkGrey),
    }
}

/// Terminal row for a grid row.
fn screen_row(row: i32) -> io::Result<u16> {
    u16::try_from(row).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("grid row {row} does not fit the terminal"),
        )
    })
}

/// Maps a key press to an editor action.
fn key_action(code: KeyCode) -> Option<Action> {
    let mv = |drow, dcol| Some(Action::Move { drow, dcol });
    match code {
        KeyCode::Up | KeyCode::Char('k') => mv(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => mv(1, 0),
        KeyCode::Left | KeyCode::Char('h') => mv(0, -1),
        KeyCode::Right | KeyCode::Char('l') => mv(0, 1),
        KeyCode::Char(' ') => Some(Action::ToggleWall),
        KeyCode::Char('s') => Some(Action::PlaceMarker(MarkerKind::Start)),
        KeyCode::Char('f') => Some(Action::PlaceMarker(MarkerKind::Finish)),
        KeyCode::Char('r') => Some(Action::Scatter),
        KeyCode::Char('c') => Some(Action::Clear),
        KeyCode::Enter => Some(Action::Run),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Faster),
        KeyCode::Char('-') => Some(Action::Slower),
        KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Terminal session: raw mode, alternate screen and mouse capture for as
/// long as the value lives.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }

    /// Wait up to `timeout` for input and decode it.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Action>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let action = match event::read()? {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                key_action(code)
            }
            Event::Mouse(me) => {
                // One character per cell; the grid is drawn at the origin.
                let pos = Point::new(i32::from(me.row), i32::from(me.column));
                match me.kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(Action::Press(pos)),
                    MouseEventKind::Drag(MouseButton::Left) => Some(Action::Drag(pos)),
                    MouseEventKind::Up(_) => Some(Action::Release),
                    _ => None,
                }
            }
            _ => None,
        };
        Ok(action)
    }

    /// Redraw the whole grid and the status line.
    pub fn draw(&mut self, editor: &Editor) -> io::Result<()> {
        let grid = editor.grid();
        let status_row = screen_row(grid.rows())?;
        for row in 0..grid.rows() {
            queue!(self.out, cursor::MoveTo(0, screen_row(row)?))?;
            for col in 0..grid.cols() {
                let p = Point::new(row, col);
                let (ch, fg) = tile_glyph(editor.tile(p));
                if p == editor.cursor() {
                    queue!(self.out, SetAttribute(Attribute::Reverse))?;
                }
                queue!(self.out, SetForegroundColor(fg), Print(ch))?;
                if p == editor.cursor() {
                    queue!(self.out, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        let speed = editor.player().map_or(1, |p| p.speed());
        queue!(
            self.out,
            style::ResetColor,
            SetBackgroundColor(Color::Reset),
            cursor::MoveTo(0, status_row.saturating_add(1)),
            terminal::Clear(ClearType::CurrentLine),
            Print(format!("{} | cursor {} | x{speed}", editor.status(), editor.cursor())),
            cursor::MoveTo(0, status_row.saturating_add(2)),
            Print("enter run  space wall  s/f markers  r random  c clear  +/- speed  p pause  q quit"),
        )?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
