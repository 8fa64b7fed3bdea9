use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step on the `(x, y)` axes; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Discrete commands delivered by an input source.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Direction(Direction),
    Quit,
    Restart,
    Pause,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Gates one command against the current heading.
///
/// A direction that reverses `heading` is swallowed. Every other command
/// passes through unchanged.
#[must_use]
pub fn route(command: Command, heading: Direction) -> Option<Command> {
    match command {
        Command::Direction(next) if !direction_change_is_valid(heading, next) => None,
        other => Some(other),
    }
}

/// Commands from one drain, folded into what the next tick acts on.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickInput {
    pub heading: Option<Direction>,
    pub restart: bool,
    pub toggle_pause: bool,
    pub quit: bool,
}

/// Folds a drained batch into at most one heading change.
///
/// Legality is judged against the heading the snake had when the batch was
/// drained, and the last legal direction wins. Folding stops at the first
/// quit.
#[must_use]
pub fn fold_commands<I>(commands: I, heading: Direction) -> TickInput
where
    I: IntoIterator<Item = Command>,
{
    let mut folded = TickInput::default();

    for command in commands {
        match route(command, heading) {
            Some(Command::Direction(next)) => folded.heading = Some(next),
            Some(Command::Restart) => folded.restart = true,
            Some(Command::Pause) => folded.toggle_pause = !folded.toggle_pause,
            Some(Command::Quit) => {
                folded.quit = true;
                break;
            }
            None => {}
        }
    }

    folded
}

/// Maps one key event to a command.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Command::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Command::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Command::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Command::Direction(Direction::Right),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Command::Quit,
        KeyCode::Enter | KeyCode::Char(' ' | 'r' | 'R') => Command::Restart,
        KeyCode::Char('p' | 'P') => Command::Pause,
        _ => return None,
    };

    Some(command)
}

/// Non-blocking keyboard source backed by crossterm's event queue.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reads every event already queued, never waiting for new ones.
    pub fn drain_commands(&mut self) -> io::Result<Vec<Command>> {
        let mut commands = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = map_key(key) {
                    commands.push(command);
                }
            }
        }

        Ok(commands)
    }
}
