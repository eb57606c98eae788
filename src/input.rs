use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::Direction;

/// High-level commands consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    SpeedUp,
    SpeedDown,
    MoreGrowthFood,
    FewerGrowthFood,
    MoreShrinkFood,
    FewerShrinkFood,
    Quit,
}

/// Maps one key press to a command.
///
/// Arrows steer, `Q`/`W` change speed, `A`/`S` and `Z`/`X` change the
/// growth and shrink food counts, `Esc` or `Ctrl-C` quits.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up => GameInput::Direction(Direction::Up),
        KeyCode::Down => GameInput::Direction(Direction::Down),
        KeyCode::Left => GameInput::Direction(Direction::Left),
        KeyCode::Right => GameInput::Direction(Direction::Right),
        KeyCode::Esc => GameInput::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => GameInput::SpeedDown,
            'w' => GameInput::SpeedUp,
            'a' => GameInput::MoreGrowthFood,
            's' => GameInput::FewerGrowthFood,
            'z' => GameInput::MoreShrinkFood,
            'x' => GameInput::FewerShrinkFood,
            _ => return None,
        },
        _ => return None,
    };

    Some(input)
}

/// Reads terminal key events and turns them into [`GameInput`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Collects every command that arrives within `timeout`.
    ///
    /// Waits up to `timeout` for the first event, then drains whatever is
    /// already queued without blocking again.
    pub fn poll_inputs(&mut self, timeout: Duration) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();
        let mut wait = timeout;

        while event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                inputs.extend(map_key(key));
            }
            wait = Duration::ZERO;
        }

        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{map_key, GameInput};
    use crate::grid::Direction;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Left)),
            Some(GameInput::Direction(Direction::Left))
        );
    }

    #[test]
    fn letter_keys_map_to_tunables() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(GameInput::SpeedDown));
        assert_eq!(map_key(press(KeyCode::Char('W'))), Some(GameInput::SpeedUp));
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::MoreGrowthFood)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('s'))),
            Some(GameInput::FewerGrowthFood)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('z'))),
            Some(GameInput::MoreShrinkFood)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('x'))),
            Some(GameInput::FewerShrinkFood)
        );
        assert_eq!(map_key(press(KeyCode::Char('k'))), None);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
