use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction::{self, *};

/// What the player asked for during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Poll {
    pub quit: bool,
    pub direction: Option<Direction>,
}

impl Poll {
    /// Folds one key event into the frame's request. Later direction keys
    /// override earlier ones; unknown keys and key releases do nothing.
    pub fn apply(&mut self, key: &KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if is_ctrl_c(key) {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => self.direction = Some(Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => self.direction = Some(Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => self.direction = Some(Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => self.direction = Some(Right),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
            _ => {}
        }
    }
}

pub trait InputSource {
    /// Drains whatever input arrived since the last call without blocking.
    fn poll(&mut self) -> Result<Poll>;
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    fn poll_keys(keys: &[KeyEvent]) -> Poll {
        let mut poll = Poll::default();
        for key in keys {
            poll.apply(key);
        }
        poll
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(poll_keys(&[key(KeyCode::Up)]).direction, Some(Up));
        assert_eq!(poll_keys(&[key(KeyCode::Down)]).direction, Some(Down));
        assert_eq!(poll_keys(&[key(KeyCode::Left)]).direction, Some(Left));
        assert_eq!(poll_keys(&[key(KeyCode::Right)]).direction, Some(Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(poll_keys(&[key(KeyCode::Char('w'))]).direction, Some(Up));
        assert_eq!(poll_keys(&[key(KeyCode::Char('a'))]).direction, Some(Left));
        assert_eq!(poll_keys(&[key(KeyCode::Char('s'))]).direction, Some(Down));
        assert_eq!(poll_keys(&[key(KeyCode::Char('D'))]).direction, Some(Right));
    }

    #[test]
    fn test_last_direction_wins() {
        let poll = poll_keys(&[key(KeyCode::Up), key(KeyCode::Left)]);
        assert_eq!(poll.direction, Some(Left));
        assert!(!poll.quit);
    }

    #[test]
    fn test_quit_keys() {
        assert!(poll_keys(&[key(KeyCode::Esc)]).quit);
        assert!(poll_keys(&[key(KeyCode::Char('q'))]).quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(poll_keys(&[ctrl_c]).quit);
    }

    #[test]
    fn test_quit_keeps_direction() {
        let poll = poll_keys(&[key(KeyCode::Down), key(KeyCode::Esc)]);
        assert!(poll.quit);
        assert_eq!(poll.direction, Some(Down));
    }

    #[test]
    fn test_ignored_keys() {
        let poll = poll_keys(&[key(KeyCode::Char('x')), key(KeyCode::Enter), key(KeyCode::Char('c'))]);
        assert_eq!(poll, Poll::default());
    }

    #[test]
    fn test_release_ignored() {
        let mut release = key(KeyCode::Up);
        release.kind = KeyEventKind::Release;
        assert_eq!(poll_keys(&[release]), Poll::default());
    }
}
