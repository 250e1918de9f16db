use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use snekgrid::{Difficulty, Heading};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Heading),
    /// Space: start a run, or pause/resume the current one.
    Primary,
    Restart,
    SetDifficulty(Difficulty),
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Heading::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyAction::Steer(Heading::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Steer(Heading::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Steer(Heading::Right)
        }
        KeyCode::Char(' ') => KeyAction::Primary,
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
        KeyCode::Char('1') => KeyAction::SetDifficulty(Difficulty::Easy),
        KeyCode::Char('2') => KeyAction::SetDifficulty(Difficulty::Normal),
        KeyCode::Char('3') => KeyAction::SetDifficulty(Difficulty::Hard),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), KeyAction::Steer(Heading::Up));
        assert_eq!(press(KeyCode::Down), KeyAction::Steer(Heading::Down));
        assert_eq!(press(KeyCode::Left), KeyAction::Steer(Heading::Left));
        assert_eq!(press(KeyCode::Right), KeyAction::Steer(Heading::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(press(KeyCode::Char('w')), KeyAction::Steer(Heading::Up));
        assert_eq!(press(KeyCode::Char('a')), KeyAction::Steer(Heading::Left));
        assert_eq!(press(KeyCode::Char('s')), KeyAction::Steer(Heading::Down));
        assert_eq!(press(KeyCode::Char('D')), KeyAction::Steer(Heading::Right));
    }

    #[test]
    fn test_difficulty_keys() {
        assert_eq!(
            press(KeyCode::Char('1')),
            KeyAction::SetDifficulty(Difficulty::Easy)
        );
        assert_eq!(
            press(KeyCode::Char('2')),
            KeyAction::SetDifficulty(Difficulty::Normal)
        );
        assert_eq!(
            press(KeyCode::Char('3')),
            KeyAction::SetDifficulty(Difficulty::Hard)
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(press(KeyCode::Char(' ')), KeyAction::Primary);
        assert_eq!(press(KeyCode::Char('r')), KeyAction::Restart);
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
    }
}
