//! Textual command parsing for console and agent input.

use delve_bot::Direction;

/// Everything an agent can ask the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Report the gold needed to win
    Hello,
    /// Report the gold owned so far
    Gold,
    /// Pick up the gold underfoot
    Pickup,
    /// Render the local view window
    Look,
    /// Step one cell in a cardinal direction
    Move(Direction),
    /// End the game and evaluate the win condition
    Quit,
}

impl Command {
    /// Parse raw input, case-insensitively. `None` means the command is not
    /// recognised and the caller should answer `Invalid`.
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.trim().to_uppercase();
        match input.as_str() {
            "HELLO" => Some(Command::Hello),
            "GOLD" => Some(Command::Gold),
            "PICKUP" => Some(Command::Pickup),
            "LOOK" => Some(Command::Look),
            "QUIT" => Some(Command::Quit),
            _ => {
                let direction = input.strip_prefix("MOVE ")?.trim();
                if direction.len() != 1 {
                    return None;
                }
                Direction::from_letter(direction.chars().next()?).map(Command::Move)
            }
        }
    }
}
