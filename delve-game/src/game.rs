//! Game orchestration: one dungeon, the human player, and the bot.

use delve_bot::{Action, Bot, Tile};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::agent::{AgentKind, AgentState};
use crate::command::Command;
use crate::error::Result;
use crate::map::{Dungeon, MoveOutcome};

/// How a finished game ended, from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

/// Result of executing one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Textual response routed back to the issuing agent.
    Message(String),
    /// The game is over.
    GameOver(GameResult),
}

/// A running game.
pub struct Game {
    map: Dungeon,
    player: AgentState,
    bot_state: AgentState,
    bot: Bot,
}

impl Game {
    /// Spawn both agents onto the map and wire up the bot.
    pub fn new(mut map: Dungeon, bot: Bot, rng: &mut StdRng) -> Result<Game> {
        let player = map.spawn(AgentKind::PLAYER, rng)?;
        let bot_state = map.spawn(AgentKind::BOT, rng)?;
        info!(
            "Game on {:?}: gold to win {}",
            map.name(),
            map.gold_required()
        );
        Ok(Game {
            map,
            player,
            bot_state,
            bot,
        })
    }

    /// Execute one player command.
    pub fn player_turn(&mut self, command: Command) -> CommandOutcome {
        self.execute(command, AgentKind::PLAYER)
    }

    /// Let the bot take its turn. Look responses are fed back through the
    /// bot's observe path; move outcomes are dropped by contract.
    pub fn bot_turn(&mut self) -> Result<Option<GameResult>> {
        match self.bot.next_action(self.bot_state.position)? {
            Action::Look => {
                let window = self.map.look(self.bot_state.position);
                self.bot.observe(&window);
                Ok(None)
            }
            Action::Move(direction) => {
                match self
                    .map
                    .move_agent(&mut self.bot_state, AgentKind::BOT, direction)
                {
                    MoveOutcome::CaughtPlayer => Ok(Some(GameResult::Lost)),
                    outcome => {
                        debug!("bot move {:?}: {:?}", direction, outcome);
                        Ok(None)
                    }
                }
            }
        }
    }

    fn execute(&mut self, command: Command, kind: AgentKind) -> CommandOutcome {
        match command {
            Command::Hello => {
                CommandOutcome::Message(format!("Gold to win {}", self.map.gold_required()))
            }
            Command::Gold => {
                CommandOutcome::Message(format!("Gold owned: {}", self.agent(kind).gold))
            }
            Command::Pickup => self.pickup(kind),
            Command::Look => CommandOutcome::Message(self.map.look(self.agent(kind).position)),
            Command::Move(direction) => {
                let agent = if kind == AgentKind::PLAYER {
                    &mut self.player
                } else {
                    &mut self.bot_state
                };
                match self.map.move_agent(agent, kind, direction) {
                    MoveOutcome::Moved => CommandOutcome::Message("Success".into()),
                    MoveOutcome::Blocked => CommandOutcome::Message("Fail".into()),
                    MoveOutcome::CaughtPlayer => CommandOutcome::GameOver(GameResult::Lost),
                }
            }
            Command::Quit => {
                let won = self.player.gold >= self.map.gold_required()
                    && self.player.underneath == Tile::Exit;
                CommandOutcome::GameOver(if won { GameResult::Won } else { GameResult::Lost })
            }
        }
    }

    fn pickup(&mut self, kind: AgentKind) -> CommandOutcome {
        let agent = if kind == AgentKind::PLAYER {
            &mut self.player
        } else {
            &mut self.bot_state
        };
        if agent.underneath != Tile::Gold {
            return CommandOutcome::Message("Fail".into());
        }
        agent.gold += 1;
        agent.underneath = Tile::Floor;
        CommandOutcome::Message(format!("Success. Gold owned: {}", agent.gold))
    }

    fn agent(&self, kind: AgentKind) -> &AgentState {
        if kind == AgentKind::PLAYER {
            &self.player
        } else {
            &self.bot_state
        }
    }
}
