//! Line-oriented command grammar for the terminal front end.
//!
//! ```text
//! size N | algorithm NAME... | go | refresh | config | mask | save | clear
//! apply | move X Y [up] | end | drag X1 Y1 X2 Y2 | resize | help | quit
//! ```

use crate::events::UiEvent;
use crate::grid::Coord;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    /// Press at `from`, move to `to`, release
    Drag { from: Coord, to: Coord },
    Help,
    Quit,
}

impl Command {
    /// Events this command expands to, in order
    pub fn events(&self) -> Vec<UiEvent> {
        match self {
            Command::Event(event) => vec![event.clone()],
            Command::Drag { from, to } => vec![
                UiEvent::drag_to(*from),
                UiEvent::drag_to(*to),
                UiEvent::PointerMoveEnd,
            ],
            Command::Help | Command::Quit => Vec::new(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("not a number: {0}")]
    InvalidNumber(String),

    #[error("{0}: unexpected argument")]
    TrailingArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  size N                 pick grid size
  algorithm NAME         pick algorithm (e.g. algorithm Hunt and Kill)
  go | refresh | config  generate / regenerate / back to configuration
  mask | save | clear    edit, save or reset the mask
  apply                  toggle apply-mask
  move X Y [up]          pointer over cell (button held unless 'up')
  end                    release the pointer
  drag X1 Y1 X2 Y2       move, move, end
  resize                 redraw
  help | quit";

fn number(
    token: Option<&str>,
    command: &'static str,
    expected: &'static str,
) -> Result<usize, ParseError> {
    let token = token.ok_or(ParseError::MissingArgument { command, expected })?;
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "size" => {
            let size = number(tokens.next(), "size", "a grid size")?;
            Command::Event(UiEvent::SizeSelected(size))
        }
        "algorithm" | "algo" => {
            let name = tokens.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "algorithm",
                    expected: "an algorithm name",
                });
            }
            return Ok(Some(Command::Event(UiEvent::AlgorithmSelected(name))));
        }
        "go" => Command::Event(UiEvent::GoClicked),
        "refresh" => Command::Event(UiEvent::RefreshClicked),
        "config" => Command::Event(UiEvent::ChangeConfigClicked),
        "mask" => Command::Event(UiEvent::EditMaskClicked),
        "save" => Command::Event(UiEvent::SaveMaskClicked),
        "clear" => Command::Event(UiEvent::ClearMaskClicked),
        "apply" => Command::Event(UiEvent::ApplyMaskClicked),
        "end" => Command::Event(UiEvent::PointerMoveEnd),
        "resize" => Command::Event(UiEvent::Resize),
        "move" => {
            let x = number(tokens.next(), "move", "X Y")?;
            let y = number(tokens.next(), "move", "X Y")?;
            let button = match tokens.next() {
                None => true,
                Some("up") => false,
                Some(_) => return Err(ParseError::TrailingArgument("move")),
            };
            Command::Event(UiEvent::PointerMove { x, y, button })
        }
        "drag" => {
            let mut coords = [0usize; 4];
            for slot in &mut coords {
                *slot = number(tokens.next(), "drag", "X1 Y1 X2 Y2")?;
            }
            Command::Drag {
                from: Coord::new(coords[0], coords[1]),
                to: Coord::new(coords[2], coords[3]),
            }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };

    if tokens.next().is_some() {
        return Err(ParseError::TrailingArgument(keyword(&command)));
    }
    Ok(Some(command))
}

fn keyword(command: &Command) -> &'static str {
    match command {
        Command::Drag { .. } => "drag",
        Command::Help => "help",
        Command::Quit => "quit",
        Command::Event(event) => match event {
            UiEvent::SizeSelected(_) => "size",
            UiEvent::AlgorithmSelected(_) => "algorithm",
            UiEvent::PointerMove { .. } => "move",
            UiEvent::PointerMoveEnd => "end",
            UiEvent::GoClicked => "go",
            UiEvent::RefreshClicked => "refresh",
            UiEvent::ChangeConfigClicked => "config",
            UiEvent::EditMaskClicked => "mask",
            UiEvent::SaveMaskClicked => "save",
            UiEvent::ClearMaskClicked => "clear",
            UiEvent::ApplyMaskClicked => "apply",
            UiEvent::Resize => "resize",
        },
    }
}
