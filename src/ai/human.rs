use std::io::{self, BufRead, Write};

use super::agent::{playable_actions, Agent};
use crate::error::AgentError;
use crate::game::Board;

/// Where a [`HumanAgent`] reads its lines from.
pub trait LineSource {
    /// Append one line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<B: BufRead> LineSource for B {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// The process's stdin, locked only while a single line is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleInput;

impl LineSource for ConsoleInput {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Interactive agent: prompts on `output` and reads a column from `input`,
/// asking again until it gets a legal one.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: LineSource, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, board: &Board) -> Result<usize, AgentError> {
        let legal = playable_actions(board)?;
        loop {
            write!(self.output, "Enter a move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::Input(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a move was entered",
                )));
            }

            match line.trim().parse::<usize>() {
                Ok(col) if legal.contains(&col) => return Ok(col),
                Ok(_) => writeln!(self.output, "Invalid move! Must be within {legal:?}")?,
                Err(_) => writeln!(self.output, "Invalid move! Must be an integer.")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn agent(input: &str) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
        HumanAgent::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_legal_move() {
        let mut human = agent("3\n");
        assert_eq!(human.select_action(&Board::default()).unwrap(), 3);
    }

    #[test]
    fn reprompts_until_legal() {
        let mut board = Board::default();
        for _ in 0..6 {
            board = board.apply_move(0).unwrap();
        }
        let mut human = agent("abc\n0\n9\n 2 \n");
        assert_eq!(human.select_action(&board).unwrap(), 2);

        let (_, output) = human.into_inner();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter a move: ").count(), 4);
        assert!(text.contains("Invalid move! Must be an integer."));
        assert!(text.contains("Invalid move! Must be within [1, 2, 3, 4, 5, 6]"));
    }

    #[test]
    fn eof_is_an_error() {
        let mut human = agent("x\n");
        let err = human.select_action(&Board::default()).unwrap_err();
        assert!(matches!(err, AgentError::Input(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
