use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::session::PlayMode;

/// Line-based setup dialogue, used before the terminal enters raw mode.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Read one line of any length, without the trailing newline.
    ///
    /// End of input is an error: every prompt needs an answer.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Show the title and wait for Enter.
    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Conway's Game of Life ===")?;
        write!(self.output, "\nPress [ENTER] to start the game.")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Ask how to populate the board. Anything but `2` or `3` selects Random.
    pub fn play_mode(&mut self) -> io::Result<PlayMode> {
        writeln!(self.output, "The game has 3 modes. Please select one to play.")?;
        writeln!(self.output, "    [1][Default]. Play with a randomized board.")?;
        writeln!(self.output, "    [2]. Load the board from a file.")?;
        writeln!(self.output, "    [3]. Draw the board.")?;
        write!(self.output, "Type the mode you want to play: ")?;
        self.output.flush()?;

        let answer = self.read_line()?;
        let mode = match answer.trim() {
            "1" => PlayMode::Random,
            "2" => PlayMode::FromFile,
            "3" => PlayMode::UserDrawn,
            _ => {
                writeln!(
                    self.output,
                    "You have chosen an option outside the range; playing with a randomized board."
                )?;
                return Ok(PlayMode::Random);
            }
        };
        writeln!(self.output, "You have selected [{}] mode.", mode.name())?;
        Ok(mode)
    }

    /// Ask for a positive integer until one is given.
    pub fn dimension(&mut self, label: &str) -> io::Result<usize> {
        write!(self.output, "Enter the {} of your board: ", label)?;
        loop {
            self.output.flush()?;
            match self.read_line()?.trim().parse::<usize>() {
                Ok(value) if value >= 1 => return Ok(value),
                _ => write!(self.output, "Re-enter the {} of your board (at least 1): ", label)?,
            }
        }
    }

    /// Ask for height, then width.
    pub fn dimensions(&mut self) -> io::Result<(usize, usize)> {
        let height = self.dimension("height")?;
        let width = self.dimension("width")?;
        writeln!(
            self.output,
            "The size of your board is {}x{} (height x width).",
            height, width
        )?;
        Ok((height, width))
    }

    /// Ask for a board file until one that can be opened is named.
    pub fn existing_file(&mut self) -> io::Result<PathBuf> {
        loop {
            write!(self.output, "Please enter the name of the board you want to load: ")?;
            self.output.flush()?;
            let path = PathBuf::from(self.read_line()?);
            if File::open(&path).is_ok() {
                return Ok(path);
            }
            writeln!(self.output, "File not found.")?;
        }
    }

    /// Ask where to save the final board. Blank answers are asked again.
    pub fn save_name(&mut self) -> io::Result<PathBuf> {
        loop {
            write!(self.output, "Saving your board! Please enter a name for your file: ")?;
            self.output.flush()?;
            let name = self.read_line()?;
            if !name.trim().is_empty() {
                return Ok(PathBuf::from(name));
            }
        }
    }
}
