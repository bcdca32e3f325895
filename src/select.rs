//! Interactive choice between the derived URLs.

use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// Pick one entry out of `options`, prompting only when there is more than
/// one. Returns the index of the chosen entry.
///
/// Invalid input is rejected with a message and the prompt repeats; control
/// returns only on the first valid index. There is no retry cap and no
/// timeout; cancellation is external process termination.
pub fn choose<R: BufRead, W: Write>(options: &[String], input: R, output: W) -> Result<usize> {
    match options.len() {
        0 => Err(Error::NoRemotes),
        1 => Ok(0),
        _ => prompt_loop(options, input, output),
    }
}

fn prompt_loop<R: BufRead, W: Write>(
    options: &[String],
    mut input: R,
    mut output: W,
) -> Result<usize> {
    for (index, option) in options.iter().enumerate() {
        writeln!(output, "[{index}] {option}").map_err(Error::Terminal)?;
    }

    loop {
        write!(output, "Which one do you want to open? ").map_err(Error::Terminal)?;
        output.flush().map_err(Error::Terminal)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(Error::Terminal)?;
        if read == 0 {
            return Err(Error::Terminal(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a choice was made",
            )));
        }

        let entry = line.trim();
        match entry.parse::<usize>() {
            Ok(index) if index < options.len() => return Ok(index),
            _ => writeln!(
                output,
                "'{entry}' is not a valid choice, pick a number between 0 and {}",
                options.len() - 1
            )
            .map_err(Error::Terminal)?,
        }
    }
}
