//! The interactive read-eval loop.
//!
//! Generic over its input and output so tests can drive it with in-memory
//! buffers.

use std::io::{BufRead, Write};

use super::command::{self, Command, CommandError};
use super::state::App;

const ACTION_PROMPT: &str = "Enter action (tick/kill/quit): ";
const TICKS_PROMPT: &str = "Enter number of ticks: ";
const POISON_PROMPT: &str = "Enter amount of poison: ";

/// Prompts, then reads one line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>, CommandError> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn print_population<W: Write>(app: &App, output: &mut W) -> Result<(), CommandError> {
    writeln!(output, "---")?;
    let dump = app.population.dump();
    if !dump.is_empty() {
        writeln!(output, "{dump}")?;
    }
    Ok(())
}

/// Runs the command loop until `quit`, end of input, or an I/O failure.
///
/// Malformed numbers are reported and the loop carries on; the population
/// is left untouched.
pub fn run<R: BufRead, W: Write>(
    app: &mut App,
    mut input: R,
    mut output: W,
) -> Result<(), CommandError> {
    while app.running {
        let Some(line) = prompt(&mut input, &mut output, ACTION_PROMPT)? else {
            break;
        };
        let Some(action) = Command::parse(&line) else {
            continue;
        };

        match action {
            Command::Tick => {
                let Some(answer) = prompt(&mut input, &mut output, TICKS_PROMPT)? else {
                    break;
                };
                match command::parse_ticks(&answer) {
                    Ok(ticks) => {
                        app.run_ticks(ticks);
                        print_population(app, &mut output)?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            Command::Kill => {
                let Some(answer) = prompt(&mut input, &mut output, POISON_PROMPT)? else {
                    break;
                };
                match command::parse_poison(&answer) {
                    Ok(amount) => {
                        app.apply_poison(amount);
                        print_population(app, &mut output)?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            Command::Stats => writeln!(output, "{}", app.summary())?,
            Command::Quit => app.running = false,
            Command::Unknown(action) => writeln!(output, "Unknown command: {action}")?,
        }
    }
    tracing::debug!(tick = app.population.current_tick(), "Command loop finished");
    Ok(())
}
