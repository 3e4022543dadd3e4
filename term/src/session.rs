use std::io::{self, BufRead, Write};

use minesweeper_alpha_core::*;

/// How an interactive session finished.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionEnd {
    pub outcome: Outcome,
    pub rounds: u32,
    pub score: Option<f64>,
}

/// Runs the prompt/apply/render loop until the game is won, lost or quit.
///
/// Rejected input is reported on `err` and re-prompted. End of input counts as
/// quitting.
pub fn run(
    game: &mut Game,
    mut input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
) -> io::Result<SessionEnd> {
    write!(out, "{}", WELCOME)?;

    let mut line = String::new();
    let outcome = loop {
        write!(out, "{}", game.view())?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("input closed, quitting");
            break Outcome::Quit;
        }

        match game.apply(Command::parse(&line)) {
            Ok(Outcome::Help) => write!(out, "{}", HELP)?,
            Ok(outcome) if outcome.ends_session() => break outcome,
            Ok(_) => {}
            Err(rejected) => {
                log::debug!("rejected {:?}: {:?}", line.trim_end(), rejected);
                writeln!(err, "\nInput Error: {}", rejected)?;
                err.flush()?;
            }
        }
    };

    let score = game.score();
    match (outcome, score) {
        (Outcome::Won, Some(score)) => write!(out, "{}", win_report(score))?,
        (Outcome::Lost, _) => write!(out, "{}", LOSS_REPORT)?,
        _ => write!(out, "{}", QUIT_MESSAGE)?,
    }
    out.flush()?;

    log::info!(
        "session over after {} rounds: {:?}, score {:?}",
        game.rounds(),
        outcome,
        score
    );
    Ok(SessionEnd {
        outcome,
        rounds: game.rounds(),
        score,
    })
}
