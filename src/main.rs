//! SCRAMBLE - how many words can you make from one?

use clap::Parser;
use crossterm::event::{self, Event};
use std::process::ExitCode;
use std::time::Duration;

use scramble::app::App;
use scramble::config::Cli;
use scramble::tui::{self, Tui};
use scramble::ScrambleError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_path = cli.log_path();
    scramble::log::init_logger(cli.debug, log_path.as_deref());

    if let Err(e) = try_main(cli) {
        log::error!("{}", e);
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), ScrambleError> {
    let dictionary = cli.dictionary()?;
    let mut app = App::new(dictionary, cli.word_source(), &cli.language, cli.seed);

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let poll_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
