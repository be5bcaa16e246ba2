use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use quiz20::config::TICK_INTERVAL;
use quiz20::{
    handle_finish_confirm_input, handle_quit_confirm_input, handle_quiz_input,
    handle_summary_input, logger, sync_app_state, ui, AppState, CountdownTimer, QuestionBank,
    QuizConfig, QuizSession,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();
    let bank = QuestionBank::builtin()?;
    let mut session = QuizSession::new(bank, QuizConfig::default());
    logger::log(&format!("Starting quiz with {} questions", session.bank().len()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Event loop failed: {}", e));
    }
    result?;
    Ok(())
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, session: &mut QuizSession) -> io::Result<()> {
    let mut app_state = AppState::Quiz;
    let mut events = EventStream::new();
    let (mut timer, mut ticks) = CountdownTimer::start(TICK_INTERVAL);

    while app_state != AppState::Exit {
        terminal.draw(|f| ui::draw(f, session, app_state))?;

        tokio::select! {
            Some(_) = ticks.recv(), if timer.is_running() => session.tick(),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => match app_state {
                    AppState::Quiz => handle_quiz_input(session, key, &mut app_state),
                    AppState::FinishConfirm => {
                        handle_finish_confirm_input(session, key, &mut app_state)
                    }
                    AppState::QuitConfirm => handle_quit_confirm_input(key, &mut app_state),
                    AppState::Summary | AppState::Review => {
                        handle_summary_input(session, key, &mut app_state)
                    }
                    AppState::Exit => {}
                },
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
        }

        if session.is_completed() {
            timer.cancel();
        }
        sync_app_state(session, &mut app_state);
    }

    Ok(())
}
