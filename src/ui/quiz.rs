use crate::config::APP_TITLE;
use crate::models::{Locale, QuizSession, Theme};
use crate::ui::layout::{calculate_progress_segments, calculate_quiz_chunks};
use crate::ui::theme::Palette;
use crate::utils::format_countdown;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn draw_header(f: &mut Frame, area: Rect, session: &QuizSession, palette: &Palette) {
    let theme_label = match session.theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    let locale_label = match session.locale {
        Locale::En => "EN",
        Locale::Hi => "HI",
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(28)])
        .split(area);

    let title = Paragraph::new(APP_TITLE)
        .style(palette.title())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let status = Line::from(vec![
        Span::styled(
            format_countdown(session.remaining_secs()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from(format!("  {}  {}", locale_label, theme_label)),
    ]);
    let status = Paragraph::new(status)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);
}

fn draw_progress(f: &mut Frame, area: Rect, session: &QuizSession, palette: &Palette) {
    let segments = calculate_progress_segments(area, session.bank().len());
    for (i, segment) in segments.into_iter().enumerate() {
        let color = if i == session.current_index() {
            palette.progress_current
        } else if i < session.current_index() {
            palette.progress_done
        } else {
            palette.progress_pending
        };
        f.render_widget(Block::default().style(Style::default().bg(color)), segment);
    }
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let palette = Palette::for_theme(session.theme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let layout = calculate_quiz_chunks(f.area());
    draw_header(f, layout.header_area, session, &palette);
    draw_progress(f, layout.progress_area, session, &palette);

    let question = session.current_question();
    let progress = format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.bank().len()
    );
    let prompt = Paragraph::new(Text::from(question.text.get(session.locale)))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(progress, Style::default().fg(palette.accent))),
        );
    f.render_widget(prompt, layout.question_area);

    let selected = session.selected_option();
    let mut options = Text::default();
    for option in &question.options {
        let style = if selected == Some(option.id.as_str()) {
            Style::default()
                .fg(palette.background)
                .bg(palette.selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text).bg(palette.option)
        };
        let marker = if selected == Some(option.id.as_str()) {
            "●"
        } else {
            "○"
        };
        options.push_line(Line::from(Span::styled(
            format!("{} {}. {}", marker, option.id, option.text.get(session.locale)),
            style,
        )));
        options.push_line(Line::from(""));
    }
    let options = Paragraph::new(options)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    draw_quiz_help(f, layout.help_area, session, &palette);
}

fn draw_quiz_help(f: &mut Frame, area: Rect, session: &QuizSession, palette: &Palette) {
    let disabled = Style::default().fg(palette.muted).add_modifier(Modifier::DIM);
    let nav = |enabled: bool, key: &'static str, label: &'static str| {
        if enabled {
            [Span::styled(key, palette.key()), Span::from(label)]
        } else {
            [Span::styled(key, disabled), Span::styled(label, disabled)]
        }
    };

    let mut first = Vec::new();
    first.extend(nav(session.can_go_previous(), "←", " Previous  "));
    first.extend(nav(session.can_go_next(), "→", " Next  "));
    first.extend([
        Span::styled("A-D/1-4", palette.key()),
        Span::from(" Select  "),
        Span::styled("Esc", palette.key()),
        Span::from(" Quit"),
    ]);

    let second = vec![
        Span::styled("Ctrl+F", palette.key()),
        Span::from(" Finish  "),
        Span::styled("Ctrl+L", palette.key()),
        Span::from(" Language  "),
        Span::styled("Ctrl+T", palette.key()),
        Span::from(" Theme  "),
        Span::styled("Ctrl+C", palette.key()),
        Span::from(" Exit App"),
    ];

    let help = Paragraph::new(vec![Line::from(first), Line::from(second)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn draw_confirmation(f: &mut Frame, theme: Theme, title: &str, message: &str, yes: &str, no: &str) {
    let palette = Palette::for_theme(theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    for chunk in chunks.iter() {
        f.render_widget(Clear, *chunk);
    }

    let title = Paragraph::new(title.to_string())
        .style(palette.base().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(message.to_string())
        .style(palette.base())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(palette.correct)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", yes)),
        Span::styled(
            "n",
            Style::default()
                .fg(palette.incorrect)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}", no)),
    ])];
    let help = Paragraph::new(help_text)
        .style(palette.base())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

pub fn draw_finish_confirmation(f: &mut Frame, session: &QuizSession) {
    let message = format!(
        "Submit now? {} of {} questions answered.",
        session.answered_count(),
        session.bank().len()
    );
    draw_confirmation(
        f,
        session.theme,
        "Finish Quiz",
        &message,
        "Yes (Show Results)",
        "No (Continue Quiz)",
    );
}

pub fn draw_quit_confirmation(f: &mut Frame, session: &QuizSession) {
    draw_confirmation(
        f,
        session.theme,
        "Quit",
        "Leave the quiz? Answers will not be scored.",
        "Yes (Exit)",
        "No (Continue Quiz)",
    );
}
