use crate::config::APP_TITLE;
use crate::models::QuizSession;
use crate::results::{present, review_rows, ResultSummary, Verdict};
use crate::ui::layout::calculate_summary_chunks;
use crate::ui::theme::Palette;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

fn draw_breakdown(f: &mut Frame, area: Rect, summary: &ResultSummary, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cells = [
        ("Correct", summary.rounded_correct(), summary.correct, palette.correct),
        (
            "Incorrect",
            summary.rounded_incorrect(),
            summary.incorrect,
            palette.incorrect,
        ),
        (
            "Unattempted",
            summary.rounded_unattempted(),
            summary.unattempted,
            palette.muted,
        ),
    ];

    for ((label, percent, count, color), column) in cells.into_iter().zip(columns.iter()) {
        let text = vec![
            Line::from(Span::styled(
                format!("{}%", percent),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(palette.muted))),
            Line::from(format!("({})", count)),
        ];
        let cell = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(cell, *column);
    }
}

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let Some(snapshot) = session.snapshot() else {
        return;
    };
    let summary = present(&snapshot);
    let palette = Palette::for_theme(session.theme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new(format!("{} - Quiz Complete!", APP_TITLE))
        .style(palette.title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score = Paragraph::new(format!("Your Score: {}/{}", summary.score, summary.total))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, layout.score_area);

    let percent = summary.rounded_correct();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Correct"))
        .gauge_style(Style::default().fg(palette.correct).bg(palette.progress_pending))
        .percent(percent)
        .label(format!("{}%", percent));
    f.render_widget(gauge, layout.gauge_area);

    draw_breakdown(f, layout.breakdown_area, &summary, &palette);

    let help_text = vec![Line::from(vec![
        Span::styled("a", palette.key()),
        Span::from(" Answers  "),
        Span::styled("Ctrl+L", palette.key()),
        Span::from(" Language  "),
        Span::styled("Ctrl+T", palette.key()),
        Span::from(" Theme  "),
        Span::styled("Esc", palette.key()),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}

pub fn draw_review(f: &mut Frame, session: &QuizSession) {
    let palette = Palette::for_theme(session.theme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Answers")
        .style(palette.title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let width = chunks[1].width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = review_rows(session.bank(), session.answers(), session.locale)
        .into_iter()
        .map(|row| {
            let color = match row.verdict {
                Verdict::Correct => palette.correct,
                Verdict::Incorrect => palette.incorrect,
                Verdict::Unattempted => palette.muted,
            };
            let selected = row.selected.as_deref().unwrap_or("-");
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:<12}", row.verdict.label()),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::from(format!(
                        "{}. {}",
                        row.number,
                        truncate_string(&row.prompt, width.saturating_sub(16))
                    )),
                ]),
                Line::from(format!(
                    "   Your Answer: {}",
                    truncate_string(selected, width.saturating_sub(16))
                )),
                Line::from(format!(
                    "   Correct:     {}",
                    truncate_string(&row.correct, width.saturating_sub(16))
                )),
                Line::from(""),
            ])
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    f.render_widget(list, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled("a/Esc", palette.key()),
        Span::from(" Back to Results  "),
        Span::styled("q", palette.key()),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
