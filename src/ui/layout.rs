use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub gauge_area: Rect,
    pub breakdown_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Percentage(60),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        question_area: chunks[2],
        options_area: chunks[3],
        help_area: chunks[4],
    }
}

/// Splits the progress strip into one segment per question.
pub fn calculate_progress_segments(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
    Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        gauge_area: chunks[2],
        breakdown_area: chunks[3],
        footer_area: chunks[4],
    }
}
