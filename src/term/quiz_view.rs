//! QuizView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Three screens share one entry point: a title screen before the
//! session starts, the question screen while playing (with a pause
//! overlay), and a summary screen once the run is complete.

use crate::core::question::{CorrectAnswer, Question, SubmittedAnswer};
use crate::core::session::{AnswerRecord, GameSession};
use crate::input::editor::AnswerEditor;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameMode, QuestionKind, TimerRule, MAX_DIFFICULTY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Margin between the screen edge and content, in columns.
const MARGIN: u16 = 2;

pub struct QuizView {
    pack_title: String,
}

impl QuizView {
    pub fn new(pack_title: impl Into<String>) -> Self {
        Self {
            pack_title: pack_title.into(),
        }
    }

    /// Render the session into a framebuffer.
    ///
    /// `editor` carries the in-progress answer for the current question
    /// and may be absent before the session has started.
    pub fn render(
        &self,
        session: &GameSession,
        editor: Option<&AnswerEditor>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        if !session.started() {
            self.draw_title_screen(&mut fb, session);
        } else if session.is_complete() {
            self.draw_summary_screen(&mut fb, session);
        } else {
            self.draw_question_screen(&mut fb, session, editor);
            if session.is_paused() {
                draw_pause_overlay(&mut fb);
            }
        }

        fb
    }

    fn draw_title_screen(&self, fb: &mut FrameBuffer, session: &GameSession) {
        let w = fb.width();
        let mid_y = fb.height() / 2;

        put_centered(fb, mid_y.saturating_sub(3), "ROPE QUIZ", title_style());
        put_centered(fb, mid_y.saturating_sub(1), &self.pack_title, dim_style());

        let mode = match session.mode() {
            GameMode::Learn => "learn mode",
            GameMode::Exam => "exam mode",
        };
        let timer = match session.config().timer {
            TimerRule::None => "no timer".to_string(),
            TimerRule::Global(secs) => format!("{}s total", secs),
            TimerRule::PerQuestion(secs) => format!("{}s per question", secs),
        };
        let line = format!(
            "{} · {} questions · {} lives · {}",
            mode,
            session.question_count(),
            session.config().lives,
            timer
        );
        put_centered(fb, mid_y + 1, &line, value_style());

        put_centered(fb, mid_y + 3, "enter start · q quit", dim_style());

        let rule_y = mid_y.saturating_sub(5);
        fb.fill_rect(w / 4, rule_y, w / 2, 1, '─', dim_style());
    }

    fn draw_question_screen(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        editor: Option<&AnswerEditor>,
    ) {
        let question = match session.current_question() {
            Some(q) => q,
            None => return,
        };
        let w = fb.width();
        let content_w = w.saturating_sub(MARGIN * 2);
        let right = w.saturating_sub(MARGIN);

        // Header: mode, category, difficulty on the left, progress on
        // the right.
        let mode = match session.mode() {
            GameMode::Learn => "LEARN",
            GameMode::Exam => "EXAM",
        };
        fb.put_str(MARGIN, 0, mode, badge_style());
        let mut x = MARGIN + mode.chars().count() as u16 + 2;
        if let Some(category) = &question.category {
            fb.put_str_clipped(x, 0, 24, category, dim_style());
            x += category.chars().count().min(24) as u16 + 2;
        }
        fb.put_str(x, 0, &difficulty_stars(question.difficulty), warn_style());

        let progress = format!(
            "Q {}/{}",
            session.current_index() + 1,
            session.question_count()
        );
        put_right(fb, right, 0, &progress, value_style());

        // Status: lives and timer left, score and combo right.
        fb.put_str(MARGIN, 1, &lives_markers(session.lives()), bad_style());
        if let Some(secs) = session.time_remaining() {
            let style = if secs <= 5 { warn_style() } else { value_style() };
            fb.put_str(MARGIN + 12, 1, &format!("TIME {}s", secs), style);
        }
        let combo_style = if session.combo() > 0 {
            accent_style()
        } else {
            dim_style()
        };
        let score = format!("SCORE {}", session.score());
        let combo = format!("COMBO x{}", session.combo());
        put_right(fb, right, 1, &combo, combo_style);
        put_right(
            fb,
            right.saturating_sub(combo.chars().count() as u16 + 2),
            1,
            &score,
            value_style(),
        );

        fb.fill_rect(0, 2, w, 1, '─', dim_style());

        let mut y: u16 = 3;
        if let Some(scenario) = &question.scenario {
            y += fb.put_str_wrapped(MARGIN, y, content_w, 4, scenario, dim_style());
            y += 1;
        }
        y += fb.put_str_wrapped(MARGIN, y, content_w, 4, &question.prompt, prompt_style());
        y += 1;

        let record = if session.is_answered() {
            session.results().last()
        } else {
            None
        };
        y = self.draw_options(fb, question, editor, record, y);
        y += 1;

        if let (Some(editor), None) = (editor, record) {
            if editor.hint_shown() {
                if let Some(hint) = &question.hint {
                    fb.put_str(MARGIN, y, "HINT", warn_badge_style());
                    y += 1;
                    y += fb.put_str_wrapped(MARGIN, y, content_w, 3, hint, warn_style());
                    y += 1;
                }
            }
        }

        if let Some(record) = record {
            self.draw_feedback(fb, session, question, record, y);
        }

        let footer = match (record.is_some(), question.kind) {
            (true, _) => "enter continue · q quit",
            (false, QuestionKind::Ordering) => {
                "↑/↓ move · space grab/drop · enter submit · h hint · p pause · q quit"
            }
            (false, _) => "↑/↓ select · 1-9 jump · enter submit · h hint · p pause · q quit",
        };
        fb.put_str_clipped(
            MARGIN,
            fb.height().saturating_sub(1),
            content_w,
            footer,
            dim_style(),
        );
    }

    /// Draw the answer rows. Returns the row below the list.
    fn draw_options(
        &self,
        fb: &mut FrameBuffer,
        question: &Question,
        editor: Option<&AnswerEditor>,
        record: Option<&AnswerRecord>,
        mut y: u16,
    ) -> u16 {
        let content_w = fb.width().saturating_sub(MARGIN * 2);
        let rows: Vec<usize> = match editor {
            Some(e) => e.rows().to_vec(),
            None => (0..question.options.len()).collect(),
        };
        let cursor = editor.map(|e| e.cursor());
        let grabbed = editor.map(|e| e.is_grabbed()).unwrap_or(false);

        for (row, &opt_idx) in rows.iter().enumerate() {
            if y >= fb.height() {
                break;
            }
            let option = match question.options.get(opt_idx) {
                Some(o) => o,
                None => continue,
            };

            let at_cursor = cursor == Some(row) && record.is_none();
            let (marker, marker_style) = match record {
                Some(record) => row_mark(question, record, row, &option.id),
                None if at_cursor => ('▸', accent_style()),
                None => (' ', value_style()),
            };

            let mut text_style = match marker {
                '✓' => good_style(),
                '✗' => bad_style(),
                _ if at_cursor => highlight_style(),
                _ => value_style(),
            };
            if at_cursor && grabbed {
                text_style.underline = true;
            }

            fb.put_char(MARGIN, y, marker, marker_style);
            let label = format!("{}.", row + 1);
            fb.put_str(MARGIN + 2, y, &label, dim_style());
            let text_x = MARGIN + 2 + label.chars().count() as u16 + 1;
            let text = match &option.image_ref {
                Some(_) => format!("{} [fig]", option.text),
                None => option.text.clone(),
            };
            fb.put_str_clipped(
                text_x,
                y,
                content_w.saturating_sub(text_x - MARGIN),
                &text,
                text_style,
            );
            y = y.saturating_add(1);
        }
        y
    }

    /// Verdict line plus, in learn mode, the explanation block.
    fn draw_feedback(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        question: &Question,
        record: &AnswerRecord,
        mut y: u16,
    ) {
        let content_w = fb.width().saturating_sub(MARGIN * 2);

        if record.is_correct {
            let line = format!("CORRECT  +{}", record.score_delta);
            fb.put_str(MARGIN, y, &line, good_badge_style());
        } else if record.submitted.is_blank() {
            fb.put_str(MARGIN, y, "TIME UP", warn_badge_style());
        } else {
            fb.put_str(MARGIN, y, "WRONG", bad_badge_style());
        }
        y += 2;

        if session.show_explanation() {
            if let Some(explanation) = &question.explanation {
                y += fb.put_str_wrapped(MARGIN, y, content_w, 5, explanation, value_style());
            }
            if !question.reference_sources.is_empty() {
                let refs = format!("see: {}", question.reference_sources.join(", "));
                fb.put_str_wrapped(MARGIN, y, content_w, 2, &refs, dim_style());
            }
        }
    }

    fn draw_summary_screen(&self, fb: &mut FrameBuffer, session: &GameSession) {
        let stats = session.stats();
        let w = fb.width();
        let content_w = w.saturating_sub(MARGIN * 2);

        let (headline, style) = if session.lives() == 0 {
            ("OUT OF LIVES", bad_badge_style())
        } else {
            ("PRACTICE COMPLETE", good_badge_style())
        };
        put_centered(fb, 1, headline, style);
        put_centered(fb, 2, &self.pack_title, dim_style());
        fb.fill_rect(0, 3, w, 1, '─', dim_style());

        let mut y: u16 = 5;
        let pairs = [
            ("SCORE", format!("{}", stats.score)),
            (
                "CORRECT",
                format!("{}/{}", stats.correct_count, session.question_count()),
            ),
            ("MAX COMBO", format!("x{}", stats.max_combo)),
            ("TIME", format!("{}s", stats.time_spent_secs)),
        ];
        for (label, value) in &pairs {
            fb.put_str(MARGIN, y, label, dim_style());
            fb.put_str(MARGIN + 11, y, value, prompt_style());
            y += 1;
        }
        y += 1;

        for record in session.results() {
            if y >= fb.height().saturating_sub(2) {
                break;
            }
            let (mark, style) = if record.is_correct {
                ('✓', good_style())
            } else {
                ('✗', bad_style())
            };
            fb.put_char(MARGIN, y, mark, style);
            let prompt = session
                .question_by_id(&record.question_id)
                .map(|q| q.prompt.as_str())
                .unwrap_or(record.question_id.as_str());
            fb.put_str_clipped(MARGIN + 2, y, content_w.saturating_sub(2), prompt, style);
            y += 1;
        }

        fb.put_str(
            MARGIN,
            fb.height().saturating_sub(1),
            "r restart · q quit",
            dim_style(),
        );
    }
}

/// Per-row verdict mark once the question is answered.
///
/// Choice rows mark the correct option and a wrong pick. Ordering rows
/// are compared position by position against the expected sequence; a
/// blank (timed out) submission marks nothing.
fn row_mark(
    question: &Question,
    record: &AnswerRecord,
    row: usize,
    option_id: &str,
) -> (char, CellStyle) {
    match (&question.answer, &record.submitted) {
        (CorrectAnswer::Single(expected), submitted) => {
            if option_id == expected {
                ('✓', good_style())
            } else if matches!(submitted, SubmittedAnswer::Single(picked) if picked == option_id) {
                ('✗', bad_style())
            } else {
                (' ', value_style())
            }
        }
        (CorrectAnswer::Sequence(expected), SubmittedAnswer::Sequence(submitted)) => {
            match (expected.get(row), submitted.get(row)) {
                (Some(a), Some(b)) if a == b => ('✓', good_style()),
                (Some(_), Some(_)) => ('✗', bad_style()),
                _ => (' ', value_style()),
            }
        }
        _ => (' ', value_style()),
    }
}

fn draw_pause_overlay(fb: &mut FrameBuffer) {
    let w = fb.width();
    let h = fb.height();
    let box_w = 24.min(w);
    let box_h = 3;
    let x = w.saturating_sub(box_w) / 2;
    let y = h.saturating_sub(box_h) / 2;

    fb.fill_rect(x, y, box_w, box_h, ' ', overlay_style());
    put_centered(fb, y + 1, "PAUSED · p resume", overlay_style());
}

fn difficulty_stars(difficulty: u8) -> String {
    let mut stars = String::new();
    for i in 0..MAX_DIFFICULTY {
        stars.push(if i < difficulty { '★' } else { '☆' });
    }
    stars
}

fn lives_markers(lives: u32) -> String {
    if lives == 0 {
        "∅".to_string()
    } else if lives <= 8 {
        let mut s = String::new();
        for i in 0..lives {
            if i > 0 {
                s.push(' ');
            }
            s.push('♥');
        }
        s
    } else {
        format!("♥ x{}", lives)
    }
}

fn put_centered(fb: &mut FrameBuffer, y: u16, s: &str, style: CellStyle) {
    let len = s.chars().count() as u16;
    let x = fb.width().saturating_sub(len) / 2;
    fb.put_str(x, y, s, style);
}

fn put_right(fb: &mut FrameBuffer, right_x: u16, y: u16, s: &str, style: CellStyle) {
    let len = s.chars().count() as u16;
    fb.put_str(right_x.saturating_sub(len), y, s, style);
}

fn value_style() -> CellStyle {
    CellStyle::default()
}

fn dim_style() -> CellStyle {
    CellStyle {
        dim: true,
        ..CellStyle::default()
    }
}

fn prompt_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::default()
    }
}

fn title_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(120, 180, 240),
        bold: true,
        ..CellStyle::default()
    }
}

fn badge_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(0, 0, 0),
        bg: Rgb::new(120, 180, 240),
        bold: true,
        ..CellStyle::default()
    }
}

fn accent_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(120, 180, 240),
        ..CellStyle::default()
    }
}

fn highlight_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bold: true,
        ..CellStyle::default()
    }
}

fn good_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(100, 220, 120),
        ..CellStyle::default()
    }
}

fn good_badge_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..good_style()
    }
}

fn bad_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(220, 80, 80),
        ..CellStyle::default()
    }
}

fn bad_badge_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..bad_style()
    }
}

fn warn_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(240, 220, 80),
        ..CellStyle::default()
    }
}

fn warn_badge_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..warn_style()
    }
}

fn overlay_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(60, 60, 80),
        bold: true,
        ..CellStyle::default()
    }
}
