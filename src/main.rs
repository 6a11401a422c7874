//! Terminal quiz runner (default binary).
//!
//! Wires the pure session core to crossterm input and the framebuffer
//! renderer. The terminal is always restored before any error or the
//! session report is printed.

use std::fs;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use tui_ropequiz::content::{builtin_pack, load_pack, LoadedPack, SessionReport};
use tui_ropequiz::core::{GameSession, Question};
use tui_ropequiz::input::{handle_key_event, should_quit, AnswerEditor, ShuffleRng, UiAction};
use tui_ropequiz::term::{QuizView, TerminalRenderer, Viewport};
use tui_ropequiz::types::{GameConfig, GameMode, TimerRule};

const USAGE: &str =
    "usage: tui-ropequiz [--pack FILE] [--mode learn|exam] [--report FILE] [--seed N] [--lives N] [--time SECS]";

/// Events drained per frame before redrawing.
const EVENT_BATCH: usize = 32;

struct CliOptions {
    pack_path: Option<String>,
    mode: GameMode,
    report_path: Option<String>,
    seed: Option<u32>,
    lives: Option<u32>,
    time_secs: Option<u32>,
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut opts = CliOptions {
        pack_path: None,
        mode: GameMode::Learn,
        report_path: None,
        seed: None,
        lives: None,
        time_secs: None,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--pack" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pack"))?;
                opts.pack_path = Some(v.clone());
            }
            "--mode" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --mode"))?;
                opts.mode = GameMode::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --mode value: {} (learn or exam)", v))?;
            }
            "--report" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --report"))?;
                opts.report_path = Some(v.clone());
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                opts.seed = Some(seed);
            }
            "--lives" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --lives"))?;
                let lives = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --lives value: {}", v))?;
                opts.lives = Some(lives);
            }
            "--time" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --time"))?;
                let secs = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --time value: {}", v))?;
                opts.time_secs = Some(secs);
            }
            other => {
                return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }

    Ok(opts)
}

fn load_questions(opts: &CliOptions) -> Result<LoadedPack> {
    match &opts.pack_path {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("read pack {}", path))?;
            load_pack(&text).with_context(|| format!("load pack {}", path))
        }
        None => Ok(builtin_pack()),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }
    let opts = parse_args(&args)?;

    let pack = load_questions(&opts)?;

    let mut config = GameConfig::for_mode(opts.mode);
    if let Some(lives) = opts.lives {
        config.lives = lives;
    }
    if let Some(secs) = opts.time_secs {
        config.timer = if secs == 0 {
            TimerRule::None
        } else {
            TimerRule::PerQuestion(secs)
        };
    }

    let seed = opts.seed.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &pack, opts.mode, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();

    let session = result?;
    if let Some(path) = &opts.report_path {
        let report = SessionReport::from_session(&pack.title, &session);
        let json = report
            .to_json_pretty()
            .context("serialize session report")?;
        fs::write(path, json + "\n").with_context(|| format!("write report {}", path))?;
    }
    if session.started() {
        let stats = session.stats();
        println!(
            "{}: score {} · {}/{} correct · max combo x{}",
            pack.title,
            stats.score,
            stats.correct_count,
            session.question_count(),
            stats.max_combo
        );
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    pack: &LoadedPack,
    mode: GameMode,
    config: GameConfig,
    seed: u32,
) -> Result<GameSession> {
    let mut app = App::new(pack, mode, config, seed);
    let view = QuizView::new(pack.title.clone());

    let tick_duration = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut frame = view.render(&app.session, app.editor.as_ref(), Viewport::new(w, h));
        term.draw_swap(&mut frame)?;

        // Input with timeout until the next whole-second tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let mut actions: ArrayVec<UiAction, EVENT_BATCH> = ArrayVec::new();
            loop {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(app.session);
                        }
                        if let Some(action) = handle_key_event(key) {
                            if actions.try_push(action).is_err() {
                                break;
                            }
                        }
                    }
                    Event::Resize(_, _) => term.invalidate(),
                    _ => {}
                }
                if !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
            for action in actions {
                app.handle(action)?;
            }
        }

        // Tick once per elapsed second; the session ignores ticks while
        // idle, paused, answered, or complete.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.session.tick(1);
        }
    }
}

/// Everything the event loop mutates: the session, the answer editor
/// for the current question, and the shuffle rng that seeds editors.
struct App {
    session: GameSession,
    editor: Option<AnswerEditor>,
    rng: ShuffleRng,
    questions: Vec<Question>,
    mode: GameMode,
    config: GameConfig,
}

impl App {
    fn new(pack: &LoadedPack, mode: GameMode, config: GameConfig, seed: u32) -> Self {
        Self {
            session: GameSession::new(),
            editor: None,
            rng: ShuffleRng::new(seed),
            questions: pack.questions.clone(),
            mode,
            config,
        }
    }

    fn handle(&mut self, action: UiAction) -> Result<()> {
        match action {
            UiAction::Confirm => self.confirm(),
            UiAction::Pause => {
                self.session.toggle_pause();
                Ok(())
            }
            UiAction::Restart => {
                if self.session.started() {
                    self.begin()?;
                }
                Ok(())
            }
            editing => {
                if !self.session.is_paused() && !self.session.is_answered() {
                    if let Some(editor) = &mut self.editor {
                        editor.apply(editing);
                    }
                }
                Ok(())
            }
        }
    }

    /// Enter: start the session, submit the current answer, or advance
    /// past the feedback screen, depending on where we are.
    fn confirm(&mut self) -> Result<()> {
        if !self.session.started() {
            return self.begin();
        }
        if self.session.is_complete() || self.session.is_paused() {
            return Ok(());
        }
        if self.session.is_answered() {
            self.session.next()?;
            self.rebuild_editor();
            return Ok(());
        }

        let submitted = match (&self.editor, self.session.current_question()) {
            (Some(editor), Some(question)) => editor.submission(question),
            _ => return Ok(()),
        };
        self.session.submit_answer(submitted)?;
        Ok(())
    }

    fn begin(&mut self) -> Result<()> {
        self.session
            .start(self.mode, self.questions.clone(), self.config)?;
        self.rebuild_editor();
        Ok(())
    }

    fn rebuild_editor(&mut self) {
        self.editor = self
            .session
            .current_question()
            .map(|q| AnswerEditor::for_question(q, &mut self.rng));
    }
}

fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
