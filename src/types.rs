//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Scoring defaults
pub const BASE_POINTS: u32 = 100;
pub const COMBO_BONUS_PER_STEP: u32 = 20;
pub const COMBO_CAP: u32 = 5;

/// Session defaults
pub const DEFAULT_LIVES: u32 = 3;
pub const DEFAULT_EXAM_TIME_SECS: u32 = 30;

/// Difficulty bounds (display metadata, never read by scoring)
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 3;

/// Play modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Learn,
    Exam,
}

impl GameMode {
    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "learn" => Some(GameMode::Learn),
            "exam" => Some(GameMode::Exam),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Learn => "learn",
            GameMode::Exam => "exam",
        }
    }
}

/// Question kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Choice,
    Ordering,
    Situation,
}

impl QuestionKind {
    /// Parse kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "choice" => Some(QuestionKind::Choice),
            "ordering" => Some(QuestionKind::Ordering),
            "situation" => Some(QuestionKind::Situation),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Choice => "choice",
            QuestionKind::Ordering => "ordering",
            QuestionKind::Situation => "situation",
        }
    }

    /// Whether the correct answer is a full sequence of option ids
    /// (otherwise a single option id)
    pub fn expects_sequence(&self) -> bool {
        matches!(self, QuestionKind::Ordering)
    }
}

/// Countdown behavior for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRule {
    None,
    Global(u32),
    PerQuestion(u32),
}

impl TimerRule {
    /// Countdown loaded at session start
    pub fn initial_secs(&self) -> Option<u32> {
        match self {
            TimerRule::None => None,
            TimerRule::Global(secs) => Some(*secs),
            TimerRule::PerQuestion(secs) => Some(*secs),
        }
    }

    /// Countdown reloaded when advancing to the next question
    pub fn reload_secs(&self) -> Option<u32> {
        match self {
            TimerRule::PerQuestion(secs) => Some(*secs),
            _ => None,
        }
    }
}

/// Score tuning for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub base_points: u32,
    pub combo_bonus_per_step: u32,
    pub combo_cap: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules {
            base_points: BASE_POINTS,
            combo_bonus_per_step: COMBO_BONUS_PER_STEP,
            combo_cap: COMBO_CAP,
        }
    }
}

/// Full configuration captured by a session at start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub lives: u32,
    pub scoring: ScoringRules,
    pub timer: TimerRule,
}

impl GameConfig {
    /// Relaxed defaults: no timer, explanations shown by the host
    pub fn learn() -> Self {
        GameConfig {
            lives: DEFAULT_LIVES,
            scoring: ScoringRules::default(),
            timer: TimerRule::None,
        }
    }

    /// Strict defaults: per-question countdown
    pub fn exam() -> Self {
        GameConfig {
            lives: DEFAULT_LIVES,
            scoring: ScoringRules::default(),
            timer: TimerRule::PerQuestion(DEFAULT_EXAM_TIME_SECS),
        }
    }

    /// Defaults matching the given mode
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Learn => GameConfig::learn(),
            GameMode::Exam => GameConfig::exam(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::learn()
    }
}
