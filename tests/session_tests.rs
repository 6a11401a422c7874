//! Integration tests for the session state machine

use tui_ropequiz::core::{
    CorrectAnswer, GameSession, Question, QuestionOption, SessionError, StartError, SubmittedAnswer,
};
use tui_ropequiz::types::{GameConfig, GameMode, QuestionKind, TimerRule};

fn choice(id: &str) -> Question {
    Question {
        id: id.to_string(),
        kind: QuestionKind::Choice,
        category: Some("belay".to_string()),
        difficulty: 1,
        prompt: format!("prompt {id}"),
        scenario: None,
        options: vec![
            QuestionOption::new("a", "A"),
            QuestionOption::new("b", "B"),
            QuestionOption::new("c", "C"),
        ],
        answer: CorrectAnswer::Single("a".to_string()),
        explanation: Some("a is right".to_string()),
        hint: None,
        reference_sources: Vec::new(),
    }
}

fn ordering(id: &str) -> Question {
    Question {
        id: id.to_string(),
        kind: QuestionKind::Ordering,
        category: None,
        difficulty: 2,
        prompt: format!("order {id}"),
        scenario: None,
        options: vec![
            QuestionOption::new("one", "First"),
            QuestionOption::new("two", "Second"),
            QuestionOption::new("three", "Third"),
        ],
        answer: CorrectAnswer::Sequence(vec![
            "one".to_string(),
            "two".to_string(),
            "three".to_string(),
        ]),
        explanation: None,
        hint: None,
        reference_sources: Vec::new(),
    }
}

fn choices(n: usize) -> Vec<Question> {
    (0..n).map(|i| choice(&format!("q{i}"))).collect()
}

fn single(id: &str) -> SubmittedAnswer {
    SubmittedAnswer::Single(id.to_string())
}

fn sequence(ids: &[&str]) -> SubmittedAnswer {
    SubmittedAnswer::Sequence(ids.iter().map(|s| s.to_string()).collect())
}

fn started(questions: Vec<Question>, config: GameConfig) -> GameSession {
    let mut session = GameSession::new();
    session
        .start(GameMode::Learn, questions, config)
        .expect("start");
    session
}

#[test]
fn test_fresh_session_is_idle_and_zeroed() {
    let session = GameSession::new();
    assert!(!session.started());
    assert!(!session.is_complete());
    assert_eq!(session.score(), 0);
    assert_eq!(session.combo(), 0);
    assert!(session.results().is_empty());
    assert!(session.current_question().is_none());
    assert_eq!(session.stats().total_answered, 0);
}

#[test]
fn test_start_loads_config_and_first_question() {
    let session = started(choices(4), GameConfig::learn());
    assert!(session.started());
    assert_eq!(session.score(), 0);
    assert_eq!(session.lives(), GameConfig::learn().lives);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.question_count(), 4);
    assert_eq!(session.time_remaining(), None);
    assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("q0"));
}

#[test]
fn test_lifecycle_guards_report_precise_errors() {
    let mut session = GameSession::new();
    assert_eq!(session.submit_answer(single("a")), Err(SessionError::NotStarted));
    assert_eq!(session.next(), Err(SessionError::NotStarted));

    session
        .start(GameMode::Learn, choices(1), GameConfig::learn())
        .expect("start");
    assert_eq!(session.next(), Err(SessionError::NotYetAnswered));

    session.submit_answer(single("a")).expect("submit");
    session.next().expect("advance");
    assert!(session.is_complete());
    assert_eq!(
        session.submit_answer(single("a")),
        Err(SessionError::SessionComplete)
    );
}

#[test]
fn test_resubmission_is_rejected_without_side_effects() {
    let mut session = started(choices(2), GameConfig::learn());
    session.submit_answer(single("a")).expect("submit");
    let score = session.score();
    let lives = session.lives();

    assert_eq!(
        session.submit_answer(single("b")),
        Err(SessionError::AlreadyAnswered)
    );
    assert_eq!(session.score(), score);
    assert_eq!(session.lives(), lives);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn test_score_is_monotonic_and_lives_never_grow() {
    let mut session = started(choices(6), GameConfig::learn());
    let answers = ["a", "b", "a", "a", "b", "a"];

    let mut last_score = 0;
    let mut last_lives = session.lives();
    for answer in answers {
        session.submit_answer(single(answer)).expect("submit");
        assert!(session.score() >= last_score);
        assert!(session.lives() <= last_lives);
        last_score = session.score();
        last_lives = session.lives();
        if session.is_complete() {
            break;
        }
        session.next().expect("advance");
    }
}

#[test]
fn test_combo_grows_on_streaks_and_resets_on_miss() {
    let mut session = started(choices(5), GameConfig::learn());

    let first = session.submit_answer(single("a")).expect("submit");
    assert_eq!(first.combo, 1);
    session.next().expect("advance");

    let second = session.submit_answer(single("a")).expect("submit");
    assert_eq!(second.combo, 2);
    session.next().expect("advance");

    let miss = session.submit_answer(single("c")).expect("submit");
    assert!(!miss.is_correct);
    assert_eq!(miss.combo, 0);
    assert_eq!(miss.score_delta, 0);
    session.next().expect("advance");

    let again = session.submit_answer(single("a")).expect("submit");
    assert_eq!(again.combo, 1);
    assert_eq!(session.max_combo(), 2);
}

#[test]
fn test_combo_bonus_plateaus_at_the_cap() {
    let mut session = started(choices(7), GameConfig::learn());
    let mut deltas = Vec::new();
    for _ in 0..7 {
        let outcome = session.submit_answer(single("a")).expect("submit");
        deltas.push(outcome.score_delta);
        session.next().expect("advance");
    }
    assert_eq!(deltas, vec![120, 140, 160, 180, 200, 200, 200]);
    assert_eq!(session.max_combo(), 7);
    assert!(session.is_complete());
}

#[test]
fn test_ordering_is_all_or_nothing() {
    let mut session = started(vec![ordering("r1"), ordering("r2")], GameConfig::learn());

    let near_miss = session
        .submit_answer(sequence(&["one", "three", "two"]))
        .expect("submit");
    assert!(!near_miss.is_correct);
    assert_eq!(near_miss.score_delta, 0);
    assert_eq!(session.lives(), GameConfig::learn().lives - 1);
    session.next().expect("advance");

    let exact = session
        .submit_answer(sequence(&["one", "two", "three"]))
        .expect("submit");
    assert!(exact.is_correct);
    assert_eq!(exact.score_delta, 120);
}

#[test]
fn test_shape_mismatch_and_blank_grade_as_wrong() {
    let mut session = started(choices(3), GameConfig::learn());

    let mismatched = session
        .submit_answer(sequence(&["a", "b", "c"]))
        .expect("submit");
    assert!(!mismatched.is_correct);
    session.next().expect("advance");

    let blank = session.submit_answer(SubmittedAnswer::Blank).expect("submit");
    assert!(!blank.is_correct);
    assert_eq!(session.lives(), GameConfig::learn().lives - 2);
}

#[test]
fn test_completion_by_exhausting_questions() {
    let mut session = started(choices(2), GameConfig::learn());
    for _ in 0..2 {
        assert!(!session.is_complete());
        session.submit_answer(single("a")).expect("submit");
        session.next().expect("advance");
    }
    assert!(session.is_complete());
    assert!(session.current_question().is_none());
}

#[test]
fn test_losing_all_lives_completes_early() {
    let mut session = started(choices(5), GameConfig::learn());

    session.submit_answer(single("b")).expect("submit");
    session.next().expect("advance");
    session.submit_answer(single("b")).expect("submit");
    session.next().expect("advance");
    let last = session.submit_answer(single("b")).expect("submit");

    assert_eq!(last.lives, 0);
    assert!(session.is_complete());
    assert_eq!(session.results().len(), 3);

    let stats = session.stats();
    assert_eq!(stats.correct_count, 0);
    assert_eq!(stats.wrong_count, 3);
    assert_eq!(stats.score, 0);
}

#[test]
fn test_per_question_timeout_forces_blank_wrong_answer() {
    let mut config = GameConfig::learn();
    config.timer = TimerRule::PerQuestion(2);
    let mut session = started(choices(2), config);

    assert_eq!(session.tick(1), None);
    assert_eq!(session.time_remaining(), Some(1));

    let outcome = session.tick(1).expect("timeout outcome");
    assert!(outcome.timed_out);
    assert!(!outcome.is_correct);
    assert_eq!(outcome.lives, GameConfig::learn().lives - 1);
    assert!(session.is_answered());

    let record = session.results().last().expect("record");
    assert_eq!(record.submitted, SubmittedAnswer::Blank);
    assert_eq!(record.answered_at_secs, 2);
}

#[test]
fn test_per_question_timer_reloads_on_advance() {
    let mut config = GameConfig::learn();
    config.timer = TimerRule::PerQuestion(30);
    let mut session = started(choices(2), config);

    session.tick(4);
    assert_eq!(session.time_remaining(), Some(26));
    session.submit_answer(single("a")).expect("submit");
    session.next().expect("advance");
    assert_eq!(session.time_remaining(), Some(30));
}

#[test]
fn test_global_timer_carries_across_questions() {
    let mut config = GameConfig::learn();
    config.timer = TimerRule::Global(50);
    let mut session = started(choices(2), config);

    session.tick(3);
    session.submit_answer(single("a")).expect("submit");
    session.next().expect("advance");
    assert_eq!(session.time_remaining(), Some(47));
}

#[test]
fn test_spent_global_timer_fails_each_question_as_it_comes_up() {
    let mut config = GameConfig::learn();
    config.timer = TimerRule::Global(1);
    let mut session = started(choices(3), config);

    let first = session.tick(1).expect("first timeout");
    assert!(first.timed_out);
    assert_eq!(session.time_remaining(), Some(0));

    session.next().expect("advance");
    let second = session.tick(1).expect("second timeout");
    assert!(second.timed_out);
    assert_eq!(second.lives, GameConfig::learn().lives - 2);
}

#[test]
fn test_ticks_are_ignored_while_paused_answered_or_idle() {
    let mut idle = GameSession::new();
    assert_eq!(idle.tick(5), None);

    let mut config = GameConfig::learn();
    config.timer = TimerRule::PerQuestion(10);
    let mut session = started(choices(2), config);

    assert!(session.toggle_pause());
    assert_eq!(session.tick(5), None);
    assert_eq!(session.time_remaining(), Some(10));
    assert_eq!(session.elapsed_secs(), 0);
    assert!(session.toggle_pause());

    session.submit_answer(single("a")).expect("submit");
    assert_eq!(session.tick(5), None);
    assert_eq!(session.time_remaining(), Some(10));
}

#[test]
fn test_restart_discards_the_previous_run() {
    let mut session = started(choices(3), GameConfig::learn());
    session.submit_answer(single("a")).expect("submit");
    session.next().expect("advance");
    assert!(session.score() > 0);

    session
        .start(GameMode::Exam, choices(3), GameConfig::exam())
        .expect("restart");
    assert_eq!(session.mode(), GameMode::Exam);
    assert_eq!(session.score(), 0);
    assert_eq!(session.combo(), 0);
    assert_eq!(session.current_index(), 0);
    assert!(session.results().is_empty());

    session.reset();
    assert!(!session.started());
    assert_eq!(session.question_count(), 0);
}

#[test]
fn test_invalid_set_is_rejected_and_prior_run_kept() {
    let mut session = started(choices(2), GameConfig::learn());
    session.submit_answer(single("a")).expect("submit");
    let score = session.score();

    let mut bad = choice("dup");
    bad.options = vec![QuestionOption::new("x", "X"), QuestionOption::new("x", "Y")];
    bad.answer = CorrectAnswer::Single("x".to_string());

    let err = session
        .start(GameMode::Learn, vec![choice("ok"), bad], GameConfig::learn())
        .expect_err("invalid set");
    assert!(matches!(err, StartError::InvalidQuestionSet { index: 1, .. }));

    // The failed start left the old run playable.
    assert_eq!(session.score(), score);
    assert!(session.is_answered());
    assert_eq!(session.next(), Ok(()));
}

#[test]
fn test_empty_set_is_rejected() {
    let mut session = GameSession::new();
    let err = session
        .start(GameMode::Learn, Vec::new(), GameConfig::learn())
        .expect_err("empty set");
    assert_eq!(err, StartError::EmptyQuestionSet);
    assert!(!session.started());
}

#[test]
fn test_three_correct_answers_total_420() {
    let mut session = started(choices(3), GameConfig::learn());
    let mut total = 0;
    for _ in 0..3 {
        let outcome = session.submit_answer(single("a")).expect("submit");
        assert!(outcome.is_correct);
        total += outcome.score_delta;
        session.next().expect("advance");
    }

    assert_eq!(total, 420);
    assert_eq!(session.score(), 420);
    assert_eq!(session.max_combo(), 3);
    assert!(session.is_complete());

    let stats = session.stats();
    assert_eq!(stats.correct_count, 3);
    assert_eq!(stats.wrong_count, 0);
    assert_eq!(stats.total_answered, 3);
}

#[test]
fn test_show_explanation_only_in_learn_mode_after_answering() {
    let mut learn = started(choices(1), GameConfig::learn());
    assert!(!learn.show_explanation());
    learn.submit_answer(single("a")).expect("submit");
    assert!(learn.show_explanation());

    let mut exam = GameSession::new();
    exam.start(GameMode::Exam, choices(1), GameConfig::exam())
        .expect("start");
    exam.submit_answer(single("a")).expect("submit");
    assert!(!exam.show_explanation());
}
