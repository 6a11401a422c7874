use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_ropequiz::content::{builtin_questions, load_pack};
use tui_ropequiz::core::{evaluate, GameSession, SubmittedAnswer};
use tui_ropequiz::types::{GameConfig, GameMode, ScoringRules};

const PACK_JSON: &str = r#"{
    "title": "Bench pack",
    "questions": [
        {
            "id": "q1",
            "type": "choice",
            "question": "Pick the brake strand",
            "options": [
                {"id": "a", "text": "Lower strand"},
                {"id": "b", "text": "Upper strand"}
            ],
            "correctAnswer": "a"
        },
        {
            "id": "q2",
            "type": "ordering",
            "question": "Order the stroke",
            "options": [
                {"id": "pull", "text": "Pull"},
                {"id": "slide", "text": "Slide"},
                {"id": "brake", "text": "Brake"},
                {"id": "under", "text": "Under"}
            ],
            "correctAnswer": ["pull", "brake", "under", "slide"]
        }
    ]
}"#;

fn bench_start_validation(c: &mut Criterion) {
    let questions = builtin_questions();

    c.bench_function("start_validates_builtin_pack", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            session
                .start(GameMode::Learn, black_box(questions.clone()), GameConfig::learn())
                .expect("start");
            black_box(session.question_count())
        })
    });
}

fn bench_grade_answer(c: &mut Criterion) {
    let questions = builtin_questions();
    let question = &questions[0];
    let submitted = SubmittedAnswer::Single("a".to_string());
    let rules = ScoringRules::default();

    c.bench_function("grade_single_answer", |b| {
        b.iter(|| evaluate(black_box(question), black_box(&submitted), 3, &rules))
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = GameSession::new();
    session
        .start(GameMode::Learn, builtin_questions(), GameConfig::learn())
        .expect("start");

    c.bench_function("session_tick_1s", |b| {
        b.iter(|| {
            session.tick(black_box(1));
        })
    });
}

fn bench_full_run(c: &mut Criterion) {
    let questions = builtin_questions();
    let answers: Vec<SubmittedAnswer> = questions
        .iter()
        .map(|q| match &q.answer {
            tui_ropequiz::core::CorrectAnswer::Single(id) => {
                SubmittedAnswer::Single(id.clone())
            }
            tui_ropequiz::core::CorrectAnswer::Sequence(ids) => {
                SubmittedAnswer::Sequence(ids.clone())
            }
        })
        .collect();

    c.bench_function("full_run_builtin_pack", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            session
                .start(GameMode::Exam, questions.clone(), GameConfig::learn())
                .expect("start");
            for submitted in &answers {
                session.submit_answer(submitted.clone()).expect("submit");
                session.next().expect("advance");
            }
            black_box(session.stats())
        })
    });
}

fn bench_stats_projection(c: &mut Criterion) {
    let mut session = GameSession::new();
    session
        .start(GameMode::Learn, builtin_questions(), GameConfig::learn())
        .expect("start");
    session
        .submit_answer(SubmittedAnswer::Single("a".to_string()))
        .expect("submit");

    c.bench_function("stats_projection", |b| b.iter(|| black_box(session.stats())));
}

fn bench_load_pack(c: &mut Criterion) {
    c.bench_function("load_pack_json", |b| {
        b.iter(|| load_pack(black_box(PACK_JSON)).expect("load"))
    });
}

criterion_group!(
    benches,
    bench_start_validation,
    bench_grade_answer,
    bench_session_tick,
    bench_full_run,
    bench_stats_projection,
    bench_load_pack
);
criterion_main!(benches);
