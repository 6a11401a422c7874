//! Builtin demo pack - rope-work questions shipped with the binary
//!
//! Belay, lead, knot, and rappel questions so the game runs with no
//! pack file. All three kinds are represented, and the ordering
//! questions author their options out of answer order on purpose.

use crate::content::pack::LoadedPack;
use crate::core::question::{CorrectAnswer, Question, QuestionOption};
use crate::types::QuestionKind;

fn opt(id: &str, text: &str) -> QuestionOption {
    QuestionOption::new(id, text)
}

fn single(id: &str) -> CorrectAnswer {
    CorrectAnswer::Single(id.to_string())
}

fn sequence(ids: &[&str]) -> CorrectAnswer {
    CorrectAnswer::Sequence(ids.iter().map(|s| s.to_string()).collect())
}

/// The demo questions, in presentation order
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question {
            id: "belay-device".to_string(),
            kind: QuestionKind::Choice,
            category: Some("sport-belay".to_string()),
            difficulty: 1,
            prompt: "Which way does the rope run through the device?".to_string(),
            scenario: Some(
                "You are loading a tube-style device for a top-rope belay.".to_string(),
            ),
            options: vec![
                opt("a", "Climber strand on top, brake strand below"),
                opt("b", "Brake strand on top, climber strand below"),
                opt("c", "Either way, it makes no difference"),
                opt("d", "Depends on the rope diameter"),
            ],
            answer: single("a"),
            explanation: Some(
                "The device is shaped to put friction on the lower, brake-side strand. \
                 Loaded upside down it gives far less braking power in a fall."
                    .to_string(),
            ),
            hint: Some("Think about where the friction is generated.".to_string()),
            reference_sources: vec!["AMGA Single Pitch Instructor Manual".to_string()],
        },
        Question {
            id: "brake-hand".to_string(),
            kind: QuestionKind::Choice,
            category: Some("sport-belay".to_string()),
            difficulty: 1,
            prompt: "The belayer's brake hand should:".to_string(),
            scenario: None,
            options: vec![
                opt("a", "Stay above the device on the climber strand"),
                opt("b", "Stay on the brake strand at all times"),
                opt("c", "Rest wherever it is comfortable"),
                opt("d", "Grip the rope only when the climber falls"),
            ],
            answer: single("b"),
            explanation: Some(
                "The brake hand never leaves the brake strand. From the braking position \
                 you can arrest a fall instantly; an open or misplaced brake hand cannot."
                    .to_string(),
            ),
            hint: None,
            reference_sources: vec!["Climbing Anchors by John Long".to_string()],
        },
        Question {
            id: "pbus-stroke".to_string(),
            kind: QuestionKind::Ordering,
            category: Some("sport-belay".to_string()),
            difficulty: 2,
            prompt: "Put the top-rope take-in stroke in order:".to_string(),
            scenario: None,
            options: vec![
                opt("pull", "Pull rope in with the guide hand"),
                opt("slide", "Slide the brake hand back down to the device"),
                opt("brake", "Bring the brake strand down into the braking position"),
                opt("under", "Grip under the brake hand with the guide hand"),
            ],
            answer: sequence(&["pull", "brake", "under", "slide"]),
            explanation: Some(
                "PBUS: Pull, Brake, Under, Slide. The sequence keeps the brake hand \
                 wrapped around the rope through the whole stroke."
                    .to_string(),
            ),
            hint: Some("P-B-U-S".to_string()),
            reference_sources: vec!["Gym Climbing by Matt Burbach".to_string()],
        },
        Question {
            id: "take-call".to_string(),
            kind: QuestionKind::Situation,
            category: Some("sport-belay".to_string()),
            difficulty: 2,
            prompt: "As the belayer, you should:".to_string(),
            scenario: Some(
                "Mid-route, your climber suddenly shouts \"Take!\".".to_string(),
            ),
            options: vec![
                opt("a", "Pull in the slack and lock off immediately"),
                opt("b", "Pay out rope so they can lower"),
                opt("c", "Ask what is going on first"),
                opt("d", "Wait for their next instruction"),
            ],
            answer: single("a"),
            explanation: Some(
                "\"Take\" asks the belayer to take the climber's weight. Take in slack, \
                 drop into the braking position, and hold them so they can rest or \
                 assess."
                    .to_string(),
            ),
            hint: None,
            reference_sources: Vec::new(),
        },
        Question {
            id: "partner-check".to_string(),
            kind: QuestionKind::Choice,
            category: Some("sport-belay".to_string()),
            difficulty: 1,
            prompt: "Which of these is NOT part of the pre-climb partner check?".to_string(),
            scenario: None,
            options: vec![
                opt("a", "Both tie-in knots are correct"),
                opt("b", "The belay device is threaded correctly"),
                opt("c", "The climber's plan for the route"),
                opt("d", "The locking carabiner is locked"),
            ],
            answer: single("c"),
            explanation: Some(
                "The partner check covers knots, device, locked carabiners, and harness \
                 buckles. Route plans matter, but they are not a safety check item."
                    .to_string(),
            ),
            hint: None,
            reference_sources: vec!["UIAA Safety Standards".to_string()],
        },
        Question {
            id: "clip-direction".to_string(),
            kind: QuestionKind::Choice,
            category: Some("sport-lead".to_string()),
            difficulty: 2,
            prompt: "When clipping a quickdraw on lead, the rope should:".to_string(),
            scenario: None,
            options: vec![
                opt("a", "Run from the wall side out through the carabiner to you"),
                opt("b", "Run from your side in through the carabiner to the wall"),
                opt("c", "Run either way, both are safe"),
                opt("d", "Depend on the style of quickdraw"),
            ],
            answer: single("a"),
            explanation: Some(
                "A back-clipped rope crosses the gate and can unclip itself in a fall. \
                 The climber's strand must leave the carabiner on the side away from \
                 the rock."
                    .to_string(),
            ),
            hint: Some("The wrong way is called back-clipping.".to_string()),
            reference_sources: vec!["Freedom of the Hills".to_string()],
        },
        Question {
            id: "lead-slack".to_string(),
            kind: QuestionKind::Choice,
            category: Some("sport-lead".to_string()),
            difficulty: 2,
            prompt: "How much slack should a lead belayer keep in the system?".to_string(),
            scenario: None,
            options: vec![
                opt("a", "As little as possible, rope always tight"),
                opt("b", "As much as possible, total freedom"),
                opt("c", "A soft arc, adjusted as the climber moves"),
                opt("d", "A fixed amount that never changes"),
            ],
            answer: single("c"),
            explanation: Some(
                "A slight arc of slack lets the climber move and clip without being \
                 short-roped, while keeping fall distances reasonable. Both extremes \
                 are dangerous."
                    .to_string(),
            ),
            hint: None,
            reference_sources: Vec::new(),
        },
        Question {
            id: "steep-fall".to_string(),
            kind: QuestionKind::Situation,
            category: Some("sport-lead".to_string()),
            difficulty: 3,
            prompt: "What should you be ready to do?".to_string(),
            scenario: Some(
                "Your leader is well above the last bolt on steep ground and is \
                 starting to pump out."
                    .to_string(),
            ),
            options: vec![
                opt("a", "Reel in rope hard so the fall is short"),
                opt("b", "Feed out armfuls of extra rope"),
                opt("c", "Give a dynamic catch to soften the impact"),
                opt("d", "Stand directly below to spot them"),
            ],
            answer: single("c"),
            explanation: Some(
                "On steep ground a soft, dynamic catch keeps the climber away from the \
                 wall and lowers the peak force. Reeling in tight slams them into the \
                 rock."
                    .to_string(),
            ),
            hint: None,
            reference_sources: Vec::new(),
        },
        Question {
            id: "tie-in-knot".to_string(),
            kind: QuestionKind::Choice,
            category: Some("knots".to_string()),
            difficulty: 1,
            prompt: "The standard knot for tying the rope to your harness is:".to_string(),
            scenario: None,
            options: vec![
                opt("a", "Figure-eight follow-through"),
                opt("b", "Clove hitch"),
                opt("c", "Overhand on a bight"),
                opt("d", "Bowline with no backup"),
            ],
            answer: single("a"),
            explanation: Some(
                "The figure-eight follow-through is strong, easy to inspect, and stays \
                 tied when cycled. Hitches and unbacked bowlines are not tie-in knots."
                    .to_string(),
            ),
            hint: None,
            reference_sources: vec!["Freedom of the Hills".to_string()],
        },
        Question {
            id: "rappel-rig".to_string(),
            kind: QuestionKind::Ordering,
            category: Some("rappel".to_string()),
            difficulty: 3,
            prompt: "Order the steps for rigging a single-strand rappel:".to_string(),
            scenario: None,
            options: vec![
                opt("device", "Rig the extended rappel device"),
                opt("anchor", "Check the anchor and close the system"),
                opt("backup", "Add the friction-hitch backup and weight-test"),
                opt("thread", "Thread the rope and set the middle mark"),
            ],
            answer: sequence(&["anchor", "thread", "device", "backup"]),
            explanation: Some(
                "Anchor first, rope second, device third, backup and test before \
                 unclipping from the anchor."
                    .to_string(),
            ),
            hint: Some("Start from the thing everything else hangs on.".to_string()),
            reference_sources: vec!["AMGA Single Pitch Instructor Manual".to_string()],
        },
    ]
}

/// The demo pack with its display title
pub fn builtin_pack() -> LoadedPack {
    LoadedPack {
        title: "Rope-system practice".to_string(),
        category: None,
        questions: builtin_questions(),
    }
}
