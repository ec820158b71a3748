use std::collections::HashMap;

use proptest::prelude::*;
use quiz_core::RandomSource;
use quiz_core::model::{Advance, Chapter, ChapterId, QuestionBank, QuestionDraft, create_session};
use quiz_core::random::fixed_rng;

fn chapter(questions: usize, options: usize) -> Chapter {
    let questions = (0..questions)
        .map(|q| {
            let opts: Vec<String> = (0..options).map(|o| format!("q{q}-opt{o}")).collect();
            let answer = opts.first().cloned().unwrap_or_else(|| format!("answer {q}"));
            QuestionDraft {
                prompt: format!("Question {q}"),
                options: (!opts.is_empty()).then_some(opts),
                correct_answer: Some(answer),
            }
            .validate()
            .unwrap()
        })
        .collect();
    Chapter::new("Uttarakhand Rivers and Lakes", questions)
}

fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort();
    out
}

proptest! {
    #[test]
    fn session_is_a_permutation_of_the_chapter(
        seed in any::<u64>(),
        questions in 0usize..12,
        options in 0usize..6,
    ) {
        let source = chapter(questions, options);
        let bank = QuestionBank::new(vec![source.clone()]);
        let mut rng = RandomSource::seeded(seed).rng();
        let session = create_session(source.id(), &bank, &mut rng).unwrap();

        prop_assert_eq!(session.len(), source.questions().len());

        let mut shown: Vec<&str> = session.questions().iter().map(|q| q.prompt()).collect();
        let mut expected: Vec<&str> = source.questions().iter().map(|q| q.prompt()).collect();
        shown.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(shown, expected);

        for q in session.questions() {
            let original = source
                .questions()
                .iter()
                .find(|o| o.prompt() == q.prompt())
                .unwrap();
            prop_assert_eq!(sorted(q.options()), sorted(original.options()));
            prop_assert_eq!(q.correct_answer(), original.correct_answer());
        }
    }
}

#[test]
fn question_positions_are_uniform() {
    const RUNS: usize = 6_000;
    let source = chapter(3, 3);
    let mut rng = fixed_rng();
    let mut counts: HashMap<usize, usize> = HashMap::new();

    for _ in 0..RUNS {
        let session = quiz_core::model::Session::from_chapter(&source, &mut rng);
        let index = session
            .questions()
            .iter()
            .position(|q| q.prompt() == "Question 0")
            .unwrap();
        *counts.entry(index).or_default() += 1;
    }

    let expected = RUNS / 3;
    for index in 0..3 {
        let seen = counts.get(&index).copied().unwrap_or_default();
        assert!(
            seen.abs_diff(expected) < expected / 10,
            "position {index} seen {seen} times, expected about {expected}"
        );
    }
}

#[test]
fn option_positions_are_uniform() {
    const RUNS: usize = 8_000;
    let source = chapter(1, 4);
    let mut rng = fixed_rng();
    let mut counts = [0_usize; 4];

    for _ in 0..RUNS {
        let session = quiz_core::model::Session::from_chapter(&source, &mut rng);
        let q = session.current_question().unwrap();
        let index = q
            .options()
            .iter()
            .position(|o| o == q.correct_answer())
            .unwrap();
        counts[index] += 1;
    }

    let expected = RUNS / 4;
    for (index, seen) in counts.iter().enumerate() {
        assert!(
            seen.abs_diff(expected) < expected / 10,
            "answer at {index} seen {seen} times, expected about {expected}"
        );
    }
}

#[test]
fn rivers_and_lakes_scenario() {
    let bank = QuestionBank::new(vec![chapter(3, 4)]);
    let session = create_session(
        &ChapterId::new("Uttarakhand Rivers and Lakes"),
        &bank,
        &mut RandomSource::entropy().rng(),
    )
    .unwrap();

    assert_eq!(session.len(), 3);
    assert_eq!(session.position(), 0);
    assert!((session.progress_fraction().unwrap() - 1.0 / 3.0).abs() < f64::EPSILON);

    let session = session.advance().into_session().advance().into_session();
    assert_eq!(session.position(), 2);
    assert!(session.is_last());

    match session.advance() {
        Advance::Complete(done) => assert_eq!(done.position(), 2),
        Advance::Moved(_) => panic!("advance past the last question"),
    }
}

#[test]
fn unknown_chapter_is_not_found() {
    let bank = QuestionBank::new(vec![chapter(3, 4)]);
    let err = create_session(&ChapterId::new("NonexistentChapter"), &bank, &mut fixed_rng())
        .unwrap_err();
    assert!(matches!(
        err,
        quiz_core::model::SessionError::ChapterNotFound(ref id) if id.as_str() == "NonexistentChapter"
    ));
}
