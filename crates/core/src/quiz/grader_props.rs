//! Property-based tests for multiple-choice grading.

use proptest::prelude::*;

use super::grader::MultipleChoiceQuiz;
use super::types::{Question, Submission};
use super::PLEASE_SELECT;

const OPTIONS: [&str; 4] = ["Assets", "Liabilities", "Equity", "Revenue"];

/// A quiz of `answers.len()` questions whose keys are picked from `OPTIONS`.
fn quiz_with_answers(answers: &[usize]) -> MultipleChoiceQuiz {
    let mut options = vec![PLEASE_SELECT];
    options.extend(OPTIONS);
    let questions = answers
        .iter()
        .enumerate()
        .map(|(i, &a)| Question::new(&format!("q{}", i + 1), "Pick one", &options, OPTIONS[a]))
        .collect();
    MultipleChoiceQuiz::new("Generated", PLEASE_SELECT, questions).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The score equals the number of questions answered with the key.
    #[test]
    fn prop_score_counts_exact_matches(
        answers in prop::collection::vec(0usize..4, 1..12),
        picks in prop::collection::vec(prop::option::of(0usize..4), 12),
    ) {
        let quiz = quiz_with_answers(&answers);
        let mut submission = Submission::new();
        let mut expected = 0;
        for (i, &answer) in answers.iter().enumerate() {
            let id = format!("q{}", i + 1);
            match picks[i] {
                Some(pick) => {
                    if pick == answer {
                        expected += 1;
                    }
                    submission.insert(id, OPTIONS[pick].to_string());
                }
                None => {
                    submission.insert(id, PLEASE_SELECT.to_string());
                }
            }
        }

        let report = quiz.grade(&submission);
        prop_assert_eq!(report.score, expected);
        prop_assert_eq!(report.total, answers.len());
        prop_assert_eq!(report.results.len(), answers.len());
    }

    /// The placeholder never scores, whatever the key.
    #[test]
    fn prop_placeholder_never_scores(
        answers in prop::collection::vec(0usize..4, 1..12),
    ) {
        let quiz = quiz_with_answers(&answers);
        prop_assert_eq!(quiz.grade(&quiz.blank_submission()).score, 0);
        prop_assert_eq!(quiz.grade(&Submission::new()).score, 0);
        prop_assert!(quiz.grade(&quiz.answer_key()).is_perfect());
    }
}
