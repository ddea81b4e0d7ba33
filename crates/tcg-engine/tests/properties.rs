//! # Engine Properties
//!
//! Property tests over the built-in catalogue: determinism, monotonicity
//! under additional answers, and resolver coverage.

use std::collections::BTreeSet;

use proptest::prelude::*;

use tcg_catalogue::{builtin, Question};
use tcg_core::{BusinessType, InputKind, PriorityLevel};
use tcg_engine::{classify, resolve, AnswerValue, AssessmentAnswers};

/// Build a well-formed answer set from raw seeds, one seed per question.
/// `(present, pick, mask)`: skip the question unless `present`; `pick`
/// selects a single value; `mask` selects a subset for multi-choice.
fn answers_from_seeds(questions: &[Question], seeds: &[(bool, u8, u16)]) -> AssessmentAnswers {
    let mut answers = AssessmentAnswers::new();
    for (question, (present, pick, mask)) in questions.iter().zip(seeds) {
        if !present {
            continue;
        }
        let values = question.option_values();
        let value = match question.input {
            InputKind::Boolean => AnswerValue::boolean(pick % 2 == 0),
            InputKind::SingleChoice => {
                AnswerValue::single(values[*pick as usize % values.len()])
            }
            InputKind::MultiChoice => AnswerValue::multiple(
                values
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << (i % 16)) != 0)
                    .map(|(_, v)| *v),
            ),
        };
        answers.insert(question.id.as_str(), value);
    }
    answers
}

fn business_types_from_mask(mask: u8) -> Vec<BusinessType> {
    BusinessType::all()
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, bt)| *bt)
        .collect()
}

fn seeds() -> impl Strategy<Value = Vec<(bool, u8, u16)>> {
    prop::collection::vec(any::<(bool, u8, u16)>(), 16)
}

proptest! {
    /// Well-formed answers always classify, and repeated calls agree.
    #[test]
    fn classify_is_deterministic(seeds in seeds()) {
        let catalogue = builtin::questions().unwrap();
        let answers = answers_from_seeds(catalogue.questions(), &seeds);
        let a = classify(catalogue.questions(), &answers).unwrap();
        let b = classify(catalogue.questions(), &answers).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Output is sorted by canonical order with no duplicates.
    #[test]
    fn classify_output_is_canonical(seeds in seeds()) {
        let catalogue = builtin::questions().unwrap();
        let answers = answers_from_seeds(catalogue.questions(), &seeds);
        let types = classify(catalogue.questions(), &answers).unwrap();
        prop_assert!(types.windows(2).all(|w| w[0] < w[1]));
    }

    /// Answering a previously unanswered question only adds business types.
    #[test]
    fn classify_is_monotonic(seeds in seeds()) {
        let catalogue = builtin::questions().unwrap();
        let full = answers_from_seeds(catalogue.questions(), &seeds);
        let full_types: BTreeSet<BusinessType> =
            classify(catalogue.questions(), &full).unwrap().into_iter().collect();

        for (question_id, _) in full.iter() {
            let fewer: AssessmentAnswers = full
                .iter()
                .filter(|(id, _)| *id != question_id)
                .map(|(id, v)| (id, v.clone()))
                .collect();
            let fewer_types: BTreeSet<BusinessType> =
                classify(catalogue.questions(), &fewer).unwrap().into_iter().collect();
            prop_assert!(
                fewer_types.is_subset(&full_types),
                "dropping {} produced {:?}, not a subset of {:?}",
                question_id, fewer_types, full_types
            );
        }
    }

    /// One result per section, in catalogue order, for any type set.
    #[test]
    fn resolve_covers_every_section(mask in any::<u8>()) {
        let sections = builtin::sections().unwrap();
        let types = business_types_from_mask(mask);
        let results = resolve(&types, sections.sections());
        prop_assert_eq!(results.len(), sections.len());
        for (result, section) in results.iter().zip(sections.sections()) {
            prop_assert_eq!(result.slug, section.slug);
        }
    }

    /// A section is NOT_APPLICABLE exactly when no input type is in its
    /// applicability list; otherwise it takes its baseline.
    #[test]
    fn resolve_not_applicable_iff_disjoint(mask in any::<u8>()) {
        let sections = builtin::sections().unwrap();
        let types = business_types_from_mask(mask);
        for (result, section) in resolve(&types, sections.sections()).iter().zip(sections.sections()) {
            let disjoint = !types.iter().any(|bt| section.applies_to(*bt));
            if disjoint {
                prop_assert_eq!(result.priority, PriorityLevel::NotApplicable);
                prop_assert!(result.matched.is_empty());
            } else {
                prop_assert_eq!(result.priority, section.baseline);
                prop_assert!(!result.matched.is_empty());
            }
        }
    }
}

#[test]
fn resolve_empty_set_is_all_not_applicable() {
    let sections = builtin::sections().unwrap();
    assert!(resolve(&[], sections.sections())
        .iter()
        .all(|r| r.priority == PriorityLevel::NotApplicable));
}
