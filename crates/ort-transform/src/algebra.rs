//! Extent-code translation tables.
//!
//! `rc` is always the relation of the original region to the target region.
//! A single original region translates with [`single_step`]. Several original
//! regions of one map describing the same target fold with [`multi_step_step`]
//! in list order. The fold is not commutative: an Identical or Larger original
//! covers the whole target and overrides what was accumulated before it, while
//! Smaller and Overlapping originals each add knowledge about a part.

use ort_core::errors::AlgebraError;
use ort_relations::Rc;

use crate::ec::Ec;

/// Translate the extent code of one original region onto the target.
pub fn single_step(rc: Rc, ec: Ec) -> Ec {
    use Ec::*;
    match (rc, ec) {
        (Rc::Identical, ec) => ec,

        // The target lies inside the original: only uniform codes carry over.
        (Rc::Larger, Complete) => Complete,
        (Rc::Larger, Absent) => Absent,
        (Rc::Larger, Partial | Exists | AbsentInPart | Unknown) => Unknown,

        // The original is a part of the target.
        (Rc::Smaller, Complete) => Exists,
        (Rc::Smaller, Absent) => AbsentInPart,
        (Rc::Smaller, Partial) => Partial,
        (Rc::Smaller, Exists) => Exists,
        (Rc::Smaller, AbsentInPart) => AbsentInPart,
        (Rc::Smaller, Unknown) => Unknown,

        // Only the shared part is known, and only for uniform codes.
        (Rc::Overlapping, Complete) => Exists,
        (Rc::Overlapping, Absent) => AbsentInPart,
        (Rc::Overlapping, Partial | Exists | AbsentInPart | Unknown) => Unknown,
    }
}

/// Fold one more original region into the accumulated target code.
pub fn multi_step_step(accumulated: Ec, rc: Rc, ec: Ec) -> Result<Ec, AlgebraError> {
    let contribution = single_step(rc, ec);
    match rc {
        Rc::Identical | Rc::Larger => Ok(contribution),
        Rc::Smaller | Rc::Overlapping => {
            let merged = accumulated.knowledge().union(contribution.knowledge());
            Ec::from_knowledge(merged).ok_or_else(|| AlgebraError::UndefinedExtentStep {
                accumulated: accumulated.to_string(),
                rc: rc.to_string(),
                extent: ec.to_string(),
            })
        }
    }
}

/// Fold a list of `(relation to target, extent code)` pairs in order.
///
/// The first element seeds the accumulator with its single-step code, so a
/// one-element list equals [`single_step`].
pub fn multi_step(parts: &[(Rc, Ec)]) -> Option<Result<Ec, AlgebraError>> {
    let ((first_rc, first_ec), rest) = parts.split_first()?;
    let seed = single_step(*first_rc, *first_ec);
    Some(
        rest.iter()
            .try_fold(seed, |acc, &(rc, ec)| multi_step_step(acc, rc, ec)),
    )
}

/// [`single_step`] over letter codes.
pub fn single_step_codes(rc: &str, ec: &str) -> Result<Ec, AlgebraError> {
    let rc = Rc::from_code(rc)?;
    let ec = Ec::from_code(ec)?;
    Ok(single_step(rc, ec))
}

/// [`multi_step_step`] over letter codes. Any unknown code in the triple is
/// reported with the whole triple.
pub fn multi_step_codes(accumulated: &str, rc: &str, ec: &str) -> Result<Ec, AlgebraError> {
    match (Ec::from_code(accumulated), Rc::from_code(rc), Ec::from_code(ec)) {
        (Ok(acc), Ok(rc), Ok(ec)) => multi_step_step(acc, rc, ec),
        _ => Err(AlgebraError::UndefinedExtentStep {
            accumulated: accumulated.to_string(),
            rc: rc.to_string(),
            extent: ec.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_is_the_identity() {
        for ec in Ec::ALL {
            assert_eq!(single_step(Rc::Identical, ec), ec);
        }
    }

    #[test]
    fn smaller_original_leaves_the_remainder_open() {
        assert_eq!(single_step(Rc::Smaller, Ec::Complete), Ec::Exists);
        assert_eq!(single_step(Rc::Smaller, Ec::Absent), Ec::AbsentInPart);
        assert_eq!(single_step(Rc::Smaller, Ec::Partial), Ec::Partial);
    }

    #[test]
    fn larger_original_keeps_uniform_codes_only() {
        assert_eq!(single_step(Rc::Larger, Ec::Complete), Ec::Complete);
        assert_eq!(single_step(Rc::Larger, Ec::Absent), Ec::Absent);
        assert_eq!(single_step(Rc::Larger, Ec::Partial), Ec::Unknown);
    }

    #[test]
    fn absent_part_and_present_part_make_partial() {
        let result = multi_step(&[(Rc::Smaller, Ec::Absent), (Rc::Overlapping, Ec::Complete)]);
        assert_eq!(result, Some(Ok(Ec::Partial)));
    }

    #[test]
    fn one_element_fold_equals_single_step() {
        for rc in Rc::ALL {
            for ec in Ec::ALL {
                assert_eq!(multi_step(&[(rc, ec)]), Some(Ok(single_step(rc, ec))));
            }
        }
        assert_eq!(multi_step(&[]), None);
    }

    #[test]
    fn order_matters() {
        let forward = multi_step(&[(Rc::Larger, Ec::Complete), (Rc::Smaller, Ec::Absent)]);
        let backward = multi_step(&[(Rc::Smaller, Ec::Absent), (Rc::Larger, Ec::Complete)]);
        assert_eq!(forward, Some(Ok(Ec::Partial)));
        assert_eq!(backward, Some(Ok(Ec::Complete)));
    }

    #[test]
    fn code_entry_points_name_the_bad_input() {
        assert_eq!(single_step_codes("S", "C").unwrap(), Ec::Exists);
        assert!(matches!(
            single_step_codes("Q", "C"),
            Err(AlgebraError::UnknownRelationCode { .. })
        ));
        assert_eq!(multi_step_codes("Nx", "O", "C").unwrap(), Ec::Partial);
        assert_eq!(
            multi_step_codes("Nx", "Z", "C").unwrap_err(),
            AlgebraError::UndefinedExtentStep {
                accumulated: "Nx".into(),
                rc: "Z".into(),
                extent: "C".into(),
            }
        );
    }
}
