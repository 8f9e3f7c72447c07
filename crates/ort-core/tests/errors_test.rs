use ort_core::errors::*;

#[test]
fn algebra_error_names_the_offending_triple() {
    let err = AlgebraError::UndefinedExtentStep {
        accumulated: "C".into(),
        rc: "S".into(),
        extent: "Q".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("(C, S, Q)"), "got {msg}");
    assert_eq!(err.error_code(), "ALGEBRA_ERROR");
}

#[test]
fn broken_chain_has_its_own_code() {
    let err = AlgebraError::BrokenChain {
        from: "A-1".into(),
        to: "B-1".into(),
        path: "[B-1]".into(),
    };
    assert_eq!(err.error_code(), "BROKEN_PATH");
    assert!(err.coded_string().starts_with("[BROKEN_PATH]"));
}

#[test]
fn graph_format_error_carries_the_identifier() {
    let err = GraphFormatError::MalformedRegion {
        id: "nodash".into(),
        reason: "missing map/site separator".into(),
    };
    assert!(err.to_string().contains("nodash"));
}

#[test]
fn consensus_conflict_lists_every_vote() {
    let err = ConsensusConflictError {
        source_region: "B-1".into(),
        target_region: "B-2".into(),
        votes: vec![
            ChannelVoteSummary {
                channel: "identical".into(),
                vote: "present".into(),
                candidates: 1,
            },
            ChannelVoteSummary {
                channel: "larger".into(),
                vote: "absent".into(),
                candidates: 2,
            },
        ],
    };
    let msg = err.to_string();
    assert!(msg.contains("identical=present (1)"));
    assert!(msg.contains("larger=absent (2)"));
}

// --- From impls ---

#[test]
fn subsystem_errors_convert_to_ort_error() {
    let err: OrtError = AlgebraError::UnknownRelationCode { code: "Q".into() }.into();
    assert!(matches!(err, OrtError::Algebra(_)));
    assert_eq!(err.error_code(), "ALGEBRA_ERROR");

    let err: OrtError = StructuralInvariantError::SelfLoop {
        region: "A-1".into(),
    }
    .into();
    assert_eq!(err.error_code(), "STRUCTURAL_INVARIANT");
}

#[test]
fn pass_result_collects_non_fatal_errors() {
    let mut result: PassResult<usize> = PassResult::new(3);
    assert!(result.is_clean());
    result.add_error(StructuralInvariantError::SelfLoop {
        region: "A-1".into(),
    });
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.data, 3);
}
