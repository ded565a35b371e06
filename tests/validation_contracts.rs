//! Integration tests for the argument validation contracts
//!
//! Exercises every validator through the public crate surface, the same way
//! library callers invoke them at the top of their own operations.

use std::collections::BTreeSet;

use ndarray::Array;
use textprep::{
    Cell, DocumentValidator, EstimatorValidator, Frame, Input, ParamValidator, Pipeline,
    Result, ShapeValidator, TextPrepError, TokenValidator, Transformer,
};

fn str_list(values: &[&str]) -> Input {
    Input::List(values.iter().copied().map(Cell::from).collect())
}

/// Orient succeeds exactly for case-insensitive "h" and "v"
#[test]
fn test_orient_accepts_exactly_h_and_v() {
    for ok in ["h", "v", "H", "V"] {
        assert!(ParamValidator::validate_orient(ok).is_ok());
    }
    for bad in ["x", "hv", "horizontal", ""] {
        let err = ParamValidator::validate_orient(bad).unwrap_err();
        assert!(matches!(err, TextPrepError::InvalidArgument(_)));
    }
}

/// Sort accepts the absence marker and case-insensitive "asc"/"desc"
#[test]
fn test_sort_accepts_absence_and_directions() {
    assert!(ParamValidator::validate_sort(None).is_ok());
    for ok in ["asc", "desc", "ASC", "Desc"] {
        assert!(ParamValidator::validate_sort(Some(ok)).is_ok());
    }
    assert!(ParamValidator::validate_sort(Some("descending")).is_err());
}

/// A consistent split passes; mutating any one sample count fails
#[test]
fn test_train_test_split_consistency() {
    let x_train = Array::<f64, _>::zeros((80, 4));
    let x_test = Array::<f64, _>::zeros((20, 4));
    let y_train = Array::<f64, _>::zeros((80, 2));
    let y_test = Array::<f64, _>::zeros((20, 2));
    assert!(
        ShapeValidator::validate_train_test_split(&x_train, &x_test, &y_train, &y_test).is_ok()
    );

    let y_train_short = Array::<f64, _>::zeros((79, 2));
    assert!(
        ShapeValidator::validate_train_test_split(&x_train, &x_test, &y_train_short, &y_test)
            .is_err()
    );

    let y_test_wide = Array::<f64, _>::zeros((20, 3));
    let err =
        ShapeValidator::validate_train_test_split(&x_train, &x_test, &y_train, &y_test_wide)
            .unwrap_err();
    assert!(matches!(err, TextPrepError::ContractViolation(_)));
}

/// Column-vector shapes pass the relaxed check, wider shapes do not
#[test]
fn test_effectively_one_dimensional() {
    let flat = Input::Array(Array::from_elem(5, Cell::Null).into_dyn());
    let column = Input::Array(Array::from_elem((5, 1), Cell::Null).into_dyn());
    let wide = Input::Array(Array::from_elem((5, 2), Cell::Null).into_dyn());
    let deep = Input::Array(Array::from_elem((5, 2, 1), Cell::Null).into_dyn());

    assert!(ShapeValidator::check_1d_or_column(&flat).is_ok());
    assert!(ShapeValidator::check_1d_or_column(&column).is_ok());
    assert!(ShapeValidator::check_1d_or_column(&wide).is_err());
    assert!(ShapeValidator::check_1d_or_column(&deep).is_err());

    let err = ShapeValidator::check_1d_or_column(&Input::Scalar(Cell::Int(5))).unwrap_err();
    assert!(matches!(err, TextPrepError::TypeMismatch(_)));
}

/// Raw document collections must hold only text, and never a bare string
#[test]
fn test_raw_documents_contract() {
    assert!(DocumentValidator::validate_raw_documents(&str_list(&["a", "b"])).is_ok());
    assert!(DocumentValidator::validate_raw_documents(&Input::from("ab")).is_err());
    assert!(
        DocumentValidator::validate_raw_documents(&Input::List(vec![Cell::Int(1), Cell::Int(2)]))
            .is_err()
    );
}

/// Documents: bare string short-circuits, collections are content-checked,
/// streams pass without content inspection
#[test]
fn test_documents_contract() {
    assert!(DocumentValidator::validate_documents(&Input::from("single doc")).is_ok());
    assert!(DocumentValidator::validate_documents(&str_list(&["a", "b", "c"])).is_ok());
    assert!(
        DocumentValidator::validate_documents(&Input::List(vec![Cell::from("a"), Cell::Int(2)]))
            .is_err()
    );
    // Single-pass sources are accepted untouched; content checks would
    // exhaust them before the real consumer runs
    assert!(DocumentValidator::validate_documents(&Input::Stream).is_ok());
}

/// Document containers that are array-like must be strictly 1-dimensional
#[test]
fn test_documents_array_likes_must_be_1d() {
    let wide = Array::from_elem((3, 2), Cell::from("a")).into_dyn();
    let frame = Frame::new(vec!["a".into(), "b".into()], wide).unwrap();
    let err = DocumentValidator::validate_documents(&Input::Frame(frame)).unwrap_err();
    assert!(matches!(err, TextPrepError::Shape(_)));
}

/// Tokens require an ordered indexable sequence; content check is opt-in
#[test]
fn test_tokens_contract() {
    assert!(TokenValidator::validate_tokens(&str_list(&["tok1", "tok2"]), true).is_ok());
    assert!(
        TokenValidator::validate_tokens(&Input::List(vec![Cell::Int(1), Cell::Int(2)]), true)
            .is_err()
    );

    let set: BTreeSet<Cell> = [Cell::Int(1), Cell::Int(2)].into();
    assert!(TokenValidator::validate_tokens(&Input::Set(set), false).is_err());
}

/// Standalone transformers pass; pipelines are rejected even though they
/// also implement the transform capability
#[test]
fn test_transformer_contract() {
    struct Identity;

    impl Transformer for Identity {
        fn fit(&mut self, _data: ndarray::ArrayViewD<'_, f64>) -> Result<()> {
            Ok(())
        }

        fn transform(
            &self,
            data: ndarray::ArrayViewD<'_, f64>,
        ) -> Result<ndarray::ArrayD<f64>> {
            Ok(data.to_owned())
        }
    }

    assert!(EstimatorValidator::validate_transformer(&Identity).is_ok());

    let pipe = Pipeline::new().with_step(Box::new(Identity));
    assert!(EstimatorValidator::validate_transformer(&pipe).is_err());
}

/// The invalid-value helper always yields an error naming the parameter
#[test]
fn test_invalid_value_helper() {
    let err = ParamValidator::invalid_value("orient", "x", Some(&["h", "v"]));
    let msg = err.to_string();
    assert!(msg.contains("orient") && msg.contains('x') && msg.contains('h') && msg.contains('v'));

    let err = ParamValidator::invalid_value("orient", "x", None);
    let msg = err.to_string();
    assert!(msg.contains("orient") && msg.contains('x'));
}
