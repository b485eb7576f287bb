// axisops-core/src/ops/expand_dims_test.rs

use super::{compute_expanded_shape, ExpandDimsOp};
use crate::error::{ConfigError, RuntimeError};
use crate::ops::{AxisSet, DimsConfig, InferShape, Operator};
use crate::tensor::Tensor;
use crate::test_utils::{init_logger, product, CountingContext};
use crate::types::DType;
use approx::assert_relative_eq;
use rand::Rng;

fn expand(dims: &[i64]) -> ExpandDimsOp {
    ExpandDimsOp::new(&DimsConfig::from(dims)).expect("valid dims")
}

#[test]
fn test_expand_leading_axis() -> Result<(), RuntimeError> {
    init_logger();
    let t = Tensor::new((0..6).map(|x| x as f32).collect(), vec![2, 3])?;
    let out = expand(&[0]).run(&t)?;
    assert_eq!(out.shape(), &[1, 2, 3]);
    let data = out.get_f32_data().unwrap();
    for (i, v) in data.iter().enumerate() {
        assert_relative_eq!(*v, i as f32);
    }
    Ok(())
}

#[test]
fn test_expand_inserts_on_growing_shape() -> Result<(), RuntimeError> {
    let t = Tensor::new(vec![0.0; 6], vec![1, 2, 3])?;
    // Axis 1 goes in first, then axis 3 is counted in the already grown shape.
    let out = expand(&[1, 3]).run(&t)?;
    assert_eq!(out.shape(), &[1, 1, 2, 1, 3]);

    let out = expand(&[1, 4]).run(&t)?;
    assert_eq!(out.shape(), &[1, 1, 2, 3, 1]);
    Ok(())
}

#[test]
fn test_expand_unsorted_and_repeated_dims() -> Result<(), RuntimeError> {
    let t = Tensor::new(vec![0.0; 6], vec![2, 3])?;
    let op = expand(&[3, 0, 0]);
    assert_eq!(op.axes().as_slice(), &[0, 3]);
    assert_eq!(op.run(&t)?.shape(), &[1, 2, 3, 1]);
    Ok(())
}

#[test]
fn test_expand_trailing_axis_at_rank() -> Result<(), RuntimeError> {
    let t = Tensor::new(vec![0.0; 6], vec![2, 3])?;
    assert_eq!(expand(&[2]).run(&t)?.shape(), &[2, 3, 1]);
    Ok(())
}

#[test]
fn test_expand_insufficient_rank() -> Result<(), RuntimeError> {
    let t = Tensor::new(vec![0.0; 6], vec![2, 3])?;
    let err = expand(&[5]).run(&t).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::InsufficientRank {
            required: 5,
            actual: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "Input needs at least 5 dimensions given `dims`, got 2."
    );

    // One past the trailing position.
    assert!(matches!(
        expand(&[3]).run(&t),
        Err(RuntimeError::InsufficientRank { required: 3, actual: 2 })
    ));
    Ok(())
}

#[test]
fn test_expand_many_axes_on_small_rank() -> Result<(), RuntimeError> {
    let t = Tensor::new(vec![0.0; 6], vec![2, 3])?;
    let out = expand(&[0, 1, 2, 3]).run(&t)?;
    assert_eq!(out.shape(), &[1, 1, 1, 1, 2, 3]);

    let out = expand(&[0, 2, 4]).run(&t)?;
    assert_eq!(out.shape(), &[1, 2, 1, 3, 1]);
    Ok(())
}

#[test]
fn test_expand_scalar() -> Result<(), RuntimeError> {
    let t = Tensor::new_i64(vec![42], vec![])?;
    let out = expand(&[0, 1]).run(&t)?;
    assert_eq!(out.shape(), &[1, 1]);
    assert_eq!(out.dtype(), DType::I64);
    assert_eq!(out.get_i64_data().unwrap(), &[42]);

    assert!(matches!(
        expand(&[1]).run(&t),
        Err(RuntimeError::InsufficientRank { required: 1, actual: 0 })
    ));
    Ok(())
}

#[test]
fn test_expand_zero_sized_input() -> Result<(), RuntimeError> {
    let t = Tensor::new(vec![], vec![0, 4])?;
    assert_eq!(expand(&[1]).run(&t)?.shape(), &[0, 1, 4]);
    Ok(())
}

#[test]
fn test_expand_copies_once_and_leaves_input_alone() -> Result<(), RuntimeError> {
    let config = DimsConfig::new(vec![0]);
    let op = ExpandDimsOp::with_context(&config, CountingContext::default())
        .expect("valid dims");
    let t = Tensor::new(vec![1.0, 2.0], vec![2])?;
    let out = op.run(&t)?;
    let _ = op.run(&t)?;
    assert_eq!(op.context().copies(), 2);
    assert_eq!(t.shape(), &[2]);
    assert_eq!(out.buffer(), t.buffer());
    Ok(())
}

#[test]
fn test_expand_run_into_overwrites_slot() -> Result<(), RuntimeError> {
    let t = Tensor::new_f64(vec![1.0, 2.0, 3.0], vec![3])?;
    let mut slot = Tensor::new_i64(vec![7; 8], vec![2, 4])?;
    expand(&[1]).run_into(&t, &mut slot)?;
    assert_eq!(slot.shape(), &[3, 1]);
    assert_eq!(slot.get_f64_data().unwrap(), &[1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn test_expand_failure_does_not_affect_later_runs() -> Result<(), RuntimeError> {
    let op = expand(&[3]);
    let small = Tensor::new(vec![0.0; 2], vec![2])?;
    let big = Tensor::new(vec![0.0; 8], vec![2, 2, 2])?;
    assert!(op.run(&small).is_err());
    assert_eq!(op.run(&big)?.shape(), &[2, 2, 2, 1]);
    Ok(())
}

#[test]
fn test_expand_construction_errors() {
    assert_eq!(
        ExpandDimsOp::new(&DimsConfig::new(vec![])).unwrap_err(),
        ConfigError::Empty
    );
    assert_eq!(
        ExpandDimsOp::new(&DimsConfig::new(vec![0, -2])).unwrap_err(),
        ConfigError::NegativeAxis { axis: -2 }
    );
}

#[test]
fn test_infer_shape_matches_run() -> Result<(), RuntimeError> {
    let op = expand(&[0, 3]);
    let t = Tensor::new(vec![0.0; 6], vec![2, 3])?;
    assert_eq!(op.infer_shape(&[2, 3])?, op.run(&t)?.shape());
    Ok(())
}

#[test]
fn test_expanded_shape_preserves_element_count() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let rank = rng.gen_range(0..5);
        let shape: Vec<usize> = (0..rank).map(|_| rng.gen_range(0..5)).collect();
        let raw: Vec<i64> = (0..rng.gen_range(1..4))
            .map(|_| rng.gen_range(0..7))
            .collect();
        let axes = AxisSet::build(&raw).expect("valid dims");
        match compute_expanded_shape(&shape, &axes) {
            Ok(new_shape) => {
                assert_eq!(new_shape.len(), rank + axes.len());
                assert_eq!(product(&new_shape), product(&shape));
                for axis in axes.iter() {
                    assert_eq!(new_shape[axis], 1);
                }
            }
            Err(RuntimeError::InsufficientRank { required, actual }) => {
                assert_eq!(actual, rank);
                assert!(rank < required);
            }
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }
}
