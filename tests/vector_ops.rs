//! Behavioral tests for `DenseVector`: construction bounds, value
//! semantics, checked access, and arithmetic.
//!
//! Fixed-data cases pin down the exact contracts; random cases check the
//! algebraic identities (add/sub round trip, dot bilinearity).

use approx::assert_abs_diff_eq;
use dynalg::{DenseVector, DynError, MAX_VECTOR_SIZE};
use rand::Rng;

fn random_vector(rng: &mut impl Rng, len: usize) -> DenseVector<f64> {
    let data: Vec<f64> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
    DenseVector::from_slice(&data).unwrap()
}

#[test]
fn creates_with_positive_length() {
    let v = DenseVector::<i32>::new(5).unwrap();
    assert_eq!(v.len(), 5);
    assert!(v.iter().all(|&elem| elem == 0));
}

#[test]
fn rejects_zero_length() {
    assert_eq!(
        DenseVector::<i32>::new(0),
        Err(DynError::SizeOutOfRange(0, MAX_VECTOR_SIZE))
    );
}

#[test]
fn rejects_oversized_length() {
    assert_eq!(
        DenseVector::<i32>::new(MAX_VECTOR_SIZE + 1),
        Err(DynError::SizeOutOfRange(MAX_VECTOR_SIZE + 1, MAX_VECTOR_SIZE))
    );
}

#[test]
fn from_slice_copies_the_source() {
    let src = [1, 2, 3];
    let v = DenseVector::from_slice(&src).unwrap();
    assert_eq!(v.as_slice(), &src);
}

#[test]
fn from_slice_rejects_empty_source() {
    assert_eq!(
        DenseVector::<i32>::from_slice(&[]),
        Err(DynError::SizeOutOfRange(0, MAX_VECTOR_SIZE))
    );
}

#[test]
fn clone_is_equal_to_source() {
    let mut v = DenseVector::<i32>::new(10).unwrap();
    v[0] = 42;
    let copy = v.clone();
    assert_eq!(copy, v);
}

#[test]
fn clone_has_its_own_storage() {
    let mut v = DenseVector::<i32>::new(10).unwrap();
    v[0] = 42;
    let copy = v.clone();
    v[0] = 100;
    assert_ne!(copy, v);
    assert_eq!(copy[0], 42);
}

#[test]
fn take_moves_contents_and_leaves_source_inert() {
    let mut v = DenseVector::from_slice(&[1, 2, 3]).unwrap();
    let moved = v.take();
    assert_eq!(moved.as_slice(), &[1, 2, 3]);
    assert!(v.is_empty());
    assert_eq!(v.get(0), Err(DynError::IndexOutOfRange(0, 0)));
    // the inert source accepts reassignment
    v = DenseVector::from_slice(&[7]).unwrap();
    assert_eq!(v.len(), 1);
}

#[test]
fn sets_and_gets_element() {
    let mut v = DenseVector::<i32>::new(4).unwrap();
    v[0] = 4;
    assert_eq!(v[0], 4);
    assert_eq!(*v.get(0).unwrap(), 4);
}

#[test]
fn index_at_length_is_out_of_range() {
    let mut v = DenseVector::<i32>::new(4).unwrap();
    assert_eq!(v.get(4), Err(DynError::IndexOutOfRange(4, 4)));
    assert_eq!(v.get_mut(4).map(|_| ()), Err(DynError::IndexOutOfRange(4, 4)));
}

#[test]
fn wrapped_negative_index_is_out_of_range() {
    // -1 wraps to usize::MAX and is caught by the same upper-bound check
    let v = DenseVector::<i32>::new(4).unwrap();
    let wrapped = -1isize as usize;
    assert_eq!(v.get(wrapped), Err(DynError::IndexOutOfRange(wrapped, 4)));
}

#[test]
#[should_panic(expected = "out of range")]
fn index_sugar_panics_past_end() {
    let v = DenseVector::<i32>::new(4).unwrap();
    let _ = v[4];
}

#[test]
fn equality_is_reflexive() {
    let v = DenseVector::from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(v, v);
}

#[test]
fn equal_contents_compare_equal() {
    let mut a = DenseVector::<i32>::new(4).unwrap();
    let mut b = DenseVector::<i32>::new(4).unwrap();
    a[0] = 1;
    b[0] = 1;
    assert_eq!(a, b);
}

#[test]
fn different_lengths_are_never_equal() {
    let a = DenseVector::<i32>::new(4).unwrap();
    let b = DenseVector::<i32>::new(2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn scalar_ops_apply_elementwise() {
    let v = DenseVector::from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(v.scalar_add(10).as_slice(), &[11, 12, 13]);
    assert_eq!(v.scalar_sub(1).as_slice(), &[0, 1, 2]);
    assert_eq!(v.scale(3).as_slice(), &[3, 6, 9]);
    // operands are untouched
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn adds_and_subtracts_elementwise() {
    let a = DenseVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DenseVector::from_slice(&[10, 20, 30]).unwrap();
    assert_eq!(a.try_add(&b).unwrap().as_slice(), &[11, 22, 33]);
    assert_eq!(b.try_sub(&a).unwrap().as_slice(), &[9, 18, 27]);
}

#[test]
fn add_then_sub_round_trips() {
    let mut rng = rand::thread_rng();
    let a = random_vector(&mut rng, 16);
    let b = random_vector(&mut rng, 16);
    let back = a.try_add(&b).unwrap().try_sub(&b).unwrap();
    for (x, y) in back.iter().zip(a.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
    }
}

#[test]
fn dot_of_fixed_vectors() {
    let x = DenseVector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    let y = DenseVector::from_slice(&[4.0, -5.0, 6.0]).unwrap();
    assert_abs_diff_eq!(
        x.dot(&y).unwrap(),
        1.0 * 4.0 + 2.0 * (-5.0) + 3.0 * 6.0,
        epsilon = 1e-12
    );
}

#[test]
fn dot_is_bilinear() {
    let mut rng = rand::thread_rng();
    let a = random_vector(&mut rng, 8);
    let b = random_vector(&mut rng, 8);
    let c = random_vector(&mut rng, 8);
    let lhs = a.try_add(&b).unwrap().dot(&c).unwrap();
    let rhs = a.dot(&c).unwrap() + b.dot(&c).unwrap();
    assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-12);
}

#[test]
fn length_mismatch_is_rejected() {
    let a = DenseVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DenseVector::from_slice(&[1, 2]).unwrap();
    let err = DynError::DimensionMismatch("3".into(), "2".into());
    assert_eq!(a.try_add(&b), Err(err.clone()));
    assert_eq!(a.try_sub(&b), Err(err.clone()));
    assert_eq!(a.dot(&b), Err(err));
}

#[test]
fn swap_exchanges_storage() {
    let mut a = DenseVector::from_slice(&[1, 2]).unwrap();
    let mut b = DenseVector::from_slice(&[9, 8, 7]).unwrap();
    a.swap(&mut b);
    assert_eq!(a.as_slice(), &[9, 8, 7]);
    assert_eq!(b.as_slice(), &[1, 2]);
}

#[test]
fn display_then_parse_round_trips() {
    let v = DenseVector::from_slice(&[3, 1, 4, 1, 5]).unwrap();
    assert_eq!(v.to_string(), "3 1 4 1 5");
    let parsed: DenseVector<i32> = "3 1 4 1 5".parse().unwrap();
    assert_eq!(parsed, v);
}

#[test]
fn parse_rejects_bad_token() {
    let err = "1 x 3".parse::<DenseVector<i32>>().unwrap_err();
    assert_eq!(err, DynError::Parse(1, "x".into()));
}

#[test]
fn parse_rejects_empty_input() {
    assert_eq!(
        "".parse::<DenseVector<i32>>(),
        Err(DynError::SizeOutOfRange(0, MAX_VECTOR_SIZE))
    );
}
