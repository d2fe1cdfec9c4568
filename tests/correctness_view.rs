use approx::assert_relative_eq;
use fixed_linalg::functions::{all, any, cross, dot, equal, less};
use fixed_linalg::prelude::*;
use fixed_linalg::{MathError, MathTrait};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Interleaved position/normal buffer: `[px, py, pz, nx, ny, nz, ...]`.
fn vertex_buffer(vertices: usize, rng: &mut StdRng) -> Vec<f32> {
    (0..vertices * 6).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

#[test]
fn test_write_through_view_is_visible_in_storage() {
    let mut storage = [0i32; 10];
    {
        let mut view = VectorViewMut::<i32, 3, 4>::new(&mut storage).unwrap();
        view[2] = 7;
    }
    assert_eq!(storage[6], 7);
    for (i, v) in storage.iter().enumerate() {
        if i != 6 {
            assert_eq!(*v, 0);
        }
    }
}

#[test]
fn test_copy_is_a_snapshot() {
    let mut storage = [1, 2, 3, 4, 5, 6];
    let snapshot = VectorView::<i32, 2, 3>::new(&storage).unwrap().copy();
    {
        let mut view = VectorViewMut::<i32, 2, 3>::new(&mut storage).unwrap();
        view[0] = 100;
    }
    assert_eq!(snapshot.into_array(), [1, 3, 5]);
    assert_eq!(storage[0], 100);
}

#[test]
fn test_view_length_check() {
    let storage = [0.0f64; 7];
    assert!(VectorView::<f64, 3, 3>::new(&storage).is_ok());
    let err = VectorView::<f64, 3, 4>::new(&storage).unwrap_err();
    assert!(matches!(
        err,
        MathError::ViewOutOfBounds {
            required: 10,
            available: 7
        }
    ));
    assert!(MatrixView::<f64, 1, 2, 4>::new(&storage).is_err());
}

#[test]
fn test_positions_in_interleaved_buffer() {
    let mut rng = StdRng::seed_from_u64(99);
    let buffer = vertex_buffer(3, &mut rng);
    for vertex in 0..3 {
        let base = vertex * 6;
        let position = VectorView::<f32, 1, 3>::new(&buffer[base..]).unwrap();
        let normal = VectorView::<f32, 1, 3>::new(&buffer[base + 3..]).unwrap();
        assert_eq!(position.x(), buffer[base]);
        assert_eq!(normal.z(), buffer[base + 5]);

        let n = cross(&position, &normal);
        assert_relative_eq!(dot(&n, &position), 0.0, epsilon = 1e-5);
        assert_relative_eq!(dot(&n, &normal), 0.0, epsilon = 1e-5);
    }
}

#[test]
fn test_strided_component_channel() {
    // every x coordinate of four packed 3-vectors
    let mut buffer: Vec<f32> = (0..12).map(|i| i as f32).collect();
    {
        let mut xs = VectorViewMut::<f32, 3, 4>::new(&mut buffer).unwrap();
        assert_eq!(xs.copy().into_array(), [0.0, 3.0, 6.0, 9.0]);
        xs *= 10.0;
    }
    assert_eq!(buffer[3], 30.0);
    assert_eq!(buffer[4], 4.0);
}

#[test]
fn test_view_arithmetic_matches_owned() {
    let mut rng = StdRng::seed_from_u64(5);
    let raw: Vec<f64> = (0..16).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let a = VectorView::<f64, 4, 4>::new(&raw).unwrap();
    let b = VectorView::<f64, 2, 4>::new(&raw[1..]).unwrap();
    let owned_sum = a.copy() + b.copy();
    assert_eq!(a + b, owned_sum);
    assert_eq!(a + b.copy(), owned_sum);
    assert_eq!(a.copy() + b, owned_sum);
}

#[test]
fn test_view_comparisons() {
    let raw = [1, 9, 2, 9, 3];
    let v = VectorView::<i32, 2, 3>::new(&raw).unwrap();
    let w = Vector::<i32, 3>::from_array([1, 2, 4]);
    assert!(!all(&equal(&v, &w)));
    assert!(any(&less(&v, &w)));
    assert_ne!(v, w);
}

#[test]
fn test_matrix_view_over_sequential_storage() {
    let storage: Vec<i32> = (0..12).collect();
    let m = MatrixView::<i32, 1, 3, 4>::new(&storage).unwrap();
    for r in 0..3 {
        for c in 0..4 {
            assert_eq!(m.get(r, c), (r * 4 + c) as i32);
        }
    }
    assert_eq!(m.get_row(2).into_array(), [8, 9, 10, 11]);
    assert_eq!(m.get_column(1).into_array(), [1, 5, 9]);
    assert_eq!(m.get_column_view(3).copy().into_array(), [3, 7, 11]);
    assert_eq!(m.copy(), Matrix::<i32, 3, 4>::try_from_slice(&storage).unwrap());
}

#[test]
fn test_strided_matrix_view_write_through() {
    // a 2x2 matrix stored in every other slot
    let mut storage = [0.0f32; 7];
    {
        let mut m = MatrixViewMut::<f32, 2, 2, 2>::new(&mut storage).unwrap();
        m += Matrix::<f32, 2, 2>::identity();
        m.set(0, 1, 5.0);
        m.get_row_view_mut(1).fill(2.0);
    }
    assert_eq!(storage, [1.0, 0.0, 5.0, 0.0, 2.0, 0.0, 2.0]);
}

#[test]
fn test_matrix_row_view_mut_through_owned() {
    let mut m = Matrix::<i32, 2, 3>::default();
    m.get_row_view_mut(0).assign(&Vector::<i32, 3>::from_array([1, 2, 3]));
    {
        let mut col = m.get_column_view_mut(2);
        col += 10;
    }
    assert_eq!(m.into_array(), [[1, 2, 13], [0, 0, 10]]);
}

#[test]
fn test_views_share_owned_type() {
    fn owned_of<U: MathTrait>(_: &U) -> U::Owned<bool> {
        <U::Owned<bool> as Default>::default()
    }
    let raw = [1u8, 2, 3];
    let v = VectorView::<u8, 1, 3>::new(&raw).unwrap();
    let mask: Vector<bool, 3> = owned_of(&v);
    assert_eq!(mask.into_array(), [false; 3]);
}
