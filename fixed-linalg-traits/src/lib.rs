//! Shared traits for the fixed-linalg workspace.
//!
//! This crate provides the capability traits that the element-wise invocation
//! engine in `fixed-linalg` is written against. External crates can depend on
//! `fixed-linalg-traits` to make their own fixed-size types usable with the
//! engine without orphan rule violations.
//!
//! - [`Scalar`] / [`Arithmetic`]: element type bounds
//! - [`Shape`], [`VectorShape`], [`MatrixShape`]: type-level shapes; two operands
//!   are compatible exactly when their `Shape` associated types are equal
//! - [`MathTrait`] / [`MathTraitMut`]: "fixed element count, fixed element type,
//!   indexable" capability shared by owning containers and views
//! - [`Conjugate`]: complex conjugation, identity on real types

pub mod conjugate;
pub mod math_trait;
pub mod scalar;
pub mod shape;

pub use conjugate::Conjugate;
pub use math_trait::{MathTrait, MathTraitMut};
pub use scalar::{Arithmetic, Scalar};
pub use shape::{HasW, HasX, HasY, HasZ, MatrixShape, Shape, SlotList, VectorShape};
