// src/error.rs

/// Reasons a vertex list cannot be turned into a [`ConvexPolygon`](crate::geometry::ConvexPolygon).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
    #[error("the pivot has a non-finite coordinate")]
    NonFinitePivot,
    #[error("all polygon vertices coincide")]
    Degenerate,
}
