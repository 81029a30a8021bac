mod bounding_box;
mod is_manifold;

pub use bounding_box::{Aabb, BoundingBox};
pub use is_manifold::{IsManifold, ManifoldReport};
