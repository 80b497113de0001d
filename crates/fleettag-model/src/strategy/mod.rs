mod collision;
pub use collision::CollisionPolicy;
