//! Tile ordering validation and the rearrangement pipeline

/// Construction and algebra of tile orderings
pub mod ordering;
/// Decode, rearrange and encode images
pub mod rearrange;
/// Consistency check between image size, tile size and ordering
pub mod validation;
