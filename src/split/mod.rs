mod boundary;
mod segment;


pub use boundary::{find_separator, Separator};
pub use segment::segment;

/// Byte slack allowed on either side of the ideal cut point when probing
/// for a separator
pub const SPLIT_TOLERANCE: usize = 100;
