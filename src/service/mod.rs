//! Application services built on the ports.

mod wishlist;

pub use wishlist::{RecoveryPolicy, WishlistService};
