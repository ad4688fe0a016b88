// Matching side: fuzzy location comparison and the profile-vs-listings
// filter policy built on top of it.

pub mod filter;
pub mod fuzzy;
