//! Configuration sections read from `tola.toml`.
//!
//! Only the parts that affect link rendering are modelled; the rest of the
//! file is tolerated and reported as ignored in verbose mode.

mod site;

pub use site::SiteSectionConfig;
