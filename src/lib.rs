//! Armbian fact gathering.
//!
//! Parses `/etc/armbian-release` into a flat, normalized key/value record and
//! wraps it for a host automation framework.

pub mod armbian_release;
pub mod facts;
