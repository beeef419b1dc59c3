//! Build-time only. See build.rs.
