//! Front ends built on top of the compiler library

pub mod dev;
