pub mod a001_rental;
pub mod a002_accommodation;
pub mod common;
