pub mod a001_rental;
