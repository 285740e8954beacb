pub mod prorata;
