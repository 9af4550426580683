pub mod prelude;

pub mod word;
