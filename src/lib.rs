pub mod convert;
pub mod input;
pub mod output;
