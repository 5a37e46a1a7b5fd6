pub mod board;
pub mod call;
pub mod constants;
pub mod ops;
