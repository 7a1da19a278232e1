pub mod contest;
pub mod draw;
pub mod prizes;
pub mod utils;
