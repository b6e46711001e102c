pub mod cli;
pub mod dispatch;
pub mod input;
pub mod message;
pub mod report;
pub mod training;
pub mod utils;
