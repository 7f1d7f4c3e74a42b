//! Application services for personal task boards.

mod board;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
