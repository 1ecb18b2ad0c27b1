pub mod board_service;
pub mod categories;
pub mod grading;
pub mod ranking;
pub mod refresh_check;
pub mod retry;
pub mod session;
pub mod statistics;

pub use board_service::BoardService;
