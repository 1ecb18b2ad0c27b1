mod json;
mod text;

pub use json::{render_board_json, BoardSnapshot};
pub use text::{render_board, render_detail, render_header, render_notice, render_stats, score_bar};

pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}
