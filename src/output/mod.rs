pub mod formatter;
pub mod stars;

pub use formatter::{
    format_criteria, format_json, format_report, format_report_html, format_score, format_tips_html,
    should_use_colors,
};
pub use stars::StarRating;
