//! careerfit-report — HTML and Markdown renderings of an assessment report.

pub mod html;
pub mod markdown;
