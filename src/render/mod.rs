pub mod console;
pub mod html;
pub mod manifest;

use crate::error::ReviewError;
use crate::review::review_model::ReviewPage;

/// Output formats the CLI can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Console,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReviewError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render a page in the given format.
pub fn render(page: &ReviewPage, format: OutputFormat) -> Result<String, ReviewError> {
    match format {
        OutputFormat::Html => Ok(html::generate_html_page(page)),
        OutputFormat::Console => Ok(console::format_console_report(page)),
        OutputFormat::Json => manifest::to_json(page),
    }
}
