/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_request;
mod analysis_response;
mod npm_comparison;
mod output_style;

pub use analysis_request::{AnalysisRequest, AnalysisRequestBuilder, MAX_DEPTH_LIMIT};
pub use analysis_response::{AnalysisOutcome, AnalysisResponse};
pub use npm_comparison::NpmComparison;
pub use output_style::{OutputStyle, SourceMode};
