/// Use cases module containing application business logic orchestration
mod analyze_dependencies;
mod compare_with_npm;

pub use analyze_dependencies::AnalyzeDependenciesUseCase;
pub use compare_with_npm::CompareWithNpmUseCase;
