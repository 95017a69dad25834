/// Output style for an analysis
///
/// Both the CLI and the formatters need to understand this value, so it
/// lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Box-drawing dependency tree (default)
    #[default]
    Tree,
    /// Indented `parent -> child` edge list
    Flat,
    /// Topological load order with cycle report
    Order,
}

impl std::str::FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(OutputStyle::Tree),
            "flat" => Ok(OutputStyle::Flat),
            "order" => Ok(OutputStyle::Order),
            _ => Err(format!(
                "Invalid style: {}. Please specify 'tree', 'flat' or 'order'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputStyle::Tree => write!(f, "tree"),
            OutputStyle::Flat => write!(f, "flat"),
            OutputStyle::Order => write!(f, "order"),
        }
    }
}

/// Where the dependency graph comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// A local graph file (`--repo-path`)
    File,
    /// The npm registry, fetched while analysing (default)
    #[default]
    Live,
}

impl std::str::FromStr for SourceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "test" => Ok(SourceMode::File),
            "live" | "real" => Ok(SourceMode::Live),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'file' or 'live'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceMode::File => write!(f, "file"),
            SourceMode::Live => write!(f, "live"),
        }
    }
}
