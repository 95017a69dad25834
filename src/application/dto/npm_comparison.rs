use crate::dependency_graph::domain::{LoadOrder, PackageName};

/// NpmComparison - our load order side by side with npm's install tree
#[derive(Debug, Clone)]
pub struct NpmComparison {
    pub package: PackageName,
    /// Version that was installed with npm (`latest` when not pinned)
    pub version: String,
    /// Package names in the order npm's tree first mentions them
    pub npm_order: Vec<PackageName>,
    pub our_order: LoadOrder,
    /// Names npm installed that our graph does not reach
    pub only_in_npm: Vec<PackageName>,
    /// Names our graph reaches that npm did not install
    pub only_in_ours: Vec<PackageName>,
}
