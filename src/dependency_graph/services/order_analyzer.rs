use crate::dependency_graph::domain::{AnalysisOptions, DependencyGraph, LoadOrder, PackageName};
use std::collections::{HashMap, HashSet, VecDeque};

/// OrderAnalyzer service computing a cycle-aware load order
///
/// Pure graph logic: no I/O. The analysis runs over the subgraph reachable
/// from the start node within the depth bound, with edges into ignored names
/// removed.
pub struct OrderAnalyzer;

impl OrderAnalyzer {
    /// Computes the topological load order and any cycles
    ///
    /// # Arguments
    /// * `graph` - The dependency graph
    /// * `start` - Node the reachable subgraph is grown from
    /// * `options` - Depth bound and ignore filter
    ///
    /// # Returns
    /// A LoadOrder whose `cycles` is empty iff the filtered reachable
    /// subgraph is acyclic
    pub fn load_order(
        graph: &DependencyGraph,
        start: &PackageName,
        options: &AnalysisOptions,
    ) -> LoadOrder {
        let reachable = Self::reachable(graph, start, options);
        let reachable_set: HashSet<&PackageName> = reachable.iter().collect();

        let order = Self::kahn(graph, &reachable, &reachable_set, options);

        let ordered: HashSet<&PackageName> = order.iter().collect();
        let remaining: Vec<&PackageName> = reachable
            .iter()
            .filter(|name| !ordered.contains(name))
            .collect();

        let cycles = Self::extract_cycles(graph, &remaining, &reachable_set, options);

        let on_cycle: HashSet<&PackageName> = cycles.iter().flatten().collect();
        let blocked = remaining
            .iter()
            .filter(|name| !on_cycle.contains(*name))
            .map(|name| (*name).clone())
            .collect();

        tracing::debug!(
            reachable = reachable.len(),
            ordered = order.len(),
            cycles = cycles.len(),
            "computed load order"
        );

        LoadOrder {
            reachable_count: reachable.len(),
            order,
            cycles,
            blocked,
        }
    }

    /// Breadth-first reachability in discovery order
    fn reachable(
        graph: &DependencyGraph,
        start: &PackageName,
        options: &AnalysisOptions,
    ) -> Vec<PackageName> {
        let mut discovered = Vec::new();
        let mut seen: HashSet<PackageName> = HashSet::new();
        let mut queue = VecDeque::from([(start.clone(), 0usize)]);

        while let Some((name, depth)) = queue.pop_front() {
            if seen.contains(&name) || depth > options.max_depth {
                continue;
            }
            seen.insert(name.clone());

            for dependency in graph.dependencies_of(name.as_str()).unwrap_or_default() {
                if options.is_ignored(dependency) {
                    continue;
                }
                queue.push_back((dependency.clone(), depth + 1));
            }
            discovered.push(name);
        }

        discovered
    }

    /// Edges of `name` that stay inside the filtered reachable subgraph
    fn eligible_edges<'g>(
        graph: &'g DependencyGraph,
        name: &PackageName,
        reachable: &'g HashSet<&'g PackageName>,
        options: &'g AnalysisOptions,
    ) -> impl Iterator<Item = &'g PackageName> + 'g {
        graph
            .dependencies_of(name.as_str())
            .unwrap_or_default()
            .iter()
            .filter(move |dep| reachable.contains(dep) && !options.is_ignored(dep))
    }

    /// Kahn's algorithm restricted to the reachable set, FIFO ready queue
    fn kahn(
        graph: &DependencyGraph,
        reachable: &[PackageName],
        reachable_set: &HashSet<&PackageName>,
        options: &AnalysisOptions,
    ) -> Vec<PackageName> {
        let mut in_degree: HashMap<&PackageName, usize> =
            reachable.iter().map(|name| (name, 0)).collect();

        for name in reachable {
            for dependency in Self::eligible_edges(graph, name, reachable_set, options) {
                if let Some(degree) = in_degree.get_mut(dependency) {
                    *degree += 1;
                }
            }
        }

        let mut ready: VecDeque<&PackageName> = reachable
            .iter()
            .filter(|name| in_degree.get(name) == Some(&0))
            .collect();

        let mut order = Vec::with_capacity(reachable.len());
        while let Some(name) = ready.pop_front() {
            order.push(name.clone());
            for dependency in Self::eligible_edges(graph, name, reachable_set, options) {
                if let Some(degree) = in_degree.get_mut(dependency) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(dependency);
                    }
                }
            }
        }

        order
    }

    /// Depth-first search over the unordered nodes with an explicit stack.
    ///
    /// Each back-edge yields the path slice from its target to the top of
    /// the stack, closed by repeating the target. Overlapping reports are
    /// kept as-is.
    fn extract_cycles(
        graph: &DependencyGraph,
        remaining: &[&PackageName],
        reachable_set: &HashSet<&PackageName>,
        options: &AnalysisOptions,
    ) -> Vec<Vec<PackageName>> {
        let mut cycles = Vec::new();
        let mut visited: HashSet<&PackageName> = HashSet::new();

        for &root in remaining {
            if visited.contains(root) {
                continue;
            }

            // (node, index of the next edge to examine)
            let mut stack: Vec<(&PackageName, usize)> = vec![(root, 0)];
            let mut on_path: HashSet<&PackageName> = HashSet::from([root]);
            visited.insert(root);

            while let Some(top) = stack.last_mut() {
                let node = top.0;
                let edges = graph.dependencies_of(node.as_str()).unwrap_or_default();

                if top.1 >= edges.len() {
                    on_path.remove(node);
                    stack.pop();
                    continue;
                }

                let next = &edges[top.1];
                top.1 += 1;

                if !reachable_set.contains(next) || options.is_ignored(next) {
                    continue;
                }

                if on_path.contains(next) {
                    if let Some(start) = stack.iter().position(|(name, _)| *name == next) {
                        let mut cycle: Vec<PackageName> =
                            stack[start..].iter().map(|(name, _)| (*name).clone()).collect();
                        cycle.push(next.clone());
                        cycles.push(cycle);
                    }
                } else if visited.insert(next) {
                    on_path.insert(next);
                    stack.push((next, 0));
                }
            }
        }

        cycles
    }
}
