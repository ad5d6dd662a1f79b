//! Repository - the modules the host resolution engine can resolve.
//!
//! Resolution here is deliberately simple: a declared coordinate either
//! exists in the repository (and brings its own dependencies along) or it
//! does not, in which case it is recorded as unresolved and resolution
//! carries on with everything else.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::ModuleCoordinate;
use crate::resolver::graph::ResolvedGraph;
use crate::resolver::{LenientResolution, UnresolvedDependency};

/// Known modules and their direct dependencies.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    modules: HashMap<ModuleCoordinate, Vec<ModuleCoordinate>>,
}

impl Repository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a module with its direct dependencies.
    ///
    /// Publishing the same coordinate twice replaces the earlier entry.
    pub fn publish(&mut self, coord: ModuleCoordinate, dependencies: Vec<ModuleCoordinate>) {
        self.modules.insert(coord, dependencies);
    }

    /// Check if a module is available.
    pub fn contains(&self, coord: &ModuleCoordinate) -> bool {
        self.modules.contains_key(coord)
    }

    /// Number of published modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Resolve a set of declared coordinates, tolerating missing modules.
    ///
    /// Never fails: modules that cannot be found are returned as
    /// [`UnresolvedDependency`] entries and left out of the graph.
    pub fn resolve_leniently(&self, declared: &[ModuleCoordinate]) -> LenientResolution {
        let mut graph = ResolvedGraph::new();
        let mut failures = Vec::new();
        let mut reported = HashSet::new();
        let mut queue = VecDeque::new();

        for coord in declared {
            if self.contains(coord) {
                graph.add_root(coord.clone());
                queue.push_back(coord.clone());
            } else if reported.insert(coord.clone()) {
                failures.push(UnresolvedDependency::not_found(coord.clone(), None));
            }
        }

        let mut visited = HashSet::new();
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }

            let Some(deps) = self.modules.get(&current) else {
                continue;
            };

            for dep in deps {
                if self.contains(dep) {
                    graph.add_module(dep.clone());
                    graph.add_edge(&current, dep);
                    queue.push_back(dep.clone());
                } else if reported.insert(dep.clone()) {
                    failures.push(UnresolvedDependency::not_found(
                        dep.clone(),
                        Some(current.clone()),
                    ));
                }
            }
        }

        LenientResolution::new(graph, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(s: &str) -> ModuleCoordinate {
        s.parse().unwrap()
    }

    fn repo() -> Repository {
        let mut repo = Repository::new();
        repo.publish(coord("org.a:lib1:1.0"), vec![coord("org.a:lib2:1.5")]);
        repo.publish(coord("org.a:lib2:1.5"), vec![coord("org.b:lib2:2.0")]);
        repo.publish(coord("org.b:lib2:2.0"), vec![]);
        repo
    }

    #[test]
    fn test_resolves_transitively() {
        let resolution = repo().resolve_leniently(&[coord("org.a:lib1:1.0")]);

        assert!(resolution.is_complete());
        assert_eq!(resolution.graph().len(), 3);
        assert_eq!(resolution.graph().all_module_dependencies().len(), 3);
    }

    #[test]
    fn test_missing_declared_module_is_a_failure_not_an_error() {
        let resolution =
            repo().resolve_leniently(&[coord("org.a:lib1:1.0"), coord("org.x:gone:0.1")]);

        assert_eq!(resolution.graph().len(), 3);
        assert_eq!(resolution.failures().len(), 1);
        assert_eq!(resolution.failures()[0].coordinate(), &coord("org.x:gone:0.1"));
        assert!(resolution.failures()[0].required_by().is_none());
    }

    #[test]
    fn test_missing_transitive_module_records_requirer() {
        let mut repo = repo();
        repo.publish(coord("org.c:app:1.0"), vec![coord("org.x:gone:0.1")]);

        let resolution = repo.resolve_leniently(&[coord("org.c:app:1.0")]);
        assert_eq!(resolution.graph().len(), 1);
        assert_eq!(
            resolution.failures()[0].required_by(),
            Some(&coord("org.c:app:1.0"))
        );
    }

    #[test]
    fn test_each_failure_reported_once() {
        let resolution =
            repo().resolve_leniently(&[coord("org.x:gone:0.1"), coord("org.x:gone:0.1")]);
        assert_eq!(resolution.failures().len(), 1);
    }

    #[test]
    fn test_cyclic_repository_terminates() {
        let mut repo = Repository::new();
        repo.publish(coord("g:a:1"), vec![coord("g:b:1")]);
        repo.publish(coord("g:b:1"), vec![coord("g:a:1")]);

        let resolution = repo.resolve_leniently(&[coord("g:a:1")]);
        assert_eq!(resolution.graph().all_module_dependencies().len(), 2);
    }
}
