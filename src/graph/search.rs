//! Graph-level entry points for the search algorithms.
//!
//! The free functions in [`algorithms`](crate::graph::algorithms) work over any
//! capability provider. The methods here bind them to a [`Graph`], validate the
//! handles involved and add payload-based target matching.
//!
//! Weighted graphs search over their edge weights, using the cheapest parallel
//! edge. Unweighted graphs count every edge as one, so their distances are hop
//! counts.

use std::cmp::Ordering;

use crate::{
    graph::{
        adjacency::{Adjacency, NeighborSet, WeightMap},
        algorithms::{self, SearchPath, ShortestPaths, TraversalResult},
        config::{SearchConfig, TraversalOptions},
        container::Graph,
        vertex::VertexId,
        weight::Weight,
    },
    Result,
};

impl<T, A: Adjacency> Graph<T, A> {
    /// Traverses the graph from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `start` is not live.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphsearch::graph::{TraversalOptions, UnweightedGraph};
    ///
    /// let mut graph: UnweightedGraph<u32> = UnweightedGraph::directed();
    /// let a = graph.add_vertex(1);
    /// let b = graph.add_vertex(2);
    /// let c = graph.add_vertex(3);
    /// graph.add_edge(a, b, ())?;
    /// graph.add_edge(b, c, ())?;
    ///
    /// let result = graph.traverse(a, &TraversalOptions::bfs())?;
    /// assert_eq!(result.order, vec![a, b, c]);
    /// # Ok::<(), graphsearch::Error>(())
    /// ```
    pub fn traverse(
        &self,
        start: VertexId,
        options: &TraversalOptions,
    ) -> Result<TraversalResult<VertexId>> {
        self.check(start)?;
        Ok(algorithms::traverse(self, start, options))
    }

    /// Searches for a vertex whose payload equals `target` under `comparator`.
    ///
    /// Vertices are matched by payload, not by handle: the first visited vertex
    /// for which `comparator(payload, target)` returns [`Ordering::Equal`] ends
    /// the traversal. Set `options.return_path` to get the path to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `start` is not live.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphsearch::graph::{TraversalOptions, UnweightedGraph};
    ///
    /// let mut graph: UnweightedGraph<&str> = UnweightedGraph::undirected();
    /// let home = graph.add_vertex("home");
    /// let shop = graph.add_vertex("SHOP");
    /// graph.add_edge(home, shop, ())?;
    ///
    /// let options = TraversalOptions::bfs().with_path();
    /// let result = graph.find_value_by(home, &"shop", &options, |a, b| {
    ///     a.to_lowercase().cmp(&b.to_lowercase())
    /// })?;
    /// assert!(result.target_found);
    /// assert_eq!(result.path, vec![home, shop]);
    /// # Ok::<(), graphsearch::Error>(())
    /// ```
    pub fn find_value_by<F>(
        &self,
        start: VertexId,
        target: &T,
        options: &TraversalOptions,
        comparator: F,
    ) -> Result<TraversalResult<VertexId>>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.check(start)?;
        Ok(algorithms::traverse_until(self, start, options, |v| {
            self.value(v)
                .is_some_and(|value| comparator(value, target) == Ordering::Equal)
        }))
    }

    /// Searches for a vertex whose payload equals `target` under [`Ord`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `start` is not live.
    pub fn find_value(
        &self,
        start: VertexId,
        target: &T,
        options: &TraversalOptions,
    ) -> Result<TraversalResult<VertexId>>
    where
        T: Ord,
    {
        self.find_value_by(start, target, options, T::cmp)
    }

    /// Orders all live vertices so that every edge points forward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`](crate::Error::CycleDetected) if the graph is not a
    /// DAG. Undirected graphs with at least one edge always contain a cycle.
    pub fn topological_sort(&self) -> Result<Vec<VertexId>> {
        algorithms::topological_sort(self.vertices(), self)
    }
}

impl<T, W: Weight> Graph<T, WeightMap<W>> {
    /// Computes weighted distances from `start` to every reachable vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `start` is not live and
    /// [`Error::NegativeWeight`](crate::Error::NegativeWeight) if a negative weight is reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphsearch::graph::WeightedGraph;
    ///
    /// let mut graph: WeightedGraph<u32, u32> = WeightedGraph::directed();
    /// let v: Vec<_> = (1..=4).map(|i| graph.add_vertex(i)).collect();
    /// graph.add_edge(v[0], v[1], 4)?;
    /// graph.add_edge(v[0], v[2], 2)?;
    /// graph.add_edge(v[1], v[2], 2)?;
    /// graph.add_edge(v[1], v[3], 7)?;
    /// graph.add_edge(v[2], v[3], 1)?;
    ///
    /// let paths = graph.dijkstra(v[0])?;
    /// assert_eq!(paths.distance(v[3]), Some(3));
    /// assert_eq!(paths.path_to(v[3]), vec![v[0], v[2], v[3]]);
    /// # Ok::<(), graphsearch::Error>(())
    /// ```
    pub fn dijkstra(&self, start: VertexId) -> Result<ShortestPaths<VertexId, W>> {
        self.dijkstra_with(start, &SearchConfig::default())
    }

    /// [`dijkstra`](Self::dijkstra) with resource limits.
    ///
    /// # Errors
    ///
    /// As [`dijkstra`](Self::dijkstra), plus the limit errors of `config`.
    pub fn dijkstra_with(
        &self,
        start: VertexId,
        config: &SearchConfig,
    ) -> Result<ShortestPaths<VertexId, W>> {
        self.check(start)?;
        algorithms::dijkstra_with(self, self, start, config)
    }

    /// Computes the cheapest weighted path from `start` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if either handle is not
    /// live, [`Error::NegativeWeight`](crate::Error::NegativeWeight) if a negative weight is
    /// reached and [`Error::WeightOverflow`](crate::Error::WeightOverflow) if a path cost
    /// does not fit in `W`.
    pub fn shortest_path(
        &self,
        start: VertexId,
        target: VertexId,
    ) -> Result<SearchPath<VertexId, W>> {
        self.check(start)?;
        self.check(target)?;
        algorithms::dijkstra_path(self, self, start, target)
    }

    /// Computes the cheapest weighted path from `start` to `target` using A*.
    ///
    /// `heuristic(vertex, target)` must not overestimate the remaining cost for
    /// the result to be optimal. Payload-based heuristics can capture the graph
    /// and look up [`value`](Graph::value).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if either handle is not
    /// live, [`Error::NegativeWeight`](crate::Error::NegativeWeight) if a negative weight is
    /// reached and [`Error::WeightOverflow`](crate::Error::WeightOverflow) if a path cost
    /// does not fit in `W`.
    pub fn a_star<H>(
        &self,
        start: VertexId,
        target: VertexId,
        heuristic: H,
    ) -> Result<SearchPath<VertexId, W>>
    where
        H: Fn(VertexId, VertexId) -> W,
    {
        self.check(start)?;
        self.check(target)?;
        algorithms::a_star(self, self, heuristic, start, target)
    }
}

impl<T> Graph<T, NeighborSet> {
    /// Computes hop counts from `start` to every reachable vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `start` is not live.
    pub fn dijkstra(&self, start: VertexId) -> Result<ShortestPaths<VertexId, usize>> {
        self.dijkstra_with(start, &SearchConfig::default())
    }

    /// [`dijkstra`](Self::dijkstra) with resource limits.
    ///
    /// # Errors
    ///
    /// As [`dijkstra`](Self::dijkstra), plus the limit errors of `config`.
    pub fn dijkstra_with(
        &self,
        start: VertexId,
        config: &SearchConfig,
    ) -> Result<ShortestPaths<VertexId, usize>> {
        self.check(start)?;
        algorithms::dijkstra_with(self, self, start, config)
    }

    /// Computes a path with the fewest edges from `start` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if either handle is not live.
    pub fn shortest_path(
        &self,
        start: VertexId,
        target: VertexId,
    ) -> Result<SearchPath<VertexId, usize>> {
        self.check(start)?;
        self.check(target)?;
        algorithms::dijkstra_path(self, self, start, target)
    }

    /// Computes a path with the fewest edges from `start` to `target` using A*.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if either handle is not live.
    pub fn a_star<H>(
        &self,
        start: VertexId,
        target: VertexId,
        heuristic: H,
    ) -> Result<SearchPath<VertexId, usize>>
    where
        H: Fn(VertexId, VertexId) -> usize,
    {
        self.check(start)?;
        self.check(target)?;
        algorithms::a_star(self, self, heuristic, start, target)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{
            config::TraversalOptions,
            container::{UnweightedGraph, WeightedGraph},
            vertex::VertexId,
        },
        Error,
    };

    /// The weighted graph `{1:[(2,4),(3,2)], 2:[(3,2),(4,7)], 3:[(4,1)], 4:[]}`
    fn create_weighted_graph() -> (WeightedGraph<u32, u32>, Vec<VertexId>) {
        let mut graph = WeightedGraph::directed();
        let v: Vec<VertexId> = (1..=4).map(|i| graph.add_vertex(i)).collect();
        for (from, to, w) in [(0, 1, 4), (0, 2, 2), (1, 2, 2), (1, 3, 7), (2, 3, 1)] {
            graph.add_edge(v[from], v[to], w).unwrap();
        }
        (graph, v)
    }

    #[test]
    fn test_graph_dijkstra() {
        let (graph, v) = create_weighted_graph();
        let paths = graph.dijkstra(v[0]).unwrap();

        let by_payload: Vec<(u32, u32)> = v
            .iter()
            .map(|&id| (*graph.value(id).unwrap(), paths.distance(id).unwrap()))
            .collect();
        assert_eq!(by_payload, vec![(1, 0), (2, 4), (3, 2), (4, 3)]);
    }

    #[test]
    fn test_graph_shortest_path_uses_cheapest_parallel_edge() {
        let (mut graph, v) = create_weighted_graph();
        graph.add_edge(v[0], v[3], 10).unwrap();
        graph.add_edge(v[0], v[3], 1).unwrap();

        let path = graph.shortest_path(v[0], v[3]).unwrap();
        assert_eq!(path.nodes, vec![v[0], v[3]]);
        assert_eq!(path.cost, Some(1));
    }

    #[test]
    fn test_graph_a_star_zero_heuristic() {
        let (graph, v) = create_weighted_graph();
        let path = graph.a_star(v[0], v[3], |_, _| 0).unwrap();
        assert_eq!(path.cost, Some(3));
    }

    #[test]
    fn test_graph_unweighted_hops() {
        let mut graph: UnweightedGraph<char> = UnweightedGraph::undirected();
        let ids: Vec<VertexId> = "abcde".chars().map(|c| graph.add_vertex(c)).collect();
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1], ()).unwrap();
        }

        let paths = graph.dijkstra(ids[0]).unwrap();
        assert_eq!(paths.distance(ids[4]), Some(4));

        let path = graph.shortest_path(ids[4], ids[0]).unwrap();
        assert_eq!(path.edge_count(), Some(4));

        let path = graph.a_star(ids[0], ids[3], |a, b| a.index().abs_diff(b.index())).unwrap();
        assert_eq!(path.cost, Some(3));
    }

    #[test]
    fn test_graph_search_unknown_vertex() {
        let (mut graph, v) = create_weighted_graph();
        graph.remove_vertex(v[3]);

        assert_eq!(
            graph.shortest_path(v[0], v[3]).unwrap_err(),
            Error::UnknownVertex(v[3])
        );
        assert!(graph.dijkstra(v[3]).is_err());
        assert!(graph.traverse(v[3], &TraversalOptions::bfs()).is_err());

        // The removed vertex is gone from every distance map
        let paths = graph.dijkstra(v[0]).unwrap();
        assert_eq!(paths.distance(v[3]), None);
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_graph_find_value() {
        let mut graph: UnweightedGraph<u32> = UnweightedGraph::directed();
        let ids: Vec<VertexId> = [10, 20, 30, 40]
            .into_iter()
            .map(|x| graph.add_vertex(x))
            .collect();
        graph.add_edge(ids[0], ids[1], ()).unwrap();
        graph.add_edge(ids[0], ids[2], ()).unwrap();
        graph.add_edge(ids[2], ids[3], ()).unwrap();

        let options = TraversalOptions::bfs().with_path();
        let found = graph.find_value(ids[0], &40, &options).unwrap();
        assert!(found.target_found);
        assert_eq!(found.path, vec![ids[0], ids[2], ids[3]]);

        let missing = graph.find_value(ids[0], &99, &options).unwrap();
        assert!(!missing.target_found);
        assert!(missing.path.is_empty());
        assert_eq!(missing.visited_count(), 4);
    }

    #[test]
    fn test_graph_topological_sort() {
        let mut graph: UnweightedGraph<&str> = UnweightedGraph::directed();
        let shirt = graph.add_vertex("shirt");
        let tie = graph.add_vertex("tie");
        let jacket = graph.add_vertex("jacket");
        let belt = graph.add_vertex("belt");
        graph.add_edge(shirt, tie, ()).unwrap();
        graph.add_edge(tie, jacket, ()).unwrap();
        graph.add_edge(belt, jacket, ()).unwrap();

        let order = graph.topological_sort().unwrap();
        let pos = |v: VertexId| order.iter().position(|&x| x == v).unwrap();
        assert!(pos(shirt) < pos(tie));
        assert!(pos(tie) < pos(jacket));
        assert!(pos(belt) < pos(jacket));

        graph.add_edge(jacket, shirt, ()).unwrap();
        assert!(graph.topological_sort().unwrap_err().is_structural());
    }
}
