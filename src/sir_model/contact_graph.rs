use {
    net_ensembles::{GenericGraph, AdjContainer, graph::NodeContainer},
    std::{ops::Range, collections::HashSet},
    super::*,
};

pub type AgentGraph = GenericGraph<Agent, NodeContainer<Agent>>;

/// # Undirected contact network, every node hosts exactly one agent
/// * no self loops, no duplicate edges
/// * the topology never changes after construction, only the agents do
#[derive(Clone)]
pub struct ContactGraph{
    graph: AgentGraph,
}

impl ContactGraph{
    /// # Erdos-Renyi G(n, p)
    /// * every pair `i < j` is visited once in lexicographic order and
    ///  connected if a uniform draw is below `p`
    pub fn erdos_renyi<R>(n: usize, p: f64, rng: &mut R) -> Result<Self, ConfigurationError>
    where R: RandomSource + ?Sized
    {
        if n == 0 {
            return Err(ConfigurationError::NodeCount(n));
        }
        if !(0.0..=1.0).contains(&p){
            return Err(ConfigurationError::EdgeProbability(p));
        }
        let mut graph = AgentGraph::new(n);
        for i in 0..n{
            for j in i+1..n{
                if rng.uniform() < p{
                    graph.add_edge(i, j)
                        .map_err(|e| ConfigurationError::Edge{from: i, to: j, reason: format!("{e:?}")})?;
                }
            }
        }
        Ok(Self{graph})
    }

    /// Build the graph from an explicit edge list
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, ConfigurationError>
    {
        if n == 0 {
            return Err(ConfigurationError::NodeCount(n));
        }
        let mut graph = AgentGraph::new(n);
        let mut seen = HashSet::with_capacity(edges.len());
        for &(source, target) in edges{
            if source >= n || target >= n {
                return Err(ConfigurationError::Edge{from: source, to: target, reason: format!("node out of range for {n} nodes")});
            }
            if source == target {
                return Err(ConfigurationError::Edge{from: source, to: target, reason: "self loop".to_owned()});
            }
            if !seen.insert((source.min(target), source.max(target))){
                return Err(ConfigurationError::Edge{from: source, to: target, reason: "duplicate edge".to_owned()});
            }
            graph.add_edge(source, target)
                .map_err(|e| ConfigurationError::Edge{from: source, to: target, reason: format!("{e:?}")})?;
        }
        Ok(Self{graph})
    }

    pub fn node_count(&self) -> usize
    {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize
    {
        self.graph.edge_count()
    }

    pub fn all_nodes(&self) -> Range<usize>
    {
        0..self.node_count()
    }

    pub fn neighbors(&self, node: usize) -> impl Iterator<Item=usize> + '_
    {
        self.graph.container(node)
            .neighbors()
            .copied()
    }

    pub fn degree(&self, node: usize) -> usize
    {
        self.graph.container(node).degree()
    }

    /// every undirected edge exactly once, with `source < target`
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_
    {
        self.all_nodes()
            .flat_map(
                move |source|
                self.neighbors(source)
                    .filter(move |&target| source < target)
                    .map(move |target| (source, target))
            )
    }

    pub fn average_degree(&self) -> f64
    {
        2.0 * self.edge_count() as f64 / self.node_count() as f64
    }

    #[inline]
    pub fn agent(&self, node: usize) -> &Agent
    {
        self.graph.at(node)
    }

    #[inline]
    pub fn agent_mut(&mut self, node: usize) -> &mut Agent
    {
        self.graph.at_mut(node)
    }

    pub fn agents(&self) -> impl Iterator<Item=&Agent>
    {
        self.graph.contained_iter()
    }

    pub fn agents_mut(&mut self) -> impl Iterator<Item=&mut Agent>
    {
        self.graph.contained_iter_mut()
    }

    /// mutable access to the agents adjacent to `node`, together with their index
    pub fn neighbor_agents_mut(&mut self, node: usize) -> impl Iterator<Item=(usize, &mut Agent)>
    {
        self.graph.contained_iter_neighbors_mut_with_index(node)
    }
}
