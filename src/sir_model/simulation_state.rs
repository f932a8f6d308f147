use {
    serde::{Serialize, Deserialize},
    std::io::{Read, Write},
    super::*,
};

/// # Everything that changes during a run
/// * the topology of `graph` is fixed, only the agents are mutated
/// * `step` counts the performed time steps, 0 is the seeded initial condition
#[derive(Clone)]
pub struct SimulationState{
    graph: ContactGraph,
    clock: SimulationClock,
    rules: TransitionRules,
    step: usize,
}

impl SimulationState{
    pub fn new(graph: ContactGraph, clock: SimulationClock, rules: TransitionRules) -> Self
    {
        Self{
            graph,
            clock,
            rules,
            step: 0
        }
    }

    pub fn graph(&self) -> &ContactGraph
    {
        &self.graph
    }

    pub fn clock(&self) -> &SimulationClock
    {
        &self.clock
    }

    pub fn rules(&self) -> &TransitionRules
    {
        &self.rules
    }

    pub fn step_count(&self) -> usize
    {
        self.step
    }

    /// Advance exactly one time step
    pub fn advance<R>(&mut self, rng: &mut R)
    where R: RandomSource + ?Sized
    {
        self.clock.step(&mut self.graph, &self.rules, rng);
        self.step += 1;
    }

    pub fn snapshot(&self) -> MetricSnapshot
    {
        MetricSnapshot::capture(self.step, &self.graph)
    }

    pub fn counts(&self) -> HealthCounts
    {
        HealthCounts::tally(self.graph.agents())
    }

    /// no infected agent is left, nothing can change anymore
    pub fn is_extinct(&self) -> bool
    {
        !self.graph.agents().any(|a| a.state.inf_check())
    }

    pub fn dump(&self) -> StateDump
    {
        StateDump{
            step: self.step,
            agents: self.graph.agents().copied().collect(),
            edges: self.graph.edges().collect(),
            activation_order: self.clock.order().to_vec(),
            rules: self.rules,
        }
    }
}

/// Flat, serializable form of a [SimulationState]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StateDump{
    pub step: usize,
    pub agents: Vec<Agent>,
    pub edges: Vec<(usize, usize)>,
    pub activation_order: Vec<usize>,
    pub rules: TransitionRules,
}

impl StateDump{
    pub fn write_bincode<W: Write>(&self, writer: W) -> Result<(), SimError>
    {
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    pub fn read_bincode<R: Read>(reader: R) -> Result<Self, SimError>
    {
        Ok(bincode::deserialize_from(reader)?)
    }

    /// # Rebuild the state, e.g. to continue a stored run
    /// * fails if the agent ids do not match their nodes, if a chance of an agent
    ///  is not a probability or if the activation order is not a permutation
    pub fn into_state(self) -> Result<SimulationState, ConfigurationError>
    {
        let n = self.agents.len();
        for (node, agent) in self.agents.iter().enumerate(){
            if agent.id != node {
                return Err(ConfigurationError::AgentId{node, id: agent.id});
            }
            ConfigurationError::check_probability("spread_chance", agent.spread_chance)?;
            ConfigurationError::check_probability("recovery_chance", agent.recovery_chance)?;
            ConfigurationError::check_probability("vaccine_effectiveness", agent.vaccine_effectiveness)?;
            ConfigurationError::check_probability("lethality_rate", agent.lethality_rate)?;
        }

        let mut sorted = self.activation_order.clone();
        sorted.sort_unstable();
        if !sorted.iter().copied().eq(0..n){
            return Err(ConfigurationError::ActivationOrder(n));
        }

        let mut graph = ContactGraph::from_edges(n, &self.edges)?;
        for (stored, agent) in self.agents.into_iter().zip(graph.agents_mut()){
            *agent = stored;
        }
        let clock = SimulationClock::from_order(self.activation_order);
        let mut state = SimulationState::new(graph, clock, self.rules);
        state.step = self.step;
        Ok(state)
    }
}
