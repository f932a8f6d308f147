use {
    serde::{Serialize, Deserialize},
    super::*,
};

/// # Drives the discrete time steps
/// * every agent is activated exactly once per step, in `order`
/// * agents mutate their neighbors in place: an agent activated later in the
///  same step already sees the infections caused by earlier ones
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationClock{
    order: Vec<usize>,
}

impl SimulationClock{
    pub fn ascending(n: usize) -> Self
    {
        Self{
            order: (0..n).collect()
        }
    }

    /// shuffles the order once, it stays fixed afterwards
    pub fn shuffled<R>(n: usize, rng: &mut R) -> Self
    where R: RandomSource + ?Sized
    {
        let mut clock = Self::ascending(n);
        rng.shuffle(&mut clock.order);
        clock
    }

    pub fn new<R>(n: usize, activation: ActivationOrder, rng: &mut R) -> Self
    where R: RandomSource + ?Sized
    {
        match activation{
            ActivationOrder::Ascending => Self::ascending(n),
            ActivationOrder::Shuffled => Self::shuffled(n, rng)
        }
    }

    /// `order` has to be a permutation of the node indices
    pub(crate) fn from_order(order: Vec<usize>) -> Self
    {
        Self{order}
    }

    pub fn order(&self) -> &[usize]
    {
        &self.order
    }

    /// One time step for all agents
    pub fn step<R>(&self, graph: &mut ContactGraph, rules: &TransitionRules, rng: &mut R)
    where R: RandomSource + ?Sized
    {
        for &index in self.order.iter(){
            activate_agent(graph, index, rules, rng);
        }
    }
}

/// # The rule of a single agent
/// 1. count the day if infected
/// 2. try to infect susceptible neighbors
/// 3. death or recovery
fn activate_agent<R>(graph: &mut ContactGraph, index: usize, rules: &TransitionRules, rng: &mut R)
where R: RandomSource + ?Sized
{
    let mut agent = *graph.agent(index);
    if !agent.state.inf_check(){
        return;
    }
    agent.tick_infection();

    if agent.can_spread(rules){
        for (_, neighbor) in graph.neighbor_agents_mut(index){
            agent.try_infect(neighbor, rng);
        }
    }
    agent.resolve_outcome(rules, rng);
    *graph.agent_mut(index) = agent;
}
