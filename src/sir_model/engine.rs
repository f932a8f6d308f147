use {
    rand::SeedableRng,
    rand_pcg::Pcg64,
    log::{debug, trace},
    super::*,
};

/// Result of a run, the final state is kept for inspection
#[derive(Clone)]
pub struct SimulationRun{
    pub snapshots: Vec<MetricSnapshot>,
    pub state: SimulationState,
}

impl SimulationRun{
    pub fn last_snapshot(&self) -> Option<&MetricSnapshot>
    {
        self.snapshots.last()
    }
}

/// # Builds the contact network, seeds the outbreak and runs the time steps
/// * only constructed from validated parameters
#[derive(Clone, Debug)]
pub struct SimulationEngine{
    params: VirusParams,
    rules: TransitionRules,
}

impl SimulationEngine{
    pub fn new(params: VirusParams) -> Result<Self, ConfigurationError>
    {
        params.validate()?;
        let rules = params.rules();
        Ok(Self{params, rules})
    }

    pub fn params(&self) -> &VirusParams
    {
        &self.params
    }

    pub fn rules(&self) -> &TransitionRules
    {
        &self.rules
    }

    pub fn graph_rng(&self) -> Pcg64
    {
        Pcg64::seed_from_u64(self.params.graph_seed)
    }

    pub fn sir_rng(&self) -> Pcg64
    {
        Pcg64::seed_from_u64(self.params.sir_seed)
    }

    pub fn build_graph<R>(&self, rng: &mut R) -> Result<ContactGraph, ConfigurationError>
    where R: RandomSource + ?Sized
    {
        let graph = ContactGraph::erdos_renyi(
            self.params.num_nodes,
            self.params.edge_probability(),
            rng
        )?;
        debug!(
            "created contact graph with {} nodes and {} edges, average degree {:.3}",
            graph.node_count(),
            graph.edge_count(),
            graph.average_degree()
        );
        Ok(graph)
    }

    /// # Place the agents and seed the initial condition
    /// * all agents start unvaccinated susceptible
    /// * `min(initial_outbreak_size, n)` distinct agents get infected
    /// * `floor(n * vaccinated_rate)` distinct agents are drawn from all nodes,
    ///  the ones that are not infected get vaccinated
    pub fn seed_state<R>(&self, mut graph: ContactGraph, rng: &mut R) -> SimulationState
    where R: RandomSource + ?Sized
    {
        let n = graph.node_count();
        graph.agents_mut()
            .for_each(
                |agent|
                {
                    *agent = Agent::new(agent.id, HealthState::UnvaccinatedSusceptible);
                    agent.set_params(&self.params);
                }
            );

        let infected = rng.sample_distinct(n, self.params.outbreak_size());
        for &index in infected.iter(){
            graph.agent_mut(index).seed_state(HealthState::Infected);
        }

        let vaccinated = rng.sample_distinct(n, self.params.vaccination_draws());
        let mut vaccinated_count = 0;
        for &index in vaccinated.iter(){
            let agent = graph.agent_mut(index);
            if !agent.state.inf_check(){
                agent.seed_state(HealthState::VaccinatedSusceptible);
                vaccinated_count += 1;
            }
        }
        debug!("seeded {} infected and {} vaccinated agents", infected.len(), vaccinated_count);

        let clock = SimulationClock::new(n, self.params.activation, rng);
        SimulationState::new(graph, clock, self.rules)
    }

    /// run `steps` time steps, returns `steps + 1` snapshots
    pub fn run_state<R>(&self, mut state: SimulationState, steps: usize, rng: &mut R) -> SimulationRun
    where R: RandomSource + ?Sized
    {
        let mut snapshots = Vec::with_capacity(steps + 1);
        snapshots.push(state.snapshot());
        for _ in 0..steps{
            state.advance(rng);
            let snapshot = state.snapshot();
            trace!("step {}: {:?}", snapshot.step, snapshot.counts);
            snapshots.push(snapshot);
        }
        SimulationRun{snapshots, state}
    }

    /// use an already existing contact network, the agents on it are reset
    pub fn run_on_graph<R>(&self, graph: ContactGraph, steps: usize, sir_rng: &mut R) -> SimulationRun
    where R: RandomSource + ?Sized
    {
        let state = self.seed_state(graph, sir_rng);
        self.run_state(state, steps, sir_rng)
    }

    pub fn run_with<G, R>(&self, steps: usize, graph_rng: &mut G, sir_rng: &mut R) -> Result<SimulationRun, ConfigurationError>
    where G: RandomSource + ?Sized,
        R: RandomSource + ?Sized
    {
        let graph = self.build_graph(graph_rng)?;
        Ok(self.run_on_graph(graph, steps, sir_rng))
    }

    /// Run with the rngs seeded by `graph_seed` and `sir_seed`
    pub fn run(&self, steps: usize) -> Result<SimulationRun, ConfigurationError>
    {
        let mut graph_rng = self.graph_rng();
        let mut sir_rng = self.sir_rng();
        self.run_with(steps, &mut graph_rng, &mut sir_rng)
    }
}
