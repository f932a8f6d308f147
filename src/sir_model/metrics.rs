use {
    serde::{Serialize, Deserialize},
    super::*,
};

/// Number of agents in each health state
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HealthCounts{
    pub unvaccinated_susceptible: usize,
    pub vaccinated_susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
    pub dead: usize,
}

impl HealthCounts{
    pub fn tally<'a, I>(agents: I) -> Self
    where I: IntoIterator<Item=&'a Agent>
    {
        let mut counts = Self::default();
        agents.into_iter()
            .for_each(
                |agent|
                match agent.state{
                    HealthState::UnvaccinatedSusceptible => counts.unvaccinated_susceptible += 1,
                    HealthState::VaccinatedSusceptible => counts.vaccinated_susceptible += 1,
                    HealthState::Infected => counts.infected += 1,
                    HealthState::Recovered => counts.recovered += 1,
                    HealthState::Dead => counts.dead += 1
                }
            );
        counts
    }

    pub fn count(&self, state: HealthState) -> usize
    {
        match state{
            HealthState::UnvaccinatedSusceptible => self.unvaccinated_susceptible,
            HealthState::VaccinatedSusceptible => self.vaccinated_susceptible,
            HealthState::Infected => self.infected,
            HealthState::Recovered => self.recovered,
            HealthState::Dead => self.dead
        }
    }

    pub fn susceptible(&self) -> usize
    {
        self.unvaccinated_susceptible + self.vaccinated_susceptible
    }

    pub fn alive(&self) -> usize
    {
        self.susceptible() + self.recovered
    }

    pub fn total(&self) -> usize
    {
        self.alive() + self.infected + self.dead
    }

    /// Infected, recovered or dead
    pub fn ever_infected(&self) -> usize
    {
        self.infected + self.recovered + self.dead
    }

    /// Recovered / (Unvaccinated + Vaccinated)
    pub fn resistant_susceptible_ratio(&self) -> f64
    {
        ratio_or_infinity(self.recovered, self.susceptible())
    }

    /// Dead / all nodes
    pub fn mortality(&self) -> f64
    {
        ratio_or_infinity(self.dead, self.total())
    }

    /// (Unvaccinated + Vaccinated + Recovered) / Dead
    pub fn alive_dead_ratio(&self) -> f64
    {
        ratio_or_infinity(self.alive(), self.dead)
    }
}

/// A zero denominator gives positive infinity, "no susceptibles left" is a valid result
#[inline]
pub fn ratio_or_infinity(numerator: usize, denominator: usize) -> f64
{
    if denominator == 0 {
        f64::INFINITY
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Number of agents in `state`
pub fn count(graph: &ContactGraph, state: HealthState) -> usize
{
    graph.agents()
        .filter(|agent| agent.state == state)
        .count()
}

/// Metrics of one time step, step 0 is the initial condition
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MetricSnapshot{
    pub step: usize,
    pub counts: HealthCounts,
    pub resistant_susceptible_ratio: f64,
    pub mortality: f64,
    pub alive_dead_ratio: f64,
}

impl MetricSnapshot{
    pub fn from_counts(step: usize, counts: HealthCounts) -> Self
    {
        Self{
            step,
            counts,
            resistant_susceptible_ratio: counts.resistant_susceptible_ratio(),
            mortality: counts.mortality(),
            alive_dead_ratio: counts.alive_dead_ratio()
        }
    }

    pub fn capture(step: usize, graph: &ContactGraph) -> Self
    {
        Self::from_counts(step, HealthCounts::tally(graph.agents()))
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    fn counts(u: usize, v: usize, i: usize, r: usize, d: usize) -> HealthCounts
    {
        HealthCounts{
            unvaccinated_susceptible: u,
            vaccinated_susceptible: v,
            infected: i,
            recovered: r,
            dead: d
        }
    }

    #[test]
    fn ratios()
    {
        let c = counts(3, 1, 2, 2, 2);
        assert_eq!(c.total(), 10);
        assert_eq!(c.resistant_susceptible_ratio(), 0.5);
        assert_eq!(c.mortality(), 0.2);
        assert_eq!(c.alive_dead_ratio(), 3.0);
        assert_eq!(c.ever_infected(), 6);
    }

    #[test]
    fn zero_denominators_give_infinity()
    {
        // no susceptibles left
        assert_eq!(counts(0, 0, 1, 4, 0).resistant_susceptible_ratio(), f64::INFINITY);
        // no nodes at all
        assert_eq!(counts(0, 0, 0, 0, 0).mortality(), f64::INFINITY);
        // nobody died
        assert_eq!(counts(5, 0, 0, 0, 0).alive_dead_ratio(), f64::INFINITY);
    }

    #[test]
    fn tally_matches_count()
    {
        let mut graph = ContactGraph::from_edges(6, &[(0, 1)]).unwrap();
        graph.agent_mut(1).seed_state(HealthState::Infected);
        graph.agent_mut(2).seed_state(HealthState::VaccinatedSusceptible);
        graph.agent_mut(3).seed_state(HealthState::Dead);
        graph.agent_mut(4).seed_state(HealthState::Dead);
        let tally = HealthCounts::tally(graph.agents());
        for state in HealthState::ALL{
            assert_eq!(tally.count(state), count(&graph, state));
        }
        assert_eq!(tally, counts(2, 1, 1, 0, 2));

        let snapshot = MetricSnapshot::capture(4, &graph);
        assert_eq!(snapshot.step, 4);
        assert_eq!(snapshot.resistant_susceptible_ratio, 0.0);
        assert_eq!(snapshot.alive_dead_ratio, 1.5);
    }
}
