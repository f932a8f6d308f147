use {
    serde::{Serialize, Deserialize},
    net_ensembles::Node,
    super::*,
};

pub const DEFAULT_ASYMPTOMATIC_PERIOD: u32 = 2;
pub const DEFAULT_MAX_INFECTION_PERIOD: u32 = 15;

/// 32 evenly spaced days between 0 and 15 are used to fit the normal density
const NORMAL_FIT_POINTS: usize = 32;
const NORMAL_FIT_END: f64 = 15.0;

/// # How the death chance changes with the days since infection
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathSchedule{
    /// symmetric triangular table, peaking in the middle of the infection
    Table,
    /// normal density fitted to the days `0..=15`
    NormalDensity,
}

impl Default for DeathSchedule{
    fn default() -> Self{
        DeathSchedule::Table
    }
}

impl DeathSchedule{
    pub fn weight(self, days_infected: u32) -> f64
    {
        match self{
            Self::Table => table_weight(days_infected),
            Self::NormalDensity => normal_weight(days_infected)
        }
    }
}

fn table_weight(days_infected: u32) -> f64
{
    match days_infected{
        2 | 16 => 0.1,
        3 | 15 => 0.2,
        4 | 14 => 0.3,
        5 | 13 => 0.4,
        6 | 12 => 0.7,
        7 | 11 => 0.8,
        8 | 10 => 0.9,
        _ => 0.1
    }
}

/// mean and population standard deviation of the fit points
fn normal_fit() -> (f64, f64)
{
    let step = NORMAL_FIT_END / (NORMAL_FIT_POINTS - 1) as f64;
    let points = (0..NORMAL_FIT_POINTS).map(|i| i as f64 * step);
    let mean = points.clone().sum::<f64>() / NORMAL_FIT_POINTS as f64;
    let var = points.map(|x| (x - mean) * (x - mean))
        .sum::<f64>() / NORMAL_FIT_POINTS as f64;
    (mean, var.sqrt())
}

fn normal_weight(days_infected: u32) -> f64
{
    let (mean, std) = normal_fit();
    let z = (days_infected as f64 - mean) / std;
    (-0.5 * z * z).exp() / (std * (2.0 * std::f64::consts::PI).sqrt())
}

/// # What happens once an agent was infected for longer than the maximum infection period
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostCapPolicy{
    /// agent recovers immediately, no draws are consumed
    ForceRecover,
    /// agent stops spreading and can no longer die, only the recovery draw remains
    StopInfecting,
}

impl Default for PostCapPolicy{
    fn default() -> Self{
        PostCapPolicy::ForceRecover
    }
}

/// Model wide rules, identical for every agent
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TransitionRules{
    pub asymptomatic_period: u32,
    pub max_infection_period: u32,
    pub death_schedule: DeathSchedule,
    pub post_cap: PostCapPolicy,
}

impl Default for TransitionRules{
    fn default() -> Self{
        Self{
            asymptomatic_period: DEFAULT_ASYMPTOMATIC_PERIOD,
            max_infection_period: DEFAULT_MAX_INFECTION_PERIOD,
            death_schedule: DeathSchedule::default(),
            post_cap: PostCapPolicy::default()
        }
    }
}

impl TransitionRules{
    #[inline]
    fn past_incubation(&self, days_infected: u32) -> bool
    {
        days_infected > self.asymptomatic_period
    }

    #[inline]
    fn past_cap(&self, days_infected: u32) -> bool
    {
        days_infected > self.max_infection_period
    }

    pub fn can_spread(&self, days_infected: u32) -> bool
    {
        self.past_incubation(days_infected) && match self.post_cap{
            PostCapPolicy::ForceRecover => true,
            PostCapPolicy::StopInfecting => !self.past_cap(days_infected)
        }
    }
}

/// # One agent per node of the contact graph
/// * `initial_state` is the state after seeding, vaccinated agents keep
///  their reduced death chance even after being infected
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Agent{
    pub id: usize,
    pub state: HealthState,
    pub initial_state: HealthState,
    pub days_infected: u32,
    pub spread_chance: f64,
    pub recovery_chance: f64,
    pub vaccine_effectiveness: f64,
    pub lethality_rate: f64,
}

impl Node for Agent{
    fn new_from_index(index: usize) -> Self{
        Agent::new(index, HealthState::UnvaccinatedSusceptible)
    }
}

impl Agent{
    pub fn new(id: usize, state: HealthState) -> Self
    {
        Self{
            id,
            state,
            initial_state: state,
            days_infected: 0,
            spread_chance: 0.0,
            recovery_chance: 0.0,
            vaccine_effectiveness: 0.0,
            lethality_rate: 0.0
        }
    }

    /// copy the model wide parameters into the agent
    pub fn set_params(&mut self, params: &VirusParams)
    {
        self.spread_chance = params.virus_spread_chance;
        self.recovery_chance = params.recovery_chance;
        self.vaccine_effectiveness = params.vaccine_effectiveness_rate;
        self.lethality_rate = params.virus_lethality_rate;
    }

    /// Sets both the current and the initial state, only meant for seeding
    pub fn seed_state(&mut self, state: HealthState)
    {
        self.state = state;
        self.initial_state = state;
    }

    pub fn infect(&mut self)
    {
        self.state = HealthState::Infected;
    }

    /// incubation gate, counts the days while infected
    pub fn tick_infection(&mut self)
    {
        if self.state.inf_check(){
            self.days_infected += 1;
        }
    }

    pub fn can_spread(&self, rules: &TransitionRules) -> bool
    {
        self.state.inf_check() && rules.can_spread(self.days_infected)
    }

    /// chance that this agent infects `target` during one contact
    pub fn infection_chance(&self, target: HealthState) -> Option<f64>
    {
        match target{
            HealthState::UnvaccinatedSusceptible => Some(self.spread_chance),
            HealthState::VaccinatedSusceptible => Some(self.spread_chance * (1.0 - self.vaccine_effectiveness)),
            _ => None
        }
    }

    /// # Try to infect one neighbor
    /// * a draw is only consumed if the neighbor is susceptible
    /// * returns true if the neighbor got infected
    pub fn try_infect<R>(&self, neighbor: &mut Agent, rng: &mut R) -> bool
    where R: RandomSource + ?Sized
    {
        match self.infection_chance(neighbor.state){
            Some(chance) => {
                if rng.uniform() < chance{
                    neighbor.infect();
                    true
                } else {
                    false
                }
            },
            None => false
        }
    }

    pub fn death_chance(&self, rules: &TransitionRules) -> f64
    {
        let chance = self.lethality_rate * rules.death_schedule.weight(self.days_infected);
        if self.initial_state == HealthState::VaccinatedSusceptible{
            chance / 4.0
        } else {
            chance
        }
    }

    /// # Death or recovery of an infected agent
    /// * nothing happens during the asymptomatic period
    /// * death is checked first, recovery only if the agent survived
    pub fn resolve_outcome<R>(&mut self, rules: &TransitionRules, rng: &mut R)
    where R: RandomSource + ?Sized
    {
        if !self.state.inf_check() || !rules.past_incubation(self.days_infected){
            return;
        }
        let past_cap = rules.past_cap(self.days_infected);
        match rules.post_cap{
            PostCapPolicy::ForceRecover if past_cap => {
                self.state = HealthState::Recovered;
                return;
            },
            PostCapPolicy::StopInfecting if past_cap => (),
            _ => {
                if rng.uniform() < self.death_chance(rules){
                    self.state = HealthState::Dead;
                    return;
                }
            }
        }
        if rng.uniform() < self.recovery_chance{
            self.state = HealthState::Recovered;
        }
    }
}

#[cfg(test)]
mod tests{
    use super::*;
    use super::super::random_source::test_sources::*;

    fn infected_agent(days: u32) -> Agent
    {
        let mut agent = Agent::new(0, HealthState::Infected);
        agent.days_infected = days;
        agent.spread_chance = 0.5;
        agent.recovery_chance = 0.3;
        agent.vaccine_effectiveness = 0.8;
        agent.lethality_rate = 0.5;
        agent
    }

    #[test]
    fn table_is_symmetric_around_day_nine()
    {
        let rules = TransitionRules::default();
        for d in 2..=8{
            assert_eq!(rules.death_schedule.weight(d), rules.death_schedule.weight(18 - d));
        }
        assert_eq!(table_weight(8), 0.9);
        assert_eq!(table_weight(9), 0.1);
        assert_eq!(table_weight(0), 0.1);
        assert_eq!(table_weight(40), 0.1);
    }

    #[test]
    fn normal_density_peaks_in_the_middle()
    {
        let (mean, std) = normal_fit();
        assert!((mean - 7.5).abs() < 1e-12);
        assert!((std - 4.467_6).abs() < 1e-3);
        for d in 0..=7{
            let diff = normal_weight(d) - normal_weight(15 - d);
            assert!(diff.abs() < 1e-12);
        }
        assert!(normal_weight(7) > normal_weight(3));
        assert!(normal_weight(3) > normal_weight(0));
    }

    #[test]
    fn vaccinated_origin_quarters_death_chance()
    {
        let rules = TransitionRules::default();
        let mut agent = infected_agent(6);
        let plain = agent.death_chance(&rules);
        assert!((plain - 0.35).abs() < 1e-12);
        agent.initial_state = HealthState::VaccinatedSusceptible;
        assert!((agent.death_chance(&rules) - plain / 4.0).abs() < 1e-12);
    }

    #[test]
    fn tick_only_counts_while_infected()
    {
        let mut agent = Agent::new(3, HealthState::Recovered);
        agent.days_infected = 7;
        agent.tick_infection();
        assert_eq!(agent.days_infected, 7);
        agent.state = HealthState::Infected;
        agent.tick_infection();
        assert_eq!(agent.days_infected, 8);
    }

    #[test]
    fn spreading_starts_after_asymptomatic_period()
    {
        let rules = TransitionRules::default();
        assert!(!infected_agent(2).can_spread(&rules));
        assert!(infected_agent(3).can_spread(&rules));
        assert!(infected_agent(16).can_spread(&rules));

        let stop = TransitionRules{post_cap: PostCapPolicy::StopInfecting, ..rules};
        assert!(infected_agent(15).can_spread(&stop));
        assert!(!infected_agent(16).can_spread(&stop));
    }

    #[test]
    fn vaccinated_neighbor_uses_reduced_chance()
    {
        let agent = infected_agent(4);
        let mut neighbor = Agent::new(1, HealthState::VaccinatedSusceptible);
        // 0.5 * (1 - 0.8) = 0.1
        let mut rng = ScriptedDraws::new(&[0.15, 0.05]);
        assert!(!agent.try_infect(&mut neighbor, &mut rng));
        assert_eq!(neighbor.state, HealthState::VaccinatedSusceptible);
        assert!(agent.try_infect(&mut neighbor, &mut rng));
        assert_eq!(neighbor.state, HealthState::Infected);
        assert_eq!(neighbor.initial_state, HealthState::VaccinatedSusceptible);
    }

    #[test]
    fn non_susceptible_neighbor_consumes_no_draw()
    {
        let agent = infected_agent(4);
        let mut rng = ScriptedDraws::new(&[]);
        for state in [HealthState::Infected, HealthState::Recovered, HealthState::Dead]{
            let mut neighbor = Agent::new(1, state);
            assert!(!agent.try_infect(&mut neighbor, &mut rng));
            assert_eq!(neighbor.state, state);
        }
        assert_eq!(rng.consumed, 0);
    }

    #[test]
    fn death_skips_recovery_draw()
    {
        let rules = TransitionRules::default();
        let mut agent = infected_agent(7);
        // death chance 0.5 * 0.8 = 0.4
        let mut rng = ScriptedDraws::new(&[0.39]);
        agent.resolve_outcome(&rules, &mut rng);
        assert_eq!(agent.state, HealthState::Dead);
        assert_eq!(rng.consumed, 1);
    }

    #[test]
    fn survivor_takes_recovery_draw()
    {
        let rules = TransitionRules::default();
        let mut agent = infected_agent(7);
        let mut rng = ScriptedDraws::new(&[0.41, 0.29]);
        agent.resolve_outcome(&rules, &mut rng);
        assert_eq!(agent.state, HealthState::Recovered);

        let mut agent = infected_agent(7);
        let mut rng = ScriptedDraws::new(&[0.41, 0.31]);
        agent.resolve_outcome(&rules, &mut rng);
        assert_eq!(agent.state, HealthState::Infected);
        assert_eq!(rng.consumed, 2);
    }

    #[test]
    fn nothing_happens_during_asymptomatic_period()
    {
        let rules = TransitionRules::default();
        let mut agent = infected_agent(2);
        let mut rng = ScriptedDraws::new(&[]);
        agent.resolve_outcome(&rules, &mut rng);
        assert_eq!(agent.state, HealthState::Infected);
    }

    #[test]
    fn force_recover_past_cap_without_draws()
    {
        let rules = TransitionRules::default();
        let mut agent = infected_agent(16);
        agent.recovery_chance = 0.0;
        let mut rng = ScriptedDraws::new(&[]);
        agent.resolve_outcome(&rules, &mut rng);
        assert_eq!(agent.state, HealthState::Recovered);
    }

    #[test]
    fn stop_infecting_past_cap_only_recovers()
    {
        let rules = TransitionRules{post_cap: PostCapPolicy::StopInfecting, ..Default::default()};
        let mut agent = infected_agent(20);
        agent.lethality_rate = 1.0;
        // a single draw is consumed and it is the recovery draw
        let mut rng = ScriptedDraws::new(&[0.5]);
        agent.resolve_outcome(&rules, &mut rng);
        assert_eq!(agent.state, HealthState::Infected);
        assert_eq!(rng.consumed, 1);

        let mut rng = FixedDraw(0.0);
        agent.resolve_outcome(&rules, &mut rng);
        assert_eq!(agent.state, HealthState::Recovered);
    }
}
