use {
    serde::{Serialize, Deserialize},
    std::fmt,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
#[derive(Serialize, Deserialize)]
pub enum HealthState{
    UnvaccinatedSusceptible,
    VaccinatedSusceptible,
    Infected,
    Recovered,
    Dead,
}

impl HealthState{
    pub const ALL: [HealthState; 5] = [
        HealthState::UnvaccinatedSusceptible,
        HealthState::VaccinatedSusceptible,
        HealthState::Infected,
        HealthState::Recovered,
        HealthState::Dead,
    ];

    pub fn sus_check(&self) -> bool{
        matches!(self, Self::UnvaccinatedSusceptible | Self::VaccinatedSusceptible)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self, Self::Infected)
    }
    pub fn rec_check(&self) -> bool{
        matches!(self, Self::Recovered)
    }
    pub fn dead_check(&self) -> bool{
        matches!(self, Self::Dead)
    }

    /// Recovered and Dead have no outgoing transitions
    pub fn is_absorbing(&self) -> bool
    {
        matches!(self, Self::Recovered | Self::Dead)
    }

    pub fn is_alive(&self) -> bool
    {
        !self.dead_check()
    }

    /// Node color used by the network portrayal
    pub fn color(&self) -> &'static str
    {
        match self{
            Self::UnvaccinatedSusceptible => "#ffcc00",
            Self::VaccinatedSusceptible => "#bdff2e",
            Self::Infected => "#FF0000",
            Self::Recovered => "#a6f1f1",
            Self::Dead => "#000000",
        }
    }

    pub fn name(&self) -> &'static str
    {
        match self{
            Self::UnvaccinatedSusceptible => "UNVACCINATED_SUSCEPTIBLE",
            Self::VaccinatedSusceptible => "VACCINATED_SUSCEPTIBLE",
            Self::Infected => "INFECTED",
            Self::Recovered => "RECOVERED",
            Self::Dead => "DEAD",
        }
    }
}

impl Default for HealthState{
    fn default() -> Self{
        HealthState::UnvaccinatedSusceptible
    }
}

impl fmt::Display for HealthState{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn only_recovered_and_dead_are_absorbing()
    {
        let absorbing: Vec<_> = HealthState::ALL.iter()
            .filter(|s| s.is_absorbing())
            .collect();
        assert_eq!(absorbing, vec![&HealthState::Recovered, &HealthState::Dead]);
    }

    #[test]
    fn both_susceptible_states_count_as_susceptible()
    {
        assert!(HealthState::UnvaccinatedSusceptible.sus_check());
        assert!(HealthState::VaccinatedSusceptible.sus_check());
        assert!(!HealthState::Infected.sus_check());
        assert!(!HealthState::Dead.is_alive());
        assert_eq!(HealthState::default(), HealthState::UnvaccinatedSusceptible);
    }
}
