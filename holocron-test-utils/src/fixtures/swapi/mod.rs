use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn swapi<'a>(&'a mut self) -> SwapiFixtures<'a> {
        SwapiFixtures { setup: self }
    }
}

pub struct SwapiFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
