//! Explicit object-graph assembly.
//!
//! Every component receives its collaborators through its constructor;
//! `Container::build` wires them once at process start in dependency order.

pub mod repositories;
pub mod services;
pub mod use_cases;

pub use repositories::Repositories;
pub use services::Services;
pub use use_cases::UseCases;

use keystone_api::AppState;
use keystone_domain::Config;

pub struct Container {
    pub services: Services,
    pub use_cases: UseCases,
}

impl Container {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let services = Services::new(config)?;
        let repositories = Repositories::new(&services);
        let use_cases = UseCases::new(&repositories, &services);

        Ok(Self {
            services,
            use_cases,
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            get_greeting: self.use_cases.get_greeting.clone(),
        }
    }
}
