use keystone_application::use_cases::GetGreetingUseCase;
use std::sync::Arc;

use super::{Repositories, Services};

pub struct UseCases {
    pub get_greeting: Arc<GetGreetingUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, services: &Services) -> Self {
        Self {
            get_greeting: Arc::new(GetGreetingUseCase::new(
                repos.users.clone(),
                services.cache.clone(),
            )),
        }
    }
}
