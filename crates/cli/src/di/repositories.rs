use keystone_application::ports::UserRepository;
use keystone_infrastructure::repositories::PgUserRepository;
use std::sync::Arc;

use super::Services;

pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    pub fn new(services: &Services) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(services.database.client().clone())),
        }
    }
}
