use keystone_application::use_cases::GetGreetingUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_greeting: Arc<GetGreetingUseCase>,
}
