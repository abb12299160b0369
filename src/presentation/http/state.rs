// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::{named_routes::NamedRoutes, views::ViewRenderer};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub routes: Arc<NamedRoutes>,
    pub views: Arc<ViewRenderer>,
}
