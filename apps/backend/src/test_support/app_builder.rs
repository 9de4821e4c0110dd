//! Builds an initialized Actix test service around a given `AppState`.
//!
//! The service carries the same middleware stack as the server binary so
//! that trace ids and error bodies look exactly like production.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{
    web::{self, ServiceConfig},
    App,
};

use crate::middleware::request_trace::RequestTrace;
use crate::middleware::structured_logger::StructuredLogger;
use crate::middleware::trace_span::TraceSpan;
use crate::state::app_state::AppState;

type RoutesFn = Box<dyn FnOnce(&mut ServiceConfig) + Send>;

pub fn create_test_app_builder(state: AppState) -> TestAppBuilder {
    TestAppBuilder {
        state,
        router: Router::Prod,
    }
}

enum Router {
    Prod,
    Custom(RoutesFn),
}

pub struct TestAppBuilder {
    state: AppState,
    router: Router,
}

impl TestAppBuilder {
    /// Replace the production routes with test-only ones.
    pub fn with_routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ServiceConfig) + Send + 'static,
    {
        self.router = Router::Custom(Box::new(f));
        self
    }

    /// Returns the state so tests can inspect the registry after requests.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn build(
        self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>
    {
        let app = App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state));

        let app = match self.router {
            Router::Prod => app.configure(crate::routes::configure),
            Router::Custom(f) => app.configure(f),
        };

        actix_web::test::init_service(app).await
    }
}
