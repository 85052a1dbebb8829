//! Table Truncator - Lambda entry point.
//!
//! Reads configuration from the environment, builds the SSM client once per
//! cold start and hands each invocation to the `InvocationHandler`.

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use table_truncator::config::Config;
use table_truncator::handler::InvocationHandler;
use table_truncator::models::TruncateResponse;
use table_truncator::params::SsmParameterStore;
use tracing::{Instrument, error, info, info_span};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        // CloudWatch stamps every line already
        subscriber
            .with(fmt::layer().with_target(false).without_time())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::parse_args();

    init_tracing(&config);

    info!(
        schema = %config.schema,
        strict_statement = config.strict_statement,
        allowed_tables = config.allowed_tables.len(),
        "Starting table truncator v{}",
        env!("CARGO_PKG_VERSION")
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = SsmParameterStore::from_conf(&aws_config);
    let handler = Arc::new(InvocationHandler::from_config(store, &config));

    run(service_fn(move |event: LambdaEvent<JsonValue>| {
        let handler = Arc::clone(&handler);
        async move {
            let (payload, context) = event.into_parts();
            let span = info_span!("invocation", request_id = %context.request_id);

            let result: Result<TruncateResponse, Error> = handler
                .handle(payload)
                .instrument(span.clone())
                .await
                .map_err(|e| {
                    span.in_scope(|| error!(error = %e, "Truncation failed"));
                    e.into()
                });
            result
        }
    }))
    .await
}
