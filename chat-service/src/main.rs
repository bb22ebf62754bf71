use chat_service::config::ChatConfig;
use chat_service::startup::{init_observability, Application};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let config = init_observability("chat-service", ChatConfig::load())?;

    let app = Application::build(config).await;

    tracing::info!("Chat service ready for invocations");

    app.run().await.inspect_err(|e| {
        tracing::error!(error = %e, "Lambda runtime stopped with an error");
    })
}
