#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::compression::CompressionLayer;
    use trace_collective::app::{shell, App};
    use trace_collective::config::Config;
    use trace_collective::error::AppError;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::load().map_err(AppError::Config)?;

    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    if let Some(socket_path) = config.socket {
        tracing::info!("listening on unix socket {}", &socket_path);
        let listener = tokio::net::UnixListener::bind(&socket_path).map_err(AppError::Bind)?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        tracing::info!("listening on http://{}", &config.listen);
        let listener = tokio::net::TcpListener::bind(&config.listen)
            .await
            .map_err(AppError::Bind)?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
