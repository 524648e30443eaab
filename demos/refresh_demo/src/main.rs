mod tracing_setup;

use futures::StreamExt;
use futures_signals::signal::SignalExt;
use loadstate::{
    AutoloadPolicy, LoadAction, LoadConfig, LoadError, LoadReducer, LoadState, LoadStreamExt,
    Store,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_setup::tracing_init;

type Forecast = LoadState<String, LoadError>;

#[tokio::main]
async fn main() -> Result<(), LoadError> {
    tracing_init();

    let config = LoadConfig::new()
        .with_autoload(AutoloadPolicy::WhenNotRequested)
        .with_cancel_superseded(true)
        .with_timeout(Duration::from_millis(800));

    let attempts = Arc::new(AtomicU32::new(0));
    let reducer = LoadReducer::from_config(&config, {
        let attempts = attempts.clone();
        move || {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
            fetch_forecast(attempt)
        }
    });
    let store: Store<Forecast, LoadAction<String, LoadError>> =
        Store::new(LoadState::NotRequested, reducer);

    tokio::spawn(store.to_signal().for_each(|state| {
        info!(variant = %state.current_variant(), value = ?state.value_ref(), "forecast");
        async {}
    }));

    // Initial load, triggered by displaying the placeholder.
    store.display(config.autoload, |state| state, |action| action)?;
    wait_until_settled(&store).await;

    // Refresh while the cached forecast stays visible. The second attempt
    // takes longer than the configured timeout.
    store.send(LoadAction::Load)?;
    wait_until_settled(&store).await;

    let state = store.await_state().await?;
    info!(variant = %state.current_variant(), error = ?state.error_ref(), "final state");
    Ok(())
}

async fn fetch_forecast(attempt: u32) -> Result<String, LoadError> {
    let delay = if attempt == 1 { 200 } else { 1500 };
    tokio::time::sleep(Duration::from_millis(delay)).await;
    Ok(format!("sunny (attempt {attempt})"))
}

async fn wait_until_settled(store: &Store<Forecast, LoadAction<String, LoadError>>) {
    let mut seen_loading = false;
    store
        .to_stream()
        .stop_after(move |state: &Forecast| {
            seen_loading |= state.is_loading();
            seen_loading && state.is_settled()
        })
        .for_each(|_| async {})
        .await;
}
