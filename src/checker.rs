use crossbeam::channel;
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use std::{collections::HashMap, future::Future, sync::Arc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

// =============================================================================
// Milestone 1: Fan-out over OS threads, fan-in over a channel
// =============================================================================

/// Runs `checker` once per entry of `urls`, each on its own thread, and
/// collects the answers.
///
/// Results arrive in completion order over a shared channel; the returned
/// map holds one entry per distinct URL.
pub fn check_websites<F, U>(checker: F, urls: &[U]) -> HashMap<String, bool>
where
    F: Fn(&str) -> bool + Sync,
    U: AsRef<str> + Sync,
{
    let mut results = HashMap::with_capacity(urls.len());
    if urls.is_empty() {
        return results;
    }

    info!(count = urls.len(), "checking websites");
    let (tx, rx) = channel::unbounded::<(String, bool)>();
    let checker = &checker;

    let outcome = crossbeam::scope(|scope| {
        for url in urls {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let url = url.as_ref();
                let ok = checker(url);
                // The receiver outlives every worker inside the scope.
                let _ = tx.send((url.to_string(), ok));
            });
        }
        drop(tx);

        for _ in 0..urls.len() {
            match rx.recv() {
                Ok((url, ok)) => {
                    debug!(%url, ok, "check finished");
                    results.insert(url, ok);
                }
                Err(_) => break,
            }
        }
    });

    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
    results
}

// =============================================================================
// Milestone 2: Same contract with one tokio task per URL
// =============================================================================

/// Runs `checker` once per entry of `urls`, each on its own tokio task, and
/// collects the answers over a shared channel.
///
/// The tasks are spawned detached: dropping the returned future stops the
/// collecting, not the checks already in flight. If a checker panics, its
/// task reports nothing and the panic is re-raised here once every other
/// task has finished, so a returned map always holds every URL.
pub async fn check_websites_async<F, Fut, U>(checker: F, urls: &[U]) -> HashMap<String, bool>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
    U: AsRef<str>,
{
    let mut results = HashMap::with_capacity(urls.len());
    if urls.is_empty() {
        return results;
    }

    info!(count = urls.len(), "checking websites");
    let checker = Arc::new(checker);
    let (tx, mut rx) = mpsc::unbounded_channel::<(String, bool)>();

    let handles: Vec<_> = urls
        .iter()
        .map(|url| {
            let url = url.as_ref().to_string();
            let checker = Arc::clone(&checker);
            let tx = tx.clone();
            tokio::spawn(async move {
                let ok = checker(url.clone()).await;
                let _ = tx.send((url, ok));
            })
        })
        .collect();
    drop(tx);

    let mut received = 0;
    while received < urls.len() {
        let Some((url, ok)) = rx.recv().await else {
            break;
        };
        debug!(%url, ok, "check finished");
        results.insert(url, ok);
        received += 1;
    }

    if received < urls.len() {
        warn!(received, expected = urls.len(), "workers exited without reporting");
        for handle in handles {
            if let Err(err) = handle.await {
                if err.is_panic() {
                    std::panic::resume_unwind(err.into_panic());
                }
            }
        }
    }
    results
}

// =============================================================================
// Milestone 3: A real checker
// =============================================================================

/// A checker that answers `true` when a GET on the URL returns 2xx.
pub fn http_checker(client: Client) -> impl Fn(String) -> BoxFuture<'static, bool> + Send + Sync + 'static {
    move |url: String| {
        let client = client.clone();
        async move {
            match client.get(&url).send().await {
                Ok(response) => response.status().is_success(),
                Err(err) => {
                    debug!(%url, error = %err, "request failed");
                    false
                }
            }
        }
        .boxed()
    }
}

// =============================================================================
// Tests
// =============================================================================
