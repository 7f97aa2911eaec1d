use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

pub const TEN_SECOND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RacerError {
    #[error("timed out waiting for {a} and {b}")]
    Timeout { a: String, b: String, timeout: Duration },
}

/// Returns whichever of `a` and `b` answers first, giving up after ten seconds.
pub async fn racer(a: &str, b: &str) -> Result<String, RacerError> {
    configurable_racer(a, b, TEN_SECOND_TIMEOUT).await
}

pub async fn configurable_racer(a: &str, b: &str, timeout: Duration) -> Result<String, RacerError> {
    let client = Client::new();
    race_with(&client, a, b, timeout).await
}

/// Races two pings on a shared client. The losing ping is dropped.
pub async fn race_with(
    client: &Client,
    a: &str,
    b: &str,
    timeout: Duration,
) -> Result<String, RacerError> {
    let winner = tokio::select! {
        _ = ping(client, a) => a,
        _ = ping(client, b) => b,
        _ = sleep(timeout) => {
            info!(a, b, ?timeout, "race timed out");
            return Err(RacerError::Timeout {
                a: a.to_string(),
                b: b.to_string(),
                timeout,
            });
        }
    };

    info!(winner, "race finished");
    Ok(winner.to_string())
}

// Completes once the GET finishes, whatever its outcome.
async fn ping(client: &Client, url: &str) {
    if let Err(err) = client.get(url).send().await {
        debug!(url, error = %err, "ping failed");
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    async fn make_delayed_server(delay: Duration) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_returns_fastest_url() {
        let slow = make_delayed_server(Duration::from_millis(200)).await;
        let fast = make_delayed_server(Duration::from_millis(0)).await;

        let got = racer(&slow.uri(), &fast.uri()).await.unwrap();
        assert_eq!(got, fast.uri());
    }

    #[tokio::test]
    async fn test_argument_order_does_not_matter() {
        let slow = make_delayed_server(Duration::from_millis(200)).await;
        let fast = make_delayed_server(Duration::from_millis(0)).await;

        let got = racer(&fast.uri(), &slow.uri()).await.unwrap();
        assert_eq!(got, fast.uri());
    }

    #[tokio::test]
    async fn test_times_out_when_nobody_answers() {
        let server = make_delayed_server(Duration::from_secs(25)).await;

        let err = configurable_racer(&server.uri(), &server.uri(), Duration::from_millis(20))
            .await
            .unwrap_err();

        match &err {
            RacerError::Timeout { a, b, timeout } => {
                assert_eq!(a, &server.uri());
                assert_eq!(b, &server.uri());
                assert_eq!(*timeout, Duration::from_millis(20));
            }
        }
        assert!(err.to_string().starts_with("timed out waiting for"));
    }

    #[tokio::test]
    async fn test_failed_ping_still_counts_as_an_answer() {
        let slow = make_delayed_server(Duration::from_secs(5)).await;
        // Nothing listens on port 1, so this ping fails fast.
        let dead = "http://127.0.0.1:1";

        let got = configurable_racer(&slow.uri(), dead, Duration::from_secs(2))
            .await
            .unwrap();
        assert_eq!(got, dead);
    }
}
