use crate::domain::repository::RevalidationPort;
use crate::domain::types::RevalidateScope;

/// Header carrying the shared secret on webhook calls.
pub const REVALIDATE_SECRET_HEADER: &str = "x-revalidate-secret";

/// Posts revalidation signals to the presentation layer's webhook.
///
/// Delivery happens on a spawned task and never blocks or fails the caller.
/// Without a configured URL signals are only logged.
#[derive(Clone)]
pub struct HttpRevalidator {
    pub client: reqwest::Client,
    pub url: Option<String>,
    pub secret: Option<String>,
}

impl RevalidationPort for HttpRevalidator {
    fn revalidate(&self, scope: RevalidateScope) {
        let Some(url) = self.url.clone() else {
            tracing::debug!(
                path = scope.path,
                kind = scope.kind.as_str(),
                "revalidation webhook not configured, signal dropped"
            );
            return;
        };
        let mut request = self.client.post(url).json(&payload(scope));
        if let Some(secret) = &self.secret {
            request = request.header(REVALIDATE_SECRET_HEADER, secret);
        }
        tokio::spawn(async move {
            match request.send().await {
                Ok(resp) if resp.status().is_success() => {
                    tracing::debug!(path = scope.path, "revalidation delivered");
                }
                Ok(resp) => {
                    tracing::warn!(
                        path = scope.path,
                        status = resp.status().as_u16(),
                        "revalidation webhook refused signal"
                    );
                }
                Err(e) => {
                    tracing::warn!(path = scope.path, error = %e, "revalidation webhook unreachable");
                }
            }
        });
    }
}

fn payload(scope: RevalidateScope) -> serde_json::Value {
    serde_json::json!({ "path": scope.path, "type": scope.kind.as_str() })
}
