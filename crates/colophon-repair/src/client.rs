//! HTTP client for the catalog's JSON API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use colophon_core::EditionRecord;

use crate::discovery::olid_from_key;
use crate::error::{RepairError, RepairResult};
use crate::resilience::RateLimiter;

const USER_AGENT: &str = "colophon/0.1.0 (https://github.com/colophon-bot/colophon)";

/// Bot account credentials, read once at startup and injected.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Manual impl so passwords never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One entry of a query response: `{"key": "/books/OL20422410M"}`.
#[derive(Debug, Deserialize)]
struct KeyRef {
    key: String,
}

/// Catalog API client.
///
/// Wraps a cookie-holding `reqwest::Client` pre-configured with the
/// project user-agent and a [`RateLimiter`] of one request per second, per
/// the catalog's bot guidelines. Writes require a prior [`login`].
///
/// [`login`]: CatalogClient::login
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl CatalogClient {
    /// Create a new client against the given base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> RepairResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::new(1),
        })
    }

    /// Log in as the bot account; the session cookie backs later writes.
    ///
    /// # Errors
    /// Returns an error when the request fails or the catalog rejects the
    /// credentials.
    pub async fn login(&self, credentials: &Credentials) -> RepairResult<()> {
        let url = format!("{}/account/login", self.base_url);

        self.http
            .post(&url)
            .json(credentials)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| RepairError::Http {
                message: format!("login failed: {e}"),
            })?;

        log::info!("logged in as {}", credentials.username);
        Ok(())
    }

    /// Find OLIDs of editions whose `field` has any value.
    ///
    /// Issues `query.json?type=/type/edition&{field}~=*&limit={limit}` and
    /// reduces each returned `/books/OL…M` key to its OLID.
    ///
    /// # Errors
    /// Returns an error on HTTP failure or an unparseable response.
    pub async fn query_editions(&self, field: &str, limit: u32) -> RepairResult<Vec<String>> {
        self.rate_limiter.acquire().await;

        let url = format!("{}/query.json", self.base_url);
        let pattern = format!("{field}~");
        let limit = limit.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("type", "/type/edition"),
                (pattern.as_str(), "*"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| RepairError::Http {
                message: e.to_string(),
            })?;

        let keys: Vec<KeyRef> = response.json().await.map_err(|e| RepairError::Parse {
            message: e.to_string(),
        })?;

        Ok(keys
            .iter()
            .map(|entry| olid_from_key(&entry.key).to_string())
            .collect())
    }

    /// Fetch a record by OLID. `Ok(None)` when the catalog has no such
    /// record, which is distinct from an empty record.
    ///
    /// # Errors
    /// Returns an error on HTTP failure or an unparseable record.
    pub async fn get_record(&self, olid: &str) -> RepairResult<Option<EditionRecord>> {
        self.rate_limiter.acquire().await;

        let url = format!("{}/books/{}.json", self.base_url, olid);
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status().map_err(|e| RepairError::Http {
            message: e.to_string(),
        })?;

        let record = response
            .json::<EditionRecord>()
            .await
            .map_err(|e| RepairError::Parse {
                message: format!("record {olid}: {e}"),
            })?;

        Ok(Some(record))
    }

    /// Write a record back with an audit comment, all-or-nothing.
    ///
    /// # Errors
    /// Returns an error on HTTP failure or a rejected write.
    pub async fn save_record(
        &self,
        olid: &str,
        record: &EditionRecord,
        comment: &str,
    ) -> RepairResult<()> {
        self.rate_limiter.acquire().await;

        let body = body_with_comment(record, comment)?;
        let url = format!("{}/books/{}.json", self.base_url, olid);

        self.http
            .put(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| RepairError::Http {
                message: format!("saving {olid}: {e}"),
            })?;

        Ok(())
    }
}

/// Serialize a record with the `_comment` audit field injected into the
/// body, as the catalog's save endpoint expects.
fn body_with_comment(record: &EditionRecord, comment: &str) -> RepairResult<Value> {
    let mut body = serde_json::to_value(record).map_err(|e| RepairError::Parse {
        message: e.to_string(),
    })?;

    if let Value::Object(fields) = &mut body {
        fields.insert(
            "_comment".to_string(),
            Value::String(comment.to_string()),
        );
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new("https://openlibrary.org");
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_query_response_deserializes() {
        let body = r#"[{"key": "/books/OL20422410M"}, {"key": "/books/OL25438374M"}]"#;
        let keys: Vec<KeyRef> = serde_json::from_str(body).unwrap();

        let olids: Vec<&str> = keys.iter().map(|k| olid_from_key(&k.key)).collect();
        assert_eq!(olids, ["OL20422410M", "OL25438374M"]);
    }

    #[test]
    fn test_empty_query_response() {
        let keys: Vec<KeyRef> = serde_json::from_str("[]").unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_body_with_comment_injects_audit_field() {
        let record: EditionRecord =
            serde_json::from_value(json!({"title": "x", "publishers": ["Collins"]})).unwrap();

        let body = body_with_comment(&record, "repairing legacy fields").unwrap();
        assert_eq!(body["_comment"], json!("repairing legacy fields"));
        assert_eq!(body["title"], json!("x"));
        assert_eq!(body["publishers"], json!(["Collins"]));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            username: "bot".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("bot"));
        assert!(!debug.contains("hunter2"));
    }
}
