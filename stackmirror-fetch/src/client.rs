//! HTTP client with a fixed request header profile.
//!
//! One [`Client`] is built per run and reused for every request, so all
//! fetches within a run share the same agent and header set. No retries,
//! no timeout overrides — every failure is reported and ends the stage.

use std::io::Read;

use crate::error::FetchError;

/// Header profile applied to every request. The Referer is added per-run
/// from config since it embeds the mirrored repo path.
const FIXED_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0",
    ),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("DNT", "1"),
    ("Upgrade-Insecure-Requests", "1"),
    ("Cache-Control", "max-age=0"),
];

/// Reusable request context for a single run.
pub struct Client {
    agent: ureq::Agent,
    referer: String,
}

impl Client {
    pub fn new(referer: impl Into<String>) -> Client {
        Client {
            agent: ureq::AgentBuilder::new().build(),
            referer: referer.into(),
        }
    }

    /// GET `url` and return the body bytes.
    ///
    /// Anything other than HTTP 200 is an error — the caller treats it as a
    /// hard stop for the current stage.
    pub fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        log::debug!("GET {url}");
        let mut request = self.agent.get(url).set("Referer", &self.referer);
        for (name, value) in FIXED_HEADERS {
            request = request.set(name, value);
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                })
            }
            Err(err) => {
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    source: Box::new(err),
                })
            }
        };

        if response.status() != 200 {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Body {
                url: url.to_string(),
                source: e,
            })?;
        Ok(body)
    }
}
