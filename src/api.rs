// API client module: a small blocking HTTP client that talks to OMDb.
// One request per invocation, no retries, no caching.

use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::LookupError;

const NOT_AVAILABLE: &str = "N/A";

/// Simple API client that holds a reqwest blocking client, the endpoint
/// and the API key sent with every request.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// What the user asked for: a title and optionally a release year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub title: String,
    pub year: Option<String>,
}

/// A successful lookup, with the fields the summary and plot file need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub imdb_rating: String,
    pub plot: String,
}

/// Raw OMDb payload. Every field is optional because the shape differs
/// between a hit and a miss.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbResponse {
    pub response: Option<String>,
    pub error: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    pub plot: Option<String>,
}

impl MovieQuery {
    pub fn new(title: impl Into<String>, year: Option<String>) -> Self {
        MovieQuery {
            title: title.into(),
            year,
        }
    }

    /// Query pairs for the request. `y` is only sent for a non-empty year.
    fn params<'a>(&'a self, api_key: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("t", self.title.as_str()), ("apikey", api_key)];
        if let Some(year) = self.year.as_deref().filter(|y| !y.is_empty()) {
            params.push(("y", year));
        }
        params
    }
}

impl OmdbResponse {
    /// Turn the payload into a `Movie`, or the error it describes.
    pub fn into_movie(self) -> Result<Movie, LookupError> {
        if self.response.as_deref() == Some("False") {
            let message = self.error.unwrap_or_else(|| "Unknown error".to_string());
            return Err(LookupError::Api(message));
        }

        Ok(Movie {
            title: self.title.ok_or(LookupError::MissingField("Title"))?,
            year: self.year.ok_or(LookupError::MissingField("Year"))?,
            genre: self.genre.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            imdb_rating: self.imdb_rating.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            plot: self.plot.ok_or(LookupError::MissingField("Plot"))?,
        })
    }
}

impl OmdbClient {
    /// Build a client from the startup configuration.
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let mut builder = Client::builder();
        // System proxies would swallow requests meant for a local endpoint.
        if is_loopback(config.base_url()) {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(LookupError::ClientInit)?;
        Ok(OmdbClient {
            client,
            base_url: config.base_url().to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Look up a single movie. Any failure is returned as is; nothing is
    /// retried.
    pub fn fetch_movie(&self, query: &MovieQuery) -> Result<Movie, LookupError> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&query.params(&self.api_key))
            .build()
            .map_err(network_error)?;
        debug!(url = %redact_api_key(request.url()), "sending OMDb request");

        let res = self
            .client
            .execute(request)
            .map_err(network_error)?;
        let status = res.status();
        if !status.is_success() {
            debug!(%status, "OMDb returned a non-success status");
            let body = match res.text() {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e.without_url(), "could not read error response body");
                    String::new()
                }
            };
            return Err(LookupError::Http { status, body });
        }

        let body = res.text().map_err(network_error)?;
        let payload: OmdbResponse =
            serde_json::from_str(&body).map_err(LookupError::MalformedResponse)?;
        let movie = payload.into_movie()?;
        info!(title = %movie.title, year = %movie.year, "movie found");
        Ok(movie)
    }
}

/// reqwest errors carry the request URL, which includes the API key.
fn network_error(e: reqwest::Error) -> LookupError {
    LookupError::Network(e.without_url())
}

fn is_loopback(base_url: &str) -> bool {
    Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(|h| matches!(h, "localhost" | "127.0.0.1" | "[::1]")))
        .unwrap_or(false)
}

/// Copy of `url` with the `apikey` value masked, safe to log.
pub fn redact_api_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "REDACTED".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(&pairs);
    redacted
}
