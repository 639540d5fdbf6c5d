// src/core/net.rs
// Blocking HTTP GET through a shared session with an optional on-disk cache.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::core::cache::ResponseCache;
use crate::error::{Result, ScrapeError};

/// Anything that can GET a page. Mode handlers only see this.
pub trait Fetch {
    /// Response body on a 2xx; `ConnectionFailure` otherwise.
    fn get(&self, url: &Url) -> Result<Vec<u8>>;

    fn get_text(&self, url: &Url) -> Result<String> {
        let bytes = self.get(url)?;
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        })
    }
}

pub struct Session {
    client: Client,
    cache: Option<ResponseCache>,
}

impl Session {
    pub fn new(cache: Option<ResponseCache>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, cache })
    }

    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    fn fetch_remote(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ScrapeError::connection(url.as_str(), e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::connection(
                url.as_str(),
                format!("HTTP {}", status),
            ));
        }
        let body = resp
            .bytes()
            .map_err(|e| ScrapeError::connection(url.as_str(), e))?;
        Ok(body.to_vec())
    }
}

impl Fetch for Session {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.load(url) {
                tracing::debug!("cache hit: {url}");
                return Ok(body);
            }
        }

        let body = self.fetch_remote(url)?;
        tracing::debug!("fetched {url} ({} bytes)", body.len());

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(url, &body) {
                tracing::warn!("could not cache {url}: {e}");
            }
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use tempfile::TempDir;

    /// Answer exactly one request on a local port with `response`.
    fn serve_once(response: &'static str) -> (Url, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 { break; }
                req.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });
        (Url::parse(&format!("http://{addr}/3/")).unwrap(), handle)
    }

    fn local_session(cache: ResponseCache) -> Session {
        // no_proxy: the listener is on loopback
        let client = Client::builder().no_proxy().build().unwrap();
        Session { client, cache: Some(cache) }
    }

    #[test]
    fn cached_body_is_served_without_network() {
        // .invalid never resolves, so a hit proves the cache answered
        let tmp = TempDir::new().unwrap();
        let cache = ResponseCache::new(tmp.path());
        let url = Url::parse("https://docs.python.invalid/3/").unwrap();
        cache.store(&url, "<h1>Cached</h1>".as_bytes()).unwrap();

        let session = Session::new(Some(cache)).unwrap();
        assert_eq!(session.get_text(&url).unwrap(), "<h1>Cached</h1>");
    }

    #[test]
    fn unreachable_host_is_a_connection_failure() {
        let session = Session::new(None).unwrap();
        let url = Url::parse("http://docs.python.invalid/").unwrap();
        let err = session.get(&url).unwrap_err();
        assert!(err.is_connection_failure(), "{err}");
    }

    #[test]
    fn non_success_status_is_a_connection_failure_and_not_cached() {
        let tmp = TempDir::new().unwrap();
        let (url, server) = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let session = local_session(ResponseCache::new(tmp.path()));

        let err = session.get(&url).unwrap_err();
        server.join().unwrap();

        assert!(err.is_connection_failure(), "{err}");
        assert!(err.to_string().contains("404"), "{err}");
        assert!(session.cache().unwrap().load(&url).is_none());
    }

    #[test]
    fn success_body_is_stored_and_served_from_cache() {
        let tmp = TempDir::new().unwrap();
        let (url, server) = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<h1>Live</h1>");
        let session = local_session(ResponseCache::new(tmp.path()));

        assert_eq!(session.get_text(&url).unwrap(), "<h1>Live</h1>");
        server.join().unwrap();
        assert_eq!(session.cache().unwrap().load(&url).as_deref(), Some(&b"<h1>Live</h1>"[..]));

        // the listener is gone; only the cache can answer now
        assert_eq!(session.get_text(&url).unwrap(), "<h1>Live</h1>");
    }
}
