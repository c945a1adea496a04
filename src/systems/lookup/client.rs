use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use sage_advice::{Advice, LookupError, NOT_FOUND_STATUS, classify_response};
use tracing::debug;

/// Base URL of the public advice search; the query is appended as a path segment.
pub const DEFAULT_ENDPOINT: &str = "https://api.adviceslip.com/advice/search";

/// Upper bound on a single request, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can answer an advice search.
///
/// Implementations block until the search settles; the dispatcher runs each
/// call on its own thread.
pub trait AdviceSource: Send + Sync {
	fn search(&self, query: &str) -> Result<Vec<Advice>, LookupError>;
}

impl<F> AdviceSource for F
where
	F: Fn(&str) -> Result<Vec<Advice>, LookupError> + Send + Sync,
{
	fn search(&self, query: &str) -> Result<Vec<Advice>, LookupError> {
		self(query)
	}
}

/// [`AdviceSource`] backed by `GET <endpoint>/<query>`.
#[derive(Debug, Clone)]
pub struct HttpAdviceSource {
	client: Client,
	endpoint: String,
}

impl HttpAdviceSource {
	pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("sage/", env!("CARGO_PKG_VERSION")))
			.build()
			.context("failed to build HTTP client")?;
		Ok(Self {
			client,
			endpoint: endpoint.into(),
		})
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Request URL for `query`. The query is not percent-encoded here; the URL
	/// parser escapes what it must.
	#[must_use]
	pub fn url_for(&self, query: &str) -> String {
		format!("{}/{}", self.endpoint.trim_end_matches('/'), query)
	}
}

impl AdviceSource for HttpAdviceSource {
	fn search(&self, query: &str) -> Result<Vec<Advice>, LookupError> {
		let url = self.url_for(query);
		debug!(%url, "requesting advice");

		let response = self.client.get(&url).send().map_err(transport)?;
		let status = response.status().as_u16();
		if status == NOT_FOUND_STATUS {
			return Err(LookupError::NotFound);
		}

		let body = response.text().map_err(transport)?;
		classify_response(status, &body)
	}
}

fn transport(err: reqwest::Error) -> LookupError {
	LookupError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::thread;

	use super::*;

	/// Serve exactly one canned HTTP response and hand back the request line.
	fn serve_once(
		status_line: &'static str,
		body: &'static str,
	) -> (String, thread::JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let address = listener.local_addr().unwrap();
		let handle = thread::spawn(move || {
			let (stream, _) = listener.accept().unwrap();
			let mut reader = BufReader::new(stream);
			let mut request_line = String::new();
			reader.read_line(&mut request_line).unwrap();
			let mut header = String::new();
			while reader.read_line(&mut header).unwrap() > 0 {
				if header == "\r\n" {
					break;
				}
				header.clear();
			}
			let mut stream = reader.into_inner();
			let response = format!(
				"HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			stream.write_all(response.as_bytes()).unwrap();
			request_line
		});
		(format!("http://{address}/advice/search"), handle)
	}

	#[test]
	fn url_joins_endpoint_and_query() {
		let source = HttpAdviceSource::new("https://example.test/advice/search/", DEFAULT_TIMEOUT)
			.unwrap();
		assert_eq!(source.url_for("love"), "https://example.test/advice/search/love");
		assert_eq!(source.url_for(""), "https://example.test/advice/search/");
	}

	#[test]
	fn closures_are_sources() {
		let source = |query: &str| -> Result<Vec<Advice>, LookupError> {
			Ok(vec![Advice::new(1, format!("about {query}"))])
		};
		assert_eq!(source.search("cats"), Ok(vec![Advice::new(1, "about cats")]));
	}

	#[test]
	fn http_success_yields_slips() {
		let (endpoint, server) = serve_once("200 OK", r#"{"slips":[{"id":1,"advice":"Be kind"}]}"#);
		let source = HttpAdviceSource::new(endpoint, DEFAULT_TIMEOUT).unwrap();

		let result = source.search("love");

		assert_eq!(result, Ok(vec![Advice::new(1, "Be kind")]));
		let request_line = server.join().unwrap();
		assert!(request_line.starts_with("GET /advice/search/love "));
	}

	#[test]
	fn http_404_is_not_found() {
		let (endpoint, server) = serve_once("404 Not Found", r#"{"error":"nope"}"#);
		let source = HttpAdviceSource::new(endpoint, DEFAULT_TIMEOUT).unwrap();

		assert_eq!(source.search(""), Err(LookupError::NotFound));
		server.join().unwrap();
	}

	#[test]
	fn unreachable_endpoint_is_a_transport_error() {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let address = listener.local_addr().unwrap();
		drop(listener);
		let source =
			HttpAdviceSource::new(format!("http://{address}/advice/search"), DEFAULT_TIMEOUT).unwrap();

		assert!(matches!(source.search("love"), Err(LookupError::Transport(_))));
	}
}
