use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use super::{Catalog, CatalogError};

/// Public endpoint returning every country with only its name fields.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything able to produce the catalog once.
pub trait CatalogSource: Send + 'static {
	/// Human readable origin used in logs.
	fn describe(&self) -> String;

	fn load(&self) -> Result<Catalog, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
	name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
	common: String,
}

/// Decode the REST payload: an array of records exposing `name.common`.
pub fn parse_records(payload: &str) -> Result<Catalog, CatalogError> {
	let records: Vec<CountryRecord> = serde_json::from_str(payload)?;
	Ok(Catalog::new(
		records.into_iter().map(|record| record.name.common).collect(),
	))
}

/// Fetches the catalog with a single unauthenticated GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
	url: String,
	timeout: Duration,
}

impl HttpSource {
	pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
		Self {
			url: url.into(),
			timeout,
		}
	}

	#[must_use]
	pub fn url(&self) -> &str {
		&self.url
	}

	fn client(&self) -> Result<Client, CatalogError> {
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		headers.insert(
			USER_AGENT,
			HeaderValue::from_static(concat!("country-picker/", env!("CARGO_PKG_VERSION"))),
		);

		Client::builder()
			.default_headers(headers)
			.timeout(self.timeout)
			.build()
			.map_err(|source| CatalogError::Request {
				url: self.url.clone(),
				source,
			})
	}
}

impl Default for HttpSource {
	fn default() -> Self {
		Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
	}
}

impl CatalogSource for HttpSource {
	fn describe(&self) -> String {
		self.url.clone()
	}

	fn load(&self) -> Result<Catalog, CatalogError> {
		let request_error = |source| CatalogError::Request {
			url: self.url.clone(),
			source,
		};

		let response = self.client()?.get(&self.url).send().map_err(request_error)?;
		let status = response.status();
		if !status.is_success() {
			return Err(CatalogError::Status {
				url: self.url.clone(),
				status: status.as_u16(),
			});
		}

		let body = response.text().map_err(request_error)?;
		parse_records(&body)
	}
}

/// Reads the same payload the REST endpoint serves from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
}

impl FileSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl CatalogSource for FileSource {
	fn describe(&self) -> String {
		self.path.display().to_string()
	}

	fn load(&self) -> Result<Catalog, CatalogError> {
		let payload = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
			path: self.path.display().to_string(),
			source,
		})?;
		parse_records(&payload)
	}
}

/// A catalog already in memory, delivered as-is.
impl CatalogSource for Catalog {
	fn describe(&self) -> String {
		format!("in-memory catalog ({} names)", self.len())
	}

	fn load(&self) -> Result<Catalog, CatalogError> {
		Ok(self.clone())
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::thread::{self, JoinHandle};

	use super::*;

	const PAYLOAD: &str = r#"[
		{ "name": { "common": "United States", "official": "United States of America" } },
		{ "name": { "common": "Canada" } },
		{ "name": { "common": "Mexico", "nativeName": {} } }
	]"#;

	#[test]
	fn records_are_reduced_to_common_names() {
		let catalog = parse_records(PAYLOAD).expect("payload parses");
		assert_eq!(catalog.names(), ["United States", "Canada", "Mexico"]);
	}

	#[test]
	fn payload_without_names_is_rejected() {
		let err = parse_records(r#"[{ "flag": "x" }]"#).unwrap_err();
		assert!(matches!(err, CatalogError::Decode(_)));
	}

	#[test]
	fn file_source_reads_payload_from_disk() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		file.write_all(PAYLOAD.as_bytes()).expect("write payload");

		let source = FileSource::new(file.path());
		let catalog = source.load().expect("catalog loads");
		assert_eq!(catalog.len(), 3);
	}

	#[test]
	fn missing_file_reports_path() {
		let source = FileSource::new("/definitely/not/here.json");
		let err = source.load().unwrap_err();
		assert!(err.to_string().contains("/definitely/not/here.json"));
	}

	/// Answer one request with `status` and `body`, returning the request line.
	fn serve_once(status: &str, body: &'static str) -> (String, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
		let url = format!(
			"http://{}/v3.1/all?fields=name",
			listener.local_addr().expect("local addr")
		);
		let status = status.to_string();

		let handle = thread::spawn(move || {
			let (stream, _) = listener.accept().expect("accept connection");
			let mut reader = BufReader::new(stream);
			let mut request_line = String::new();
			reader.read_line(&mut request_line).expect("read request line");
			loop {
				let mut header = String::new();
				let read = reader.read_line(&mut header).expect("read header");
				if read == 0 || header == "\r\n" {
					break;
				}
			}

			let mut stream = reader.into_inner();
			write!(
				stream,
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			)
			.expect("write response");
			request_line.trim_end().to_string()
		});

		(url, handle)
	}

	#[test]
	fn http_source_fetches_common_names() {
		let (url, server) = serve_once("200 OK", PAYLOAD);
		let catalog = HttpSource::new(url, DEFAULT_TIMEOUT)
			.load()
			.expect("catalog loads");

		assert_eq!(catalog.names(), ["United States", "Canada", "Mexico"]);
		assert_eq!(
			server.join().expect("server thread"),
			"GET /v3.1/all?fields=name HTTP/1.1"
		);
	}

	#[test]
	fn http_error_status_is_reported() {
		let (url, server) = serve_once("500 Internal Server Error", "oops");
		let err = HttpSource::new(url, DEFAULT_TIMEOUT).load().unwrap_err();
		server.join().expect("server thread");

		assert!(matches!(err, CatalogError::Status { status: 500, .. }));
	}

	#[test]
	fn http_body_that_is_not_a_catalog_fails_to_decode() {
		let (url, server) = serve_once("200 OK", r#"{"message": "Not Found"}"#);
		let err = HttpSource::new(url, DEFAULT_TIMEOUT).load().unwrap_err();
		server.join().expect("server thread");

		assert!(matches!(err, CatalogError::Decode(_)));
	}

	#[test]
	fn default_http_source_targets_public_endpoint() {
		assert_eq!(HttpSource::default().url(), DEFAULT_ENDPOINT);
	}
}
