#![cfg(feature = "registry")]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use school2osm_core::error::CoreError;
use school2osm_core::registry::{RegistryClient, RegistryConfig, ResponseCache};
use tempfile::tempdir;

const RECORD_BODY: &str = r#"{"Orgnr":"974600951","Navn":"Galtvort skole","ErOffentligSkole":true}"#;

struct CannedServer {
    base_url: String,
    paths: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl CannedServer {
    /// Answers one connection per canned response, in order, then stops.
    fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let addr = listener.local_addr().expect("server addr");
        let paths = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&paths);

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().expect("accept");
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
                let mut request_line = String::new();
                reader.read_line(&mut request_line).expect("read request line");
                loop {
                    let mut header = String::new();
                    let read = reader.read_line(&mut header).expect("read header");
                    if read == 0 || header == "\r\n" {
                        break;
                    }
                }
                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                seen.lock().expect("lock paths").push(path);

                let response = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).expect("write response");
                stream.flush().expect("flush response");
            }
        });

        Self {
            base_url: format!("http://{addr}/v3"),
            paths,
            handle,
        }
    }

    fn finish(self) -> Vec<String> {
        self.handle.join().expect("server thread");
        let paths = self.paths.lock().expect("lock paths");
        paths.clone()
    }
}

fn client(base_url: &str, cache_dir: Option<&Path>) -> RegistryClient {
    RegistryClient::new(RegistryConfig {
        base_url: base_url.to_string(),
        timeout_ms: 5_000,
        max_retries: 2,
        retry_base_ms: 1,
        page_size: 100,
        cache_dir: cache_dir.map(Path::to_path_buf),
    })
    .expect("registry client")
}

#[test]
fn server_error_is_retried_until_success() {
    let server = CannedServer::start(vec![(503, "{}"), (200, RECORD_BODY)]);
    let record = client(&server.base_url, None)
        .unit_details("974600951")
        .expect("unit details");
    assert_eq!(record.name, "Galtvort skole");
    assert!(record.is_public_school);
    assert_eq!(
        server.finish(),
        vec!["/v3/enhet/974600951", "/v3/enhet/974600951"]
    );
}

#[test]
fn retries_stop_after_budget() {
    let server = CannedServer::start(vec![(503, "{}"), (502, "{}"), (500, "{}")]);
    let err = client(&server.base_url, None)
        .unit_details("1")
        .expect_err("must fail");
    assert!(matches!(err, CoreError::Http { status: 500, .. }), "{err}");
    assert_eq!(server.finish().len(), 3);
}

#[test]
fn not_found_fails_without_retry() {
    let server = CannedServer::start(vec![(404, "{}")]);
    let err = client(&server.base_url, None)
        .unit_details("1")
        .expect_err("must fail");
    assert!(matches!(err, CoreError::Http { status: 404, .. }), "{err}");
    assert_eq!(server.finish().len(), 1);
}

#[test]
fn cached_body_is_served_without_network() {
    let temp = tempdir().expect("tempdir");
    let server = CannedServer::start(vec![(200, RECORD_BODY)]);
    let registry = client(&server.base_url, Some(temp.path()));

    registry.unit_details("974600951").expect("first fetch");
    assert_eq!(server.finish().len(), 1);

    let again = registry.unit_details("974600951").expect("served from cache");
    assert_eq!(again.org_num, "974600951");

    let cache = ResponseCache::new(temp.path());
    let cached = cache
        .get(&registry.unit_url("974600951"))
        .expect("read cache")
        .expect("cached body");
    assert_eq!(cached, RECORD_BODY);
}

#[test]
fn unreadable_cache_entry_is_replaced() {
    let temp = tempdir().expect("tempdir");
    let server = CannedServer::start(vec![(200, RECORD_BODY)]);
    let registry = client(&server.base_url, Some(temp.path()));
    let cache = ResponseCache::new(temp.path());
    let url = registry.unit_url("974600951");
    cache.put(&url, "{ truncated").expect("seed corrupt entry");

    let record = registry.unit_details("974600951").expect("refetch");
    assert_eq!(record.name, "Galtvort skole");
    assert_eq!(server.finish().len(), 1);
    assert_eq!(cache.get(&url).expect("read cache").as_deref(), Some(RECORD_BODY));
}

#[test]
fn listing_reads_first_page_and_filters_active_schools() {
    let server = CannedServer::start(vec![(
        200,
        r#"{"Sidenummer":1,"AntallSider":7,"EnhetListe":[
            {"Orgnr":"1","Navn":"Aktiv skole","ErSkole":true,"ErAktiv":true},
            {"Orgnr":"2","Navn":"Nedlagt skole","ErSkole":true,"ErAktiv":false},
            {"Orgnr":"3","Navn":"Barnehage","ErSkole":false,"ErAktiv":true}
        ]}"#,
    )]);
    let units = client(&server.base_url, None)
        .relevant_units()
        .expect("listing");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].org_num, "1");
    assert_eq!(
        server.finish(),
        vec!["/v3/enheter?sidenummer=1&antallPerSide=100"]
    );
}
