use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use tempfile::TempDir;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zip::write::{ExtendedFileOptions, FileOptions};
use zip::CompressionMethod;

use statscan::{Language, TableFetcher, TableFetcherBuilder};

// Common test constants
pub const SAMPLE_TABLE_ID: &str = "14-10-0287";
pub const SAMPLE_CSV: &str = "REF_DATE,GEO,VALUE\n2020-01,Canada,100\n2020-02,Canada,101\n";
pub const SAMPLE_CSV_FRENCH: &str =
    "PERIODE DE REFERENCE;GEO;VALEUR\n2020-01;Canada;100\n2020-02;Canada;101\n";

/// Base URL guaranteed to refuse connections (port 1 on loopback); any test
/// that reaches the network through it fails with a transport error.
pub const UNROUTABLE_BASE: &str = "http://127.0.0.1:1/";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Installs a test-friendly tracing subscriber (idempotent).
pub fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statscan=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Builds an in-memory ZIP archive holding a single CSV member, the shape of
/// a provider table archive.
pub fn build_table_zip(csv_name: &str, csv_content: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
        let options = FileOptions::<ExtendedFileOptions>::default()
            .compression_method(CompressionMethod::Stored);
        zip.start_file(csv_name, options).expect("start zip member");
        zip.write_all(csv_content.as_bytes())
            .expect("write zip member");
        zip.finish().expect("finish zip");
    }
    buf
}

/// Serves exactly one HTTP response on a loopback port and returns the base
/// URL to request it from. The listener thread exits after the first request.
pub fn serve_once(status: &'static str, content_type: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 8192];
            let _ = stream.read(&mut request);

            let header = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                content_type,
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });

    format!("http://{}/", addr)
}

/// Serves a single table archive download.
pub fn serve_archive_once(body: Vec<u8>) -> String {
    serve_once("200 OK", "application/zip", body)
}

/// Serves a single error response.
pub fn serve_status_once(status: &'static str) -> String {
    serve_once(status, "application/json", b"{\"error\":\"not found\"}".to_vec())
}

/// Creates a fetcher wired to a test cache directory and base URL.
pub fn build_test_fetcher(cache_dir: &Path, base_url: &str, language: Language) -> TableFetcher {
    TableFetcherBuilder::new()
        .cache_dir(cache_dir.to_path_buf())
        .base_url(base_url)
        .language(language)
        .build()
}
