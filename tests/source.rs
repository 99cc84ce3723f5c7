use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread,
    time::Duration,
};

use plotter::{FetchError, Series, Source};
use tempfile::NamedTempFile;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Serve exactly one HTTP response on a free local port.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone"));
        // drain the request head
        let mut line = String::new();
        while reader.read_line(&mut line).expect("read") > 0 {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }
        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .expect("write");
    });
    format!("http://{addr}/series")
}

#[test]
fn loads_from_url() {
    let url = serve_once("200 OK", r#"{"01-01-2022": 10, "02-01-2022": "12.5"}"#);
    let raw = Source::Url(url).load(TIMEOUT).unwrap();
    let series = Series::from_raw(&raw).unwrap();
    assert_eq!(series.labels(), ["01-01-2022", "02-01-2022"]);
    assert_eq!(series.values(), [10.0, 12.5]);
}

#[test]
fn non_success_status_is_an_error() {
    let url = serve_once("404 Not Found", "{}");
    let err = Source::Url(url).load(TIMEOUT).unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[test]
fn malformed_body_is_a_json_error() {
    let url = serve_once("200 OK", "<html>oops</html>");
    let err = Source::Url(url).load(TIMEOUT).unwrap_err();
    assert!(matches!(err, FetchError::Json(_)));
}

#[test]
fn loads_from_file_in_document_order() {
    let mut f = NamedTempFile::new().unwrap();
    write!(f, r#"{{"z": 3, "a": 1, "m": 2}}"#).unwrap();
    let raw = Source::from_path(f.path().to_str().unwrap())
        .load(TIMEOUT)
        .unwrap();
    let keys: Vec<&str> = raw.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Source::from_path("/definitely/not/here.json")
        .load(TIMEOUT)
        .unwrap_err();
    assert!(matches!(err, FetchError::Io(_)));
}

#[test]
fn dash_means_stdin() {
    assert_eq!(Source::from_path("-"), Source::Stdin);
}
