#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// Retro sample used by most CLI tests: two KEEP rows, one Change.
pub const SAMPLE_CSV: &str = "\
Marca temporal,Categoria,Comentario
2026-01-10 09:00:00,KEEP,good
2026-01-10 09:05:00,Change,slow
2026-01-10 09:07:00,keep,fine
";

/// Isolated HOME for one test, so no user config or env secret leaks in.
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_retroboard_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Command for the retroboard binary bound to a clean HOME.
pub fn rb(name: &str) -> Command {
    let home = env::temp_dir().join(format!("{}_retroboard_home", name));
    fs::create_dir_all(&home).ok();
    let mut cmd = cargo_bin_cmd!("retroboard");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env_remove("GEMINI_API_KEY")
        .env_remove("RETROBOARD_SHEET_ID")
        .env_remove("RETROBOARD_GID");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_retroboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a CSV fixture into the temp dir and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_feedback.csv", name));
    fs::write(&path, content).expect("write csv fixture");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config directory of a test HOME, as `Config::config_dir` resolves it.
pub fn test_config_dir(name: &str) -> PathBuf {
    let home = env::temp_dir().join(format!("{}_retroboard_home", name));
    let dir = if cfg!(target_os = "windows") {
        home.join("retroboard")
    } else {
        home.join(".retroboard")
    };
    fs::create_dir_all(&dir).expect("create config dir");
    dir
}

/// Write the YAML config file of a test HOME.
pub fn write_config(name: &str, yaml: &str) {
    fs::write(test_config_dir(name).join("retroboard.conf"), yaml).expect("write config");
}

/// One-shot HTTP server on localhost.
///
/// Answers the first request with `status` and `body`; the join handle
/// yields the raw request (head and body) as received.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local server");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).expect("write response");
        request
    });

    (format!("http://{addr}"), handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let body_len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
