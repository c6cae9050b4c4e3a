// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{HOST, NET_TIMEOUT_SECS, PREFIX, USER_AGENT};
use crate::fetch::FetchError;

pub fn http_get(path: &str) -> Result<String, FetchError> {
    let mut s = TcpStream::connect((HOST, 80)).map_err(FetchError::transport)?;
    s.set_read_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))
        .map_err(FetchError::transport)?;
    s.set_write_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))
        .map_err(FetchError::transport)?;

    let full = format!("{}{}", PREFIX, path);
    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        full, HOST, USER_AGENT
    );
    s.write_all(req.as_bytes()).map_err(FetchError::transport)?;
    s.flush().map_err(FetchError::transport)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(FetchError::transport)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(FetchError::Status(format!("{} {}{}", status, HOST, full)));
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| FetchError::Transport(s!("malformed HTTP response")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}
