//! Request fixtures shared by the integration tests.

use curlify_core::{Body, HttpRequest};
use std::io::{self, Read};

/// Reader that hands out its bytes one at a time, like a slow socket.
pub struct Trickle {
    data: Vec<u8>,
    pos: usize,
}

impl Trickle {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
        }
    }
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

/// Reader that yields some bytes, then fails.
pub struct FailsAfter {
    sent: bool,
}

impl FailsAfter {
    pub fn new() -> Self {
        Self { sent: false }
    }
}

impl Read for FailsAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.sent && !buf.is_empty() {
            self.sent = true;
            buf[0] = b'x';
            return Ok(1);
        }
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "peer went away"))
    }
}

pub fn streaming_post(url: &str, payload: &[u8]) -> HttpRequest {
    let mut req = HttpRequest::new("POST", url);
    req.set_body(Body::from_reader(Trickle::new(payload)));
    req
}
