use std::io::Write;

/// Everything here goes to stderr so stdout stays the plain listing.
/// The bearer token is never echoed.
pub fn print_request_debug(method: &str, url: &str) {
    eprintln!("debug[request]: {method} {url}");
    eprintln!("debug[request]: authorization: Bearer <redacted>");
    std::io::stderr().flush().ok();
}

pub fn print_response_debug(status: u16, body: &str) {
    eprintln!("debug[response]: status: {status}");
    eprintln!("debug[response]: raw body:\n{body}\n");
    std::io::stderr().flush().ok();
}
