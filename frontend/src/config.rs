#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    match option_env!("LEADS_BACKEND_URL") {
        Some(url) => url,
        None => "http://localhost:3001", // Development URL when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("LEADS_BACKEND_URL") {
        Some(url) => url,
        None => "", // Production URL, same origin
    }
}

pub const LEADS_PATH: &str = "/api/leads";

pub fn leads_endpoint() -> String {
    format!("{}{}", get_backend_url().trim_end_matches('/'), LEADS_PATH)
}
