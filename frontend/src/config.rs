use log::Level;

#[cfg(debug_assertions)]
pub fn get_portfolio_url() -> &'static str {
    "http://localhost:3000"  // Portfolio home running locally
}

#[cfg(not(debug_assertions))]
pub fn get_portfolio_url() -> &'static str {
    ""  // Same origin, "/" renders the Work route
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Anchor of the project grid on the portfolio home.
pub fn work_url() -> String {
    format!("{}/#work", get_portfolio_url())
}

/// Root of the portfolio home, used by the brand link.
pub fn home_url() -> String {
    format!("{}/", get_portfolio_url())
}
