//! Site configuration, resolved once at startup from the page hostname and
//! handed to components through context instead of a mutable global.

const WAITLIST_ENDPOINT: &str = "https://api.meridianlabs.app/waitlist";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Classify the runtime from the page hostname. `localhost` and
    /// `127.0.0.1` are development; anything containing `staging` or `dev`
    /// is a staging deploy; everything else is production.
    pub fn detect(hostname: &str) -> Self {
        if hostname == "localhost" || hostname == "127.0.0.1" {
            Self::Development
        } else if hostname.contains("staging") || hostname.contains("dev") {
            Self::Staging
        } else {
            Self::Production
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonLabels {
    pub default: &'static str,
    pub success: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub environment: Environment,
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub button_reset_delay_ms: u32,
    pub debug_mode: bool,
    pub success_message: &'static str,
    pub error_message: &'static str,
    pub button: ButtonLabels,
}

impl Config {
    pub fn for_environment(environment: Environment) -> Self {
        let mut config = Self {
            environment,
            api_base_url: WAITLIST_ENDPOINT.to_string(),
            request_timeout_ms: 10_000,
            button_reset_delay_ms: 2_000,
            debug_mode: false,
            success_message: "Thank you for joining our waitlist! We will be in touch soon.",
            error_message: "Your information was saved locally, but there was an issue \
                connecting to our servers. We will still contact you!",
            button: ButtonLabels {
                default: "SEND",
                success: "SENT",
            },
        };
        if environment == Environment::Development {
            // Shorter timeout plus console logging while developing locally
            config.request_timeout_ms = 5_000;
            config.debug_mode = true;
        }
        config
    }

    /// Build the configuration from the current page. Falls back to production
    /// defaults when no window or hostname is available.
    pub fn load() -> Self {
        let hostname = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        Self::for_environment(Environment::detect(&hostname))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_is_development() {
        assert_eq!(Environment::detect("localhost"), Environment::Development);
        assert_eq!(Environment::detect("127.0.0.1"), Environment::Development);
    }

    #[test]
    fn staging_hosts_match_by_substring() {
        assert_eq!(
            Environment::detect("staging.meridianlabs.app"),
            Environment::Staging
        );
        assert_eq!(
            Environment::detect("dev.meridianlabs.app"),
            Environment::Staging
        );
    }

    #[test]
    fn everything_else_is_production() {
        assert_eq!(
            Environment::detect("meridianlabs.app"),
            Environment::Production
        );
        assert_eq!(Environment::detect(""), Environment::Production);
    }

    #[test]
    fn development_shortens_timeout_and_enables_debug() {
        let dev = Config::for_environment(Environment::Development);
        let prod = Config::for_environment(Environment::Production);
        assert_eq!(dev.request_timeout_ms, 5_000);
        assert!(dev.debug_mode);
        assert_eq!(prod.request_timeout_ms, 10_000);
        assert!(!prod.debug_mode);
    }
}
