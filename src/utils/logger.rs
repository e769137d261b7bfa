use crate::utils::error::{RelayError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parses an `EnvFilter` directive string such as `debug` or `dadjoke_relay=trace,info`.
pub fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| RelayError::InvalidConfigValueError {
        field: "logging.level".to_string(),
        value: directives.to_string(),
        reason: format!("Invalid log filter: {}", e),
    })
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "dadjoke_relay=debug,tower_http=debug,info"
    } else {
        "dadjoke_relay=info,tower_http=info"
    }
}

/// `RUST_LOG` wins over `level`, which wins over the verbose/quiet defaults.
fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        level
            .and_then(|directives| parse_filter(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(default_directives(verbose)))
    })
}

pub fn init_logger(verbose: bool, json: bool, level: Option<&str>) {
    let registry = tracing_subscriber::registry().with(build_filter(verbose, level));

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(), // one object per line for log shippers
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("dadjoke_relay=trace,info").is_ok());
        assert!(matches!(
            parse_filter("dadjoke_relay=loud"),
            Err(RelayError::InvalidConfigValueError { .. })
        ));
    }
}
