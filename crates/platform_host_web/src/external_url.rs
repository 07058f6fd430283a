//! External URL adapter for the browser.

use platform_host::{ensure_supported_url, ExternalUrlFuture, ExternalUrlService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Opens supported URLs in a new browser tab (`window.open(url, "_blank")`).
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            ensure_supported_url(url)?;
            bridge::open_in_new_tab(url)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn unsupported_schemes_never_reach_the_browser() {
        let err = block_on(WebExternalUrlService.open_url("javascript:void(0)"))
            .expect_err("javascript url");
        assert!(err.starts_with("refusing to open"), "{err}");

        let err = block_on(WebExternalUrlService.open_url("https://github.com/jordan-avery"))
            .expect_err("no browser natively");
        assert!(err.starts_with("no browser available"), "{err}");
    }
}
