//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening URLs (social profiles, project links, resume download) outside the
/// desktop shell.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

/// Schemes the shell may hand to the host, plus site-relative paths such as `/resume.pdf`.
const SUPPORTED_PREFIXES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Rejects URLs outside the web, mail and site-relative schemes (`javascript:`, `data:`,
/// protocol-relative `//host`).
pub fn ensure_supported_url(url: &str) -> Result<(), String> {
    let relative = url.starts_with('/') && !url.starts_with("//");
    if relative || SUPPORTED_PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
        Ok(())
    } else {
        Err(format!("refusing to open unsupported url `{url}`"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Service that records every requested URL instead of navigating. Clones share the log.
pub struct RecordingExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingExternalUrlService {
    /// URLs requested so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            ensure_supported_url(url)?;
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn recording_service_logs_supported_urls_only() {
        let service = RecordingExternalUrlService::default();
        block_on(service.open_url("https://github.com")).expect("https");
        block_on(service.open_url("mailto:hello@example.com")).expect("mailto");
        assert!(block_on(service.open_url("javascript:alert(1)")).is_err());

        assert_eq!(
            service.opened(),
            vec![
                "https://github.com".to_string(),
                "mailto:hello@example.com".to_string()
            ]
        );
    }

    #[test]
    fn only_web_mail_and_site_paths_are_supported() {
        for url in ["https://a.dev", "http://a.dev", "mailto:x@a.dev", "/resume.pdf"] {
            assert_eq!(ensure_supported_url(url), Ok(()), "{url}");
        }
        for url in ["javascript:void(0)", "data:text/html,hi", "//evil.dev", "ftp://a.dev", ""] {
            assert!(ensure_supported_url(url).is_err(), "{url}");
        }
    }
}
