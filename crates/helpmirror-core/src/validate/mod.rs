//! Stage 4: probe every rewritten `detailUrl` for reachability.
//!
//! One HEAD request per item with a bounded timeout; servers that refuse
//! HEAD (405/501) get a GET fallback with the body discarded. A fixed pause
//! separates probes so the mirror host is not hammered.

mod classify;

use anyhow::Result;
use std::thread;
use std::time::Duration;

use crate::manifest::Manifest;
use crate::report::StageSummary;

use classify::classify_curl_error;

/// Per-item result of a reachability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx response.
    Valid,
    /// Non-2xx response with its status code.
    HttpError(u32),
    /// Could not connect or resolve.
    ConnectionError,
    /// Request exceeded the configured timeout.
    Timeout,
    /// Any other transport failure, with cause.
    OtherError(String),
    /// Item has no usable `detailUrl`.
    SkippedInvalid,
}

impl ProbeOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ProbeOutcome::HttpError(_)
                | ProbeOutcome::ConnectionError
                | ProbeOutcome::Timeout
                | ProbeOutcome::OtherError(_)
        )
    }
}

/// Aggregate counts, independent of the per-item records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationTally {
    pub total: usize,
    pub valid: usize,
    pub failed: usize,
}

pub fn tally(summary: &StageSummary<ProbeOutcome>) -> ValidationTally {
    ValidationTally {
        total: summary.total(),
        valid: summary.count(|o| *o == ProbeOutcome::Valid),
        failed: summary.count(ProbeOutcome::is_failure),
    }
}

/// Probe every item's `detailUrl`, pausing `pause` between requests.
pub fn validate_links(
    manifest: &Manifest,
    timeout: Duration,
    pause: Duration,
) -> Result<StageSummary<ProbeOutcome>> {
    let mut summary = StageSummary::new();

    for (index, item) in manifest.data.iter().enumerate() {
        let name = crate::filename::derive_filename(item);

        let Some(url) = item.url() else {
            tracing::warn!(index, name = %name, "item has no detailUrl, skipping probe");
            summary.record(index, name, ProbeOutcome::SkippedInvalid);
            continue;
        };

        let outcome = probe(url, timeout);
        match &outcome {
            ProbeOutcome::Valid => tracing::debug!(index, name = %name, url, "link valid"),
            other => tracing::warn!(index, name = %name, url, outcome = ?other, "link probe failed"),
        }
        summary.record(index, name, outcome);

        if index + 1 < manifest.data.len() {
            thread::sleep(pause);
        }
    }

    Ok(summary)
}

/// One reachability probe: HEAD first, GET fallback for HEAD-refusing hosts.
pub fn probe(url: &str, timeout: Duration) -> ProbeOutcome {
    match request_status(url, timeout, true) {
        Ok(405) | Ok(501) => match request_status(url, timeout, false) {
            Ok(code) if (200..300).contains(&code) => ProbeOutcome::Valid,
            Ok(code) => ProbeOutcome::HttpError(code),
            Err(e) => classify_curl_error(&e),
        },
        Ok(code) if (200..300).contains(&code) => ProbeOutcome::Valid,
        Ok(code) => ProbeOutcome::HttpError(code),
        Err(e) => classify_curl_error(&e),
    }
}

/// Issue a single request and return the response status. `head` selects a
/// body-less HEAD; otherwise a GET whose body is read and discarded.
fn request_status(url: &str, timeout: Duration, head: bool) -> Result<u32, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(head)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    easy.response_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::StageSummary;

    #[test]
    fn tally_counts_valid_and_failed() {
        let mut s: StageSummary<ProbeOutcome> = StageSummary::new();
        s.record(0, "a".into(), ProbeOutcome::Valid);
        s.record(1, "b".into(), ProbeOutcome::HttpError(404));
        s.record(2, "c".into(), ProbeOutcome::SkippedInvalid);
        s.record(3, "d".into(), ProbeOutcome::Timeout);

        let t = tally(&s);
        assert_eq!(t.total, 4);
        assert_eq!(t.valid, 1);
        assert_eq!(t.failed, 2);
    }

    #[test]
    fn refused_connection_classifies_as_connection_error() {
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let outcome = probe(
            &format!("http://127.0.0.1:{port}/x.txt"),
            Duration::from_secs(2),
        );
        assert_eq!(outcome, ProbeOutcome::ConnectionError);
    }
}
