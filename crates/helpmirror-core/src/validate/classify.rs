//! Map curl transport errors onto probe outcomes.

use super::ProbeOutcome;

pub(crate) fn classify_curl_error(err: &curl::Error) -> ProbeOutcome {
    if err.is_operation_timedout() {
        ProbeOutcome::Timeout
    } else if err.is_couldnt_connect()
        || err.is_couldnt_resolve_host()
        || err.is_couldnt_resolve_proxy()
    {
        ProbeOutcome::ConnectionError
    } else {
        ProbeOutcome::OtherError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // libcurl error codes, see curl/curl.h
    const CURLE_URL_MALFORMAT: u32 = 3;
    const CURLE_COULDNT_RESOLVE_HOST: u32 = 6;
    const CURLE_COULDNT_CONNECT: u32 = 7;
    const CURLE_OPERATION_TIMEDOUT: u32 = 28;

    #[test]
    fn timeout_code_maps_to_timeout() {
        let err = curl::Error::new(CURLE_OPERATION_TIMEDOUT);
        assert_eq!(classify_curl_error(&err), ProbeOutcome::Timeout);
    }

    #[test]
    fn connect_codes_map_to_connection_error() {
        let refused = curl::Error::new(CURLE_COULDNT_CONNECT);
        assert_eq!(classify_curl_error(&refused), ProbeOutcome::ConnectionError);
        let no_host = curl::Error::new(CURLE_COULDNT_RESOLVE_HOST);
        assert_eq!(classify_curl_error(&no_host), ProbeOutcome::ConnectionError);
    }

    #[test]
    fn anything_else_is_other_error() {
        let err = curl::Error::new(CURLE_URL_MALFORMAT);
        assert!(matches!(
            classify_curl_error(&err),
            ProbeOutcome::OtherError(_)
        ));
    }
}
