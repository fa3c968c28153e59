use srcfind_common::errors::*;
use srcfind_finder::DiscoveredSource;

pub fn assert_found(result: Result<DiscoveredSource>, url: &str) {
    match result {
        Ok(source) => assert_eq!(source.urls(), [url]),
        Err(err) => panic!("expected {:?}, got error: {:#}", url, err),
    }
}

pub fn assert_source_not_found(result: Result<DiscoveredSource>) {
    match result {
        Ok(source) => panic!("expected source not found, got {:?}", source),
        Err(err) => assert!(err.is::<SourceNotFound>(), "unexpected error: {:#}", err),
    }
}

pub fn assert_download_error(result: Result<DiscoveredSource>, status: Option<u16>) {
    match result {
        Ok(source) => panic!("expected download error, got {:?}", source),
        Err(err) => {
            let download = err
                .downcast_ref::<DownloadError>()
                .unwrap_or_else(|| panic!("unexpected error: {:#}", err));
            assert_eq!(download.status, status);
        }
    }
}
