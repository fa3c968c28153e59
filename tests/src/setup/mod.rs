use crate::data::*;
use crate::fixtures::transport::FakeTransport;

/// Publish a yum repository with these packages at `base`.
///
/// The package files themselves are served too, so liveness probes pass.
pub fn setup_repo(transport: &FakeTransport, base: &str, packages: &[Package]) {
    transport.serve(&format!("{base}repodata/"), index_page(&["repomd.xml"]));
    transport.serve(&format!("{base}repodata/repomd.xml"), repomd_xml(PRIMARY_HREF));
    transport.serve(
        &format!("{base}{PRIMARY_HREF}"),
        gzip(primary_xml(packages).as_bytes()),
    );
    for pkg in packages {
        setup_package_file(transport, &format!("{base}{}", pkg.location()));
    }
}

pub fn setup_package_file(transport: &FakeTransport, url: &str) {
    transport.serve(url, b"\xed\xab\xee\xdb\x03\x00".to_vec());
}

pub fn setup_index(transport: &FakeTransport, url: &str, entries: &[&str]) {
    transport.serve(url, index_page(entries));
}

/// The lvm2 source repo and a binary repo containing device-mapper-libs.
pub fn setup_lvm2_repos(transport: &FakeTransport) {
    setup_repo(transport, DUMMY_SOURCE_REPO, &[lvm2_source()]);
    setup_repo(transport, DUMMY_BINARY_REPO, &[device_mapper_libs()]);
}
