//! Test helpers for writing rank requests to disk.

use camino::{Utf8Path, Utf8PathBuf};
use runmate_core::{
    PaceBand,
    test_support::{complete_profile, profile_id},
};
use tempfile::TempDir;

use crate::rank::RankRequest;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Create a temporary directory and the request path inside it.
pub(super) fn request_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    (tmp, request_path)
}

/// A reference runner with four candidates.
///
/// `p-marcus` mirrors the reference, `p-emma` runs a slower band,
/// `p-draft` is incomplete, and `p-jordan` mirrors the reference but is
/// already connected.
pub(super) fn sample_request() -> RankRequest {
    let mut emma = complete_profile("p-emma");
    emma.pace = PaceBand {
        min: 9.5,
        max: 10.5,
    };
    let mut draft = complete_profile("p-draft");
    draft.is_complete = false;

    RankRequest {
        reference: complete_profile("p-sarah"),
        candidates: vec![
            complete_profile("p-jordan"),
            emma,
            draft,
            complete_profile("p-marcus"),
        ],
        connected: [profile_id("p-jordan")].into_iter().collect(),
    }
}

pub(super) fn write_request(path: &Utf8Path, request: &RankRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
