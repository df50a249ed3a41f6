use super::*;

#[test]
fn report_export_url_formats_expected_path() {
    assert_eq!(report_export_url("users"), "/admin/reports/export/users");
}

#[test]
fn report_filename_uses_xlsx_extension() {
    assert_eq!(report_filename("requests"), "requests_report.xlsx");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_binary_is_unavailable_without_browser() {
    let result = block_on_ready(fetch_binary("/admin/reports/export/users"));
    assert!(matches!(result, Err(UiError::Unavailable("fetch"))));
}

// Minimal executor for a future that completes on first poll.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not complete immediately"),
    }
}
