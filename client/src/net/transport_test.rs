#![cfg(not(feature = "csr"))]

use super::*;

#[tokio::test]
async fn fetch_transport_is_unavailable_off_browser() {
    let err = FetchTransport
        .send(OutboundRequest::get("http://localhost:1337/logout"))
        .await
        .unwrap_err();
    assert_eq!(err, TransportError::new(FETCH_UNAVAILABLE));
}
