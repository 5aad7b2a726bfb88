use std::net::SocketAddr;
use std::time::Duration;

use devices::{CalibrationResult, HemostasisResults, PoctResults};
use server::{HttpServer, ServerConfig};

async fn wait_for_address(server: &HttpServer) -> SocketAddr {
    for _ in 0..100 {
        if let Some(addr) = server.address() {
            return addr;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server did not bind within 2s");
}

#[tokio::test]
async fn serves_device_endpoints_over_tcp() {
    let table = devices::device_routes().unwrap();
    let server = HttpServer::from_table(ServerConfig::new("127.0.0.1", 0), table);
    let probe = server.clone();
    let (handle, token) = server.spawn();

    let addr = wait_for_address(&probe).await;
    let base = format!("http://{}", addr);
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/hemostasis/device/ABC123/results", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(
        res.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let hemostasis: HemostasisResults = res.json().await.unwrap();
    assert_eq!(hemostasis, devices::hemostasis_results("ABC123"));

    let poct: PoctResults = client
        .get(format!("{}/poct/device/a%20b/results", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(poct.device_id, "a b");
    assert_eq!(poct, devices::poct_results("a b"));

    let calibration: CalibrationResult = client
        .post(format!("{}/poct/device/XYZ/calibration", base))
        .body("{\"ignored\": true}")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(calibration, devices::calibrate_poct("XYZ"));

    let res = client
        .get(format!("{}/unknown/path", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);

    token.cancel();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server should shut down within timeout");
    assert!(result.unwrap().is_ok());
}
