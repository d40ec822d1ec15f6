use nutri_booking::api::DispatchResponse;
use nutri_booking::config::SiteConfig;
use nutri_booking::site::{router, SiteApp};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::test]
async fn serves_bookings_and_assets_over_tcp() {
    let assets_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("live_server_assets");
    fs::create_dir_all(&assets_dir).unwrap();
    fs::write(assets_dir.join("profile.jpeg"), b"not really a jpeg").unwrap();

    let config = SiteConfig {
        assets_dir: Some(assets_dir),
        profile_photo_url: "/assets/profile.jpeg".to_string(),
        whatsapp_recipient: "5521999990000".to_string(),
        ..SiteConfig::default()
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(Arc::new(SiteApp::new(config)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let home = client.get(&base).send().await.unwrap();
    assert_eq!(home.status(), reqwest::StatusCode::OK);
    let html = home.text().await.unwrap();
    assert!(html.contains("src=\"/assets/profile.jpeg\""));

    let photo = client
        .get(format!("{base}/assets/profile.jpeg"))
        .send()
        .await
        .unwrap();
    assert_eq!(photo.status(), reqwest::StatusCode::OK);
    assert_eq!(photo.bytes().await.unwrap().as_ref(), b"not really a jpeg");

    let booked = client
        .post(format!("{base}/api/booking"))
        .json(&serde_json::json!({
            "name": "Ana",
            "email": "ana@x.com",
            "phone": "11999998888",
            "date": "2026-03-10",
            "time": "14:00",
            "message": "Primeira consulta"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(booked.status(), reqwest::StatusCode::OK);
    let response: DispatchResponse = booked.json().await.unwrap();
    assert!(response.url.starts_with("https://wa.me/5521999990000?text="));
    assert!(response.url.contains("Primeira%20consulta"));
}
