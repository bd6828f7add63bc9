use std::sync::Arc;

use super::*;
use crate::test_support::{BASE_URL, MockTransport, client};
use crate::token_store::MemoryTokenStore;
use crate::transport::{Method, RequestBody};

fn authed() -> (Arc<MockTransport>, ApiClient) {
    let transport = MockTransport::new();
    let api = client(&transport, &Arc::new(MemoryTokenStore::with_token("T")));
    (transport, api)
}

#[test]
fn new_firma_trims_and_requires_fields() {
    assert_eq!(
        NewFirma::new("  Acme AS ", " 1234567890 ").unwrap(),
        NewFirma { adi: "Acme AS".to_owned(), vkn: "1234567890".to_owned() }
    );
    assert!(matches!(NewFirma::new("Acme", "  "), Err(ApiError::InvalidInput(_))));
    assert!(matches!(NewFirma::new("", "123"), Err(ApiError::InvalidInput(_))));
}

#[test]
fn firma_keeps_unknown_fields() {
    let firma: Firma = serde_json::from_value(serde_json::json!({
        "id": 7, "adi": "Acme", "vkn": "1", "user_id": 2, "sektor": "imalat"
    }))
    .unwrap();
    assert_eq!(firma.user_id, Some(2));
    assert_eq!(firma.extra.get("sektor"), Some(&serde_json::json!("imalat")));
}

#[tokio::test]
async fn create_firma_posts_name_and_vkn() {
    let (transport, api) = authed();
    transport.push_json(201, serde_json::json!({ "id": 4, "adi": "Acme", "vkn": "99" }));

    let firma = api.create_firma(&NewFirma::new("Acme", "99").unwrap()).await.unwrap();
    assert_eq!(firma.id, 4);

    let request = &transport.requests()[0];
    assert_eq!(request.url, format!("{BASE_URL}/firmalar"));
    assert_eq!(request.body, RequestBody::Json(serde_json::json!({ "adi": "Acme", "vkn": "99" })));
}

#[tokio::test]
async fn delete_firma_targets_id_path() {
    let (transport, api) = authed();
    transport.push_json(200, serde_json::json!({ "msg": "Firma silindi" }));

    let reply = api.delete_firma(12).await.unwrap();
    assert_eq!(reply.msg.as_deref(), Some("Firma silindi"));

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.url, format!("{BASE_URL}/firmalar/12"));
}

#[tokio::test]
async fn list_financial_periods_treats_null_as_empty() {
    let (transport, api) = authed();
    transport.push_raw(200, "null");
    transport.push_json(200, serde_json::json!([{ "id": 1, "donem": "2023" }, { "donem": "2022" }]));

    assert!(api.list_financial_periods(5).await.unwrap().is_empty());
    let periods = api.list_financial_periods(5).await.unwrap();
    assert_eq!(periods.iter().map(|p| p.donem.as_str()).collect::<Vec<_>>(), ["2023", "2022"]);
    assert_eq!(transport.requests()[0].url, format!("{BASE_URL}/firmalar/5/finansal_veriler"));
}

#[tokio::test]
async fn get_financial_analysis_sends_donem_query() {
    let (transport, api) = authed();
    transport.push_json(
        200,
        serde_json::json!({
            "firma_adi": "Acme",
            "analiz_donemi": "2023",
            "hesaplanan_oranlar": { "cari_oran": 1.42, "borc_bolu_ozkaynak_orani": null },
            "risk_skorlari": { "altman_z_skoru": 2.1, "altman_z_skoru_yorum": "Gri Bolge" }
        }),
    );

    let analysis = api.get_financial_analysis(5, "2023").await.unwrap();
    let ratios = analysis.hesaplanan_oranlar.unwrap();
    assert_eq!(ratios.cari_oran, Some(1.42));
    assert_eq!(ratios.borc_bolu_ozkaynak_orani, None);
    assert_eq!(analysis.risk_skorlari.unwrap().altman_z_skoru_yorum.as_deref(), Some("Gri Bolge"));
    assert_eq!(transport.requests()[0].url, format!("{BASE_URL}/firmalar/5/finansal_analiz?donem=2023"));
}

#[tokio::test]
async fn uploads_send_multipart_file_part() {
    let (transport, api) = authed();
    transport.push_json(200, serde_json::json!({ "msg": "Yuklendi" }));
    transport.push_json(200, serde_json::json!({ "msg": "Yuklendi" }));

    api.upload_financials_csv(3, Upload::csv("q4.csv", b"Donem\n2023".to_vec())).await.unwrap();
    api.upload_edefter_xml(3, Upload::edefter_xml("defter.xml", b"<x/>".to_vec())).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}/firmalar/3/upload_financials"));
    assert_eq!(requests[1].url, format!("{BASE_URL}/firmalar/3/upload_edefter_xml"));
    let RequestBody::Multipart(upload) = &requests[1].body else {
        panic!("expected multipart body");
    };
    assert_eq!(upload.field, "file");
    assert_eq!(upload.file_name, "defter.xml");
    assert_eq!(upload.content_type, "application/xml");
    assert_eq!(requests[1].bearer.as_deref(), Some("T"));
}
