//! Request-shape tests: every operation runs against an in-memory transport
//! and the exact outgoing URL, method, headers, and body are asserted.

use aas_conduit_client::{
    BasicDiscoveryClient, ClientError, ConceptDescriptionRepositoryClient, Connection,
    SerializationClient, ShellRepositoryClient, SubmodelRepositoryClient,
};
use aas_conduit_core::encoding;
use aas_conduit_core::{
    AssetIdentification, BasicDiscoveryCriteria, ConceptDescriptionCriteria, Content, Level,
    PagingInfo, QueryModifier, Reference, SerializationCriteria,
};
use aas_conduit_http::{
    AuthenticatingTransport, HttpRequest, HttpResponse, HttpTransport, ProtocolVersion,
    RedirectPolicy, StaticBearer, TlsConfig, TransportError, MULTIPART_BOUNDARY,
};
use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE,
};
use reqwest::{Method, StatusCode};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

const BASE: &str = "http://aas.example/api/v3";

#[derive(Clone)]
struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
    tls: TlsConfig,
}

struct FakeState {
    responses: VecDeque<HttpResponse>,
    seen: Vec<HttpRequest>,
}

impl FakeTransport {
    fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                responses: VecDeque::new(),
                seen: Vec::new(),
            })),
            tls: TlsConfig::default(),
        }
    }

    fn push_response(&self, status: StatusCode, headers: HeaderMap, body: &[u8]) {
        self.state.lock().unwrap().responses.push_back(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        });
    }

    fn push_json(&self, body: serde_json::Value) {
        self.push_response(StatusCode::OK, HeaderMap::new(), body.to_string().as_bytes());
    }

    fn last_request(&self) -> HttpRequest {
        self.state.lock().unwrap().seen.last().cloned().unwrap()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.seen.push(request.clone());
        Ok(state.responses.pop_front().unwrap_or_else(|| HttpResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: b"{}".to_vec(),
        }))
    }

    fn timeout(&self) -> Option<Duration> {
        Some(Duration::from_secs(30))
    }

    fn redirect_policy(&self) -> RedirectPolicy {
        RedirectPolicy::default()
    }

    fn proxy(&self) -> Option<&Url> {
        None
    }

    fn tls(&self) -> &TlsConfig {
        &self.tls
    }

    fn protocol_version(&self) -> ProtocolVersion {
        ProtocolVersion::Auto
    }

    fn cookie_store(&self) -> bool {
        false
    }
}

fn connection(transport: &FakeTransport) -> Connection {
    Connection::with_transport(BASE, Arc::new(transport.clone())).unwrap()
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query()?.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| v.to_string())
    })
}

#[tokio::test]
async fn shell_listing_renders_level_and_limit() {
    let transport = FakeTransport::new();
    let shells = ShellRepositoryClient::new(connection(&transport));

    shells
        .get_all(
            &QueryModifier::with_level(Level::Deep),
            &PagingInfo::with_limit(50),
        )
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url.as_str(), format!("{BASE}/shells?level=deep&limit=50"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn shell_metadata_view_has_no_query() {
    let transport = FakeTransport::new();
    let shells = ShellRepositoryClient::new(connection(&transport));

    shells
        .get("urn:aas:1", Content::Metadata, &QueryModifier::DEFAULT)
        .await
        .unwrap();

    let request = transport.last_request();
    let encoded = encoding::base64_url("urn:aas:1");
    assert_eq!(request.url.as_str(), format!("{BASE}/shells/{encoded}/$metadata"));
    assert!(request.url.query().is_none());
}

#[tokio::test]
async fn shell_create_replace_delete() {
    let transport = FakeTransport::new();
    let shells = ShellRepositoryClient::new(connection(&transport));
    let shell = json!({"id": "urn:aas:1", "idShort": "Motor"});

    shells.post(&shell).await.unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url.as_str(), format!("{BASE}/shells"));
    assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
    assert_eq!(body, shell);

    shells.put("urn:aas:1", &shell).await.unwrap();
    let request = transport.last_request();
    let encoded = encoding::base64_url("urn:aas:1");
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.url.as_str(), format!("{BASE}/shells/{encoded}"));

    shells.delete("urn:aas:1").await.unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.url.as_str(), format!("{BASE}/shells/{encoded}"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn submodel_value_views() {
    let transport = FakeTransport::new();
    let submodels = SubmodelRepositoryClient::new(connection(&transport));
    let encoded = encoding::base64_url("urn:sm:1");

    submodels.get_value("urn:sm:1").await.unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url.as_str(), format!("{BASE}/submodels/{encoded}/$value"));

    submodels
        .patch_value("urn:sm:1", &json!({"Temperature": 21.5}))
        .await
        .unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.url.as_str(), format!("{BASE}/submodels/{encoded}/$value"));
    assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
}

#[tokio::test]
async fn element_value_path_keeps_brackets_and_encodes_spaces() {
    let transport = FakeTransport::new();
    let submodels = SubmodelRepositoryClient::new(connection(&transport));
    let encoded = encoding::base64_url("urn:sm:1");

    submodels
        .patch_element_value("urn:sm:1", "Sensors[2].My Value", &json!(42))
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(
        request.url.as_str(),
        format!("{BASE}/submodels/{encoded}/submodel-elements/Sensors[2].My%20Value/$value")
    );
    assert_eq!(request.body.as_deref(), Some("42".as_bytes()));
}

#[tokio::test]
async fn attachment_download_takes_name_from_disposition() {
    let transport = FakeTransport::new();
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; fileName=\"manual.pdf\""),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    transport.push_response(StatusCode::OK, headers, b"%PDF-1.4");

    let submodels = SubmodelRepositoryClient::new(connection(&transport));
    let file = submodels
        .get_attachment("urn:sm:1", "Docs.Manual")
        .await
        .unwrap();

    let encoded = encoding::base64_url("urn:sm:1");
    let request = transport.last_request();
    assert_eq!(
        request.url.as_str(),
        format!("{BASE}/submodels/{encoded}/submodel-elements/Docs.Manual/attachment")
    );
    assert_eq!(file.file_name, "manual.pdf");
    assert_eq!(file.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(file.content, b"%PDF-1.4");
}

#[tokio::test]
async fn attachment_upload_is_multipart() {
    let transport = FakeTransport::new();
    let submodels = SubmodelRepositoryClient::new(connection(&transport));

    submodels
        .put_attachment(
            "urn:sm:1",
            "Docs.Manual",
            "manual.pdf",
            "application/pdf",
            b"%PDF-1.4",
        )
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::PUT);
    let content_type = request.headers.get(CONTENT_TYPE).unwrap().to_str().unwrap();
    assert_eq!(content_type, format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"));
    let body = String::from_utf8(request.body.unwrap()).unwrap();
    assert!(body.contains("manual.pdf"));
    assert!(body.contains("%PDF-1.4"));
}

#[tokio::test]
async fn paging_cursor_round_trips_through_next_request() {
    let transport = FakeTransport::new();
    transport.push_json(json!({
        "paging_metadata": {"cursor": "abc==123"},
        "result": [{"id": "urn:aas:1"}]
    }));

    let shells = ShellRepositoryClient::new(connection(&transport));
    let page = shells
        .get_all(&QueryModifier::DEFAULT, &PagingInfo::with_limit(1))
        .await
        .unwrap();
    let cursor = page.next_cursor().unwrap().to_string();
    assert_eq!(cursor, "abc==123");

    shells
        .get_all(&QueryModifier::DEFAULT, &PagingInfo::of(1, cursor))
        .await
        .unwrap();

    let request = transport.last_request();
    let encoded = query_value(&request.url, "cursor").unwrap();
    assert_eq!(encoded, "YWJjPT0xMjM");
    assert_eq!(encoding::base64_url_decode(&encoded).unwrap(), "abc==123");
}

#[tokio::test]
async fn discovery_lookup_sends_asset_ids_as_one_blob() {
    let transport = FakeTransport::new();
    transport.push_json(json!({"result": ["urn:aas:1"]}));

    let discovery = BasicDiscoveryClient::new(connection(&transport));
    let criteria = BasicDiscoveryCriteria::new(vec![
        AssetIdentification::global("urn:asset:1"),
        AssetIdentification::specific("serialNumber", "SN-0017"),
    ]);
    let page = discovery
        .find_shell_ids(&criteria, &PagingInfo::ALL)
        .await
        .unwrap();
    assert_eq!(page.result, ["urn:aas:1"]);

    let request = transport.last_request();
    assert_eq!(request.url.path(), "/api/v3/lookup/shells");
    let encoded = query_value(&request.url, "assetIds").unwrap();
    let decoded = encoding::base64_url_decode(&encoded).unwrap();
    let ids: Vec<serde_json::Value> = serde_json::from_str(&decoded).unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0]["name"], "globalAssetId");
}

#[tokio::test]
async fn discovery_asset_links_parse_into_identifications() {
    let transport = FakeTransport::new();
    transport.push_json(json!([
        {"name": "globalAssetId", "value": "urn:asset:1"},
        {"name": "serialNumber", "value": "SN-0017"}
    ]));

    let discovery = BasicDiscoveryClient::new(connection(&transport));
    let links = discovery.get_asset_links("urn:aas:1").await.unwrap();

    assert_eq!(
        links,
        [
            AssetIdentification::global("urn:asset:1"),
            AssetIdentification::specific("serialNumber", "SN-0017"),
        ]
    );
    let request = transport.last_request();
    let encoded = encoding::base64_url("urn:aas:1");
    assert_eq!(request.url.as_str(), format!("{BASE}/lookup/shells/{encoded}"));
}

#[tokio::test]
async fn concept_description_filters_render_in_order() {
    let transport = FakeTransport::new();
    let concept_descriptions = ConceptDescriptionRepositoryClient::new(connection(&transport));

    let criteria = ConceptDescriptionCriteria::new()
        .with_is_case_of(Reference::external("https://example.org/case"))
        .with_id_short("Nameplate")
        .with_data_specification(Reference::external("https://example.org/ds/1"));
    concept_descriptions
        .get_all(&criteria, &QueryModifier::DEFAULT, &PagingInfo::ALL)
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.url.path(), "/api/v3/concept-descriptions");
    let query = request.url.query().unwrap();
    let keys: Vec<&str> = query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap().0)
        .collect();
    assert_eq!(keys, ["isCaseOf", "idShort", "dataSpecificationRef"]);

    let encoded = query_value(&request.url, "isCaseOf").unwrap();
    assert_eq!(
        encoding::base64_standard_decode(&encoded).unwrap(),
        "[ExternalRef](GlobalReference)https://example.org/case"
    );
}

#[tokio::test]
async fn serialization_requests_json_and_returns_bytes() {
    let transport = FakeTransport::new();
    transport.push_response(
        StatusCode::OK,
        HeaderMap::new(),
        b"{\"assetAdministrationShells\": []}",
    );

    let serialization = SerializationClient::new(connection(&transport));
    let criteria =
        SerializationCriteria::new(vec!["urn:aas:1".to_string()], vec!["urn:sm:1".to_string()]);
    let bytes = serialization.generate(&criteria).await.unwrap();
    assert_eq!(bytes, b"{\"assetAdministrationShells\": []}");

    let request = transport.last_request();
    assert_eq!(request.url.path(), "/api/v3/serialization");
    assert_eq!(request.headers.get(ACCEPT).unwrap(), "application/json");

    let aas_ids = query_value(&request.url, "aasIds").unwrap();
    assert_eq!(
        encoding::base64_standard_decode(&aas_ids).unwrap(),
        "urn:aas:1"
    );
    let submodel_ids = query_value(&request.url, "submodelIds").unwrap();
    assert_eq!(
        encoding::base64_standard_decode(&submodel_ids).unwrap(),
        "urn:sm:1"
    );
}

#[tokio::test]
async fn bearer_decorator_applies_to_client_requests() {
    let transport = FakeTransport::new();
    let authenticated = AuthenticatingTransport::new(transport.clone(), StaticBearer::new("tok"));
    let connection = Connection::with_transport(BASE, Arc::new(authenticated)).unwrap();

    let shells = ShellRepositoryClient::new(connection);
    shells
        .get_all(&QueryModifier::DEFAULT, &PagingInfo::ALL)
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
}

#[tokio::test]
async fn api_errors_carry_status_and_body() {
    let transport = FakeTransport::new();
    transport.push_response(
        StatusCode::NOT_FOUND,
        HeaderMap::new(),
        b"no shell with this id",
    );

    let shells = ShellRepositoryClient::new(connection(&transport));
    let error = shells
        .get("urn:aas:missing", Content::Normal, &QueryModifier::DEFAULT)
        .await
        .unwrap_err();

    match error {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "no shell with this id");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
