use ferrous_backend_domain::{
    BackendMethod, BackendRequest, BackendResponse, DomainError, ListParameters,
    LookupParameters, RecordType, ResultRecord, ResultValue,
};
use serde_json::json;

#[test]
fn test_method_parse_is_case_insensitive() {
    assert_eq!(BackendMethod::parse("initialize"), BackendMethod::Initialize);
    assert_eq!(BackendMethod::parse("LIST"), BackendMethod::List);
    assert_eq!(BackendMethod::parse("Lookup"), BackendMethod::Lookup);
}

#[test]
fn test_method_parse_unknown_keeps_name() {
    let method = BackendMethod::parse("getAllDomains");
    assert_eq!(
        method,
        BackendMethod::Unsupported("getAllDomains".to_string())
    );
}

#[test]
fn test_request_from_slice() {
    let payload = br#"{"method":"lookup","parameters":{"qtype":"A","qname":"www.example.com","zone-id":-1,"real-remote":"192.0.2.10/32"}}"#;
    let request = BackendRequest::from_slice(payload).unwrap();

    assert_eq!(request.method(), BackendMethod::Lookup);
    let params: LookupParameters = request.parameters().unwrap();
    assert_eq!(params.qtype, "A");
    assert_eq!(params.qname, "www.example.com");
    assert_eq!(params.zone_id, Some(-1));
    assert_eq!(params.real_remote.as_deref(), Some("192.0.2.10/32"));
    assert!(params.remote.is_none());
}

#[test]
fn test_request_without_parameters() {
    let request = BackendRequest::from_slice(br#"{"method":"initialize"}"#).unwrap();
    assert_eq!(request.method(), BackendMethod::Initialize);
    assert!(request.parameters.is_null());
}

#[test]
fn test_request_invalid_json() {
    let result = BackendRequest::from_slice(b"not json");
    assert!(matches!(result, Err(DomainError::InvalidRequest(_))));
}

#[test]
fn test_missing_parameters_are_reported() {
    let request = BackendRequest::new("list", json!({"domain_id": 3}));
    let result: Result<ListParameters, _> = request.parameters();
    match result {
        Err(DomainError::InvalidParameters { method, .. }) => assert_eq!(method, "list"),
        other => panic!("expected invalid parameters, got {:?}", other),
    }
}

#[test]
fn test_lookup_soa_detection() {
    let params = LookupParameters {
        qtype: "soa".to_string(),
        qname: "example.com".to_string(),
        remote: None,
        local: None,
        real_remote: None,
        zone_id: None,
    };
    assert!(params.is_soa());
}

#[test]
fn test_response_serializes_flag() {
    let response = BackendResponse::failure("Zone [example.com] Not Found");
    let value: serde_json::Value = serde_json::from_str(&response.to_json()).unwrap();
    assert_eq!(
        value,
        json!({"result": false, "log": ["Zone [example.com] Not Found"]})
    );
}

#[test]
fn test_response_serializes_records() {
    let response = BackendResponse {
        result: ResultValue::Records(vec![ResultRecord {
            qtype: RecordType::A,
            qname: "www.example.com".to_string(),
            ttl: 300,
            content: "192.0.2.1".to_string(),
            auth: true,
        }]),
        log: vec![],
    };

    let value: serde_json::Value = serde_json::from_str(&response.to_json()).unwrap();
    assert_eq!(
        value,
        json!({
            "result": [{
                "qtype": "A",
                "qname": "www.example.com",
                "ttl": 300,
                "content": "192.0.2.1",
                "auth": true
            }],
            "log": []
        })
    );
}

#[test]
fn test_response_round_trips_true_flag() {
    let parsed: BackendResponse = serde_json::from_str(r#"{"result":true,"log":["ok"]}"#).unwrap();
    assert!(parsed.result.is_true());
    assert!(parsed.result.records().is_empty());
}
