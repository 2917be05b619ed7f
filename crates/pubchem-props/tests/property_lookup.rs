//! End-to-end property lookup tests against a mocked HTTP backend.
//!
//! These exercise the real reqwest transport; the only substitution is the
//! endpoint base, pointed at a local wiremock server.

use assert_json_diff::assert_json_eq;
use pubchem_props::{Cid, CompoundProperty, PubChemClient, PubChemError};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn aspirin_multi_property_body() -> Value {
    json!({
        "PropertyTable": {
            "Properties": [{
                "CID": 2244,
                "InChIKey": "BSYNRYMUTXBXSQ-UHFFFAOYSA-N",
                "MolecularFormula": "C9H8O4",
                "MolecularWeight": 180.159
            }]
        }
    })
}

#[tokio::test]
async fn test_molecular_formula_for_aspirin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/compound/cid/2244/property/MolecularFormula/JSON"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PropertyTable": {
                "Properties": [{"MolecularFormula": "C9H8O4", "CID": 2244}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PubChemClient::new().with_base_url(&server.uri());
    let formula = client.molecular_formula_by_cid(Cid::new(2244)).await.unwrap();
    assert_eq!(formula, "C9H8O4");
}

#[tokio::test]
async fn test_multi_property_lookup_returns_exact_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/compound/cid/2244/property/InChIKey,MolecularFormula,MolecularWeight/JSON",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(aspirin_multi_property_body()))
        .mount(&server)
        .await;

    let client = PubChemClient::new().with_base_url(&server.uri());
    let record = client
        .properties_by_cid(
            Cid::new(2244),
            &[
                CompoundProperty::InChIKey,
                CompoundProperty::MolecularFormula,
                CompoundProperty::MolecularWeight,
            ],
        )
        .await
        .unwrap();

    assert_json_eq!(
        Value::Object(record),
        json!({
            "CID": 2244,
            "InChIKey": "BSYNRYMUTXBXSQ-UHFFFAOYSA-N",
            "MolecularFormula": "C9H8O4",
            "MolecularWeight": 180.159
        })
    );
}

#[tokio::test]
async fn test_identical_lookups_are_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/compound/cid/2244/property/InChIKey,MolecularFormula,MolecularWeight/JSON",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(aspirin_multi_property_body()))
        .expect(2)
        .mount(&server)
        .await;

    let client = PubChemClient::new().with_base_url(&server.uri());
    let properties = [
        CompoundProperty::InChIKey,
        CompoundProperty::MolecularFormula,
        CompoundProperty::MolecularWeight,
    ];

    let first = client
        .properties_by_cid(Cid::new(2244), &properties)
        .await
        .unwrap();
    let second = client
        .properties_by_cid(Cid::new(2244), &properties)
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_not_found_status_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "Fault": {"Code": "PUGREST.NotFound"}
        })))
        .mount(&server)
        .await;

    let client = PubChemClient::new().with_base_url(&server.uri());
    let err = client
        .molecular_formula_by_cid(Cid::new(99999999))
        .await
        .unwrap_err();
    assert!(matches!(err, PubChemError::Http(_)));
}

#[tokio::test]
async fn test_malformed_envelope_surfaces_as_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = PubChemClient::new().with_base_url(&server.uri());
    let err = client
        .molecular_formula_by_cid(Cid::new(2244))
        .await
        .unwrap_err();
    assert!(matches!(err, PubChemError::Json(_)));
}

#[tokio::test]
async fn test_empty_properties_array_surfaces_as_envelope_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"PropertyTable": {"Properties": []}})),
        )
        .mount(&server)
        .await;

    let client = PubChemClient::new().with_base_url(&server.uri());
    let err = client
        .molecular_formula_by_cid(Cid::new(2244))
        .await
        .unwrap_err();
    assert!(matches!(err, PubChemError::Envelope(_)));
}
