use keysweep::mcp::{KeysweepMcpServer, types::ExtractKeysParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture) -> ExtractKeysParams {
    ExtractKeysParams {
        project_root_path: fixture.root(),
        project_type: None,
        limit: None,
        offset: None,
    }
}

// ============================================================================
// extract_keys tests
// ============================================================================

#[tokio::test]
async fn test_extract_keys_basic() {
    let fixture = McpTestFixture::with_sources(&[
        ("src/home.tsx", "<h1>{t('home.title')}</h1>"),
        (
            "src/about.ts",
            "i18next.t(\"about.title\", { count: 2 }); t('home.title')",
        ),
    ])
    .unwrap();
    let server = KeysweepMcpServer::new();

    let result = server
        .extract_keys(Parameters(params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["projectType"], "i18next/i18next");
    assert_eq!(json_result["totalKeyCount"], 2);
    assert_eq!(json_result["scannedFileCount"], 2);
    assert_eq!(json_result["keys"], json!(["about.title", "home.title"]));
    assert_eq!(json_result["skipped"], json!([]));
    assert_eq!(json_result["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_extract_keys_pagination() {
    let fixture = McpTestFixture::with_sources(&[(
        "app.ts",
        "t('k1'); t('k2'); t('k3'); t('k4'); t('k5')",
    )])
    .unwrap();
    let server = KeysweepMcpServer::new();

    let first = extract_tool_result_json(
        &server
            .extract_keys(Parameters(ExtractKeysParams {
                limit: Some(2),
                ..params(&fixture)
            }))
            .await
            .unwrap(),
    );
    assert_eq!(first["keys"], json!(["k1", "k2"]));
    assert_eq!(first["totalKeyCount"], 5);
    assert_eq!(first["pagination"]["hasMore"], true);

    let last = extract_tool_result_json(
        &server
            .extract_keys(Parameters(ExtractKeysParams {
                limit: Some(2),
                offset: Some(4),
                ..params(&fixture)
            }))
            .await
            .unwrap(),
    );
    assert_eq!(last["keys"], json!(["k5"]));
    assert_eq!(last["pagination"]["offset"], 4);
    assert_eq!(last["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_extract_keys_reports_skipped_files() {
    let fixture = McpTestFixture::with_sources(&[("good.ts", "t('good.key')")]).unwrap();
    fixture.write_file("bad.ts", [0xffu8, 0xfe]).unwrap();
    let server = KeysweepMcpServer::new();

    let json_result = extract_tool_result_json(
        &server
            .extract_keys(Parameters(params(&fixture)))
            .await
            .unwrap(),
    );

    assert_eq!(json_result["keys"], json!(["good.key"]));
    assert_eq!(json_result["scannedFileCount"], 2);
    let skipped = json_result["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0]["path"].as_str().unwrap().ends_with("bad.ts"));
}

#[tokio::test]
async fn test_extract_keys_uses_project_config() {
    let fixture = McpTestFixture::with_sources(&[("app.ts", "i18n.t('member'); t('plain')")])
        .unwrap();
    fixture
        .write_config(&json!({ "callNames": ["i18n.t"] }))
        .unwrap();
    let server = KeysweepMcpServer::new();

    let json_result = extract_tool_result_json(
        &server
            .extract_keys(Parameters(params(&fixture)))
            .await
            .unwrap(),
    );

    assert_eq!(json_result["keys"], json!(["member"]));
    assert!(fixture.root_path().join(".keysweeprc.json").exists());
}

#[tokio::test]
async fn test_extract_keys_unknown_project_type() {
    let fixture = McpTestFixture::new().unwrap();
    let server = KeysweepMcpServer::new();

    let result = server
        .extract_keys(Parameters(ExtractKeysParams {
            project_type: Some("gettext/po".to_string()),
            ..params(&fixture)
        }))
        .await;

    let err = result.unwrap_err();
    assert!(err.message.contains("gettext/po"));
}

// ============================================================================
// list_project_types tests
// ============================================================================

#[tokio::test]
async fn test_list_project_types() {
    let server = KeysweepMcpServer::new();

    let json_result = extract_tool_result_json(&server.list_project_types().await.unwrap());

    assert_eq!(json_result["projectTypes"], json!(["i18next/i18next"]));
}
