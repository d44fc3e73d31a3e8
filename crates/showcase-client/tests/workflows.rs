//! Workflow tests against the recording doubles

use std::sync::Arc;

use serde_json::json;
use showcase::{Credential, DomainError, Operation, ProjectForm, ProjectListing, UploadOutcome};
use showcase_client::adapters::mock::{MockSession, MockTransport, MockUploader};
use showcase_client::ShowcaseApi;

const API_KEY: &str = "letmein";
const HOSTED: &str = "https://cdn.example.com/a.png";
const DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAAB";

fn form(image: &str) -> ProjectForm {
    ProjectForm {
        title: "Pixel Garden".to_string(),
        description: "Generative plants".to_string(),
        image: image.to_string(),
        live_site_url: "https://garden.example.com".to_string(),
        github_url: "https://github.com/example/garden".to_string(),
        category: "Design".to_string(),
    }
}

fn api(
    transport: &MockTransport,
    uploader: &MockUploader,
) -> ShowcaseApi<MockTransport, MockUploader, MockSession> {
    ShowcaseApi::with_ports(
        Arc::new(transport.clone()),
        Arc::new(uploader.clone()),
        Arc::new(MockSession::new(json!({ "token": "session-token" }))),
        API_KEY,
    )
}

// ============================================
// Create
// ============================================

#[tokio::test]
async fn test_create_submits_uploaded_url() {
    let transport = MockTransport::new().with_response(
        Operation::CreateProject,
        json!({ "projectCreate": { "project": { "id": "p1" } } }),
    );
    let uploader = MockUploader::uploading_to("https://cdn.example.com/uploaded.png");
    let api = api(&transport, &uploader);

    let outcome = api
        .create_new_project(&form(DATA_URL), "user-1", "tok")
        .await
        .unwrap();

    assert!(outcome.is_submitted());
    assert_eq!(
        outcome.response,
        Some(json!({ "projectCreate": { "project": { "id": "p1" } } }))
    );
    assert_eq!(outcome.upload.url(), Some("https://cdn.example.com/uploaded.png"));

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 1);
    let input = &requests[0].request.variables["input"];
    assert_eq!(requests[0].request.operation, Operation::CreateProject);
    assert_eq!(input["image"], "https://cdn.example.com/uploaded.png");
    assert_eq!(input["createdBy"], json!({ "link": "user-1" }));
    assert_eq!(input["title"], "Pixel Garden");
    assert_eq!(requests[0].credential, Credential::bearer("tok"));
}

#[tokio::test]
async fn test_create_always_uploads_even_hosted_images() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to("https://cdn.example.com/rehosted.png");
    let api = api(&transport, &uploader);

    api.create_new_project(&form(HOSTED), "user-1", "tok")
        .await
        .unwrap();

    assert_eq!(uploader.recorded_references(), vec![HOSTED.to_string()]);
    let requests = transport.recorded_requests();
    assert_eq!(
        requests[0].request.variables["input"]["image"],
        "https://cdn.example.com/rehosted.png"
    );
}

#[tokio::test]
async fn test_create_without_url_sends_nothing() {
    let transport = MockTransport::new();
    let uploader = MockUploader::answering(UploadOutcome::from_response(&json!({})));
    let api = api(&transport, &uploader);

    let outcome = api
        .create_new_project(&form(DATA_URL), "user-1", "tok")
        .await
        .unwrap();

    assert!(!outcome.is_submitted());
    assert!(outcome.upload.is_failed());
    assert!(transport.recorded_requests().is_empty());
}

#[tokio::test]
async fn test_create_propagates_upload_transport_failure() {
    let transport = MockTransport::new();
    let uploader = MockUploader::failing("connection refused");
    let api = api(&transport, &uploader);

    let err = api
        .create_new_project(&form(DATA_URL), "user-1", "tok")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Transport(ref msg) if msg == "connection refused"));
    assert!(transport.recorded_requests().is_empty());
}

// ============================================
// Edit
// ============================================

#[tokio::test]
async fn test_edit_hosted_image_is_sent_unchanged() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to("https://cdn.example.com/never.png");
    let api = api(&transport, &uploader);

    let outcome = api.edit_project(&form(HOSTED), "p1", "tok").await.unwrap();

    assert_eq!(outcome.upload, UploadOutcome::Skipped);
    assert!(uploader.recorded_references().is_empty());

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request.operation, Operation::UpdateProject);
    assert_eq!(requests[0].request.variables["id"], "p1");
    assert_eq!(requests[0].request.variables["input"]["image"], HOSTED);
    assert_eq!(requests[0].credential, Credential::bearer("tok"));
}

#[tokio::test]
async fn test_edit_data_url_is_replaced_by_upload() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to("https://cdn.example.com/new.png");
    let api = api(&transport, &uploader);

    let outcome = api.edit_project(&form(DATA_URL), "p1", "tok").await.unwrap();

    assert_eq!(outcome.upload.url(), Some("https://cdn.example.com/new.png"));
    assert_eq!(uploader.recorded_references(), vec![DATA_URL.to_string()]);
    assert_eq!(
        transport.recorded_requests()[0].request.variables["input"]["image"],
        "https://cdn.example.com/new.png"
    );
}

#[tokio::test]
async fn test_edit_video_data_url_is_uploaded() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to("https://cdn.example.com/clip.mp4");
    let api = api(&transport, &uploader);

    api.edit_project(&form("data:video/mp4;base64,AAAAIGZ0eXBpc29t"), "p1", "tok")
        .await
        .unwrap();

    assert_eq!(uploader.recorded_references().len(), 1);
    assert_eq!(
        transport.recorded_requests()[0].request.variables["input"]["image"],
        "https://cdn.example.com/clip.mp4"
    );
}

#[tokio::test]
async fn test_edit_falls_back_to_original_image_when_upload_has_no_url() {
    let transport = MockTransport::new();
    let uploader = MockUploader::answering(UploadOutcome::Failed {
        reason: "Invalid image file".to_string(),
    });
    let api = api(&transport, &uploader);

    let outcome = api.edit_project(&form(DATA_URL), "p1", "tok").await.unwrap();

    assert!(outcome.is_submitted());
    assert!(outcome.upload.is_failed());
    assert_eq!(
        transport.recorded_requests()[0].request.variables["input"]["image"],
        DATA_URL
    );
}

// ============================================
// Delete & listings
// ============================================

#[tokio::test]
async fn test_delete_uses_bearer_token() {
    let transport = MockTransport::new()
        .with_response(Operation::DeleteProject, json!({ "projectDelete": { "deletedId": "p1" } }));
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    let response = api.delete_project("p1", "tok").await.unwrap();

    assert_eq!(response["projectDelete"]["deletedId"], "p1");
    let requests = transport.recorded_requests();
    assert_eq!(requests[0].request.variables, json!({ "id": "p1" }));
    assert_eq!(requests[0].credential, Credential::bearer("tok"));
}

#[tokio::test]
async fn test_fetch_all_projects_without_category() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    api.fetch_all_projects(None, None).await.unwrap();

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].request.operation, Operation::AllProjects);
    assert_eq!(requests[0].request.variables, json!({ "first": 4 }));
    assert_eq!(requests[0].credential, Credential::api_key(API_KEY));
}

#[tokio::test]
async fn test_fetch_all_projects_with_category_and_cursor() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    api.fetch_all_projects(Some("design"), Some("cursor123"))
        .await
        .unwrap();

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].request.operation, Operation::ProjectsByCategory);
    assert_eq!(
        requests[0].request.variables,
        json!({ "category": "design", "endCursor": "cursor123" })
    );
    assert_eq!(requests[0].credential, Credential::api_key(API_KEY));
}

#[tokio::test]
async fn test_list_projects_custom_page_size() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    api.list_projects(ProjectListing::Unfiltered { page_size: 12 })
        .await
        .unwrap();

    assert_eq!(
        transport.recorded_requests()[0].request.variables,
        json!({ "first": 12 })
    );
}

// ============================================
// Credentials across calls
// ============================================

#[tokio::test]
async fn test_write_after_read_carries_its_own_token() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to("https://cdn.example.com/u.png");
    let api = api(&transport, &uploader);

    api.get_project_details("p1").await.unwrap();
    api.create_new_project(&form(DATA_URL), "user-1", "tok-a")
        .await
        .unwrap();
    api.get_user("ada@example.com").await.unwrap();
    api.delete_project("p1", "tok-b").await.unwrap();

    let credentials: Vec<Credential> = transport
        .recorded_requests()
        .into_iter()
        .map(|r| r.credential)
        .collect();
    assert_eq!(
        credentials,
        vec![
            Credential::api_key(API_KEY),
            Credential::bearer("tok-a"),
            Credential::api_key(API_KEY),
            Credential::bearer("tok-b"),
        ]
    );
}

#[tokio::test]
async fn test_concurrent_read_and_write_do_not_share_headers() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    let (read, write) = tokio::join!(
        api.fetch_all_projects(None, None),
        api.delete_project("p1", "tok")
    );
    read.unwrap();
    write.unwrap();

    for recorded in transport.recorded_requests() {
        let expected = match recorded.request.operation {
            Operation::DeleteProject => Credential::bearer("tok"),
            _ => Credential::api_key(API_KEY),
        };
        assert_eq!(recorded.credential, expected);
    }
}

// ============================================
// Pass-through operations
// ============================================

#[tokio::test]
async fn test_create_user_payload() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    api.create_user("Ada", "ada@example.com", "https://avatars.example.com/ada.png")
        .await
        .unwrap();

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].request.operation, Operation::CreateUser);
    assert_eq!(
        requests[0].request.variables,
        json!({
            "input": {
                "name": "Ada",
                "email": "ada@example.com",
                "avatarUrl": "https://avatars.example.com/ada.png"
            }
        })
    );
    assert_eq!(requests[0].credential, Credential::api_key(API_KEY));
}

#[tokio::test]
async fn test_user_projects_omits_missing_last() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    api.get_user_projects("user-1", None).await.unwrap();
    api.get_user_projects("user-1", Some(2)).await.unwrap();

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].request.variables, json!({ "id": "user-1" }));
    assert_eq!(
        requests[1].request.variables,
        json!({ "id": "user-1", "last": 2 })
    );
}

#[tokio::test]
async fn test_transport_failure_is_propagated() {
    let transport = MockTransport::new().failing("connection reset");
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    let err = api.get_project_details("p1").await.unwrap_err();
    assert_eq!(err.to_string(), "Transport error: connection reset");
    assert_eq!(transport.recorded_requests().len(), 1);
}

#[tokio::test]
async fn test_fetch_token_returns_payload() {
    let transport = MockTransport::new();
    let uploader = MockUploader::uploading_to(HOSTED);
    let api = api(&transport, &uploader);

    assert_eq!(
        api.fetch_token().await.unwrap(),
        json!({ "token": "session-token" })
    );
}
