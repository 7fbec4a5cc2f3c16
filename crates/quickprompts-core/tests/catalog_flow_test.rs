//! Seeding, selection and apply working together

use quickprompts_core::catalog::CatalogStore;
use quickprompts_core::editor::{RowField, handle_message};
use quickprompts_core::selection::{NoProgress, apply_instruction};
use quickprompts_core::{
    CatalogEditor, CompletionClient, EditorDocument, JsonStore, OpenAiBackend, Picker, PromptEntry,
    PromptItem, QpConfig, QpResult, SeedOutcome, SelectionFlow, TextBuffer,
};
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client that talks to the mock server directly, ignoring proxy settings
fn local_client(base_url: impl Into<String>) -> CompletionClient {
    let http_client = reqwest::Client::builder().no_proxy().build().unwrap();
    CompletionClient::new(OpenAiBackend::with_client(base_url, http_client))
}

const SEED: &str = "## Grammar\nFix: fix grammar\n## Style\nPolish: make formal";

/// Always picks the category and prompt with the given labels
struct ByLabel {
    category: &'static str,
    prompt: &'static str,
}

impl Picker for ByLabel {
    fn pick_category(&mut self, categories: &[String]) -> QpResult<Option<usize>> {
        Ok(categories.iter().position(|c| c == self.category))
    }

    fn pick_prompt(
        &mut self,
        _category: Option<&str>,
        items: &[PromptItem],
    ) -> QpResult<Option<usize>> {
        Ok(items.iter().position(|i| i.label == self.prompt))
    }
}

#[test]
fn test_seed_document_scenario() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(JsonStore::new(dir.path().join("state.json")));

    assert_eq!(store.seed_if_empty(SEED).unwrap(), SeedOutcome::Seeded(2));
    assert_eq!(
        store.load().unwrap(),
        vec![
            PromptEntry::new("Fix", "fix grammar", "Grammar"),
            PromptEntry::new("Polish", "make formal", "Style"),
        ]
    );
}

#[tokio::test]
async fn test_seed_select_apply() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(JsonStore::new(dir.path().join("state.json")));
    store.seed_if_empty(SEED).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "messages": [{"role": "system", "content": "make formal"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "Greetings, colleague."}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entry = SelectionFlow::start(store.load().unwrap())
        .unwrap()
        .run(&mut ByLabel {
            category: "Style",
            prompt: "Polish",
        })
        .unwrap()
        .expect("a prompt was chosen");

    let config = QpConfig {
        api_key: Some("sk-test".to_string()),
        base_url: server.uri(),
        ..QpConfig::default()
    };
    let client = local_client(&config.base_url);
    let mut doc = TextBuffer::with_lines("Subject\nhey dude\nBye\n", "2".parse().unwrap()).unwrap();

    apply_instruction(Some(&mut doc), &entry.value, &client, &config, &NoProgress)
        .await
        .unwrap();

    assert_eq!(doc.text(), "Subject\nGreetings, colleague.\nBye\n");
    assert_eq!(doc.selected_text(), Some("Greetings, colleague."));
}

#[test]
fn test_invalid_save_keeps_previous_catalog() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(JsonStore::new(dir.path().join("state.json")));
    store.seed_if_empty(SEED).unwrap();
    let before = store.load().unwrap();

    let mut editor = CatalogEditor::new(before.clone());
    let id = editor.rows()[0].id;
    editor.update(id, RowField::Category, "").unwrap();
    assert!(editor.save_message().is_err());

    assert_eq!(store.load().unwrap(), before);
}

#[test]
fn test_filter_cannot_hide_incomplete_rows_from_save() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(JsonStore::new(dir.path().join("state.json")));
    // Written directly, bypassing the editor
    let before = vec![
        PromptEntry::new("Fix", "fix grammar", "Grammar"),
        PromptEntry::new("Legacy", "seeded without category", ""),
    ];
    store.replace_all(&before).unwrap();

    let mut editor = CatalogEditor::new(store.load().unwrap());
    editor.set_filter("fix");
    assert_eq!(editor.hidden_count(), 1);

    assert!(editor.save_message().is_err());
    assert_eq!(store.load().unwrap(), before);
}

#[test]
fn test_editor_save_round_trip() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(JsonStore::new(dir.path().join("state.json")));
    store.seed_if_empty(SEED).unwrap();

    let mut editor = CatalogEditor::new(store.load().unwrap());
    editor.set_filter("polish");
    let id = editor.add_row();
    editor.update(id, RowField::Name, "Shorten").unwrap();
    editor.update(id, RowField::Template, "make shorter").unwrap();
    editor.update(id, RowField::Category, "Style").unwrap();

    let reply = handle_message(&store, editor.save_message().unwrap());
    assert_eq!(reply, quickprompts_core::EditorReply::Saved { count: 3 });

    let keys: Vec<String> = store.load().unwrap().into_iter().map(|e| e.key).collect();
    assert_eq!(keys, vec!["Fix", "Polish", "Shorten"]);
}
