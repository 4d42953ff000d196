use axum::http::StatusCode;
use serde_json::{Value, json};
use trv_db::QuestionStore;

use crate::common::{self, assert_error_envelope};

#[tokio::test]
async fn test_get_questions_first_page() {
    let state = common::test_state();
    common::seed_many(&state.store, 1, 12).await;
    let client = common::test_client(state);

    let response = client.get("/questions").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["total_questions"], 12);
    assert_eq!(json["current_category"], "ALL");
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(json["categories"]["6"], "Sports");
}

#[tokio::test]
async fn test_get_questions_second_page_holds_the_remainder() {
    let state = common::test_state();
    let ids = common::seed_many(&state.store, 1, 12).await;
    let client = common::test_client(state);

    let response = client.get("/questions?page=2").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    let page: Vec<i64> = json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    // Ascending id order carries across pages; the total stays unpaginated
    assert_eq!(page, ids[10..].to_vec());
    assert_eq!(json["total_questions"], 12);
}

#[tokio::test]
async fn test_get_questions_page_past_the_end_is_404() {
    let state = common::test_state();
    common::seed_many(&state.store, 1, 3).await;
    let client = common::test_client(state);

    let response = client.get("/questions?page=1000").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_error_envelope(&response, 404, "Resource not found");
}

#[tokio::test]
async fn test_get_questions_page_zero_is_404() {
    let state = common::test_state();
    common::seed_many(&state.store, 1, 3).await;
    let client = common::test_client(state);

    let response = client.get("/questions?page=0").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_questions_empty_store_is_404() {
    let client = common::test_client(common::test_state());

    let response = client.get("/questions").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_question() {
    let state = common::test_state();
    let store = state.store.clone();
    let client = common::test_client(state);

    let response = client
        .post_json(
            "/questions",
            &json!({
                "question": "In which year did the Berlin Wall fall?",
                "answer": "1989",
                "category": 4,
                "difficulty": 2,
            }),
        )
        .await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    assert_eq!(json["success"], true);
    let new_id = json["id_question"].as_i64().unwrap();

    let all = store.list_all().await.unwrap();
    assert!(all.iter().any(|q| q.id == new_id && q.answer == "1989"));
}

#[tokio::test]
async fn test_create_question_unknown_category_is_422() {
    let client = common::test_client(common::test_state());

    let response = client
        .post_json(
            "/questions",
            &json!({
                "question": "What is the best vampire slayer of all time?",
                "answer": "Buffy, of course",
                "category": 1000,
                "difficulty": 1,
            }),
        )
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_error_envelope(&response, 422, "unprocessable");
}

#[tokio::test]
async fn test_create_question_difficulty_out_of_range_is_422() {
    let client = common::test_client(common::test_state());

    for difficulty in [0, 6, -1] {
        let response = client
            .post_json(
                "/questions",
                &json!({
                    "question": "How deep is the Mariana Trench?",
                    "answer": "About 11 km",
                    "category": 3,
                    "difficulty": difficulty,
                }),
            )
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_create_question_blank_text_is_422() {
    let client = common::test_client(common::test_state());

    let response = client
        .post_json(
            "/questions",
            &json!({
                "question": "   ",
                "answer": "42",
                "category": 1,
                "difficulty": 1,
            }),
        )
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_question_missing_fields_is_422() {
    let client = common::test_client(common::test_state());

    // No searchTerm and no question fields: neither a search nor a create
    let response = client.post_json("/questions", &json!({})).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_question_removes_visibility() {
    let state = common::test_state();
    let store = state.store.clone();
    let keep = common::seed_question(&store, "Kept question?", "Yes", 1, 1).await;
    let doomed = common::seed_question(&store, "Doomed question?", "No", 1, 1).await;
    let client = common::test_client(state);

    let response = client.delete(&format!("/questions/{doomed}")).await;
    response.assert_status(StatusCode::OK);
    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], doomed);

    // Gone from listings and from the empty search
    let listed: Value = client.get("/questions").await.json();
    let ids: Vec<i64> = listed["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![keep]);

    let searched: Value = client
        .post_json("/questions", &json!({"searchTerm": ""}))
        .await
        .json();
    assert_eq!(searched["total_questions"], 1);
}

#[tokio::test]
async fn test_delete_question_twice_is_422() {
    let state = common::test_state();
    let id = common::seed_question(&state.store, "Once only?", "Yes", 1, 1).await;
    let client = common::test_client(state);

    client
        .delete(&format!("/questions/{id}"))
        .await
        .assert_status(StatusCode::OK);

    let response = client.delete(&format!("/questions/{id}")).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_error_envelope(&response, 422, "unprocessable");
}

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let client = common::test_client(common::test_state());

    let response = client.get("/no/such/route").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_error_envelope(&response, 404, "Resource not found");
}

#[tokio::test]
async fn test_health() {
    let client = common::test_client(common::test_state());
    client.get("/health").await.assert_status(StatusCode::OK);
}
