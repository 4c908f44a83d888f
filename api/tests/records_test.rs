//! Integration tests for children, daily records and the calendar

mod common;

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::{json, Value};

    use cmei_api::create_app;

    use crate::common::{bearer, insert_user, test_state};

    #[actix_web::test]
    async fn test_children_and_parent_links() {
        let state = test_state().await;
        let parent = insert_user(&state, "lucas", true).await;
        let app = test::init_service(create_app(state.clone())).await;
        let auth = bearer(&state, "lucas");

        let req = test::TestRequest::post()
            .uri("/children")
            .insert_header(auth.clone())
            .set_json(json!({
                "name": "Ana",
                "birth_date": "2021-08-15T00:00:00Z",
                "classroom": "Maternal I"
            }))
            .to_request();
        let child: Value = test::call_and_read_body_json(&app, req).await;
        let child_id = child["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/children/{}", child_id))
            .insert_header(auth.clone())
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["name"], "Ana");

        // Linking twice keeps a single link
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri(&format!("/children/{}/parents", child_id))
                .insert_header(auth.clone())
                .set_json(json!({ "parent_id": parent.id }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 200);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}/children", parent.id))
            .insert_header(auth.clone())
            .to_request();
        let children: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["id"], child_id);

        let req = test::TestRequest::post()
            .uri(&format!("/children/{}/parents", child_id))
            .insert_header(auth.clone())
            .set_json(json!({ "parent_id": 999 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::get()
            .uri("/children/999")
            .insert_header(auth)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }

    #[actix_web::test]
    async fn test_children_require_token() {
        let state = test_state().await;
        let app = test::init_service(create_app(state)).await;

        let req = test::TestRequest::get().uri("/children").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 401);
    }

    macro_rules! create_child {
        ($app:expr, $auth:expr, $name:expr) => {{
            let req = test::TestRequest::post()
                .uri("/children")
                .insert_header($auth)
                .set_json(json!({
                    "name": $name,
                    "birth_date": "2021-08-15T00:00:00Z",
                    "classroom": "Maternal I"
                }))
                .to_request();
            let child: Value = test::call_and_read_body_json(&$app, req).await;
            child["id"].as_i64().unwrap()
        }};
    }

    #[actix_web::test]
    async fn test_rotina_record_and_filter_by_child() {
        let state = test_state().await;
        let app = test::init_service(create_app(state.clone())).await;
        let auth = bearer(&state, "lucas");

        let ana = create_child!(app, auth.clone(), "Ana");
        let bia = create_child!(app, auth.clone(), "Bia");

        for child_id in [ana, ana, bia] {
            let req = test::TestRequest::post()
                .uri("/rotina/")
                .insert_header(auth.clone())
                .set_json(json!({
                    "child_id": child_id,
                    "alimentacao": "Comeu bem",
                    "sono": "Dormiu 2h",
                    "atividades": "Pintura"
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/rotina?child_id={}", ana))
            .insert_header(auth.clone())
            .to_request();
        let rotinas: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(rotinas.len(), 2);
        assert!(rotinas.iter().all(|r| r["child_id"] == ana));

        let req = test::TestRequest::get()
            .uri("/rotina?limit=2")
            .insert_header(auth.clone())
            .to_request();
        let page: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.len(), 2);

        // Unknown child
        let req = test::TestRequest::post()
            .uri("/rotina")
            .insert_header(auth)
            .set_json(json!({
                "child_id": 999,
                "alimentacao": "-",
                "sono": "-",
                "atividades": "-"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }

    #[actix_web::test]
    async fn test_saude_rejects_implausible_temperature() {
        let state = test_state().await;
        let app = test::init_service(create_app(state.clone())).await;
        let auth = bearer(&state, "lucas");
        let ana = create_child!(app, auth.clone(), "Ana");

        let req = test::TestRequest::post()
            .uri("/saude")
            .insert_header(auth.clone())
            .set_json(json!({ "child_id": ana, "temperatura": 37.8, "sintomas": "Febre" }))
            .to_request();
        let record: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record["temperatura"], 37.8);
        assert!(record["medicacao"].is_null());

        let req = test::TestRequest::post()
            .uri("/saude")
            .insert_header(auth.clone())
            .set_json(json!({ "child_id": ana, "temperatura": 51.0 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        let req = test::TestRequest::get()
            .uri("/saude")
            .insert_header(auth)
            .to_request();
        let records: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(records.len(), 1);
    }

    #[actix_web::test]
    async fn test_calendario_window() {
        let state = test_state().await;
        let app = test::init_service(create_app(state.clone())).await;
        let auth = bearer(&state, "lucas");

        for (title, start) in [
            ("Festa junina", "2025-06-20T15:00:00Z"),
            ("Feriado", "2025-04-21T00:00:00Z"),
            ("Reunião", "2025-08-01T18:00:00Z"),
        ] {
            let req = test::TestRequest::post()
                .uri("/calendario")
                .insert_header(auth.clone())
                .set_json(json!({ "title": title, "start_date": start, "all_day": true }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 200);
        }

        let req = test::TestRequest::get()
            .uri("/calendario?from=2025-04-01T00:00:00Z&to=2025-06-30T00:00:00Z")
            .insert_header(auth.clone())
            .to_request();
        let eventos: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<&str> = eventos.iter().filter_map(|e| e["title"].as_str()).collect();
        assert_eq!(titles, vec!["Feriado", "Festa junina"]);

        let req = test::TestRequest::get()
            .uri("/calendario?from=2025-07-01T00:00:00Z&to=2025-01-01T00:00:00Z")
            .insert_header(auth.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        let req = test::TestRequest::post()
            .uri("/calendario")
            .insert_header(auth)
            .set_json(json!({
                "title": "Ao contrário",
                "start_date": "2025-05-02T00:00:00Z",
                "end_date": "2025-05-01T00:00:00Z"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }
}
