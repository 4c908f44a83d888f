//! Integration tests for the notices endpoints

mod common;

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::json;

    use cmei_api::create_app;

    use crate::common::{bearer, insert_user, test_state};

    #[actix_web::test]
    async fn test_aviso_lifecycle() {
        let state = test_state().await;
        let author = insert_user(&state, "lucas", true).await;
        let app = test::init_service(create_app(state.clone())).await;
        let auth = bearer(&state, "lucas");

        // Create
        let req = test::TestRequest::post()
            .uri("/avisos/")
            .insert_header(auth.clone())
            .set_json(json!({
                "title": "Reunião de pais",
                "content": "Sexta-feira às 18h",
                "target_classroom": "Maternal I"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let created: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(created["author_id"], author.id);
        assert!(created["updated_at"].is_null());
        let id = created["id"].as_i64().unwrap();

        // Read without a token
        let req = test::TestRequest::get().uri(&format!("/avisos/{}", id)).to_request();
        let fetched: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["title"], "Reunião de pais");

        // Partial update: explicit null widens to every classroom
        let req = test::TestRequest::put()
            .uri(&format!("/avisos/{}", id))
            .insert_header(auth.clone())
            .set_json(json!({ "title": "Reunião adiada", "target_classroom": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let updated: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(updated["title"], "Reunião adiada");
        assert_eq!(updated["content"], "Sexta-feira às 18h");
        assert!(updated["target_classroom"].is_null());
        assert!(!updated["updated_at"].is_null());

        // Delete, then it is gone
        let req = test::TestRequest::delete()
            .uri(&format!("/avisos/{}", id))
            .insert_header(auth.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::get().uri(&format!("/avisos/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_list_avisos_is_public_and_paginated() {
        let state = test_state().await;
        insert_user(&state, "lucas", true).await;
        let app = test::init_service(create_app(state.clone())).await;
        let auth = bearer(&state, "lucas");

        for n in 1..=3 {
            let req = test::TestRequest::post()
                .uri("/avisos")
                .insert_header(auth.clone())
                .set_json(json!({ "title": format!("Aviso {}", n), "content": "texto" }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 200);
        }

        let req = test::TestRequest::get().uri("/avisos/").to_request();
        let all: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 3);

        let req = test::TestRequest::get().uri("/avisos?skip=1&limit=1").to_request();
        let page: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.len(), 1);

        let req = test::TestRequest::get().uri("/avisos?skip=-1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_create_aviso_requires_token_and_valid_body() {
        let state = test_state().await;
        insert_user(&state, "lucas", true).await;
        let app = test::init_service(create_app(state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/avisos")
            .set_json(json!({ "title": "Sem token", "content": "texto" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 401);

        let req = test::TestRequest::post()
            .uri("/avisos")
            .insert_header(bearer(&state, "lucas"))
            .set_json(json!({ "title": "", "content": "texto" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["title"].is_array());

        let req = test::TestRequest::post()
            .uri("/avisos")
            .insert_header(bearer(&state, "lucas"))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }

    #[actix_web::test]
    async fn test_create_aviso_rejects_inactive_author() {
        let state = test_state().await;
        insert_user(&state, "maria", false).await;
        let app = test::init_service(create_app(state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/avisos")
            .insert_header(bearer(&state, "maria"))
            .set_json(json!({ "title": "Aviso", "content": "texto" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }

    #[actix_web::test]
    async fn test_update_with_empty_body_is_bad_request() {
        let state = test_state().await;
        insert_user(&state, "lucas", true).await;
        let app = test::init_service(create_app(state.clone())).await;
        let auth = bearer(&state, "lucas");

        let req = test::TestRequest::post()
            .uri("/avisos/")
            .insert_header(auth.clone())
            .set_json(json!({ "title": "Aviso", "content": "texto" }))
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/avisos/{}", id))
            .insert_header(auth)
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No fields to update");
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing_aviso() {
        let state = test_state().await;
        let app = test::init_service(create_app(state.clone())).await;
        let auth = bearer(&state, "lucas");

        let req = test::TestRequest::put()
            .uri("/avisos/999")
            .insert_header(auth.clone())
            .set_json(json!({ "title": "Novo" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Aviso not found");

        let req = test::TestRequest::delete()
            .uri("/avisos/999")
            .insert_header(auth)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }
}
