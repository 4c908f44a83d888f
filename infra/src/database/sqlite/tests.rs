//! Repository tests against an in-memory database

use chrono::{Duration, TimeZone, Utc};

use cmei_core::domain::entities::{
    AvisoChanges, CalendarioFilter, ChildParentLink, NewAviso, NewCalendarioEvento, NewChild,
    NewRotina, NewSaudeRecord, NewUser, UserType,
};
use cmei_core::errors::DomainError;
use cmei_core::repositories::{
    AvisoRepository, CalendarioRepository, ChildRepository, RotinaRepository, SaudeRepository,
    UserRepository,
};
use cmei_shared::{DatabaseConfig, Pagination};

use super::*;
use crate::database::DatabasePool;

async fn pool() -> DatabasePool {
    crate::initialize(&DatabaseConfig::in_memory()).await.unwrap()
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@test.com", username),
        hashed_password: "$2b$12$hash".to_string(),
        full_name: format!("{} da Silva", username),
        user_type: UserType::Parent,
        active: true,
    }
}

fn new_child(name: &str) -> NewChild {
    NewChild {
        name: name.to_string(),
        birth_date: Utc.with_ymd_and_hms(2021, 8, 15, 0, 0, 0).unwrap(),
        classroom: "Maternal I".to_string(),
    }
}

#[tokio::test]
async fn test_user_create_and_find() {
    let pool = pool().await;
    let repo = SqliteUserRepository::new(pool.get_pool().clone());

    let created = repo.create(new_user("ana")).await.unwrap();
    assert_eq!(created.id, 1);

    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id, created);

    let by_name = repo.find_by_username("ana").await.unwrap().unwrap();
    assert_eq!(by_name.user_type, UserType::Parent);
    assert!(by_name.active);

    assert!(repo.find_by_id(99).await.unwrap().is_none());
    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_duplicate_email_rejected() {
    let pool = pool().await;
    let repo = SqliteUserRepository::new(pool.get_pool().clone());

    repo.create(new_user("ana")).await.unwrap();
    let mut duplicate = new_user("ana2");
    duplicate.email = "ana@test.com".to_string();

    assert!(matches!(
        repo.create(duplicate).await,
        Err(DomainError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_child_links() {
    let pool = pool().await;
    let users = SqliteUserRepository::new(pool.get_pool().clone());
    let repo = SqliteChildRepository::new(pool.get_pool().clone());

    let parent = users.create(new_user("ana")).await.unwrap();
    let bia = repo.create(&new_child("Bia")).await.unwrap();
    let caio = repo.create(&new_child("Caio")).await.unwrap();

    assert_eq!(repo.find_by_id(bia.id).await.unwrap(), Some(bia.clone()));
    assert_eq!(repo.list(Pagination::new(1, 10)).await.unwrap(), vec![caio]);

    let link = ChildParentLink {
        parent_id: parent.id,
        child_id: bia.id,
    };
    assert!(repo.link_parent(link).await.unwrap());
    assert!(!repo.link_parent(link).await.unwrap());

    assert_eq!(repo.find_by_parent(parent.id).await.unwrap(), vec![bia]);
    assert!(repo.find_by_parent(parent.id + 1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_aviso_crud() {
    let pool = pool().await;
    let users = SqliteUserRepository::new(pool.get_pool().clone());
    let repo = SqliteAvisoRepository::new(pool.get_pool().clone());
    let author = users.create(new_user("prof")).await.unwrap();

    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
    let new_aviso = NewAviso {
        title: "Reunião".to_string(),
        content: "Sexta às 18h".to_string(),
        target_classroom: Some("Maternal I".to_string()),
    };
    let mut aviso = repo.create(&new_aviso, author.id, created_at).await.unwrap();
    assert_eq!(repo.find_by_id(aviso.id).await.unwrap(), Some(aviso.clone()));

    let updated_at = created_at + Duration::hours(1);
    aviso.apply(
        AvisoChanges {
            content: Some("Sexta às 19h".to_string()),
            target_classroom: Some(None),
            ..Default::default()
        },
        updated_at,
    );
    let stored = repo.update(&aviso).await.unwrap().unwrap();
    assert_eq!(stored.content, "Sexta às 19h");
    assert_eq!(stored.target_classroom, None);
    assert_eq!(stored.updated_at, Some(updated_at));
    assert_eq!(stored.created_at, created_at);
    assert_eq!(stored.author_id, author.id);

    assert_eq!(repo.list(Pagination::default()).await.unwrap().len(), 1);
    assert!(repo.delete(aviso.id).await.unwrap());
    assert!(!repo.delete(aviso.id).await.unwrap());
    assert!(repo.find_by_id(aviso.id).await.unwrap().is_none());

    aviso.id = 1234;
    assert!(repo.update(&aviso).await.unwrap().is_none());
}

#[tokio::test]
async fn test_rotina_and_saude_filter_by_child() {
    let pool = pool().await;
    let children = SqliteChildRepository::new(pool.get_pool().clone());
    let rotinas = SqliteRotinaRepository::new(pool.get_pool().clone());
    let saude = SqliteSaudeRepository::new(pool.get_pool().clone());

    let bia = children.create(&new_child("Bia")).await.unwrap();
    let caio = children.create(&new_child("Caio")).await.unwrap();
    let date = Utc.with_ymd_and_hms(2025, 5, 2, 15, 0, 0).unwrap();

    for child_id in [bia.id, caio.id, bia.id] {
        let rotina = NewRotina {
            date: None,
            child_id,
            meals: "Almoçou tudo".to_string(),
            sleep: "1h30".to_string(),
            activities: "Massinha".to_string(),
            notes: None,
        };
        rotinas.create(&rotina, date).await.unwrap();
    }
    let for_bia = rotinas.list(Some(bia.id), Pagination::default()).await.unwrap();
    assert_eq!(for_bia.len(), 2);
    assert!(for_bia.iter().all(|r| r.child_id == bia.id && r.date == date));
    assert_eq!(rotinas.list(None, Pagination::default()).await.unwrap().len(), 3);
    assert_eq!(rotinas.list(None, Pagination::new(2, 10)).await.unwrap().len(), 1);

    let record = NewSaudeRecord {
        date: None,
        child_id: caio.id,
        medication: None,
        symptoms: Some("Tosse".to_string()),
        notes: None,
        temperature: Some(37.8),
    };
    let stored = saude.create(&record, date).await.unwrap();
    assert_eq!(
        saude.list(Some(caio.id), Pagination::default()).await.unwrap(),
        vec![stored]
    );
    assert!(saude.list(Some(bia.id), Pagination::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rotina_for_missing_child_fails() {
    let pool = pool().await;
    let rotinas = SqliteRotinaRepository::new(pool.get_pool().clone());
    let rotina = NewRotina {
        date: None,
        child_id: 77,
        meals: String::new(),
        sleep: String::new(),
        activities: String::new(),
        notes: None,
    };
    assert!(matches!(
        rotinas.create(&rotina, Utc::now()).await,
        Err(DomainError::Internal { .. })
    ));
}

#[tokio::test]
async fn test_calendario_window() {
    let pool = pool().await;
    let repo = SqliteCalendarioRepository::new(pool.get_pool().clone());

    for (title, day) in [("Festa", 20), ("Feriado", 5), ("Reunião", 12)] {
        let evento = NewCalendarioEvento {
            title: title.to_string(),
            description: String::new(),
            start_date: Utc.with_ymd_and_hms(2025, 6, day, 8, 0, 0).unwrap(),
            end_date: None,
            all_day: day == 5,
            recurrence: None,
        };
        repo.create(&evento).await.unwrap();
    }

    let all = repo.list(&CalendarioFilter::default()).await.unwrap();
    let titles: Vec<_> = all.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Feriado", "Reunião", "Festa"]);
    assert!(all[0].all_day);

    let filter = CalendarioFilter {
        from: Some(Utc.with_ymd_and_hms(2025, 6, 12, 8, 0, 0).unwrap()),
        to: None,
    };
    let titles: Vec<_> = repo
        .list(&filter)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Reunião", "Festa"]);
}
