//! Service-level tests for accounts and the ticket lifecycle, run against an
//! in-memory SQLite database without going through HTTP.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use support_portal::auth::accounts;
use support_portal::auth::jwt::Claims;
use support_portal::db::models::ticket::{Priority, TicketStatus};
use support_portal::db::models::user::{RegisterRequest, Role, User};
use support_portal::error::AppError;
use support_portal::tickets;

async fn setup_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");
    support_portal::db::migrate(&pool).await.expect("Migration failed");
    pool
}

fn request(username: &str, email: &str, role: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        confirm_password: None,
        role: role.map(str::to_string),
    }
}

fn claims_for(user: &User) -> Claims {
    Claims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role,
        jti: format!("test-{}", user.id),
        exp: usize::MAX,
        iat: 0,
    }
}

async fn user(db: &SqlitePool, username: &str, role: Role) -> Claims {
    let u = accounts::register(
        db,
        request(username, &format!("{}@example.com", username), Some(role.as_str())),
    )
    .await
    .expect("register");
    claims_for(&u)
}

// ── Accounts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_register_then_login() {
    let db = setup_db().await;
    let registered = accounts::register(&db, request("alice", "a@x.com", Some("client")))
        .await
        .expect("register");
    assert_eq!(registered.role, Role::Client);
    assert_ne!(registered.password, "secret1");

    let logged_in = accounts::login(&db, "alice", "secret1").await.expect("login");
    assert_eq!(logged_in.id, registered.id);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let db = setup_db().await;
    accounts::register(&db, request("alice", "a@x.com", None)).await.unwrap();
    let err = accounts::register(&db, request("alice", "other@x.com", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateUsername));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let db = setup_db().await;
    accounts::register(&db, request("alice", "a@x.com", None)).await.unwrap();
    let err = accounts::register(&db, request("bob", "a@x.com", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateEmail));
}

#[tokio::test]
async fn test_register_role_rules() {
    let db = setup_db().await;
    let blank = accounts::register(&db, request("alice", "a@x.com", Some(""))).await.unwrap();
    assert_eq!(blank.role, Role::Client);

    let support = accounts::register(&db, request("sam", "s@x.com", Some("support"))).await.unwrap();
    assert!(support.is_support());

    let err = accounts::register(&db, request("eve", "e@x.com", Some("admin")))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_login_failures() {
    let db = setup_db().await;
    accounts::register(&db, request("alice", "a@x.com", None)).await.unwrap();

    assert!(matches!(
        accounts::login(&db, "alice", "nope-nope").await.unwrap_err(),
        AppError::AuthFailed
    ));
    assert!(matches!(
        accounts::login(&db, "ghost", "secret1").await.unwrap_err(),
        AppError::AuthFailed
    ));
}

// ── Tickets ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_submit_sets_defaults() {
    let db = setup_db().await;
    let alice = user(&db, "alice", Role::Client).await;

    let ticket = tickets::submit(&db, &alice, "  T1  ", "D1", None).await.unwrap();
    assert_eq!(ticket.title, "T1");
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.priority, Priority::Medium);
    assert_eq!(ticket.user_id, alice.sub);
    assert_eq!(ticket.owner, "alice");
    assert!(ticket.assigned_to.is_none());
}

#[tokio::test]
async fn test_submit_rejects_bad_fields() {
    let db = setup_db().await;
    let alice = user(&db, "alice", Role::Client).await;

    let long_title = "x".repeat(101);
    for (title, description) in [("", "D"), ("T", "   "), (long_title.as_str(), "D")] {
        let err = tickets::submit(&db, &alice, title, description, Some("high"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Field(_)));
    }
    assert!(tickets::list_for(&db, &alice).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_for_scopes_by_role() {
    let db = setup_db().await;
    let alice = user(&db, "alice", Role::Client).await;
    let bob = user(&db, "bob", Role::Client).await;
    let sam = user(&db, "sam", Role::Support).await;

    tickets::submit(&db, &alice, "A1", "D", Some("low")).await.unwrap();
    tickets::submit(&db, &alice, "A2", "D", Some("high")).await.unwrap();
    tickets::submit(&db, &bob, "B1", "D", None).await.unwrap();

    let mine = tickets::list_for(&db, &alice).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|t| t.user_id == alice.sub));

    let bobs = tickets::list_for(&db, &bob).await.unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].title, "B1");

    assert_eq!(tickets::list_for(&db, &sam).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_view_access_rules() {
    let db = setup_db().await;
    let alice = user(&db, "alice", Role::Client).await;
    let bob = user(&db, "bob", Role::Client).await;
    let sam = user(&db, "sam", Role::Support).await;
    let ticket = tickets::submit(&db, &alice, "T1", "D1", None).await.unwrap();

    assert!(tickets::view(&db, &alice, ticket.id).await.is_ok());
    assert!(tickets::view(&db, &sam, ticket.id).await.is_ok());
    assert!(matches!(
        tickets::view(&db, &bob, ticket.id).await.unwrap_err(),
        AppError::AccessDenied(_)
    ));
    assert!(matches!(
        tickets::view(&db, &alice, ticket.id + 100).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_update_status_rules() {
    let db = setup_db().await;
    let alice = user(&db, "alice", Role::Client).await;
    let sam = user(&db, "sam", Role::Support).await;
    let ticket = tickets::submit(&db, &alice, "T1", "D1", Some("high")).await.unwrap();

    let err = tickets::update_status(&db, &alice, ticket.id, "closed").await.unwrap_err();
    assert!(matches!(err, AppError::AccessDenied(_)));

    let err = tickets::update_status(&db, &sam, ticket.id, "done").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidStatus { .. }));
    let unchanged = tickets::view(&db, &alice, ticket.id).await.unwrap();
    assert_eq!(unchanged.status, TicketStatus::Open);

    let updated = tickets::update_status(&db, &sam, ticket.id, "in_progress").await.unwrap();
    assert_eq!(updated.status, TicketStatus::InProgress);

    let err = tickets::update_status(&db, &sam, ticket.id + 100, "closed").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_closed_ticket_can_be_reopened() {
    let db = setup_db().await;
    let alice = user(&db, "alice", Role::Client).await;
    let sam = user(&db, "sam", Role::Support).await;
    let ticket = tickets::submit(&db, &alice, "T1", "D1", None).await.unwrap();

    tickets::update_status(&db, &sam, ticket.id, "closed").await.unwrap();
    assert_eq!(
        tickets::view(&db, &alice, ticket.id).await.unwrap().status,
        TicketStatus::Closed
    );

    let reopened = tickets::update_status(&db, &sam, ticket.id, "open").await.unwrap();
    assert_eq!(reopened.status, TicketStatus::Open);
}

#[tokio::test]
async fn test_assign_rules() {
    let db = setup_db().await;
    let alice = user(&db, "alice", Role::Client).await;
    let sam = user(&db, "sam", Role::Support).await;
    let ticket = tickets::submit(&db, &alice, "T1", "D1", None).await.unwrap();

    let err = tickets::assign(&db, &alice, ticket.id, Some(sam.sub)).await.unwrap_err();
    assert!(matches!(err, AppError::AccessDenied(_)));

    let err = tickets::assign(&db, &sam, ticket.id, Some(alice.sub)).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = tickets::assign(&db, &sam, ticket.id, Some(9999)).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let assigned = tickets::assign(&db, &sam, ticket.id, Some(sam.sub)).await.unwrap();
    assert_eq!(assigned.assigned_to, Some(sam.sub));
    assert_eq!(assigned.assignee.as_deref(), Some("sam"));

    let cleared = tickets::assign(&db, &sam, ticket.id, None).await.unwrap();
    assert!(cleared.assigned_to.is_none());

    let staff = support_portal::db::users::list_support(&db).await.unwrap();
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].username, "sam");
}
