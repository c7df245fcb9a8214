//! SeaORM repository tests against in-memory SQLite

use contacts_service::contract::{ContactPatch, NewContact};
use contacts_service::domain::{BirthdayMatch, BirthdayWindow, ContactsRepository};
use contacts_service::infra::storage::repositories::SeaOrmContactsRepository;
use contacts_service::ContactsServiceModule;

mod common;
use common::{date, new_contact, print_test_header, sqlite_memory_db, TestAddressBook};

async fn create_test_repo() -> SeaOrmContactsRepository {
    SeaOrmContactsRepository::new(sqlite_memory_db().await)
}

async fn seed(repo: &SeaOrmContactsRepository, contacts: Vec<NewContact>) {
    for data in contacts {
        repo.create(&data).await.expect("Failed to seed contact");
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_round_trips() {
    let repo = create_test_repo().await;
    let book = TestAddressBook::new();

    print_test_header(
        "test_create_assigns_id_and_round_trips",
        &["Verify that inserted rows get store-assigned ids and read back unchanged."],
    );

    let ann = repo.create(&book.ann).await.expect("create ann");
    let bob = repo.create(&book.bob).await.expect("create bob");
    println!("   Ann: {:?}", ann);
    println!("   Bob: {:?}", bob);

    assert_ne!(ann.id, bob.id);
    assert_eq!(ann.first_name, book.ann.first_name);
    assert_eq!(ann.birthday, book.ann.birthday);

    let fetched = repo.find_by_id(ann.id).await.expect("find");
    assert_eq!(fetched, Some(ann));
}

#[tokio::test]
async fn test_find_missing_is_none() {
    let repo = create_test_repo().await;

    assert_eq!(repo.find_by_id(9999).await.expect("find"), None);
}

#[tokio::test]
async fn test_list_applies_offset_and_limit() {
    let repo = create_test_repo().await;
    let contacts: Vec<NewContact> = (0..6)
        .map(|i| {
            new_contact(
                &format!("First{}", i),
                "Last",
                &format!("p{}@x.com", i),
                date(1990, 1, 1),
            )
        })
        .collect();
    seed(&repo, contacts).await;

    let all = repo.list(0, 100).await.expect("list");
    assert_eq!(all.len(), 6);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let first_page = repo.list(0, 4).await.expect("list");
    assert_eq!(first_page.len(), 4);

    let skipped = repo.list(4, 4).await.expect("list");
    assert_eq!(skipped, all[4..].to_vec());

    assert!(repo.list(10, 4).await.expect("list").is_empty());
    assert!(repo.list(0, 0).await.expect("list").is_empty());
}

#[tokio::test]
async fn test_update_applies_only_present_fields() {
    let repo = create_test_repo().await;
    let book = TestAddressBook::new();
    let ann = repo.create(&book.ann).await.expect("create");

    print_test_header(
        "test_update_applies_only_present_fields",
        &["Verify partial updates against the real store."],
    );

    let patch = ContactPatch {
        last_name: Some("Park".to_string()),
        birthday: Some(date(1991, 6, 2)),
        ..Default::default()
    };
    let updated = repo
        .update(ann.id, &patch)
        .await
        .expect("update")
        .expect("contact exists");

    assert_eq!(updated.id, ann.id);
    assert_eq!(updated.first_name, "Ann");
    assert_eq!(updated.email, "ann@x.com");
    assert_eq!(updated.last_name, "Park");
    assert_eq!(updated.birthday, date(1991, 6, 2));

    let fetched = repo.find_by_id(ann.id).await.expect("find");
    assert_eq!(fetched, Some(updated));
}

#[tokio::test]
async fn test_update_with_empty_patch_returns_current_row() {
    let repo = create_test_repo().await;
    let book = TestAddressBook::new();
    let bob = repo.create(&book.bob).await.expect("create");

    let unchanged = repo
        .update(bob.id, &ContactPatch::default())
        .await
        .expect("update");

    assert_eq!(unchanged, Some(bob));
}

#[tokio::test]
async fn test_update_missing_is_none() {
    let repo = create_test_repo().await;

    let patch = ContactPatch {
        email: Some("ghost@x.com".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.update(77, &patch).await.expect("update"), None);
}

#[tokio::test]
async fn test_delete_returns_removed_row() {
    let repo = create_test_repo().await;
    let book = TestAddressBook::new();
    let carl = repo.create(&book.carl).await.expect("create");

    let deleted = repo.delete(carl.id).await.expect("delete");
    assert_eq!(deleted, Some(carl.clone()));

    assert_eq!(repo.find_by_id(carl.id).await.expect("find"), None);
    assert_eq!(repo.delete(carl.id).await.expect("delete"), None);
}

#[tokio::test]
async fn test_search_ann_scenario() {
    let repo = create_test_repo().await;
    let book = TestAddressBook::new();
    seed(&repo, vec![book.bob.clone(), book.carl.clone()]).await;
    let ann = repo.create(&book.ann).await.expect("create");

    print_test_header(
        "test_search_ann_scenario",
        &["Verify that search(\"Ann\") returns exactly the Ann Lee contact."],
    );

    let found = repo.search("Ann").await.expect("search");
    assert_eq!(found, vec![ann]);
}

#[tokio::test]
async fn test_search_ors_across_fields() {
    let repo = create_test_repo().await;
    seed(
        &repo,
        vec![
            new_contact("Mia", "Stone", "mia@corp.io", date(1990, 1, 1)),
            new_contact("Leo", "Corpus", "leo@home.net", date(1990, 1, 1)),
            new_contact("Ivy", "Ng", "ivy@home.net", date(1990, 1, 1)),
        ],
    )
    .await;

    let found = repo.search("orp").await.expect("search");
    let names: Vec<&str> = found.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Mia", "Leo"]);

    assert!(repo.search("zzz").await.expect("search").is_empty());
}

#[tokio::test]
async fn test_upcoming_birthdays_calendar_ignores_year() {
    let repo = create_test_repo().await;
    seed(
        &repo,
        vec![
            new_contact("Ann", "Lee", "ann@x.com", date(1990, 5, 1)),
            new_contact("Bob", "Smith", "bob@y.com", date(1975, 5, 5)),
            new_contact("Carl", "Diaz", "carl@z.org", date(2001, 5, 30)),
        ],
    )
    .await;

    print_test_header(
        "test_upcoming_birthdays_calendar_ignores_year",
        &["Window 2024-04-28 ..= 2024-05-05 matched on month/day."],
    );

    let window = BirthdayWindow::starting(date(2024, 4, 28), 7, BirthdayMatch::Calendar);
    let upcoming = repo.upcoming_birthdays(&window).await.expect("birthdays");
    let names: Vec<&str> = upcoming.iter().map(|c| c.first_name.as_str()).collect();

    assert_eq!(names, vec!["Ann", "Bob"]);
}

#[tokio::test]
async fn test_upcoming_birthdays_calendar_wraps_new_year() {
    let repo = create_test_repo().await;
    let book = TestAddressBook::new();
    seed(&repo, book.all()).await;

    let window = BirthdayWindow::starting(date(2024, 12, 28), 7, BirthdayMatch::Calendar);
    let upcoming = repo.upcoming_birthdays(&window).await.expect("birthdays");
    let names: Vec<&str> = upcoming.iter().map(|c| c.first_name.as_str()).collect();

    // Bob: Dec 31, Carl: Jan 3
    assert_eq!(names, vec!["Bob", "Carl"]);
}

#[tokio::test]
async fn test_upcoming_birthdays_leap_day_in_common_year() {
    let repo = create_test_repo().await;
    seed(
        &repo,
        vec![
            new_contact("Lea", "Pday", "lea@x.com", date(2000, 2, 29)),
            new_contact("Mar", "Ch", "mar@x.com", date(1999, 3, 10)),
        ],
    )
    .await;

    print_test_header(
        "test_upcoming_birthdays_leap_day_in_common_year",
        &["A Feb 29 birthday is listed when the window covers Feb 28 of a common year."],
    );

    let window = BirthdayWindow::starting(date(2025, 2, 25), 7, BirthdayMatch::Calendar);
    let upcoming = repo.upcoming_birthdays(&window).await.expect("birthdays");
    let names: Vec<&str> = upcoming.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Lea"]);

    // Window ends before Feb 28
    let window = BirthdayWindow::starting(date(2025, 2, 20), 7, BirthdayMatch::Calendar);
    assert!(repo.upcoming_birthdays(&window).await.expect("birthdays").is_empty());
}

#[tokio::test]
async fn test_upcoming_birthdays_exact_date_compares_full_date() {
    let repo = create_test_repo().await;
    seed(
        &repo,
        vec![
            new_contact("Ann", "Lee", "ann@x.com", date(1990, 5, 1)),
            new_contact("Dee", "Ray", "dee@x.com", date(2024, 5, 1)),
            new_contact("Eve", "Ode", "eve@x.com", date(2024, 5, 6)),
        ],
    )
    .await;

    let window = BirthdayWindow::starting(date(2024, 4, 28), 7, BirthdayMatch::ExactDate);
    let upcoming = repo.upcoming_birthdays(&window).await.expect("birthdays");
    let names: Vec<&str> = upcoming.iter().map(|c| c.first_name.as_str()).collect();

    assert_eq!(names, vec!["Dee"]);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = sqlite_memory_db().await;
    let module = ContactsServiceModule::default();

    module
        .migrate(&db)
        .await
        .expect("Second migration run should be a no-op");

    let repo = SeaOrmContactsRepository::new(db);
    let book = TestAddressBook::new();
    assert!(repo.create(&book.ann).await.is_ok());
}
