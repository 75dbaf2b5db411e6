//! Macro-generated test suite for the record and comment store contract.
//!
//! The `record_store_tests!` macro validates any store implementing
//! `RecordStore<NewsItem> + CommentStore`: CRUD, listing queries (checked
//! against the in-process engine), and the comment sub-resource.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get`, `test_get_nonexistent`, `test_list_empty`
//! - `test_list_keeps_insertion_order`
//! - `test_update_existing`, `test_update_nonexistent`
//! - `test_delete_existing`, `test_delete_nonexistent`
//!
//! ## Listing
//! - `test_query_week_example`: 5 records over 40 days, week window, 2 per page
//! - `test_query_matches_in_process_engine`: same page as `listing::run`
//! - `test_query_search_and_category`
//! - `test_query_equal_dates_keep_insertion_order`
//! - `test_query_clamps_page`, `test_query_empty_collection`
//!
//! ## Comments
//! - `test_comments_oldest_first`, `test_comment_on_missing_parent`
//! - `test_update_comment`, `test_delete_comment`, `test_comment_not_found`
//! - `test_delete_cascades_to_comments`

/// Generate a full `RecordStore<NewsItem> + CommentStore` conformance suite.
///
/// `$factory` must evaluate to an empty store. It is re-evaluated for each
/// test to ensure isolation.
#[macro_export]
macro_rules! record_store_tests {
    ($factory:expr) => {
        mod record_store_contract_tests {
            use super::*;
            use campus::core::entity::Record;
            use campus::core::listing;
            use campus::core::query::{DateRange, ListingQuery, SortKey};
            use campus::core::service::{CommentStore, RecordStore};
            use campus::entities::NewsItem;
            use uuid::Uuid;

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let store = $factory;
                let item = news_item("Exam timetable published", "Academic", &days_ago(1));
                let id = item.id;

                let created = store.create(item).await.unwrap();
                assert_eq!(created.id, id);

                let fetched = store.get(&id).await.unwrap().expect("record should exist");
                assert_eq!(fetched.id, id);
                assert_eq!(fetched.title, "Exam timetable published");
                assert_eq!(fetched.category, "Academic");
                assert_eq!(fetched.date.format("%Y-%m-%d").to_string(), days_ago(1));
                assert_eq!(fetched.author, "Campus Desk");
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                assert!(store.get(&Uuid::new_v4()).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                assert!(store.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_keeps_insertion_order() {
                let store = $factory;
                let stored = fill_news(&store).await;

                let listed = store.list().await.unwrap();
                assert_count(&listed, 5);
                assert_eq!(ids(&listed), ids(&stored));
            }

            #[tokio::test]
            async fn test_update_existing() {
                let store = $factory;
                let original = store
                    .create(news_item("Library hours", "Campus Life", &days_ago(2)))
                    .await
                    .unwrap();

                let mut replacement = news_item("Library hours extended", "Announcements", &days_ago(0));
                replacement.carry_over(&original);

                let updated = store.update(&original.id, replacement).await.unwrap();
                assert_eq!(updated.id, original.id);
                assert_eq!(updated.title, "Library hours extended");

                let fetched = store.get(&original.id).await.unwrap().unwrap();
                assert_eq!(fetched.title, "Library hours extended");
                assert_eq!(fetched.category, "Announcements");
                assert_count(&store.list().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory;
                let item = news_item("Ghost", "Academic", &days_ago(0));
                let id = item.id;

                let err = store.update(&id, item).await.unwrap_err();
                assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let stored = fill_news(&store).await;

                store.delete(&stored[1].id).await.unwrap();
                assert!(store.get(&stored[1].id).await.unwrap().is_none());

                let remaining = ids(&store.list().await.unwrap());
                assert_eq!(remaining, vec![stored[0].id, stored[2].id, stored[3].id, stored[4].id]);
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory;
                let err = store.delete(&Uuid::new_v4()).await.unwrap_err();
                assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
            }

            // ==================================================================
            // Listing
            // ==================================================================

            #[tokio::test]
            async fn test_query_week_example() {
                let store = $factory;
                let stored = fill_news(&store).await;

                let query = ListingQuery::default()
                    .with_date_range(DateRange::Week)
                    .with_sort(SortKey::DateDesc)
                    .with_page(1, 2);
                let page = store.query(&query, today()).await.unwrap();

                assert_eq!(ids(&page.items), vec![stored[0].id, stored[1].id]);
                assert_eq!(page.total(), 3);
                assert_eq!(page.pagination.total_pages, 2);
                assert!(page.pagination.has_next);
            }

            #[tokio::test]
            async fn test_query_matches_in_process_engine() {
                let store = $factory;
                fill_news(&store).await;
                let snapshot = store.list().await.unwrap();

                let queries = vec![
                    ListingQuery::default(),
                    ListingQuery::default().with_sort(SortKey::TitleAsc),
                    ListingQuery::default().with_sort(SortKey::TitleDesc).with_page(2, 2),
                    ListingQuery::default().with_sort(SortKey::DateAsc).with_page(3, 2),
                    ListingQuery::default().with_date_range(DateRange::Month),
                    ListingQuery::default().with_date_range(DateRange::Today),
                    ListingQuery::default().with_search("RESEARCH"),
                    ListingQuery::default().with_search("details"),
                    ListingQuery::default().with_category("campus life"),
                    ListingQuery::default().with_page(9, 3),
                ];

                for query in queries {
                    let expected = listing::run(&snapshot, &query, today());
                    let page = store.query(&query, today()).await.unwrap();
                    assert_eq!(ids(&page.items), ids(&expected.items), "items for {:?}", query);
                    assert_eq!(page.pagination, expected.pagination, "pagination for {:?}", query);
                }
            }

            #[tokio::test]
            async fn test_query_search_and_category() {
                let store = $factory;
                let stored = fill_news(&store).await;

                let query = ListingQuery::default().with_search("Grant");
                let page = store.query(&query, today()).await.unwrap();
                assert_eq!(ids(&page.items), vec![stored[3].id]);

                let query = ListingQuery::default().with_category("sports");
                let page = store.query(&query, today()).await.unwrap();
                assert_eq!(ids(&page.items), vec![stored[1].id]);

                let query = ListingQuery::default()
                    .with_category("Sports")
                    .with_search("library");
                let page = store.query(&query, today()).await.unwrap();
                assert!(page.is_empty());
                assert_eq!(page.total(), 0);
            }

            #[tokio::test]
            async fn test_query_equal_dates_keep_insertion_order() {
                let store = $factory;
                let first = store
                    .create(news_item("Same day A", "Academic", &days_ago(2)))
                    .await
                    .unwrap();
                let second = store
                    .create(news_item("Same day B", "Academic", &days_ago(2)))
                    .await
                    .unwrap();

                for sort in [SortKey::DateDesc, SortKey::DateAsc] {
                    let query = ListingQuery::default().with_sort(sort);
                    let page = store.query(&query, today()).await.unwrap();
                    assert_eq!(ids(&page.items), vec![first.id, second.id]);
                }
            }

            #[tokio::test]
            async fn test_query_clamps_page() {
                let store = $factory;
                let stored = fill_news(&store).await;

                let query = ListingQuery::default()
                    .with_sort(SortKey::DateDesc)
                    .with_page(99, 2);
                let page = store.query(&query, today()).await.unwrap();

                assert_eq!(page.pagination.page, 3);
                assert_eq!(ids(&page.items), vec![stored[4].id]);
                assert!(!page.pagination.has_next);
            }

            #[tokio::test]
            async fn test_query_empty_collection() {
                let store = $factory;
                let query = ListingQuery::default().with_page(4, 10);
                let page = store.query(&query, today()).await.unwrap();

                assert!(page.is_empty());
                assert_eq!(page.pagination.page, 1);
                assert_eq!(page.pagination.total_pages, 1);
                assert!(!page.pagination.has_next);
            }

            // ==================================================================
            // Comments
            // ==================================================================

            #[tokio::test]
            async fn test_comments_oldest_first() {
                let store = $factory;
                let parent = store
                    .create(news_item("Exam timetable", "Academic", &days_ago(1)))
                    .await
                    .unwrap();

                let mut added = Vec::new();
                for (author, text) in [("Ana", "First!"), ("Ben", "Thanks"), ("Cy", "When is the CS exam?")] {
                    let comment = store
                        .add_comment(&parent.id, author.to_string(), text.to_string())
                        .await
                        .unwrap();
                    assert_eq!(comment.parent_id, parent.id);
                    added.push(comment.id);
                }

                let listed: Vec<Uuid> = store
                    .comments(&parent.id)
                    .await
                    .unwrap()
                    .iter()
                    .map(|c| c.id)
                    .collect();
                assert_eq!(listed, added);
            }

            #[tokio::test]
            async fn test_comment_on_missing_parent() {
                let store = $factory;
                let err = store
                    .add_comment(&Uuid::new_v4(), "Ana".to_string(), "Hello".to_string())
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
            }

            #[tokio::test]
            async fn test_update_comment() {
                let store = $factory;
                let parent = store
                    .create(news_item("Exam timetable", "Academic", &days_ago(1)))
                    .await
                    .unwrap();
                let comment = store
                    .add_comment(&parent.id, "Ana".to_string(), "Tpyo".to_string())
                    .await
                    .unwrap();

                let edited = store
                    .update_comment(&parent.id, &comment.id, "Typo".to_string())
                    .await
                    .unwrap();
                assert_eq!(edited.id, comment.id);
                assert_eq!(edited.text, "Typo");
                assert_eq!(edited.author, "Ana");
                assert!(edited.updated_at.is_some());
            }

            #[tokio::test]
            async fn test_delete_comment() {
                let store = $factory;
                let parent = store
                    .create(news_item("Exam timetable", "Academic", &days_ago(1)))
                    .await
                    .unwrap();
                let keep = store
                    .add_comment(&parent.id, "Ana".to_string(), "Keep me".to_string())
                    .await
                    .unwrap();
                let drop = store
                    .add_comment(&parent.id, "Ben".to_string(), "Delete me".to_string())
                    .await
                    .unwrap();

                store.delete_comment(&parent.id, &drop.id).await.unwrap();
                let listed = store.comments(&parent.id).await.unwrap();
                assert_count(&listed, 1);
                assert_eq!(listed[0].id, keep.id);
            }

            #[tokio::test]
            async fn test_comment_not_found() {
                let store = $factory;
                let parent = store
                    .create(news_item("Exam timetable", "Academic", &days_ago(1)))
                    .await
                    .unwrap();

                let err = store
                    .update_comment(&parent.id, &Uuid::new_v4(), "text".to_string())
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "COMMENT_NOT_FOUND");

                let err = store
                    .delete_comment(&parent.id, &Uuid::new_v4())
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "COMMENT_NOT_FOUND");
            }

            #[tokio::test]
            async fn test_delete_cascades_to_comments() {
                let store = $factory;
                let parent = store
                    .create(news_item("Exam timetable", "Academic", &days_ago(1)))
                    .await
                    .unwrap();
                store
                    .add_comment(&parent.id, "Ana".to_string(), "Hello".to_string())
                    .await
                    .unwrap();

                store.delete(&parent.id).await.unwrap();
                let err = store.comments(&parent.id).await.unwrap_err();
                assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
            }
        }
    };
}
