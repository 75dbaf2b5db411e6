//! Macro-generated test suite for the registration counter.
//!
//! The `registration_store_tests!` macro validates any store implementing
//! `RecordStore<Activity> + RegistrationStore`.
//!
//! # Generated Tests
//!
//! - `test_register_until_full`: seats count up, then `CAPACITY_EXCEEDED`
//! - `test_full_activity_unchanged`: capacity 10 with 10 taken rejects, count stays 10
//! - `test_zero_capacity_is_unlimited`
//! - `test_register_unknown_activity`
//! - `test_update_keeps_registration_count`
//! - `test_concurrent_registrations_never_overbook`: 20 tasks race for 5 places

/// Generate a `RecordStore<Activity> + RegistrationStore` conformance suite.
///
/// `$factory` must evaluate to an empty store that is `Clone + 'static` and
/// shares its state between clones.
#[macro_export]
macro_rules! registration_store_tests {
    ($factory:expr) => {
        mod registration_store_contract_tests {
            use super::*;
            use campus::core::entity::Record;
            use campus::core::service::{RecordStore, RegistrationStore};
            use uuid::Uuid;

            #[tokio::test]
            async fn test_register_until_full() {
                let store = $factory;
                let created = store.create(activity("Chess night", 2)).await.unwrap();

                let first = store.register(&created.id, "Ana".to_string()).await.unwrap();
                let second = store.register(&created.id, "Ben".to_string()).await.unwrap();
                assert_eq!((first.seat, second.seat), (1, 2));

                let err = store
                    .register(&created.id, "Cy".to_string())
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "CAPACITY_EXCEEDED");

                let stored = store.get(&created.id).await.unwrap().unwrap();
                assert_eq!(stored.registrations, 2);

                let names: Vec<String> = store
                    .registrations(&created.id)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|r| r.user_name)
                    .collect();
                assert_eq!(names, vec!["Ana".to_string(), "Ben".to_string()]);
            }

            #[tokio::test]
            async fn test_full_activity_unchanged() {
                let store = $factory;
                let mut full = activity("Basketball practice", 10);
                full.registrations = 10;
                let created = store.create(full).await.unwrap();

                let err = store
                    .register(&created.id, "Late".to_string())
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "CAPACITY_EXCEEDED");
                assert_eq!(
                    store.get(&created.id).await.unwrap().unwrap().registrations,
                    10
                );
                assert!(store.registrations(&created.id).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_zero_capacity_is_unlimited() {
                let store = $factory;
                let created = store.create(activity("Clean-up", 0)).await.unwrap();

                for n in 0..25 {
                    store
                        .register(&created.id, format!("Volunteer {}", n))
                        .await
                        .unwrap();
                }
                assert_eq!(
                    store.get(&created.id).await.unwrap().unwrap().registrations,
                    25
                );
            }

            #[tokio::test]
            async fn test_register_unknown_activity() {
                let store = $factory;
                let err = store
                    .register(&Uuid::new_v4(), "Ana".to_string())
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
            }

            #[tokio::test]
            async fn test_update_keeps_registration_count() {
                let store = $factory;
                let created = store.create(activity("Debate", 5)).await.unwrap();
                store.register(&created.id, "Ana".to_string()).await.unwrap();

                let previous = store.get(&created.id).await.unwrap().unwrap();
                let mut replacement = activity("Debate club meeting", 5);
                replacement.carry_over(&previous);
                store.update(&created.id, replacement).await.unwrap();

                let stored = store.get(&created.id).await.unwrap().unwrap();
                assert_eq!(stored.title, "Debate club meeting");
                assert_eq!(stored.registrations, 1);
            }

            #[tokio::test]
            async fn test_update_from_stale_read_keeps_live_count() {
                let store = $factory;
                let created = store.create(activity("Pottery", 1)).await.unwrap();

                let stale = store.get(&created.id).await.unwrap().unwrap();
                store.register(&created.id, "Ana".to_string()).await.unwrap();

                let mut replacement = activity("Pottery workshop", 1);
                replacement.carry_over(&stale);
                let updated = store.update(&created.id, replacement).await.unwrap();
                assert_eq!(updated.registrations, 1);
                assert_eq!(
                    store.get(&created.id).await.unwrap().unwrap().registrations,
                    1
                );

                let err = store
                    .register(&created.id, "Ben".to_string())
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "CAPACITY_EXCEEDED");
                assert_eq!(store.registrations(&created.id).await.unwrap().len(), 1);
            }

            #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
            async fn test_concurrent_registrations_never_overbook() {
                let store = $factory;
                let created = store.create(activity("Hackathon", 5)).await.unwrap();

                let mut handles = Vec::new();
                for n in 0..20 {
                    let store = store.clone();
                    let id = created.id;
                    handles.push(tokio::spawn(async move {
                        store.register(&id, format!("Student {}", n)).await
                    }));
                }

                let results = futures::future::join_all(handles).await;
                let accepted = results
                    .iter()
                    .filter(|joined| matches!(joined, Ok(Ok(_))))
                    .count();
                let rejected = results
                    .iter()
                    .filter(|joined| {
                        matches!(joined, Ok(Err(err)) if err.error_code() == "CAPACITY_EXCEEDED")
                    })
                    .count();
                assert_eq!(accepted, 5);
                assert_eq!(rejected, 15);

                assert_eq!(
                    store.get(&created.id).await.unwrap().unwrap().registrations,
                    5
                );
                let mut seats: Vec<u32> = store
                    .registrations(&created.id)
                    .await
                    .unwrap()
                    .iter()
                    .map(|r| r.seat)
                    .collect();
                seats.sort_unstable();
                assert_eq!(seats, vec![1, 2, 3, 4, 5]);
            }
        }
    };
}
