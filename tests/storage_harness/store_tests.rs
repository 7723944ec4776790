//! Macro-generated test suite for `MerchantStore` contract validation.
//!
//! The `merchant_store_tests!` macro generates a test module validating any
//! `MerchantStore` implementation against the full contract: creation with
//! id assignment, reads excluding soft-deleted rows, wholesale updates,
//! boolean not-found outcomes, filtered reads, and concurrent creates.
//!
//! The cached decorator runs the same suite as the plain in-memory store —
//! decoration must be observationally equivalent for the whole contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use merx::storage::InMemoryMerchantStore;
//!
//! merchant_store_tests!(InMemoryMerchantStore::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_assigns_id_and_stamps_record`
//! - `test_create_then_get_by_id`
//! - `test_get_by_id_nonexistent` — returns None, not an error
//! - `test_get_all_empty`
//! - `test_get_all_returns_every_active`
//! - `test_update_existing` — wholesale replace, visible on re-read
//! - `test_update_nonexistent` — returns false
//! - `test_soft_delete_hides_record` — get_all and get_by_id agree
//! - `test_delete_nonexistent` — returns false
//! - `test_delete_twice` — second delete reports absent
//!
//! ## Filtered reads
//! - `test_get_filtered_empty_composite_returns_all`
//! - `test_get_filtered_narrows_by_name_and_category`
//! - `test_get_filtered_excludes_deleted`
//!
//! ## Concurrency
//! - `test_concurrent_creates` — parallel creates all land

/// Generate a full `MerchantStore` conformance test suite.
///
/// `$factory` must be an expression evaluating to a `MerchantStore`
/// implementation. It is re-evaluated for each test to ensure isolation.
/// The concurrency test wraps the instance in an `Arc`, so no `Clone`
/// bound is required.
#[macro_export]
macro_rules! merchant_store_tests {
    ($factory:expr) => {
        mod merchant_store_contract_tests {
            use super::*;
            use std::sync::Arc;

            use futures::future::join_all;
            use merx::core::filter::CompositeFilter;
            use merx::core::merchant::filters;
            use merx::core::store::MerchantStore;

            // ==================================================================
            // CRUD — Create
            // ==================================================================

            #[tokio::test]
            async fn test_create_assigns_id_and_stamps_record() {
                let store = $factory;

                let created = store
                    .create(draft("Coffee Bean Cafe", "Food"))
                    .await
                    .unwrap();

                assert!(created.id > 0, "store must assign a positive id");
                assert_eq!(created.name, "Coffee Bean Cafe");
                assert_eq!(created.category, "Food");
                assert!(created.is_active());
                assert!(created.created_at <= chrono::Utc::now());
            }

            #[tokio::test]
            async fn test_create_then_get_by_id() {
                let store = $factory;
                let created = store
                    .create(draft("Coffee Bean Cafe", "Food"))
                    .await
                    .unwrap();

                let fetched = store.get_by_id(created.id).await.unwrap();

                assert_eq!(fetched, Some(created));
            }

            // ==================================================================
            // CRUD — Reads
            // ==================================================================

            #[tokio::test]
            async fn test_get_by_id_nonexistent() {
                let store = $factory;

                let fetched = store.get_by_id(424242).await.unwrap();

                assert!(fetched.is_none(), "absent id must read as None");
            }

            #[tokio::test]
            async fn test_get_all_empty() {
                let store = $factory;

                assert!(store.get_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_get_all_returns_every_active() {
                let store = $factory;
                for d in sample_drafts() {
                    store.create(d).await.unwrap();
                }

                let all = store.get_all().await.unwrap();

                assert_eq!(
                    sorted_names(&all),
                    vec!["Coffee Bean Cafe", "Hardware Hut", "Swift Movers"]
                );
            }

            // ==================================================================
            // CRUD — Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let store = $factory;
                let mut created = store
                    .create(draft("Coffee Bean Cafe", "Food"))
                    .await
                    .unwrap();

                created.name = "Bean There".to_string();
                created.category = "Retail".to_string();
                assert!(store.update(&created).await.unwrap());

                let fetched = store.get_by_id(created.id).await.unwrap().unwrap();
                assert_eq!(fetched.name, "Bean There");
                assert_eq!(fetched.category, "Retail");
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory;
                let mut ghost = store
                    .create(draft("Coffee Bean Cafe", "Food"))
                    .await
                    .unwrap();
                ghost.id += 1000;

                assert!(!store.update(&ghost).await.unwrap());
            }

            // ==================================================================
            // CRUD — Soft delete
            // ==================================================================

            #[tokio::test]
            async fn test_soft_delete_hides_record() {
                let store = $factory;
                let keep = store.create(draft("Hardware Hut", "Retail")).await.unwrap();
                let gone = store
                    .create(draft("Coffee Bean Cafe", "Food"))
                    .await
                    .unwrap();

                assert!(store.delete(gone.id).await.unwrap());

                let all = store.get_all().await.unwrap();
                assert_eq!(sorted_names(&all), vec!["Hardware Hut"]);
                assert!(store.get_by_id(gone.id).await.unwrap().is_none());
                assert!(store.get_by_id(keep.id).await.unwrap().is_some());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory;

                assert!(!store.delete(424242).await.unwrap());
            }

            #[tokio::test]
            async fn test_delete_twice() {
                let store = $factory;
                let created = store
                    .create(draft("Coffee Bean Cafe", "Food"))
                    .await
                    .unwrap();

                assert!(store.delete(created.id).await.unwrap());
                assert!(!store.delete(created.id).await.unwrap());
            }

            // ==================================================================
            // Filtered reads
            // ==================================================================

            #[tokio::test]
            async fn test_get_filtered_empty_composite_returns_all() {
                let store = $factory;
                for d in sample_drafts() {
                    store.create(d).await.unwrap();
                }

                let all = store
                    .get_filtered(&CompositeFilter::new())
                    .await
                    .unwrap();

                assert_eq!(all.len(), 3, "empty composite must pass every entity");
            }

            #[tokio::test]
            async fn test_get_filtered_narrows_by_name_and_category() {
                let store = $factory;
                for d in sample_drafts() {
                    store.create(d).await.unwrap();
                }
                store.create(draft("Cafe Paulista", "Retail")).await.unwrap();

                let mut composite = CompositeFilter::new();
                composite.add(filters::name_contains("cafe"));
                composite.add(filters::category_equals("Food"));

                let matched = store.get_filtered(&composite).await.unwrap();

                assert_eq!(sorted_names(&matched), vec!["Coffee Bean Cafe"]);
            }

            #[tokio::test]
            async fn test_get_filtered_excludes_deleted() {
                let store = $factory;
                let cafe = store
                    .create(draft("Coffee Bean Cafe", "Food"))
                    .await
                    .unwrap();
                store.create(draft("Cafe Paulista", "Retail")).await.unwrap();

                store.delete(cafe.id).await.unwrap();

                let matched = store
                    .get_filtered(filters::name_contains("cafe").as_ref())
                    .await
                    .unwrap();

                assert_eq!(sorted_names(&matched), vec!["Cafe Paulista"]);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_creates() {
                let store = Arc::new($factory);

                let tasks: Vec<_> = (0..8)
                    .map(|i| {
                        let store = store.clone();
                        tokio::spawn(async move {
                            store
                                .create(draft(&format!("Merchant {i}"), "Retail"))
                                .await
                                .unwrap()
                        })
                    })
                    .collect();
                let created: Vec<_> = join_all(tasks)
                    .await
                    .into_iter()
                    .map(|r| r.unwrap())
                    .collect();

                let mut ids: Vec<_> = created.iter().map(|m| m.id).collect();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), 8, "every create must get a distinct id");

                let all = store.get_all().await.unwrap();
                assert_eq!(all.len(), 8, "every concurrent create must land");
            }
        }
    };
}
