//! Sort endpoint integration tests
//!
//! Both routes are exercised through the full application: routing,
//! middleware, body decoding, sorting and response encoding.

#[cfg(test)]
mod tests {
    use crate::common::{BatchFactory, SortedBatchAssertions};
    use crate::test_app;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use batchsort::Config;
    use batchsort::server::types::SortResponse;
    use serde_json::Value;

    const SINGLE: &str = "/process-single";
    const CONCURRENT: &str = "/process-concurrent";

    // ==================== Concrete Scenarios ====================

    /// Sequential scenario returns index-aligned sorted arrays
    #[actix_web::test]
    async fn test_single_concrete_scenario() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri(SINGLE)
            .set_payload(r#"{"to_sort": [[3,1,2],[5,4]]}"#)
            .to_request();

        let body: SortResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.sorted_arrays, vec![vec![1, 2, 3], vec![4, 5]]);
        assert!(body.time_ns >= 0);
    }

    /// Concurrent scenario returns the same arrays in either order
    #[actix_web::test]
    async fn test_concurrent_concrete_scenario() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri(CONCURRENT)
            .set_payload(r#"{"to_sort": [[3,1,2],[5,4]]}"#)
            .to_request();

        let body: SortResponse = test::call_and_read_body_json(&app, req).await;
        let first = vec![vec![1, 2, 3], vec![4, 5]];
        let second = vec![vec![4, 5], vec![1, 2, 3]];
        assert!(body.sorted_arrays == first || body.sorted_arrays == second);
        assert!(body.time_ns >= 0);
    }

    // ==================== Empty Batches ====================

    /// Empty batch encodes as an empty array, never null, on both routes
    #[actix_web::test]
    async fn test_empty_batch_both_modes() {
        let app = test_app!();

        for uri in [SINGLE, CONCURRENT] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_payload(r#"{"to_sort": []}"#)
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;

            assert_eq!(body["sorted_arrays"], serde_json::json!([]), "route {}", uri);
            assert!(body["time_ns"].as_i64().unwrap() >= 0);
        }
    }

    /// Missing key and null are accepted as empty batches
    #[actix_web::test]
    async fn test_missing_or_null_to_sort() {
        let app = test_app!();

        for payload in ["{}", r#"{"to_sort": null}"#] {
            let req = test::TestRequest::post()
                .uri(SINGLE)
                .set_payload(payload)
                .to_request();
            let body: SortResponse = test::call_and_read_body_json(&app, req).await;
            assert!(body.sorted_arrays.is_empty());
        }
    }

    // ==================== Properties ====================

    /// Sequential output is sorted and aligned with input
    #[actix_web::test]
    async fn test_single_random_batch_is_index_aligned() {
        let app = test_app!();
        let batch = BatchFactory::random(40, 200);

        let req = test::TestRequest::post()
            .uri(SINGLE)
            .set_payload(BatchFactory::request_body(&batch))
            .to_request();
        let body: SortResponse = test::call_and_read_body_json(&app, req).await;

        body.sorted_arrays.assert_all_sorted();
        body.sorted_arrays.assert_index_aligned_with(&batch);
    }

    /// Concurrent output is a permutation of the sorted inputs
    #[actix_web::test]
    async fn test_concurrent_random_batch_is_same_multiset() {
        let app = test_app!();
        let batch = BatchFactory::random(40, 200);

        let req = test::TestRequest::post()
            .uri(CONCURRENT)
            .set_payload(BatchFactory::request_body(&batch))
            .to_request();
        let body: SortResponse = test::call_and_read_body_json(&app, req).await;

        body.sorted_arrays.assert_all_sorted();
        body.sorted_arrays.assert_same_multiset_as(&batch);
    }

    /// Edge-case arrays survive a trip through both routes
    #[actix_web::test]
    async fn test_edge_case_arrays() {
        let app = test_app!();
        let batch = BatchFactory::edge_cases();

        for uri in [SINGLE, CONCURRENT] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_payload(BatchFactory::request_body(&batch))
                .to_request();
            let body: SortResponse = test::call_and_read_body_json(&app, req).await;

            body.sorted_arrays.assert_all_sorted();
            body.sorted_arrays.assert_same_multiset_as(&batch);
        }
    }

    /// Already-sorted arrays come back unchanged
    #[actix_web::test]
    async fn test_sorted_input_is_unchanged() {
        let app = test_app!();
        let batch = vec![vec![-3, 0, 0, 8], vec![1]];

        let req = test::TestRequest::post()
            .uri(SINGLE)
            .set_payload(BatchFactory::request_body(&batch))
            .to_request();
        let body: SortResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.sorted_arrays, batch);
    }

    /// Bounded fan-out gives the same result set
    #[actix_web::test]
    async fn test_concurrent_with_bounded_units() {
        let mut config = Config::default();
        config.service.sorter.max_concurrency = Some(2);
        let app = test_app!(config);
        let batch = BatchFactory::random(25, 50);

        let req = test::TestRequest::post()
            .uri(CONCURRENT)
            .set_payload(BatchFactory::request_body(&batch))
            .to_request();
        let body: SortResponse = test::call_and_read_body_json(&app, req).await;
        body.sorted_arrays.assert_same_multiset_as(&batch);
    }

    // ==================== Protocol ====================

    /// Success responses are JSON
    #[actix_web::test]
    async fn test_response_content_type() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri(CONCURRENT)
            .set_payload(BatchFactory::request_body(&BatchFactory::simple()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    /// Large bodies are accepted when no limit is configured
    #[actix_web::test]
    async fn test_large_body_accepted_by_default() {
        let app = test_app!();
        let batch = vec![(0..200_000).rev().collect::<Vec<i64>>()];

        let req = test::TestRequest::post()
            .uri(SINGLE)
            .set_payload(BatchFactory::request_body(&batch))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: SortResponse = test::read_body_json(resp).await;
        assert_eq!(body.sorted_arrays[0].first(), Some(&0));
        assert_eq!(body.sorted_arrays[0].last(), Some(&199_999));
    }
}
