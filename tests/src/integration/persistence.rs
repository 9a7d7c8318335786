//! # Persistence Flows
//!
//! The service over `JsonFileListStore`: order written by one service
//! instance must be the order the next one loads.

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use tracing::Instrument;
    use todo_ordering::{
        JsonFileListStore, ListFilter, OrderingConfig, Placement, TodoListApi, TodoListService,
    };
    use todo_telemetry::{build_filter, init_logging, service_span, TelemetryConfig};

    #[tokio::test]
    async fn test_order_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");

        {
            let service = TodoListService::new(JsonFileListStore::new(&path));
            service.create_todo("water plants", Placement::Append).await.unwrap();
            service.create_todo("pay rent", Placement::Append).await.unwrap();
            service.create_todo("call mum", Placement::Prepend).await.unwrap();

            let list = service.list(ListFilter::All).await.unwrap();
            // call mum, water plants, pay rent -> drag pay rent onto call mum
            service.move_todo(&list[2].id, &list[0].id).await.unwrap();
        }

        let reopened = TodoListService::new(JsonFileListStore::new(&path));
        let list = reopened.list(ListFilter::All).await.unwrap();
        let contents: Vec<&str> = list.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["pay rent", "call mum", "water plants"]);
    }

    #[tokio::test]
    async fn test_custom_gap_is_used_for_new_items() {
        let dir = tempdir().unwrap();
        let config = OrderingConfig {
            gap: 10.0,
            base: 100.0,
            epsilon: 0.5,
        };
        let service =
            TodoListService::with_config(JsonFileListStore::new(dir.path().join("t.json")), config)
                .unwrap();

        let first = service.create_todo("a", Placement::Append).await.unwrap();
        let second = service.create_todo("b", Placement::Append).await.unwrap();

        assert_eq!(first.position.value(), 100.0);
        assert_eq!(second.position.value(), 110.0);
    }

    #[tokio::test]
    async fn test_service_runs_under_logging() {
        let config = TelemetryConfig {
            log_level: "todo_ordering=debug".to_string(),
            console_output: false,
            ..TelemetryConfig::default()
        };
        // Only one global subscriber per process; a parallel test may win
        let _ = init_logging(&config);
        let span = service_span(&config);

        let dir = tempdir().unwrap();
        let service = TodoListService::new(JsonFileListStore::new(dir.path().join("todos.json")));
        let item = service
            .create_todo("logged", Placement::default())
            .instrument(span)
            .await
            .unwrap();

        assert_eq!(item.content, "logged");
    }

    #[test]
    fn test_telemetry_filter_names_ordering_crate() {
        let config = TelemetryConfig {
            log_level: "todo_ordering=debug,warn".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(build_filter(&config).is_ok());
    }
}
