//! # Integration Test Flows
//!
//! The service writes through `InMemoryListStore`, the store pushes whole
//! snapshots through the feed, and a `LiveList` on the consumer side is the
//! list the next drag is computed against.
//!
//! ## Flow Tested:
//!
//! 1. **Create → Snapshot**: every committed write yields one newer snapshot
//! 2. **Drag → Snapshot → Drag**: moves computed against the live copy
//! 3. **Failed write**: nothing is published, the live copy stays valid
//! 4. **Filtered view**: hidden items keep their keys across the feed
//! 5. **Slow consumer**: writes never wait on the feed; the newest snapshot
//!    still arrives

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use todo_ordering::{
        check_list, snapshot_channel, InMemoryListStore, ItemId, ListFilter, ListSnapshot,
        LiveList, OrderingError, Placement, SnapshotSubscription, StoreError, TodoListApi,
        TodoListService,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn service_with_feed() -> (TodoListService<InMemoryListStore>, SnapshotSubscription) {
        let (publisher, subscription) = snapshot_channel(64);
        let store = InMemoryListStore::new().with_publisher(publisher);
        (TodoListService::new(store), subscription)
    }

    async fn next_snapshot(subscription: &mut SnapshotSubscription) -> std::sync::Arc<ListSnapshot> {
        timeout(Duration::from_millis(200), subscription.recv())
            .await
            .expect("timeout waiting for snapshot")
            .expect("feed closed")
    }

    /// Drain everything buffered into `live`
    fn sync(live: &mut LiveList, subscription: &mut SnapshotSubscription) {
        if let Some(snapshot) = subscription.latest().expect("feed closed") {
            live.apply(&snapshot);
        }
    }

    fn contents(live: &LiveList) -> Vec<String> {
        live.items().iter().map(|t| t.content.clone()).collect()
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_each_write_publishes_newer_snapshot() {
        let (service, mut subscription) = service_with_feed();

        service.create_todo("one", Placement::Append).await.unwrap();
        service.create_todo("two", Placement::Append).await.unwrap();

        let first = next_snapshot(&mut subscription).await;
        let second = next_snapshot(&mut subscription).await;
        assert!(second.version > first.version);
        assert_eq!(second.len(), 2);
        assert_eq!(second.items[0].content, "one");
    }

    #[tokio::test]
    async fn test_drag_sequence_against_live_copy() {
        let (service, mut subscription) = service_with_feed();
        let mut live = LiveList::new();

        for text in ["A", "B", "C", "D"] {
            service.create_todo(text, Placement::Append).await.unwrap();
        }
        sync(&mut live, &mut subscription);
        assert_eq!(contents(&live), vec!["A", "B", "C", "D"]);

        // Drag A onto C (forward): lands after C
        let a = live.items()[0].id.clone();
        let c = live.items()[2].id.clone();
        service.move_todo(&a, &c).await.unwrap();
        sync(&mut live, &mut subscription);
        assert_eq!(contents(&live), vec!["B", "C", "A", "D"]);

        // Drag D onto B (backward, B is first): lands before B
        let d = live.items()[3].id.clone();
        let b = live.items()[0].id.clone();
        service.move_todo(&d, &b).await.unwrap();
        sync(&mut live, &mut subscription);
        assert_eq!(contents(&live), vec!["D", "B", "C", "A"]);

        assert!(check_list(live.items()).is_ok());
    }

    #[tokio::test]
    async fn test_repeated_splits_trigger_rebalance_through_feed() {
        let (service, mut subscription) = service_with_feed();
        let mut live = LiveList::new();

        for text in ["first", "second", "third"] {
            service.create_todo(text, Placement::Append).await.unwrap();
        }

        // Keep dropping the last item between the first two until the gap
        // collapses; order must stay valid throughout
        let mut rebalanced = false;
        for _ in 0..40 {
            sync(&mut live, &mut subscription);
            let items = live.items();
            let dragged = items[items.len() - 1].id.clone();
            let target = items[1].id.clone();
            let outcome = service.move_todo(&dragged, &target).await.unwrap();
            rebalanced |= outcome.is_rebalanced();
        }
        sync(&mut live, &mut subscription);

        assert!(rebalanced);
        assert_eq!(live.items().len(), 3);
        assert!(check_list(live.items()).is_ok());
    }

    #[tokio::test]
    async fn test_undrained_feed_does_not_block_creates() {
        let (publisher, mut subscription) = snapshot_channel(1);
        let service = TodoListService::new(InMemoryListStore::new().with_publisher(publisher));

        service.create_todo("first", Placement::Append).await.unwrap();
        for text in ["second", "third"] {
            let created = timeout(
                Duration::from_millis(500),
                service.create_todo(text, Placement::Append),
            )
            .await;
            assert!(matches!(created, Ok(Ok(_))), "create of {text} stalled");
        }

        let mut live = LiveList::new();
        sync(&mut live, &mut subscription);
        assert_eq!(contents(&live), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_subscription_as_stream() {
        let (service, subscription) = service_with_feed();
        let mut stream = subscription.map(|snapshot| snapshot.len());

        service.create_todo("A", Placement::Append).await.unwrap();
        service.create_todo("B", Placement::Append).await.unwrap();

        let first = timeout(Duration::from_millis(200), stream.next())
            .await
            .expect("timeout");
        let second = timeout(Duration::from_millis(200), stream.next())
            .await
            .expect("timeout");
        assert_eq!((first, second), (Some(1), Some(2)));

        drop(service);
        let end = timeout(Duration::from_millis(200), stream.next())
            .await
            .expect("timeout");
        assert_eq!(end, None);
    }

    #[tokio::test]
    async fn test_failed_write_publishes_nothing() {
        let (publisher, mut subscription) = snapshot_channel(8);
        let store = InMemoryListStore::new().with_publisher(publisher);
        let service = TodoListService::new(store);
        let mut live = LiveList::new();

        service.create_todo("A", Placement::Append).await.unwrap();
        service.create_todo("B", Placement::Append).await.unwrap();
        sync(&mut live, &mut subscription);
        let before = live.version();

        service.store().set_reject_writes(true);
        let a = live.items()[0].id.clone();
        let b = live.items()[1].id.clone();
        let result = service.move_todo(&a, &b).await;

        assert!(matches!(
            result,
            Err(OrderingError::Store(StoreError::Unavailable(_)))
        ));
        assert!(subscription.try_recv().unwrap().is_none());
        assert_eq!(live.version(), before);
        assert_eq!(contents(&live), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_filtered_drag_leaves_completed_items_alone() {
        let (service, mut subscription) = service_with_feed();
        let mut live = LiveList::new();

        for text in ["A", "B", "C", "D"] {
            service.create_todo(text, Placement::Append).await.unwrap();
        }
        sync(&mut live, &mut subscription);
        let ids: Vec<ItemId> = live.items().iter().map(|t| t.id.clone()).collect();
        service.toggle_completed(&ids[1]).await.unwrap();
        sync(&mut live, &mut subscription);
        let hidden_key = live.items()[1].position;

        // Active view is A, C, D; drag D onto A
        service
            .move_todo_in_view(ListFilter::Active, &ids[3], &ids[0])
            .await
            .unwrap();
        sync(&mut live, &mut subscription);

        let active: Vec<&str> = live
            .view(ListFilter::Active)
            .into_iter()
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(active, vec!["D", "A", "C"]);
        let b = live.items().iter().find(|t| t.id == ids[1]).unwrap();
        assert_eq!(b.position, hidden_key);
        assert_eq!(live.items_left(), 3);
    }

    #[tokio::test]
    async fn test_clear_completed_flow() {
        let (service, mut subscription) = service_with_feed();
        let mut live = LiveList::new();

        for text in ["A", "B", "C"] {
            service.create_todo(text, Placement::Append).await.unwrap();
        }
        sync(&mut live, &mut subscription);
        let ids: Vec<ItemId> = live.items().iter().map(|t| t.id.clone()).collect();
        service.toggle_completed(&ids[0]).await.unwrap();
        service.toggle_completed(&ids[2]).await.unwrap();

        assert_eq!(service.clear_completed().await.unwrap(), 2);
        sync(&mut live, &mut subscription);

        assert_eq!(contents(&live), vec!["B"]);
        assert_eq!(service.items_left().await.unwrap(), 1);
    }
}
