mod common;

use common::within;
use std::sync::Arc;
use viewmodel_kit::samples::{CounterIntent, CounterReducer, CounterState, CounterViewModel};
use viewmodel_kit::{StateContainer, Store};

#[test]
fn new_container_holds_initial_state() {
    let counter = CounterViewModel::with_initial(CounterState { count: 41 });
    assert_eq!(counter.current_state(), CounterState { count: 41 });
}

#[tokio::test]
async fn first_observed_value_equals_current_state() {
    let counter = CounterViewModel::new();
    counter.increment();

    let mut observer = counter.observe_state();
    assert_eq!(observer.next().await, Some(counter.current_state()));
}

#[tokio::test]
async fn late_subscriber_replays_latest_value() {
    let counter = CounterViewModel::new();
    for _ in 0..3 {
        counter.increment();
    }
    let mut observer = counter.observe_state();
    assert_eq!(observer.next().await, Some(CounterState { count: 3 }));
}

#[tokio::test]
async fn observer_receives_final_value_after_burst() {
    let counter = CounterViewModel::new();
    let mut observer = counter.observe_state();
    assert_eq!(observer.next().await, Some(CounterState { count: 0 }));

    for _ in 0..100 {
        counter.increment();
    }

    let mut last = None;
    while observer.has_changed() {
        last = within(observer.next()).await;
    }
    assert_eq!(last, Some(CounterState { count: 100 }));
}

#[tokio::test]
async fn burst_back_to_delivered_value_reports_no_change() {
    let counter = CounterViewModel::new();
    let mut observer = counter.observe_state();
    observer.next().await;

    counter.increment();
    counter.decrement();
    assert!(!observer.has_changed());

    counter.increment();
    let mut last = None;
    while observer.has_changed() {
        last = within(observer.next()).await;
    }
    assert_eq!(last, Some(CounterState { count: 1 }));
}

#[tokio::test]
async fn stepwise_updates_arrive_in_order() {
    let counter = CounterViewModel::new();
    let mut observer = counter.observe_state();
    observer.next().await;

    for expected in 1..=3 {
        counter.increment();
        assert_eq!(
            within(observer.next()).await,
            Some(CounterState { count: expected })
        );
    }
}

#[tokio::test]
async fn non_distinct_update_is_not_delivered() {
    let counter = CounterViewModel::new();
    let mut observer = counter.observe_state();
    observer.next().await;

    counter.reset();
    assert!(!observer.has_changed());
}

#[tokio::test]
async fn every_observer_sees_the_update() {
    let counter = CounterViewModel::new();
    let mut a = counter.observe_state();
    let mut b = counter.observe_state();
    a.next().await;
    b.next().await;

    counter.decrement();
    assert_eq!(within(a.next()).await, Some(CounterState { count: -1 }));
    assert_eq!(within(b.next()).await, Some(CounterState { count: -1 }));
}

#[tokio::test]
async fn concurrent_dispatch_applies_every_intent() {
    let store = Arc::new(Store::<CounterReducer>::default());
    let mut tasks = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        tasks.push(tokio::spawn(async move {
            for _ in 0..25 {
                store.dispatch(CounterIntent::Increment);
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
    assert_eq!(store.current_state().count, 200);
}

#[tokio::test]
async fn dropping_container_ends_observation() {
    let counter = CounterViewModel::new();
    let mut observer = counter.observe_state();
    observer.next().await;
    drop(counter);
    assert_eq!(within(observer.next()).await, None);
}

#[tokio::test]
async fn container_behind_arc_is_still_a_container() {
    let counter = Arc::new(CounterViewModel::new());
    counter.increment();
    let shared: Arc<CounterViewModel> = Arc::clone(&counter);
    assert_eq!(StateContainer::current_state(&shared).count, 1);
}
