//! Application-scoped typed publish/subscribe channel.
//!
//! Two cross-cutting signals flow through the bus: application-ready and
//! cache-invalidation requests. Channels are a closed enumerated set, and
//! the bus is owned by the application instance rather than being a
//! process-wide singleton, so independent app instances never observe
//! each other's events.

use crate::cache::CacheKey;
use std::cell::RefCell;
use std::rc::Rc;

/// Events carried by the bus.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// Published once, after the initial route dispatch completes.
    AppReady,
    /// Request to evict cached pages under the given key.
    CacheInvalidate(CacheKey),
}

impl AppEvent {
    /// The channel this event is delivered on.
    pub fn channel(&self) -> Channel {
        match self {
            Self::AppReady => Channel::AppReady,
            Self::CacheInvalidate(_) => Channel::CacheInvalidate,
        }
    }
}

/// The closed set of bus channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    AppReady,
    CacheInvalidate,
}

/// Handle for removing a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn(&AppEvent)>;

struct Subscriber {
    id: SubscriptionId,
    channel: Channel,
    callback: Callback,
}

/// Publish/subscribe bus for [`AppEvent`]s.
///
/// Interior mutability keeps `publish` callable through a shared handle,
/// which is how the router and application code both reach the same bus.
/// Delivery iterates over a snapshot of the subscriber list, so a
/// callback may subscribe or publish re-entrantly without upsetting an
/// in-flight delivery.
///
/// # Example
///
/// ```rust
/// use pageflow::events::{AppEvent, Channel, EventBus};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let bus = EventBus::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&seen);
/// bus.subscribe(Channel::AppReady, move |_event| {
///     counter.set(counter.get() + 1);
/// });
///
/// bus.publish(&AppEvent::AppReady);
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: RefCell<u64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for events on `channel`.
    pub fn subscribe<F>(&self, channel: Channel, callback: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + 'static,
    {
        let mut next_id = self.next_id.borrow_mut();
        let id = SubscriptionId(*next_id);
        *next_id += 1;
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            channel,
            callback: Rc::new(callback),
        });
        id
    }

    /// Remove a subscription. Returns whether it was present.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// Deliver `event` to every subscriber of its channel, in
    /// subscription order. Returns the number of callbacks invoked.
    pub fn publish(&self, event: &AppEvent) -> usize {
        let channel = event.channel();
        let matching: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.channel == channel)
            .map(|s| Rc::clone(&s.callback))
            .collect();

        for callback in &matching {
            callback(event);
        }
        matching.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell as StdRefCell;

    #[test]
    fn events_map_to_their_channels() {
        assert_eq!(AppEvent::AppReady.channel(), Channel::AppReady);
        assert_eq!(
            AppEvent::CacheInvalidate(CacheKey::from("index")).channel(),
            Channel::CacheInvalidate
        );
    }

    #[test]
    fn publish_reaches_only_the_matching_channel() {
        let bus = EventBus::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));

        let ready_log = Rc::clone(&log);
        bus.subscribe(Channel::AppReady, move |_| {
            ready_log.borrow_mut().push("ready");
        });

        let invalidate_log = Rc::clone(&log);
        bus.subscribe(Channel::CacheInvalidate, move |event| {
            if let AppEvent::CacheInvalidate(key) = event {
                invalidate_log.borrow_mut().push(if key.as_str() == "index" {
                    "invalidate-index"
                } else {
                    "invalidate-other"
                });
            }
        });

        assert_eq!(bus.publish(&AppEvent::AppReady), 1);
        assert_eq!(
            bus.publish(&AppEvent::CacheInvalidate(CacheKey::from("index"))),
            1
        );
        assert_eq!(*log.borrow(), vec!["ready", "invalidate-index"]);
    }

    #[test]
    fn delivery_preserves_subscription_order() {
        let bus = EventBus::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            bus.subscribe(Channel::AppReady, move |_| {
                log.borrow_mut().push(label);
            });
        }

        bus.publish(&AppEvent::AppReady);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));

        let subscriber_log = Rc::clone(&log);
        let id = bus.subscribe(Channel::AppReady, move |_| {
            subscriber_log.borrow_mut().push(());
        });

        bus.publish(&AppEvent::AppReady);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&AppEvent::AppReady);

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn subscriber_may_subscribe_reentrantly() {
        let bus = Rc::new(EventBus::new());

        let inner_bus = Rc::clone(&bus);
        bus.subscribe(Channel::AppReady, move |_| {
            inner_bus.subscribe(Channel::AppReady, |_| {});
        });

        bus.publish(&AppEvent::AppReady);
        assert_eq!(bus.subscriber_count(), 2);
    }
}
