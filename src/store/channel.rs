use std::fmt;

/// Handle returned by every `subscribe` call, used to unsubscribe again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Hands out subscription ids. Channels that share one allocator never
/// hand out the same id twice, so an id identifies its channel as well.
#[derive(Debug, Default)]
pub struct SubscriptionIds {
    next: u64,
}

impl SubscriptionIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> SubscriptionId {
        self.next += 1;
        SubscriptionId(self.next)
    }
}

/// Payload-less multicast notification.
///
/// `emit` calls every current subscriber in subscription order before it
/// returns. Nothing is remembered, so a subscriber added after an `emit`
/// does not see it.
#[derive(Default)]
pub struct EventChannel {
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut()>)>,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        ids: &mut SubscriptionIds,
        callback: impl FnMut() + 'static,
    ) -> SubscriptionId {
        let id = ids.next_id();
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn emit(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for EventChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Single-slot broadcast cell that replays its latest value.
///
/// `set` stores the value and hands it to every subscriber. A new
/// subscriber is called with the current value right away, if there is one.
pub struct LatestValue<T> {
    value: Option<T>,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T> Default for LatestValue<T> {
    fn default() -> Self {
        Self {
            value: None,
            subscribers: Vec::new(),
        }
    }
}

impl<T> LatestValue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set(&mut self, value: T) {
        let value = self.value.insert(value);
        for (_, callback) in self.subscribers.iter_mut() {
            callback(value);
        }
    }

    /// Forgets the stored value without notifying anyone.
    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn subscribe(
        &mut self,
        ids: &mut SubscriptionIds,
        mut callback: impl FnMut(&T) + 'static,
    ) -> SubscriptionId {
        if let Some(value) = &self.value {
            callback(value);
        }
        let id = ids.next_id();
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for LatestValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatestValue")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn event_channel_calls_in_subscription_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut ids = SubscriptionIds::new();
        let mut channel = EventChannel::new();

        let first = Rc::clone(&calls);
        channel.subscribe(&mut ids, move || first.borrow_mut().push("first"));
        let second = Rc::clone(&calls);
        channel.subscribe(&mut ids, move || second.borrow_mut().push("second"));

        channel.emit();
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_callbacks_are_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut ids = SubscriptionIds::new();
        let mut channel = EventChannel::new();
        let counter = Rc::clone(&count);
        let id = channel.subscribe(&mut ids, move || *counter.borrow_mut() += 1);

        channel.emit();
        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        channel.emit();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn latest_value_replays_only_the_last_value() {
        let mut ids = SubscriptionIds::new();
        let mut cell = LatestValue::new();
        cell.set(1);
        cell.set(2);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cell.subscribe(&mut ids, move |v: &i32| sink.borrow_mut().push(*v));
        cell.set(3);

        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert_eq!(cell.get(), Some(&3));
    }

    #[test]
    fn separate_allocators_start_over() {
        let mut first = SubscriptionIds::new();
        let mut second = SubscriptionIds::new();
        let a = first.next_id();
        assert_ne!(a, first.next_id());
        assert_eq!(a, second.next_id());
    }
}
