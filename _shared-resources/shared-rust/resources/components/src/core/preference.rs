// Preference Channel
// Upward size reporting from a child widget to the widget that owns it
//
// Usage:
//   let mut channel: SizePreferences<usize> = PreferenceChannel::new();
//   channel.report(0, Size::new(12.0, 1.0));
//   // Later, in the owner...
//   channel.on_preference_change(0, |size| item_sizes[0] = size);

use ratatui::layout::Rect;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Resolved size of a rendered area, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True while nothing has been measured yet
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        Self {
            width: f32::from(rect.width),
            height: f32::from(rect.height),
        }
    }
}

/// Merge rule for values reported through a preference channel
pub trait Preference {
    type Value: Copy + PartialEq + Default;

    /// Fold a newer report into the stored value
    fn reduce(value: &mut Self::Value, next: Self::Value);
}

/// Size preference: a newer report fully replaces the older one
#[derive(Debug, Clone, Copy)]
pub struct SizePreference;

impl Preference for SizePreference {
    type Value = Size;

    fn reduce(value: &mut Size, next: Size) {
        *value = next;
    }
}

#[derive(Debug, Clone, Copy)]
struct ChannelEntry<V> {
    value: V,
    /// Set when `value` differs from what was last delivered
    pending: bool,
}

/// Channel scoped to one widget subtree
/// Children report values keyed by a fixed identity, the owner subscribes per key
pub struct PreferenceChannel<K, P: Preference> {
    entries: HashMap<K, ChannelEntry<P::Value>>,
    _preference: PhantomData<P>,
}

/// Channel carrying measured sizes
pub type SizePreferences<K> = PreferenceChannel<K, SizePreference>;

impl<K, P> PreferenceChannel<K, P>
where
    K: Copy + Eq + Hash + Ord,
    P: Preference,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            _preference: PhantomData,
        }
    }

    /// Report a value for `key`
    /// Returns true if the merged value changed
    pub fn report(&mut self, key: K, next: P::Value) -> bool {
        let entry = self.entries.entry(key).or_insert(ChannelEntry {
            value: P::Value::default(),
            pending: false,
        });

        let mut merged = entry.value;
        P::reduce(&mut merged, next);
        if merged == entry.value {
            return false;
        }

        entry.value = merged;
        entry.pending = true;
        true
    }

    /// Current value for `key` (default if never reported)
    pub fn value(&self, key: K) -> P::Value {
        self.entries
            .get(&key)
            .map(|entry| entry.value)
            .unwrap_or_default()
    }

    /// Deliver an undelivered change for `key` to `callback`
    /// Returns true if the callback ran
    pub fn on_preference_change<F>(&mut self, key: K, callback: F) -> bool
    where
        F: FnOnce(P::Value),
    {
        match self.entries.get_mut(&key) {
            Some(entry) if entry.pending => {
                entry.pending = false;
                callback(entry.value);
                true
            }
            _ => false,
        }
    }

    /// Take every undelivered change, ordered by key
    pub fn drain_changes(&mut self) -> Vec<(K, P::Value)> {
        let mut changes: Vec<(K, P::Value)> = self
            .entries
            .iter_mut()
            .filter(|(_, entry)| entry.pending)
            .map(|(key, entry)| {
                entry.pending = false;
                (*key, entry.value)
            })
            .collect();
        changes.sort_by(|a, b| a.0.cmp(&b.0));
        changes
    }

    /// Whether any key has an undelivered change
    pub fn has_pending(&self) -> bool {
        self.entries.values().any(|entry| entry.pending)
    }

    /// Drop every stored value
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Clone, P: Preference> Clone for PreferenceChannel<K, P> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _preference: PhantomData,
        }
    }
}

impl<K: fmt::Debug, P: Preference> fmt::Debug for PreferenceChannel<K, P>
where
    P::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceChannel")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<K, P> Default for PreferenceChannel<K, P>
where
    K: Copy + Eq + Hash + Ord,
    P: Preference,
{
    fn default() -> Self {
        Self::new()
    }
}
