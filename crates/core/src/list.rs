//! The materialized, ordered view of the remote collection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::collation::compare_names;
use crate::id::ItemId;
use crate::item::{Item, StoredItem};

/// Raw collection as the store returns it: `null` or an object keyed by id.
pub type Snapshot = Option<BTreeMap<ItemId, StoredItem>>;

/// Items sorted ascending by name.
///
/// The order is recomputed from scratch every time a list is built; nothing
/// about it is persisted. The sort is stable, so items with identical names
/// keep the order they were mapped in (ascending key).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Map a store snapshot into an ordered list, taking each `id` from its key.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let items = snapshot
            .unwrap_or_default()
            .into_iter()
            .map(|(key, stored)| stored.into_item(key))
            .collect();
        Self::from_items(items)
    }

    pub fn from_items(mut items: Vec<Item>) -> Self {
        items.sort_by(|a, b| compare_names(&a.name, &b.name));
        Self { items }
    }

    /// Sum of `price * quantity` over every item.
    ///
    /// Derived on demand from the list it belongs to; an empty list totals 0.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Item::subtotal).sum()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Item> {
        self.items
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> ItemList {
        let snapshot: Snapshot = serde_json::from_value(value).unwrap();
        ItemList::from_snapshot(snapshot)
    }

    #[test]
    fn null_collection_is_empty_list() {
        let list = decode(json!(null));
        assert!(list.is_empty());
        assert_eq!(list.total(), 0.0);
    }

    #[test]
    fn bread_and_apples_scenario() {
        let list = decode(json!({
            "k1": {"name": "Bread", "price": 2, "quantity": 3},
            "k2": {"name": "Apples", "price": 1, "quantity": 5}
        }));

        let ids: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
        let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(ids, ["k2", "k1"]);
        assert_eq!(names, ["Apples", "Bread"]);
        assert_eq!(list.as_slice()[0].price, 1.0);
        assert_eq!(list.as_slice()[0].quantity, 5);
        assert_eq!(list.total(), 11.0);
    }

    #[test]
    fn equal_names_keep_key_order() {
        let list = decode(json!({
            "-b": {"name": "Milk", "price": 1},
            "-a": {"name": "Milk", "price": 2},
            "-c": {"name": "Bread", "price": 3}
        }));
        let ids: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["-c", "-a", "-b"]);
    }

    #[test]
    fn malformed_record_fails_decoding() {
        let res: Result<Snapshot, _> =
            serde_json::from_value(json!({"k1": {"name": "Bread", "quantity": 3}}));
        assert!(res.is_err());
    }

    #[test]
    fn get_finds_by_id() {
        let list = decode(json!({"k1": {"name": "Bread", "price": 2}}));
        let id: ItemId = "k1".parse().unwrap();
        assert_eq!(list.get(&id).map(|i| i.name.as_str()), Some("Bread"));
    }

    mod proptest_tests {
        use super::*;
        use core::cmp::Ordering;
        use proptest::prelude::*;

        fn snapshot_strategy() -> impl Strategy<Value = BTreeMap<String, (String, u32, u32)>> {
            prop::collection::btree_map(
                "-[A-Za-z0-9_]{1,12}",
                ("[A-Za-zÁÉÍÓÚáéíóúÑñ ]{0,12}", 0u32..10_000, 1u32..50),
                0..20,
            )
        }

        fn to_snapshot(raw: &BTreeMap<String, (String, u32, u32)>) -> Snapshot {
            Some(
                raw.iter()
                    .map(|(key, (name, cents, qty))| {
                        (
                            key.parse().unwrap(),
                            StoredItem {
                                name: name.clone(),
                                price: f64::from(*cents) / 100.0,
                                quantity: *qty,
                                checked: false,
                            },
                        )
                    })
                    .collect(),
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: one item per key, and every id is its source key.
            #[test]
            fn ids_match_keys(raw in snapshot_strategy()) {
                let list = ItemList::from_snapshot(to_snapshot(&raw));
                prop_assert_eq!(list.len(), raw.len());
                for item in &list {
                    prop_assert!(raw.contains_key(item.id.as_str()));
                }
            }

            /// Property: adjacent names never compare greater.
            #[test]
            fn list_is_sorted_by_name(raw in snapshot_strategy()) {
                let list = ItemList::from_snapshot(to_snapshot(&raw));
                for pair in list.as_slice().windows(2) {
                    prop_assert_ne!(compare_names(&pair[0].name, &pair[1].name), Ordering::Greater);
                }
            }

            /// Property: total is the sum of price * quantity over the list.
            #[test]
            fn total_is_sum_of_subtotals(raw in snapshot_strategy()) {
                let list = ItemList::from_snapshot(to_snapshot(&raw));
                let expected: f64 = raw
                    .values()
                    .map(|(_, cents, qty)| f64::from(*cents) / 100.0 * f64::from(*qty))
                    .sum();
                prop_assert!((list.total() - expected).abs() < 1e-6);
            }
        }
    }
}
