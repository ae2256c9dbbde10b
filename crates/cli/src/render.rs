//! Plain-text rendering of the list for the terminal.

use std::fmt::Write as _;

use shoplist_core::ItemList;
use shoplist_store::Notice;

pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn notice(notice: Notice) -> String {
    format!("✓ {}", notice.message())
}

/// One line per item in list order, then the total.
pub fn table(list: &ItemList) -> String {
    let mut out = String::new();
    if list.is_empty() {
        out.push_str("(empty)\n");
    }

    let name_width = list.iter().map(|i| i.name.chars().count()).max().unwrap_or(0);
    for item in list {
        let mark = if item.checked { "x" } else { " " };
        let _ = writeln!(
            out,
            "[{mark}] {name:<width$}  {qty:>4} x {price:>9}  = {sub:>10}  ({id})",
            name = item.name,
            width = name_width,
            qty = item.quantity,
            price = money(item.price),
            sub = money(item.subtotal()),
            id = item.id,
        );
    }
    let _ = writeln!(out, "total: {}", money(list.total()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_core::Item;

    fn item(id: &str, name: &str, price: f64, quantity: u32) -> Item {
        Item::new(id.parse().unwrap(), name, price, quantity).unwrap()
    }

    #[test]
    fn empty_list_shows_zero_total() {
        assert_eq!(table(&ItemList::empty()), "(empty)\ntotal: 0.00\n");
    }

    #[test]
    fn rows_follow_list_order_and_total_is_last() {
        let list = ItemList::from_items(vec![
            item("k1", "Bread", 2.0, 3),
            item("k2", "Apples", 1.0, 5).with_checked(true),
        ]);
        let rendered = table(&list);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[x] Apples"));
        assert!(lines[0].ends_with("(k2)"));
        assert!(lines[1].starts_with("[ ] Bread"));
        assert_eq!(lines[2], "total: 11.00");
    }

    #[test]
    fn notice_line() {
        assert_eq!(notice(Notice::ItemAdded), "✓ Item agregado");
    }
}
