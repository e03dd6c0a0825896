//! Static reference menu used by the tabular strategy.

use serde::Serialize;

/// One row of the static menu table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub name: &'static str,
    /// Price tier, 1 (cheap) to 3 (expensive)
    pub price_tier: u8,
    pub tags: &'static [&'static str],
}

impl MenuEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|t| self.has_tag(t))
    }
}

/// Tag vocabulary the table draws from.
pub const TAG_VOCABULARY: &[&str] = &[
    "rain", "cold", "hot", "stress", "soup", "alcohol", "lunch", "dinner", "late", "snack", "flex",
    "fresh", "greasy", "busy", "date", "sports",
];

/// Immutable menu table, shared freely across sessions.
#[rustfmt::skip]
pub static MENU_TABLE: &[MenuEntry] = &[
    // tier 1
    MenuEntry { name: "김밥 & 라면", price_tier: 1, tags: &["lunch", "late", "busy", "soup"] },
    MenuEntry { name: "제육덮밥", price_tier: 1, tags: &["lunch", "busy", "greasy"] },
    MenuEntry { name: "떡볶이", price_tier: 1, tags: &["stress", "snack", "late"] },
    MenuEntry { name: "순대국밥", price_tier: 1, tags: &["soup", "rain", "cold", "lunch", "dinner"] },
    MenuEntry { name: "편의점 도시락", price_tier: 1, tags: &["busy", "late", "lunch"] },
    MenuEntry { name: "토스트 & 커피", price_tier: 1, tags: &["snack", "busy"] },
    // tier 2
    MenuEntry { name: "마라탕", price_tier: 2, tags: &["soup", "stress", "dinner", "cold"] },
    MenuEntry { name: "해물파전 & 칼국수", price_tier: 2, tags: &["rain", "soup", "dinner", "alcohol"] },
    MenuEntry { name: "치킨", price_tier: 2, tags: &["dinner", "late", "alcohol", "sports", "greasy"] },
    MenuEntry { name: "돈까스", price_tier: 2, tags: &["lunch", "greasy"] },
    MenuEntry { name: "쌀국수", price_tier: 2, tags: &["soup", "lunch", "fresh"] },
    MenuEntry { name: "포케", price_tier: 2, tags: &["fresh", "lunch", "hot"] },
    MenuEntry { name: "족발", price_tier: 2, tags: &["late", "alcohol", "dinner", "sports"] },
    // tier 3
    MenuEntry { name: "오마카세", price_tier: 3, tags: &["flex", "date", "fresh", "dinner"] },
    MenuEntry { name: "한우 구이", price_tier: 3, tags: &["flex", "dinner", "alcohol", "date"] },
    MenuEntry { name: "랍스터 파스타", price_tier: 3, tags: &["date", "dinner", "flex"] },
    MenuEntry { name: "샤브샤브", price_tier: 3, tags: &["soup", "cold", "rain", "dinner"] },
    MenuEntry { name: "장어덮밥", price_tier: 3, tags: &["lunch", "flex", "hot"] },
    MenuEntry { name: "호텔 뷔페", price_tier: 3, tags: &["lunch", "flex", "stress"] },
];

/// Entries whose price tier matches exactly, in table order.
pub fn entries_for_tier(table: &[MenuEntry], tier: u8) -> impl Iterator<Item = &MenuEntry> {
    table.iter().filter(move |entry| entry.price_tier == tier)
}
