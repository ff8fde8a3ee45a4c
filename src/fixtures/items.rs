// fixtures/items.rs
//
// Builders for Item and ItemPage values plus a small catalogue of realistic
// lost-and-found postings.

use chrono::{Duration, TimeZone, Utc};

use crate::web_app::model::{Item, ItemId, ItemPage, ItemType, PostedBy};

/// A minimal item with the given id, type and name
pub fn item(id: &str, item_type: ItemType, name: &str) -> Item {
    Item {
        id: ItemId::from(id),
        item_type,
        item_name: name.to_string(),
        description: format!("{} reported at the office", name),
        location: "Main Building".to_string(),
        posted_by: Some(PostedBy {
            name: "Test User".to_string(),
        }),
        created_at: Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
        image_url: None,
        contact: None,
    }
}

pub fn page(items: Vec<Item>, total_items_count: u32) -> ItemPage {
    ItemPage {
        items,
        total_items_count,
    }
}

/// Catalogue of postings, newest first
pub fn catalogue() -> Vec<Item> {
    let entries = [
        ("1", ItemType::Lost, "Car Keys", "Silver keyring with a red tag", "Parking Lot B", "Asha"),
        ("2", ItemType::Found, "Company Laptop", "Grey laptop with a Bullwork sticker", "Meeting Room C", "Ravi"),
        ("3", ItemType::Lost, "Silver Watch", "Silver watch with a leather band", "Cafeteria", "Meera"),
        ("4", ItemType::Found, "Blue Umbrella", "Folding umbrella left at reception", "Reception", "Karan"),
        ("5", ItemType::Found, "Water Bottle", "Steel bottle, blue lid", "Gym", "Asha"),
        ("6", ItemType::Lost, "ID Card", "Employee badge on a black lanyard", "Assembly Line 2", "Vikram"),
        ("7", ItemType::Lost, "Headphones", "Wireless over-ear headphones", "Library", "Ravi"),
    ];

    let newest = Utc
        .with_ymd_and_hms(2024, 6, 10, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    entries
        .iter()
        .enumerate()
        .map(|(i, (id, item_type, name, description, location, poster))| Item {
            id: ItemId::from(*id),
            item_type: *item_type,
            item_name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            posted_by: Some(PostedBy {
                name: poster.to_string(),
            }),
            created_at: newest - Duration::hours(i as i64 * 5),
            image_url: (i % 2 == 0).then(|| format!("/uploads/item-{}.jpg", id)),
            contact: None,
        })
        .collect()
}

/// Slice `items` the way the listing endpoint does
pub fn slice_page(items: &[Item], skip: u32, take: u32) -> ItemPage {
    let start = (skip as usize).min(items.len());
    let end = start.saturating_add(take as usize).min(items.len());
    page(items[start..end].to_vec(), items.len() as u32)
}
