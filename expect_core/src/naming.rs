//! Display names derived from container and item ids

/// Items whose display name can't be derived from the id
const SPECIAL_ITEM_NAMES: &[(&str, &str)] = &[
    ("the_vault:carbon_nugget", "Raw Carbon"),
    ("the_vault:knowledge_star_essence", "Knowledge Essence"),
    ("the_vault:vault_god_charm", "God Charm"),
    ("the_vault:vault_necklace", "Vault Pendant"),
    ("the_vault:helmet", "Unidentified Helmet"),
    ("the_vault:chestplate", "Unidentified Chestplate"),
    ("the_vault:leggings", "Unidentified Leggings"),
    ("the_vault:boots", "Unidentified Boots"),
    ("the_vault:sword", "Unidentified Sword"),
    ("the_vault:axe", "Unidentified Axe"),
    ("the_vault:shield", "Unidentified Shield"),
    ("the_vault:wand", "Unidentified Wand"),
    ("the_vault:focus", "Unidentified Focus"),
    ("the_vault:magnet", "Unidentified Magnet"),
    ("sophisticatedbackpacks:backpack", "Pouch"),
];

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_case_words(raw: &str) -> String {
    raw.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Friendly label for a container id: "chest_wooden" -> "Wooden", "gilded_chest" -> "Gilded"
pub fn container_label(container_id: &str) -> String {
    let raw = container_id
        .strip_suffix("_chest")
        .or_else(|| container_id.strip_prefix("chest_"))
        .unwrap_or(container_id);
    title_case_words(raw)
}

/// Friendly name for a namespaced item id: "minecraft:diamond_sword" -> "Diamond Sword"
pub fn item_display_name(item_id: &str) -> String {
    if let Some((_, name)) = SPECIAL_ITEM_NAMES.iter().find(|(id, _)| *id == item_id) {
        return (*name).to_string();
    }

    let raw = item_id
        .split_once(':')
        .map_or(item_id, |(_, path)| path);
    title_case_words(raw)
}
