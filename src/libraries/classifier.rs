use crate::models::{Category, PoiTags};

/// Map raw tags to a semantic category.
///
/// First match wins and the rule order is load-bearing: a point tagged both
/// `amenity=cafe` and `shop=*` is a Cafe, not Shopping. Do not reorder.
pub fn classify(tags: &PoiTags) -> Category {
    let amenity = tags.amenity.as_deref();
    let leisure = tags.leisure.as_deref();
    let tourism = tags.tourism.as_deref();

    if matches!(amenity, Some("restaurant") | Some("fast_food")) {
        Category::Restaurant
    } else if matches!(amenity, Some("cafe")) {
        Category::Cafe
    } else if matches!(leisure, Some("park") | Some("garden")) {
        Category::Park
    } else if tags.shop.is_some() {
        Category::Shopping
    } else if matches!(amenity, Some("theatre") | Some("cinema")) {
        Category::Entertainment
    } else if matches!(tourism, Some("hotel")) {
        Category::Hotel
    } else if matches!(amenity, Some("bar") | Some("pub")) {
        Category::Bar
    } else if matches!(tourism, Some("museum")) {
        Category::Museum
    } else {
        Category::Other
    }
}

/// Pick a display name for a tagged point: the `name` tag verbatim when
/// present and non-empty, otherwise the first category-bearing tag value
/// capitalized (`fast_food` becomes `Fast food`). `None` means the point
/// carries nothing a human could be shown.
pub fn display_name(tags: &PoiTags) -> Option<String> {
    if let Some(name) = tags.name.as_deref() {
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    tags.amenity
        .as_deref()
        .or(tags.leisure.as_deref())
        .or(tags.tourism.as_deref())
        .or(tags.shop.as_deref())
        .map(capitalize)
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    capitalized.replace('_', " ")
}
