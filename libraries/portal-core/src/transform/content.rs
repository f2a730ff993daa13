/// Display labels for content items
use crate::types::ContentItem;

/// Label shown to users for a content/resource type pair.
///
/// A `Resource` is labelled by its resource type (Assessment, Certification,
/// ...) when it has one. Platform type names that differ from their display
/// names are renamed; any other type passes through unchanged.
pub fn display_content_type(content_type: Option<&str>, resource_type: Option<&str>) -> Option<String> {
    let content_type = content_type.filter(|c| !c.is_empty())?;
    let resource_type = resource_type.filter(|r| !r.is_empty());

    let label = match (content_type, resource_type) {
        ("Resource", Some(resource)) => resource,
        ("Collection", _) => "Module",
        ("Learning Path", _) => "Program",
        (other, _) => other,
    };
    Some(label.to_string())
}

/// Copy of `item` with its display label filled in
pub fn with_display_type(item: &ContentItem) -> ContentItem {
    ContentItem {
        display_content_type: display_content_type(
            item.content_type.as_deref(),
            item.resource_type.as_deref(),
        ),
        ..item.clone()
    }
}
