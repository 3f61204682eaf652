pub mod find_tag_by_title;
pub mod most_used_tags;
pub mod tags_for_item;
