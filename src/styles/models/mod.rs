pub mod style_list;
pub mod style_suggestions;
