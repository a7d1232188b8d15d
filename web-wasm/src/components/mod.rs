pub mod contact_section;
pub mod experience_section;
pub mod footer;
pub mod header;
pub mod hero_section;
pub mod icons;
pub mod project_card;
pub mod projects_section;
