//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod content;
pub mod error;
pub mod tags;
pub mod filter;
pub mod catalog;
pub mod card;
pub mod nav;
pub mod timeline;

pub use types::{
    ContactInfo, ContactLink, ExperienceItem, Profile, ProjectRecord, SectionHeading,
    SiteContent, SocialLinks,
};
pub use error::{Error, Result};
pub use tags::{build_tag_index, TagIndex, ALL_TAG};
pub use filter::{filter_projects, FilterState};
pub use catalog::ProjectCatalog;
pub use card::{CardProps, ProjectCard};
pub use nav::{MenuState, Section};
pub use timeline::{timeline, TimelineEntry, TimelineSide};
