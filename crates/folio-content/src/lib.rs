//! Content models, fixture loading, and markdown rendering.
//!
//! # Modules
//!
//! - [`models`]: projects, posts, scripts, referrals, links, docs
//! - [`loader`]: [`ContentStore`], loaded from a content directory
//! - [`markdown`]: parse → highlight → sanitize → enhance
//! - [`frontmatter`]: YAML frontmatter splitting and parsing
//! - [`icon`]: the closed set of icons content may reference
//! - [`skills`], [`playlist`]: about-page skills and the link hub's tracks
//! - [`contact`]: contact form `mailto:` composition

#![doc = include_str!("../README.md")]

pub mod contact;
pub mod frontmatter;
pub mod icon;
pub mod loader;
pub mod markdown;
pub mod models;
pub mod playlist;
pub mod skills;

pub use contact::ContactMessage;
pub use icon::Icon;
pub use loader::ContentStore;
pub use markdown::{render, RenderOptions, RenderedDocument};
pub use models::{BlogPost, Collection, DocPage, FivemScript, LinkItem, Project, Referral};
pub use playlist::{Playlist, Track};
pub use skills::{Skill, SkillGroup};
