//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Ordered entities delegate
//! listing, lookup, deletion, and reordering to [`ordered::OrderedCollection`].

pub mod admin_user_repo;
pub mod content_section_repo;
pub mod faq_repo;
pub mod gallery_item_repo;
pub mod hero_slide_repo;
pub mod ordered;
pub mod site_settings_repo;
pub mod testimonial_repo;
pub mod tour_package_repo;

pub use admin_user_repo::AdminUserRepo;
pub use content_section_repo::ContentSectionRepo;
pub use faq_repo::FaqRepo;
pub use gallery_item_repo::GalleryItemRepo;
pub use hero_slide_repo::HeroSlideRepo;
pub use ordered::{MoveResult, OrderedCollection, OrderedRecord};
pub use site_settings_repo::SiteSettingsRepo;
pub use testimonial_repo::TestimonialRepo;
pub use tour_package_repo::TourPackageRepo;
